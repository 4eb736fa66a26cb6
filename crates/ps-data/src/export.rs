//! CSV dump of a generated [`Dataset`].
//!
//! Creates three files in the target directory:
//! - `facilities.csv`
//! - `meters.csv`
//! - `permit_blocks.csv`
//!
//! List-valued columns (features, payment methods) are `;`-joined.

use std::path::Path;

use csv::Writer;

use crate::{DataResult, Dataset};

pub const FACILITIES_FILE: &str = "facilities.csv";
pub const METERS_FILE:     &str = "meters.csv";
pub const PERMITS_FILE:    &str = "permit_blocks.csv";

/// Write all three tables into `dir`, creating it if needed.
pub fn write_csv(dir: &Path, dataset: &Dataset) -> DataResult<()> {
    std::fs::create_dir_all(dir)?;
    write_facilities(dir, dataset)?;
    write_meters(dir, dataset)?;
    write_permits(dir, dataset)?;
    Ok(())
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(";")
}

fn write_facilities(dir: &Path, dataset: &Dataset) -> DataResult<()> {
    let mut w = Writer::from_path(dir.join(FACILITIES_FILE))?;
    w.write_record([
        "id", "name", "type", "operator", "latitude", "longitude", "total_spots",
        "available_spots", "hourly_rate", "daily_max", "hours", "features",
        "payment_methods", "phone", "address",
    ])?;
    for f in &dataset.facilities {
        w.write_record(&[
            f.id.to_string(),
            f.name.clone(),
            f.kind.to_string(),
            f.operator.clone(),
            f.position.lat.to_string(),
            f.position.lon.to_string(),
            f.total_spots.to_string(),
            f.available_spots.to_string(),
            format!("{:.2}", f.hourly_rate),
            format!("{:.2}", f.daily_max),
            f.hours.clone(),
            join(&f.features),
            join(&f.payment_methods),
            f.phone.clone(),
            f.address.clone(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

fn write_meters(dir: &Path, dataset: &Dataset) -> DataResult<()> {
    let mut w = Writer::from_path(dir.join(METERS_FILE))?;
    w.write_record([
        "id", "meter_number", "street_name", "block_number", "side", "latitude",
        "longitude", "rate_per_hour", "time_limit_hours", "enforcement_days",
        "enforcement_hours", "meter_type", "payment_methods", "operational_status",
        "zone", "zone_description", "mobile_zone_number",
    ])?;
    for m in &dataset.meters {
        w.write_record(&[
            m.id.to_string(),
            m.meter_number.to_string(),
            m.street.clone(),
            m.block.to_string(),
            m.side.to_string(),
            m.position.lat.to_string(),
            m.position.lon.to_string(),
            format!("{:.2}", m.rate_per_hour),
            m.time_limit_hours.to_string(),
            m.enforcement.days.clone(),
            m.enforcement.hours_label(),
            m.meter_type.to_string(),
            join(&m.payment_methods),
            m.status.to_string(),
            m.zone.clone(),
            m.zone_description.clone(),
            m.mobile_zone.clone(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

fn write_permits(dir: &Path, dataset: &Dataset) -> DataResult<()> {
    let mut w = Writer::from_path(dir.join(PERMITS_FILE))?;
    w.write_record([
        "id", "neighborhood", "permit_zone", "street_name", "block_number", "block_side",
        "latitude", "longitude", "permit_required", "permit_type", "permit_cost_annual",
        "time_restrictions", "visitor_parking_allowed", "max_visitor_hours",
        "estimated_spaces",
    ])?;
    for p in &dataset.permits {
        w.write_record(&[
            p.id.to_string(),
            p.neighborhood.clone(),
            p.zone_label(),
            p.street.clone(),
            p.block.to_string(),
            p.side.to_string(),
            p.position.lat.to_string(),
            p.position.lon.to_string(),
            p.permit_required.to_string(),
            p.permit_type.clone(),
            p.permit_cost_annual.to_string(),
            p.time_restrictions.to_string(),
            p.visitor.allowed().to_string(),
            p.visitor.max_hours().map_or_else(|| "unlimited".to_owned(), |h| h.to_string()),
            p.estimated_spaces.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
