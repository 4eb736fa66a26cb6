//! `ps-reports` — crowd reports for one user session.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`report`]  | `Report`, `ReportStatus`, `ReporterToken`                 |
//! | [`store`]   | `ReportStore` — append-only log with a per-location index |
//! | [`summary`] | `ReportSummary` and its status / confidence / trend tags  |
//! | [`feed`]    | `recent_feed` output: `Feed`, `FeedFilter`, `FeedStats`   |
//!
//! Every operation here is total: submissions always succeed, and reads of
//! an unknown location return an empty result.

pub mod feed;
pub mod report;
pub mod store;
pub mod summary;


pub use feed::{Feed, FeedEntry, FeedFilter, FeedStats, age_label};
pub use report::{Report, ReportStatus, ReporterToken};
pub use store::{DEFAULT_SUMMARY_HOURS, ReportStore};
pub use summary::{ReportSummary, SummaryConfidence, SummaryStatus, Trend, window_start};
