//! The three screens of the app. Each view owns its state and is rebuilt
//! (or re-activated) on every navigation, so nothing is cached between them.

pub mod create;
pub mod detail;
pub mod list;

#[cfg(test)]
pub(crate) mod testing;

pub use create::CreateView;
pub use detail::{DetailState, DetailView, Review};
pub use list::{ListState, ListView};

use chrono::{DateTime, Local, Utc};

/// Formats a revision date as YYYY-MM-DD in local time
pub fn format_revision_date(date: DateTime<Utc>) -> String {
    let local: DateTime<Local> = date.into();
    local.format("%Y-%m-%d").to_string()
}
