//! Client-side building blocks for the humanize tool: the HTTP client for
//! `POST /api/humanize`, similarity statistics, and transient notifications.

pub mod client;
pub mod error;
pub mod notification;
pub mod stats;

pub use client::{interpret_response, HumanizeClient, HumanizeTransport};
pub use error::{HumanizeError, FALLBACK_ERROR_MESSAGE, GENERIC_FAILURE_MESSAGE};
pub use notification::{Notification, NOTIFICATION_TTL};
pub use stats::{compute_stats, format_count, StatsSnapshot};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
