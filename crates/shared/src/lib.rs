//! Types shared between the humanize service and its clients.

pub mod domain;
pub mod error;
pub mod protocol;
