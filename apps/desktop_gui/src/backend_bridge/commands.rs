//! Backend commands queued from UI to backend worker.

use shared::domain::RequestId;

pub enum BackendCommand {
    Humanize { request_id: RequestId, text: String },
}
