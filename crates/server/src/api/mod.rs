use std::sync::Arc;

use humanizer::Humanizer;
use shared::{
    error::{ApiError, ErrorCode},
    protocol::HumanizeResponse,
};
use tokio::sync::Mutex;
use tracing::debug;

pub const NO_TEXT_PROVIDED: &str = "No text provided";

#[derive(Clone)]
pub struct ApiContext {
    pub humanizer: Arc<Mutex<Humanizer>>,
}

impl ApiContext {
    pub fn new(humanizer: Humanizer) -> Self {
        Self {
            humanizer: Arc::new(Mutex::new(humanizer)),
        }
    }
}

pub async fn humanize(ctx: &ApiContext, text: &str) -> Result<HumanizeResponse, ApiError> {
    if text.trim().is_empty() {
        return Err(ApiError::new(ErrorCode::Validation, NO_TEXT_PROVIDED));
    }

    let humanized = ctx.humanizer.lock().await.humanize(text);
    debug!(
        input_chars = text.chars().count(),
        output_chars = humanized.chars().count(),
        "humanize request served"
    );
    Ok(HumanizeResponse::succeeded(text, humanized))
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
