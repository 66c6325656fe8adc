//! Blocking model calls from async code

use crate::error::GraderError;
use checkmate_domain::LlmProvider;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Call the LLM provider on a blocking worker, bounded by `limit` if set
///
/// `LlmProvider` is synchronous, so the call runs via `spawn_blocking`.
/// Without a limit the call waits for whatever timeout the provider's own
/// client applies.
pub(crate) async fn call_llm<L>(
    llm: &Arc<L>,
    prompt: String,
    limit: Option<Duration>,
) -> Result<String, GraderError>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    let llm = Arc::clone(llm);

    let task = tokio::task::spawn_blocking(move || {
        llm.generate(&prompt)
            .map_err(|e| GraderError::Llm(e.to_string()))
    });

    let joined = match limit {
        Some(limit) => timeout(limit, task).await.map_err(|_| GraderError::Timeout)?,
        None => task.await,
    };

    joined.map_err(|e| GraderError::Llm(format!("Task join error: {}", e)))?
}
