// Intent classification
//
// The classification step is an external stochastic oracle, not domain
// logic. It lives behind a narrow trait so the route matching can be
// tested against stub implementations, with the live OpenAI call as one
// concrete implementation.

use async_trait::async_trait;
use thiserror::Error;

mod prompt;
pub mod openai;

pub use openai::OpenAiClassifier;
pub use prompt::build_prompt;

/// Raw classification as returned by the model.
///
/// Both fields are free text; validation against the route catalog happens
/// in the router, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub role: String,
    pub module: String,
}

/// Classification failures, split by origin.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Transport failure, non-success status, timeout, or an empty completion.
    #[error("completion request failed: {0}")]
    Upstream(String),
    /// The completion text could not be parsed as classification JSON.
    #[error("completion output was not valid classification JSON: {0}")]
    Malformed(String),
}

/// Turns a free-text user query into a `{role, module}` classification.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn classify(&self, query: &str) -> Result<Classification, ClassifyError>;
}
