//! Generative-model provider implementations

pub mod gemini;

// Re-export for convenience
pub use gemini::GeminiClient;

/// A provider that turns a rendered prompt into BMAD code
///
/// The trait is the seam the pipeline is tested through: a
/// stub implementation stands in for the network.
#[async_trait::async_trait]
pub trait CodeProvider: Send + Sync
{   /// Provider name, for logging only
    fn name(&self) -> &str;

    /// Issue exactly one generation call and return the raw
    /// structured payload text
    async fn generate_code(&self, prompt: &str)
      -> Result<String, crate::error::Error>;
}
