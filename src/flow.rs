//! Generation pipeline wiring
//!
//! Single-shot and stateless: validate the description, bind
//! the request's credential to a fresh provider client, render
//! the prompt, make exactly one provider call, validate the
//! structured output. Every failure comes back as a value of
//! the closed error taxonomy.

use log::{debug, info};

/// Reject absent or blank credentials
///
/// There is no default production credential and no
/// environment fallback; the key must arrive with the request.
pub fn require_credential(credential: Option<&str>)
  -> Result<&str, crate::error::Error>
{   match credential
    {   Some(key) if !key.trim().is_empty() => {
          Ok(key.trim())
        }
      , _ => {
          debug!("Generation requested without a credential");
          Err(crate::error::Error::MissingCredential)
        }
    }
}

/// Run the pipeline against an explicit provider binding
///
/// This is the seam tests and embedding callers use: any
/// `CodeProvider` stands in for the network.
pub async fn generate_with_provider(
  request: &crate::request::GenerationRequest
, provider: &dyn crate::providers::CodeProvider
) -> Result<
    crate::request::GenerationResult,
    crate::error::Error
  >
{   let description = crate::request::validated_description(
      &request.description
    )?;

    let prompt = crate::prompt::render(description);
    debug!(
      "Invoking provider: {} with prompt of {} bytes",
      provider.name(),
      prompt.len()
    );

    let raw = provider.generate_code(&prompt).await?;
    crate::request::validated_output(&raw)
}

/// Generate BMAD code for a single request
///
/// The provider binding is constructed here, from this
/// request's credential, and dropped when the call returns.
/// Concurrent calls carrying different credentials never
/// share configuration.
pub async fn generate(
  request: crate::request::GenerationRequest
, config: &crate::config::GeneratorConfig
) -> Result<
    crate::request::GenerationResult,
    crate::error::Error
  >
{   // Length check runs before any credential or network work;
    // the shared pipeline repeats it at the boundary.
    crate::request::validated_description(
      &request.description
    )?;

    let credential = require_credential(
      request.credential.as_deref()
    )?;

    let binding = crate::providers::GeminiClient::bind(
      credential.to_string(),
      config.clone()
    );

    let result
      = generate_with_provider(&request, &binding).await;

    match &result
    {   Ok(generated) => {
          info!(
            "Generated {} bytes of BMAD code",
            generated.code.len()
          );
        }
      , Err(e) => {
          info!("Generation failed: {}", e);
        }
    }

    result
}
