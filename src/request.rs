//! Request and result types for BMAD code generation

use log::debug;
use serde::{Deserialize, Serialize};

/// Minimum trimmed description length accepted by the pipeline
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// A single generation request
///
/// Created per call and discarded when the call completes.
/// The credential travels with the request so that each call
/// binds its own provider client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest
{   /// Plain-text description of the desired BMAD method
    pub description: String
  , /// API credential authorizing the provider call
    pub credential: Option<String>
}

/// Generated BMAD source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult
{   /// The generated BMAD code, verbatim from the provider
    pub code: String
}

/// Shape of the structured payload the model is asked to emit
#[derive(Debug, Clone, Deserialize)]
struct RawGeneration
{   #[serde(default)]
    code: Option<String>
}

/// Check the description against the minimum-content rule
///
/// Pure: same input, same verdict, no side effects. Runs
/// before any credential or network work so an obviously
/// insufficient request never costs a provider call.
pub fn validated_description(description: &str)
  -> Result<&str, crate::error::Error>
{   let trimmed = description.trim();
    if trimmed.chars().count() < MIN_DESCRIPTION_CHARS
    {   debug!(
          "Rejecting description of {} chars",
          trimmed.chars().count()
        );
        return Err(crate::error::Error::ValidationError(
          format!(
            "description must be at least {} characters long",
            MIN_DESCRIPTION_CHARS
          )
        ));
    }
    Ok(trimmed)
}

/// Validate the raw structured response from the provider
///
/// Accepts the payload text as the model produced it, parses
/// it against the `{code}` shape and passes the code through
/// untouched. The generated text is never reformatted or
/// linted here.
pub fn validated_output(raw: &str)
  -> Result<GenerationResult, crate::error::Error>
{   let payload = strip_code_fences(raw);

    let parsed: RawGeneration
      = serde_json::from_str(payload).map_err(|e| {
          debug!("Response payload did not parse: {}", e);
          crate::error::Error::MalformedResponse(
            format!("expected a {{\"code\"}} object: {}", e)
          )
        })?;

    match parsed.code
    {   Some(code) if !code.trim().is_empty() => {
          debug!("Validated generated code: {} bytes", code.len());
          Ok(GenerationResult { code })
        }
      , Some(_) => {
          Err(crate::error::Error::MalformedResponse(
            "code field was empty".to_string()
          ))
        }
      , None => {
          Err(crate::error::Error::MalformedResponse(
            "code field was missing".to_string()
          ))
        }
    }
}

/// Strip a Markdown fence the model may have wrapped around
/// its JSON payload
fn strip_code_fences(raw: &str) -> &str
{   let text = raw.trim();
    if !text.starts_with("```")
    {   return text;
    }
    let body = match text.find('\n')
    {   Some(idx) => &text[idx + 1..]
      , None => return text
    };
    match body.rfind("```")
    {   Some(idx) => body[..idx].trim()
      , None => body.trim()
    }
}
