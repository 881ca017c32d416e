//! Configuration for the BMADGEN generator

use serde::{Deserialize, Serialize};

/// Default Gemini model used when the caller does not pick one
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Generator configuration
///
/// Carries everything about a generation call except the
/// credential, which always arrives with the request itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig
{   /// Provider model name
    pub model: String
  , /// API base URL (if custom)
    pub api_base: Option<String>
  , /// Sampling temperature
    pub temperature: Option<f32>
  , /// Max tokens the model may generate
    pub max_output_tokens: Option<u32>
}

impl Default for GeneratorConfig
{   fn default() -> Self
    {   GeneratorConfig
        {   model: DEFAULT_MODEL.to_string()
          , api_base: None
          , temperature: None
          , max_output_tokens: None
        }
    }
}
