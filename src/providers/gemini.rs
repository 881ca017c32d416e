use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

const GEMINI_API_BASE: &str
  = "https://generativelanguage.googleapis.com/v1beta/models";

// ===== Wire Types =====

#[derive(Debug, Clone, Serialize)]
pub struct GeminiRequest
{   pub contents: Vec<Content>
  , #[serde(rename = "generationConfig")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content
{   pub parts: Vec<Part>
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part
{   pub text: String
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig
{   #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>
  , #[serde(rename = "maxOutputTokens")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>
  , #[serde(rename = "responseMimeType")]
    pub response_mime_type: String
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponse
{   #[serde(default)]
    pub candidates: Vec<Candidate>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate
{   pub content: Content
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiErrorBody
{   pub error: GeminiErrorDetail
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiErrorDetail
{   #[serde(default)]
    pub code: Option<u16>
  , #[serde(default)]
    pub message: Option<String>
  , #[serde(default)]
    pub status: Option<String>
}

// ===== Gemini Client =====

/// Request-scoped Gemini binding
///
/// One instance per generation call: the credential moves in
/// at construction and drops with the call. No key is ever
/// stored in shared state, so concurrent calls with different
/// credentials cannot overwrite each other.
pub struct GeminiClient
{   credential: String
  , config: crate::config::GeneratorConfig
  , http_client: reqwest::Client
}

impl GeminiClient
{   /// Bind a credential to a fresh client for one call
    pub fn bind(
      credential: String
    , config: crate::config::GeneratorConfig
    ) -> Self
    {   debug!(
          "Binding Gemini client for model: {}",
          config.model
        );
        GeminiClient
        {   credential
          , config
          , http_client: reqwest::Client::new()
        }
    }

    // The key rides in the query string; the full URL must
    // never reach a log line.
    fn endpoint(&self) -> String
    {   let base = self.config.api_base.as_deref()
          .unwrap_or(GEMINI_API_BASE);
        format!(
          "{}/{}:generateContent?key={}",
          base, self.config.model, self.credential
        )
    }
}

#[async_trait::async_trait]
impl crate::providers::CodeProvider for GeminiClient
{   fn name(&self) -> &str
    {   "gemini"
    }

    async fn generate_code(&self, prompt: &str)
      -> Result<String, crate::error::Error>
    {   debug!(
          "Sending generation request to model: {}",
          self.config.model
        );

        let request = GeminiRequest
        {   contents: vec![
              Content
              {   parts: vec![
                    Part
                    {   text: prompt.to_string()
                    }
                  ]
              }
            ]
          , generation_config: Some(GenerationConfig
            {   temperature: self.config.temperature
              , max_output_tokens: self.config.max_output_tokens
              , response_mime_type
                  : "application/json".to_string()
            })
        };

        let response = self.http_client
          .post(self.endpoint())
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::ProviderError(e.to_string())
          })?;

        let status = response.status();
        trace!("Gemini response status: {}", status);

        let body = response.text().await
          .map_err(|e| {
            error!("Failed reading response body: {}", e);
            crate::error::Error::ProviderError(e.to_string())
          })?;

        if !status.is_success()
        {   error!("Gemini API error: {}", body);
            return Err(classify_api_failure(
              status.as_u16(),
              &body
            ));
        }

        let reply: GeminiResponse
          = serde_json::from_str(&body).map_err(|e| {
              error!("Parse error: {}", e);
              crate::error::Error::MalformedResponse(
                e.to_string()
              )
            })?;

        reply.candidates.first()
          .and_then(|c| c.content.parts.first())
          .map(|p| p.text.clone())
          .ok_or_else(|| {
            error!("No candidates in response");
            crate::error::Error::MalformedResponse(
              "response contained no candidates".to_string()
            )
          })
    }
}

/// Classify a non-success provider reply
///
/// Structured fields decide first: the HTTP status, then the
/// error body's status code. Message inspection is a
/// best-effort last resort, since Gemini reports bad keys as
/// 400 INVALID_ARGUMENT with the problem only in the text.
pub fn classify_api_failure(status: u16, body: &str)
  -> crate::error::Error
{   let detail = serde_json::from_str::<GeminiErrorBody>(body)
      .ok()
      .map(|b| b.error);

    let message = detail.as_ref()
      .and_then(|d| d.message.clone())
      .unwrap_or_else(|| {
        if body.trim().is_empty()
        {   "Unknown error".to_string()
        } else
        {   body.trim().to_string()
        }
      });

    if status == 401 || status == 403
    {   return crate::error::Error::InvalidCredential(message);
    }

    if let Some(code)
      = detail.as_ref().and_then(|d| d.status.as_deref())
    {   if code == "UNAUTHENTICATED"
          || code == "PERMISSION_DENIED"
        {   return crate::error::Error::InvalidCredential(
              message
            );
        }
    }

    let lowered = message.to_lowercase();
    if lowered.contains("api key")
      || lowered.contains("credential")
    {   return crate::error::Error::InvalidCredential(message);
    }

    crate::error::Error::ProviderError(
      format!("HTTP {}: {}", status, message)
    )
}
