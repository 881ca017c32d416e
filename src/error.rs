use std::fmt;

/// Custom error type for BMADGEN operations
/// Implements Clone for sending through channels
///
/// This is a closed taxonomy: every failure in the
/// generation pipeline maps to exactly one variant,
/// and nothing else crosses the pipeline boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Description failed the minimum-content check
    ValidationError(String)
  , /// Generation requested without an API credential
    MissingCredential
  , /// Provider rejected the supplied credential
    InvalidCredential(String)
  , /// Provider response did not carry a usable code field
    MalformedResponse(String)
  , /// Any other provider-level failure
    ProviderError(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::ValidationError(msg) => {
              write!(f, "Invalid description: {}", msg)
            }
          , Error::MissingCredential => {
              write!(f,
                "Missing API credential: supply a key to generate code"
              )
            }
          , Error::InvalidCredential(msg) => {
              write!(f, "Credential rejected: {}", msg)
            }
          , Error::MalformedResponse(msg) => {
              write!(f, "Malformed provider response: {}", msg)
            }
          , Error::ProviderError(msg) => {
              write!(f, "Provider error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}
