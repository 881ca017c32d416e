pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod prompt;
pub mod flow;
pub mod client;

/*

bmadgen is an async-only rust library that generates BMAD
method code from a plain text description; one fixed prompt
carries the whole BMAD grammar to the model, the caller's
api key is bound per request (never stored process-wide),
and every failure comes back as one of five error kinds.

bmadgen/
├── Cargo.toml          # Main manifest
├── src/
│   ├── lib.rs          # Re-exports and channel API interface
│   ├── error.rs        # Closed error taxonomy
│   ├── config.rs       # Generator configuration
│   ├── request.rs      # Request/result types and validators
│   ├── prompt.rs       # Versioned generation prompt template
│   ├── flow.rs         # Pipeline wiring
│   ├── client.rs       # Backend actor for UI callers
│   └── providers/      # Provider-specific implementations
│       ├── mod.rs      # CodeProvider trait + re-exports
│       └── gemini.rs   # Google Gemini client
└── tests/              # Integration and unit tests

*/

/// BMADGEN API INTERFACE:

// ===== GenerateCode =====

pub type GenerateCodeReply
  = Result<crate::request::GenerationResult, crate::error::Error>;
pub type GenerateCodeReplySender
  = tokio::sync::mpsc::UnboundedSender<GenerateCodeReply>;

pub struct GenerateCodeArgs
{   pub description: String
  , pub credential: Option<String>
  , pub reply: GenerateCodeReplySender
}

// ===== KillProcess =====

pub type KillProcessReply = Result<(), crate::error::Error>;
pub type KillProcessReplySender
  = tokio::sync::mpsc::UnboundedSender<KillProcessReply>;

pub struct KillProcessArgs
{   pub reply: KillProcessReplySender
}

// ===== BmadHand (sender side) =====

pub struct BmadHand
{   pub generate_code_tx
      : tokio::sync::mpsc::UnboundedSender<GenerateCodeArgs>
  , pub kill_process_tx
      : tokio::sync::mpsc::UnboundedSender<KillProcessArgs>
}

// ===== BmadFoot (receiver side) =====

pub struct BmadFoot
{   pub generate_code_rx
      : tokio::sync::mpsc::UnboundedReceiver<GenerateCodeArgs>
  , pub kill_process_rx
      : tokio::sync::mpsc::UnboundedReceiver<KillProcessArgs>
}
