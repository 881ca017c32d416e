use tokio::sync::mpsc;
use log::{debug, error, info};
use crate::BmadFoot;

/// Public API for the BMADGEN backend - owns the task
pub struct BmadBackend
{   hand: crate::BmadHand
  , _task_handle: tokio::task::JoinHandle<()>
}

impl BmadBackend
{   /// Create and spawn a new backend
    /// Returns immediately - spawns background task
    pub fn new(
      config: crate::config::GeneratorConfig
    ) -> Self
    {   debug!("Creating BmadBackend with task ownership");

        let (generate_code_tx, generate_code_rx)
          = mpsc::unbounded_channel();
        let (kill_process_tx, kill_process_rx)
          = mpsc::unbounded_channel();

        let hand = crate::BmadHand
        {   generate_code_tx: generate_code_tx.clone()
          , kill_process_tx: kill_process_tx.clone()
        };

        let foot = crate::BmadFoot
        {   generate_code_rx
          , kill_process_rx
        };

        let _task_handle = tokio::spawn(async move {
          run_backend_loop(foot, config).await
        });

        BmadBackend
        {   hand
          , _task_handle
        }
    }

    /// Queue a generation - returns almost immediately
    pub async fn generate_code(
      &self
    , description: String
    , credential: Option<String>
    ) -> Result<
        mpsc::UnboundedReceiver<crate::GenerateCodeReply>,
        crate::error::Error
      >
    {   debug!("generate_code queuing command");
        let (reply_tx, reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::GenerateCodeArgs
        {   description
          , credential
          , reply: reply_tx
        };

        self.hand.generate_code_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel closed");
            crate::error::Error::ProviderError(
              "backend disconnected".to_string()
            )
          })?;

        Ok(reply_rx)
    }

    /// Gracefully shutdown the backend
    pub async fn shutdown(self)
      -> Result<(), crate::error::Error>
    {   debug!("Shutting down BmadBackend");
        let (reply_tx, mut reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::KillProcessArgs
        {   reply: reply_tx
        };

        self.hand.kill_process_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel already closed");
            crate::error::Error::ProviderError(
              "backend already shutdown".to_string()
            )
          })?;

        // Wait for shutdown confirmation
        if let Some(result) = reply_rx.recv().await
        {   debug!("Backend shutdown confirmed");
            result
        } else
        {   error!("Backend shutdown reply channel closed");
            Err(crate::error::Error::ProviderError(
              "backend shutdown unconfirmed".to_string()
            ))
        }
    }
}

/// Main backend event loop
///
/// Design: tokio::select! is ONLY for fast queueing. Each
/// GenerateCode command runs on its own spawned task with its
/// own request-scoped provider binding, so commands carrying
/// different credentials never share configuration.
async fn run_backend_loop(
  foot: crate::BmadFoot
, config: crate::config::GeneratorConfig
)
{   debug!("Starting BmadBackend event loop");
    let BmadFoot
    {   mut generate_code_rx
      , mut kill_process_rx
    } = foot;

    loop
    { tokio::select!
      { Some(cmd) = generate_code_rx.recv() => {
          debug!("Received GenerateCode");
          let config = config.clone();
          tokio::spawn(async move {
            let request = crate::request::GenerationRequest
            {   description: cmd.description
              , credential: cmd.credential
            };
            let result
              = crate::flow::generate(request, &config).await;
            let _ = cmd.reply.send(result);
          });
        }
      , Some(cmd) = kill_process_rx.recv() => {
          debug!("Received KillProcess");
          let _ = cmd.reply.send(Ok(()));
          info!("BmadBackend shutting down");
          break;
        }
      , else => {
          debug!("All command channels closed");
          break;
        }
      }
    }
}
