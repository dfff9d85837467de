//! Runs view commands against the game API in the background.

use crate::api::GameApi;
use crate::view::{Command, Outcome};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, Instrument};

/// Sends each command on its own task and reports the [`Outcome`] over a
/// channel so the event loop never blocks on the network.
#[derive(Clone)]
pub struct Dispatcher {
    api: Arc<dyn GameApi>,
    session_id: String,
    outcome_tx: mpsc::UnboundedSender<Outcome>,
}

impl Dispatcher {
    /// Creates a dispatcher and the receiver its outcomes arrive on.
    pub fn new(
        api: Arc<dyn GameApi>,
        session_id: String,
    ) -> (Self, mpsc::UnboundedReceiver<Outcome>) {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let dispatcher = Self {
            api,
            session_id,
            outcome_tx,
        };
        (dispatcher, outcome_rx)
    }

    /// Session every command acts on.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Spawns `command`. The outcome is dropped if the receiver is gone.
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn dispatch(&self, command: Command) -> JoinHandle<()> {
        let api = Arc::clone(&self.api);
        let session_id = self.session_id.clone();
        let outcome_tx = self.outcome_tx.clone();
        tokio::spawn(
            async move {
                let outcome = execute(api.as_ref(), &session_id, command).await;
                if outcome_tx.send(outcome).is_err() {
                    debug!("Outcome receiver closed");
                }
            }
            .in_current_span(),
        )
    }
}

/// Runs one command to completion.
pub async fn execute(api: &dyn GameApi, session_id: &str, command: Command) -> Outcome {
    match command {
        Command::FetchState => Outcome::StateFetched(api.fetch_state(session_id).await),
        Command::SubmitMove(index) => {
            Outcome::MoveSubmitted(api.submit_move(session_id, index).await)
        }
        Command::ResetGame => Outcome::GameReset(api.reset_game(session_id).await),
        Command::DeleteSession => Outcome::SessionDeleted(api.delete_session(session_id).await),
    }
}
