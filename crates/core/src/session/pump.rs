use super::Session;
use crate::error::{Result, TrueGotoError};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use truegoto_api::{EventPumpHandle, SessionEvent};

/// Producer side of the event pump. Cheap to clone, usable from any host thread.
#[derive(Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<SessionEvent>,
}

impl EventSender {
    pub fn send(&self, event: impl Into<SessionEvent>) -> Result<()> {
        self.tx
            .send(event.into())
            .map_err(|_| TrueGotoError::Internal("event pump stopped".to_string()))
    }
}

/// Running event pump task.
pub struct PumpHandle {
    token: CancellationToken,
    join: JoinHandle<()>,
}

impl PumpHandle {
    /// Wait for the pump task to finish, after `stop` or once every sender is dropped.
    pub async fn join(self) {
        if let Err(err) = self.join.await {
            tracing::error!("Event pump task failed: {}", err);
        }
    }
}

impl EventPumpHandle for PumpHandle {
    fn stop(&self) {
        self.token.cancel();
    }
}

/// Apply one event. Solution events may walk the whole workspace through
/// synchronous host calls, so they run on the blocking pool; the pump awaits
/// them before taking the next event.
async fn apply(session: Arc<Session>, event: SessionEvent) -> Result<()> {
    match event {
        SessionEvent::CodeModel(event) => {
            session.on_code_model_event(event);
            Ok(())
        }
        SessionEvent::Solution(event) => {
            tokio::task::spawn_blocking(move || session.on_solution_event(event))
                .await
                .map_err(|e| TrueGotoError::Internal(e.to_string()))?
        }
    }
}

impl Session {
    /// Forward host notifications to the session from a background task.
    ///
    /// Events are applied in the order they were sent. The task exits when the
    /// session shuts down, the returned handle is stopped, every sender is
    /// dropped, or the session itself is gone.
    pub fn start_event_pump(self: &Arc<Self>) -> (EventSender, PumpHandle) {
        let (tx, mut rx) = mpsc::unbounded_channel::<SessionEvent>();
        let token = self.cancel_token.child_token();
        let session_weak = Arc::downgrade(self);
        let task_token = token.clone();

        let join = tokio::spawn(async move {
            tracing::info!("Event pump started");
            loop {
                tokio::select! {
                    _ = task_token.cancelled() => {
                        break;
                    }
                    event = rx.recv() => {
                        let Some(event) = event else { break };
                        let Some(session) = session_weak.upgrade() else { break };
                        if let Err(err) = apply(session, event).await {
                            tracing::error!("Failed to apply session event: {}", err);
                        }
                    }
                }
            }
            tracing::info!("Event pump stopped");
        });

        (EventSender { tx }, PumpHandle { token, join })
    }
}
