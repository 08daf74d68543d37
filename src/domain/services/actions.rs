#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use super::complete_note;
use super::AiGateway;
use crate::domain::models::Action;
use crate::domain::models::ChatReply;
use crate::domain::models::Event;

/// Background worker running AI calls on behalf of the UI.
pub struct ActionsService {}

impl ActionsService {
    pub async fn handle(
        action: Action,
        gateway: &AiGateway,
        tx: &mpsc::UnboundedSender<Event>,
    ) -> Result<()> {
        match action {
            Action::SaveNote(note, summarize) => {
                let note = complete_note(note, summarize, gateway).await;
                tx.send(Event::NoteReady(note))?;
            }
            Action::PolishContent(draft_id, content) => {
                let polished = gateway.polish(&content).await.into_polished(&content);
                tx.send(Event::PolishReady(draft_id, polished))?;
            }
            Action::SendChat(request) => {
                let turn = gateway.send_message(&request.session, &request.text).await;
                tx.send(Event::ChatReplied(ChatReply {
                    session_id: request.session.id,
                    placeholder_id: request.placeholder_id,
                    outcome: turn.outcome,
                    context: turn.context,
                }))?;
            }
        }

        return Ok(());
    }

    /// Runs until the action channel closes. Each action gets its own task so
    /// a slow summary does not hold up a polish or a chat reply.
    pub async fn start(
        gateway: AiGateway,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let gateway = Arc::new(gateway);

        loop {
            let action = match rx.recv().await {
                Some(action) => action,
                None => return Ok(()),
            };

            let worker_gateway = gateway.clone();
            let worker_tx = tx.clone();
            tokio::spawn(async move {
                if let Err(err) = ActionsService::handle(action, &worker_gateway, &worker_tx).await {
                    tracing::error!(error = ?err, "Failed to deliver action result");
                }
            });
        }
    }
}
