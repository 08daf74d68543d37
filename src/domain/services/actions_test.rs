use anyhow::bail;
use anyhow::Result;
use test_utils::prose_fixture;
use tokio::sync::mpsc;

use super::ActionsService;
use crate::domain::models::Action;
use crate::domain::models::ChatRequest;
use crate::domain::models::ChatSession;
use crate::domain::models::Event;
use crate::domain::models::Note;
use crate::domain::models::CHAT_ERROR_TEXT;
use crate::domain::models::SUMMARY_ERROR_TEXT;
use crate::domain::services::AiGateway;
use crate::infrastructure::backends::mock::MockBackend;

fn note(content: &str) -> Note {
    return Note {
        id: "n1".to_string(),
        title: "Draft".to_string(),
        content: content.to_string(),
        summary: Some("excerpt".to_string()),
        tags: vec![],
        created_at: 1,
        updated_at: 1,
    };
}

async fn run(gateway: AiGateway, action: Action) -> Result<Event> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    let worker = tokio::spawn(async move {
        return ActionsService::start(gateway, event_tx, &mut action_rx).await;
    });

    action_tx.send(action)?;
    let event = event_rx.recv().await;
    drop(action_tx);
    worker.await??;

    return match event {
        Some(event) => Ok(event),
        None => bail!("worker closed without an event"),
    };
}

#[tokio::test]
async fn it_saves_without_summary_untouched() -> Result<()> {
    let gateway = AiGateway::new(Box::new(MockBackend::replying("unused")));

    let event = run(gateway, Action::SaveNote(note("short"), false)).await?;

    match event {
        Event::NoteReady(saved) => assert_eq!(saved.summary.unwrap(), "excerpt"),
        _ => bail!("expected NoteReady"),
    }
    return Ok(());
}

#[tokio::test]
async fn it_saves_with_generated_summary() -> Result<()> {
    let gateway = AiGateway::new(Box::new(MockBackend::replying("A two sentence summary.")));

    let event = run(gateway, Action::SaveNote(note(prose_fixture()), true)).await?;

    match event {
        Event::NoteReady(saved) => {
            assert_eq!(saved.summary.unwrap(), "A two sentence summary.")
        }
        _ => bail!("expected NoteReady"),
    }
    return Ok(());
}

#[tokio::test]
async fn it_saves_with_error_summary_when_ai_fails() -> Result<()> {
    let gateway = AiGateway::new(Box::new(MockBackend::failing("boom")));

    let event = run(gateway, Action::SaveNote(note(prose_fixture()), true)).await?;

    match event {
        Event::NoteReady(saved) => assert_eq!(saved.summary.unwrap(), SUMMARY_ERROR_TEXT),
        _ => bail!("expected NoteReady"),
    }
    return Ok(());
}

#[tokio::test]
async fn it_keeps_original_content_when_polish_fails() -> Result<()> {
    let gateway = AiGateway::new(Box::new(MockBackend::failing("boom")));

    let action = Action::PolishContent("draft-1".to_string(), "rough draft".to_string());
    let event = run(gateway, action).await?;

    match event {
        Event::PolishReady(draft_id, content) => {
            assert_eq!(draft_id, "draft-1");
            assert_eq!(content, "rough draft");
        }
        _ => bail!("expected PolishReady"),
    }
    return Ok(());
}

#[tokio::test]
async fn it_replies_to_chat_with_placeholder_id() -> Result<()> {
    let gateway = AiGateway::new(Box::new(MockBackend::failing("boom")));
    let session = ChatSession::new("be helpful");
    let session_id = session.id.to_string();

    let event = run(
        gateway,
        Action::SendChat(ChatRequest {
            session,
            placeholder_id: "loading-1".to_string(),
            text: "hello".to_string(),
        }),
    )
    .await?;

    match event {
        Event::ChatReplied(reply) => {
            assert_eq!(reply.session_id, session_id);
            assert_eq!(reply.placeholder_id, "loading-1");
            assert!(reply.context.is_none());
            assert_eq!(reply.outcome.into_reply(), CHAT_ERROR_TEXT);
        }
        _ => bail!("expected ChatReplied"),
    }
    return Ok(());
}
