use anyhow::Result;
use test_utils::prose_fixture;

use super::EditorSurface;
use super::SummaryPolicy;
use crate::domain::models::Note;
use crate::domain::models::MISSING_CREDENTIAL_TEXT;
use crate::domain::services::AiGateway;
use crate::domain::services::LocalStorage;
use crate::domain::services::NoteStore;
use crate::infrastructure::backends::mock::MockBackend;

fn existing(summary: Option<&str>) -> Note {
    return Note {
        id: "n-1".to_string(),
        title: "Rest".to_string(),
        content: prose_fixture().to_string(),
        summary: summary.map(|s| return s.to_string()),
        tags: vec!["health".to_string(), "work".to_string()],
        created_at: 1_000,
        updated_at: 1_000,
    };
}

#[test]
fn it_seeds_draft_from_note() {
    let note = existing(None);
    let editor = EditorSurface::new(Some(&note), SummaryPolicy::default());

    assert_eq!(editor.title, "Rest");
    assert_eq!(editor.tags_text, "health, work");
    assert_eq!(editor.note_id(), Some("n-1"));
}

#[test]
fn it_disables_save_without_title() {
    let mut editor = EditorSurface::new(None, SummaryPolicy::default());
    editor.content = "Body".to_string();

    assert!(!editor.can_save());
    assert!(editor.begin_save().is_none());
}

#[test]
fn it_builds_new_notes_with_excerpt_summary() {
    let mut editor = EditorSurface::new(None, SummaryPolicy::default());
    editor.title = "Draft".to_string();
    editor.content = "Short body".to_string();
    editor.tags_text = "a, a, b".to_string();

    let note = editor.build_note(5_000);

    assert!(!note.id.is_empty());
    assert_eq!(note.created_at, 5_000);
    assert_eq!(note.updated_at, 5_000);
    assert_eq!(note.tags, vec!["a", "a", "b"]);
    assert_eq!(note.summary, Some("Short body...".to_string()));
}

#[test]
fn it_keeps_identity_across_edits() {
    let note = existing(Some("Kept"));
    let mut editor = EditorSurface::new(Some(&note), SummaryPolicy::default());
    editor.title = "Rest, revisited".to_string();

    let first = editor.build_note(2_000);
    let second = EditorSurface::new(Some(&first), SummaryPolicy::default()).build_note(3_000);

    assert_eq!(first.id, "n-1");
    assert_eq!(second.id, "n-1");
    assert_eq!(second.created_at, 1_000);
    assert_eq!(second.updated_at, 3_000);
    assert!(second.updated_at >= second.created_at);
    assert_eq!(second.summary, Some("Kept".to_string()));
}

#[test]
fn it_never_moves_updated_before_created() {
    let note = existing(None);
    let editor = EditorSurface::new(Some(&note), SummaryPolicy::default());

    let saved = editor.build_note(10);

    assert_eq!(saved.updated_at, 1_000);
}

#[tokio::test]
async fn it_summarizes_long_notes_without_summary_once() {
    let backend = MockBackend::replying("Breaks help. Try three habits.");
    let prompts = backend.prompts();
    let gateway = AiGateway::new(Box::new(backend));

    let note = existing(None);
    let mut editor = EditorSurface::new(Some(&note), SummaryPolicy::default());
    let saved = editor.save(&gateway).await.unwrap();

    assert_eq!(prompts.lock().unwrap().len(), 1);
    assert_eq!(saved.summary, Some("Breaks help. Try three habits.".to_string()));
    assert!(!editor.is_generating());
}

#[tokio::test]
async fn it_does_not_summarize_when_summary_exists() {
    let backend = MockBackend::replying("unused");
    let prompts = backend.prompts();
    let gateway = AiGateway::new(Box::new(backend));

    let note = existing(Some("Already summarized."));
    let mut editor = EditorSurface::new(Some(&note), SummaryPolicy::default());
    let saved = editor.save(&gateway).await.unwrap();

    assert!(prompts.lock().unwrap().is_empty());
    assert_eq!(saved.summary, Some("Already summarized.".to_string()));
}

#[tokio::test]
async fn it_does_not_summarize_short_content() {
    let backend = MockBackend::replying("unused");
    let prompts = backend.prompts();
    let gateway = AiGateway::new(Box::new(backend));

    let mut editor = EditorSurface::new(None, SummaryPolicy::default());
    editor.title = "Tiny".to_string();
    editor.content = "x".repeat(50);
    let saved = editor.save(&gateway).await.unwrap();

    assert!(prompts.lock().unwrap().is_empty());
    assert_eq!(saved.summary, Some(format!("{}...", "x".repeat(50))));
}

#[tokio::test]
async fn it_honours_configured_thresholds() {
    let backend = MockBackend::replying("Generated.");
    let prompts = backend.prompts();
    let gateway = AiGateway::new(Box::new(backend));
    let policy = SummaryPolicy {
        min_content_length: 3,
        excerpt_length: 2,
    };

    let mut editor = EditorSurface::new(None, policy);
    editor.title = "Tiny".to_string();
    editor.content = "abcd".to_string();
    assert_eq!(editor.build_note(1).summary, Some("ab...".to_string()));

    let saved = editor.save(&gateway).await.unwrap();
    assert_eq!(prompts.lock().unwrap().len(), 1);
    assert_eq!(saved.summary, Some("Generated.".to_string()));
}

#[tokio::test]
async fn it_stores_sentinel_summary_without_credential() {
    let gateway = AiGateway::new(Box::new(MockBackend::without_credential()));

    let mut editor = EditorSurface::new(None, SummaryPolicy::default());
    editor.title = "Offline".to_string();
    editor.content = prose_fixture().to_string();
    let saved = editor.save(&gateway).await.unwrap();

    assert_eq!(saved.summary, Some(MISSING_CREDENTIAL_TEXT.to_string()));
}

#[tokio::test]
async fn it_saves_draft_into_fresh_notebook() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut store = NoteStore::load(LocalStorage::new(dir.path().to_path_buf())).await?;
    assert_eq!(store.notes()[0].title, "Welcome to MindScape");

    let gateway = AiGateway::new(Box::new(MockBackend::without_credential()));
    let mut editor = EditorSurface::new(None, SummaryPolicy::default());
    editor.title = "Draft".to_string();
    editor.tags_text = "a, a, b".to_string();
    let saved = editor.save(&gateway).await.unwrap();
    store.save(saved).await?;

    assert_eq!(store.len(), 2);
    assert_eq!(store.notes()[0].title, "Draft");
    assert_eq!(store.notes()[0].tags, vec!["a", "a", "b"]);
    return Ok(());
}

#[tokio::test]
async fn it_polishes_content_only() {
    let gateway = AiGateway::new(Box::new(MockBackend::replying("A clearer draft.")));
    let note = existing(Some("Summary"));
    let mut editor = EditorSurface::new(Some(&note), SummaryPolicy::default());

    editor.polish(&gateway).await;

    assert_eq!(editor.content, "A clearer draft.");
    assert_eq!(editor.title, "Rest");
    assert_eq!(editor.tags_text, "health, work");
    assert!(!editor.is_polishing());
}

#[tokio::test]
async fn it_keeps_content_when_polish_is_unavailable() {
    let gateway = AiGateway::new(Box::new(MockBackend::without_credential()));
    let mut editor = EditorSurface::new(None, SummaryPolicy::default());
    editor.content = "hello".to_string();

    editor.polish(&gateway).await;

    assert_eq!(editor.content, "hello");
}

#[test]
fn it_disables_polish_while_empty_or_running() {
    let mut editor = EditorSurface::new(None, SummaryPolicy::default());
    assert!(editor.begin_polish().is_none());

    editor.content = "text".to_string();
    assert_eq!(editor.begin_polish(), Some("text".to_string()));
    assert!(editor.begin_polish().is_none());
}

#[test]
fn it_disables_save_while_generating() {
    let note = existing(None);
    let mut editor = EditorSurface::new(Some(&note), SummaryPolicy::default());

    let (_, summarize) = editor.begin_save().unwrap();

    assert!(summarize);
    assert!(editor.is_generating());
    assert!(editor.begin_save().is_none());
    editor.finish_save();
    assert!(editor.can_save());
}
