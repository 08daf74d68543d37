use anyhow::Result;
use test_utils::stored_notes_fixture;

use super::ViewController;
use crate::domain::models::NavTarget;
use crate::domain::models::Note;
use crate::domain::models::View;
use crate::domain::models::ViewState;
use crate::domain::services::LocalStorage;
use crate::domain::services::NoteStore;
use crate::domain::services::STORAGE_KEY;

async fn controller(dir: &tempfile::TempDir) -> Result<ViewController> {
    let storage = LocalStorage::new(dir.path().to_path_buf());
    storage.set(STORAGE_KEY, &stored_notes_fixture()).await?;
    return Ok(ViewController::new(NoteStore::load(storage).await?));
}

#[tokio::test]
async fn it_starts_on_the_list() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let controller = controller(&dir).await?;

    assert_eq!(controller.state(), &ViewState::default());
    assert_eq!(controller.view(), View::List);
    assert_eq!(controller.visible_notes().len(), 2);
    return Ok(());
}

#[tokio::test]
async fn it_reads_only_existing_notes() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut controller = controller(&dir).await?;

    assert!(!controller.select_for_read("missing"));
    assert_eq!(controller.view(), View::List);

    assert!(controller.select_for_read("a"));
    assert_eq!(
        controller.state(),
        &ViewState::new(View::Read, Some("a".to_string()))
    );
    assert_eq!(controller.current_note().unwrap().title, "Rust lifetimes");
    return Ok(());
}

#[tokio::test]
async fn it_edits_existing_or_new_notes() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut controller = controller(&dir).await?;

    controller.select_for_edit(Some("b"));
    assert_eq!(
        controller.state(),
        &ViewState::new(View::Edit, Some("b".to_string()))
    );

    controller.select_for_edit(None);
    assert_eq!(controller.state(), &ViewState::new(View::Edit, None));

    controller.select_for_edit(Some("missing"));
    assert!(controller.current_note().is_none());
    return Ok(());
}

#[tokio::test]
async fn it_only_deletes_after_confirmation() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut controller = controller(&dir).await?;

    assert!(controller.request_delete("a"));
    assert_eq!(controller.pending_delete().unwrap().id, "a");
    assert!(!controller.resolve_delete(false).await?);
    assert_eq!(controller.store().len(), 2);
    assert!(controller.pending_delete().is_none());

    assert!(controller.request_delete("a"));
    assert!(controller.resolve_delete(true).await?);
    assert_eq!(controller.store().len(), 1);
    assert!(controller.store().get("a").is_none());
    return Ok(());
}

#[tokio::test]
async fn it_returns_to_list_when_viewed_note_is_deleted() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut controller = controller(&dir).await?;
    controller.select_for_read("b");

    controller.request_delete("b");
    controller.resolve_delete(true).await?;

    assert_eq!(controller.state(), &ViewState::default());
    assert!(controller.current_note().is_none());
    return Ok(());
}

#[tokio::test]
async fn it_keeps_view_when_other_note_is_deleted() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut controller = controller(&dir).await?;
    controller.select_for_read("b");

    controller.request_delete("a");
    controller.resolve_delete(true).await?;

    assert_eq!(controller.view(), View::Read);
    assert_eq!(controller.current_note().unwrap().id, "b");
    return Ok(());
}

#[tokio::test]
async fn it_saves_and_returns_to_list() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut controller = controller(&dir).await?;
    controller.select_for_edit(Some("a"));

    let mut note = controller.current_note().unwrap().clone();
    note.title = "Lifetimes, again".to_string();
    controller.save(note).await?;

    assert_eq!(controller.state(), &ViewState::default());
    assert_eq!(controller.store().len(), 2);
    assert_eq!(controller.store().notes()[1].title, "Lifetimes, again");
    return Ok(());
}

#[tokio::test]
async fn it_cancels_without_mutation() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut controller = controller(&dir).await?;
    controller.select_for_edit(Some("a"));

    controller.cancel_edit();

    assert_eq!(controller.state(), &ViewState::default());
    assert_eq!(controller.store().notes()[1].title, "Rust lifetimes");
    return Ok(());
}

#[tokio::test]
async fn it_narrows_the_list_by_search() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut controller = controller(&dir).await?;

    controller.set_search("BOOK");
    let visible: Vec<&Note> = controller.visible_notes();

    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "b");
    assert_eq!(controller.view(), View::List);

    controller.set_search("");
    assert_eq!(controller.visible_notes().len(), 2);
    return Ok(());
}

#[tokio::test]
async fn it_navigates_unconditionally() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut controller = controller(&dir).await?;
    controller.select_for_read("a");

    controller.navigate(NavTarget::Brainstorm);
    assert_eq!(controller.state(), &ViewState::new(View::Brainstorm, None));

    controller.navigate(NavTarget::Write);
    assert_eq!(controller.state(), &ViewState::new(View::Edit, None));

    controller.navigate(NavTarget::Notes);
    assert_eq!(controller.state(), &ViewState::default());
    return Ok(());
}

#[tokio::test]
async fn it_drops_pending_delete_on_navigation() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut controller = controller(&dir).await?;

    assert!(controller.request_delete("a"));
    controller.navigate(NavTarget::Brainstorm);
    assert!(controller.pending_delete().is_none());

    controller.navigate(NavTarget::Notes);
    assert!(!controller.resolve_delete(true).await?);
    assert_eq!(controller.store().len(), 2);
    return Ok(());
}
