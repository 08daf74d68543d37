use super::excerpt;
use super::parse_tags;
use super::Note;
use super::WELCOME_NOTE_TITLE;

fn note(title: &str, tags: &[&str]) -> Note {
    return Note {
        id: Note::create_id(),
        title: title.to_string(),
        content: "".to_string(),
        summary: None,
        tags: tags.iter().map(|tag| return tag.to_string()).collect(),
        created_at: 0,
        updated_at: 0,
    };
}

#[test]
fn it_parses_tags_keeping_duplicates_and_order() {
    assert_eq!(parse_tags("a, a, b"), vec!["a", "a", "b"]);
}

#[test]
fn it_parses_tags_dropping_empty_entries() {
    assert_eq!(parse_tags(" rust ,, ,notes,"), vec!["rust", "notes"]);
    assert!(parse_tags("").is_empty());
    assert!(parse_tags(" , ").is_empty());
}

#[test]
fn it_builds_excerpts_with_marker() {
    assert_eq!(excerpt("short", 150), "short...");
    assert_eq!(excerpt("abcdef", 3), "abc...");
}

#[test]
fn it_builds_excerpts_on_char_boundaries() {
    assert_eq!(excerpt("héllo wörld", 4), "héll...");
}

#[test]
fn it_matches_title_case_insensitively() {
    let note = note("Rust Lifetimes", &[]);
    assert!(note.matches("lifetime"));
    assert!(!note.matches("borrow"));
}

#[test]
fn it_matches_any_tag() {
    let note = note("Untitled", &["Later", "Books"]);
    assert!(note.matches("book"));
    assert!(note.matches("lat"));
    assert!(!note.matches("rust"));
}

#[test]
fn it_creates_unique_ids() {
    assert_ne!(Note::create_id(), Note::create_id());
}

#[test]
fn it_previews_summary_before_content() {
    let mut note = note("Title", &[]);
    note.content = "Body".to_string();
    assert_eq!(note.preview(), "Body");

    note.summary = Some("Summary".to_string());
    assert_eq!(note.preview(), "Summary");
}

#[test]
fn it_serializes_camel_case_without_empty_summary() {
    let welcome = Note::welcome(42);
    assert_eq!(welcome.title, WELCOME_NOTE_TITLE);

    let mut plain = welcome.clone();
    plain.summary = None;
    let json = serde_json::to_value(&plain).unwrap();

    assert_eq!(json["createdAt"], 42);
    assert_eq!(json["updatedAt"], 42);
    assert!(json.get("summary").is_none());
}
