use super::Transcript;
use crate::domain::models::ChatMessage;
use crate::domain::models::Role;

#[test]
fn it_starts_from_messages_without_placeholders() {
    let transcript = Transcript::new(vec![
        ChatMessage::new(Role::Assistant, "Hello!"),
        ChatMessage::placeholder(),
    ]);

    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript.placeholder_count(), 0);
}

#[test]
fn it_allows_a_single_placeholder() {
    let mut transcript = Transcript::default();
    transcript.begin_placeholder().unwrap();

    assert!(transcript.begin_placeholder().is_err());
    assert!(transcript.append(ChatMessage::placeholder()).is_err());
    assert_eq!(transcript.placeholder_count(), 1);
}

#[test]
fn it_replaces_placeholder_with_reply_at_the_end() {
    let mut transcript = Transcript::default();
    transcript
        .append(ChatMessage::new(Role::User, "outline a post about rest"))
        .unwrap();
    let id = transcript.begin_placeholder().unwrap();

    let removed = transcript.resolve_placeholder(&id, ChatMessage::new(Role::Assistant, "Sure!"));

    assert!(removed);
    assert_eq!(transcript.placeholder_count(), 0);
    let messages = transcript.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[1].role, Role::Assistant);
    assert_eq!(messages[1].text, "Sure!");
    assert!(!messages[1].is_loading);
}

#[test]
fn it_appends_reply_for_unknown_placeholder() {
    let mut transcript = Transcript::default();
    let id = transcript.begin_placeholder().unwrap();

    let removed =
        transcript.resolve_placeholder("loading-other", ChatMessage::new(Role::Assistant, "Hi"));

    assert!(!removed);
    assert_eq!(transcript.pending().unwrap().id, id);
    assert_eq!(transcript.len(), 2);
}

#[test]
fn it_never_stores_reply_as_loading() {
    let mut transcript = Transcript::default();
    let id = transcript.begin_placeholder().unwrap();

    let mut reply = ChatMessage::placeholder();
    reply.text = "Done".to_string();
    transcript.resolve_placeholder(&id, reply);

    assert_eq!(transcript.placeholder_count(), 0);
}
