use serde_json::json;

/// Body text long enough to trigger summary generation on save.
pub fn prose_fixture() -> &'static str {
    return r#"
Spent the afternoon reading about how rest actually improves deep work. The short version is that
breaks are not time stolen from output, they are the part of the process where ideas settle.
I want to write this up as a post with three concrete habits I can test for a month.
"#
    .trim();
}

/// A successful `generateContent` response carrying `text` split across two parts.
pub fn gemini_reply_fixture(text: &str) -> String {
    let (head, tail) = text.split_at(text.len() / 2);
    return json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": head }, { "text": tail }]
            },
            "finishReason": "STOP"
        }]
    })
    .to_string();
}

/// A `generateContent` response without any candidates.
pub fn gemini_empty_fixture() -> String {
    return json!({ "candidates": [] }).to_string();
}

/// Serialized collection as the store writes it, holding two notes.
pub fn stored_notes_fixture() -> String {
    return json!([
        {
            "id": "b",
            "title": "Reading list",
            "content": "Books to pick up this winter.",
            "tags": ["books", "Later"],
            "createdAt": 1_700_000_100_000_i64,
            "updatedAt": 1_700_000_200_000_i64
        },
        {
            "id": "a",
            "title": "Rust lifetimes",
            "content": "Lifetimes describe how long references stay valid.",
            "summary": "Notes on lifetimes.",
            "tags": ["rust"],
            "createdAt": 1_700_000_000_000_i64,
            "updatedAt": 1_700_000_000_000_i64
        }
    ])
    .to_string();
}
