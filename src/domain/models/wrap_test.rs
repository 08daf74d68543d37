use super::wrap_text;

#[test]
fn it_wraps_on_word_boundaries() {
    let lines = wrap_text("the quick brown fox jumps", 10);

    assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
}

#[test]
fn it_keeps_blank_lines() {
    let lines = wrap_text("first\n\nsecond", 20);

    assert_eq!(lines, vec!["first", "", "second"]);
}

#[test]
fn it_splits_words_longer_than_the_width() {
    let lines = wrap_text("a abcdefghij", 4);

    assert_eq!(lines, vec!["a", "abcd", "efgh", "ij"]);
}

#[test]
fn it_counts_characters_not_bytes() {
    let lines = wrap_text("héllo wörld", 5);

    assert_eq!(lines, vec!["héllo", "wörld"]);
}
