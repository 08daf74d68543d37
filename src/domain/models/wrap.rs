#[cfg(test)]
#[path = "wrap_test.rs"]
mod tests;

/// Word wraps `text` to `width` columns. Blank source lines are kept as
/// empty lines and words longer than a line are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines: Vec<String> = vec![];

    for source_line in text.split('\n') {
        if source_line.trim().is_empty() {
            lines.push("".to_string());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0;

        for word in source_line.split_whitespace() {
            let mut chars: Vec<char> = word.chars().collect();

            while !chars.is_empty() {
                let separator = usize::from(current_width > 0);
                if current_width + separator + chars.len() <= width {
                    if separator == 1 {
                        current.push(' ');
                    }
                    current.extend(chars.iter());
                    current_width += separator + chars.len();
                    break;
                }

                if current_width > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                    continue;
                }

                let rest = chars.split_off(width);
                lines.push(chars.into_iter().collect());
                chars = rest;
            }
        }

        if current_width > 0 {
            lines.push(current);
        }
    }

    return lines;
}
