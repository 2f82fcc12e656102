//! Small grammar and layout helpers.

/// "an" if `word` starts with a vowel letter, otherwise "a".
pub fn indefinite_article(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// Article for a spoken age: "an 18-year-old", "a 34-year-old".
pub fn age_article(age: u32) -> &'static str {
    match age {
        8 | 11 | 18 | 80..=89 => "an",
        _ => "a",
    }
}

/// Join items into an English list with a serial comma.
///
/// `["X"]` gives "X", `["X", "Y"]` gives "X and Y", and three or more give
/// "X, Y, and Z".
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Word-wrap `text` into lines of at most `width` columns, each prefixed
/// with `indent`.
///
/// Lines break only at whitespace and words keep their order. A word too
/// long for the available space gets a line of its own, unsplit.
pub fn wrap_text(text: &str, width: usize, indent: &str) -> Vec<String> {
    wrap_hanging(text, width, indent, indent)
}

/// Like [`wrap_text`], but the first line is prefixed with `first` and
/// every following line with `rest` (e.g. `"    - "` then `"      "`).
pub fn wrap_hanging(text: &str, width: usize, first: &str, rest: &str) -> Vec<String> {
    let available = |prefix: &str| width.saturating_sub(prefix.chars().count()).max(1);
    let mut lines = Vec::new();
    let mut prefix = first;
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len == 0 {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= available(prefix) {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(format!("{prefix}{current}"));
            prefix = rest;
            current = word.to_string();
            current_len = word_len;
        }
    }

    if current_len > 0 {
        lines.push(format!("{prefix}{current}"));
    }

    lines
}
