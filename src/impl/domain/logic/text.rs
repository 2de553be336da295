/// Removes every known substring from `text` and returns what is left,
/// whitespace-normalized. Longer substrings are removed first so that a name
/// containing a shorter one is stripped whole. Returns `None` when nothing
/// remains.
pub(crate) fn clean_text_by_list_text<S: AsRef<str>>(list: &[S], text: &str) -> Option<String> {
    let mut known: Vec<&str> = list
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .collect();
    known.sort_by_key(|s| std::cmp::Reverse(s.len()));

    let stripped = known
        .into_iter()
        .fold(text.to_string(), |acc, s| acc.replace(s, " "));
    let cleaned = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// `CREDIT_CARD` -> `Credit Card`.
pub(crate) fn humanize(identifier: &str) -> String {
    identifier
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let lower = w.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
