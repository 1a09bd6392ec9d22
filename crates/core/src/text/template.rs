//! Placeholder substitution for message templates.

/// Replace placeholders in `text` with their values.
///
/// `pairs` is an ordered list of `(placeholder, replacement)`. The text is
/// scanned once from left to right; at each position the first pair whose
/// placeholder matches is applied and scanning resumes after it. Replacement
/// text is never scanned again, so a value containing `%other%` stays literal.
/// Empty placeholders are ignored.
///
/// ```
/// use metashop_core::text::substitute;
///
/// assert_eq!(substitute("I like %fruit%", &[("%fruit%", "apples")]), "I like apples");
/// ```
#[must_use]
pub fn substitute(text: &str, pairs: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
        let matched = pairs
            .iter()
            .find(|(placeholder, _)| !placeholder.is_empty() && rest.starts_with(placeholder));
        let consumed = match matched {
            Some((placeholder, replacement)) => {
                out.push_str(replacement);
                placeholder.len()
            }
            None => {
                out.push(ch);
                ch.len_utf8()
            }
        };
        rest = rest.get(consumed..).unwrap_or_default();
    }
    out
}

/// Apply [`substitute`] to every line.
#[must_use]
pub fn substitute_all<S: AsRef<str>>(lines: &[S], pairs: &[(&str, &str)]) -> Vec<String> {
    lines
        .iter()
        .map(|line| substitute(line.as_ref(), pairs))
        .collect()
}
