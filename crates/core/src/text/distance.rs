//! Edit distance between strings.

/// Levenshtein distance between `a` and `b`, counted in `char`s.
///
/// Insertions, deletions and substitutions each cost one.
///
/// ```
/// use metashop_core::text::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();

    // Row i holds the distances between the first i chars of `a` and every
    // prefix of `b`; only the previous row is needed.
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut current = Vec::with_capacity(b.len() + 1);
        let mut left = i + 1;
        current.push(left);
        for (cb, (diagonal, above)) in b.iter().zip(previous.iter().zip(previous.iter().skip(1))) {
            let substitution = diagonal + usize::from(ca != *cb);
            left = (above + 1).min(left + 1).min(substitution);
            current.push(left);
        }
        previous = current;
    }
    previous.last().copied().unwrap_or_default()
}
