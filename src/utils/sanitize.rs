//! Sanitizing user-supplied strings before they touch the filesystem.

/// Turns an enrollment number into a safe file stem.
///
/// Keeps ASCII letters, digits, `-` and `_`; everything else (path
/// separators, dots, control characters) becomes `_`. An empty input
/// yields `"unnamed"`.
pub fn sanitize_file_stem(roll: &str) -> String {
    let cleaned: String = roll
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "unnamed".to_string()
    } else {
        cleaned
    }
}
