//! File-name sanitization.
//!
//! Client-supplied file names are used in storage keys and echoed back in
//! receipts, so they must not carry path separators or traversal sequences.

/// Sanitize a client-supplied file name for use in a storage key.
///
/// Path separators (`/` and `\`) and whitespace runs collapse to single
/// underscores, every character outside `[A-Za-z0-9._-]` is dropped, and
/// leading/trailing `.` and `_` are stripped so the result can neither
/// traverse directories nor hide as a dotfile. May return an empty string
/// when the input has no safe characters; callers treat that as an empty
/// filename.
pub fn sanitize_filename(name: &str) -> String {
    let spaced: String = name
        .chars()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");

    let cleaned: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    cleaned.trim_matches(|c| c == '.' || c == '_').to_string()
}
