// SPDX-License-Identifier: MPL-2.0
//! Message sanitization.
//!
//! Diagnostic messages often embed the path of the file that failed. Only
//! the file name is kept so that reports never reveal directory layouts.

/// Replaces every absolute path in `message` with its file name.
///
/// A word counts as a path when it starts with `/`, `~/`, a drive letter
/// followed by `:\` or `:/`, or a UNC prefix `\\`. Surrounding quotes and
/// brackets are preserved.
///
/// # Examples
///
/// ```
/// use showdisplay::diagnostics::sanitize_message;
///
/// let msg = "Failed to open /home/user/shows/intro.mp4";
/// assert_eq!(sanitize_message(msg), "Failed to open intro.mp4");
///
/// let msg = "Invalid format";
/// assert_eq!(sanitize_message(msg), "Invalid format");
/// ```
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    message
        .split(' ')
        .map(sanitize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

const DELIMITERS: &[char] = &['"', '\'', '(', ')', '[', ']', ',', ';'];

fn sanitize_word(word: &str) -> String {
    let core = word.trim_matches(DELIMITERS);
    if core.is_empty() || !looks_like_path(core) {
        return word.to_string();
    }

    let start = word.len() - word.trim_start_matches(DELIMITERS).len();
    let end = start + core.len();
    let name = core
        .rsplit(['/', '\\'])
        .find(|segment| !segment.is_empty())
        .unwrap_or("<path>");

    format!("{}{}{}", &word[..start], name, &word[end..])
}

fn looks_like_path(word: &str) -> bool {
    let bytes = word.as_bytes();
    let drive = bytes.len() > 2
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && matches!(bytes[2], b'\\' | b'/');

    (word.starts_with('/') && word.len() > 1)
        || word.starts_with("~/")
        || word.starts_with("\\\\")
        || drive
}
