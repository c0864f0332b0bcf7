//! LaTeX comment-line extraction.
//!
//! A comment line is any line whose first non-whitespace character is `%`.
//! This is a deliberately naive test: it does not understand escaped markers
//! (`\%`) and it will pick up comment-looking lines inside verbatim or
//! listing environments. Matching lines are returned untrimmed, in input
//! order.

/// Line-comment marker of TeX source text.
pub const COMMENT_MARKER: char = '%';

/// Return the comment lines of `text`, rejoined with `\n`.
///
/// `None` means no line qualified, which is a distinct outcome from a
/// successful extraction that happens to be short.
///
/// ```rust
/// use texgleaner::comments::extract_comments;
///
/// assert_eq!(
///     extract_comments("%hello\nworld\n%again").as_deref(),
///     Some("%hello\n%again"),
/// );
/// assert_eq!(extract_comments("no comments here"), None);
/// ```
pub fn extract_comments(text: &str) -> Option<String> {
    let comments: Vec<&str> = text
        .split('\n')
        .filter(|line| line.trim().starts_with(COMMENT_MARKER))
        .collect();
    if comments.is_empty() {
        None
    } else {
        Some(comments.join("\n"))
    }
}
