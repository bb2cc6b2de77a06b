//! Markdown rendering for the pull-request comment.

use camino::Utf8PathBuf;

/// Render the comment body for a non-empty repair result set.
///
/// The format is fixed: a count header, then one backtick-wrapped bullet per
/// repaired path, in repair order. Callers post nothing when the set is
/// empty; this function still renders a "0 file(s)" header if handed one.
pub fn render_comment_md(repaired: &[Utf8PathBuf]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} file(s) are missing a line break at their end:\n",
        repaired.len()
    ));
    for path in repaired {
        out.push_str(&format!("- `{}`\n", path));
    }
    out
}
