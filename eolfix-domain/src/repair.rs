use crate::line_break::LineBreak;

/// A buffer ends cleanly when its final character is a line feed or a
/// carriage return. A lone trailing `\r` counts, even when the rest of the
/// buffer uses a different convention.
pub fn ends_with_line_break(text: &str) -> bool {
    text.ends_with('\n') || text.ends_with('\r')
}

/// Append the buffer's own terminator style when the buffer does not end
/// with a line break.
///
/// Returns `None` for compliant buffers, which are never modified — not even
/// when their internal convention differs from what [`LineBreak::detect`]
/// would report.
pub fn repair(text: &str) -> Option<String> {
    if ends_with_line_break(text) {
        return None;
    }
    let terminator = LineBreak::detect(text).as_str();
    let mut fixed = String::with_capacity(text.len() + terminator.len());
    fixed.push_str(text);
    fixed.push_str(terminator);
    Some(fixed)
}
