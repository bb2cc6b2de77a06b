/// A line-terminator style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreak {
    /// `\n`
    Lf,
    /// `\r`
    Cr,
    /// `\r\n`
    CrLf,
}

impl LineBreak {
    /// The terminator characters themselves.
    pub fn as_str(self) -> &'static str {
        match self {
            LineBreak::Lf => "\n",
            LineBreak::Cr => "\r",
            LineBreak::CrLf => "\r\n",
        }
    }

    /// Classify the terminator style a buffer already uses.
    ///
    /// Inspects the first line feed found at or after position 1; the first
    /// character is never considered, so a buffer that starts with `\n` but
    /// uses `\r` everywhere else is not misread. If no line feed exists, a
    /// carriage return anywhere classifies the buffer as `\r`, otherwise
    /// `\n` is the default (single-line buffers, no terminators at all).
    ///
    /// Only the first occurrence is inspected, not a frequency count across
    /// the whole buffer. Mixed-terminator files are classified by whichever
    /// terminator appears first; this is a known limitation and part of the
    /// contract.
    pub fn detect(text: &str) -> LineBreak {
        // `\n` and `\r` are ASCII, so a byte search is exact on UTF-8 input.
        let bytes = text.as_bytes();
        let lf = bytes
            .get(1..)
            .and_then(|rest| rest.iter().position(|&b| b == b'\n'))
            .map(|i| i + 1);

        match lf {
            Some(i) if bytes[i - 1] == b'\r' => LineBreak::CrLf,
            Some(_) => LineBreak::Lf,
            None if bytes.contains(&b'\r') => LineBreak::Cr,
            None => LineBreak::Lf,
        }
    }
}
