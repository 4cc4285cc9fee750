//! Pure string helpers: repetition, multi-line indentation, joining.
//!
//! These back the synthesizer's block assembly. They are deliberately
//! break-style preserving: a template authored with `\r\n` breaks round-trips
//! through [`indent`] with `\r\n` breaks intact, never normalized.

use crate::domain::DomainError;

/// Allocation ceiling for a repeated string. Anything at or past this is a
/// [`DomainError::LengthOverflow`], never a wrap or a silent truncation.
const MAX_REPEAT_BYTES: usize = isize::MAX as usize;

/// Return `unit` concatenated with itself `count` times.
///
/// - `count == 0` yields the empty string
/// - `count == 1` yields `unit` unchanged
/// - a resulting byte length that does not fit the representable range is
///   [`DomainError::LengthOverflow`]
pub fn repeat(unit: &str, count: usize) -> Result<String, DomainError> {
    if count == 0 || unit.is_empty() {
        return Ok(String::new());
    }

    let len = unit
        .len()
        .checked_mul(count)
        .filter(|&n| n < MAX_REPEAT_BYTES)
        .ok_or(DomainError::LengthOverflow {
            unit_len: unit.len(),
            count,
        })?;

    let mut out = String::with_capacity(len);
    for _ in 0..count {
        out.push_str(unit);
    }
    Ok(out)
}

/// Treat `text` as a multi-line block and indent every line by `columns`
/// spaces (`columns` ≥ 1).
///
/// The two recognized break styles, `\r\n` and `\n`, are matched and
/// reproduced distinctly: the pad is inserted immediately after each break,
/// and the break itself is kept exactly as written. A lone `\r` is not a
/// break and gets no pad.
pub fn indent(text: &str, columns: usize) -> Result<String, DomainError> {
    let pad = repeat(" ", columns)?;

    let mut out = String::with_capacity(text.len() + pad.len());
    out.push_str(&pad);

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        match c {
            '\r' if chars.peek() == Some(&'\n') => {
                if let Some(lf) = chars.next() {
                    out.push(lf);
                }
                out.push_str(&pad);
            }
            '\n' => out.push_str(&pad),
            _ => {}
        }
    }
    Ok(out)
}

/// Join the stringy `parts` with `separator`.
pub fn join<I, S>(parts: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(part.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── repeat ────────────────────────────────────────────────────────────

    #[test]
    fn repeat_zero_is_empty() {
        assert_eq!(repeat("ab", 0).unwrap(), "");
    }

    #[test]
    fn repeat_one_is_identity() {
        assert_eq!(repeat("ab", 1).unwrap(), "ab");
    }

    #[test]
    fn repeat_many() {
        assert_eq!(repeat("ab", 3).unwrap(), "ababab");
    }

    #[test]
    fn repeat_empty_unit_is_empty() {
        assert_eq!(repeat("", 1_000_000).unwrap(), "");
    }

    #[test]
    fn repeat_overflow_is_an_error_not_a_wrap() {
        let err = repeat("ab", usize::MAX / 2 + 1).unwrap_err();
        assert!(matches!(err, DomainError::LengthOverflow { .. }));
    }

    #[test]
    fn repeat_rejects_allocation_sized_results() {
        // No multiplication overflow here, but the result would exceed the
        // representable allocation range.
        let err = repeat("abcd", usize::MAX / 4).unwrap_err();
        assert!(matches!(err, DomainError::LengthOverflow { .. }));
    }

    // ── indent ────────────────────────────────────────────────────────────

    #[test]
    fn indent_single_line() {
        assert_eq!(indent("abc", 2).unwrap(), "  abc");
    }

    #[test]
    fn indent_lf_lines() {
        assert_eq!(indent("a\nb\nc", 4).unwrap(), "    a\n    b\n    c");
    }

    #[test]
    fn indent_preserves_crlf_breaks() {
        assert_eq!(indent("a\r\nb", 2).unwrap(), "  a\r\n  b");
    }

    #[test]
    fn indent_mixed_breaks_stay_mixed() {
        assert_eq!(indent("a\r\nb\nc", 1).unwrap(), " a\r\n b\n c");
    }

    #[test]
    fn indent_lone_carriage_return_is_not_a_break() {
        assert_eq!(indent("a\rb", 2).unwrap(), "  a\rb");
    }

    #[test]
    fn indent_empty_text_is_just_the_pad() {
        assert_eq!(indent("", 4).unwrap(), "    ");
    }

    #[test]
    fn indent_keeps_the_line_count() {
        let text = "one\ntwo\r\nthree\nfour";
        let indented = indent(text, 3).unwrap();
        assert_eq!(indented.lines().count(), text.lines().count());
        for line in indented.lines() {
            assert!(line.starts_with("   "));
            assert!(!line.starts_with("    "));
        }
    }

    // ── join ──────────────────────────────────────────────────────────────

    #[test]
    fn join_empty_sequence() {
        assert_eq!(join(Vec::<String>::new(), ", "), "");
    }

    #[test]
    fn join_single_item_has_no_separator() {
        assert_eq!(join(["only"], " || "), "only");
    }

    #[test]
    fn join_many() {
        assert_eq!(join(["a", "b", "c"], ", "), "a, b, c");
    }
}
