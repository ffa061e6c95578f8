//! Code-point-indexed substring extraction.
//!
//! The public positions here count code points, while the string's own
//! length is counted in UTF-16 code units; [`substring`] converts between
//! the two so that a cut can never land inside a supplementary character.

/// Returns the number of code points in the string.
///
/// # Examples
///
/// ```
/// # use codepoint::prelude::*;
/// assert_eq!(code_point_length("abc"), 3);
/// // One code point, two code units.
/// assert_eq!(code_point_length("\u{1F642}"), 1);
/// ```
#[must_use]
#[inline]
#[doc(alias = "code_point_count")]
pub fn code_point_length(s: &str) -> usize {
    s.chars().count()
}

/// Returns the number of UTF-16 code units the string encodes to.
///
/// Every BMP character contributes one unit, every supplementary character
/// two.
///
/// # Examples
///
/// ```
/// # use codepoint::prelude::*;
/// assert_eq!(utf16_length("abc"), 3);
/// assert_eq!(utf16_length("\u{1F642}"), 2);
/// ```
#[must_use]
#[inline]
pub fn utf16_length(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

/// Gets a substring by code-point positions, avoiding panics.
///
/// The returned substring starts with the character at the `start` position
/// and ends before the `end` position. All position counting is zero-based.
/// A supplementary character is always included or excluded whole, never
/// split.
///
/// A negative `start` or `end` is reinterpreted as an offset from the end
/// of the string, measured in UTF-16 code units. On strings made only of
/// BMP characters the unit and code-point spaces coincide, so this matches
/// the familiar count-back-from-the-end substring. An `end` past the end of
/// the string is clamped, and if `start` does not land strictly left of
/// `end` the result is the empty string. No combination of positions
/// panics.
///
/// A missing string propagates: `substring(None, ..)` is `None`.
///
/// # Examples
///
/// ```
/// # use codepoint::prelude::*;
/// // U+1F466 U+1F469 U+1F46A U+1F46B: four code points, eight code units.
/// let family = "\u{1F466}\u{1F469}\u{1F46A}\u{1F46B}";
///
/// assert_eq!(substring(None, 0, 2), None);
/// assert_eq!(substring(Some(""), 0, 2).as_deref(), Some(""));
///
/// assert_eq!(
///     substring(Some(family), 0, 2).as_deref(),
///     Some("\u{1F466}\u{1F469}"),
/// );
/// assert_eq!(substring(Some(family), 2, 0).as_deref(), Some(""));
/// assert_eq!(
///     substring(Some(family), 2, 4).as_deref(),
///     Some("\u{1F46A}\u{1F46B}"),
/// );
/// assert_eq!(substring(Some(family), 2, 2).as_deref(), Some(""));
/// // -4 counts back over eight code units to position 4, which is not
/// // left of 2.
/// assert_eq!(substring(Some(family), -4, 2).as_deref(), Some(""));
/// ```
#[must_use]
pub fn substring(input: Option<&str>, start: isize, end: isize) -> Option<String> {
    let s = input?;
    let unit_length = utf16_length(s) as isize;

    // Negative positions count back from the end, in code units.
    let end = if end < 0 { unit_length + end } else { end };
    let start = if start < 0 { unit_length + start } else { start };

    let end = end.min(unit_length);

    if start > end {
        return Some(String::new());
    }

    let start = start.max(0) as usize;
    let end = end.max(0) as usize;

    // Positions past the last code point all mean the end of the string.
    let length = code_point_length(s);
    let from = byte_offset(s, start.min(length));
    let to = byte_offset(s, end.min(length));
    Some(s[from..to].to_owned())
}

/// Converts a code-point position into the byte offset of its boundary,
/// walking the code points from the front. A position equal to the
/// code-point length maps to the end of the string.
fn byte_offset(s: &str, code_points: usize) -> usize {
    s.char_indices()
        .nth(code_points)
        .map_or(s.len(), |(offset, _)| offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAMILY: &str = "\u{1F466}\u{1F469}\u{1F46A}\u{1F46B}";

    #[test]
    fn test_absent() {
        assert_eq!(substring(None, 0, 0), None);
        assert_eq!(substring(None, -3, 17), None);
    }

    #[test]
    fn test_empty() {
        for start in -3..=3 {
            for end in -3..=3 {
                assert_eq!(substring(Some(""), start, end).as_deref(), Some(""));
            }
        }
    }

    #[test]
    fn test_supplementary() {
        let cut = |start, end| substring(Some(FAMILY), start, end);
        assert_eq!(cut(0, 2).as_deref(), Some("\u{1F466}\u{1F469}"));
        assert_eq!(cut(2, 0).as_deref(), Some(""));
        assert_eq!(cut(2, 4).as_deref(), Some("\u{1F46A}\u{1F46B}"));
        assert_eq!(cut(2, 2).as_deref(), Some(""));
        assert_eq!(cut(-4, 2).as_deref(), Some(""));
    }

    #[test]
    fn test_never_splits_a_pair() {
        let cut = |start, end| substring(Some("a\u{1F600}b"), start, end);
        assert_eq!(cut(0, 1).as_deref(), Some("a"));
        assert_eq!(cut(1, 2).as_deref(), Some("\u{1F600}"));
        assert_eq!(cut(2, 3).as_deref(), Some("b"));
        assert_eq!(cut(0, 2).as_deref(), Some("a\u{1F600}"));
    }

    #[test]
    fn test_bmp_negative_positions() {
        let cut = |start, end| substring(Some("abc"), start, end);
        assert_eq!(cut(-2, -1).as_deref(), Some("b"));
        assert_eq!(cut(-2, 3).as_deref(), Some("bc"));
        assert_eq!(cut(0, -1).as_deref(), Some("ab"));
        assert_eq!(cut(-1, -2).as_deref(), Some(""));
        // Far enough back to clamp to the start of the string.
        assert_eq!(cut(-5, 1).as_deref(), Some("a"));
        assert_eq!(cut(-5, -4).as_deref(), Some(""));
    }

    #[test]
    fn test_out_of_range_positions() {
        assert_eq!(substring(Some("abc"), 0, 17).as_deref(), Some("abc"));
        assert_eq!(substring(Some("abc"), 5, 7).as_deref(), Some(""));
        // A position between the code-point and code-unit lengths clamps
        // instead of failing.
        assert_eq!(substring(Some("\u{1F600}"), 0, 2).as_deref(), Some("\u{1F600}"));
        assert_eq!(substring(Some("a\u{1F600}b"), 3, 4).as_deref(), Some(""));
        assert_eq!(substring(Some("abc"), isize::MIN, isize::MAX).as_deref(), Some("abc"));
    }

    #[test]
    fn test_round_trip() {
        for s in ["", "abc", FAMILY, "a\u{1F600}b", "\u{D799}\u{123}"] {
            let length = code_point_length(s) as isize;
            assert_eq!(substring(Some(s), 0, length).as_deref(), Some(s));
        }
    }

    #[test]
    fn test_lengths() {
        assert_eq!(code_point_length(""), 0);
        assert_eq!(utf16_length(""), 0);
        assert_eq!(code_point_length(FAMILY), 4);
        assert_eq!(utf16_length(FAMILY), 8);
        assert_eq!(code_point_length("a\u{1F600}b"), 3);
        assert_eq!(utf16_length("a\u{1F600}b"), 4);
    }
}
