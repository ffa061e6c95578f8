//! Classification of UTF-16 surrogate code units and the surrogate-pair scan.
//!
//! The predicates here work on raw [`u16`] code units, so they stay usable on
//! ill-formed sequences (a lone high surrogate, a pair in the wrong order)
//! that a [`str`] can never hold.

use std::ops::RangeInclusive;

/// The reserved range of high (leading) surrogate code units.
pub const HIGH_SURROGATES: RangeInclusive<u16> = 0xD800..=0xDBFF;

/// The reserved range of low (trailing) surrogate code units.
pub const LOW_SURROGATES: RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Checks if the code unit is a high (leading) surrogate.
///
/// # Examples
///
/// ```
/// # use codepoint::surrogate::is_high_surrogate;
/// assert!(is_high_surrogate(0xD800));
/// assert!(is_high_surrogate(0xDBFF));
///
/// assert!(!is_high_surrogate(0xD799));
/// assert!(!is_high_surrogate(0xDC00));
/// ```
#[must_use]
#[inline]
#[doc(alias = "is_lead_surrogate")]
pub const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

/// Checks if the code unit is a low (trailing) surrogate.
///
/// # Examples
///
/// ```
/// # use codepoint::surrogate::is_low_surrogate;
/// assert!(is_low_surrogate(0xDC00));
/// assert!(is_low_surrogate(0xDFFF));
///
/// assert!(!is_low_surrogate(0xDBFF));
/// assert!(!is_low_surrogate(0xE000));
/// ```
#[must_use]
#[inline]
#[doc(alias = "is_trail_surrogate")]
pub const fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

/// Checks if the two code units form a surrogate pair: a high surrogate
/// directly followed by a low surrogate. The order matters.
///
/// # Examples
///
/// ```
/// # use codepoint::surrogate::is_surrogate_pair;
/// // U+1F642
/// assert!(is_surrogate_pair(0xD83D, 0xDE42));
///
/// assert!(!is_surrogate_pair(0xDE42, 0xD83D));
/// assert!(!is_surrogate_pair(b'a' as u16, 0xDE42));
/// ```
#[must_use]
#[inline]
pub const fn is_surrogate_pair(high: u16, low: u16) -> bool {
    is_high_surrogate(high) && is_low_surrogate(low)
}

/// Returns the supplementary character a surrogate pair encodes, or `None`
/// if the units do not form a pair.
///
/// # Examples
///
/// ```
/// # use codepoint::surrogate::compose_surrogates;
/// assert_eq!(compose_surrogates(0xD83D, 0xDE42), Some('\u{1F642}'));
/// assert_eq!(compose_surrogates(0xDE42, 0xD83D), None);
/// ```
#[must_use]
#[inline]
pub const fn compose_surrogates(high: u16, low: u16) -> Option<char> {
    if !is_surrogate_pair(high, low) {
        return None;
    }
    char::from_u32((((high as u32 - 0xD800) << 10) | (low as u32 - 0xDC00)) + 0x1_0000)
}

/// Checks if the string contains at least one surrogate pair, that is, at
/// least one supplementary character. A missing string contains none.
///
/// The scan walks the code units of the string from the left and stops at
/// the first pair, so the cost is `O(n)` in the worst case and far less on
/// strings where a supplementary character occurs early. No allocation is
/// performed.
///
/// # Examples
///
/// ```
/// # use codepoint::prelude::*;
/// assert!(contains_surrogate_pair(Some("ab\u{1F642}d")));
///
/// assert!(!contains_surrogate_pair(None));
/// assert!(!contains_surrogate_pair(Some("")));
/// assert!(!contains_surrogate_pair(Some("abcd")));
/// ```
#[must_use]
#[inline]
pub fn contains_surrogate_pair(input: Option<&str>) -> bool {
    match input {
        Some(s) => units_contain_surrogate_pair(s.encode_utf16()),
        None => false,
    }
}

/// Checks if the sequence of code units contains a high surrogate directly
/// followed by a low surrogate.
///
/// This is the scan behind [`contains_surrogate_pair`], exposed for callers
/// that already hold UTF-16 data. The sequence does not have to be
/// well-formed: lone surrogates and misordered pairs are simply never
/// reported.
///
/// The iterator is consumed only up to the first pair found.
///
/// # Examples
///
/// ```
/// # use codepoint::surrogate::units_contain_surrogate_pair;
/// assert!(units_contain_surrogate_pair([0x61, 0xD83D, 0xDE42]));
///
/// // A lone trailing high surrogate is not a pair.
/// assert!(!units_contain_surrogate_pair([0x61, 0xD83D]));
/// // Neither is a low surrogate followed by a high one.
/// assert!(!units_contain_surrogate_pair([0xDE42, 0xD83D]));
/// ```
#[must_use]
pub fn units_contain_surrogate_pair<I>(units: I) -> bool
where
    I: IntoIterator<Item = u16>,
{
    let mut last: Option<u16> = None;
    for unit in units {
        if let Some(high) = last {
            if is_surrogate_pair(high, unit) {
                return true;
            }
        }
        last = Some(unit);
    }
    false
}
