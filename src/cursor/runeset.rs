//! Sets of runes accepted or stopped on by the cursor.
//!
//! Anything that can answer "is this char a member" is a [`RuneSet`]:
//! string literals (`"0123456789"`), single chars, char slices and arrays,
//! inclusive ranges (`'a'..='z'`) and predicates (`char::is_whitespace`).
//! End of input is never a member of any set.

use std::ops::RangeInclusive;

/// Membership test used by `accept`, `accept_run` and `advance_until`.
///
/// Must not shadow `str::contains` or `<[T]>::contains` where the trait is
/// in scope.
pub trait RuneSet {
    fn contains_rune(&self, rune: char) -> bool;
}

impl RuneSet for &str {
    fn contains_rune(&self, rune: char) -> bool {
        str::contains(self, rune)
    }
}

impl RuneSet for String {
    fn contains_rune(&self, rune: char) -> bool {
        str::contains(self, rune)
    }
}

impl RuneSet for char {
    fn contains_rune(&self, rune: char) -> bool {
        *self == rune
    }
}

impl RuneSet for &[char] {
    fn contains_rune(&self, rune: char) -> bool {
        self.iter().any(|&c| c == rune)
    }
}

impl<const N: usize> RuneSet for [char; N] {
    fn contains_rune(&self, rune: char) -> bool {
        self.as_slice().contains(&rune)
    }
}

impl RuneSet for RangeInclusive<char> {
    fn contains_rune(&self, rune: char) -> bool {
        RangeInclusive::contains(self, &rune)
    }
}

impl<F> RuneSet for F
where
    F: Fn(char) -> bool,
{
    fn contains_rune(&self, rune: char) -> bool {
        self(rune)
    }
}
