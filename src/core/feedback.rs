//! Mastermind feedback scoring and representation
//!
//! Feedback only carries counts: how many guess symbols sit in the right position
//! (exact), how many are present elsewhere in the secret (color only), and how many
//! miss entirely. The rendered form lists markers in that order:
//! - `B` = exact match
//! - `W` = color-only match
//! - `-` = miss

use super::{CODE_LENGTH, Code};
use std::fmt;

/// Marker for a symbol in the correct position
pub const EXACT_MARKER: char = 'B';

/// Marker for a symbol present in the secret at another position
pub const COLOR_MARKER: char = 'W';

/// Marker for a symbol absent from the (unmatched part of the) secret
pub const MISS_MARKER: char = '-';

/// Scored comparison of a guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    exact: u8,
    color_only: u8,
}

impl Feedback {
    /// Every symbol in the correct position
    pub const PERFECT: Self = Self {
        exact: CODE_LENGTH as u8,
        color_only: 0,
    };

    /// Create feedback from raw counts
    ///
    /// Returns `None` if `exact + color_only` exceeds `CODE_LENGTH`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Feedback;
    ///
    /// assert_eq!(Feedback::new(1, 2).unwrap().miss(), 1);
    /// assert!(Feedback::new(3, 3).is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, color_only: u8) -> Option<Self> {
        if exact as usize + color_only as usize > CODE_LENGTH {
            return None;
        }
        Some(Self { exact, color_only })
    }

    /// Score `guess` against `secret`
    ///
    /// Codes may repeat symbols, so every secret slot can be matched at most once.
    ///
    /// # Algorithm
    /// 1. Exact pass: consume guess and secret slots that agree position by position
    /// 2. Color pass: each remaining guess symbol consumes the first remaining secret
    ///    slot holding the same symbol
    /// 3. Whatever is left in the guess counts as a miss
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback};
    ///
    /// let guess = Code::new("AABB").unwrap();
    /// let secret = Code::new("ABAB").unwrap();
    /// let feedback = Feedback::compare(&guess, &secret);
    ///
    /// assert_eq!(feedback.exact(), 2);
    /// assert_eq!(feedback.color_only(), 2);
    /// assert_eq!(feedback.miss(), 0);
    /// assert_eq!(feedback.to_string(), "BBWW");
    /// ```
    #[must_use]
    pub fn compare(guess: &Code, secret: &Code) -> Self {
        let guess = *guess.symbols();
        let secret = *secret.symbols();

        let mut guess_left = guess.map(Some);
        let mut secret_left = secret.map(Some);

        let mut exact = 0;
        for (i, (g, s)) in guess.iter().zip(&secret).enumerate() {
            if g == s {
                exact += 1;
                guess_left[i] = None;
                secret_left[i] = None;
            }
        }

        let mut color_only = 0;
        for symbol in guess_left.into_iter().flatten() {
            if let Some(slot) = secret_left.iter_mut().find(|slot| **slot == Some(symbol)) {
                *slot = None;
                color_only += 1;
            }
        }

        Self { exact, color_only }
    }

    /// Number of symbols in the correct position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of symbols present in the secret at a different position
    #[inline]
    #[must_use]
    pub const fn color_only(self) -> u8 {
        self.color_only
    }

    /// Number of symbols matched by neither pass
    #[inline]
    #[must_use]
    pub const fn miss(self) -> u8 {
        CODE_LENGTH as u8 - self.exact - self.color_only
    }

    /// Check if every symbol is an exact match
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.exact as usize == CODE_LENGTH
    }

    /// Markers sorted exact, then color-only, then miss
    #[must_use]
    pub fn markers(self) -> String {
        let mut result = String::with_capacity(CODE_LENGTH);
        result.extend(std::iter::repeat_n(EXACT_MARKER, self.exact as usize));
        result.extend(std::iter::repeat_n(COLOR_MARKER, self.color_only as usize));
        result.extend(std::iter::repeat_n(MISS_MARKER, self.miss() as usize));
        result
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fb(exact: u8, color_only: u8) -> Feedback {
        Feedback::new(exact, color_only).unwrap()
    }

    fn score(guess: &str, secret: &str) -> Feedback {
        Feedback::compare(&Code::new(guess).unwrap(), &Code::new(secret).unwrap())
    }

    #[test]
    fn perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.exact(), 4);
        assert_eq!(Feedback::PERFECT.miss(), 0);
        assert_eq!(Feedback::PERFECT.to_string(), "BBBB");
    }

    #[test]
    fn identical_codes_are_perfect() {
        for code in Code::all() {
            assert_eq!(Feedback::compare(&code, &code), Feedback::PERFECT);
        }
    }

    #[test]
    fn counts_always_sum_to_code_length() {
        let codes = Code::all();
        for guess in codes.iter().step_by(7) {
            for secret in codes.iter().step_by(11) {
                let feedback = Feedback::compare(guess, secret);
                assert_eq!(
                    usize::from(feedback.exact() + feedback.color_only() + feedback.miss()),
                    CODE_LENGTH
                );
            }
        }
    }

    #[test]
    fn all_miss() {
        let feedback = score("AAAA", "BCDE");
        assert_eq!(feedback, fb(0, 0));
        assert_eq!(feedback.miss(), 4);
        assert_eq!(feedback.to_string(), "----");
    }

    #[test]
    fn duplicates_consume_each_secret_slot_once() {
        // A@0 and B@3 are exact; the leftover A and B pair with the secret's B@1 and A@2
        assert_eq!(score("AABB", "ABAB"), fb(2, 2));
    }

    #[test]
    fn duplicates_in_guess_do_not_overcount() {
        // Only one A in the secret, so only one of the guess's A's scores
        assert_eq!(score("AAAB", "ACDE"), fb(1, 0));
        assert_eq!(score("BAAA", "CDEA"), fb(1, 0));
        assert_eq!(score("AABC", "DEFA"), fb(0, 1));
    }

    #[test]
    fn exact_takes_priority_over_color() {
        // The A in position 0 is exact; the secret has no second A for the guess's A@1
        assert_eq!(score("AACD", "ABEF"), fb(1, 0));
    }

    #[test]
    fn guess_and_secret_scenario() {
        assert_eq!(score("ABCE", "ABCD"), fb(3, 0));
        assert_eq!(score("ABCE", "ABCD").miss(), 1);
        assert_eq!(score("DCBA", "ABCD"), fb(0, 4));
        assert!(score("ABCD", "ABCD").is_perfect());
    }

    #[test]
    fn markers_sorted_exact_color_miss() {
        assert_eq!(fb(1, 2).markers(), "BWW-");
        assert_eq!(fb(0, 1).markers(), "W---");
        assert_eq!(fb(3, 0).markers(), "BBB-");
    }

    #[test]
    fn new_rejects_counts_over_code_length() {
        assert!(Feedback::new(3, 3).is_none());
        assert!(Feedback::new(5, 0).is_none());
        assert!(Feedback::new(255, 255).is_none());
        assert_eq!(Feedback::new(4, 0), Some(Feedback::PERFECT));
        assert_eq!(fb(0, 4).markers(), "WWWW");
    }
}
