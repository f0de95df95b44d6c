//! Mastermind code representation
//!
//! A Code stores exactly `CODE_LENGTH` symbols drawn from `ALPHABET`, normalized to upper case.

use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Symbols a code may be built from
pub const ALPHABET: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// Number of symbols in every code
pub const CODE_LENGTH: usize = 4;

/// Number of distinct codes (|ALPHABET| ^ `CODE_LENGTH`)
pub const CODE_SPACE_SIZE: usize = ALPHABET.len().pow(CODE_LENGTH as u32);

/// A fixed-length Mastermind code, used both for secrets and guesses
///
/// Symbols are stored as upper-case ASCII bytes. Codes are `Copy` and compare by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([u8; CODE_LENGTH]);

/// Error type for raw input that is not a valid code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LENGTH} symbols, got {len}")
            }
            Self::InvalidSymbol(symbol) => write!(
                f,
                "Symbol '{symbol}' is not one of {}",
                ALPHABET.iter().collect::<String>()
            ),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a new Code from raw input
    ///
    /// Input is case-insensitive; the stored code is upper case.
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - Length is not exactly `CODE_LENGTH`
    /// - A symbol is outside `ALPHABET`
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// let code = Code::new("abcd").unwrap();
    /// assert_eq!(code.to_string(), "ABCD");
    ///
    /// assert!(Code::new("ABCDE").is_err());
    /// assert!(Code::new("ABCZ").is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CodeError> {
        let text = raw.as_ref().to_ascii_uppercase();

        let len = text.chars().count();
        if len != CODE_LENGTH {
            return Err(CodeError::InvalidLength(len));
        }

        let mut symbols = [0u8; CODE_LENGTH];
        for (slot, symbol) in symbols.iter_mut().zip(text.chars()) {
            if !ALPHABET.contains(&symbol) {
                return Err(CodeError::InvalidSymbol(symbol));
            }
            // ALPHABET is ASCII, so the cast is lossless
            *slot = symbol as u8;
        }

        Ok(Self(symbols))
    }

    /// Check whether raw input would produce a valid code
    #[must_use]
    pub fn validate(raw: &str) -> bool {
        Self::new(raw).is_ok()
    }

    /// Draw a code uniformly at random, symbols chosen independently with replacement
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| {
            ALPHABET[rng.random_range(0..ALPHABET.len())] as u8
        }))
    }

    /// Every code in lexicographic order (`AAAA`, `AAAB`, ..., `FFFF`)
    #[must_use]
    pub fn all() -> Vec<Self> {
        let base = ALPHABET.len();

        (0..CODE_SPACE_SIZE)
            .map(|mut index| {
                let mut symbols = [0u8; CODE_LENGTH];
                for slot in symbols.iter_mut().rev() {
                    *slot = ALPHABET[index % base] as u8;
                    index /= base;
                }
                Self(symbols)
            })
            .collect()
    }

    pub(crate) const fn from_symbols(symbols: [u8; CODE_LENGTH]) -> Self {
        Self(symbols)
    }

    /// Get the code as a byte array
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in &self.0 {
            write!(f, "{}", symbol as char)?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
