//! Mastermind code representation
//!
//! A Code is an ordered sequence of 4 symbols, each a colour numbered 1 through 6.
//! Codes can only be built through validation, so every `Code` value is well-formed.

use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Number of symbols in a code
pub const CODE_LENGTH: usize = 4;

/// Number of colours in the alphabet (symbols are `1..=COLORS`)
pub const COLORS: u8 = 6;

/// Total number of distinct codes (6^4)
pub const CODE_SPACE_SIZE: usize = 1296;

/// A 4-symbol Mastermind code
///
/// Duplicates are allowed. The type is `Copy` because a code is just four bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([u8; CODE_LENGTH]);

/// Error type for malformed codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("Code must be exactly 4 symbols, got {0}")]
    InvalidLength(usize),
    #[error("Symbol {symbol} at position {} is not between 1 and 6", .position + 1)]
    SymbolOutOfRange { position: usize, symbol: u8 },
}

impl Code {
    /// Check whether a raw symbol sequence is a well-formed code
    ///
    /// A code is valid iff it has exactly 4 symbols and every symbol lies in `1..=6`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// assert!(Code::is_valid(&[1, 2, 3, 4]));
    /// assert!(!Code::is_valid(&[1, 2, 3]));
    /// assert!(!Code::is_valid(&[0, 2, 3, 7]));
    /// ```
    #[must_use]
    pub fn is_valid(symbols: &[u8]) -> bool {
        Self::validate(symbols).is_ok()
    }

    /// Create a new Code from raw symbols
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - Length is not exactly 4
    /// - Any symbol lies outside `1..=6`
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// let code = Code::new(&[1, 1, 2, 3]).unwrap();
    /// assert_eq!(code.symbols(), &[1, 1, 2, 3]);
    ///
    /// assert!(Code::new(&[1, 2, 3, 4, 5]).is_err());
    /// ```
    pub fn new(symbols: &[u8]) -> Result<Self, CodeError> {
        Self::validate(symbols)?;

        let mut code = [0u8; CODE_LENGTH];
        code.copy_from_slice(symbols);
        Ok(Self(code))
    }

    fn validate(symbols: &[u8]) -> Result<(), CodeError> {
        if symbols.len() != CODE_LENGTH {
            return Err(CodeError::InvalidLength(symbols.len()));
        }

        if let Some((position, &symbol)) = symbols
            .iter()
            .enumerate()
            .find(|&(_, s)| !(1..=COLORS).contains(s))
        {
            return Err(CodeError::SymbolOutOfRange { position, symbol });
        }

        Ok(())
    }

    /// Draw a code of 4 independent, uniformly random symbols
    ///
    /// Valid by construction, no rejection step needed.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut code = [0u8; CODE_LENGTH];
        for symbol in &mut code {
            *symbol = rng.random_range(1..=COLORS);
        }
        Self(code)
    }

    /// Enumerate every code in lexicographic order (1111, 1112, ..., 6666)
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut codes = Vec::with_capacity(CODE_SPACE_SIZE);

        for index in 0..CODE_SPACE_SIZE {
            let mut code = [0u8; CODE_LENGTH];
            let mut rest = index;
            for symbol in code.iter_mut().rev() {
                *symbol = (rest % COLORS as usize) as u8 + 1;
                rest /= COLORS as usize;
            }
            codes.push(Self(code));
        }

        codes
    }

    /// Get the symbols as an array
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Get the symbol at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn symbol_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Count occurrences of each colour
    ///
    /// Index 0 is unused so that `counts[symbol]` reads naturally.
    #[inline]
    #[must_use]
    pub(crate) fn color_counts(&self) -> [u8; COLORS as usize + 1] {
        let mut counts = [0u8; COLORS as usize + 1];
        for &symbol in &self.0 {
            counts[symbol as usize] += 1;
        }
        counts
    }
}

impl TryFrom<&[u8]> for Code {
    type Error = CodeError;

    fn try_from(symbols: &[u8]) -> Result<Self, Self::Error> {
        Self::new(symbols)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn code_creation_valid() {
        let code = Code::new(&[1, 2, 3, 4]).unwrap();
        assert_eq!(code.symbols(), &[1, 2, 3, 4]);
        assert_eq!(code.symbol_at(0), 1);
        assert_eq!(code.symbol_at(3), 4);
    }

    #[test]
    fn code_allows_duplicates() {
        assert!(Code::is_valid(&[6, 6, 6, 6]));
        assert!(Code::is_valid(&[1, 1, 2, 2]));
    }

    #[test]
    fn code_creation_invalid_length() {
        assert_eq!(Code::new(&[1, 2, 3]), Err(CodeError::InvalidLength(3)));
        assert_eq!(
            Code::new(&[1, 2, 3, 4, 5]),
            Err(CodeError::InvalidLength(5))
        );
        assert_eq!(Code::new(&[]), Err(CodeError::InvalidLength(0)));
    }

    #[test]
    fn code_creation_symbol_out_of_range() {
        assert_eq!(
            Code::new(&[1, 0, 3, 4]),
            Err(CodeError::SymbolOutOfRange {
                position: 1,
                symbol: 0
            })
        );
        assert_eq!(
            Code::new(&[1, 2, 3, 7]),
            Err(CodeError::SymbolOutOfRange {
                position: 3,
                symbol: 7
            })
        );
    }

    #[test]
    fn is_valid_boundaries() {
        assert!(Code::is_valid(&[1, 1, 1, 1]));
        assert!(Code::is_valid(&[6, 6, 6, 6]));
        assert!(!Code::is_valid(&[0, 1, 1, 1]));
        assert!(!Code::is_valid(&[1, 1, 1, 7]));
        assert!(!Code::is_valid(&[]));
    }

    #[test]
    fn error_messages_are_one_based() {
        let err = Code::new(&[1, 9, 1, 1]).unwrap_err();
        assert_eq!(err.to_string(), "Symbol 9 at position 2 is not between 1 and 6");
    }

    #[test]
    fn all_codes_enumerated_in_order() {
        let codes = Code::all();
        assert_eq!(codes.len(), CODE_SPACE_SIZE);
        assert_eq!(codes[0].symbols(), &[1, 1, 1, 1]);
        assert_eq!(codes[1].symbols(), &[1, 1, 1, 2]);
        assert_eq!(codes[6].symbols(), &[1, 1, 2, 1]);
        assert_eq!(codes[CODE_SPACE_SIZE - 1].symbols(), &[6, 6, 6, 6]);
        assert!(codes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn random_codes_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let code = Code::random(&mut rng);
            assert!(Code::is_valid(code.symbols()));
        }
    }

    #[test]
    fn color_counts_with_duplicates() {
        let code = Code::new(&[2, 4, 4, 6]).unwrap();
        let counts = code.color_counts();
        assert_eq!(counts[2], 1);
        assert_eq!(counts[4], 2);
        assert_eq!(counts[6], 1);
        assert_eq!(counts[1], 0);
    }

    #[test]
    fn code_display() {
        let code = Code::new(&[1, 1, 2, 3]).unwrap();
        assert_eq!(format!("{code}"), "1123");
    }

    #[test]
    fn try_from_slice() {
        let raw: &[u8] = &[3, 3, 5, 1];
        let code = Code::try_from(raw).unwrap();
        assert_eq!(code.symbols(), &[3, 3, 5, 1]);
    }
}
