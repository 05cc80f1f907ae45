//! Line/column coordinates within the input text.

use core::fmt;

/// A position in the input text: 1-origin line and column numbers.
///
/// Coordinates order lexicographically, line first.
///
/// # Examples
///
/// ```
/// use jsonpump::Coord;
///
/// let a = Coord { line: 1, column: 9 };
/// let b = Coord { line: 2, column: 1 };
/// assert!(a < b);
/// assert_eq!(b.to_string(), "2:1");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub line: u32,
    pub column: u32,
}

impl Default for Coord {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Coord {
    pub(crate) fn advance_column(&mut self) {
        self.column += 1;
    }

    /// Move to the next line. The column is set to 0 rather than 1 because
    /// the parse loop advances the column once for every consumed code point,
    /// and that advance lands after the matcher has moved the row.
    pub(crate) fn advance_row(&mut self) {
        self.column = 0;
        self.line += 1;
    }

    /// Second half of a CR/LF pair: the line was already advanced for the CR.
    pub(crate) fn reset_column(&mut self) {
        self.column = 0;
    }
}
