//! Opt-in deviations from strict RFC 8259.

use core::fmt;
use core::ops::{BitOr, BitOrAssign};

/// A set of syntax extensions, selected at parser construction.
///
/// The default (`Extensions::NONE`) is the strict RFC 8259 grammar. Flags
/// combine with `|`:
///
/// ```
/// use jsonpump::Extensions;
///
/// let relaxed = Extensions::SINGLE_LINE_COMMENTS | Extensions::ARRAY_TRAILING_COMMA;
/// assert!(relaxed.enabled(Extensions::ARRAY_TRAILING_COMMA));
/// assert!(!relaxed.enabled(Extensions::BASH_COMMENTS));
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Extensions(u8);

impl Extensions {
    /// Strict RFC 8259 grammar.
    pub const NONE: Extensions = Extensions(0);
    /// `#` starts a comment that runs to the end of the line.
    pub const BASH_COMMENTS: Extensions = Extensions(1 << 0);
    /// `//` starts a comment that runs to the end of the line.
    pub const SINGLE_LINE_COMMENTS: Extensions = Extensions(1 << 1);
    /// `/*` starts a comment that runs to the matching `*/`.
    pub const MULTI_LINE_COMMENTS: Extensions = Extensions(1 << 2);
    /// Permit a comma before the closing `]` of an array.
    pub const ARRAY_TRAILING_COMMA: Extensions = Extensions(1 << 3);
    /// Permit a comma before the closing `}` of an object.
    pub const OBJECT_TRAILING_COMMA: Extensions = Extensions(1 << 4);
    /// Permit strings enclosed in single quotes.
    pub const SINGLE_QUOTE_STRING: Extensions = Extensions(1 << 5);
    /// Permit a leading `+` sign on numbers.
    pub const LEADING_PLUS: Extensions = Extensions(1 << 6);
    /// Every extension at once.
    pub const ALL: Extensions = Extensions(0x7f);

    /// Returns true if any of the extensions in `flag` are enabled.
    #[must_use]
    pub const fn enabled(self, flag: Extensions) -> bool {
        self.0 & flag.0 != 0
    }
}

impl BitOr for Extensions {
    type Output = Extensions;

    fn bitor(self, rhs: Extensions) -> Extensions {
        Extensions(self.0 | rhs.0)
    }
}

impl BitOrAssign for Extensions {
    fn bitor_assign(&mut self, rhs: Extensions) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Extensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Extensions, &str); 7] = [
            (Extensions::BASH_COMMENTS, "BASH_COMMENTS"),
            (Extensions::SINGLE_LINE_COMMENTS, "SINGLE_LINE_COMMENTS"),
            (Extensions::MULTI_LINE_COMMENTS, "MULTI_LINE_COMMENTS"),
            (Extensions::ARRAY_TRAILING_COMMA, "ARRAY_TRAILING_COMMA"),
            (Extensions::OBJECT_TRAILING_COMMA, "OBJECT_TRAILING_COMMA"),
            (Extensions::SINGLE_QUOTE_STRING, "SINGLE_QUOTE_STRING"),
            (Extensions::LEADING_PLUS, "LEADING_PLUS"),
        ];
        if self.0 == 0 {
            return f.write_str("Extensions::NONE");
        }
        let mut first = true;
        for (flag, name) in NAMES {
            if self.enabled(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                first = false;
                f.write_str(name)?;
            }
        }
        Ok(())
    }
}
