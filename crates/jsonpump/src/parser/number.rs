//! The number matcher.
//!
//! Grammar (RFC 8259): `number = [ minus ] int [ frac ] [ exp ]` with
//! `int = 0 / (digit1-9 *DIGIT)`, `frac = "." 1*DIGIT`, and
//! `exp = ("e" / "E") ["+" / "-"] 1*DIGIT`. A leading `+` is additionally
//! accepted under [`Extensions::LEADING_PLUS`](crate::Extensions).
//!
//! While the literal is still integral it accumulates in a `u64` with a sign
//! flag; the first `.` or exponent promotes the accumulator to a double. The
//! emission choice is deliberate: non-negative integers go to
//! `uint64_value` so the full unsigned range survives, negative ones to
//! `int64_value`, everything else to `double_value`.

use crate::backend::Backend;
use crate::error::SyntaxError;
use crate::parser::matcher::Step;
use crate::parser::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumState {
    /// Before any character; `-` (or `+` under the extension) or a digit.
    LeadingMinus,
    /// The first digit of the `int` production.
    IntegerInitialDigit,
    /// Inside the digits of a non-zero `int`.
    IntegerDigit,
    /// After a leading `0`: only `.`, an exponent, or the end may follow.
    Frac,
    /// After the decimal point, before its first digit.
    FracInitialDigit,
    /// Inside the fraction digits.
    FracDigit,
    /// After `e`/`E`, before a sign or digit.
    ExponentSign,
    /// After the exponent sign, before its first digit.
    ExponentInitialDigit,
    /// Inside the exponent digits.
    ExponentDigit,
    Done,
}

#[derive(Debug)]
pub(crate) struct NumberMatcher {
    state: NumState,
    is_neg: bool,
    is_integer: bool,
    int_acc: u64,
    whole_part: f64,
    frac_part: f64,
    frac_scale: f64,
    exp_is_negative: bool,
    exponent: u32,
}

impl NumberMatcher {
    pub(crate) fn new() -> Self {
        Self {
            state: NumState::LeadingMinus,
            is_neg: false,
            is_integer: true,
            int_acc: 0,
            whole_part: 0.0,
            frac_part: 0.0,
            frac_scale: 1.0,
            exp_is_negative: false,
            exponent: 0,
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.state == NumState::Done
    }

    pub(crate) fn consume<B: Backend>(&mut self, p: &mut Parser<B>, ch: Option<char>) -> Step {
        let Some(c) = ch else {
            // End of input. Fine after a complete int/frac/exp, an error in
            // the middle of one.
            if !self.in_terminal_state() {
                p.set_error(SyntaxError::ExpectedDigits);
            }
            self.complete(p);
            return (None, true);
        };
        let consumed = match self.state {
            NumState::LeadingMinus => self.leading_minus(p, c),
            NumState::IntegerInitialDigit => self.integer_initial_digit(p, c),
            NumState::IntegerDigit => self.integer_digit(p, c),
            NumState::Frac => self.frac(p, c),
            NumState::FracInitialDigit | NumState::FracDigit => self.frac_digit(p, c),
            NumState::ExponentSign => self.exponent_sign(p, c),
            NumState::ExponentInitialDigit | NumState::ExponentDigit => self.exponent_digit(p, c),
            NumState::Done => unreachable!("consume() called on a finished matcher"),
        };
        (None, consumed)
    }

    /// The states in which the end of the literal is grammatical.
    fn in_terminal_state(&self) -> bool {
        matches!(
            self.state,
            NumState::IntegerDigit | NumState::Frac | NumState::FracDigit | NumState::ExponentDigit
        )
    }

    /// Promotes the integer accumulator into the float accumulator. Idempotent.
    fn number_is_float(&mut self) {
        if self.is_integer {
            #[allow(clippy::cast_precision_loss)]
            {
                self.whole_part = self.int_acc as f64;
            }
            self.is_integer = false;
        }
    }

    fn leading_minus<B: Backend>(&mut self, p: &mut Parser<B>, c: char) -> bool {
        match c {
            '-' => {
                self.is_neg = true;
                self.state = NumState::IntegerInitialDigit;
                true
            }
            // The root matcher only lets `+` through when the extension is on.
            '+' => {
                self.state = NumState::IntegerInitialDigit;
                true
            }
            '0'..='9' => {
                self.state = NumState::IntegerInitialDigit;
                self.integer_initial_digit(p, c)
            }
            _ => unreachable!("number matcher started on a non-number character"),
        }
    }

    fn integer_initial_digit<B: Backend>(&mut self, p: &mut Parser<B>, c: char) -> bool {
        match c {
            '0' => self.state = NumState::Frac,
            '1'..='9' => {
                self.int_acc = u64::from(digit(c));
                self.state = NumState::IntegerDigit;
            }
            // A bare minus (or plus) with no digit after it.
            _ => p.set_error(SyntaxError::UnrecognizedToken),
        }
        true
    }

    fn integer_digit<B: Backend>(&mut self, p: &mut Parser<B>, c: char) -> bool {
        match c {
            '.' => {
                self.number_is_float();
                self.state = NumState::FracInitialDigit;
                true
            }
            'e' | 'E' => {
                self.number_is_float();
                self.state = NumState::ExponentSign;
                true
            }
            '0'..='9' => {
                match self.int_acc.checked_mul(10).and_then(|acc| acc.checked_add(u64::from(digit(c)))) {
                    Some(acc) => self.int_acc = acc,
                    None => p.set_error(SyntaxError::NumberOutOfRange),
                }
                true
            }
            _ => {
                self.complete(p);
                false
            }
        }
    }

    fn frac<B: Backend>(&mut self, p: &mut Parser<B>, c: char) -> bool {
        match c {
            '.' => {
                self.state = NumState::FracInitialDigit;
                true
            }
            'e' | 'E' => {
                self.state = NumState::ExponentSign;
                true
            }
            // A digit after a leading zero is not part of any following
            // token either, so it can be rejected right here.
            '0'..='9' => {
                p.set_error(SyntaxError::NumberOutOfRange);
                true
            }
            _ => {
                // The frac production is optional.
                self.complete(p);
                false
            }
        }
    }

    fn frac_digit<B: Backend>(&mut self, p: &mut Parser<B>, c: char) -> bool {
        match c {
            'e' | 'E' => {
                self.number_is_float();
                if self.state == NumState::FracInitialDigit {
                    // `1.e5`: the fraction needs at least one digit.
                    p.set_error(SyntaxError::UnrecognizedToken);
                } else {
                    self.state = NumState::ExponentSign;
                }
                true
            }
            '0'..='9' => {
                self.number_is_float();
                self.frac_part = self.frac_part * 10.0 + f64::from(digit(c));
                self.frac_scale *= 10.0;
                self.state = NumState::FracDigit;
                true
            }
            _ => {
                if self.state == NumState::FracInitialDigit {
                    p.set_error(SyntaxError::UnrecognizedToken);
                    true
                } else {
                    self.complete(p);
                    false
                }
            }
        }
    }

    fn exponent_sign<B: Backend>(&mut self, p: &mut Parser<B>, c: char) -> bool {
        self.number_is_float();
        self.state = NumState::ExponentInitialDigit;
        match c {
            '+' => {
                self.exp_is_negative = false;
                true
            }
            '-' => {
                self.exp_is_negative = true;
                true
            }
            _ => self.exponent_digit(p, c),
        }
    }

    fn exponent_digit<B: Backend>(&mut self, p: &mut Parser<B>, c: char) -> bool {
        match c {
            '0'..='9' => {
                // Saturation is safe: anything near saturation is far past
                // the overflow threshold checked in make_result.
                self.exponent = self.exponent.saturating_mul(10).saturating_add(digit(c));
                self.state = NumState::ExponentDigit;
                true
            }
            _ => {
                if self.state == NumState::ExponentInitialDigit {
                    p.set_error(SyntaxError::UnrecognizedToken);
                    true
                } else {
                    self.complete(p);
                    false
                }
            }
        }
    }

    fn complete<B: Backend>(&mut self, p: &mut Parser<B>) {
        self.state = NumState::Done;
        self.make_result(p);
    }

    fn make_result<B: Backend>(&mut self, p: &mut Parser<B>) {
        if p.has_error() {
            return;
        }

        if self.is_integer {
            // The magnitude of i64::MIN, the one value where the negative
            // range exceeds the positive.
            const UMIN: u64 = 1 << 63;
            if self.is_neg {
                if self.int_acc > UMIN {
                    p.set_error(SyntaxError::NumberOutOfRange);
                    return;
                }
                #[allow(clippy::cast_possible_wrap)]
                let value = if self.int_acc == UMIN {
                    i64::MIN
                } else {
                    -(self.int_acc as i64)
                };
                let emitted = p.backend.int64_value(value);
                p.check(emitted);
            } else {
                let emitted = p.backend.uint64_value(self.int_acc);
                p.check(emitted);
            }
            return;
        }

        let mut value = self.whole_part + self.frac_part / self.frac_scale;
        let scale = pow10(self.exponent);
        if scale.is_infinite() {
            p.set_error(SyntaxError::NumberOutOfRange);
            return;
        }
        value *= if self.exp_is_negative { 1.0 / scale } else { scale };
        if self.is_neg {
            value = -value;
        }
        if value.is_infinite() || value.is_nan() {
            p.set_error(SyntaxError::NumberOutOfRange);
            return;
        }
        let emitted = p.backend.double_value(value);
        p.check(emitted);
    }
}

fn digit(c: char) -> u32 {
    c as u32 - '0' as u32
}

/// 10^e, saturating to infinity. 10^308 is the last finite power, so the
/// multiply loop is bounded regardless of the accumulated exponent.
fn pow10(e: u32) -> f64 {
    if e > 308 {
        return f64::INFINITY;
    }
    let mut value = 1.0_f64;
    for _ in 0..e {
        value *= 10.0;
    }
    value
}
