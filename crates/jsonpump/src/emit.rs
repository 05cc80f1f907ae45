//! Serializing a [`Value`] back to JSON text.
//!
//! [`emit`] writes the pretty form: two-space indentation, one member per
//! line, empty containers kept on one line, and a trailing newline.
//! `Display` on [`Value`] is the compact single-line form. Both print
//! doubles in a round-trippable notation that always keeps a fraction or
//! exponent, so a reparse yields a double again.

use core::fmt::{self, Write};

use crate::dom::Value;

/// Writes `value` as indented JSON followed by a newline.
///
/// # Examples
///
/// ```
/// use jsonpump::{emit, parse};
///
/// let value = parse(br#"{"a": [1, 2]}"#).unwrap();
/// let mut out = String::new();
/// emit(&mut out, &value).unwrap();
/// assert_eq!(out, "{\n  \"a\": [\n    1,\n    2\n  ]\n}\n");
/// ```
///
/// # Errors
///
/// Only whatever the underlying writer reports.
pub fn emit<W: Write>(out: &mut W, value: &Value) -> fmt::Result {
    emit_value(out, value, 0)?;
    out.write_char('\n')
}

fn emit_value<W: Write>(out: &mut W, value: &Value, depth: usize) -> fmt::Result {
    match value {
        Value::Array(elements) if !elements.is_empty() => {
            out.write_str("[\n")?;
            let mut first = true;
            for element in elements {
                if !first {
                    out.write_str(",\n")?;
                }
                first = false;
                indent(out, depth + 1)?;
                emit_value(out, element, depth + 1)?;
            }
            out.write_char('\n')?;
            indent(out, depth)?;
            out.write_char(']')
        }
        Value::Object(members) if !members.is_empty() => {
            out.write_str("{\n")?;
            let mut first = true;
            for (key, member) in members {
                if !first {
                    out.write_str(",\n")?;
                }
                first = false;
                indent(out, depth + 1)?;
                emit_string(out, key)?;
                out.write_str(": ")?;
                emit_value(out, member, depth + 1)?;
            }
            out.write_char('\n')?;
            indent(out, depth)?;
            out.write_char('}')
        }
        _ => emit_compact(out, value),
    }
}

fn indent<W: Write>(out: &mut W, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str("  ")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        emit_compact(f, self)
    }
}

fn emit_compact<W: Write>(out: &mut W, value: &Value) -> fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Boolean(v) => out.write_str(if *v { "true" } else { "false" }),
        Value::Int(v) => write!(out, "{v}"),
        Value::UInt(v) => write!(out, "{v}"),
        Value::Double(v) => emit_double(out, *v),
        Value::String(s) => emit_string(out, s),
        Value::Array(elements) => {
            out.write_char('[')?;
            let mut first = true;
            for element in elements {
                if !first {
                    out.write_char(',')?;
                }
                first = false;
                emit_compact(out, element)?;
            }
            out.write_char(']')
        }
        Value::Object(members) => {
            out.write_char('{')?;
            let mut first = true;
            for (key, member) in members {
                if !first {
                    out.write_char(',')?;
                }
                first = false;
                emit_string(out, key)?;
                out.write_char(':')?;
                emit_compact(out, member)?;
            }
            out.write_char('}')
        }
    }
}

fn emit_double<W: Write>(out: &mut W, v: f64) -> fmt::Result {
    if !v.is_finite() {
        // JSON has no spelling for these.
        return out.write_str("null");
    }
    // The Debug form is the shortest representation that reparses exactly and
    // always carries a `.` or an exponent, so the value stays a double.
    write!(out, "{v:?}")
}

fn emit_string<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\u{0008}' => out.write_str("\\b")?,
            '\u{000c}' => out.write_str("\\f")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if (c as u32) < 0x20 => write!(out, "\\u{:04x}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}
