//! Incremental transcoding: UTF-8 bytes to code points on the way in, and
//! UTF-16 escape units back to UTF-8 inside string literals.

use alloc::string::String;

/// Raised for any byte sequence that is not well-formed UTF-8.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct InvalidUtf8;

/// Byte-at-a-time UTF-8 decoder.
///
/// Bytes may arrive split across arbitrary input chunks; the decoder carries
/// the partial code point in between. Overlong encodings, surrogate code
/// points, and values past U+10FFFF are rejected at the byte that proves the
/// sequence malformed.
#[derive(Debug, Default)]
pub(crate) struct Utf8Decoder {
    acc: u32,
    min: u32,
    remaining: u8,
}

impl Utf8Decoder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Feed one byte. Returns the completed code point, `None` while a
    /// multi-byte sequence is still open, or an error.
    pub(crate) fn feed(&mut self, byte: u8) -> Result<Option<char>, InvalidUtf8> {
        if self.remaining == 0 {
            return match byte {
                0x00..=0x7f => Ok(Some(byte as char)),
                0xc2..=0xdf => self.begin(u32::from(byte & 0x1f), 0x80, 1),
                0xe0..=0xef => self.begin(u32::from(byte & 0x0f), 0x800, 2),
                0xf0..=0xf4 => self.begin(u32::from(byte & 0x07), 0x1_0000, 3),
                // 0x80..=0xbf is a stray continuation byte; 0xc0/0xc1 and
                // 0xf5..=0xff can never begin a well-formed sequence.
                _ => Err(InvalidUtf8),
            };
        }

        if byte & 0xc0 != 0x80 {
            self.remaining = 0;
            return Err(InvalidUtf8);
        }
        self.acc = (self.acc << 6) | u32::from(byte & 0x3f);
        self.remaining -= 1;
        if self.remaining > 0 {
            return Ok(None);
        }
        if self.acc < self.min {
            return Err(InvalidUtf8);
        }
        // `from_u32` rejects surrogates and anything past U+10FFFF.
        char::from_u32(self.acc).map(Some).ok_or(InvalidUtf8)
    }

    fn begin(&mut self, acc: u32, min: u32, remaining: u8) -> Result<Option<char>, InvalidUtf8> {
        self.acc = acc;
        self.min = min;
        self.remaining = remaining;
        Ok(None)
    }
}

/// Raised for a malformed UTF-16 unit sequence: an orphan low surrogate, or a
/// high surrogate followed by anything but a low surrogate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct InvalidUtf16;

const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xd800..=0xdbff)
}

const fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, 0xdc00..=0xdfff)
}

/// Assembles UTF-16 code units (from `\uXXXX` escapes) into UTF-8.
///
/// Surrogate-pair state survives between units so that a pair split across
/// two escapes — or even two input chunks — reassembles correctly.
#[derive(Debug, Default)]
pub(crate) struct Utf16Collector {
    pending_high: Option<u16>,
}

impl Utf16Collector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// True while a high surrogate is waiting for its partner.
    pub(crate) fn partial(&self) -> bool {
        self.pending_high.is_some()
    }

    /// Feed one code unit, appending the completed character to `out`.
    pub(crate) fn feed(&mut self, unit: u16, out: &mut String) -> Result<(), InvalidUtf16> {
        if let Some(high) = self.pending_high.take() {
            if !is_low_surrogate(unit) {
                return Err(InvalidUtf16);
            }
            let cp = 0x1_0000 + ((u32::from(high) & 0x3ff) << 10) + (u32::from(unit) & 0x3ff);
            // Combined surrogates always land in U+10000..=U+10FFFF.
            return match char::from_u32(cp) {
                Some(ch) => {
                    out.push(ch);
                    Ok(())
                }
                None => Err(InvalidUtf16),
            };
        }
        if is_high_surrogate(unit) {
            self.pending_high = Some(unit);
            return Ok(());
        }
        if is_low_surrogate(unit) {
            return Err(InvalidUtf16);
        }
        match char::from_u32(u32::from(unit)) {
            Some(ch) => {
                out.push(ch);
                Ok(())
            }
            None => Err(InvalidUtf16),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::{InvalidUtf8, Utf16Collector, Utf8Decoder};

    fn decode_all(bytes: &[u8]) -> Result<String, InvalidUtf8> {
        let mut decoder = Utf8Decoder::new();
        let mut out = String::new();
        for &b in bytes {
            if let Some(ch) = decoder.feed(b)? {
                out.push(ch);
            }
        }
        Ok(out)
    }

    #[test]
    fn ascii_and_multibyte() {
        assert_eq!(decode_all("aé€𝄞".as_bytes()).unwrap(), "aé€𝄞");
    }

    #[test]
    fn rejects_overlong() {
        // 0xC0 0xAF is an overlong '/'; 0xE0 0x80 0x80 an overlong NUL.
        assert_eq!(decode_all(&[0xc0, 0xaf]), Err(InvalidUtf8));
        assert_eq!(decode_all(&[0xe0, 0x80, 0x80]), Err(InvalidUtf8));
    }

    #[test]
    fn rejects_surrogates_and_out_of_range() {
        // U+D800 encoded directly.
        assert_eq!(decode_all(&[0xed, 0xa0, 0x80]), Err(InvalidUtf8));
        // U+110000.
        assert_eq!(decode_all(&[0xf4, 0x90, 0x80, 0x80]), Err(InvalidUtf8));
    }

    #[test]
    fn rejects_stray_bytes() {
        assert_eq!(decode_all(&[0x80]), Err(InvalidUtf8));
        assert_eq!(decode_all(&[0xc2, 0x20]), Err(InvalidUtf8));
        assert_eq!(decode_all(&[0xff]), Err(InvalidUtf8));
    }

    #[test]
    fn surrogate_pair_combines() {
        let mut collector = Utf16Collector::new();
        let mut out = String::new();
        collector.feed(0xd834, &mut out).unwrap();
        assert!(collector.partial());
        collector.feed(0xdd1e, &mut out).unwrap();
        assert!(!collector.partial());
        assert_eq!(out, "𝄞");
        assert_eq!(out.as_bytes(), &[0xf0, 0x9d, 0x84, 0x9e][..]);
    }

    #[test]
    fn orphan_surrogates_fail() {
        let mut out = String::new();
        assert!(Utf16Collector::new().feed(0xdc00, &mut out).is_err());

        let mut collector = Utf16Collector::new();
        collector.feed(0xd834, &mut out).unwrap();
        assert!(collector.feed(0x0041, &mut out).is_err());
    }
}
