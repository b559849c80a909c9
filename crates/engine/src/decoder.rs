//! Strict, incremental UTF-8 decoding over any `BufRead`.

use std::io::{self, BufRead};

use crate::error::{EngineError, Result};

/// A character together with the number of bytes it occupied in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedChar {
    pub ch: char,
    pub len: usize,
}

/// Pulls one character at a time out of a byte stream.
///
/// Sequences may straddle the reader's buffer boundaries. Once an error has
/// been returned the reader should be discarded; its position is left just
/// before the byte that broke the sequence.
#[derive(Debug)]
pub struct CharReader<R> {
    inner: R,
    offset: u64,
}

impl<R: BufRead> CharReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, offset: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Decodes the next character, or returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// [`EngineError::Decode`] for malformed UTF-8 (including a sequence cut
    /// short by end of input) and [`EngineError::Io`] when the reader fails.
    pub fn read_char(&mut self) -> Result<Option<DecodedChar>> {
        let start = self.offset;
        let Some(lead) = self.peek_byte()? else {
            return Ok(None);
        };
        self.advance();

        let len = sequence_len(lead);
        if len == 0 {
            return Err(malformed(start, &[lead]));
        }

        let mut buf = [lead, 0, 0, 0];
        for i in 1..len {
            match self.peek_byte()? {
                Some(b) if is_continuation(b) => {
                    buf[i] = b;
                    self.advance();
                }
                _ => return Err(malformed(start, &buf[..i])),
            }
        }

        // Lead and continuation bytes have the right shape; this rejects
        // overlong forms, surrogates and values above U+10FFFF.
        let bytes = &buf[..len];
        let ch = std::str::from_utf8(bytes)
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or_else(|| malformed(start, bytes))?;

        Ok(Some(DecodedChar { ch, len }))
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }

    fn advance(&mut self) {
        self.inner.consume(1);
        self.offset += 1;
    }
}

impl<R: BufRead> Iterator for CharReader<R> {
    type Item = Result<DecodedChar>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_char().transpose()
    }
}

/// Expected sequence length for a lead byte, or 0 if `b` cannot start one.
fn sequence_len(b: u8) -> usize {
    match b {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

fn malformed(offset: u64, bytes: &[u8]) -> EngineError {
    EngineError::Decode {
        offset,
        bytes: bytes.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};

    fn decode_all(input: &[u8]) -> Result<Vec<DecodedChar>> {
        CharReader::new(Cursor::new(input)).collect()
    }

    fn decode_err(input: &[u8]) -> (u64, Vec<u8>) {
        let mut reader = CharReader::new(Cursor::new(input));
        loop {
            match reader.read_char() {
                Ok(Some(_)) => {}
                Ok(None) => panic!("expected a decode error"),
                Err(EngineError::Decode { offset, bytes }) => return (offset, bytes),
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn empty_input_ends_immediately() {
        let mut reader = CharReader::new(Cursor::new(Vec::<u8>::new()));
        assert!(reader.read_char().unwrap().is_none());
        assert_eq!(reader.offset(), 0);
    }

    #[test]
    fn offset_counts_bytes_consumed() {
        let mut reader = CharReader::new(Cursor::new("a\u{e9}\u{20ac}".as_bytes()));
        let mut offsets = Vec::new();
        while reader.read_char().unwrap().is_some() {
            offsets.push(reader.offset());
        }
        assert_eq!(offsets, [1, 3, 6]);
    }

    #[test]
    fn reports_encoded_lengths() {
        let chars = decode_all("a\u{e9}\u{20ac}\u{1f600}".as_bytes()).unwrap();
        let lens: Vec<_> = chars.iter().map(|d| d.len).collect();
        let text: String = chars.iter().map(|d| d.ch).collect();
        assert_eq!(lens, [1, 2, 3, 4]);
        assert_eq!(text, "a\u{e9}\u{20ac}\u{1f600}");
    }

    #[test]
    fn decodes_across_buffer_boundaries() {
        let text = "h\u{e9}llo \u{4e16}\u{754c} \u{1f600}";
        let reader = BufReader::with_capacity(1, text.as_bytes());
        let decoded: String = CharReader::new(reader)
            .map(|r| r.map(|d| d.ch))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(decoded, text);
    }

    #[test]
    fn stray_continuation_byte() {
        assert_eq!(decode_err(b"ab\x80c"), (2, vec![0x80]));
    }

    #[test]
    fn invalid_lead_bytes() {
        for lead in [0xC0u8, 0xC1, 0xF5, 0xFF] {
            assert_eq!(decode_err(&[b'x', lead, 0x80]), (1, vec![lead]));
        }
    }

    #[test]
    fn truncated_at_end_of_input() {
        assert_eq!(decode_err(b"ok\xE2\x82"), (2, vec![0xE2, 0x82]));
    }

    #[test]
    fn continuation_replaced_by_ascii() {
        assert_eq!(decode_err(b"\xC3("), (0, vec![0xC3]));
    }

    #[test]
    fn overlong_surrogate_and_out_of_range() {
        assert_eq!(decode_err(b"\xE0\x80\xAF"), (0, vec![0xE0, 0x80, 0xAF]));
        assert_eq!(decode_err(b"\xED\xA0\x80"), (0, vec![0xED, 0xA0, 0x80]));
        assert_eq!(
            decode_err(b"\xF4\x90\x80\x80"),
            (0, vec![0xF4, 0x90, 0x80, 0x80])
        );
    }

    #[test]
    fn error_message_names_offset() {
        let err = decode_all(b"abc\xFF").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid UTF-8 sequence [ff] at byte offset 3"
        );
    }

    struct Flaky {
        interrupted: bool,
        data: Cursor<Vec<u8>>,
    }

    impl Read for Flaky {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            self.data.read(buf)
        }
    }

    #[test]
    fn retries_interrupted_reads() {
        let flaky = Flaky {
            interrupted: false,
            data: Cursor::new(b"hi".to_vec()),
        };
        let chars = CharReader::new(BufReader::new(flaky))
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(chars.len(), 2);
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn surfaces_io_errors() {
        let mut reader = CharReader::new(BufReader::new(Broken));
        assert!(matches!(reader.read_char(), Err(EngineError::Io(_))));
    }
}
