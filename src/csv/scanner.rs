//! Single-pass CSV scanning with RFC 4180-like quoting
//!
//! The scanner walks the input one byte at a time and reports field and record
//! boundaries as [`Token`]s. Counting, first-record width and record extraction
//! are all folds over that one token stream, so the quoting rules live in a
//! single place.
//!
//! Quoting rules:
//! - a quote opens a quoted field only at the start of a field
//! - inside a quoted field, a doubled quote is one literal quote and a single
//!   quote closes the quoted section
//! - delimiters and line breaks inside a quoted field are data
//! - a quote in the middle of an unquoted field is data
//! - `\n` and `\r\n` end a record; a lone `\r` is data
//!
//! Malformed input is accepted: an unterminated quote is closed by the end of
//! input, and bytes following a closing quote are appended to the field.

use crate::types::{Dialect, ScanResult};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    FieldStart,
    InUnquotedField,
    InQuotedField,
    QuoteSeenInsideQuoted,
}

/// Boundary event produced by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// One byte of field content (quotes already unescaped)
    Byte(u8),
    /// The current field ended at a delimiter; the record continues
    FieldEnd,
    /// The current field and record ended
    RecordEnd,
}

/// Iterator over the [`Token`]s of a CSV document
///
/// Runs in time linear in the input and keeps O(1) state. A final record that
/// is not followed by a line break still yields [`Token::RecordEnd`], as long
/// as at least one byte was consumed since the previous record boundary.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    input: &'a [u8],
    pos: usize,
    state: State,
    dialect: Dialect,
    record_started: bool,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a [u8], dialect: Dialect) -> Self {
        let input = input.strip_prefix(UTF8_BOM).unwrap_or(input);
        Self {
            input,
            pos: 0,
            state: State::FieldStart,
            dialect,
            record_started: false,
        }
    }

    fn end_record(&mut self) -> Token {
        self.state = State::FieldStart;
        self.record_started = false;
        Token::RecordEnd
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let quote = self.dialect.quote_char;
        let delimiter = self.dialect.delimiter;

        loop {
            let Some(&byte) = self.input.get(self.pos) else {
                // Flush the last record; also closes an unterminated quote
                return if self.record_started {
                    Some(self.end_record())
                } else {
                    None
                };
            };
            self.pos += 1;
            self.record_started = true;

            match self.state {
                State::InQuotedField => {
                    if byte == quote {
                        self.state = State::QuoteSeenInsideQuoted;
                        continue;
                    }
                    return Some(Token::Byte(byte));
                }
                State::QuoteSeenInsideQuoted if byte == quote => {
                    // Escaped quote ("")
                    self.state = State::InQuotedField;
                    return Some(Token::Byte(quote));
                }
                _ => {}
            }

            if byte == delimiter {
                self.state = State::FieldStart;
                return Some(Token::FieldEnd);
            }
            if byte == b'\n' {
                return Some(self.end_record());
            }
            if byte == b'\r' && self.input.get(self.pos) == Some(&b'\n') {
                self.pos += 1;
                return Some(self.end_record());
            }
            if byte == quote && self.state == State::FieldStart {
                self.state = State::InQuotedField;
                continue;
            }

            self.state = State::InUnquotedField;
            return Some(Token::Byte(byte));
        }
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Iterator over the records of a CSV document, one `Vec<String>` per record
///
/// Only the record being assembled is buffered. Field bytes that are not valid
/// UTF-8 are replaced with U+FFFD.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    tokens: Tokens<'a>,
    field: Vec<u8>,
}

fn take_field(field: &mut Vec<u8>) -> String {
    let value = String::from_utf8_lossy(field).into_owned();
    field.clear();
    value
}

impl Iterator for Records<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Vec<String>> {
        let mut record = Vec::new();
        for token in self.tokens.by_ref() {
            match token {
                Token::Byte(byte) => self.field.push(byte),
                Token::FieldEnd => record.push(take_field(&mut self.field)),
                Token::RecordEnd => {
                    record.push(take_field(&mut self.field));
                    return Some(record);
                }
            }
        }
        None
    }
}

/// CSV scanner for counting and splitting CSV data
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvScanner {
    dialect: Dialect,
}

impl CsvScanner {
    /// Create a new CSV scanner with custom delimiter and quote character
    pub fn new(delimiter: u8, quote_char: u8) -> Self {
        Self::with_dialect(Dialect::new(delimiter, quote_char))
    }

    /// Create a new CSV scanner for a dialect
    pub fn with_dialect(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Token stream over `input`
    pub fn tokens<'a>(&self, input: &'a [u8]) -> Tokens<'a> {
        Tokens::new(input, self.dialect)
    }

    /// Records of `input`, fields unquoted
    pub fn records<'a>(&self, input: &'a [u8]) -> Records<'a> {
        Records {
            tokens: self.tokens(input),
            field: Vec::new(),
        }
    }

    /// Count all records and the fields of the first one in a single pass
    pub fn scan(&self, input: &[u8]) -> ScanResult {
        let mut result = ScanResult::default();
        let mut delimiters = 0;

        for token in self.tokens(input) {
            match token {
                Token::Byte(_) => {}
                Token::FieldEnd => {
                    if result.rows == 0 {
                        delimiters += 1;
                    }
                }
                Token::RecordEnd => {
                    if result.rows == 0 {
                        result.columns = delimiters + 1;
                    }
                    result.rows += 1;
                }
            }
        }

        result
    }

    /// Fields in the first record; stops scanning at the end of that record
    pub fn first_record_width(&self, input: &[u8]) -> usize {
        let mut delimiters = 0;
        for token in self.tokens(input) {
            match token {
                Token::Byte(_) => {}
                Token::FieldEnd => delimiters += 1,
                Token::RecordEnd => return delimiters + 1,
            }
        }
        0
    }
}
