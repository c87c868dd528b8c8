//! CSV encoding of extracted records

use crate::types::Dialect;

/// CSV encoder that writes records back out with minimal quoting
///
/// A field is quoted only when it contains the delimiter, the quote character
/// or a line break, so a record scanned and re-encoded stays one record with
/// the same width. Dialect bytes are written as-is, never widened to UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvEncoder {
    dialect: Dialect,
}

impl CsvEncoder {
    /// Create an encoder for a dialect
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Append one record, without line terminator, to `buffer`
    pub fn encode_record<S: AsRef<str>>(&self, fields: &[S], buffer: &mut Vec<u8>) {
        // A lone empty field would otherwise vanish into an empty line
        if let [only] = fields {
            if only.as_ref().is_empty() {
                buffer.push(self.dialect.quote_char);
                buffer.push(self.dialect.quote_char);
                return;
            }
        }

        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                buffer.push(self.dialect.delimiter);
            }
            self.encode_field(field.as_ref(), buffer);
        }
    }

    /// Encode records joined by `\n`
    pub fn encode_records<R, S>(&self, records: &[R]) -> Vec<u8>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut buffer = Vec::new();
        for (i, record) in records.iter().enumerate() {
            if i > 0 {
                buffer.push(b'\n');
            }
            self.encode_record(record.as_ref(), &mut buffer);
        }
        buffer
    }

    fn encode_field(&self, field: &str, buffer: &mut Vec<u8>) {
        if !self.needs_quoting(field) {
            buffer.extend_from_slice(field.as_bytes());
            return;
        }

        let quote = self.dialect.quote_char;
        buffer.push(quote);
        for byte in field.bytes() {
            if byte == quote {
                buffer.push(quote);
            }
            buffer.push(byte);
        }
        buffer.push(quote);
    }

    fn needs_quoting(&self, field: &str) -> bool {
        field.bytes().any(|b| {
            b == self.dialect.delimiter || b == self.dialect.quote_char || b == b'\n' || b == b'\r'
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(fields: &[&str]) -> String {
        let mut buffer = Vec::new();
        CsvEncoder::default().encode_record(fields, &mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_simple_fields() {
        assert_eq!(encode(&["a", "b", "c"]), "a,b,c");
    }

    #[test]
    fn test_quoted_fields() {
        assert_eq!(encode(&["a,b", "c"]), r#""a,b",c"#);
    }

    #[test]
    fn test_escaped_quotes() {
        assert_eq!(encode(&[r#"Say "Hello""#, "world"]), r#""Say ""Hello""",world"#);
    }

    #[test]
    fn test_newlines() {
        assert_eq!(encode(&["Line 1\nLine 2", "normal"]), "\"Line 1\nLine 2\",normal");
        assert_eq!(encode(&["a\rb"]), "\"a\rb\"");
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!(encode(&["a", "", "c"]), "a,,c");
        assert_eq!(encode(&["", "", ""]), ",,");
        assert_eq!(encode(&["", ""]), ",");
    }

    #[test]
    fn test_single_empty_field_is_quoted() {
        assert_eq!(encode(&[""]), "\"\"");
        assert_eq!(encode(&[]), "");

        let encoder = CsvEncoder::new(Dialect::new(b',', b'\''));
        let mut buffer = Vec::new();
        encoder.encode_record(&[""], &mut buffer);
        assert_eq!(buffer, b"''");
    }

    #[test]
    fn test_custom_delimiter() {
        let encoder = CsvEncoder::new(Dialect::new(b';', b'"'));
        let mut buffer = Vec::new();
        encoder.encode_record(&["a", "b;c", "d"], &mut buffer);
        assert_eq!(buffer, br#"a;"b;c";d"#);
    }

    #[test]
    fn test_non_ascii_delimiter_stays_one_byte() {
        let encoder = CsvEncoder::new(Dialect::new(0xA7, b'"'));
        let mut buffer = Vec::new();
        encoder.encode_record(&["a", "b"], &mut buffer);
        assert_eq!(buffer, vec![b'a', 0xA7, b'b']);
    }

    #[test]
    fn test_encode_records() {
        let records = vec![
            vec!["apple".to_string(), "2.50".to_string()],
            vec!["banana, ripe".to_string(), "3.00".to_string()],
            vec![String::new()],
        ];
        assert_eq!(
            CsvEncoder::default().encode_records(&records),
            b"apple,2.50\n\"banana, ripe\",3.00\n\"\""
        );
    }
}
