//! Compact URL-friendly encoding for JSON-like values (rison).
//!
//! Rison spells the same data model as JSON in fewer characters, all of them
//! safe to embed in a URL query component: objects are `(key:value,...)`,
//! arrays are `!(a,b)`, the literals are `!t`, `!f` and `!n`, and strings are
//! written bare whenever they qualify as identifiers. This is what keeps the
//! filter payload of a shared link readable instead of a wall of percent
//! escapes.
//!
//! [`encode`]/[`decode`] handle a single value. [`encode_array`]/
//! [`decode_array`] handle a top-level sequence written without the `!( )`
//! wrapper, the form used for versioned link payloads like `1,(Region:EU)`.
//!
//! Encoding is deterministic: object keys serialize in map order, which for
//! [`serde_json::Map`] is sorted order. Equal values always produce equal
//! strings, so encoded links are stable across invocations.

use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Characters that may never appear in a bare (unquoted) string.
const NON_ID_CHARS: [char; 9] = ['\'', '!', ':', '(', ')', ',', '*', '@', '$'];

/// Deepest value nesting the decoder will follow. Tokens arrive on URLs, so
/// nesting is caller-controlled; past this depth decoding fails instead of
/// overflowing the stack.
const MAX_DEPTH: usize = 128;

/// Error raised while decoding rison text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("unexpected character '{ch}' at byte {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("invalid number at byte {pos}")]
    InvalidNumber { pos: usize },
    #[error("invalid string escape '!{ch}' at byte {pos}")]
    InvalidEscape { ch: char, pos: usize },
    #[error("expected object key at byte {pos}")]
    ExpectedKey { pos: usize },
    #[error("trailing characters at byte {pos}")]
    TrailingChars { pos: usize },
    #[error("nesting too deep at byte {pos}")]
    TooDeep { pos: usize },
}

/// Encode a single value as rison text.
pub fn encode(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

/// Encode a top-level sequence in A-rison form: elements joined by commas,
/// without the surrounding `!( )`.
pub fn encode_array(items: &[Value]) -> String {
    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        write_value(&mut out, item);
    }
    out
}

/// Decode rison text into a single value. The entire input must be consumed.
pub fn decode(text: &str) -> Result<Value, DecodeError> {
    let mut parser = Parser::new(text);
    let value = parser.parse_value()?;
    parser.expect_end()?;
    Ok(value)
}

/// Decode an A-rison sequence: comma-separated values with no `!( )` wrapper.
/// An empty input is the empty sequence.
pub fn decode_array(text: &str) -> Result<Vec<Value>, DecodeError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let mut parser = Parser::new(text);
    let mut items = vec![parser.parse_value()?];
    while let Some(ch) = parser.peek() {
        if ch != ',' {
            return Err(DecodeError::TrailingChars { pos: parser.pos });
        }
        parser.bump(ch);
        items.push(parser.parse_value()?);
    }
    Ok(items)
}

// ===== Encoding =====

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("!n"),
        Value::Bool(true) => out.push_str("!t"),
        Value::Bool(false) => out.push_str("!f"),
        Value::Number(number) => out.push_str(&number.to_string()),
        Value::String(text) => write_string(out, text),
        Value::Array(items) => {
            out.push_str("!(");
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(')');
        }
        Value::Object(map) => {
            out.push('(');
            for (index, (key, item)) in map.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                write_string(out, key);
                out.push(':');
                write_value(out, item);
            }
            out.push(')');
        }
    }
}

fn write_string(out: &mut String, text: &str) {
    if is_id(text) {
        out.push_str(text);
        return;
    }
    out.push('\'');
    for ch in text.chars() {
        match ch {
            '\'' => out.push_str("!'"),
            '!' => out.push_str("!!"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
}

/// A string qualifies as a bare identifier when it is non-empty, does not
/// start with a digit or `-`, and contains no reserved or whitespace
/// characters.
fn is_id(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        None => false,
        Some(first) if !is_id_start(first) => false,
        Some(_) => chars.all(is_id_char),
    }
}

fn is_id_char(ch: char) -> bool {
    !NON_ID_CHARS.contains(&ch) && !ch.is_whitespace()
}

fn is_id_start(ch: char) -> bool {
    is_id_char(ch) && !ch.is_ascii_digit() && ch != '-'
}

// ===== Decoding =====

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self, ch: char) {
        self.pos += ch.len_utf8();
    }

    fn next_char(&mut self) -> Result<char, DecodeError> {
        let ch = self.peek().ok_or(DecodeError::UnexpectedEof)?;
        self.bump(ch);
        Ok(ch)
    }

    fn expect(&mut self, wanted: char) -> Result<(), DecodeError> {
        match self.peek() {
            Some(ch) if ch == wanted => {
                self.bump(ch);
                Ok(())
            }
            Some(ch) => Err(DecodeError::UnexpectedChar { ch, pos: self.pos }),
            None => Err(DecodeError::UnexpectedEof),
        }
    }

    fn expect_end(&self) -> Result<(), DecodeError> {
        if self.pos < self.input.len() {
            return Err(DecodeError::TrailingChars { pos: self.pos });
        }
        Ok(())
    }

    fn parse_value(&mut self) -> Result<Value, DecodeError> {
        if self.depth == MAX_DEPTH {
            return Err(DecodeError::TooDeep { pos: self.pos });
        }
        self.depth += 1;
        let value = match self.peek() {
            Some('!') => self.parse_bang(),
            Some('(') => self.parse_object(),
            Some('\'') => self.parse_quoted().map(Value::String),
            Some(ch) if ch.is_ascii_digit() || ch == '-' => self.parse_number(),
            Some(ch) if is_id_start(ch) => Ok(Value::String(self.parse_bare_id())),
            Some(ch) => Err(DecodeError::UnexpectedChar { ch, pos: self.pos }),
            None => Err(DecodeError::UnexpectedEof),
        };
        self.depth -= 1;
        value
    }

    /// `!t`, `!f`, `!n` or the `!(` array opener.
    fn parse_bang(&mut self) -> Result<Value, DecodeError> {
        self.expect('!')?;
        let marker_pos = self.pos;
        match self.next_char()? {
            't' => Ok(Value::Bool(true)),
            'f' => Ok(Value::Bool(false)),
            'n' => Ok(Value::Null),
            '(' => self.parse_array_body(),
            ch => Err(DecodeError::UnexpectedChar {
                ch,
                pos: marker_pos,
            }),
        }
    }

    /// Elements after the opening `!(`, through the closing `)`.
    fn parse_array_body(&mut self) -> Result<Value, DecodeError> {
        let mut items = Vec::new();
        if self.peek() == Some(')') {
            self.bump(')');
            return Ok(Value::Array(items));
        }
        loop {
            items.push(self.parse_value()?);
            match self.peek() {
                Some(',') => self.bump(','),
                Some(')') => {
                    self.bump(')');
                    return Ok(Value::Array(items));
                }
                Some(ch) => return Err(DecodeError::UnexpectedChar { ch, pos: self.pos }),
                None => return Err(DecodeError::UnexpectedEof),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Value, DecodeError> {
        self.expect('(')?;
        let mut map = Map::new();
        if self.peek() == Some(')') {
            self.bump(')');
            return Ok(Value::Object(map));
        }
        loop {
            let key = self.parse_key()?;
            self.expect(':')?;
            let value = self.parse_value()?;
            // Duplicate keys keep the last occurrence.
            map.insert(key, value);
            match self.peek() {
                Some(',') => self.bump(','),
                Some(')') => {
                    self.bump(')');
                    return Ok(Value::Object(map));
                }
                Some(ch) => return Err(DecodeError::UnexpectedChar { ch, pos: self.pos }),
                None => return Err(DecodeError::UnexpectedEof),
            }
        }
    }

    /// Object keys are strings, bare or quoted.
    fn parse_key(&mut self) -> Result<String, DecodeError> {
        match self.peek() {
            Some('\'') => self.parse_quoted(),
            Some(ch) if is_id_start(ch) => Ok(self.parse_bare_id()),
            Some(_) => Err(DecodeError::ExpectedKey { pos: self.pos }),
            None => Err(DecodeError::UnexpectedEof),
        }
    }

    fn parse_bare_id(&mut self) -> String {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if !is_id_char(ch) {
                break;
            }
            self.bump(ch);
        }
        self.input[start..self.pos].to_string()
    }

    /// Body of a `'...'` string. `!'` and `!!` are the only escapes.
    fn parse_quoted(&mut self) -> Result<String, DecodeError> {
        self.expect('\'')?;
        let mut text = String::new();
        loop {
            let ch = self.next_char()?;
            match ch {
                '\'' => return Ok(text),
                '!' => {
                    let escape_pos = self.pos;
                    match self.next_char()? {
                        escaped @ ('!' | '\'') => text.push(escaped),
                        other => {
                            return Err(DecodeError::InvalidEscape {
                                ch: other,
                                pos: escape_pos,
                            })
                        }
                    }
                }
                _ => text.push(ch),
            }
        }
    }

    /// Numbers follow the JSON grammar minus leading `+` and whitespace:
    /// `-? digits ('.' digits)? ([eE] '-'? digits)?`. The matched slice is
    /// handed to serde_json so numeric fidelity matches the JSON parser.
    fn parse_number(&mut self) -> Result<Value, DecodeError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.bump('-');
        }
        self.scan_digits(start)?;
        if self.peek() == Some('.') {
            self.bump('.');
            self.scan_digits(start)?;
        }
        if let Some(ch @ ('e' | 'E')) = self.peek() {
            self.bump(ch);
            if self.peek() == Some('-') {
                self.bump('-');
            }
            self.scan_digits(start)?;
        }
        let literal = &self.input[start..self.pos];
        let number: Number = serde_json::from_str(literal)
            .map_err(|_| DecodeError::InvalidNumber { pos: start })?;
        Ok(Value::Number(number))
    }

    fn scan_digits(&mut self, number_start: usize) -> Result<(), DecodeError> {
        let mut seen = false;
        while let Some(ch) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            self.bump(ch);
            seen = true;
        }
        if !seen {
            return Err(DecodeError::InvalidNumber { pos: number_start });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn roundtrip(value: Value) {
        let encoded = encode(&value);
        let decoded = decode(&encoded).expect("Failed to decode");
        assert_eq!(decoded, value, "round trip through {encoded:?}");
    }

    #[test]
    fn test_encode_literals() {
        assert_eq!(encode(&Value::Null), "!n");
        assert_eq!(encode(&json!(true)), "!t");
        assert_eq!(encode(&json!(false)), "!f");
    }

    #[test]
    fn test_encode_numbers() {
        assert_eq!(encode(&json!(0)), "0");
        assert_eq!(encode(&json!(42)), "42");
        assert_eq!(encode(&json!(-7)), "-7");
        assert_eq!(encode(&json!(1.5)), "1.5");
        assert_eq!(encode(&json!(1e30)), "1e30");
    }

    #[test]
    fn test_encode_bare_strings() {
        assert_eq!(encode(&json!("EU")), "EU");
        assert_eq!(encode(&json!("a-b_c.d")), "a-b_c.d");
        assert_eq!(encode(&json!("région")), "région");
    }

    #[test]
    fn test_encode_quoted_strings() {
        assert_eq!(encode(&json!("")), "''");
        assert_eq!(encode(&json!("two words")), "'two words'");
        assert_eq!(encode(&json!("123")), "'123'");
        assert_eq!(encode(&json!("-lead")), "'-lead'");
        assert_eq!(encode(&json!("it's")), "'it!'s'");
        assert_eq!(encode(&json!("bang!")), "'bang!!'");
        assert_eq!(encode(&json!("a:b")), "'a:b'");
    }

    #[test]
    fn test_encode_array() {
        assert_eq!(encode(&json!([])), "!()");
        assert_eq!(encode(&json!([1, "two", null])), "!(1,two,!n)");
        assert_eq!(encode(&json!([[true]])), "!(!(!t))");
    }

    #[test]
    fn test_encode_object() {
        assert_eq!(encode(&json!({})), "()");
        assert_eq!(encode(&json!({"Region": "EU"})), "(Region:EU)");
        assert_eq!(
            encode(&json!({"b": 2, "a": {"nested": [1]}})),
            "(a:(nested:!(1)),b:2)"
        );
    }

    #[test]
    fn test_encode_quotes_non_id_keys() {
        assert_eq!(encode(&json!({"two words": 1})), "('two words':1)");
        assert_eq!(encode(&json!({"7": 1})), "('7':1)");
    }

    #[test]
    fn test_encode_is_deterministic() {
        let value = json!({"z": 1, "a": [true, "x y"], "m": {"k": null}});
        assert_eq!(encode(&value), encode(&value));
        // Map keys come out sorted regardless of insertion order.
        assert_eq!(encode(&value), "(a:!(!t,'x y'),m:(k:!n),z:1)");
    }

    #[test]
    fn test_encode_array_top_level_form() {
        let items = [json!(1), json!({"Region": "EU"})];
        assert_eq!(encode_array(&items), "1,(Region:EU)");
        assert_eq!(encode_array(&[]), "");
    }

    #[test]
    fn test_decode_literals_and_numbers() {
        assert_eq!(decode("!n").expect("null"), Value::Null);
        assert_eq!(decode("!t").expect("true"), json!(true));
        assert_eq!(decode("-0.5").expect("float"), json!(-0.5));
        assert_eq!(decode("3e2").expect("exponent"), json!(3e2));
        assert_eq!(decode("18446744073709551615").expect("u64"), json!(u64::MAX));
    }

    #[test]
    fn test_decode_strings() {
        assert_eq!(decode("hello").expect("bare"), json!("hello"));
        assert_eq!(decode("'it!'s'").expect("escape"), json!("it's"));
        assert_eq!(decode("'!!'").expect("bang"), json!("!"));
        assert_eq!(decode("''").expect("empty"), json!(""));
    }

    #[test]
    fn test_decode_nested_structures() {
        let decoded = decode("(filters:(Region:!(EU,US),active:!t),version:1)")
            .expect("Failed to decode");
        assert_eq!(
            decoded,
            json!({"filters": {"Region": ["EU", "US"], "active": true}, "version": 1})
        );
    }

    #[test]
    fn test_decode_duplicate_keys_last_wins() {
        assert_eq!(decode("(a:1,a:2)").expect("dupes"), json!({"a": 2}));
    }

    #[test]
    fn test_decode_array_top_level_form() {
        let items = decode_array("1,(Region:EU)").expect("Failed to decode");
        assert_eq!(items, vec![json!(1), json!({"Region": "EU"})]);
        assert_eq!(decode_array("").expect("empty"), Vec::<Value>::new());
    }

    #[test]
    fn test_decode_rejects_trailing_input() {
        assert_eq!(
            decode("(a:1)x"),
            Err(DecodeError::TrailingChars { pos: 5 })
        );
    }

    #[test]
    fn test_decode_rejects_bad_escape() {
        assert!(matches!(
            decode("'a!z'"),
            Err(DecodeError::InvalidEscape { ch: 'z', .. })
        ));
    }

    #[test]
    fn test_decode_rejects_truncated_input() {
        assert_eq!(decode(""), Err(DecodeError::UnexpectedEof));
        assert_eq!(decode("(a:1"), Err(DecodeError::UnexpectedEof));
        assert_eq!(decode("'open"), Err(DecodeError::UnexpectedEof));
        assert_eq!(decode("!"), Err(DecodeError::UnexpectedEof));
    }

    #[test]
    fn test_decode_rejects_malformed_numbers() {
        assert!(matches!(decode("-"), Err(DecodeError::InvalidNumber { .. })));
        assert!(matches!(decode("1."), Err(DecodeError::InvalidNumber { .. })));
        assert!(matches!(decode("2e"), Err(DecodeError::InvalidNumber { .. })));
    }

    #[test]
    fn test_decode_rejects_non_string_keys() {
        assert!(matches!(
            decode("(1:2)"),
            Err(DecodeError::ExpectedKey { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_runaway_nesting() {
        // Far past the cap; must come back as an error, not blow the stack.
        let deep_array = "!(".repeat(10_000);
        assert!(matches!(
            decode(&deep_array),
            Err(DecodeError::TooDeep { .. })
        ));
        let deep_object = "(a:".repeat(10_000);
        assert!(matches!(
            decode(&deep_object),
            Err(DecodeError::TooDeep { .. })
        ));
    }

    #[test]
    fn test_decode_accepts_nesting_under_the_cap() {
        let mut value = json!("leaf");
        for _ in 0..100 {
            value = json!([value]);
        }
        roundtrip(value);
    }

    #[test]
    fn test_roundtrip_assorted_values() {
        roundtrip(json!(null));
        roundtrip(json!([true, false, null]));
        roundtrip(json!({"key with spaces": "value, with: punctuation!"}));
        roundtrip(json!({"unicode": "日本語", "quote": "don't"}));
        roundtrip(json!({"nested": {"deep": [1, 2.5, "three", {"four": 4}]}}));
        roundtrip(json!({"NATIVE_FILTER-abc123": {"filterState": {"value": ["EU"]}}}));
    }

    #[test]
    fn test_roundtrip_array_form() {
        let items = vec![json!(1), json!({"Region": "EU", "Year": 2024})];
        let encoded = encode_array(&items);
        assert_eq!(decode_array(&encoded).expect("Failed to decode"), items);
    }
}
