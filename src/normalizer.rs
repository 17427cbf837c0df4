//! Descriptor normalizer
//!
//! Converts the descriptor's native textual representation (Python repr
//! syntax) into a [`serde_json::Value`]. This replaces the historical
//! ordered find/replace table with a real recursive-descent parser; the
//! old allow-list of known-good exceptions survives only as the fixed set
//! of angle-bracket token shapes the parser understands. A descriptor
//! embedding any other `<...>` construct fails with
//! [`NormalizeError::UnknownToken`] and must be added here before it can
//! be dumped.

use serde_json::{Map, Number, Value};

/// Why a descriptor's textual form could not be normalized to JSON.
///
/// Offsets are byte positions into the input text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("unexpected end of input at byte {0}")]
    UnexpectedEof(usize),

    #[error("unexpected character {1:?} at byte {0}")]
    UnexpectedChar(usize, char),

    #[error("unrecognized construct <{1}> at byte {0}")]
    UnknownToken(usize, String),

    #[error("invalid number {1:?} at byte {0}")]
    InvalidNumber(usize, String),

    #[error("invalid escape sequence at byte {0}")]
    InvalidEscape(usize),

    #[error("expected a string key at byte {0}")]
    NonStringKey(usize),

    #[error("trailing characters after value at byte {0}")]
    TrailingInput(usize),
}

/// Parse a full descriptor text into a JSON value.
///
/// Success guarantees the result round-trips through `serde_json`
/// losslessly; trailing non-whitespace input is an error.
pub fn normalize(text: &str) -> Result<Value, NormalizeError> {
    let mut parser = Parser { input: text.as_bytes(), pos: 0 };
    let value = parser.parse_value()?;
    parser.skip_ws();
    if parser.pos < parser.input.len() {
        return Err(NormalizeError::TrailingInput(parser.pos));
    }
    Ok(value)
}

/// Compact JSON text of the normalized value (the transient artifact).
pub fn normalize_to_string(text: &str) -> Result<String, NormalizeError> {
    let value = normalize(text)?;
    // serializing a Value to a String cannot fail
    Ok(value.to_string())
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn skip_ws(&mut self) {
        while let Some(&b) = self.input.get(self.pos) {
            if b == b' ' || b == b'\t' || b == b'\n' || b == b'\r' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn bump(&mut self) -> Result<u8, NormalizeError> {
        let b = self
            .peek()
            .ok_or(NormalizeError::UnexpectedEof(self.pos))?;
        self.pos += 1;
        Ok(b)
    }

    fn expect(&mut self, expected: u8) -> Result<(), NormalizeError> {
        match self.peek() {
            Some(b) if b == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(b) => Err(NormalizeError::UnexpectedChar(self.pos, b as char)),
            None => Err(NormalizeError::UnexpectedEof(self.pos)),
        }
    }

    /// Consume `word` if the input starts with it here.
    fn eat_word(&mut self, word: &str) -> bool {
        if self.input[self.pos..].starts_with(word.as_bytes()) {
            self.pos += word.len();
            true
        } else {
            false
        }
    }

    fn parse_value(&mut self) -> Result<Value, NormalizeError> {
        self.skip_ws();
        match self.peek() {
            Some(b'{') => self.parse_dict(),
            Some(b'[') => self.parse_seq(b'[', b']'),
            Some(b'(') => self.parse_seq(b'(', b')'),
            Some(b'\'') | Some(b'"') => Ok(Value::String(self.parse_string()?)),
            Some(b'<') => self.parse_angle_token(),
            Some(b'T') | Some(b'F') | Some(b'N') => self.parse_keyword(),
            Some(b) if b == b'-' || b.is_ascii_digit() => self.parse_number(),
            Some(b) => Err(NormalizeError::UnexpectedChar(self.pos, b as char)),
            None => Err(NormalizeError::UnexpectedEof(self.pos)),
        }
    }

    fn parse_keyword(&mut self) -> Result<Value, NormalizeError> {
        if self.eat_word("True") {
            Ok(Value::Bool(true))
        } else if self.eat_word("False") {
            Ok(Value::Bool(false))
        } else if self.eat_word("None") {
            Ok(Value::Null)
        } else {
            Err(NormalizeError::UnexpectedChar(
                self.pos,
                self.input[self.pos] as char,
            ))
        }
    }

    fn parse_dict(&mut self) -> Result<Value, NormalizeError> {
        self.expect(b'{')?;
        let mut entries = Map::new();
        self.skip_ws();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(Value::Object(entries));
        }
        loop {
            self.skip_ws();
            let key = match self.peek() {
                Some(b'\'') | Some(b'"') => self.parse_string()?,
                _ => return Err(NormalizeError::NonStringKey(self.pos)),
            };
            self.skip_ws();
            self.expect(b':')?;
            let value = self.parse_value()?;
            entries.insert(key, value);
            self.skip_ws();
            match self.bump()? {
                b',' => continue,
                b'}' => return Ok(Value::Object(entries)),
                b => return Err(NormalizeError::UnexpectedChar(self.pos - 1, b as char)),
            }
        }
    }

    /// Lists and tuples both come out as JSON arrays.
    fn parse_seq(&mut self, open: u8, close: u8) -> Result<Value, NormalizeError> {
        self.expect(open)?;
        let mut items = Vec::new();
        self.skip_ws();
        if self.peek() == Some(close) {
            self.pos += 1;
            return Ok(Value::Array(items));
        }
        loop {
            items.push(self.parse_value()?);
            self.skip_ws();
            match self.bump()? {
                b',' => {
                    // one-element tuple repr: ('x',)
                    self.skip_ws();
                    if self.peek() == Some(close) {
                        self.pos += 1;
                        return Ok(Value::Array(items));
                    }
                }
                b if b == close => return Ok(Value::Array(items)),
                b => return Err(NormalizeError::UnexpectedChar(self.pos - 1, b as char)),
            }
        }
    }

    fn parse_string(&mut self) -> Result<String, NormalizeError> {
        let quote = self.bump()?;
        let mut out = String::new();
        loop {
            let start = self.pos;
            let b = self.bump()?;
            match b {
                b if b == quote => return Ok(out),
                b'\\' => out.push(self.parse_escape()?),
                _ => {
                    // copy a whole UTF-8 scalar, not just one byte
                    let mut end = self.pos;
                    while end < self.input.len() && self.input[end] & 0xC0 == 0x80 {
                        end += 1;
                    }
                    let chunk = std::str::from_utf8(&self.input[start..end])
                        .map_err(|_| NormalizeError::UnexpectedChar(start, '\u{fffd}'))?;
                    out.push_str(chunk);
                    self.pos = end;
                }
            }
        }
    }

    fn parse_escape(&mut self) -> Result<char, NormalizeError> {
        let at = self.pos - 1;
        let c = match self.bump()? {
            b'\'' => '\'',
            b'"' => '"',
            b'\\' => '\\',
            b'n' => '\n',
            b't' => '\t',
            b'r' => '\r',
            b'0' => '\0',
            b'x' => self.parse_codepoint(at, 2)?,
            b'u' => self.parse_codepoint(at, 4)?,
            _ => return Err(NormalizeError::InvalidEscape(at)),
        };
        Ok(c)
    }

    fn parse_codepoint(&mut self, at: usize, digits: usize) -> Result<char, NormalizeError> {
        let end = self.pos + digits;
        if end > self.input.len() {
            return Err(NormalizeError::UnexpectedEof(self.input.len()));
        }
        let hex = std::str::from_utf8(&self.input[self.pos..end])
            .map_err(|_| NormalizeError::InvalidEscape(at))?;
        let code = u32::from_str_radix(hex, 16).map_err(|_| NormalizeError::InvalidEscape(at))?;
        self.pos = end;
        char::from_u32(code).ok_or(NormalizeError::InvalidEscape(at))
    }

    fn parse_number(&mut self) -> Result<Value, NormalizeError> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        let mut is_float = false;
        while let Some(b) = self.peek() {
            match b {
                b'0'..=b'9' => self.pos += 1,
                b'.' | b'e' | b'E' => {
                    is_float = true;
                    self.pos += 1;
                }
                b'+' | b'-' if is_float => self.pos += 1,
                _ => break,
            }
        }
        // input is valid UTF-8 and this span is ASCII
        let text = std::str::from_utf8(&self.input[start..self.pos]).unwrap();
        let invalid = || NormalizeError::InvalidNumber(start, text.to_string());
        if is_float {
            let f: f64 = text.parse().map_err(|_| invalid())?;
            let n = Number::from_f64(f).ok_or_else(invalid)?;
            Ok(Value::Number(n))
        } else {
            let n: i64 = text.parse().map_err(|_| invalid())?;
            Ok(Value::Number(n.into()))
        }
    }

    /// The surviving allow-list: `<class '...'>` strips to the bare dotted
    /// name, `<bound method ...>` becomes a plain string. Anything else in
    /// angle brackets is an unknown upstream construct.
    fn parse_angle_token(&mut self) -> Result<Value, NormalizeError> {
        let start = self.pos;
        self.expect(b'<')?;
        let body_start = self.pos;
        while let Some(b) = self.peek() {
            if b == b'>' {
                break;
            }
            self.pos += 1;
        }
        if self.peek() != Some(b'>') {
            return Err(NormalizeError::UnexpectedEof(self.pos));
        }
        let body = std::str::from_utf8(&self.input[body_start..self.pos])
            .map_err(|_| NormalizeError::UnexpectedChar(body_start, '\u{fffd}'))?
            .to_string();
        self.pos += 1;

        if let Some(name) = body.strip_prefix("class ") {
            let name = name.trim().trim_matches('\'').trim_matches('"');
            return Ok(Value::String(name.to_string()));
        }
        if body.starts_with("bound method ") {
            return Ok(Value::String(body));
        }
        Err(NormalizeError::UnknownToken(start, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kraken_scenario() {
        let raw = "{'id': 'kraken', 'has': {'ws': True, 'fetchTicker': None}}";
        let value = normalize(raw).unwrap();
        assert_eq!(
            value,
            json!({"id": "kraken", "has": {"ws": true, "fetchTicker": null}})
        );
        assert_eq!(
            normalize_to_string(raw).unwrap(),
            r#"{"has":{"fetchTicker":null,"ws":true},"id":"kraken"}"#
        );
    }

    #[test]
    fn test_scalars() {
        assert_eq!(normalize("True").unwrap(), json!(true));
        assert_eq!(normalize("False").unwrap(), json!(false));
        assert_eq!(normalize("None").unwrap(), json!(null));
        assert_eq!(normalize("3000").unwrap(), json!(3000));
        assert_eq!(normalize("-5").unwrap(), json!(-5));
        assert_eq!(normalize("0.0026").unwrap(), json!(0.0026));
        assert_eq!(normalize("1e-08").unwrap(), json!(1e-8));
    }

    #[test]
    fn test_apostrophes_survive_normalization() {
        // the phrases the old substitution table kept breaking on
        let value = normalize("\"don't\"").unwrap();
        assert_eq!(value, json!("don't"));
        let value = normalize("\"Amount's too low\"").unwrap();
        assert_eq!(value, json!("Amount's too low"));
        let value = normalize("'it\\'s e.g. \"123.456\"'").unwrap();
        assert_eq!(value, json!("it's e.g. \"123.456\""));
    }

    #[test]
    fn test_class_token_stripped_to_bare_name() {
        let value = normalize("<class 'ccxt.base.errors.RateLimitExceeded'>").unwrap();
        assert_eq!(value, json!("ccxt.base.errors.RateLimitExceeded"));
        // unquoted inner form
        let value = normalize("<class ccxt.binance>").unwrap();
        assert_eq!(value, json!("ccxt.binance"));
    }

    #[test]
    fn test_bound_method_becomes_string() {
        let raw = "{'ping': <bound method foo.ping of ccxt.foo()>}";
        let value = normalize(raw).unwrap();
        assert_eq!(value, json!({"ping": "bound method foo.ping of ccxt.foo()"}));
    }

    #[test]
    fn test_unknown_angle_token_is_an_error() {
        let err = normalize("{'parse': <function binance.parse at 0x7f>}").unwrap_err();
        assert!(matches!(err, NormalizeError::UnknownToken(_, _)));
    }

    #[test]
    fn test_tuples_become_arrays() {
        assert_eq!(normalize("('maker', 'taker')").unwrap(), json!(["maker", "taker"]));
        assert_eq!(normalize("('solo',)").unwrap(), json!(["solo"]));
        assert_eq!(normalize("()").unwrap(), json!([]));
    }

    #[test]
    fn test_nested_structures() {
        let raw = "{'urls': {'doc': ['https://a', 'https://b'], 'api': {'public': 'https://x'}}, 'rateLimit': 50, 'fees': {'taker': 0.001}}";
        let value = normalize(raw).unwrap();
        assert_eq!(value["urls"]["doc"][1], json!("https://b"));
        assert_eq!(value["rateLimit"], json!(50));
        assert_eq!(value["fees"]["taker"], json!(0.001));
    }

    #[test]
    fn test_escapes() {
        assert_eq!(normalize(r"'a\nb'").unwrap(), json!("a\nb"));
        assert_eq!(normalize(r"'caf\xe9'").unwrap(), json!("café"));
        assert_eq!(normalize(r"'Ж'").unwrap(), json!("Ж"));
        assert!(matches!(
            normalize(r"'\q'").unwrap_err(),
            NormalizeError::InvalidEscape(_)
        ));
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(
            normalize("{'id': }").unwrap_err(),
            NormalizeError::UnexpectedChar(_, '}')
        ));
        assert!(matches!(
            normalize("{'id': 'kraken'").unwrap_err(),
            NormalizeError::UnexpectedEof(_)
        ));
        assert!(matches!(
            normalize("{1: 'x'}").unwrap_err(),
            NormalizeError::NonStringKey(_)
        ));
        assert!(matches!(
            normalize("True False").unwrap_err(),
            NormalizeError::TrailingInput(_)
        ));
        assert!(matches!(
            normalize("").unwrap_err(),
            NormalizeError::UnexpectedEof(0)
        ));
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(normalize("{}").unwrap(), json!({}));
        assert_eq!(normalize("[]").unwrap(), json!([]));
    }
}
