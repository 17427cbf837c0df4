//! The descriptor tree and its native textual rendering
//!
//! A descriptor is the nested capability/configuration structure an
//! exchange reports about itself: id, endpoint tables, rate limits, fee
//! schedules, capability flags. The tree is treated as opaque by the rest
//! of the pipeline; only its textual encoding matters.
//!
//! The upstream library stringifies descriptors in Python repr syntax
//! (single-quoted strings, `True`/`False`/`None`, embedded
//! `<class '...'>` and `<bound method ...>` tokens). [`Descriptor::repr`]
//! reproduces that form; the normalizer parses it back to JSON.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// One node of an exchange descriptor.
///
/// `Map` preserves insertion order so the repr text matches what the
/// upstream library prints. `Class`, `BoundMethod` and `Object` model the
/// non-literal leaves upstream embeds in describe() output; `Object`
/// covers angle-bracket constructs the normalizer has not been taught,
/// which is exactly how a descriptor ends up unparseable.
#[derive(Debug, Clone, PartialEq)]
pub enum Descriptor {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// A type reference, e.g. `<class 'ccxt.binance'>`.
    Class(String),
    /// A callable's default print form, e.g.
    /// `<bound method blofin.ping of ccxt.blofin()>`.
    BoundMethod(String),
    /// Any other `<...>` construct, stored without the angle brackets.
    Object(String),
    Seq(Vec<Descriptor>),
    Map(Vec<(String, Descriptor)>),
}

impl Descriptor {
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Descriptor)>,
    {
        Self::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn seq<I: IntoIterator<Item = Descriptor>>(items: I) -> Self {
        Self::Seq(items.into_iter().collect())
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(name.into())
    }

    /// `bound_method("blofin.ping", "ccxt.blofin")` renders as
    /// `<bound method blofin.ping of ccxt.blofin()>`.
    pub fn bound_method(method: &str, owner: &str) -> Self {
        Self::BoundMethod(format!("bound method {method} of {owner}()"))
    }

    /// Render the native textual representation (Python repr syntax).
    pub fn repr(&self) -> String {
        let mut out = String::new();
        self.write_repr(&mut out);
        out
    }

    fn write_repr(&self, out: &mut String) {
        match self {
            Self::Null => out.push_str("None"),
            Self::Bool(true) => out.push_str("True"),
            Self::Bool(false) => out.push_str("False"),
            Self::Int(n) => out.push_str(&n.to_string()),
            Self::Float(f) => {
                let text = f.to_string();
                out.push_str(&text);
                // repr always marks floats as floats
                if !text.contains('.') && !text.contains('e') && !text.contains("inf") {
                    out.push_str(".0");
                }
            }
            Self::Str(s) => write_str_repr(s, out),
            Self::Class(name) => {
                out.push_str("<class '");
                out.push_str(name);
                out.push_str("'>");
            }
            Self::BoundMethod(text) | Self::Object(text) => {
                out.push('<');
                out.push_str(text);
                out.push('>');
            }
            Self::Seq(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    item.write_repr(out);
                }
                out.push(']');
            }
            Self::Map(entries) => {
                out.push('{');
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    write_str_repr(key, out);
                    out.push_str(": ");
                    value.write_repr(out);
                }
                out.push('}');
            }
        }
    }
}

/// Python's quote-selection rule: prefer single quotes, switch to double
/// quotes when the string contains an apostrophe but no double quote.
fn write_str_repr(s: &str, out: &mut String) {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

impl Serialize for Descriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Str(s) => serializer.serialize_str(s),
            // same strings the normalizer produces for these tokens
            Self::Class(name) => serializer.serialize_str(name),
            Self::BoundMethod(text) | Self::Object(text) => serializer.serialize_str(text),
            Self::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl From<&str> for Descriptor {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Descriptor {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for Descriptor {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Descriptor {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Descriptor {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_repr() {
        assert_eq!(Descriptor::Null.repr(), "None");
        assert_eq!(Descriptor::Bool(true).repr(), "True");
        assert_eq!(Descriptor::Bool(false).repr(), "False");
        assert_eq!(Descriptor::Int(3000).repr(), "3000");
        assert_eq!(Descriptor::Float(0.001).repr(), "0.001");
        assert_eq!(Descriptor::Float(1.0).repr(), "1.0");
    }

    #[test]
    fn test_string_quote_selection() {
        assert_eq!(Descriptor::from("kraken").repr(), "'kraken'");
        // apostrophe flips to double quotes, like Python repr
        assert_eq!(Descriptor::from("don't").repr(), "\"don't\"");
        // both quote kinds: single-quoted with escaped apostrophe
        assert_eq!(
            Descriptor::from("it's \"ok\"").repr(),
            "'it\\'s \"ok\"'"
        );
    }

    #[test]
    fn test_map_repr() {
        let d = Descriptor::map([
            ("id", "kraken".into()),
            (
                "has",
                Descriptor::map([
                    ("ws", true.into()),
                    ("fetchTicker", Descriptor::Null),
                ]),
            ),
        ]);
        assert_eq!(
            d.repr(),
            "{'id': 'kraken', 'has': {'ws': True, 'fetchTicker': None}}"
        );
    }

    #[test]
    fn test_token_repr() {
        assert_eq!(
            Descriptor::class("ccxt.base.errors.RateLimitExceeded").repr(),
            "<class 'ccxt.base.errors.RateLimitExceeded'>"
        );
        assert_eq!(
            Descriptor::bound_method("blofin.ping", "ccxt.blofin").repr(),
            "<bound method blofin.ping of ccxt.blofin()>"
        );
    }

    #[test]
    fn test_serialize_tokens_as_strings() {
        let value = serde_json::to_value(Descriptor::class("ccxt.foo")).unwrap();
        assert_eq!(value, serde_json::json!("ccxt.foo"));
        let value =
            serde_json::to_value(Descriptor::bound_method("foo.ping", "ccxt.foo")).unwrap();
        assert_eq!(value, serde_json::json!("bound method foo.ping of ccxt.foo()"));
    }
}
