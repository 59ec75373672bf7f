//! JSON text emission.
//!
//! By the time a value is [`Json`] it needs no further interpretation, with
//! one exception: the JSON grammar has no spelling for non-finite floats.
//! Emission therefore validates first and only then writes, so a failed
//! call produces a diagnostic and no output, never partial text and never
//! an abort.
//!
//! Two layouts are produced. Compact text has no whitespace at all. Pretty
//! text indents by two spaces, puts one entry per line, and separates keys
//! from values with ` : ` (a space on each side of the colon):
//!
//! ```text
//! {
//!   "name" : "ABC"
//! }
//! ```
//!
//! Forward slashes are not escaped, so binary payloads encode to Base64
//! strings like `"/9k="` verbatim.

use crate::{num::Num, Json};
use failure::{bail, Error};
use tracing::warn;

/// Serializes a value to JSON text.
///
/// # Example
///
/// ```
/// use jdict::prelude::*;
///
/// let json = Json::from(vec![Json::from(1), Json::from("two")]);
///
/// assert_eq!(encode(&json, false).unwrap(), r#"[1,"two"]"#);
/// ```
pub fn encode(json: &Json, pretty: bool) -> Result<String, Error> {
    if let Err(e) = check(json) {
        warn!("JSON emission failed: {}", e);
        return Err(e);
    }

    let mut out = String::new();
    if pretty {
        write_pretty(json, 0, &mut out);
    } else {
        write_compact(json, &mut out);
    }
    Ok(out)
}

/// Serializes a value to UTF-8 JSON bytes. See [`encode`].
pub fn encode_bytes(json: &Json, pretty: bool) -> Result<Vec<u8>, Error> {
    encode(json, pretty).map(String::into_bytes)
}

/// Rejects values the JSON grammar cannot carry.
fn check(json: &Json) -> Result<(), Error> {
    match json {
        Json::Number(n) if !n.is_finite() => {
            bail!("the number `{}` has no JSON representation", n)
        }
        Json::Array(items) => items.iter().map(check).collect(),
        Json::Map(m) => m.iter().map(|(_, v)| check(v)).collect(),
        _ => Ok(()),
    }
}

pub(crate) fn write_compact(json: &Json, out: &mut String) {
    match json {
        Json::Null => out.push_str("null"),
        Json::Bool(true) => out.push_str("true"),
        Json::Bool(false) => out.push_str("false"),
        Json::Number(n) => out.push_str(&n.to_string()),
        Json::Str(s) => write_str(s, out),
        Json::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i != 0 {
                    out.push(',');
                }
                write_compact(item, out);
            }
            out.push(']');
        }
        Json::Map(m) => {
            out.push('{');
            for (i, (k, v)) in m.iter().enumerate() {
                if i != 0 {
                    out.push(',');
                }
                write_str(k, out);
                out.push(':');
                write_compact(v, out);
            }
            out.push('}');
        }
    }
}

fn write_pretty(json: &Json, indent: usize, out: &mut String) {
    match json {
        Json::Array(items) if !items.is_empty() => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                out.push_str(if i == 0 { "\n" } else { ",\n" });
                out.push_str(&format!("{:indent$}", "", indent = indent + 2));
                write_pretty(item, indent + 2, out);
            }
            out.push_str(&format!("\n{:indent$}]", "", indent = indent));
        }
        Json::Map(m) if !m.is_empty() => {
            out.push('{');
            for (i, (k, v)) in m.iter().enumerate() {
                out.push_str(if i == 0 { "\n" } else { ",\n" });
                out.push_str(&format!("{:indent$}", "", indent = indent + 2));
                write_str(k, out);
                out.push_str(" : ");
                write_pretty(v, indent + 2, out);
            }
            out.push_str(&format!("\n{:indent$}}}", "", indent = indent));
        }
        // scalars and empty containers print as their compact form
        other => write_compact(other, out),
    }
}

/// Writes a quoted, escaped JSON string.
fn write_str(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vecmap::VecMap;

    fn map(entries: Vec<(&str, Json)>) -> Json {
        Json::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v))
                .collect::<VecMap<String, Json>>(),
        )
    }

    #[test]
    fn pretty_single_field() {
        let json = map(vec![("name", Json::from("ABC"))]);
        assert_eq!(encode(&json, true).unwrap(), "{\n  \"name\" : \"ABC\"\n}");
    }

    #[test]
    fn pretty_nested() {
        let child = map(vec![("name", Json::from("John"))]);
        let json = map(vec![("child", child)]);
        assert_eq!(
            encode(&json, true).unwrap(),
            "{\n  \"child\" : {\n    \"name\" : \"John\"\n  }\n}"
        );
    }

    #[test]
    fn empty_containers() {
        assert_eq!(encode(&map(vec![]), false).unwrap(), "{}");
        assert_eq!(encode(&map(vec![]), true).unwrap(), "{}");
        assert_eq!(encode(&Json::Array(vec![]), true).unwrap(), "[]");
    }

    #[test]
    fn escapes() {
        let json = Json::from("a\"b\\c\nd\te\u{1}");
        assert_eq!(
            encode(&json, false).unwrap(),
            r#""a\"b\\c\nd\te\u0001""#
        );
    }

    #[test]
    fn slashes_pass_through() {
        assert_eq!(encode(&Json::from("/9k="), false).unwrap(), "\"/9k=\"");
    }

    #[test]
    fn non_finite_floats_are_refused() {
        let json = map(vec![("bad", Json::from(std::f64::NAN))]);
        assert!(encode(&json, false).is_err());
        assert!(encode_bytes(&Json::from(std::f64::INFINITY), false).is_err());
    }

    #[test]
    fn sixty_four_bit_integers_are_exact() {
        let json = map(vec![
            ("max", Json::from(u64::max_value())),
            ("min", Json::from(i64::min_value())),
        ]);
        assert_eq!(
            encode(&json, false).unwrap(),
            "{\"max\":18446744073709551615,\"min\":-9223372036854775808}"
        );
    }
}
