//! Raw field values and their resolution into [`Json`].
//!
//! [`Field`] is the tagged union of everything a field can hold before
//! conversion, and [`Field::resolve`] is the one place the encoding rules
//! live. Adding a new field category means adding a variant here and
//! handling it in `resolve`; the match is exhaustive, so forgetting the
//! second half is a compile error rather than a misordered `if` chain.

use crate::{num::Num, vecmap::VecMap, Json};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use chrono::{DateTime, Utc};

#[derive(Clone, Debug, PartialEq)]
/// A raw field value, prior to resolution.
///
/// Variants are listed in the order `resolve` dispatches them.
pub enum Field {
    /// A nested serializable object, converted by its own
    /// [`Serial`](crate::Serial) impl.
    Obj(VecMap<String, Json>),
    /// An ordered collection of raw values.
    Arr(Vec<Field>),
    /// A number. All fixed-width integers arrive here exactly.
    Num(Num),
    /// A boolean.
    Bool(bool),
    /// A binary payload. Resolves to a Base64 string.
    Bytes(Bytes),
    /// A point in time. Resolves to seconds since the Unix epoch.
    Date(DateTime<Utc>),
    /// An enumeration case. Resolves to the case's name, not an ordinal.
    Case(&'static str),
    /// A string, or any other scalar already in its JSON form.
    Str(String),
    /// An explicit null entry.
    Null,
    /// An empty optional. The owning field is omitted from the output.
    Absent,
}

impl Field {
    /// Resolves a raw value to its JSON form, or to `None` when the owning
    /// field should produce no entry at all.
    ///
    /// Collections preserve element order and drop absent elements rather
    /// than holding a place for them.
    ///
    /// # Example
    ///
    /// ```
    /// use jdict::prelude::*;
    ///
    /// let blob = Field::Bytes(Bytes::from_static(&[0xff, 0xd9]));
    /// assert_eq!(blob.resolve(), Some(Json::from("/9k=")));
    ///
    /// assert_eq!(Field::Absent.resolve(), None);
    /// ```
    pub fn resolve(self) -> Option<Json> {
        match self {
            Field::Obj(m) => Some(Json::Map(m)),
            Field::Arr(fields) => Some(Json::Array(
                fields.into_iter().filter_map(Field::resolve).collect(),
            )),
            Field::Num(n) => Some(Json::Number(n)),
            Field::Bool(b) => Some(Json::Bool(b)),
            Field::Bytes(bytes) => Some(Json::Str(STANDARD.encode(&bytes[..]))),
            Field::Date(at) => Some(Json::Number(Num::F64(epoch_seconds(&at)))),
            Field::Case(name) => Some(Json::Str(name.to_owned())),
            Field::Str(s) => Some(Json::Str(s)),
            Field::Null => Some(Json::Null),
            Field::Absent => None,
        }
    }
}

/// Seconds since the Unix epoch, with sub-second precision.
fn epoch_seconds(at: &DateTime<Utc>) -> f64 {
    at.timestamp() as f64 + f64::from(at.timestamp_subsec_nanos()) / 1e9
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn base64_has_no_line_breaks() {
        let blob = Field::Bytes(Bytes::from(vec![0xab; 96]));
        match blob.resolve() {
            Some(Json::Str(s)) => assert!(!s.contains('\n') && !s.contains('\r')),
            other => panic!("expected a string, got {:?}", other),
        }
    }

    #[test]
    fn dates_resolve_to_epoch_seconds() {
        let at = Utc.timestamp_opt(51_246_360, 500_000_000).unwrap();
        assert_eq!(
            Field::Date(at).resolve(),
            Some(Json::Number(Num::F64(51_246_360.5)))
        );
    }

    #[test]
    fn case_resolves_to_name() {
        assert_eq!(Field::Case("First").resolve(), Some(Json::from("First")));
    }

    #[test]
    fn collections_drop_absent_elements() {
        let arr = Field::Arr(vec![
            Field::Num(Num::I64(1)),
            Field::Absent,
            Field::Num(Num::I64(2)),
        ]);
        assert_eq!(
            arr.resolve(),
            Some(Json::Array(vec![Json::from(1), Json::from(2)]))
        );
    }
}
