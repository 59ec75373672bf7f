//! # jdict
//!
//! Convert plain data types into ordered dictionaries, and those
//! dictionaries into JSON text, without writing serialization code by hand.
//!
//! # Usage
//!
//! The trait [`Serial`] is used to specify how a type's fields are
//! converted. It can usually be auto-derived, and then the type is ready
//! for serialization:
//!
//! ```
//! use jdict::prelude::*;
//!
//! #[derive(Clone, Serial)]
//! struct Animal {
//!     nickname: String,
//!     kind: String,
//!     trick: Option<String>,
//! }
//!
//! let cat = Animal {
//!     nickname: "Purry".to_owned(),
//!     kind: "Cat".to_owned(),
//!     trick: None,
//! };
//!
//! // absent optionals are omitted, and keys enumerate in lexicographic
//! // order no matter how the fields were declared
//! assert_eq!(
//!     cat.to_json_string(false).unwrap(),
//!     r#"{"kind":"Cat","nickname":"Purry"}"#
//! );
//! ```
//!
//! # An overview of field categories
//!
//! A field's raw value is one of a closed set of categories ([`Field`]),
//! resolved to JSON by a fixed set of rules:
//!
//! * an empty optional produces no entry at all;
//! * a nested [`Serial`] value becomes a nested map, a `Vec` of them an
//!   array of maps, with element order preserved;
//! * every fixed-width integer (8 through 64 bits, signed and unsigned)
//!   keeps its exact value; floats and booleans are native;
//! * [`Bytes`](bytes::Bytes) payloads become standard Base64 strings;
//! * timestamps become seconds since the Unix epoch;
//! * enumeration cases become their names;
//! * strings and anything else already JSON-shaped pass through as-is.
//!
//! ```
//! use jdict::prelude::*;
//!
//! #[derive(Clone, Serial)]
//! enum Kind {
//!     Dog,
//!     Cat,
//! }
//!
//! #[derive(Clone, Serial)]
//! struct Snapshot {
//!     kind: Kind,
//!     taken: Bytes,
//! }
//!
//! let shot = Snapshot {
//!     kind: Kind::Dog,
//!     taken: Bytes::from_static(&[0xff, 0xd9]),
//! };
//!
//! assert_eq!(
//!     shot.to_json_string(false).unwrap(),
//!     r#"{"kind":"Dog","taken":"/9k="}"#
//! );
//! ```
//!
//! # Formatting hooks
//!
//! A [`Style`] rewrites keys and values on their way into the map, either
//! bound to a type (override [`Serial::style`]) or supplied at call time
//! ([`Serial::to_vecmap_with`]). The default is identity.
//!
//! # Ordering
//!
//! Converted maps are [`VecMap`]s: sorted vectors of pairs. Key order is
//! canonical (lexicographic) everywhere, so structurally identical inputs
//! emit byte-identical text. See [`vecmap`](crate::vecmap).
//!
//! # Emission
//!
//! Conversion itself never fails. Turning the result into text can, since
//! JSON has no spelling for non-finite floats; a failed emission reports a
//! recoverable error plus a diagnostic instead of output. See
//! [`emit`](crate::emit).

#![warn(
    deprecated_in_future,
    unsafe_code,
    unused_labels,
    keyword_idents,
    missing_copy_implementations,
    missing_debug_implementations,
    macro_use_extern_crate,
    unreachable_pub,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![allow(clippy::cast_lossless)]

/// Procedural macro for auto-deriving [`Serial`].
pub extern crate jdict_derive;

pub mod emit;
pub mod field;
pub mod num;
pub mod prelude;
pub mod rep;
pub mod serial;
mod util;
pub mod vecmap;

use failure::{bail, Error};
use std::convert::{TryFrom, TryInto};

pub use crate::{
    field::Field,
    num::Num,
    rep::FieldRep,
    serial::{Identity, Serial, SerialSeq, Style},
    vecmap::VecMap,
};

#[derive(Clone, Debug, PartialEq)]
/// A JSON-representable value.
///
/// By the time a value is `Json` it needs no further interpretation: every
/// variant maps one-to-one onto a JSON production.
///
/// # Example
///
/// ```
/// use jdict::prelude::*;
///
/// let b = Json::Bool(true);
///
/// assert!(b.to_bool().unwrap());
/// ```
pub enum Json {
    /// Null.
    Null,
    /// Boolean.
    Bool(bool),
    /// Number. See [`Num`].
    Number(Num),
    /// String.
    Str(String),
    /// Ordered list.
    Array(Vec<Json>),
    /// Ordered map. Keys enumerate in lexicographic order.
    Map(VecMap<String, Json>),
}

use Json::*;

impl Json {
    /// Indicates whether the value is [`Json::Null`].
    pub fn is_null(&self) -> bool {
        match self {
            Null => true,
            _ => false,
        }
    }

    /// Tries to convert the value to a [`bool`].
    pub fn to_bool(&self) -> Result<bool, Error> {
        match self {
            Bool(b) => Ok(*b),
            _ => bail!("this value is not a `Bool`"),
        }
    }

    /// Tries to convert the value to a [`Num`].
    pub fn to_num(&self) -> Result<&Num, Error> {
        match self {
            Number(n) => Ok(n),
            _ => bail!("this value is not a `Number`"),
        }
    }

    /// Tries to convert the value to a string slice.
    pub fn to_str(&self) -> Result<&str, Error> {
        match self {
            Str(s) => Ok(s),
            _ => bail!("this value is not a `Str`"),
        }
    }

    /// Tries to convert the value to a vector of [`Json`].
    pub fn to_vec(&self) -> Result<&Vec<Json>, Error> {
        match self {
            Array(a) => Ok(a),
            _ => bail!("this value is not an `Array`"),
        }
    }

    /// Consumes the value, converting it into a vector of [`Json`].
    pub fn into_vec(self) -> Result<Vec<Json>, Error> {
        match self.try_into() {
            Ok(v) => Ok(v),
            Err(_e) => bail!("this value is not an `Array`"),
        }
    }

    /// Tries to convert the value to a [`VecMap`].
    pub fn to_vecmap(&self) -> Result<&VecMap<String, Json>, Error> {
        match self {
            Map(m) => Ok(m),
            _ => bail!("this value is not a `Map`"),
        }
    }

    /// Consumes the value, converting it into a [`VecMap`].
    pub fn into_vecmap(self) -> Result<VecMap<String, Json>, Error> {
        match self.try_into() {
            Ok(m) => Ok(m),
            Err(_e) => bail!("this value is not a `Map`"),
        }
    }
}

impl std::fmt::Display for Json {
    /// Compact JSON text. Diagnostic only: a non-finite float renders the
    /// way Rust prints it, which [`emit::encode`] would reject.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut out = String::new();
        emit::write_compact(self, &mut out);
        write!(f, "{}", out)
    }
}

// bool -> Json, From
from_fn!(Json, bool, Bool);
// bool -> Json, TryFrom
try_from_ctor!(Json, bool, Bool);

// Num -> Json, From
from_fn!(Json, Num, Number);
// Num -> Json, TryFrom
try_from_ctor!(Json, Num, Number);

// String -> Json, From
from_fn!(Json, String, Str);
// String -> Json, TryFrom
try_from_ctor!(Json, String, Str);

try_from_ctor!(Json, Vec<Json>, Array);
try_from_ctor!(Json, VecMap<String, Json>, Map);

impl From<&str> for Json {
    fn from(s: &str) -> Json { Str(s.to_owned()) }
}

impl<T: Into<Json>> From<Vec<T>> for Json {
    fn from(v: Vec<T>) -> Json { Array(v.into_iter().map(T::into).collect()) }
}

impl<T: Into<Json>> From<VecMap<String, T>> for Json {
    fn from(v: VecMap<String, T>) -> Json {
        Map(v.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

// Integers
compose_from!(Json, Num, i64);
compose_from!(Json, Num, u64);
compose_from!(Json, Num, isize);
compose_from!(Json, Num, usize);
from_prims!(Json);

// Floats
compose_from!(Json, Num, f32);
compose_from!(Json, Num, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_tests() {
        assert!(Null.is_null());

        assert!(Json::from(5).to_num().is_ok());

        assert!(Json::from(true).to_bool().unwrap());

        assert_eq!(Json::from("word").to_str().unwrap(), "word");
    }

    #[test]
    fn from_vec() {
        let v = vec![0u8, 1, 2];
        let arr = Json::from(v.into_iter().map(Json::from).collect::<Vec<Json>>());
        assert_eq!(arr.into_vec().unwrap().len(), 3);
    }

    #[test]
    fn display_is_compact() {
        let m: VecMap<String, Json> =
            vec![("a".to_owned(), Json::from(1))].into_iter().collect();
        assert_eq!(Json::Map(m).to_string(), r#"{"a":1}"#);
    }
}
