//! The object-to-map conversion engine.
//!
//! [`Serial`] is the "describe yourself" capability: a type hands back its
//! fields as an ordered list of `(name, raw value)` pairs, and the engine
//! turns them into a [`VecMap`] of JSON values. Conversion never fails; a
//! field that resolves to nothing (an empty optional) is omitted rather
//! than aborting the walk, and anything the dispatch rules cannot classify
//! has already been stored as-is by its [`FieldRep`](crate::FieldRep) impl.
//!
//! The engine is stateless: conversion borrows the instance, mutates
//! nothing, and shares nothing between calls. The only configuration is the
//! [`Style`] hook, which must be treated as read-only once conversions are
//! in flight.
//!
//! Object graphs are assumed acyclic. A cycle (only constructible through
//! interior mutability) would recurse without termination.

use crate::{emit, field::Field, vecmap::VecMap, Json};
use failure::Error;

/// Key/value formatting applied to every entry before insertion.
///
/// Both hooks are pure functions; the default is identity. Keys sort after
/// formatting, so a hook that renames fields also controls their output
/// order.
pub trait Style {
    /// Formats a field name into the output key.
    fn key(&self, name: &str) -> String { name.to_owned() }

    /// Formats a resolved value. `name` is the unformatted field name.
    fn value(&self, json: Json, name: &str) -> Json {
        let _ = name;
        json
    }
}

#[derive(Clone, Copy, Debug, Default)]
/// The identity [`Style`]: keys and values pass through untouched.
pub struct Identity;

impl Style for Identity {}

/// A type whose instances can describe themselves as an ordered list of
/// named raw values.
///
/// Usually auto-derived:
///
/// ```
/// use jdict::prelude::*;
///
/// #[derive(Clone, Serial)]
/// struct Greeting {
///     name: String,
///     count: u32,
/// }
///
/// let map = Greeting {
///     name: "hi".to_owned(),
///     count: 2,
/// }
/// .to_vecmap();
///
/// assert_eq!(map.get("count"), Some(&Json::from(2)));
/// ```
pub trait Serial {
    /// The instance's fields, in declaration order.
    fn fields(&self) -> Vec<(&'static str, Field)>;

    /// The formatting hook bound to this type. Identity unless overridden.
    fn style(&self) -> &dyn Style { &Identity }

    /// Converts the instance into an ordered map using the bound style.
    ///
    /// Keys enumerate in lexicographic order regardless of declaration
    /// order; converting the same unchanged instance twice yields equal
    /// maps.
    fn to_vecmap(&self) -> VecMap<String, Json> { self.to_vecmap_with(self.style()) }

    /// Converts the instance into an ordered map with an explicit style.
    fn to_vecmap_with(&self, style: &dyn Style) -> VecMap<String, Json> {
        let fields = self.fields();
        let mut entries = Vec::with_capacity(fields.len());

        for (name, raw) in fields {
            if let Some(json) = raw.resolve() {
                entries.push((style.key(name), style.value(json, name)));
            }
        }

        VecMap::from(entries)
    }

    /// Converts the instance into a [`Json`] map value.
    fn to_json(&self) -> Json { Json::Map(self.to_vecmap()) }

    /// Serializes the instance to UTF-8 JSON text.
    ///
    /// Conversion cannot fail; emission can, and reports a descriptive
    /// error instead of output.
    fn to_json_bytes(&self, pretty: bool) -> Result<Vec<u8>, Error> {
        emit::encode_bytes(&self.to_json(), pretty)
    }

    /// Serializes the instance to a JSON string. See [`Serial::to_json_bytes`].
    fn to_json_string(&self, pretty: bool) -> Result<String, Error> {
        emit::encode(&self.to_json(), pretty)
    }
}

/// Conversion over sequences of serializable values.
///
/// A thin iteration over [`Serial`]: element order is preserved, every
/// element converts independently, and an empty slice yields an empty
/// vector, never an absent one.
pub trait SerialSeq {
    /// Converts every element via [`Serial::to_vecmap`].
    fn to_vecmaps(&self) -> Vec<VecMap<String, Json>>;

    /// Converts the sequence into a [`Json`] array of maps.
    fn to_json(&self) -> Json;

    /// Serializes the sequence to UTF-8 JSON text.
    fn to_json_bytes(&self, pretty: bool) -> Result<Vec<u8>, Error>;

    /// Serializes the sequence to a JSON string.
    fn to_json_string(&self, pretty: bool) -> Result<String, Error>;
}

impl<T: Serial> SerialSeq for [T] {
    fn to_vecmaps(&self) -> Vec<VecMap<String, Json>> {
        self.iter().map(Serial::to_vecmap).collect()
    }

    fn to_json(&self) -> Json {
        Json::Array(self.to_vecmaps().into_iter().map(Json::Map).collect())
    }

    fn to_json_bytes(&self, pretty: bool) -> Result<Vec<u8>, Error> {
        emit::encode_bytes(&self.to_json(), pretty)
    }

    fn to_json_string(&self, pretty: bool) -> Result<String, Error> {
        emit::encode(&self.to_json(), pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldRep, Num};

    #[derive(Clone)]
    struct Pair {
        zulu: u8,
        alpha: u8,
    }

    impl Serial for Pair {
        fn fields(&self) -> Vec<(&'static str, Field)> {
            vec![("zulu", self.zulu.to_field()), ("alpha", self.alpha.to_field())]
        }
    }

    struct Upper;

    impl Style for Upper {
        fn key(&self, name: &str) -> String { name.to_uppercase() }
    }

    #[derive(Clone)]
    struct Shouty {
        loud: bool,
    }

    impl Serial for Shouty {
        fn fields(&self) -> Vec<(&'static str, Field)> { vec![("loud", self.loud.to_field())] }

        fn style(&self) -> &dyn Style { &Upper }
    }

    #[test]
    fn keys_sort_canonically() {
        let map = Pair { zulu: 1, alpha: 2 }.to_vecmap();
        let keys: Vec<&str> = map.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["alpha", "zulu"]);
    }

    #[test]
    fn conversion_is_idempotent() {
        let pair = Pair { zulu: 1, alpha: 2 };
        assert_eq!(pair.to_vecmap(), pair.to_vecmap());
    }

    #[test]
    fn bound_style_applies() {
        let map = Shouty { loud: true }.to_vecmap();
        assert_eq!(map.get("LOUD"), Some(&Json::Bool(true)));
        assert_eq!(map.get("loud"), None);
    }

    #[test]
    fn call_time_style_overrides() {
        let map = Pair { zulu: 1, alpha: 2 }.to_vecmap_with(&Upper);
        assert_eq!(map.get("ZULU"), Some(&Json::Number(Num::I64(1))));
    }

    #[test]
    fn value_hook_sees_unformatted_name() {
        struct Tag;

        impl Style for Tag {
            fn value(&self, json: Json, name: &str) -> Json {
                if name == "zulu" {
                    Json::from("tagged")
                } else {
                    json
                }
            }
        }

        let map = Pair { zulu: 1, alpha: 2 }.to_vecmap_with(&Tag);
        assert_eq!(map.get("zulu"), Some(&Json::from("tagged")));
        assert_eq!(map.get("alpha"), Some(&Json::from(2)));
    }

    #[test]
    fn empty_slice_converts_to_empty_vec() {
        let maps = (&[] as &[Pair]).to_vecmaps();
        assert!(maps.is_empty());
    }
}
