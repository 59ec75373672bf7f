//! Conversions from plain Rust values into raw [`Field`]s.

use crate::{field::Field, num::Num};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::time::SystemTime;

/// A value representable as a [`Field`].
///
/// Implementations must supply at least one of `to_field`/`into_field`; each
/// defaults to the other.
///
/// # Example
///
/// ```
/// use jdict::prelude::*;
///
/// let f = 1.to_field();
/// ```
pub trait FieldRep: Clone + Sized {
    /// Converts the value into a raw field.
    fn to_field(&self) -> Field { self.clone().into_field() }

    /// Consumes the value, converting it into a raw field.
    fn into_field(self) -> Field { self.to_field() }
}

macro_rules! num_rep {
    ($t:ty) => {
        impl FieldRep for $t {
            fn to_field(&self) -> Field { Field::Num(Num::from(*self)) }
        }
    };
}

num_rep!(u8);
num_rep!(u16);
num_rep!(u32);
num_rep!(u64);
num_rep!(i8);
num_rep!(i16);
num_rep!(i32);
num_rep!(i64);
num_rep!(usize);
num_rep!(isize);
num_rep!(f32);
num_rep!(f64);

impl FieldRep for bool {
    fn to_field(&self) -> Field { Field::Bool(*self) }
}

impl FieldRep for String {
    fn to_field(&self) -> Field { Field::Str(self.clone()) }

    fn into_field(self) -> Field { Field::Str(self) }
}

impl FieldRep for &str {
    fn to_field(&self) -> Field { Field::Str((*self).to_owned()) }
}

impl FieldRep for Bytes {
    fn to_field(&self) -> Field { Field::Bytes(self.clone()) }

    fn into_field(self) -> Field { Field::Bytes(self) }
}

impl FieldRep for DateTime<Utc> {
    fn to_field(&self) -> Field { Field::Date(*self) }
}

impl FieldRep for SystemTime {
    fn to_field(&self) -> Field { Field::Date(DateTime::from(*self)) }
}

impl FieldRep for Field {
    fn to_field(&self) -> Field { self.clone() }

    fn into_field(self) -> Field { self }
}

/// An empty optional becomes [`Field::Absent`]: the field is skipped, not
/// nulled. Callers that want an explicit null store [`Field::Null`] instead.
impl<T: FieldRep> FieldRep for Option<T> {
    fn to_field(&self) -> Field {
        match self {
            Some(value) => value.to_field(),
            None => Field::Absent,
        }
    }

    fn into_field(self) -> Field {
        match self {
            Some(value) => value.into_field(),
            None => Field::Absent,
        }
    }
}

impl<T: FieldRep> FieldRep for Vec<T> {
    fn to_field(&self) -> Field { Field::Arr(self.iter().map(T::to_field).collect()) }

    fn into_field(self) -> Field { Field::Arr(self.into_iter().map(T::into_field).collect()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optionals_unwrap_before_dispatch() {
        assert_eq!(Some(7u8).to_field(), Field::Num(Num::I64(7)));
        assert_eq!(None::<u8>.to_field(), Field::Absent);
        // nested optionals collapse to the innermost value
        assert_eq!(Some(Some(true)).to_field(), Field::Bool(true));
    }

    #[test]
    fn vectors_keep_order() {
        let f = vec!["a", "b"].into_field();
        assert_eq!(
            f,
            Field::Arr(vec![
                Field::Str("a".to_owned()),
                Field::Str("b".to_owned())
            ])
        );
    }
}
