//! JSON numbers.
//!
//! JSON has a single number production, but emitting one faithfully means
//! keeping the integer and floating-point cases apart until the text is
//! written: a `u64` above `i64::MAX` must not detour through `f64`, and
//! integers must never come out in scientific notation. [`Num`] keeps the
//! three cases separate.

use crate::{from_as, from_fn, from_prims, try_from_ctor};
use std::convert::TryFrom;

/// `Num`s are `i64`, `u64` (for values above `i64::MAX`), or `f64`.
///
/// All conversions from the fixed-width primitives are exact; `I64` is the
/// primary integer variant and `U64` only holds the upper half of the `u64`
/// range.
///
/// # Example
///
/// ```
/// use jdict::prelude::*;
///
/// assert_eq!(Num::from(7u64), Num::I64(7));
/// assert_eq!(Num::from(u64::max_value()), Num::U64(u64::max_value()));
/// ```
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum Num {
    I64(i64),
    U64(u64),
    F64(f64),
}

use Num::*;

from_fn!(Num, i64, I64);
from_fn!(Num, u64, |u: u64| {
    if u <= i64::max_value() as u64 {
        I64(u as i64)
    } else {
        U64(u)
    }
});
from_fn!(Num, f64, F64);

from_as!(Num, f32, f64);
from_as!(Num, isize, i64);
from_as!(Num, usize, u64);
from_prims!(Num);

impl TryFrom<Num> for i64 {
    type Error = Num;

    fn try_from(n: Num) -> Result<Self, Num> {
        match n {
            I64(i) => Ok(i),
            _ => Err(n),
        }
    }
}

impl TryFrom<Num> for u64 {
    type Error = Num;

    fn try_from(n: Num) -> Result<Self, Num> {
        match n {
            I64(i) if i >= 0 => Ok(i as u64),
            U64(u) => Ok(u),
            _ => Err(n),
        }
    }
}

try_from_ctor!(Num, f64, F64);

impl Num {
    /// Indicates whether the value has a JSON representation. Only the
    /// non-finite floats do not.
    pub fn is_finite(self) -> bool {
        match self {
            F64(f) => f.is_finite(),
            _ => true,
        }
    }
}

impl std::fmt::Display for Num {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            I64(i) => write!(f, "{}", i),
            U64(u) => write!(f, "{}", u),
            F64(x) => write!(f, "{}", x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryInto;

    #[test]
    fn u64_splits_on_sign_bit() {
        assert_eq!(Num::from(i64::max_value() as u64), I64(i64::max_value()));
        assert_eq!(
            Num::from(i64::max_value() as u64 + 1),
            U64(i64::max_value() as u64 + 1)
        );
    }

    #[test]
    fn integer_display_is_exact() {
        assert_eq!(Num::from(u64::max_value()).to_string(), "18446744073709551615");
        assert_eq!(Num::from(i64::min_value()).to_string(), "-9223372036854775808");
        assert_eq!(Num::from(1_000_000u64).to_string(), "1000000");
    }

    #[test]
    fn whole_floats_display_without_fraction() {
        assert_eq!(Num::from(51_246_360.0).to_string(), "51246360");
        assert_eq!(Num::from(2.5).to_string(), "2.5");
    }

    #[test]
    fn finiteness() {
        assert!(Num::from(0u8).is_finite());
        assert!(!Num::from(std::f64::NAN).is_finite());
        assert!(!Num::from(std::f64::INFINITY).is_finite());
    }

    #[test]
    fn round_trips() {
        let i: i64 = Num::from(-3i32).try_into().unwrap();
        assert_eq!(i, -3);

        let u: u64 = Num::from(3u8).try_into().unwrap();
        assert_eq!(u, 3);

        assert!(u64::try_from(Num::from(-1i64)).is_err());
        assert!(i64::try_from(Num::from(u64::max_value())).is_err());
    }
}
