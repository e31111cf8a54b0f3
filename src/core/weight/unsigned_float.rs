use std::{fmt, iter::Sum, ops::Add};

macro_rules! declare_unsigned_float {
    ($name:ident, $ty:ty) => {
        #[doc = r"Non-negative variant of ["]
        #[doc = stringify!($ty)]
        #[doc = r"], useful for the [is_unsigned](super::Weight::is_unsigned) property."]
        #[allow(non_camel_case_types)]
        #[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
        #[repr(transparent)]
        pub struct $name($ty);

        impl $name {
            pub const ZERO: $name = $name(0.0);
            pub const INFINITY: $name = $name(<$ty>::INFINITY);

            /// Wraps the value without checking its sign.
            pub const fn new_unchecked(x: $ty) -> $name {
                $name(x)
            }

            /// Returns `None` for negative values and NaN with the sign
            /// bit set.
            pub fn new(x: $ty) -> Option<$name> {
                x.is_sign_positive().then_some($name(x))
            }

            pub const fn get(self) -> $ty {
                self.0
            }
        }

        impl Add for $name {
            type Output = $name;

            fn add(self, rhs: $name) -> Self::Output {
                $name(self.0 + rhs.0)
            }
        }

        impl Sum for $name {
            fn sum<I: Iterator<Item = $name>>(iter: I) -> Self {
                iter.fold($name::ZERO, Add::add)
            }
        }

        impl From<$name> for $ty {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<$ty> for $name {
            type Error = NegativeFloatError;

            fn try_from(value: $ty) -> Result<Self, Self::Error> {
                $name::new(value).ok_or(NegativeFloatError)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

declare_unsigned_float!(uf32, f32);
declare_unsigned_float!(uf64, f64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("value is negative")]
pub struct NegativeFloatError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative() {
        assert_eq!(uf64::new(-1.0), None);
        assert_eq!(uf64::try_from(-0.5), Err(NegativeFloatError));
        assert_eq!(uf32::new(2.0).map(uf32::get), Some(2.0));
    }

    #[test]
    fn sums() {
        let total = [1.5, 2.0, 0.5]
            .into_iter()
            .map(uf64::new_unchecked)
            .sum::<uf64>();

        assert_eq!(total.get(), 4.0);
    }
}
