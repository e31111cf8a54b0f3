//! Numeric weights accumulated along paths and the functions that produce
//! them.
//!
//! A graph does not store weights. Every algorithm that needs them takes a
//! [`GetWeight`] implementation which is asked for the weight of an edge
//! each time the edge is traversed. Any `Fn(&T, &T) -> W` closure is one.

use std::ops::Add;

mod ordered_float;
mod unsigned_float;

use ordered_float::OrderedFloat;
pub use unsigned_float::*;

pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + Sized {
    /// Totally ordered representation used as a priority key.
    type Ord: Ord + From<Self> + Into<Self>;

    fn zero() -> Self;

    /// Adds two weights, returning `None` if the result is not representable.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Returns `true` if the type cannot represent negative values, in which
    /// case algorithms can skip negativity checks altogether.
    fn is_unsigned() -> bool;
}

pub trait GetWeight<T, W>
where
    W: Weight,
{
    /// Weight of traversing the edge from `from` to `to`.
    fn get(&self, from: &T, to: &T) -> W;

    fn get_const(&self) -> Option<W> {
        None
    }

    fn is_const(&self) -> bool {
        self.get_const().is_some()
    }
}

impl<F, T, W> GetWeight<T, W> for F
where
    F: Fn(&T, &T) -> W,
    W: Weight,
{
    fn get(&self, from: &T, to: &T) -> W {
        (self)(from, to)
    }
}

/// Every edge weighs one, so path weights are hop counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unit;

impl<T> GetWeight<T, usize> for Unit {
    fn get(&self, _from: &T, _to: &T) -> usize {
        1
    }

    fn get_const(&self) -> Option<usize> {
        Some(1)
    }
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            type Ord = Self;

            fn zero() -> Self {
                0
            }

            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_add(self, rhs)
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            type Ord = OrderedFloat<Self>;

            fn zero() -> Self {
                <$ty>::default()
            }

            // Floats saturate to infinity instead.
            fn checked_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }
        }
    };
}

impl_float_weight!(f32, false);
impl_float_weight!(f64, false);
impl_float_weight!(uf32, true);
impl_float_weight!(uf64, true);
