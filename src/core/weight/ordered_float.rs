use std::cmp::Ordering;

use super::unsigned_float::{uf32, uf64};

/// Float wrapper ordered by IEEE 754 `totalOrder`, so that it can be used as
/// a key in a priority queue.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderedFloat<T>(T);

pub trait TotalOrd: Copy {
    fn total_cmp(&self, other: &Self) -> Ordering;
}

impl TotalOrd for f32 {
    fn total_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }
}

impl TotalOrd for f64 {
    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}

impl TotalOrd for uf32 {
    fn total_cmp(&self, other: &Self) -> Ordering {
        self.get().total_cmp(&other.get())
    }
}

impl TotalOrd for uf64 {
    fn total_cmp(&self, other: &Self) -> Ordering {
        self.get().total_cmp(&other.get())
    }
}

impl<T: TotalOrd> PartialEq for OrderedFloat<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: TotalOrd> Eq for OrderedFloat<T> {}

impl<T: TotalOrd> PartialOrd for OrderedFloat<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: TotalOrd> Ord for OrderedFloat<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl<T: TotalOrd> From<T> for OrderedFloat<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

macro_rules! impl_into_inner {
    ($($ty:ty),*) => {
        $(
            impl From<OrderedFloat<$ty>> for $ty {
                fn from(value: OrderedFloat<$ty>) -> Self {
                    value.0
                }
            }
        )*
    };
}

impl_into_inner!(f32, f64, uf32, uf64);
