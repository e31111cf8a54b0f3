pub mod marker;
pub mod weight;

pub use weight::{GetWeight, Weight};
