mod algebra;
mod builder;
mod ext;
mod inclusivity;
mod value;

#[cfg(test)]
mod tests;

pub use builder::{RangeBuilder, Settable};
pub use ext::RangeTo;
pub use inclusivity::Inclusivity;
pub use value::Range;
