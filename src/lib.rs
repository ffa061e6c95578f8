#![doc = include_str!("../README.md")]

pub mod substring;
pub mod surrogate;

pub use substring::{code_point_length, substring, utf16_length};
pub use surrogate::{
    compose_surrogates, contains_surrogate_pair, is_high_surrogate, is_low_surrogate,
    is_surrogate_pair, units_contain_surrogate_pair,
};

/// Commonly used functions, traits and types.
pub mod prelude {
    pub use super::substring::{code_point_length, substring, utf16_length};
    pub use super::surrogate::contains_surrogate_pair;
}
