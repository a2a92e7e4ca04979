#![doc = include_str!("../README.md")]

mod alphabet;
mod count;
mod lcp;
mod sort;
mod suffix_array;

pub use alphabet::{encode, encode_lowercase};
pub use count::{count_distinct_substrings, count_from_arrays};
pub use lcp::make_lcp_array;
pub use suffix_array::make_suffix_array;
