#![forbid(unsafe_code)]
#![doc = "Common types, error codes and mode identifiers for aesmodes."]

pub mod algorithm;
pub mod error;

pub use algorithm::*;
pub use error::*;
