#![forbid(unsafe_code)]
#![doc = "Common types and error codes for the Magma cipher workspace."]

pub mod error;

pub use error::*;
