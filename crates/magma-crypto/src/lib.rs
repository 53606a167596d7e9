#![doc = "GOST R 34.12-2015 \"Magma\" block cipher library."]

// Cipher engine
pub mod magma;

// Modes of operation
pub mod modes;

// Known-answer self-tests
pub mod selftest;
