//! # boilergen
//!
//! Definition language in, ready-to-edit source files out.
//!
//! A Rust library for a coding-judge platform: problem authors write one
//! language-agnostic definition of a problem's callable contract, and the
//! generators produce per-language function stubs, full stdin/stdout
//! harness programs, and a test scaffold.
//!
//! ## Modules
//!
//! - [`definition`] — Parse and lint the definition language
//! - [`typemap`] — Canonical type vocabulary and per-language type tables
//! - [`stub`] — Generate minimal function/class skeletons
//! - [`harness`] — Generate full standalone harness programs
//! - [`testgen`] — Generate the Java smoke-test scaffold
//! - [`emit`] — End-to-end artifact generation to disk
//! - [`error`] — Error and lint-violation types

pub mod definition;
pub mod emit;
pub mod error;
pub mod harness;
pub mod stub;
pub mod testgen;
pub mod typemap;
