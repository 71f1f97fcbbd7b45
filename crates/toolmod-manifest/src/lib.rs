//! toolmod manifest management
//!
//! This crate is the manifest codec for toolmod: it regenerates and reads
//! the generated `tools.mod` file that records which auxiliary tool packages
//! a project depends on, kept apart from the production dependency graph.
//!
//! Two operations form the core surface:
//! - [`recreate`]: package list in, canonical manifest text out. Output is
//!   sorted, deterministic, and byte-identical for any ordering of the same
//!   list.
//! - [`parse`]: manifest text in, package list out, in declaration order,
//!   with positional diagnostics for malformed input.
//!
//! [`Manifest`] wraps the pair with a default location, load/save with an
//! atomic write, and list mutation. The lexical form itself lives in the
//! `toolmod-syntax` crate.

pub mod errors;
pub mod manifest;
pub mod manifest_writer;
pub mod template;

pub use errors::ManifestError;
pub use manifest::{parse, recreate, Manifest};
pub use template::{FILE_VERSION, GENERATOR_VERSION};

// Re-export manifest writer utilities for custom paths (testing)
pub use manifest_writer::{read_from_path, write_to_path};
