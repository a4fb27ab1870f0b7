//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! For example, prettier formatting of scientific numbers is useful for both
//! axis labels and log output.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod value_ext;

// Flatten
pub use value_ext::ValueExt;
