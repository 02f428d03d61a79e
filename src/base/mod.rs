//! Foundation types for the gemchain toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Name`] - Small, cheap-to-clone identifier strings
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//!
//! This module has NO dependencies on other gemchain modules.

/// An identifier, method id or constant path.
///
/// Most Ruby names fit inline, so cloning one never allocates.
pub type Name = smol_str::SmolStr;

pub use text_size::{TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
