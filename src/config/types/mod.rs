//! Configuration utility types.

mod error;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};

use owo_colors::OwoColorize;
use std::fmt;

/// A config field path such as `kotlin.replace_in_assets_path`.
///
/// Carried by diagnostics so validation errors name the exact key the user
/// has to fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}
