//! Configuration for Rust emission.

use serde::{Deserialize, Deserializer};

/// Configuration for Rust emission.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Variable holding the created handles (`Vec<Handle>`)
    pub(crate) handles_var: String,
    /// Variable holding the handle definitions
    pub(crate) handle_defs_var: String,
    /// Path of the bindings runtime crate
    pub(crate) fidl_crate: String,
    /// Bytes per line in byte literals
    #[serde(deserialize_with = "at_least_one")]
    pub(crate) bytes_per_line: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            handles_var: "handles".to_string(),
            handle_defs_var: "handle_defs".to_string(),
            fidl_crate: "fidl".to_string(),
            bytes_per_line: 8,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handles_var(mut self, name: impl Into<String>) -> Self {
        self.handles_var = name.into();
        self
    }

    pub fn handle_defs_var(mut self, name: impl Into<String>) -> Self {
        self.handle_defs_var = name.into();
        self
    }

    pub fn fidl_crate(mut self, path: impl Into<String>) -> Self {
        self.fidl_crate = path.into();
        self
    }

    /// Set bytes per line in byte literals (at least one).
    pub fn bytes_per_line(mut self, count: usize) -> Self {
        self.bytes_per_line = count.max(1);
        self
    }
}

fn at_least_one<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    Ok(usize::deserialize(deserializer)?.max(1))
}
