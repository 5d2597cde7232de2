//! Configuration for Go emission.

use serde::{Deserialize, Deserializer};

/// Configuration for Go emission.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Variable holding the created handles (`[]zx.Handle`)
    pub(crate) handles_var: String,
    /// Variable holding the handle definitions
    pub(crate) handle_defs_var: String,
    /// Import name of the bindings runtime package
    pub(crate) fidl_package: String,
    /// Import name of the kernel syscall package
    pub(crate) zx_package: String,
    /// Bytes per line in byte-slice literals
    #[serde(deserialize_with = "at_least_one")]
    pub(crate) bytes_per_line: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            handles_var: "handles".to_string(),
            handle_defs_var: "handleDefs".to_string(),
            fidl_package: "fidl".to_string(),
            zx_package: "zx".to_string(),
            bytes_per_line: 8,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the handles variable name.
    pub fn handles_var(mut self, name: impl Into<String>) -> Self {
        self.handles_var = name.into();
        self
    }

    /// Set the handle definitions variable name.
    pub fn handle_defs_var(mut self, name: impl Into<String>) -> Self {
        self.handle_defs_var = name.into();
        self
    }

    /// Set the bindings runtime package name.
    pub fn fidl_package(mut self, name: impl Into<String>) -> Self {
        self.fidl_package = name.into();
        self
    }

    /// Set the kernel syscall package name.
    pub fn zx_package(mut self, name: impl Into<String>) -> Self {
        self.zx_package = name.into();
        self
    }

    /// Set bytes per line in byte-slice literals (at least one).
    pub fn bytes_per_line(mut self, count: usize) -> Self {
        self.bytes_per_line = count.max(1);
        self
    }
}

fn at_least_one<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    Ok(usize::deserialize(deserializer)?.max(1))
}
