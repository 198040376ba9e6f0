//! Parser configuration
//!
//! [`ParseOptions`] carries the knobs the parser exposes: how string escapes
//! are resolved, how long an identifier may be before it is truncated, and
//! how deeply blocks and expressions may nest. The defaults suit new code; [`EscapeMode::Legacy`] exists for
//! fixtures produced by the older toolchain.

use super::constants::{MAX_ID_LEN, MAX_NESTING_DEPTH};

/// How escape sequences inside string literals are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeMode {
    /// Replace every `\n`, `\t`, `\\` and `\"` in one left-to-right scan
    #[default]
    All,
    /// Replace only the first occurrence of the first escape found, checking
    /// `\n`, `\t`, `\\`, `\"` in that order
    Legacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub escape_mode: EscapeMode,
    pub max_identifier_len: usize,
    pub max_nesting_depth: usize,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self {
            escape_mode: EscapeMode::All,
            max_identifier_len: MAX_ID_LEN,
            max_nesting_depth: MAX_NESTING_DEPTH,
        }
    }

    pub fn with_escape_mode(mut self, mode: EscapeMode) -> Self {
        self.escape_mode = mode;
        self
    }

    pub fn with_max_identifier_len(mut self, len: usize) -> Self {
        self.max_identifier_len = len;
        self
    }

    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}
