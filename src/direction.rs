//! Variable direction: which half of the alias table a group consults.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a variable group holds inputs or outputs.
///
/// Residuals, design variables, responses and the rest are all keyed by
/// output names, so `Output` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Input,
    #[default]
    Output,
}

impl Direction {
    /// Returns the lowercase name used in alias tables.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
        }
    }

    pub const fn is_input(self) -> bool {
        matches!(self, Self::Input)
    }

    pub const fn is_output(self) -> bool {
        matches!(self, Self::Output)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
