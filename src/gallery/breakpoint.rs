// SPDX-License-Identifier: MPL-2.0
//! Viewport breakpoints and the column-count table keyed by them.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Window widths below this are `Small`.
pub const MEDIUM_MIN_WIDTH: f32 = 640.0;

/// Window widths at or above this are `Large`.
pub const LARGE_MIN_WIDTH: f32 = 1200.0;

/// Named viewport-width class used to select layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Small,
    Medium,
    Large,
}

impl Breakpoint {
    /// Resolves the breakpoint for a window width in logical pixels.
    #[must_use]
    pub fn for_width(width: f32) -> Self {
        if width < MEDIUM_MIN_WIDTH {
            Breakpoint::Small
        } else if width < LARGE_MIN_WIDTH {
            Breakpoint::Medium
        } else {
            Breakpoint::Large
        }
    }
}

/// Column count per breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnsTable {
    pub small: usize,
    pub medium: usize,
    pub large: usize,
}

impl Default for ColumnsTable {
    fn default() -> Self {
        Self {
            small: 2,
            medium: 3,
            large: 3,
        }
    }
}

impl ColumnsTable {
    /// Column count for the given breakpoint.
    #[must_use]
    pub fn columns_for(self, breakpoint: Breakpoint) -> usize {
        match breakpoint {
            Breakpoint::Small => self.small,
            Breakpoint::Medium => self.medium,
            Breakpoint::Large => self.large,
        }
    }

    /// Checks that every entry is positive.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` naming the offending breakpoint; the layout
    /// engine refuses zero column counts, so a zero here must be caught at
    /// configuration time.
    pub fn validate(self) -> Result<()> {
        for (name, count) in [
            ("small", self.small),
            ("medium", self.medium),
            ("large", self.large),
        ] {
            if count == 0 {
                return Err(Error::Config(format!(
                    "columns.{name} must be positive"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds_are_exact() {
        assert_eq!(Breakpoint::for_width(0.0), Breakpoint::Small);
        assert_eq!(Breakpoint::for_width(639.0), Breakpoint::Small);
        assert_eq!(Breakpoint::for_width(640.0), Breakpoint::Medium);
        assert_eq!(Breakpoint::for_width(1199.0), Breakpoint::Medium);
        assert_eq!(Breakpoint::for_width(1200.0), Breakpoint::Large);
        assert_eq!(Breakpoint::for_width(2560.0), Breakpoint::Large);
    }

    #[test]
    fn default_table_matches_grid_classes() {
        let table = ColumnsTable::default();
        assert_eq!(table.columns_for(Breakpoint::Small), 2);
        assert_eq!(table.columns_for(Breakpoint::Medium), 3);
        assert_eq!(table.columns_for(Breakpoint::Large), 3);
    }

    #[test]
    fn validate_accepts_default_table() {
        assert!(ColumnsTable::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_entries() {
        let table = ColumnsTable {
            small: 2,
            medium: 0,
            large: 3,
        };
        match table.validate() {
            Err(Error::Config(message)) => assert!(message.contains("medium")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn table_deserializes_with_partial_fields() {
        let table: ColumnsTable = toml::from_str("small = 1").unwrap();
        assert_eq!(table.small, 1);
        assert_eq!(table.medium, 3);
        assert_eq!(table.large, 3);
    }
}
