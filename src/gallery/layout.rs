// SPDX-License-Identifier: MPL-2.0
//! Column partitioning of the image list.
//!
//! Both strategies return indices into the list rather than cloned records,
//! so the view layer borrows straight from the `ImageList`. Identical
//! inputs always produce identical columns; no state is carried between
//! calls.

use serde::{Deserialize, Serialize};

use crate::content::ImageList;
use crate::error::{Error, Result};

/// How the ordered image list is distributed across columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistributionStrategy {
    /// Consecutive runs of `ceil(len / columns)` images per column; trailing
    /// columns may be shorter or empty.
    ContiguousBlock,
    /// Image `i` goes to column `i % columns`.
    RoundRobin,
}

impl Default for DistributionStrategy {
    fn default() -> Self {
        DistributionStrategy::ContiguousBlock
    }
}

/// Partitions `list` into exactly `column_count` ordered columns of indices.
///
/// Every index appears in exactly one column, and relative order is
/// preserved within each column. An empty list yields `column_count` empty
/// columns.
///
/// # Errors
///
/// Returns `Error::Config` when `column_count` is zero. The count is never
/// clamped; a zero here means the layout configuration is broken and the
/// caller must not render.
pub fn compute_columns(
    list: &ImageList,
    column_count: usize,
    strategy: DistributionStrategy,
) -> Result<Vec<Vec<usize>>> {
    if column_count == 0 {
        return Err(Error::Config(
            "column count must be positive".to_string(),
        ));
    }

    let len = list.len();
    let mut columns = vec![Vec::new(); column_count];
    match strategy {
        DistributionStrategy::ContiguousBlock => {
            // `chunk` is zero only when the list is empty, and then the
            // loop body never runs.
            let chunk = len.div_ceil(column_count);
            for index in 0..len {
                columns[index / chunk].push(index);
            }
        }
        DistributionStrategy::RoundRobin => {
            for index in 0..len {
                columns[index % column_count].push(index);
            }
        }
    }
    Ok(columns)
}
