//! Table-wide list of collapsed border sides to paint.

use std::collections::HashSet;

use tracing::trace;

use super::cell::CellBox;
use super::CellId;
use crate::border::{BorderSide, CollapsedBorderValue};

/// One side of one cell whose collapsed border gets painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapsedBorderSide {
    pub cell: CellId,
    pub side: BorderSide,
}

/// A border segment on a grid line.
///
/// Horizontal lines are numbered by the row below them, vertical lines by the
/// column to their right. Both cells along a shared edge name the same segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKey {
    Horizontal { line: usize, start: usize, span: usize },
    Vertical { line: usize, start: usize, span: usize },
}

/// State of one sweep over a table's cells.
#[derive(Debug, Default)]
pub struct CollapsedBorderPass {
    seen: HashSet<(EdgeKey, CollapsedBorderValue)>,
    sides: Vec<CollapsedBorderSide>,
}

impl CollapsedBorderPass {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a side unless the same border on the same segment is already
    /// recorded. Returns whether it was added.
    pub fn add(
        &mut self,
        cell: CellId,
        side: BorderSide,
        edge: EdgeKey,
        value: CollapsedBorderValue,
    ) -> bool {
        if !value.exists() || !self.seen.insert((edge, value)) {
            return false;
        }
        self.sides.push(CollapsedBorderSide { cell, side });
        true
    }

    pub fn len(&self) -> usize {
        self.sides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sides.is_empty()
    }

    pub fn sides(&self) -> &[CollapsedBorderSide] {
        &self.sides
    }

    pub fn into_sides(self) -> Vec<CollapsedBorderSide> {
        self.sides
    }
}

impl CellBox {
    /// The grid segment covered by one side of this cell.
    pub fn edge_key(&self, side: BorderSide) -> EdgeKey {
        let (row, col) = (self.row(), self.col());
        match side {
            BorderSide::Top => EdgeKey::Horizontal {
                line: row,
                start: col,
                span: self.colspan(),
            },
            BorderSide::Bottom => EdgeKey::Horizontal {
                line: row + self.rowspan(),
                start: col,
                span: self.colspan(),
            },
            BorderSide::Left => EdgeKey::Vertical {
                line: col,
                start: row,
                span: self.rowspan(),
            },
            BorderSide::Right => EdgeKey::Vertical {
                line: col + self.colspan(),
                start: row,
                span: self.rowspan(),
            },
        }
    }

    /// Add this cell's collapsed border sides to a table-wide pass.
    pub fn add_collapsed_borders(&self, pass: &mut CollapsedBorderPass) {
        if self.collapsed_borders().is_none() {
            return;
        }

        for side in BorderSide::ALL {
            let value = self.collapsed_border(side);
            if pass.add(self.id(), side, self.edge_key(side), value) {
                trace!(cell = self.id().0, ?side, "Collapsed border side queued");
            }
        }
    }
}
