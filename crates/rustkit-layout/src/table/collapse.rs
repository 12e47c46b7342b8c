//! Collapsing border conflict resolution between neighbouring cells.

use std::cmp::Ordering;

use tracing::trace;

use crate::border::{BorderSet, BorderSide, BorderValue, CollapsedBorderValue};

/// Order two conflicting borders: the wider one is stronger, and between
/// borders of equal width the style with higher precedence is stronger.
fn compare_borders(current: &BorderValue, other: &BorderValue) -> Ordering {
    current
        .width
        .cmp(&other.width)
        .then_with(|| current.style.precedence().cmp(&other.style.precedence()))
}

/// Check if the touching cell's border beats the current cell's border.
pub fn other_border_wins(current: &BorderValue, other: &BorderValue) -> bool {
    other.style.is_hidden() || compare_borders(current, other) == Ordering::Less
}

/// Decide the border drawn on `side` of a cell.
///
/// `own` is the cell's declared border; `touching` is the declared border of
/// the cell on the other side of that edge, or `None` at the table edge or
/// next to a spanned slot. Exactly one of two adjacent cells reports a
/// non-empty border for their shared edge; the other reports empty.
pub fn resolve_collapsed_side(
    own: &BorderSet,
    touching: Option<&BorderSet>,
    side: BorderSide,
) -> BorderValue {
    let touching = touching.unwrap_or(&BorderSet::EMPTY);
    let current = own.side(side);
    let other = touching.side(side.opposite());

    if current.style.is_hidden() {
        return current;
    }

    if other.style.is_hidden() {
        return BorderValue::EMPTY;
    }

    // Only cell borders compete; row, row group, column, column group and
    // table borders are not consulted.
    if current.style.is_none() || other.style.is_none() {
        return current;
    }

    if other_border_wins(&current, &other) {
        trace!(?side, "Touching cell paints the shared edge");
        return BorderValue::EMPTY;
    }

    if compare_borders(&current, &other) == Ordering::Greater {
        return current;
    }

    // Equal borders: the edge is drawn as a right or bottom side.
    match side {
        BorderSide::Left | BorderSide::Top => BorderValue::EMPTY,
        BorderSide::Right | BorderSide::Bottom => current,
    }
}

/// Resolved collapsed borders of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapsedBorders {
    /// Borders used for content-box geometry.
    pub layout: BorderSet,
    /// Borders used when painting.
    pub painting: BorderSet,
    values: [CollapsedBorderValue; 4],
}

impl CollapsedBorders {
    /// Resolve all four sides; `touching` is in `[top, right, bottom, left]` order.
    pub fn resolve(own: &BorderSet, touching: &[Option<BorderSet>; 4]) -> Self {
        let resolved = BorderSide::ALL
            .map(|side| resolve_collapsed_side(own, touching[side.index()].as_ref(), side));

        trace!(
            top = ?resolved[0].style,
            right = ?resolved[1].style,
            bottom = ?resolved[2].style,
            left = ?resolved[3].style,
            "Resolved collapsed cell borders"
        );

        let border = BorderSet::from_sides(resolved);
        Self {
            layout: border,
            painting: border,
            values: resolved
                .map(|value| CollapsedBorderValue::new(value, CollapsedBorderValue::CELL_PRECEDENCE)),
        }
    }

    pub fn value(&self, side: BorderSide) -> CollapsedBorderValue {
        self.values[side.index()]
    }
}
