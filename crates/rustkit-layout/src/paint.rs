//! Paint backend contract.
//!
//! Layout decides which rectangle and which border value to paint; an
//! [`OutputDevice`] turns that into pixels. [`DisplayList`] records the
//! instructions as paint commands.

use rustkit_css::{Color, ComputedStyle};
use tracing::trace;

use crate::border::{BorderSet, BorderSide, BorderSides, BorderValue};
use crate::Rect;

/// Receives paint instructions from the layout tree.
pub trait OutputDevice {
    /// Paint `style`'s background into `bounds`, positioned against `tiling_origin`.
    fn paint_background(
        &mut self,
        style: &ComputedStyle,
        bounds: Rect,
        tiling_origin: Rect,
        border: &BorderSet,
    );

    /// Paint the given sides of a separated border.
    fn paint_border(
        &mut self,
        style: &ComputedStyle,
        bounds: Rect,
        border: &BorderSet,
        sides: BorderSides,
    );

    /// Paint one side of a collapsed border.
    fn paint_collapsed_border(&mut self, border: &BorderSet, bounds: Rect, side: BorderSide);
}

/// A paint command for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCommand {
    /// Fill a rectangle with a solid color.
    SolidColor {
        color: Color,
        rect: Rect,
        tiling_origin: Rect,
    },
    /// Draw a separated border.
    Border {
        rect: Rect,
        border: BorderSet,
        sides: BorderSides,
    },
    /// Draw one side of a collapsed border.
    CollapsedBorder {
        rect: Rect,
        side: BorderSide,
        value: BorderValue,
    },
}

/// A display list of paint commands.
#[derive(Debug, Default)]
pub struct DisplayList {
    pub commands: Vec<DisplayCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl OutputDevice for DisplayList {
    fn paint_background(
        &mut self,
        style: &ComputedStyle,
        bounds: Rect,
        tiling_origin: Rect,
        _border: &BorderSet,
    ) {
        let color = style.background_color;
        if color.is_transparent() {
            return;
        }
        trace!(?bounds, ?tiling_origin, "background");
        self.commands.push(DisplayCommand::SolidColor {
            color,
            rect: bounds,
            tiling_origin,
        });
    }

    fn paint_border(
        &mut self,
        _style: &ComputedStyle,
        bounds: Rect,
        border: &BorderSet,
        sides: BorderSides,
    ) {
        // Only record if there's a visible border
        if !border.has_drawn_side() {
            return;
        }
        self.commands.push(DisplayCommand::Border {
            rect: bounds,
            border: *border,
            sides,
        });
    }

    fn paint_collapsed_border(&mut self, border: &BorderSet, bounds: Rect, side: BorderSide) {
        let value = border.side(side);
        if !value.style.is_drawn() || value.width == 0 {
            return;
        }
        trace!(?side, ?bounds, width = value.width, "collapsed border");
        self.commands.push(DisplayCommand::CollapsedBorder {
            rect: bounds,
            side,
            value,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustkit_css::BorderStyle;

    #[test]
    fn test_transparent_background_is_skipped() {
        let mut list = DisplayList::new();
        let style = ComputedStyle::new();
        list.paint_background(&style, Rect::new(0, 0, 10, 10), Rect::zero(), &BorderSet::EMPTY);
        assert!(list.is_empty());

        let style = ComputedStyle::from_declarations("background-color: red").unwrap();
        list.paint_background(&style, Rect::new(0, 0, 10, 10), Rect::zero(), &BorderSet::EMPTY);
        assert_eq!(list.commands.len(), 1);
    }

    #[test]
    fn test_collapsed_border_records_one_side() {
        let mut list = DisplayList::new();
        let mut border = BorderSet::EMPTY;
        border.left = BorderValue::new(BorderStyle::Solid, 2, Color::BLACK);

        list.paint_collapsed_border(&border, Rect::new(0, 0, 10, 10), BorderSide::Right);
        assert!(list.is_empty());

        list.paint_collapsed_border(&border, Rect::new(0, 0, 10, 10), BorderSide::Left);
        assert_eq!(
            list.commands,
            vec![DisplayCommand::CollapsedBorder {
                rect: Rect::new(0, 0, 10, 10),
                side: BorderSide::Left,
                value: border.left,
            }]
        );
    }
}
