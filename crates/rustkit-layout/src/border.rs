//! Border values for one box edge and for all four edges.
//!
//! These are resolved values: widths are in device units and a side whose
//! style is `none` or `hidden` has width 0.

use std::hash::{Hash, Hasher};

use rustkit_css::{BorderStyle, Color, ComputedStyle};

use crate::{EdgeSizes, LayoutError};

/// One of the four sides of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderSide {
    Top,
    Right,
    Bottom,
    Left,
}

const OPPOSITE: [BorderSide; 4] = [
    BorderSide::Bottom,
    BorderSide::Left,
    BorderSide::Top,
    BorderSide::Right,
];

impl BorderSide {
    /// All sides in `[top, right, bottom, left]` order.
    pub const ALL: [BorderSide; 4] = [
        BorderSide::Top,
        BorderSide::Right,
        BorderSide::Bottom,
        BorderSide::Left,
    ];

    /// Position in `[top, right, bottom, left]` arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The side of the touching box that meets this side.
    pub fn opposite(self) -> BorderSide {
        OPPOSITE[self.index()]
    }

    /// Paint-backend flag for this side.
    pub fn bit(self) -> u8 {
        1 << self.index()
    }
}

impl TryFrom<u8> for BorderSide {
    type Error = LayoutError;

    /// Convert a single paint-backend side flag.
    fn try_from(bit: u8) -> Result<Self, Self::Error> {
        BorderSide::ALL
            .into_iter()
            .find(|side| side.bit() == bit)
            .ok_or(LayoutError::InvalidBorderSide(bit))
    }
}

/// A set of sides to paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderSides(u8);

impl BorderSides {
    pub const NONE: BorderSides = BorderSides(0);
    pub const ALL: BorderSides = BorderSides(0b1111);

    pub fn with(self, side: BorderSide) -> Self {
        BorderSides(self.0 | side.bit())
    }

    pub fn contains(self, side: BorderSide) -> bool {
        self.0 & side.bit() != 0
    }
}

/// Style, width and color of one border edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderValue {
    pub style: BorderStyle,
    pub width: i32,
    pub color: Color,
}

impl BorderValue {
    /// No border.
    pub const EMPTY: BorderValue = BorderValue {
        style: BorderStyle::None,
        width: 0,
        color: Color::TRANSPARENT,
    };

    pub fn new(style: BorderStyle, width: i32, color: Color) -> Self {
        Self {
            style,
            width: width.max(0),
            color,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl Default for BorderValue {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Resolved borders for all four sides of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderSet {
    pub top: BorderValue,
    pub right: BorderValue,
    pub bottom: BorderValue,
    pub left: BorderValue,
}

impl BorderSet {
    pub const EMPTY: BorderSet = BorderSet {
        top: BorderValue::EMPTY,
        right: BorderValue::EMPTY,
        bottom: BorderValue::EMPTY,
        left: BorderValue::EMPTY,
    };

    /// Build a set from values in `[top, right, bottom, left]` order.
    pub fn from_sides(values: [BorderValue; 4]) -> Self {
        let [top, right, bottom, left] = values;
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Resolve the borders an element declares.
    pub fn from_style(style: &ComputedStyle) -> Self {
        let widths = style.border_widths();
        let styles = style.border_styles();
        let colors = style.border_colors();

        Self::from_sides(BorderSide::ALL.map(|side| {
            let i = side.index();
            let width = if styles[i].is_drawn() {
                style.resolve(widths[i], 0.0) as i32
            } else {
                0
            };
            BorderValue::new(styles[i], width, colors[i])
        }))
    }

    pub fn side(&self, side: BorderSide) -> BorderValue {
        match side {
            BorderSide::Top => self.top,
            BorderSide::Right => self.right,
            BorderSide::Bottom => self.bottom,
            BorderSide::Left => self.left,
        }
    }

    /// Widths as edge sizes.
    pub fn widths(&self) -> EdgeSizes {
        EdgeSizes::new(
            self.top.width,
            self.right.width,
            self.bottom.width,
            self.left.width,
        )
    }

    /// Top plus bottom width.
    pub fn height(&self) -> i32 {
        self.top.width + self.bottom.width
    }

    /// Left plus right width.
    pub fn width(&self) -> i32 {
        self.left.width + self.right.width
    }

    /// Check if any side would put ink on the page.
    pub fn has_drawn_side(&self) -> bool {
        BorderSide::ALL
            .iter()
            .any(|&side| self.side(side).style.is_drawn() && self.side(side).width > 0)
    }
}

/// A resolved collapsed border, as handed to the table-wide border painter.
///
/// Two values are the same border when style, width and color match; the
/// precedence weight does not take part in equality.
#[derive(Debug, Clone, Copy)]
pub struct CollapsedBorderValue {
    pub style: BorderStyle,
    pub width: i32,
    pub color: Color,
    pub precedence: u8,
}

impl CollapsedBorderValue {
    /// Weight given to borders that come from a cell.
    pub const CELL_PRECEDENCE: u8 = 1;

    pub fn new(value: BorderValue, precedence: u8) -> Self {
        Self {
            style: value.style,
            width: value.width,
            color: value.color,
            precedence,
        }
    }

    /// Check if there is a border to paint on this side.
    pub fn exists(&self) -> bool {
        !self.style.is_none()
    }

    pub fn value(&self) -> BorderValue {
        BorderValue::new(self.style, self.width, self.color)
    }
}

impl PartialEq for CollapsedBorderValue {
    fn eq(&self, other: &Self) -> bool {
        self.style == other.style && self.width == other.width && self.color == other.color
    }
}

impl Eq for CollapsedBorderValue {}

impl Hash for CollapsedBorderValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.style.hash(state);
        self.width.hash(state);
        self.color.hash(state);
    }
}
