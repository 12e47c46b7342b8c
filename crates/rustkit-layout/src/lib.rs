//! # RustKit Layout
//!
//! Table-cell layout and paint geometry for the RustKit browser engine.
//!
//! ## Design Goals
//!
//! 1. **Collapsing borders**: Resolve the single border drawn on each shared cell edge
//! 2. **Cell geometry**: Convert table-assigned widths and CSS heights into box dimensions
//! 3. **Pagination**: Clip each cell to the part of its row visible on an output page
//! 4. **Paint instructions**: Hand rectangles and border values to an output device
//!
//! Geometry is in integer device units. Table width/height distribution and
//! generic block layout happen elsewhere; this crate consumes their results
//! through [`block::BlockBox`] and [`table::TableBox`].

use thiserror::Error;

pub mod block;
pub mod border;
pub mod paint;
pub mod table;

pub use block::{BlockBox, ChildBox, ContentType, FloatManager};
pub use border::{BorderSet, BorderSide, BorderSides, BorderValue, CollapsedBorderValue};
pub use paint::{DisplayCommand, DisplayList, OutputDevice};
pub use table::{
    CellBox, CellId, CollapsedBorderPass, CollapsedBorderSide, ContentLimit,
    ContentLimitContainer, LayoutContext, PageBox, PaintContext, RowBox, RowId, SectionBox,
    SectionId, SectionKind, TableBox, TableColumn, TableSlot,
};

/// Errors that can occur in layout.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Invalid border side: {0:#04x}")]
    InvalidBorderSide(u8),

    #[error("Page {page_no} precedes the first page ({initial_page_no}) of this row")]
    PageBeforeRow {
        page_no: usize,
        initial_page_no: usize,
    },
}

/// A 2D rectangle in device units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Edge sizes (margin, padding, border).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeSizes {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl EdgeSizes {
    pub fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

/// Box dimensions including content, padding, border, and margin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dimensions {
    /// Content area.
    pub content: Rect,
    /// Padding.
    pub padding: EdgeSizes,
    /// Border.
    pub border: EdgeSizes,
    /// Margin.
    pub margin: EdgeSizes,
}

impl Dimensions {
    /// Get the padding box (content + padding).
    pub fn padding_box(&self) -> Rect {
        Rect {
            x: self.content.x - self.padding.left,
            y: self.content.y - self.padding.top,
            width: self.content.width + self.padding.horizontal(),
            height: self.content.height + self.padding.vertical(),
        }
    }

    /// Get the border box (content + padding + border).
    pub fn border_box(&self) -> Rect {
        let pb = self.padding_box();
        Rect {
            x: pb.x - self.border.left,
            y: pb.y - self.border.top,
            width: pb.width + self.border.horizontal(),
            height: pb.height + self.border.vertical(),
        }
    }

    /// Get the margin box (content + padding + border + margin).
    pub fn margin_box(&self) -> Rect {
        let bb = self.border_box();
        Rect {
            x: bb.x - self.margin.left,
            y: bb.y - self.margin.top,
            width: bb.width + self.margin.horizontal(),
            height: bb.height + self.margin.vertical(),
        }
    }

    /// Margin, border and padding on the left side.
    pub fn left_mbp(&self) -> i32 {
        self.margin.left + self.border.left + self.padding.left
    }

    /// Margin, border and padding on the right side.
    pub fn right_mbp(&self) -> i32 {
        self.margin.right + self.border.right + self.padding.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect() {
        let r = Rect::new(10, 20, 100, 50);
        assert_eq!(r.right(), 110);
        assert_eq!(r.bottom(), 70);
        assert!(r.contains(50, 30));
        assert!(!r.contains(0, 0));
    }

    #[test]
    fn test_dimensions_boxes() {
        let d = Dimensions {
            content: Rect::new(20, 20, 100, 50),
            padding: EdgeSizes::new(5, 5, 5, 5),
            border: EdgeSizes::new(1, 1, 1, 1),
            margin: EdgeSizes::new(10, 10, 10, 10),
        };

        let pb = d.padding_box();
        assert_eq!(pb.width, 110);
        assert_eq!(pb.height, 60);

        let bb = d.border_box();
        assert_eq!(bb.width, 112);
        assert_eq!(bb.height, 62);

        let mb = d.margin_box();
        assert_eq!(mb.width, 132);
        assert_eq!(mb.height, 82);

        assert_eq!(d.left_mbp(), 16);
        assert_eq!(d.right_mbp(), 16);
    }

    #[test]
    fn test_invalid_side_error_message() {
        let err = LayoutError::InvalidBorderSide(3);
        assert_eq!(err.to_string(), "Invalid border side: 0x03");
    }
}
