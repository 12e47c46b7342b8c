//! Generic block box contract.
//!
//! Line breaking, margin collapsing and float placement run elsewhere; their
//! results land here as child boxes, floats and an optional inline baseline.
//! Table cells build on this box and override only what tables change.

use rustkit_css::{ComputedStyle, Length};

use crate::border::{BorderSet, BorderSides};
use crate::paint::OutputDevice;
use crate::{Dimensions, EdgeSizes, Rect};

/// What a block's children consist of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    Empty,
    Inline,
    Block,
}

/// A laid-out child box, positioned relative to its parent's content box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Absolute position, derived from `x`/`y` by [`BlockBox::calc_child_locations`].
    pub abs_x: i32,
    pub abs_y: i32,
    /// First baseline, relative to the child's top edge.
    pub baseline: Option<i32>,
}

impl ChildBox {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_baseline(mut self, baseline: i32) -> Self {
        self.baseline = Some(baseline);
        self
    }
}

/// Floats registered with a block formatting context.
#[derive(Debug, Clone, Default)]
pub struct FloatManager {
    floats: Vec<ChildBox>,
}

impl FloatManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_float(&mut self, float: ChildBox) {
        self.floats.push(float);
    }

    pub fn floats(&self) -> &[ChildBox] {
        &self.floats
    }

    /// Run an operation on every registered float.
    pub fn perform_float_operation(&mut self, mut operation: impl FnMut(&mut ChildBox)) {
        for float in &mut self.floats {
            operation(float);
        }
    }
}

/// A block-level box.
#[derive(Debug, Clone)]
pub struct BlockBox {
    /// Computed style.
    pub style: ComputedStyle,
    /// Resolved margin, border, padding and content rectangles.
    pub dimensions: Dimensions,
    /// Absolute position of the margin edge.
    pub abs_x: i32,
    pub abs_y: i32,
    /// Content width of the containing block, for percentage resolution.
    pub containing_width: i32,
    /// Child boxes.
    pub children: Vec<ChildBox>,
    pub content_type: ContentType,
    /// Floats of the persistent block formatting context this box establishes.
    pub floats: FloatManager,
}

impl BlockBox {
    /// Create a new block box.
    pub fn new(style: ComputedStyle) -> Self {
        Self {
            style,
            dimensions: Dimensions::default(),
            abs_x: 0,
            abs_y: 0,
            containing_width: 0,
            children: Vec::new(),
            content_type: ContentType::Empty,
            floats: FloatManager::new(),
        }
    }

    /// The border the element declares.
    pub fn border(&self) -> BorderSet {
        BorderSet::from_style(&self.style)
    }

    /// Padding resolved against the containing block width.
    pub fn padding(&self) -> EdgeSizes {
        self.resolve_edges(self.style.padding())
    }

    /// Margins resolved against the containing block width.
    pub fn margin(&self) -> EdgeSizes {
        let margin = self
            .style
            .margin()
            .map(|m| if m.is_auto() { Length::Zero } else { m });
        self.resolve_edges(margin)
    }

    fn resolve_edges(&self, edges: [Length; 4]) -> EdgeSizes {
        let [top, right, bottom, left] =
            edges.map(|l| self.style.resolve(l, self.containing_width as f32) as i32);
        EdgeSizes::new(top, right, bottom, left)
    }

    /// Recompute margin, border and padding with the given border.
    pub fn calc_dimensions(&mut self, border: &BorderSet) {
        self.dimensions.margin = self.margin();
        self.dimensions.border = border.widths();
        self.dimensions.padding = self.padding();
        self.update_content_origin();
    }

    pub fn left_mbp(&self) -> i32 {
        self.dimensions.left_mbp()
    }

    pub fn right_mbp(&self) -> i32 {
        self.dimensions.right_mbp()
    }

    pub fn content_width(&self) -> i32 {
        self.dimensions.content.width
    }

    pub fn set_content_width(&mut self, width: i32) {
        self.dimensions.content.width = width.max(0);
    }

    pub fn set_content_height(&mut self, height: i32) {
        self.dimensions.content.height = height.max(0);
    }

    /// Place the margin edge and refresh every derived absolute position.
    pub fn set_position(&mut self, abs_x: i32, abs_y: i32) {
        self.abs_x = abs_x;
        self.abs_y = abs_y;
        self.update_content_origin();
        self.calc_child_locations();
    }

    fn update_content_origin(&mut self) {
        let d = &mut self.dimensions;
        d.content.x = self.abs_x + d.margin.left + d.border.left + d.padding.left;
        d.content.y = self.abs_y + d.margin.top + d.border.top + d.padding.top;
    }

    /// Recompute absolute positions of children and floats.
    pub fn calc_child_locations(&mut self) {
        let origin_x = self.dimensions.content.x;
        let origin_y = self.dimensions.content.y;
        for child in &mut self.children {
            child.abs_x = origin_x + child.x;
            child.abs_y = origin_y + child.y;
        }
        self.floats.perform_float_operation(|float| {
            float.abs_x = origin_x + float.x;
            float.abs_y = origin_y + float.y;
        });
    }

    /// Height occupied by children, measured from the content top.
    pub fn children_height(&self) -> i32 {
        self.children
            .iter()
            .map(|c| c.y + c.height)
            .max()
            .unwrap_or(0)
            .max(0)
    }

    /// First baseline established by a child, if any.
    pub fn calc_baseline(&self) -> Option<i32> {
        self.children
            .iter()
            .find_map(|c| c.baseline.map(|b| c.abs_y + b))
    }

    pub fn content_area_edge(&self) -> Rect {
        self.dimensions.content
    }

    pub fn painting_border_edge(&self) -> Rect {
        self.dimensions.border_box()
    }

    /// Children are clipped to the padding edge.
    pub fn children_clip_edge(&self) -> Rect {
        self.dimensions.padding_box()
    }

    pub fn painting_clip_edge(&self) -> Rect {
        self.dimensions.border_box()
    }

    pub fn needs_clip_on_paint(&self) -> bool {
        self.style.clips_overflow()
    }

    /// Paint `border` around the border box. Boxes whose used border differs
    /// from the declared one pass their own.
    pub fn paint_border(&self, border: &BorderSet, device: &mut dyn OutputDevice) {
        device.paint_border(
            &self.style,
            self.painting_border_edge(),
            border,
            BorderSides::ALL,
        );
    }
}
