//! Table cell box.
//!
//! A cell is a block box whose border, width and height follow table rules:
//! collapsed borders replace the declared ones, declared heights include
//! border and padding, and the table decides the used width.

use rustkit_css::{ComputedStyle, Length, VerticalAlign};
use tracing::trace;

use super::collapse::CollapsedBorders;
use super::pagination::LayoutContext;
use super::{CellId, RowId, SectionId, TableBox};
use crate::block::{BlockBox, ContentType};
use crate::border::{BorderSet, BorderSide, BorderValue, CollapsedBorderValue};

/// Where a cell sits in its table, fixed when the cell is attached.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CellPlacement {
    pub(crate) id: CellId,
    pub(crate) row: usize,
    pub(crate) col: usize,
    pub(crate) colspan: usize,
    pub(crate) rowspan: usize,
    pub(crate) row_box: RowId,
    pub(crate) section: SectionId,
}

/// A table cell.
#[derive(Debug, Clone)]
pub struct CellBox {
    /// Generic block state: style, dimensions, children and floats.
    pub block: BlockBox,
    placement: CellPlacement,
    collapse_borders: bool,
    collapsed: Option<CollapsedBorders>,
}

impl CellBox {
    /// Cells never take part in margin collapsing.
    pub const SKIP_WHEN_COLLAPSING_MARGINS: bool = true;
    /// A declared cell height is a minimum; content may grow it but never shrink it.
    pub const ALLOW_HEIGHT_TO_SHRINK: bool = false;

    pub(crate) fn new(placement: CellPlacement, style: ComputedStyle, collapse_borders: bool) -> Self {
        Self {
            block: BlockBox::new(style),
            placement,
            collapse_borders,
            collapsed: None,
        }
    }

    /// A fresh box with the same style and grid position, used when the cell
    /// continues on another page. Layout and collapse state are not copied.
    pub fn copy_of(&self) -> Self {
        Self::new(self.placement, self.block.style.clone(), self.collapse_borders)
    }

    pub fn id(&self) -> CellId {
        self.placement.id
    }

    /// Grid row where the cell starts.
    pub fn row(&self) -> usize {
        self.placement.row
    }

    /// Grid column where the cell starts.
    pub fn col(&self) -> usize {
        self.placement.col
    }

    pub fn colspan(&self) -> usize {
        self.placement.colspan
    }

    pub fn rowspan(&self) -> usize {
        self.placement.rowspan
    }

    /// The row box the cell was attached to.
    pub fn row_box(&self) -> RowId {
        self.placement.row_box
    }

    pub fn section(&self) -> SectionId {
        self.placement.section
    }

    pub fn style(&self) -> &ComputedStyle {
        &self.block.style
    }

    pub fn is_collapse_borders(&self) -> bool {
        self.collapse_borders
    }

    // ==================== Borders ====================

    /// The border the cell declares, ignoring border collapsing.
    pub fn style_border(&self) -> BorderSet {
        self.block.border()
    }

    /// The border used for layout.
    ///
    /// With collapsing borders this is the resolved layout border, or no
    /// border at all if the collapse pass has not run for this cell.
    pub fn border(&self) -> BorderSet {
        if self.collapse_borders {
            self.collapsed
                .map(|collapsed| collapsed.layout)
                .unwrap_or(BorderSet::EMPTY)
        } else {
            self.block.border()
        }
    }

    /// Resolve and store the collapsed borders against the declared borders of
    /// the touching cells, given in `[top, right, bottom, left]` order.
    pub fn calc_collapsed_border(&mut self, touching: &[Option<BorderSet>; 4]) {
        let own = self.style_border();
        let collapsed = CollapsedBorders::resolve(&own, touching);
        trace!(cell = self.placement.id.0, "Stored collapsed borders");
        self.collapsed = Some(collapsed);
    }

    pub fn collapsed_borders(&self) -> Option<&CollapsedBorders> {
        self.collapsed.as_ref()
    }

    /// Collapsed value of one side; empty if the collapse pass has not run.
    pub fn collapsed_border(&self, side: BorderSide) -> CollapsedBorderValue {
        self.collapsed
            .map(|collapsed| collapsed.value(side))
            .unwrap_or_else(|| {
                CollapsedBorderValue::new(BorderValue::EMPTY, CollapsedBorderValue::CELL_PRECEDENCE)
            })
    }

    pub fn has_collapsed_painting_border(&self) -> bool {
        self.collapsed.is_some()
    }

    pub fn collapsed_painting_border(&self) -> BorderSet {
        self.collapsed
            .map(|collapsed| collapsed.painting)
            .unwrap_or(BorderSet::EMPTY)
    }

    // ==================== Width and height ====================

    /// The declared width plus horizontal border and padding.
    ///
    /// `auto` and percentage widths are returned unchanged.
    pub fn outer_style_width(&self) -> Length {
        let style = &self.block.style;
        let width = style.width;
        if width.is_auto() || width.is_percent() {
            return width;
        }

        let border = self.border();
        let padding = self.block.padding();
        let borders_and_padding = border.width() + padding.horizontal();

        let specified = style.resolve(width, self.block.containing_width as f32);
        Length::Px(specified + borders_and_padding as f32)
    }

    /// The outer width, or the column's declared width when the cell has
    /// none of its own and spans a single column.
    pub fn outer_style_or_col_width(&self, table: &TableBox) -> Length {
        let result = self.outer_style_width();
        if self.colspan() > 1 || !result.is_auto() {
            return result;
        }

        // Collapsed cell borders are not added to the column width.
        match table.column_at(self.col()) {
            Some(column) => column.style.width,
            None => result,
        }
    }

    /// Give the cell a used border-box width chosen by the table.
    pub fn set_layout_width(&mut self, width: i32, containing_width: i32) {
        self.block.containing_width = containing_width;
        let border = self.border();
        self.block.calc_dimensions(&border);
        let content = width - self.block.left_mbp() - self.block.right_mbp();
        self.block.set_content_width(content);
    }

    /// Declared height as a content height.
    ///
    /// The declared height is treated as a border-box height. Returns `None`
    /// for `auto` and when border and padding use up the whole height.
    pub fn css_height(&self) -> Option<i32> {
        let style = &self.block.style;
        if style.is_auto_height() {
            return None;
        }

        let mut result = style.resolve(style.height, self.block.containing_width as f32) as i32;
        result -= self.border().height();
        let padding = self.block.padding();
        result -= padding.vertical();

        (result >= 0).then_some(result)
    }

    pub fn is_auto_height(&self) -> bool {
        let style = &self.block.style;
        style.is_auto_height() || !style.has_absolute_height()
    }

    /// Vertical alignment of the cell's content. Only `top`, `middle` and
    /// `bottom` apply to cells; every other value acts as `baseline`.
    pub fn vertical_align(&self) -> VerticalAlign {
        match self.block.style.vertical_align {
            align @ (VerticalAlign::Top | VerticalAlign::Middle | VerticalAlign::Bottom) => align,
            _ => VerticalAlign::Baseline,
        }
    }

    /// Shift the cell's content down by `delta_y`, floats included.
    pub fn move_content(&mut self, delta_y: i32) {
        for child in &mut self.block.children {
            child.y += delta_y;
        }
        self.block
            .floats
            .perform_float_operation(|float| float.y += delta_y);
        self.block.calc_child_locations();
    }

    /// The cell's baseline: the first line's baseline, or the top of the
    /// content area when no child establishes one.
    pub fn baseline(&self) -> i32 {
        self.block
            .calc_baseline()
            .unwrap_or_else(|| self.block.content_area_edge().y)
    }

    pub fn block_baseline(&self) -> Option<i32> {
        self.block.calc_baseline()
    }

    /// Check if laying the cell out `pos_delta_y` further down would change
    /// where page breaks fall.
    pub fn is_page_breaks_change(&self, ctx: &LayoutContext, pos_delta_y: i32) -> bool {
        if !ctx.page_breaks_allowed {
            return false;
        }

        let Some(page) = ctx.first_page_for(self.block.abs_y) else {
            return false;
        };

        let bottom_edge = self.block.abs_y + self.block.children_height();
        let limit = page.bottom - ctx.extra_space_bottom;
        bottom_edge >= limit || bottom_edge + pos_delta_y >= limit
    }

    /// A fixed cell width is only a hint under automatic table layout.
    pub fn is_fixed_width_advisory_only(&self, table: &TableBox) -> bool {
        table.style().is_table_layout_auto()
    }

    /// Check if backgrounds and borders are painted at all.
    pub fn is_paint_backgrounds_and_borders(&self) -> bool {
        self.block.style.is_show_empty_cells() || self.block.content_type != ContentType::Empty
    }
}
