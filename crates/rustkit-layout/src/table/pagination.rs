//! Paged output: which part of a row each page shows, and how cells clip to it.

use std::collections::BTreeMap;

use tracing::trace;

use super::cell::CellBox;
use super::TableBox;
use crate::{LayoutError, Rect};

/// Vertical range of a row that is visible on one page.
///
/// `None` on either side means the range was never narrowed down, and the
/// row is drawn at its natural size on that page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentLimit {
    pub top: Option<i32>,
    pub bottom: Option<i32>,
}

impl ContentLimit {
    pub fn new(top: i32, bottom: i32) -> Self {
        Self {
            top: Some(top),
            bottom: Some(bottom),
        }
    }

    /// Check if both edges are known.
    pub fn is_defined(&self) -> bool {
        self.top.is_some() && self.bottom.is_some()
    }
}

/// Content limits of one row, keyed by page number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLimitContainer {
    initial_page_no: usize,
    limits: BTreeMap<usize, ContentLimit>,
}

impl ContentLimitContainer {
    /// Create a container for a row that starts on `initial_page_no`.
    pub fn new(initial_page_no: usize) -> Self {
        Self {
            initial_page_no,
            limits: BTreeMap::new(),
        }
    }

    /// Page on which the row starts.
    pub fn initial_page_no(&self) -> usize {
        self.initial_page_no
    }

    /// Last page with a recorded limit.
    pub fn last_page_no(&self) -> usize {
        self.limits
            .keys()
            .next_back()
            .copied()
            .unwrap_or(self.initial_page_no)
            .max(self.initial_page_no)
    }

    pub fn is_contains_multiple_pages(&self) -> bool {
        self.last_page_no() != self.initial_page_no
    }

    pub fn content_limit(&self, page_no: usize) -> Option<&ContentLimit> {
        self.limits.get(&page_no)
    }

    fn limit_mut(&mut self, page_no: usize) -> Result<&mut ContentLimit, LayoutError> {
        if page_no < self.initial_page_no {
            return Err(LayoutError::PageBeforeRow {
                page_no,
                initial_page_no: self.initial_page_no,
            });
        }
        Ok(self.limits.entry(page_no).or_default())
    }

    /// Record content at `y` on a page; the visible top only ever moves up.
    pub fn update_top(&mut self, page_no: usize, y: i32) -> Result<(), LayoutError> {
        let limit = self.limit_mut(page_no)?;
        limit.top = Some(limit.top.map_or(y, |top| top.min(y)));
        Ok(())
    }

    /// Record content ending at `y` on a page; the visible bottom only ever moves down.
    pub fn update_bottom(&mut self, page_no: usize, y: i32) -> Result<(), LayoutError> {
        let limit = self.limit_mut(page_no)?;
        limit.bottom = Some(limit.bottom.map_or(y, |bottom| bottom.max(y)));
        Ok(())
    }
}

/// One output page's vertical extent in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBox {
    pub top: i32,
    pub bottom: i32,
}

impl PageBox {
    pub fn new(top: i32, bottom: i32) -> Self {
        Self { top, bottom }
    }

    pub fn contains(&self, y: i32) -> bool {
        y >= self.top && y < self.bottom
    }
}

/// Layout-time settings that affect page breaking.
#[derive(Debug, Clone, Default)]
pub struct LayoutContext {
    pub page_breaks_allowed: bool,
    /// Space kept free at the bottom of each page.
    pub extra_space_bottom: i32,
    pub pages: Vec<PageBox>,
}

impl LayoutContext {
    /// Paged layout over the given pages.
    pub fn paged(pages: Vec<PageBox>) -> Self {
        Self {
            page_breaks_allowed: true,
            extra_space_bottom: 0,
            pages,
        }
    }

    pub fn with_extra_space_bottom(mut self, extra: i32) -> Self {
        self.extra_space_bottom = extra;
        self
    }

    /// The first page whose extent contains `y`.
    pub fn first_page_for(&self, y: i32) -> Option<&PageBox> {
        self.pages.iter().find(|page| page.contains(y))
    }
}

/// Paint-time settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaintContext {
    /// Output is split into pages.
    pub print: bool,
    /// Page currently being painted.
    pub page_no: usize,
}

impl PaintContext {
    pub fn screen() -> Self {
        Self::default()
    }

    pub fn print(page_no: usize) -> Self {
        Self {
            print: true,
            page_no,
        }
    }
}

impl CellBox {
    fn is_paginated(&self, table: &TableBox, ctx: &PaintContext) -> bool {
        ctx.print && table.style().is_paginate_table()
    }

    /// The part of the cell's border box that shows on the current page.
    ///
    /// Returns `None` when the cell's row has nothing on this page. Header and
    /// footer cells repeat on every page and are never cut.
    pub fn content_limited_border_edge(&self, table: &TableBox, ctx: &PaintContext) -> Option<Rect> {
        let mut result = self.block.painting_border_edge();
        if !self.is_paginated(table, ctx) {
            return Some(result);
        }

        let section = table.section(self.section());
        if section.is_header() || section.is_footer() {
            return Some(result);
        }

        let row = table.row(self.row_box());
        let container = &row.content_limits;
        let limit = container.content_limit(ctx.page_no)?;

        let (Some(limit_top), Some(limit_bottom)) = (limit.top, limit.bottom) else {
            return Some(result);
        };

        let top = if ctx.page_no == container.initial_page_no() {
            result.y
        } else {
            limit_top - row.extra_space_top
        };

        let bottom = if ctx.page_no == container.last_page_no() {
            result.bottom()
        } else {
            limit_bottom + row.extra_space_bottom
        };

        trace!(page = ctx.page_no, top, bottom, "Content-limited cell edge");
        result.y = top;
        result.height = bottom - top;
        Some(result)
    }

    /// Where the cell's children are clipped on the current page.
    pub fn children_clip_edge(&self, table: &TableBox, ctx: &PaintContext) -> Rect {
        if self.is_paginated(table, ctx) {
            if let Some(mut bounds) = self.content_limited_border_edge(table, ctx) {
                let border = self.border();
                let padding = self.block.padding();
                bounds.y += border.top.width + padding.top;
                bounds.height -= border.height() + padding.vertical();
                return bounds;
            }
        }

        self.block.children_clip_edge()
    }

    /// Check if painting the cell needs a clip. A row broken across pages
    /// always clips its cells in paged output.
    pub fn needs_clip_on_paint(&self, table: &TableBox, ctx: &PaintContext) -> bool {
        if self.block.needs_clip_on_paint() {
            return true;
        }

        self.is_paginated(table, ctx)
            && table
                .row(self.row_box())
                .content_limits
                .is_contains_multiple_pages()
    }

    /// The painting border edge grown by half of each collapsed border, so
    /// borders shared with neighbours are not clipped. Odd widths round the
    /// extra unit towards the right and bottom.
    pub fn collapsed_border_bounds(&self) -> Rect {
        let border = self.collapsed_painting_border();
        let mut bounds = self.block.painting_border_edge();
        bounds.x -= border.left.width / 2;
        bounds.y -= border.top.width / 2;
        bounds.width += border.left.width / 2 + (border.right.width + 1) / 2;
        bounds.height += border.top.width / 2 + (border.bottom.width + 1) / 2;
        bounds
    }

    pub fn painting_clip_edge(&self) -> Rect {
        if self.has_collapsed_painting_border() {
            self.collapsed_border_bounds()
        } else {
            self.block.painting_clip_edge()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{CellId, RowId};
    use rustkit_css::ComputedStyle;

    fn style(css: &str) -> ComputedStyle {
        ComputedStyle::from_declarations(css).unwrap()
    }

    /// A paginated table with one body row holding one 100px-tall cell at y = 80.
    fn paged_table(cell_css: &str) -> (TableBox, RowId, CellId) {
        let mut table = TableBox::new(style("-fs-table-paginate: paginate"));
        let body = table.add_section(ComputedStyle::new());
        let row = table.add_row(body, ComputedStyle::new());
        let cell = table.add_cell(row, style(cell_css));

        let cell_box = table.cell_mut(cell);
        cell_box.set_layout_width(50, 200);
        let frame = cell_box.border().height() + cell_box.block.padding().vertical();
        cell_box.block.set_content_height(100 - frame);
        cell_box.block.set_position(0, 80);
        (table, row, cell)
    }

    #[test]
    fn test_container_tracks_pages() {
        let mut limits = ContentLimitContainer::new(2);
        assert_eq!(limits.last_page_no(), 2);
        assert!(!limits.is_contains_multiple_pages());

        limits.update_top(2, 50).unwrap();
        limits.update_bottom(2, 90).unwrap();
        limits.update_top(2, 40).unwrap();
        limits.update_bottom(2, 70).unwrap();
        limits.update_top(3, 10).unwrap();

        assert_eq!(limits.content_limit(2), Some(&ContentLimit::new(40, 90)));
        assert_eq!(
            limits.content_limit(3),
            Some(&ContentLimit {
                top: Some(10),
                bottom: None
            })
        );
        assert_eq!(limits.last_page_no(), 3);
        assert!(limits.is_contains_multiple_pages());
        assert!(limits.content_limit(4).is_none());
    }

    #[test]
    fn test_container_rejects_earlier_page() {
        let mut limits = ContentLimitContainer::new(2);
        assert_eq!(
            limits.update_top(1, 0),
            Err(LayoutError::PageBeforeRow {
                page_no: 1,
                initial_page_no: 2
            })
        );
    }

    #[test]
    fn test_first_page_for() {
        let ctx = LayoutContext::paged(vec![PageBox::new(0, 100), PageBox::new(100, 200)]);
        assert_eq!(ctx.first_page_for(100), Some(&PageBox::new(100, 200)));
        assert_eq!(ctx.first_page_for(250), None);
        assert!(LayoutContext::default().first_page_for(0).is_none());
    }

    #[test]
    fn test_screen_output_uses_natural_edge() {
        let (table, _, cell) = paged_table("");
        let cell = table.cell(cell);
        assert_eq!(
            cell.content_limited_border_edge(&table, &PaintContext::screen()),
            Some(Rect::new(0, 80, 50, 100))
        );
    }

    #[test]
    fn test_missing_limit_means_not_visible() {
        let (table, _, cell) = paged_table("");
        assert_eq!(
            table
                .cell(cell)
                .content_limited_border_edge(&table, &PaintContext::print(0)),
            None
        );
    }

    #[test]
    fn test_undefined_limit_uses_natural_edge() {
        let (mut table, row, cell) = paged_table("");
        table
            .row_mut(row)
            .content_limits
            .update_top(0, 90)
            .unwrap();
        assert_eq!(
            table
                .cell(cell)
                .content_limited_border_edge(&table, &PaintContext::print(0)),
            Some(Rect::new(0, 80, 50, 100))
        );
    }

    #[test]
    fn test_single_page_limit_keeps_natural_edge() {
        let (mut table, row, cell) = paged_table("");
        let limits = &mut table.row_mut(row).content_limits;
        limits.update_top(0, 85).unwrap();
        limits.update_bottom(0, 170).unwrap();
        assert_eq!(
            table
                .cell(cell)
                .content_limited_border_edge(&table, &PaintContext::print(0)),
            Some(Rect::new(0, 80, 50, 100))
        );
    }

    #[test]
    fn test_header_cells_are_not_cut() {
        let mut table = TableBox::new(style("-fs-table-paginate: paginate"));
        let head = table.add_section(style("display: table-header-group"));
        let row = table.add_row(head, ComputedStyle::new());
        let cell = table.add_cell(row, ComputedStyle::new());
        assert!(table
            .cell(cell)
            .content_limited_border_edge(&table, &PaintContext::print(4))
            .is_some());
    }

    #[test]
    fn test_children_clip_edge_insets_border_and_padding() {
        let (mut table, row, cell) = paged_table("border: 2px solid black; padding: 3px");
        let limits = &mut table.row_mut(row).content_limits;
        limits.update_top(0, 80).unwrap();
        limits.update_bottom(0, 180).unwrap();

        let cell = table.cell(cell);
        assert_eq!(
            cell.children_clip_edge(&table, &PaintContext::print(0)),
            Rect::new(0, 85, 50, 90)
        );
        // Not visible on page 1: the generic padding-box clip.
        assert_eq!(
            cell.children_clip_edge(&table, &PaintContext::print(1)),
            cell.block.children_clip_edge()
        );
    }

    #[test]
    fn test_multi_page_row_forces_clip() {
        let (mut table, row, cell) = paged_table("");
        assert!(!table.cell(cell).needs_clip_on_paint(&table, &PaintContext::print(0)));

        let limits = &mut table.row_mut(row).content_limits;
        limits.update_bottom(0, 120).unwrap();
        limits.update_top(1, 120).unwrap();

        assert!(table.cell(cell).needs_clip_on_paint(&table, &PaintContext::print(0)));
        assert!(!table.cell(cell).needs_clip_on_paint(&table, &PaintContext::screen()));
    }

    #[test]
    fn test_collapsed_border_bounds_split_odd_widths() {
        let mut table = TableBox::new(style("border-collapse: collapse"));
        let body = table.add_section(ComputedStyle::new());
        let row = table.add_row(body, ComputedStyle::new());
        let cell = table.add_cell(row, style("border: 3px solid black"));
        table.calc_collapsed_borders();

        let cell_box = table.cell_mut(cell);
        cell_box.set_layout_width(40, 100);
        cell_box.block.set_content_height(14);
        cell_box.block.set_position(10, 10);

        // Border box 40 x 20 at (10, 10); 3px borders split 1 outside-left, 2 outside-right.
        assert_eq!(cell_box.collapsed_border_bounds(), Rect::new(9, 9, 43, 23));
        assert_eq!(cell_box.painting_clip_edge(), Rect::new(9, 9, 43, 23));
    }

    #[test]
    fn test_painting_clip_edge_without_collapsed_border() {
        let (table, _, cell) = paged_table("border: 3px solid black");
        let cell = table.cell(cell);
        assert_eq!(cell.painting_clip_edge(), cell.block.painting_clip_edge());
    }
}
