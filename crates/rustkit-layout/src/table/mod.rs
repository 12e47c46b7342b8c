//! # Tables
//!
//! A table owns its sections, rows, columns and cells in flat arenas. Cells
//! refer to their row and section by id, assigned once when the cell is
//! attached; the tree above a cell never changes after that.
//!
//! Column width and row height distribution are not done here. The table
//! stores their results (`TableColumn::bounds`, `RowBox::border_edge`, cell
//! positions) and answers the topology queries cells need:
//! [`TableBox::cell_above`], [`TableBox::cell_right`], [`TableBox::cell_below`],
//! [`TableBox::cell_left`], [`TableBox::column_at`] and [`TableBox::column_bounds`].

mod cell;
mod collapse;
mod pagination;
mod paint;
mod registry;

pub use cell::CellBox;
pub use collapse::{other_border_wins, resolve_collapsed_side, CollapsedBorders};
pub use pagination::{
    ContentLimit, ContentLimitContainer, LayoutContext, PageBox, PaintContext,
};
pub use registry::{CollapsedBorderPass, CollapsedBorderSide, EdgeKey};

use rustkit_css::{ComputedStyle, Display};
use tracing::debug;

use crate::border::{BorderSet, BorderSide};
use crate::paint::OutputDevice;
use crate::Rect;

/// Index of a cell in its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId(usize);

/// Index of a row in its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(usize);

/// Index of a row group in its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId(usize);

/// What occupies one grid slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSlot {
    /// The slot where a cell starts.
    Cell(CellId),
    /// A slot covered by the row or column span of another cell.
    Spanned { origin: CellId },
}

/// Kind of row group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Header,
    Body,
    Footer,
}

/// A row group (`thead`, `tbody`, `tfoot`).
#[derive(Debug, Clone)]
pub struct SectionBox {
    pub kind: SectionKind,
    pub style: ComputedStyle,
    pub border_edge: Rect,
    rows: Vec<RowId>,
}

impl SectionBox {
    pub fn is_header(&self) -> bool {
        self.kind == SectionKind::Header
    }

    pub fn is_footer(&self) -> bool {
        self.kind == SectionKind::Footer
    }

    pub fn rows(&self) -> &[RowId] {
        &self.rows
    }
}

/// A table row.
#[derive(Debug, Clone)]
pub struct RowBox {
    pub style: ComputedStyle,
    pub section: SectionId,
    /// Grid row index.
    pub index: usize,
    pub border_edge: Rect,
    /// Space reserved above the row's content on continuation pages.
    pub extra_space_top: i32,
    /// Space reserved below the row's content before a page break.
    pub extra_space_bottom: i32,
    /// Visible part of the row on each page it spans.
    pub content_limits: ContentLimitContainer,
}

/// A table column (`col`).
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub style: ComputedStyle,
    /// Border edge of the column, spanning all rows.
    pub bounds: Rect,
}

/// A table and everything inside it.
#[derive(Debug, Clone)]
pub struct TableBox {
    style: ComputedStyle,
    columns: Vec<TableColumn>,
    sections: Vec<SectionBox>,
    rows: Vec<RowBox>,
    cells: Vec<CellBox>,
    grid: Vec<Vec<Option<TableSlot>>>,
}

impl TableBox {
    /// Create an empty table. The style is fixed for the table's lifetime.
    pub fn new(style: ComputedStyle) -> Self {
        Self {
            style,
            columns: Vec::new(),
            sections: Vec::new(),
            rows: Vec::new(),
            cells: Vec::new(),
            grid: Vec::new(),
        }
    }

    pub fn style(&self) -> &ComputedStyle {
        &self.style
    }

    /// Horizontal and vertical `border-spacing` in device units.
    pub fn border_spacing(&self) -> (i32, i32) {
        (
            self.style.resolve(self.style.border_spacing_h, 0.0) as i32,
            self.style.resolve(self.style.border_spacing_v, 0.0) as i32,
        )
    }

    pub fn add_column(&mut self, style: ComputedStyle, bounds: Rect) {
        self.columns.push(TableColumn { style, bounds });
    }

    /// Append a row group. Its kind comes from `display`.
    pub fn add_section(&mut self, style: ComputedStyle) -> SectionId {
        let kind = match style.display {
            Display::TableHeaderGroup => SectionKind::Header,
            Display::TableFooterGroup => SectionKind::Footer,
            _ => SectionKind::Body,
        };
        let id = SectionId(self.sections.len());
        self.sections.push(SectionBox {
            kind,
            style,
            border_edge: Rect::zero(),
            rows: Vec::new(),
        });
        id
    }

    /// Append a row to a row group. Rows get grid indices in insertion order.
    pub fn add_row(&mut self, section: SectionId, style: ComputedStyle) -> RowId {
        let id = RowId(self.rows.len());
        let index = self.rows.len();
        self.rows.push(RowBox {
            style,
            section,
            index,
            border_edge: Rect::zero(),
            extra_space_top: 0,
            extra_space_bottom: 0,
            content_limits: ContentLimitContainer::new(0),
        });
        self.sections[section.0].rows.push(id);
        self.ensure_grid_row(index);
        id
    }

    /// Attach a cell to a row, in the first grid slot not covered by a span.
    pub fn add_cell(&mut self, row: RowId, style: ComputedStyle) -> CellId {
        let row_index = self.rows[row.0].index;
        let section = self.rows[row.0].section;
        let colspan = style.colspan.max(1) as usize;
        let rowspan = style.rowspan.max(1) as usize;

        let col = self.grid[row_index]
            .iter()
            .position(Option::is_none)
            .unwrap_or(self.grid[row_index].len());

        let id = CellId(self.cells.len());
        for r in row_index..row_index + rowspan {
            self.ensure_grid_row(r);
            let slots = &mut self.grid[r];
            if slots.len() < col + colspan {
                slots.resize(col + colspan, None);
            }
            for (c, slot) in slots.iter_mut().enumerate().skip(col).take(colspan) {
                *slot = Some(if r == row_index && c == col {
                    TableSlot::Cell(id)
                } else {
                    TableSlot::Spanned { origin: id }
                });
            }
        }

        debug!(
            cell = id.0,
            row = row_index,
            col,
            colspan,
            rowspan,
            "Attached table cell"
        );

        let placement = cell::CellPlacement {
            id,
            row: row_index,
            col,
            colspan,
            rowspan,
            row_box: row,
            section,
        };
        self.cells
            .push(CellBox::new(placement, style, self.style.is_collapse_borders()));
        id
    }

    fn ensure_grid_row(&mut self, index: usize) {
        if self.grid.len() <= index {
            self.grid.resize(index + 1, Vec::new());
        }
    }

    pub fn cell(&self, id: CellId) -> &CellBox {
        &self.cells[id.0]
    }

    pub fn cell_mut(&mut self, id: CellId) -> &mut CellBox {
        &mut self.cells[id.0]
    }

    pub fn cells(&self) -> impl Iterator<Item = &CellBox> {
        self.cells.iter()
    }

    pub fn row(&self, id: RowId) -> &RowBox {
        &self.rows[id.0]
    }

    pub fn row_mut(&mut self, id: RowId) -> &mut RowBox {
        &mut self.rows[id.0]
    }

    pub fn section(&self, id: SectionId) -> &SectionBox {
        &self.sections[id.0]
    }

    pub fn section_mut(&mut self, id: SectionId) -> &mut SectionBox {
        &mut self.sections[id.0]
    }

    pub fn row_count(&self) -> usize {
        self.grid.len()
    }

    pub fn column_count(&self) -> usize {
        self.grid.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// What occupies grid slot `(row, col)`.
    pub fn slot_at(&self, row: usize, col: usize) -> Option<TableSlot> {
        self.grid.get(row)?.get(col).copied().flatten()
    }

    /// The slot touching the top edge of a cell.
    pub fn cell_above(&self, id: CellId) -> Option<TableSlot> {
        let cell = self.cell(id);
        let row = cell.row().checked_sub(1)?;
        self.slot_at(row, cell.col())
    }

    /// The slot touching the right edge of a cell.
    pub fn cell_right(&self, id: CellId) -> Option<TableSlot> {
        let cell = self.cell(id);
        self.slot_at(cell.row(), cell.col() + cell.colspan())
    }

    /// The slot touching the bottom edge of a cell.
    pub fn cell_below(&self, id: CellId) -> Option<TableSlot> {
        let cell = self.cell(id);
        self.slot_at(cell.row() + cell.rowspan(), cell.col())
    }

    /// The slot touching the left edge of a cell.
    pub fn cell_left(&self, id: CellId) -> Option<TableSlot> {
        let cell = self.cell(id);
        let col = cell.col().checked_sub(1)?;
        self.slot_at(cell.row(), col)
    }

    /// The slot touching a given side of a cell.
    pub fn touching_slot(&self, id: CellId, side: BorderSide) -> Option<TableSlot> {
        match side {
            BorderSide::Top => self.cell_above(id),
            BorderSide::Right => self.cell_right(id),
            BorderSide::Bottom => self.cell_below(id),
            BorderSide::Left => self.cell_left(id),
        }
    }

    pub fn column_at(&self, col: usize) -> Option<&TableColumn> {
        self.columns.get(col)
    }

    /// Border edge of a column, or an empty rectangle for undeclared columns.
    pub fn column_bounds(&self, col: usize) -> Rect {
        self.column_at(col).map(|c| c.bounds).unwrap_or_default()
    }

    /// Declared borders of the cell touching `side`. Placeholders and the
    /// table edge have none.
    fn touching_border(&self, id: CellId, side: BorderSide) -> Option<BorderSet> {
        match self.touching_slot(id, side)? {
            TableSlot::Cell(other) => Some(self.cell(other).style_border()),
            TableSlot::Spanned { .. } => None,
        }
    }

    /// Resolve the collapsed borders of every cell. Only meaningful when the
    /// table collapses borders; cells of separated tables keep their own.
    pub fn calc_collapsed_borders(&mut self) {
        if !self.style.is_collapse_borders() {
            debug!("Table uses separated borders; skipping collapse pass");
            return;
        }

        for index in 0..self.cells.len() {
            let id = CellId(index);
            let touching = BorderSide::ALL.map(|side| self.touching_border(id, side));
            self.cells[index].calc_collapsed_border(&touching);
        }

        debug!(cells = self.cells.len(), "Collapsed borders resolved");
    }

    /// Sweep every cell once and list the collapsed border sides to paint,
    /// each shared segment exactly once.
    pub fn collect_collapsed_borders(&self) -> Vec<CollapsedBorderSide> {
        let mut pass = CollapsedBorderPass::new();
        for cell in &self.cells {
            cell.add_collapsed_borders(&mut pass);
        }
        debug!(sides = pass.len(), "Collected collapsed border sides");
        pass.into_sides()
    }

    /// Paint the collapsed borders of the whole table.
    pub fn paint_collapsed_borders(&self, device: &mut dyn OutputDevice) {
        for CollapsedBorderSide { cell, side } in self.collect_collapsed_borders() {
            self.cell(cell).paint_collapsed_border(side, device);
        }
    }
}
