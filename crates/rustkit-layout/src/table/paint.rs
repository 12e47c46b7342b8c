//! Cell backgrounds and borders.

use tracing::trace;

use super::cell::CellBox;
use super::pagination::PaintContext;
use super::TableBox;
use crate::border::{BorderSet, BorderSide, BorderSides};
use crate::paint::OutputDevice;
use crate::Rect;

impl CellBox {
    /// Paint the column, row group, row and cell backgrounds behind the cell.
    pub fn paint_background(&self, table: &TableBox, ctx: &PaintContext, device: &mut dyn OutputDevice) {
        if !self.is_paint_backgrounds_and_borders() || !self.style().is_visible() {
            return;
        }

        let bounds = if ctx.print && table.style().is_paginate_table() {
            self.content_limited_border_edge(table, ctx)
        } else {
            Some(self.block.painting_border_edge())
        };

        if let Some(bounds) = bounds {
            self.paint_background_stack(table, bounds, device);
        }
    }

    /// Layers go bottom to top, each tiled against its own box: column, row
    /// group, row, cell.
    fn paint_background_stack(&self, table: &TableBox, bounds: Rect, device: &mut dyn OutputDevice) {
        let border = BorderSet::from_style(self.style());
        let (h_spacing, v_spacing) = table.border_spacing();

        if let Some(column) = table.column_at(self.col()) {
            device.paint_background(&column.style, bounds, table.column_bounds(self.col()), &border);
        }

        let row = table.row(self.row_box());
        let section = table.section(self.section());

        let mut origin = section.border_edge;
        origin.y += v_spacing;
        origin.height -= v_spacing;
        origin.x += h_spacing;
        origin.width -= 2 * h_spacing;
        device.paint_background(&section.style, bounds, origin, &border);

        let mut origin = row.border_edge;
        origin.x += h_spacing;
        origin.width -= 2 * h_spacing;
        device.paint_background(&row.style, bounds, origin, &border);

        device.paint_background(self.style(), bounds, self.block.painting_border_edge(), &border);
    }

    /// Paint a separated border. Collapsed borders are painted table-wide.
    pub fn paint_border(&self, table: &TableBox, ctx: &PaintContext, device: &mut dyn OutputDevice) {
        if !self.is_paint_backgrounds_and_borders() || self.has_collapsed_painting_border() {
            return;
        }

        if ctx.print && table.style().is_paginate_table() && self.style().is_visible() {
            if let Some(bounds) = self.content_limited_border_edge(table, ctx) {
                device.paint_border(self.style(), bounds, &self.border(), BorderSides::ALL);
            }
        } else {
            self.block.paint_border(&self.border(), device);
        }
    }

    pub fn paint_collapsed_border(&self, side: BorderSide, device: &mut dyn OutputDevice) {
        let bounds = self.collapsed_border_bounds();
        trace!(cell = self.id().0, ?side, "Painting collapsed border");
        device.paint_collapsed_border(&self.collapsed_painting_border(), bounds, side);
    }
}
