//! Cell geometry and paged output tests

use rustkit_common::{init_logging, LogConfig};
use rustkit_css::{ComputedStyle, Length};
use rustkit_layout::{
    CellId, ChildBox, DisplayCommand, DisplayList, PaintContext, Rect, RowId, TableBox,
};

fn style(css: &str) -> ComputedStyle {
    ComputedStyle::from_declarations(css).unwrap()
}

fn one_cell_table(table_css: &str, cell_css: &str) -> (TableBox, RowId, CellId) {
    init_logging(LogConfig::test());

    let mut table = TableBox::new(style(table_css));
    let body = table.add_section(ComputedStyle::new());
    let row = table.add_row(body, ComputedStyle::new());
    let cell = table.add_cell(row, style(cell_css));
    (table, row, cell)
}

/// Lay the cell out as a 60 x 100 border box at (0, 80).
fn place_cell(table: &mut TableBox, cell: CellId) {
    let cell = table.cell_mut(cell);
    cell.set_layout_width(60, 300);
    let frame = cell.border().height() + cell.block.padding().vertical();
    cell.block.set_content_height(100 - frame);
    cell.block.set_position(0, 80);
}

#[test]
fn test_outer_width_round_trip() {
    let (table, _, cell) = one_cell_table(
        "",
        "width: 120px; border: 4px solid black; border-left-width: 1px; padding: 2px 7px 2px 3px",
    );
    assert_eq!(table.cell(cell).outer_style_width(), Length::Px(135.0));

    let (table, _, cell) = one_cell_table("", "width: 30%; border: 4px solid black; padding: 9px");
    assert_eq!(table.cell(cell).outer_style_width(), Length::Percent(30.0));
}

#[test]
fn test_layout_width_then_css_height() {
    let (mut table, _, cell) = one_cell_table(
        "",
        "height: 50px; border: 2px solid black; padding: 4px",
    );
    let cell = table.cell_mut(cell);
    cell.set_layout_width(100, 400);
    assert_eq!(cell.block.content_width(), 88);
    assert_eq!(cell.css_height(), Some(38));
    assert!(!cell.is_auto_height());
}

#[test]
fn test_height_consumed_by_frame() {
    let (table, _, cell) = one_cell_table("", "height: 4px; border: 2px solid black; padding: 1px");
    assert_eq!(table.cell(cell).css_height(), None);

    let (table, _, cell) = one_cell_table("", "height: 6px; border: 2px solid black; padding: 1px");
    assert_eq!(table.cell(cell).css_height(), Some(0));
}

#[test]
fn test_move_content_keeps_baseline_in_step() {
    let (mut table, _, cell) = one_cell_table("", "padding: 2px");
    let cell = table.cell_mut(cell);
    cell.set_layout_width(60, 300);
    cell.block
        .children
        .push(ChildBox::new(0, 0, 40, 16).with_baseline(12));
    cell.block.set_position(0, 10);
    let before = cell.baseline();

    cell.move_content(20);
    assert_eq!(cell.baseline(), before + 20);
}

#[test]
fn test_row_within_one_page_is_not_cut() {
    let (mut table, row, cell) = one_cell_table("-fs-table-paginate: paginate", "");
    place_cell(&mut table, cell);
    let limits = &mut table.row_mut(row).content_limits;
    limits.update_top(0, 80).unwrap();
    limits.update_bottom(0, 180).unwrap();

    let cell = table.cell(cell);
    let natural = cell.block.painting_border_edge();
    assert_eq!(
        cell.content_limited_border_edge(&table, &PaintContext::print(0)),
        Some(natural)
    );
    assert!(!cell.needs_clip_on_paint(&table, &PaintContext::print(0)));
}

#[test]
fn test_row_across_page_break_is_continuous() {
    let (mut table, row, cell) = one_cell_table("-fs-table-paginate: paginate", "");
    place_cell(&mut table, cell);
    {
        let row = table.row_mut(row);
        row.extra_space_top = 5;
        row.extra_space_bottom = 3;
        row.content_limits.update_top(0, 80).unwrap();
        row.content_limits.update_bottom(0, 117).unwrap();
        row.content_limits.update_top(1, 125).unwrap();
        row.content_limits.update_bottom(1, 180).unwrap();
    }

    let cell = table.cell(cell);
    let first = cell
        .content_limited_border_edge(&table, &PaintContext::print(0))
        .unwrap();
    let second = cell
        .content_limited_border_edge(&table, &PaintContext::print(1))
        .unwrap();

    assert_eq!(first, Rect::new(0, 80, 60, 40));
    assert_eq!(second, Rect::new(0, 120, 60, 60));
    assert_eq!(first.bottom(), second.y);
    assert!(cell.needs_clip_on_paint(&table, &PaintContext::print(1)));
    assert_eq!(
        cell.content_limited_border_edge(&table, &PaintContext::print(2)),
        None
    );
}

#[test]
fn test_paged_separated_border_uses_page_slice() {
    let (mut table, row, cell) =
        one_cell_table("-fs-table-paginate: paginate", "border: 1px solid black");
    place_cell(&mut table, cell);
    {
        let limits = &mut table.row_mut(row).content_limits;
        limits.update_top(0, 81).unwrap();
        limits.update_bottom(0, 119).unwrap();
        limits.update_top(1, 120).unwrap();
        limits.update_bottom(1, 179).unwrap();
    }

    let mut list = DisplayList::new();
    table
        .cell(cell)
        .paint_border(&table, &PaintContext::print(1), &mut list);
    match list.commands.as_slice() {
        [DisplayCommand::Border { rect, .. }] => assert_eq!(*rect, Rect::new(0, 120, 60, 60)),
        other => panic!("unexpected commands {:?}", other),
    }

    // Screen output ignores pagination entirely.
    let mut list = DisplayList::new();
    table
        .cell(cell)
        .paint_border(&table, &PaintContext::screen(), &mut list);
    match list.commands.as_slice() {
        [DisplayCommand::Border { rect, .. }] => assert_eq!(*rect, Rect::new(0, 80, 60, 100)),
        other => panic!("unexpected commands {:?}", other),
    }
}
