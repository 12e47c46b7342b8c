//! Collapsed border tests over whole tables

use std::collections::HashSet;

use rustkit_common::{init_logging, LogConfig};
use rustkit_css::{BorderStyle, Color, ComputedStyle};
use rustkit_layout::{
    BorderSide, BorderValue, CellId, DisplayCommand, DisplayList, TableBox,
};

fn style(css: &str) -> ComputedStyle {
    ComputedStyle::from_declarations(css).unwrap()
}

/// Build a collapsing table from rows of cell declarations and run the collapse pass.
fn collapsed_table(rows: &[&[&str]]) -> (TableBox, Vec<Vec<CellId>>) {
    init_logging(LogConfig::test());

    let mut table = TableBox::new(style("border-collapse: collapse"));
    let body = table.add_section(style("display: table-row-group"));
    let mut ids = Vec::new();
    for cells in rows {
        let row = table.add_row(body, ComputedStyle::new());
        ids.push(cells.iter().map(|css| table.add_cell(row, style(css))).collect());
    }
    table.calc_collapsed_borders();
    (table, ids)
}

fn resolved(table: &TableBox, cell: CellId, side: BorderSide) -> BorderValue {
    table.cell(cell).collapsed_borders().unwrap().layout.side(side)
}

#[test]
fn test_middle_cell_against_borderless_neighbours() {
    let (table, ids) = collapsed_table(&[&[
        "border-style: none",
        "border: 2px solid black",
        "border-style: none",
    ]]);
    let middle = ids[0][1];
    let expected = BorderValue::new(BorderStyle::Solid, 2, Color::BLACK);

    assert_eq!(resolved(&table, middle, BorderSide::Left), expected);
    assert_eq!(resolved(&table, middle, BorderSide::Right), expected);
    assert_eq!(
        resolved(&table, ids[0][0], BorderSide::Right).style,
        BorderStyle::None
    );
    assert_eq!(
        resolved(&table, ids[0][2], BorderSide::Left).style,
        BorderStyle::None
    );
}

#[test]
fn test_wider_neighbour_wins_shared_edge() {
    let (table, ids) = collapsed_table(&[&["border: 3px double black", "border: 5px solid black"]]);
    let (double, solid) = (ids[0][0], ids[0][1]);

    assert_eq!(resolved(&table, double, BorderSide::Right), BorderValue::EMPTY);
    assert_eq!(
        resolved(&table, solid, BorderSide::Left),
        BorderValue::new(BorderStyle::Solid, 5, Color::BLACK)
    );

    // Same pair, mirrored: the winner is on the left now.
    let (table, ids) = collapsed_table(&[&["border: 5px solid black", "border: 3px double black"]]);
    assert_eq!(
        resolved(&table, ids[0][0], BorderSide::Right),
        BorderValue::new(BorderStyle::Solid, 5, Color::BLACK)
    );
    assert_eq!(resolved(&table, ids[0][1], BorderSide::Left), BorderValue::EMPTY);
}

#[test]
fn test_hidden_suppresses_both_sides_of_edge() {
    let (table, ids) = collapsed_table(&[
        &["border: 1px solid black", "border: 4px double black"],
        &["border: hidden", "border: 1px solid black"],
    ]);

    let hidden = ids[1][0];
    assert_eq!(resolved(&table, hidden, BorderSide::Top).style, BorderStyle::Hidden);
    assert_eq!(resolved(&table, hidden, BorderSide::Right).style, BorderStyle::Hidden);
    assert_eq!(resolved(&table, ids[0][0], BorderSide::Bottom), BorderValue::EMPTY);
    assert_eq!(resolved(&table, ids[1][1], BorderSide::Left), BorderValue::EMPTY);
}

#[test]
fn test_identical_borders_go_to_right_and_bottom_sides() {
    let css = "border: 1px solid black";
    let (table, ids) = collapsed_table(&[&[css, css], &[css, css]]);
    let shared = BorderValue::new(BorderStyle::Solid, 1, Color::BLACK);

    assert_eq!(resolved(&table, ids[0][0], BorderSide::Right), shared);
    assert_eq!(resolved(&table, ids[0][1], BorderSide::Left), BorderValue::EMPTY);
    assert_eq!(resolved(&table, ids[0][0], BorderSide::Bottom), shared);
    assert_eq!(resolved(&table, ids[1][0], BorderSide::Top), BorderValue::EMPTY);
}

#[test]
fn test_every_shared_edge_resolves_to_one_side() {
    let (table, ids) = collapsed_table(&[
        &["border: 1px dotted red", "border: 2px ridge blue", "border: 2px inset black"],
        &["border: 3px groove black", "border-style: none", "border: 1px outset green"],
        &["border: 1px solid black", "border: 1px dashed black", "border: 3px double black"],
    ]);

    for (r, row) in ids.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            let pairs = [
                (ids[r].get(c + 1), BorderSide::Right),
                (ids.get(r + 1).map(|next| &next[c]), BorderSide::Bottom),
            ];
            for (neighbour, side) in pairs {
                let Some(&neighbour) = neighbour else {
                    continue;
                };
                let mine = resolved(&table, cell, side);
                let theirs = resolved(&table, neighbour, side.opposite());
                let drawn = [mine, theirs]
                    .iter()
                    .filter(|v| v.style.is_drawn())
                    .count();
                assert_eq!(drawn, 1, "cell ({}, {}) side {:?}", r, c, side);
            }
        }
    }
}

#[test]
fn test_spanned_neighbour_contributes_no_border() {
    let (table, ids) = collapsed_table(&[
        &["border: 1px solid black; colspan: 2"],
        &["border: 1px solid black", "border: 1px solid black"],
    ]);
    // The second cell of row 1 sits under the wide cell's spanned slot and
    // keeps its own top border.
    assert_eq!(
        resolved(&table, ids[1][1], BorderSide::Top),
        BorderValue::new(BorderStyle::Solid, 1, Color::BLACK)
    );
    // Directly under the wide cell's origin: a tie, won by the wide cell's bottom.
    assert_eq!(
        resolved(&table, ids[0][0], BorderSide::Bottom),
        BorderValue::new(BorderStyle::Solid, 1, Color::BLACK)
    );
    assert_eq!(resolved(&table, ids[1][0], BorderSide::Top), BorderValue::EMPTY);

    // Both the wide cell's bottom and the covered cell's top are queued, so the
    // segment under the spanned slot is painted twice.
    let sides = table.collect_collapsed_borders();
    let queued = |cell: CellId, side: BorderSide| {
        sides.iter().any(|s| s.cell == cell && s.side == side)
    };
    assert!(queued(ids[0][0], BorderSide::Bottom));
    assert!(queued(ids[1][1], BorderSide::Top));
}

#[test]
fn test_each_side_keeps_its_own_color() {
    let (table, ids) = collapsed_table(&[&[
        "border: 1px solid red; border-bottom-color: blue; border-left-color: green",
    ]]);
    let cell = ids[0][0];
    assert_eq!(resolved(&table, cell, BorderSide::Top).color, Color::from_rgb(255, 0, 0));
    assert_eq!(resolved(&table, cell, BorderSide::Bottom).color, Color::from_rgb(0, 0, 255));
    assert_eq!(resolved(&table, cell, BorderSide::Left).color, Color::from_rgb(0, 128, 0));
}

#[test]
fn test_sweep_never_repeats_a_segment() {
    let css = "border: 1px solid black";
    let (table, ids) = collapsed_table(&[&[css, css, css], &[css, css, css]]);

    let sides = table.collect_collapsed_borders();
    let keys: HashSet<_> = sides
        .iter()
        .map(|s| {
            let cell = table.cell(s.cell);
            (cell.edge_key(s.side), cell.collapsed_border(s.side))
        })
        .collect();
    assert_eq!(keys.len(), sides.len());

    // 3 columns x 2 rows: 9 horizontal and 8 vertical unit segments.
    assert_eq!(sides.len(), 17);
    assert!(sides.iter().all(|s| ids.iter().flatten().any(|&id| id == s.cell)));
}

#[test]
fn test_paint_collapsed_borders_emits_winning_sides() {
    let (table, _) = collapsed_table(&[&["border: 3px double black", "border: 5px solid black"]]);
    let mut list = DisplayList::new();
    table.paint_collapsed_borders(&mut list);

    let widths: Vec<i32> = list
        .commands
        .iter()
        .map(|c| match c {
            DisplayCommand::CollapsedBorder { value, .. } => value.width,
            other => panic!("unexpected command {:?}", other),
        })
        .collect();
    // double: top, bottom, left; solid: top, right, bottom, left.
    assert_eq!(widths, vec![3, 3, 3, 5, 5, 5, 5]);
}
