//! Tests for the percentage table.

use super::*;
use matchdraw_core::Assignment;
use matchdraw_test::{champions_league_2022, forced_pair};

fn forced_table(precision: u32) -> ProbabilityTable {
    let problem = forced_pair();
    let mut frequencies = FrequencyTable::new(2);
    for _ in 0..4 {
        let mut draw = Assignment::new(2);
        draw.pair(0, 1).unwrap();
        draw.pair(1, 0).unwrap();
        frequencies.record(&draw);
    }
    ProbabilityTable::from_frequencies(&problem, &frequencies, precision)
}

#[test]
fn test_grid_shape_and_labels() {
    let grid = forced_table(2).to_grid();

    assert_eq!(grid.len(), 3);
    assert!(grid.iter().all(|row| row.len() == 3));
    assert_eq!(grid[0], vec!["", "b0", "b1"]);
    assert_eq!(grid[1][0], "a0");
    assert_eq!(grid[2][0], "a1");
}

#[test]
fn test_grid_cells_use_fixed_precision() {
    let grid = forced_table(2).to_grid();
    assert_eq!(grid[1][1], "0.00%");
    assert_eq!(grid[1][2], "100.00%");
    assert_eq!(grid[2][1], "100.00%");

    let grid = forced_table(0).to_grid();
    assert_eq!(grid[1][2], "100%");
}

#[test]
fn test_display_aligns_columns() {
    let table = forced_table(1);
    let text = table.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with(&" ".repeat(MIN_COLUMN_WIDTH)));
    assert_eq!(lines[1].find("0.0%"), Some(MIN_COLUMN_WIDTH));
    assert_eq!(lines[1].find("100.0%"), Some(2 * MIN_COLUMN_WIDTH));
}

#[test]
fn test_long_labels_widen_columns() {
    let problem = matchdraw_core::DrawProblem::new(
        vec![matchdraw_core::Item::untagged("a very long item name indeed")],
        vec![matchdraw_core::Item::untagged("b")],
    )
    .unwrap();
    let table = ProbabilityTable::from_frequencies(&problem, &FrequencyTable::new(1), 2);
    assert_eq!(table.column_width(), "a very long item name indeed".len() + 1);
}

#[test]
fn test_preset_labels() {
    let problem = champions_league_2022();
    let table = ProbabilityTable::from_frequencies(&problem, &FrequencyTable::new(8), 2);

    assert_eq!(table.size(), 8);
    assert_eq!(table.row_labels()[0], "Liverpool");
    assert_eq!(table.column_labels()[7], "Benfica");
    assert_eq!(table.trials(), 0);
    assert_eq!(table.percentage(9, 9), 0.0);
}

#[test]
fn test_writer_emitter() {
    let table = forced_table(2);
    let mut emitter = WriterEmitter::new(Vec::new());
    emitter.emit(&table).unwrap();

    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(text, table.to_string());
    assert!(text.contains("a1"));
}
