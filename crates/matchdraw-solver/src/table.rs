//! Percentage table produced at the end of a run.

use std::fmt;
use std::io::{self, Write};

use matchdraw_core::{DrawProblem, FrequencyTable, Side};

/// Minimum column width of the plain-text rendering.
const MIN_COLUMN_WIDTH: usize = 15;

/// Pairing probabilities in percent, labelled by item name.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable {
    row_labels: Vec<String>,
    column_labels: Vec<String>,
    percentages: Vec<Vec<f64>>,
    precision: u32,
    trials: u64,
}

impl ProbabilityTable {
    /// Converts raw counters into rounded percentages.
    pub fn from_frequencies(
        problem: &DrawProblem,
        frequencies: &FrequencyTable,
        precision: u32,
    ) -> Self {
        let names = |side: Side| -> Vec<String> {
            problem
                .items(side)
                .iter()
                .map(|item| item.name().to_string())
                .collect()
        };
        Self {
            row_labels: names(Side::A),
            column_labels: names(Side::B),
            percentages: frequencies.percentages(precision),
            precision,
            trials: frequencies.trials(),
        }
    }

    pub fn size(&self) -> usize {
        self.row_labels.len()
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    /// Returns the rounded percentage of trials pairing row `a` with column `b`.
    pub fn percentage(&self, a: usize, b: usize) -> f64 {
        self.percentages
            .get(a)
            .and_then(|row| row.get(b))
            .copied()
            .unwrap_or(0.0)
    }

    /// Formats one cell, e.g. `12.50%`.
    pub fn format_cell(&self, a: usize, b: usize) -> String {
        format!("{:.*}%", self.precision as usize, self.percentage(a, b))
    }

    /// Returns the (n+1)×(n+1) display grid.
    ///
    /// Row 0 holds the column labels, column 0 the row labels, and cell
    /// `[a + 1][b + 1]` the formatted percentage for `a <-> b`.
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        let mut grid = Vec::with_capacity(self.size() + 1);
        let mut header = Vec::with_capacity(self.column_labels.len() + 1);
        header.push(String::new());
        header.extend(self.column_labels.iter().cloned());
        grid.push(header);

        for (a, label) in self.row_labels.iter().enumerate() {
            let mut row = Vec::with_capacity(self.column_labels.len() + 1);
            row.push(label.clone());
            row.extend((0..self.column_labels.len()).map(|b| self.format_cell(a, b)));
            grid.push(row);
        }
        grid
    }

    /// Returns the column width that fits every grid cell.
    pub fn column_width(&self) -> usize {
        self.to_grid()
            .iter()
            .flatten()
            .map(|cell| cell.chars().count() + 1)
            .max()
            .unwrap_or(0)
            .max(MIN_COLUMN_WIDTH)
    }
}

impl fmt::Display for ProbabilityTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.column_width();
        for row in self.to_grid() {
            let line: String = row.iter().map(|cell| format!("{cell:<width$}")).collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// Destination for the final table.
pub trait TableEmitter {
    fn emit(&mut self, table: &ProbabilityTable) -> io::Result<()>;
}

/// Writes the plain-text table to any writer.
///
/// # Example
///
/// ```
/// use matchdraw_core::{DrawProblem, FrequencyTable, Item};
/// use matchdraw_solver::{ProbabilityTable, TableEmitter, WriterEmitter};
///
/// let problem = DrawProblem::new(vec![Item::untagged("a")], vec![Item::untagged("b")]).unwrap();
/// let table = ProbabilityTable::from_frequencies(&problem, &FrequencyTable::new(1), 1);
///
/// let mut emitter = WriterEmitter::new(Vec::new());
/// emitter.emit(&table).unwrap();
/// let text = String::from_utf8(emitter.into_inner()).unwrap();
/// assert!(text.contains("0.0%"));
/// ```
#[derive(Debug)]
pub struct WriterEmitter<W: Write> {
    writer: W,
}

impl<W: Write> WriterEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TableEmitter for WriterEmitter<W> {
    fn emit(&mut self, table: &ProbabilityTable) -> io::Result<()> {
        write!(self.writer, "{table}")?;
        self.writer.flush()
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
