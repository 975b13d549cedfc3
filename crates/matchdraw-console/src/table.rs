//! Colored rendering of the final percentage table.

use std::io::{self, Stdout, Write};

use matchdraw_solver::{ProbabilityTable, TableEmitter};
use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;

/// Writes the percentage table with colored labels and cells.
///
/// Impossible pairings are dimmed; likely ones are highlighted.
#[derive(Debug)]
pub struct ConsoleTableEmitter<W: Write = Stdout> {
    writer: W,
}

impl ConsoleTableEmitter<Stdout> {
    pub fn stdout() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl<W: Write> ConsoleTableEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TableEmitter for ConsoleTableEmitter<W> {
    fn emit(&mut self, table: &ProbabilityTable) -> io::Result<()> {
        let width = table.column_width();
        let likely = likely_threshold(table.size());

        writeln!(
            self.writer,
            "\n{} {}\n",
            "Pairing probabilities over".bright_white().bold(),
            format!("{} trials", table.trials().to_formatted_string(&Locale::en))
                .bright_yellow()
                .bold()
        )?;

        for (index, row) in table.to_grid().iter().enumerate() {
            let mut line = String::new();
            for (column, cell) in row.iter().enumerate() {
                let padded = format!("{cell:<width$}");
                let styled = if index == 0 {
                    padded.bright_cyan().bold().to_string()
                } else if column == 0 {
                    padded.white().bold().to_string()
                } else {
                    let percentage = table.percentage(index - 1, column - 1);
                    if percentage == 0.0 {
                        padded.bright_black().to_string()
                    } else if percentage >= likely {
                        padded.bright_green().to_string()
                    } else {
                        padded.white().to_string()
                    }
                };
                line.push_str(&styled);
            }
            writeln!(self.writer, "{line}")?;
        }
        self.writer.flush()
    }
}

// Twice the share every partner would get in an unconstrained draw.
pub(crate) fn likely_threshold(size: usize) -> f64 {
    if size == 0 {
        100.0
    } else {
        200.0 / size as f64
    }
}
