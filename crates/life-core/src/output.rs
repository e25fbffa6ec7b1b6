//! Generation sinks.
//!
//! The run loop hands every generation to a [`GenerationSink`]. Two printers
//! are provided:
//!
//! - [`TextSink`] -- the classic terminal layout: a `Generation N` label, the
//!   interior rows, then a separator line.
//! - [`JsonSink`] -- one JSON object per generation, newline-delimited.

use std::io::{self, Write};

use life_grid::Grid;
use serde::{Deserialize, Serialize};

/// Line written after every generation block in text output.
pub const SEPARATOR: &str = "======================";

/// Receiver for the generations produced by a run.
pub trait GenerationSink {
    /// Called once per generation, starting at generation 0.
    fn on_generation(&mut self, generation: u64, grid: &Grid) -> io::Result<()>;

    /// Called once after the last generation.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl GenerationSink for NoOpSink {
    fn on_generation(&mut self, _generation: u64, _grid: &Grid) -> io::Result<()> {
        Ok(())
    }
}

/// Output layout selected by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Labelled character grid with separator lines.
    #[default]
    Text,
    /// Newline-delimited JSON records.
    Json,
}

impl OutputFormat {
    /// Build the sink for this format around `out`.
    pub fn sink<W: Write + 'static>(self, out: W) -> Box<dyn GenerationSink> {
        match self {
            Self::Text => Box::new(TextSink::new(out)),
            Self::Json => Box::new(JsonSink::new(out)),
        }
    }
}

/// Prints generations as labelled character grids.
#[derive(Debug)]
pub struct TextSink<W> {
    out: W,
}

impl<W: Write> TextSink<W> {
    /// Wrap a writer.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GenerationSink for TextSink<W> {
    fn on_generation(&mut self, generation: u64, grid: &Grid) -> io::Result<()> {
        writeln!(self.out, "Generation {generation}")?;
        for line in grid.render() {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out, "{SEPARATOR}")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// One JSON line per generation.
#[derive(Debug, Serialize)]
struct GenerationRecord {
    generation: u64,
    population: usize,
    rows: Vec<String>,
}

/// Prints generations as newline-delimited JSON.
#[derive(Debug)]
pub struct JsonSink<W> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    /// Wrap a writer.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GenerationSink for JsonSink<W> {
    fn on_generation(&mut self, generation: u64, grid: &Grid) -> io::Result<()> {
        let record = GenerationRecord {
            generation,
            population: grid.population(),
            rows: grid.render().collect(),
        };
        serde_json::to_writer(&mut self.out, &record)?;
        writeln!(self.out)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use life_grid::Cell;

    use super::*;

    fn small_grid() -> Grid {
        let mut grid = Grid::with_interior(2, 3).unwrap();
        grid.set(1, 2, Cell::Alive).unwrap();
        grid
    }

    #[test]
    fn text_block_layout() {
        let mut sink = TextSink::new(Vec::new());
        sink.on_generation(0, &small_grid()).unwrap();
        sink.finish().unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            text,
            "Generation 0\n- * - \n- - - \n======================\n"
        );
    }

    #[test]
    fn json_record_per_line() {
        let mut sink = JsonSink::new(Vec::new());
        let grid = small_grid();
        sink.on_generation(0, &grid).unwrap();
        sink.on_generation(1, &grid).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let record: serde_json::Value = serde_json::from_str(lines.get(1).unwrap()).unwrap();
        let field = |name: &str| record.get(name).and_then(serde_json::Value::as_u64);
        assert_eq!(field("generation"), Some(1));
        assert_eq!(field("population"), Some(1));
        let rows: Vec<&str> = record
            .get("rows")
            .and_then(serde_json::Value::as_array)
            .unwrap()
            .iter()
            .filter_map(serde_json::Value::as_str)
            .collect();
        assert_eq!(rows, vec!["- * - ", "- - - "]);
    }

    #[test]
    fn format_names() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
