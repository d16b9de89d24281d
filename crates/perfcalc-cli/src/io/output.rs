// crates/perfcalc-cli/src/io/output.rs

//! Text/JSON emission. Commands build a [`Document`] of plain lines and
//! aligned grids; rendering right-trims every line so nothing downstream has
//! to care about padding.

use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;

/// How command results are emitted.
#[derive(Clone, Debug, Default)]
pub struct OutputConfig {
    pub json: bool,
    /// Mirror everything printed to this file as well.
    pub output: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

#[derive(Clone, Debug)]
pub struct Grid {
    columns: Vec<(String, Align)>,
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = (S, Align)>) -> Self {
        Self {
            columns: columns.into_iter().map(|(h, a)| (h.into(), a)).collect(),
            rows: Vec::new(),
        }
    }

    /// Missing trailing cells render empty; extra cells are dropped.
    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, (header, _))| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn render_into(&self, out: &mut Vec<String>) {
        let widths = self.widths();

        let header: Vec<&str> = self.columns.iter().map(|(h, _)| h.as_str()).collect();
        out.push(self.render_row(&header, &widths, true));

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push(rule.join("-+-"));

        for row in &self.rows {
            let cells: Vec<&str> = (0..self.columns.len())
                .map(|i| row.get(i).map(String::as_str).unwrap_or(""))
                .collect();
            out.push(self.render_row(&cells, &widths, false));
        }
    }

    fn render_row(&self, cells: &[&str], widths: &[usize], header: bool) -> String {
        cells
            .iter()
            .zip(widths)
            .zip(&self.columns)
            .map(|((cell, &w), (_, align))| {
                let align = if header { Align::Center } else { *align };
                pad(cell, w, align)
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    match align {
        Align::Left => format!("{cell}{}", " ".repeat(fill)),
        Align::Right => format!("{}{cell}", " ".repeat(fill)),
        Align::Center => {
            let left = fill / 2;
            format!("{}{cell}{}", " ".repeat(left), " ".repeat(fill - left))
        }
    }
}

#[derive(Clone, Debug)]
enum Block {
    Line(String),
    Grid(Grid),
}

#[derive(Clone, Debug, Default)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn line(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::Line(text.into()));
    }

    pub fn blank(&mut self) {
        self.line("");
    }

    /// `name` padded to 15 columns, then `: value`.
    pub fn attribute(&mut self, name: &str, value: impl std::fmt::Display) {
        self.line(format!("{name:<15}: {value}"));
    }

    pub fn grid(&mut self, grid: Grid) {
        self.blocks.push(Block::Grid(grid));
    }
}

pub fn render_text(doc: &Document) -> String {
    let mut lines = Vec::new();
    for block in &doc.blocks {
        match block {
            Block::Line(text) => lines.extend(text.split('\n').map(str::to_owned)),
            Block::Grid(grid) => grid.render_into(&mut lines),
        }
    }

    let mut out = String::new();
    for line in lines {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn emit_text(config: &OutputConfig, doc: &Document) -> anyhow::Result<()> {
    emit(config, &render_text(doc))
}

pub fn emit_json<T: Serialize>(config: &OutputConfig, value: &T) -> anyhow::Result<()> {
    let mut text = serde_json::to_string_pretty(value).context("serialize json output")?;
    text.push('\n');
    emit(config, &text)
}

fn emit(config: &OutputConfig, text: &str) -> anyhow::Result<()> {
    print!("{text}");

    if let Some(path) = &config.output {
        std::fs::write(path, text)
            .with_context(|| format!("write output file: {}", path.display()))?;
    }
    Ok(())
}

/// `+n` for a play that moved up, `-n` for one that moved down, `-` otherwise.
pub fn format_position_delta(delta: i64) -> String {
    match delta {
        0 => "-".to_owned(),
        d if d > 0 => format!("+{d}"),
        d => d.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_delta_signs() {
        assert_eq!(format_position_delta(3), "+3");
        assert_eq!(format_position_delta(-2), "-2");
        assert_eq!(format_position_delta(0), "-");
    }

    #[test]
    fn rendered_lines_have_no_trailing_whitespace() {
        let mut doc = Document::default();
        doc.line("title   ");
        doc.attribute("Accuracy", "98.00%");
        let mut grid = Grid::new([("name", Align::Left), ("pp", Align::Right), ("d", Align::Center)]);
        grid.row(vec!["long beatmap name".into(), "1.0".into(), "+1".into()]);
        grid.row(vec!["a".into(), "123.4".into()]);
        doc.grid(grid);

        let text = render_text(&doc);
        for line in text.lines() {
            assert_eq!(line, line.trim_end(), "{line:?}");
        }
        assert!(text.starts_with("title\nAccuracy       : 98.00%\n"));
    }

    #[test]
    fn grid_aligns_cells() {
        let mut grid = Grid::new([("name", Align::Left), ("pp", Align::Right), ("delta", Align::Center)]);
        grid.row(vec!["ab".into(), "1.5".into(), "+1".into()]);

        let mut doc = Document::default();
        doc.grid(grid);
        let text = render_text(&doc);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "name | pp  | delta");
        assert_eq!(lines[1], "-----+-----+------");
        assert_eq!(lines[2], "ab   | 1.5 |  +1");
    }
}
