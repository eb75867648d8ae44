//! Minimal text table with a double-line unicode border.
//!
//! ```text
//! ╔═══════╤══════╗
//! ║ TIME  │ TEMP ║
//! ╟───────┼──────╢
//! ║ 09:05 │  8.4 ║
//! ╚═══════╧══════╝
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub align: Align,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), align: Align::Left }
    }

    pub fn center(text: impl Into<String>) -> Self {
        Self { text: text.into(), align: Align::Center }
    }

    pub fn right(text: impl Into<String>) -> Self {
        Self { text: text.into(), align: Align::Right }
    }

    /// Display width, counted in chars.
    fn width(&self) -> usize {
        self.text.chars().count()
    }

    fn write_padded(&self, f: &mut fmt::Formatter<'_>, width: usize) -> fmt::Result {
        let gap = width.saturating_sub(self.width());
        let (before, after) = match self.align {
            Align::Left => (0, gap),
            Align::Right => (gap, 0),
            Align::Center => (gap / 2, gap - gap / 2),
        };
        write!(f, " {:before$}{}{:after$} ", "", self.text, "")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    header: Vec<Cell>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(header: Vec<Cell>) -> Self {
        Self { header, rows: Vec::new() }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn header(&self) -> &[Cell] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of body rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).chain([self.header.len()]).max().unwrap_or(0)
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.column_count()];
        for row in std::iter::once(&self.header).chain(&self.rows) {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }
        widths
    }
}

fn write_rule(
    f: &mut fmt::Formatter<'_>,
    widths: &[usize],
    [left, fill, joint, right]: [&str; 4],
) -> fmt::Result {
    f.write_str(left)?;
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            f.write_str(joint)?;
        }
        f.write_str(&fill.repeat(width + 2))?;
    }
    f.write_str(right)
}

fn write_row(f: &mut fmt::Formatter<'_>, widths: &[usize], row: &[Cell]) -> fmt::Result {
    let blank = Cell::new("");
    f.write_str("║")?;
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            f.write_str("│")?;
        }
        row.get(i).unwrap_or(&blank).write_padded(f, *width)?;
    }
    writeln!(f, "║")
}

impl fmt::Display for Table {
    /// Renders the whole table; the last line has no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();

        write_rule(f, &widths, ["╔", "═", "╤", "╗"])?;
        writeln!(f)?;
        write_row(f, &widths, &self.header)?;
        if !self.rows.is_empty() {
            write_rule(f, &widths, ["╟", "─", "┼", "╢"])?;
            writeln!(f)?;
        }
        for row in &self.rows {
            write_row(f, &widths, row)?;
        }
        write_rule(f, &widths, ["╚", "═", "╧", "╝"])
    }
}
