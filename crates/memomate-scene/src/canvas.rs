//! Character grid the city is painted onto before it becomes ratatui lines.

use memomate_core::Rgb;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

#[derive(Debug, Clone, PartialEq)]
struct Cell {
    symbol: char,
    fg: Rgb,
    bg: Rgb,
    bold: bool,
    /// Covered by the right half of a wide glyph to the left.
    covered: bool,
}

/// A fixed-size grid of styled characters.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    /// A canvas filled with blanks on `background`.
    pub fn new(width: u16, height: u16, background: Rgb) -> Self {
        let blank = Cell {
            symbol: ' ',
            fg: background,
            bg: background,
            bold: false,
            covered: false,
        };
        Self {
            width,
            height,
            cells: vec![blank; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Set the background of a cell without touching its glyph.
    pub fn tint(&mut self, x: i32, y: i32, bg: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.cells[i].bg = bg;
        }
    }

    /// Draw a single-width glyph. Out-of-bounds writes are dropped.
    pub fn put(&mut self, x: i32, y: i32, symbol: char, fg: Rgb) {
        self.put_styled(x, y, symbol, fg, false);
    }

    /// Draw a single-width glyph in bold.
    pub fn put_bold(&mut self, x: i32, y: i32, symbol: char, fg: Rgb) {
        self.put_styled(x, y, symbol, fg, true);
    }

    fn put_styled(&mut self, x: i32, y: i32, symbol: char, fg: Rgb, bold: bool) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        self.clear_wide_neighbour(x, y);
        let cell = &mut self.cells[i];
        cell.symbol = symbol;
        cell.fg = fg;
        cell.bold = bold;
        cell.covered = false;
    }

    /// Overwriting either half of a wide glyph blanks the other half.
    fn clear_wide_neighbour(&mut self, x: i32, y: i32) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        if self.cells[i].covered {
            if let Some(left) = self.index(x - 1, y) {
                self.cells[left].symbol = ' ';
            }
        } else if glyph_width(self.cells[i].symbol) > 1 {
            if let Some(right) = self.index(x + 1, y) {
                self.cells[right].covered = false;
                self.cells[right].symbol = ' ';
            }
        }
    }

    /// Draw a string starting at `x`, honouring double-width glyphs.
    /// Returns the number of columns used.
    pub fn put_str(&mut self, x: i32, y: i32, text: &str, fg: Rgb, bold: bool) -> i32 {
        let mut col = x;
        for ch in text.chars() {
            let width = glyph_width(ch) as i32;
            if width == 0 {
                continue;
            }
            // A wide glyph clipped by the right edge is dropped whole.
            if width == 2 && self.index(col + 1, y).is_none() {
                col += width;
                continue;
            }
            self.put_styled(col, y, ch, fg, bold);
            if width == 2 {
                self.clear_wide_neighbour(col + 1, y);
                if let Some(i) = self.index(col + 1, y) {
                    self.cells[i].covered = true;
                    self.cells[i].symbol = ' ';
                }
            }
            col += width;
        }
        col - x
    }

    /// Draw `text` centred on column `center`.
    pub fn put_str_centered(&mut self, center: i32, y: i32, text: &str, fg: Rgb, bold: bool) {
        let width = text_width(text) as i32;
        self.put_str(center - width / 2, y, text, fg, bold);
    }

    /// Glyph at a cell, if in bounds.
    pub fn symbol_at(&self, x: i32, y: i32) -> Option<char> {
        self.index(x, y).map(|i| self.cells[i].symbol)
    }

    /// Convert the grid into ratatui lines, merging runs of equal style.
    pub fn into_lines(self) -> Vec<Line<'static>> {
        let width = self.width.max(1) as usize;
        self.cells
            .chunks(width)
            .map(|row| {
                let mut spans: Vec<Span<'static>> = Vec::new();
                let mut run = String::new();
                let mut run_style: Option<Style> = None;
                for cell in row.iter().filter(|c| !c.covered) {
                    let style = cell_style(cell);
                    if run_style.is_some_and(|s| s != style) {
                        spans.push(Span::styled(
                            std::mem::take(&mut run),
                            run_style.unwrap_or_default(),
                        ));
                    }
                    run_style = Some(style);
                    run.push(cell.symbol);
                }
                if let Some(style) = run_style {
                    spans.push(Span::styled(run, style));
                }
                Line::from(spans)
            })
            .collect()
    }
}

fn cell_style(cell: &Cell) -> Style {
    let style = Style::new().fg(cell.fg.into()).bg(cell.bg.into());
    if cell.bold {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Display width of a single character in terminal columns.
pub fn glyph_width(ch: char) -> usize {
    let mut buf = [0u8; 4];
    Span::raw(&*ch.encode_utf8(&mut buf)).width()
}

/// Display width of a string in terminal columns.
pub fn text_width(text: &str) -> usize {
    Span::raw(text).width()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgb = Rgb::BLACK;
    const FG: Rgb = Rgb::WHITE;

    fn row_text(canvas: Canvas, y: usize) -> String {
        canvas.into_lines()[y]
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_out_of_bounds_is_dropped() {
        let mut canvas = Canvas::new(4, 2, BG);
        canvas.put(-1, 0, 'x', FG);
        canvas.put(4, 0, 'x', FG);
        canvas.put(0, 2, 'x', FG);
        canvas.put(1, 1, 'y', FG);
        assert_eq!(canvas.symbol_at(1, 1), Some('y'));
        assert_eq!(canvas.symbol_at(4, 0), None);
        assert_eq!(row_text(canvas, 0), "    ");
    }

    #[test]
    fn test_wide_glyphs_keep_row_width() {
        let mut canvas = Canvas::new(6, 1, BG);
        let used = canvas.put_str(1, 0, "🏢ab", FG, false);
        assert_eq!(used, 4);
        let text = row_text(canvas, 0);
        assert_eq!(text, " 🏢ab ");
        assert_eq!(text_width(&text), 6);
    }

    #[test]
    fn test_overwriting_wide_glyph_half() {
        let mut canvas = Canvas::new(4, 1, BG);
        canvas.put_str(0, 0, "🏢", FG, false);
        canvas.put(1, 0, 'z', FG);
        assert_eq!(row_text(canvas, 0), " z  ");
    }

    #[test]
    fn test_wide_glyph_clipped_at_edge() {
        let mut canvas = Canvas::new(3, 1, BG);
        canvas.put_str(2, 0, "🏢", FG, false);
        assert_eq!(row_text(canvas, 0), "   ");
    }

    #[test]
    fn test_runs_are_merged() {
        let mut canvas = Canvas::new(5, 1, BG);
        canvas.put_str(0, 0, "ab", FG, false);
        let lines = canvas.into_lines();
        assert_eq!(lines[0].spans.len(), 2);
        assert_eq!(lines[0].spans[0].content, "ab");
        assert_eq!(lines[0].spans[1].content, "   ");
    }

    #[test]
    fn test_centered_text() {
        let mut canvas = Canvas::new(7, 1, BG);
        canvas.put_str_centered(3, 0, "abc", FG, false);
        assert_eq!(row_text(canvas, 0), "  abc  ");
    }
}
