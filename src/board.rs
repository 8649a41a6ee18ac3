use crate::types::{Color, Point, column_letter};
use std::fmt;

/// Rectangular Go board with dense row-major storage.
///
/// Cells hold raw color values, `0` = empty — the same encoding the wire
/// layer and the position fingerprint use, so `cells()` doubles as the
/// canonical byte form of a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u8,
    cols: u8,
    cells: Vec<u8>,
}

impl Board {
    /// Creates an empty `rows` x `cols` board.
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows as usize * cols as usize],
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Total number of points on the board.
    pub fn area(&self) -> u32 {
        self.rows as u32 * self.cols as u32
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        (1..=self.cols).contains(&p.x) && (1..=self.rows).contains(&p.y)
    }

    /// Row-major cell index of an in-bounds point.
    pub(crate) fn index(&self, p: Point) -> usize {
        (p.y as usize - 1) * self.cols as usize + (p.x as usize - 1)
    }

    /// Stone at `p`, `None` when the point is empty or out of bounds.
    pub fn get(&self, p: Point) -> Option<Color> {
        if !self.in_bounds(p) {
            return None;
        }
        Color::new(self.cells[self.index(p)])
    }

    pub fn is_empty_point(&self, p: Point) -> bool {
        self.in_bounds(p) && self.cells[self.index(p)] == 0
    }

    /// Places a stone at an empty in-bounds point.
    /// Returns `false` when the point is occupied or out of bounds.
    pub fn place(&mut self, p: Point, color: Color) -> bool {
        if !self.is_empty_point(p) {
            return false;
        }
        let idx = self.index(p);
        self.cells[idx] = color.index();
        true
    }

    /// Removes the stone at `p`.
    /// Returns `false` when the point is empty or out of bounds.
    pub fn remove(&mut self, p: Point) -> bool {
        if !self.in_bounds(p) {
            return false;
        }
        let idx = self.index(p);
        if self.cells[idx] == 0 {
            return false;
        }
        self.cells[idx] = 0;
        true
    }

    /// Canonical row-major cell bytes, `0` = empty, `n` = color `n`.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of stones of `color` on the board.
    pub fn count(&self, color: Color) -> u32 {
        self.cells
            .iter()
            .filter(|&&cell| cell == color.index())
            .count() as u32
    }

    pub fn empty_count(&self) -> u32 {
        self.cells.iter().filter(|&&cell| cell == 0).count() as u32
    }

    /// Iterates all points in row-major scan order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let cols = self.cols;
        (1..=self.rows).flat_map(move |y| (1..=cols).map(move |x| Point::new(x, y)))
    }

    /// Builds a board from diagram rows, top row first.
    /// `.` = empty, `#` = color 1, `o` = color 2, digits for the rest.
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as u8;
        let width = rows.first().map_or(0, |row| row.len()) as u8;
        let mut board = Board::new(height, width);

        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len() as u8, width, "ragged diagram row {i}");
            let y = height - i as u8;
            for (j, ch) in row.chars().enumerate() {
                let value = match ch {
                    '.' => 0,
                    '#' => 1,
                    'o' => 2,
                    '1'..='9' => ch as u8 - b'0',
                    other => panic!("unknown diagram character {other:?}"),
                };
                if let Some(color) = Color::new(value) {
                    board.place(Point::new(j as u8 + 1, y), color);
                }
            }
        }
        board
    }
}

fn color_char(value: u8) -> char {
    match value {
        0 => '.',
        1 => '#',
        2 => 'o',
        3..=9 => (b'0' + value) as char,
        _ => '?',
    }
}

impl fmt::Display for Board {
    /// Diagram with the letters header, rows printed top down.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 1..=self.cols {
            write!(f, " {}", column_letter(x))?;
        }
        writeln!(f)?;

        for y in (1..=self.rows).rev() {
            write!(f, " {y:2}")?;
            for x in 1..=self.cols {
                let value = self.cells[self.index(Point::new(x, y))];
                write!(f, " {}", color_char(value))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
