use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Column letters marked on the board, "I" left out to avoid confusion
/// with "1".
pub const BOARD_LETTERS: &str = "ABCDEFGHJKLMNOPQRST";

/// A board coordinate, 1-based: `x` is the column, `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl Point {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// The four cardinal neighbor candidates.
    /// Not bounds-filtered; callers check `Board::in_bounds` themselves.
    pub fn neighbors(self) -> [Point; 4] {
        [
            Point::new(self.x.saturating_sub(1), self.y),
            Point::new(self.x.saturating_add(1), self.y),
            Point::new(self.x, self.y.saturating_sub(1)),
            Point::new(self.x, self.y.saturating_add(1)),
        ]
    }
}

/// Letter for a 1-based column, `'?'` beyond the marked alphabet.
pub(crate) fn column_letter(x: u8) -> char {
    (x as usize)
        .checked_sub(1)
        .and_then(|i| BOARD_LETTERS.as_bytes().get(i))
        .map(|&b| b as char)
        .unwrap_or('?')
}

impl fmt::Display for Point {
    /// Board notation: column letter plus 1-based row, e.g. `D4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letter(self.x), self.y)
    }
}

impl FromStr for Point {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut chars = text.chars();
        let letter = chars
            .next()
            .ok_or_else(|| "empty point text".to_string())?
            .to_ascii_uppercase();
        let column = BOARD_LETTERS
            .find(letter)
            .ok_or_else(|| format!("unknown column letter in {text:?}"))?;
        let row: u8 = chars
            .as_str()
            .parse()
            .map_err(|_| format!("invalid row number in {text:?}"))?;
        if row == 0 {
            return Err(format!("row numbers are 1-based, got {text:?}"));
        }
        Ok(Point::new(column as u8 + 1, row))
    }
}

/// Player color, 1-based so that `0` stays reserved for the empty cell
/// value used in board storage and on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Color(u8);

impl Color {
    pub const BLACK: Color = Color(1);
    pub const WHITE: Color = Color(2);

    /// Returns `None` for the reserved empty value `0`.
    pub fn new(index: u8) -> Option<Self> {
        if index == 0 { None } else { Some(Self(index)) }
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Next color in turn order, wrapping after `num_colors`.
    pub fn next(self, num_colors: u8) -> Self {
        if self.0 >= num_colors {
            Color(1)
        } else {
            Color(self.0 + 1)
        }
    }
}

/// One entry in a game's move log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Move {
    Place { point: Point, color: Color },
    Pass { color: Color },
}

/// Why a move or pass request was turned down.
///
/// Every rejection is local and recoverable: the game state is left
/// exactly as it was before the request.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("point is outside the board")]
    OutOfBounds,
    #[error("point is already occupied")]
    Occupied,
    #[error("move would leave its own group without liberties")]
    SelfCapture,
    #[error("move recreates an earlier board position")]
    KoViolation,
    #[error("it is not this color's turn")]
    NotYourTurn,
    #[error("the game is already over")]
    GameEnded,
}

impl MoveError {
    /// Stable rejection tag for the wire layer.
    pub fn code(self) -> &'static str {
        match self {
            Self::OutOfBounds => "out_of_bounds",
            Self::Occupied => "occupied",
            Self::SelfCapture => "self_capture",
            Self::KoViolation => "ko_violation",
            Self::NotYourTurn => "not_your_turn",
            Self::GameEnded => "game_ended",
        }
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub rows: u8,
    pub cols: u8,
    /// Row-major cells, `0` = empty, `n` = color `n`.
    pub board: Vec<u8>,
    pub current_color: u8,
    pub num_colors: u8,
    pub consecutive_passes: u8,
    pub move_count: u32,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the previous action was a pass.
    /// - `false` when the previous action was a normal move.
    pub is_pass: bool,
    /// Contract:
    /// - Normal move: points captured by that move.
    /// - Pass: must be an empty list.
    pub captured: Vec<Point>,
    /// Area score per color, index `color - 1`.
    pub scores: Vec<u32>,
    /// Empty area bordered by two or more colors, credited to no one.
    pub neutral_area: u32,
}

/// Outcome of a move or pass request returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReply {
    pub accepted: bool,
    /// Contract:
    /// - Accepted: `None`.
    /// - Rejected: stable tag from [`MoveError::code`].
    pub reason: Option<&'static str>,
    pub captured: Vec<Point>,
    pub scores: Vec<u32>,
}

impl MoveReply {
    pub fn rejected(err: MoveError) -> Self {
        Self {
            accepted: false,
            reason: Some(err.code()),
            captured: Vec::new(),
            scores: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_are_the_four_cardinal_candidates() {
        let p = Point::new(3, 5);
        assert_eq!(
            p.neighbors(),
            [
                Point::new(2, 5),
                Point::new(4, 5),
                Point::new(3, 4),
                Point::new(3, 6)
            ]
        );
    }

    #[test]
    fn corner_neighbors_fall_outside_the_one_based_range() {
        let candidates = Point::new(1, 1).neighbors();
        assert!(candidates.contains(&Point::new(0, 1)));
        assert!(candidates.contains(&Point::new(1, 0)));
    }

    #[test]
    fn color_zero_is_not_a_color() {
        assert_eq!(Color::new(0), None);
        assert_eq!(Color::new(1), Some(Color::BLACK));
        assert_eq!(Color::new(2), Some(Color::WHITE));
    }

    #[test]
    fn turn_order_wraps_after_the_last_color() {
        assert_eq!(Color::BLACK.next(2), Color::WHITE);
        assert_eq!(Color::WHITE.next(2), Color::BLACK);

        let third = Color::new(3).unwrap();
        assert_eq!(Color::WHITE.next(4), third);
        assert_eq!(Color::new(4).unwrap().next(4), Color::BLACK);
    }

    #[test]
    fn point_notation_skips_the_letter_i() {
        assert_eq!(Point::new(8, 3).to_string(), "H3");
        assert_eq!(Point::new(9, 3).to_string(), "J3");
        assert_eq!("j3".parse::<Point>(), Ok(Point::new(9, 3)));
    }

    #[test]
    fn point_notation_round_trips() {
        for p in [Point::new(1, 1), Point::new(4, 4), Point::new(19, 19)] {
            assert_eq!(p.to_string().parse::<Point>(), Ok(p));
        }
    }

    #[test]
    fn point_parse_rejects_malformed_text() {
        assert!("".parse::<Point>().is_err());
        assert!("I3".parse::<Point>().is_err());
        assert!("D0".parse::<Point>().is_err());
        assert!("D".parse::<Point>().is_err());
        assert!("4D".parse::<Point>().is_err());
    }

    #[test]
    fn rejection_codes_are_stable() {
        assert_eq!(MoveError::Occupied.code(), "occupied");
        assert_eq!(MoveError::SelfCapture.code(), "self_capture");
        assert_eq!(MoveError::KoViolation.code(), "ko_violation");
    }
}
