use crate::analysis;
use crate::board::Board;
use crate::history::{self, PositionHistory};
use crate::rules;
use crate::score::{self, Score};
use crate::types::{Color, GameState, Move, MoveError, Point};

/// Largest supported board edge.
pub const MAX_DIM: u8 = 25;
/// Supported player-color counts.
pub const MIN_COLORS: u8 = 2;
pub const MAX_COLORS: u8 = 9;

/// Outcome of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub captured: Vec<Point>,
    /// Area score per color after the move, index `color - 1`.
    pub scores: Vec<u32>,
}

/// One running game: the committed board plus turn, pass, score, and
/// position-history bookkeeping.
///
/// All operations are synchronous and the instance does no internal
/// locking; callers embedding it in an event loop serialize access per
/// instance. Distinct instances are fully independent.
pub struct GameInstance {
    board: Board,
    current_color: Color,
    num_colors: u8,
    consecutive_passes: u8,
    move_count: u32,
    is_game_over: bool,
    is_pass: bool,
    captured: Vec<Point>,
    score: Score,
    history: PositionHistory,
    moves: Vec<Move>,
}

impl GameInstance {
    /// Creates a fresh game. Color 1 moves first.
    pub fn new(rows: u8, cols: u8, num_colors: u8) -> Result<Self, String> {
        validate_config(rows, cols, num_colors)?;

        let board = Board::new(rows, cols);
        let score = score::area_score(&board, num_colors);
        let mut history = PositionHistory::new();
        history.record(history::fingerprint(&board));

        Ok(Self {
            board,
            current_color: Color::BLACK,
            num_colors,
            consecutive_passes: 0,
            move_count: 0,
            is_game_over: false,
            is_pass: false,
            captured: Vec::new(),
            score,
            history,
            moves: Vec::new(),
        })
    }

    /// Reinitializes every piece of state, clearing the position history.
    pub fn reset(&mut self, rows: u8, cols: u8, num_colors: u8) -> Result<(), String> {
        *self = Self::new(rows, cols, num_colors)?;
        Ok(())
    }

    /// Plays a stone for `color` at `point`.
    ///
    /// The trial move runs on a copy of the board; on any rejection the
    /// committed state is left byte-for-byte unchanged.
    pub fn play(&mut self, point: Point, color: Color) -> Result<MoveOutcome, MoveError> {
        if self.is_game_over {
            return Err(MoveError::GameEnded);
        }
        if color != self.current_color {
            return Err(MoveError::NotYourTurn);
        }
        if !self.board.in_bounds(point) {
            return Err(MoveError::OutOfBounds);
        }
        if !self.board.is_empty_point(point) {
            return Err(MoveError::Occupied);
        }

        let mut candidate = self.board.clone();
        candidate.place(point, color);
        let analysis = analysis::analyze(&candidate);
        let placement = rules::resolve(candidate, &analysis, point, color)?;

        let fp = history::fingerprint(&placement.board);
        if self.history.contains(&fp) {
            tracing::debug!("ko violation detected at {:?}", point);
            return Err(MoveError::KoViolation);
        }

        self.board = placement.board;
        self.history.record(fp);
        self.moves.push(Move::Place { point, color });
        self.consecutive_passes = 0;
        self.move_count += 1;
        self.is_pass = false;
        self.captured = placement.captured;
        self.current_color = color.next(self.num_colors);
        self.score = score::area_score(&self.board, self.num_colors);

        Ok(MoveOutcome {
            captured: self.captured.clone(),
            scores: self.score.totals.clone(),
        })
    }

    /// Passes the turn for `color`.
    /// The game ends once every color has passed in turn.
    pub fn pass(&mut self, color: Color) -> Result<(), MoveError> {
        if self.is_game_over {
            return Err(MoveError::GameEnded);
        }
        if color != self.current_color {
            return Err(MoveError::NotYourTurn);
        }

        self.moves.push(Move::Pass { color });
        self.consecutive_passes += 1;
        self.move_count += 1;
        self.is_pass = true;
        self.captured.clear();
        self.current_color = color.next(self.num_colors);

        if self.consecutive_passes >= self.num_colors {
            self.is_game_over = true;
        }
        Ok(())
    }

    /// Read-only view of the committed board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn num_colors(&self) -> u8 {
        self.num_colors
    }

    pub fn is_ended(&self) -> bool {
        self.is_game_over
    }

    /// Area score of the committed board, maintained on every commit.
    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Ordered log of every committed move and pass.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            rows: self.board.rows(),
            cols: self.board.cols(),
            board: self.board.cells().to_vec(),
            current_color: self.current_color.index(),
            num_colors: self.num_colors,
            consecutive_passes: self.consecutive_passes,
            move_count: self.move_count,
            is_game_over: self.is_game_over,
            is_pass: self.is_pass,
            captured: self.captured.clone(),
            scores: self.score.totals.clone(),
            neutral_area: self.score.neutral,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_board_for_test(&mut self, board: Board, to_move: Color) {
        self.history.clear();
        self.history.record(history::fingerprint(&board));
        self.score = score::area_score(&board, self.num_colors);
        self.board = board;
        self.current_color = to_move;
        self.consecutive_passes = 0;
        self.is_game_over = false;
        self.is_pass = false;
        self.captured.clear();
        self.moves.clear();
    }
}

fn validate_config(rows: u8, cols: u8, num_colors: u8) -> Result<(), String> {
    if rows == 0 || cols == 0 || rows > MAX_DIM || cols > MAX_DIM {
        return Err(format!(
            "board dimensions must be 1..={MAX_DIM}, got {rows}x{cols}"
        ));
    }
    if !(MIN_COLORS..=MAX_COLORS).contains(&num_colors) {
        return Err(format!(
            "color count must be {MIN_COLORS}..={MAX_COLORS}, got {num_colors}"
        ));
    }
    Ok(())
}
