//! Area scoring.

use crate::analysis;
use crate::board::Board;

/// Area-score tally. `totals[color - 1]` is that color's score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub totals: Vec<u32>,
    /// Empty area bordered by two or more colors (dame), credited to no
    /// one. Together with the totals it accounts for every board point.
    pub neutral: u32,
}

/// Computes simple area score: every stone counts one point for its color
/// and an empty region counts for the single color bordering it; regions
/// touching two or more colors stay neutral.
///
/// Runs a fresh region analysis each call, so scoring a committed board
/// twice yields identical results.
pub fn area_score(board: &Board, num_colors: u8) -> Score {
    let mut totals = vec![0u32; num_colors as usize];
    let mut neutral = 0u32;

    for region in analysis::analyze_regions(board) {
        let area = region.points.len() as u32;
        match region.color {
            Some(color) => {
                if let Some(total) = totals.get_mut(color.index() as usize - 1) {
                    *total += area;
                }
            }
            None => match region.bounds.iter().next() {
                Some(&color) if region.bounds.len() == 1 => {
                    if let Some(total) = totals.get_mut(color.index() as usize - 1) {
                        *total += area;
                    }
                }
                _ => neutral += area,
            },
        }
    }

    Score { totals, neutral }
}
