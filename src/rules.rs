//! Capture resolution for a just-placed stone.

use crate::analysis::{Analysis, GroupId};
use crate::board::Board;
use crate::types::{Color, MoveError, Point};

/// Board state after legal capture resolution.
#[derive(Debug, Clone)]
pub struct Placement {
    pub board: Board,
    pub captured_groups: Vec<GroupId>,
    pub captured: Vec<Point>,
}

/// Resolves captures on a board that already holds the stone just played.
///
/// `analysis` must come from that post-placement board: liberties are
/// judged after the stone lands and before any removal. Removal never
/// touches the mover's color — a move stranding only its own group is
/// rejected, while one that also strands an enemy group stays legal
/// because the enemy stones leave first and reopen liberties.
pub fn resolve(
    board: Board,
    analysis: &Analysis,
    just_played: Point,
    color: Color,
) -> Result<Placement, MoveError> {
    let dead = analysis.dead_group_ids();
    let own_group = analysis.group_id_at(just_played);

    if dead.len() == 1 && own_group == Some(dead[0]) {
        return Err(MoveError::SelfCapture);
    }

    let mut board = board;
    let mut captured_groups = Vec::new();
    let mut captured = Vec::new();

    for id in dead {
        let group = analysis.group(id);
        if group.color == color {
            continue;
        }
        for &p in &group.stones {
            // Stale-id guard: never clear a stone of the mover's color.
            if board.get(p) == Some(color) {
                continue;
            }
            board.remove(p);
            captured.push(p);
        }
        captured_groups.push(id);
    }

    if !captured.is_empty() {
        tracing::debug!("{} stones captured by {:?}", captured.len(), just_played);
    }

    Ok(Placement {
        board,
        captured_groups,
        captured,
    })
}
