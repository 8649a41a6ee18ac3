//! Committed-position history for ko enforcement.

use crate::board::Board;
use sha2::{Digest, Sha256};

/// Position digest: SHA-256 over the board dimensions and the canonical
/// row-major cell bytes. The 256-bit width makes fingerprint collisions a
/// non-issue, where a 32-bit rolling hash would admit false ko hits at
/// scale.
pub type Fingerprint = [u8; 32];

/// Digest of the full board position.
pub fn fingerprint(board: &Board) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update([board.rows(), board.cols()]);
    hasher.update(board.cells());
    hasher.finalize().into()
}

/// Ordered fingerprints of every committed position in one game.
///
/// Append-only while a game runs, cleared only on reset. Lookups scan the
/// whole history, giving positional superko rather than a
/// single-previous-position rule.
#[derive(Debug, Clone, Default)]
pub struct PositionHistory {
    seen: Vec<Fingerprint>,
}

impl PositionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, fp: Fingerprint) {
        self.seen.push(fp);
    }

    pub fn contains(&self, fp: &Fingerprint) -> bool {
        self.seen.contains(fp)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn clear(&mut self) {
        self.seen.clear();
    }
}
