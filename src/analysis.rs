//! Connected-group and region analysis.
//!
//! Every pass recomputes from scratch on the board it is given; group ids
//! are deterministic for the fixed row-major scan order but carry no
//! meaning across passes.

use crate::board::Board;
use crate::types::{Color, Point};
use std::collections::{BTreeSet, HashSet};

/// Identifier of one connected component within a single analysis pass,
/// 1-based.
pub type GroupId = u16;

/// A maximal 4-connected set of same-colored stones.
#[derive(Debug, Clone)]
pub struct Group {
    pub color: Color,
    pub stones: Vec<Point>,
    /// Empty points adjacent to the group, de-duplicated. An empty set
    /// means the group has no liberties left.
    pub liberties: HashSet<Point>,
}

/// Result of one liberty-mode analysis pass.
#[derive(Debug, Clone)]
pub struct Analysis {
    cols: u8,
    ids: Vec<GroupId>,
    groups: Vec<Group>,
}

impl Analysis {
    /// Group id at `p`, `None` for empty or out-of-range points.
    pub fn group_id_at(&self, p: Point) -> Option<GroupId> {
        if p.x == 0 || p.y == 0 || p.x > self.cols {
            return None;
        }
        let idx = (p.y as usize - 1) * self.cols as usize + (p.x as usize - 1);
        match self.ids.get(idx) {
            Some(&id) if id != 0 => Some(id),
            _ => None,
        }
    }

    /// The group behind a 1-based id issued by this pass.
    pub fn group(&self, id: GroupId) -> &Group {
        &self.groups[id as usize - 1]
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Ids of groups whose liberty set is empty.
    pub fn dead_group_ids(&self) -> Vec<GroupId> {
        self.groups
            .iter()
            .enumerate()
            .filter(|(_, group)| group.liberties.is_empty())
            .map(|(i, _)| (i + 1) as GroupId)
            .collect()
    }
}

/// Partitions all stones into 4-connected same-color groups and collects
/// each group's liberties.
///
/// The flood fill runs on an explicit work stack, so call depth stays flat
/// no matter how large a group grows.
pub fn analyze(board: &Board) -> Analysis {
    let mut ids = vec![0 as GroupId; board.area() as usize];
    let mut groups: Vec<Group> = Vec::new();

    for start in board.points() {
        let Some(color) = board.get(start) else {
            continue;
        };
        if ids[board.index(start)] != 0 {
            continue;
        }

        let id = (groups.len() + 1) as GroupId;
        let mut stones = Vec::new();
        let mut liberties = HashSet::new();
        let mut todo = vec![start];

        while let Some(p) = todo.pop() {
            let idx = board.index(p);
            if ids[idx] != 0 {
                continue;
            }
            ids[idx] = id;
            stones.push(p);

            for n in p.neighbors() {
                if !board.in_bounds(n) {
                    continue;
                }
                match board.get(n) {
                    None => {
                        liberties.insert(n);
                    }
                    Some(c) if c == color && ids[board.index(n)] == 0 => {
                        todo.push(n);
                    }
                    Some(_) => {}
                }
            }
        }

        groups.push(Group {
            color,
            stones,
            liberties,
        });
    }

    Analysis {
        cols: board.cols(),
        ids,
        groups,
    }
}

/// One same-color component over all points, empty points included.
#[derive(Debug, Clone)]
pub struct Region {
    /// `None` for an empty region.
    pub color: Option<Color>,
    pub points: Vec<Point>,
    /// Stone colors directly adjacent to the region, excluding its own.
    pub bounds: BTreeSet<Color>,
}

/// Splits the whole board into same-color regions, splitting components at
/// every color boundary and recording which stone colors border each one.
pub fn analyze_regions(board: &Board) -> Vec<Region> {
    let mut seen = vec![false; board.area() as usize];
    let mut regions = Vec::new();

    for start in board.points() {
        if seen[board.index(start)] {
            continue;
        }
        seen[board.index(start)] = true;

        let color = board.get(start);
        let mut points = Vec::new();
        let mut bounds = BTreeSet::new();
        let mut todo = vec![start];

        while let Some(p) = todo.pop() {
            points.push(p);

            for n in p.neighbors() {
                if !board.in_bounds(n) {
                    continue;
                }
                let neighbor_color = board.get(n);
                if neighbor_color == color {
                    let idx = board.index(n);
                    if !seen[idx] {
                        seen[idx] = true;
                        todo.push(n);
                    }
                } else if let Some(c) = neighbor_color {
                    bounds.insert(c);
                }
            }
        }

        regions.push(Region {
            color,
            points,
            bounds,
        });
    }
    regions
}
