//! State tables driving the recursion.
//!
//! A cell's orientation is the only state carried between levels. Two lookups
//! advance it: the rank along the curve of each geometric quadrant, and the
//! orientation handed to the child cell at each rank.

use crate::{
    bounds::Quadrant,
    orientation::Orientation::{
        self,
        DownLeft as DL, DownRight as DR, LeftBottom as LB, LeftTop as LT, RightBottom as RB,
        RightTop as RT, UpLeft as UL, UpRight as UR,
    },
};

/// `(orientation, quadrant) -> rank`. Columns follow [`Quadrant`] numbering.
pub const QUADRANT_RANK: [[u8; 4]; 8] = [
    [0, 1, 2, 3], // UpLeft
    [3, 2, 1, 0], // UpRight
    [1, 0, 3, 2], // DownLeft
    [2, 3, 0, 1], // DownRight
    [0, 3, 2, 1], // LeftTop
    [3, 0, 1, 2], // LeftBottom
    [1, 2, 3, 0], // RightTop
    [2, 1, 0, 3], // RightBottom
];

/// `(orientation, rank) -> child orientation`.
///
/// The two middle children keep the parent's orientation; the first and last
/// are turned so they join their neighbours end to end.
pub const CHILD_ORIENTATION: [[Orientation; 4]; 8] = [
    [LT, UL, UL, RB], // UpLeft
    [RT, UR, UR, LB], // UpRight
    [LB, DL, DL, RT], // DownLeft
    [RB, DR, DR, LT], // DownRight
    [UL, LT, LT, DR], // LeftTop
    [DL, LB, LB, UR], // LeftBottom
    [UR, RT, RT, DL], // RightTop
    [DR, RB, RB, UL], // RightBottom
];

/// `(orientation, rank) -> quadrant`, the row-wise inverse of
/// [`QUADRANT_RANK`].
pub const RANK_QUADRANT: [[u8; 4]; 8] = invert(&QUADRANT_RANK);

/// Invert each row of a rank table.
const fn invert(table: &[[u8; 4]; 8]) -> [[u8; 4]; 8] {
    let mut out = [[0u8; 4]; 8];
    let mut row = 0;
    while row < 8 {
        let mut quadrant = 0;
        while quadrant < 4 {
            out[row][table[row][quadrant] as usize] = quadrant as u8;
            quadrant += 1;
        }
        row += 1;
    }
    out
}

/// Rank of `quadrant` along a cell with the given orientation.
#[inline]
pub fn quadrant_rank(orientation: Orientation, quadrant: Quadrant) -> u8 {
    QUADRANT_RANK[orientation.index()][quadrant.index()]
}

/// The quadrant visited at position `rank` (`0..4`).
#[inline]
pub fn rank_quadrant(orientation: Orientation, rank: u8) -> Quadrant {
    Quadrant::from_index(RANK_QUADRANT[orientation.index()][usize::from(rank & 3)] as usize)
}

/// Orientation of the child visited at position `rank` (`0..4`).
#[inline]
pub fn child_orientation(orientation: Orientation, rank: u8) -> Orientation {
    CHILD_ORIENTATION[orientation.index()][usize::from(rank & 3)]
}
