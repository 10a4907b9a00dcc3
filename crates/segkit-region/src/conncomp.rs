//! Pixel connectivity

use crate::error::RegionError;

/// Connectivity type for neighbourhood expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

/// (row, col) offsets of the 4-way neighbourhood, in scan order
const FOUR_WAY_OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// (row, col) offsets of the 8-way neighbourhood, in scan order
const EIGHT_WAY_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl ConnectivityType {
    /// Neighbour offsets as `(d_row, d_col)` pairs.
    ///
    /// Rows are visited top to bottom and columns left to right, which
    /// fixes the order in which a breadth-first fill discovers pixels.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Self::FourWay => &FOUR_WAY_OFFSETS,
            Self::EightWay => &EIGHT_WAY_OFFSETS,
        }
    }

    /// Number of neighbours (4 or 8)
    pub fn neighbors(self) -> u32 {
        match self {
            Self::FourWay => 4,
            Self::EightWay => 8,
        }
    }
}

impl TryFrom<u32> for ConnectivityType {
    type Error = RegionError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::FourWay),
            8 => Ok(Self::EightWay),
            other => Err(RegionError::InvalidConnectivity(other)),
        }
    }
}
