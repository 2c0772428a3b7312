//! Shared workloads for the ucs-search benchmark suites.

use std::convert::Infallible;

use ucs_search::SearchProblem;

/// An implicit four-connected grid. Entering a cell costs between 1 and 9,
/// derived from its coordinates so every run sees the same terrain.
///
/// Nothing is materialised: `expand` computes neighbours on demand, which is
/// the workload the engine is built for.
#[derive(Debug, Clone, Copy)]
pub struct TerrainGrid {
    pub width: u32,
    pub height: u32,
}

impl TerrainGrid {
    #[must_use]
    pub fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// The far corner, used as the goal by the macro benchmarks.
    #[must_use]
    pub fn far_corner(&self) -> (u32, u32) {
        (self.width.saturating_sub(1), self.height.saturating_sub(1))
    }

    /// Cost of stepping onto `(x, y)`.
    #[must_use]
    pub fn entry_cost(x: u32, y: u32) -> u64 {
        // Cheap integer mix; only needs to be deterministic and uneven.
        let h = u64::from(x)
            .wrapping_mul(0x9E37_79B9)
            .wrapping_add(u64::from(y).wrapping_mul(0x85EB_CA6B));
        1 + (h >> 7) % 9
    }

    fn neighbours(&self, (x, y): (u32, u32)) -> Vec<((u32, u32), u64)> {
        let mut out = Vec::with_capacity(4);
        if x + 1 < self.width {
            out.push(((x + 1, y), Self::entry_cost(x + 1, y)));
        }
        if y + 1 < self.height {
            out.push(((x, y + 1), Self::entry_cost(x, y + 1)));
        }
        if x > 0 {
            out.push(((x - 1, y), Self::entry_cost(x - 1, y)));
        }
        if y > 0 {
            out.push(((x, y - 1), Self::entry_cost(x, y - 1)));
        }
        out
    }
}

/// A [`TerrainGrid`] with a single goal cell.
#[derive(Debug, Clone, Copy)]
pub struct GridProblem {
    pub grid: TerrainGrid,
    pub goal: (u32, u32),
}

impl GridProblem {
    /// Search from the origin to the far corner.
    #[must_use]
    pub fn corner_to_corner(side: u32) -> Self {
        let grid = TerrainGrid::square(side);
        Self {
            grid,
            goal: grid.far_corner(),
        }
    }

    /// A goal outside the grid, forcing full exhaustion.
    #[must_use]
    pub fn unreachable(side: u32) -> Self {
        Self {
            grid: TerrainGrid::square(side),
            goal: (u32::MAX, u32::MAX),
        }
    }
}

impl SearchProblem for GridProblem {
    type State = (u32, u32);
    type Id = (u32, u32);
    type Cost = u64;
    type Error = Infallible;
    type Successors = Vec<((u32, u32), u64)>;

    fn is_goal(&self, state: &(u32, u32)) -> Result<bool, Infallible> {
        Ok(*state == self.goal)
    }

    fn expand(&self, state: &(u32, u32)) -> Result<Self::Successors, Infallible> {
        Ok(self.grid.neighbours(*state))
    }

    fn unique_id(&self, state: &(u32, u32)) -> Result<(u32, u32), Infallible> {
        Ok(*state)
    }
}
