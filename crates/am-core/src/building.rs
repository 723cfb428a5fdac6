//! Building topology.

/// Read-only view of the building the robots serve.
///
/// Queried on every `Returning` tick, so implementations should be cheap.
pub trait Building {
    /// Floor the robots return to between delivery runs.
    fn mailroom_floor(&self) -> i32;

    /// Lowest floor a mail item can be addressed to.
    fn lowest_floor(&self) -> i32;

    /// Highest floor a mail item can be addressed to.
    fn top_floor(&self) -> i32;
}

/// A building described by its floor range and mailroom location.
///
/// Floors are numbered `lowest_floor ..= lowest_floor + floors - 1`.  Built
/// from [`SimConfig`][crate::SimConfig] by the simulation builder; tests
/// construct it directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingLayout {
    pub lowest_floor:   i32,
    pub floors:         i32,
    pub mailroom_floor: i32,
}

impl BuildingLayout {
    pub fn new(lowest_floor: i32, floors: i32, mailroom_floor: i32) -> Self {
        Self { lowest_floor, floors, mailroom_floor }
    }

    /// `true` if `floor` exists in this building.
    #[inline]
    pub fn contains(&self, floor: i32) -> bool {
        (self.lowest_floor..=self.top_floor()).contains(&floor)
    }
}

impl Building for BuildingLayout {
    #[inline]
    fn mailroom_floor(&self) -> i32 {
        self.mailroom_floor
    }

    #[inline]
    fn lowest_floor(&self) -> i32 {
        self.lowest_floor
    }

    #[inline]
    fn top_floor(&self) -> i32 {
        self.lowest_floor + self.floors - 1
    }
}
