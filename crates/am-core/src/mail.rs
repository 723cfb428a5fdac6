//! Mail items: the cargo robots carry.

use std::fmt;

use crate::{MailId, Tick};

/// Heaviest item any robot may carry, in grams.
pub const MAX_ITEM_WEIGHT: u32 = 2000;

/// One piece of mail waiting in, or travelling from, the mailroom.
///
/// Mail items are immutable once generated; robots and the pool move them
/// around by value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MailItem {
    pub id:                MailId,
    pub destination_floor: i32,
    /// Tick at which the item reached the mailroom.
    pub arrival_tick:      Tick,
    pub weight:            u32,
}

impl MailItem {
    pub fn new(id: MailId, destination_floor: i32, arrival_tick: Tick, weight: u32) -> Self {
        Self { id, destination_floor, arrival_tick, weight }
    }

    /// `true` if no robot is allowed to carry this item.
    #[inline]
    pub fn is_overweight(&self) -> bool {
        self.weight > MAX_ITEM_WEIGHT
    }
}

impl fmt::Display for MailItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mail Item:: ID: {:>6} | Arrival: {:>4} | Destination: {:>2} | Weight: {:>4}",
            self.id, self.arrival_tick.0, self.destination_floor, self.weight,
        )
    }
}
