use am_core::{MAX_ITEM_WEIGHT, MailItem, RobotId};
use thiserror::Error;

/// Errors raised by a robot.
///
/// The two load rejections hand the item back so the caller can place it
/// elsewhere.  [`ExcessiveDelivery`](RobotError::ExcessiveDelivery) is a
/// fault: it means the caller broke the loading protocol, and the run must
/// stop.
#[derive(Debug, Error)]
pub enum RobotError {
    #[error("mail item {} weighs {}, above the per-item limit of {}", .item.id, .item.weight, MAX_ITEM_WEIGHT)]
    ItemTooHeavy { item: MailItem },

    #[error("robot {robot} has no free slot for mail item {}", .item.id)]
    StorageFull { robot: RobotId, item: MailItem },

    #[error("robot {robot} made {delivered} deliveries in one dispatch, limit is {limit}")]
    ExcessiveDelivery { robot: RobotId, delivered: u32, limit: u32 },
}

impl RobotError {
    /// `true` for faults that must halt the simulation.
    pub fn is_fatal(&self) -> bool {
        matches!(self, RobotError::ExcessiveDelivery { .. })
    }

    /// Recover the rejected item from a load error.
    pub fn into_item(self) -> Option<MailItem> {
        match self {
            RobotError::ItemTooHeavy { item } | RobotError::StorageFull { item, .. } => Some(item),
            RobotError::ExcessiveDelivery { .. } => None,
        }
    }
}

pub type RobotResult<T> = Result<T, RobotError>;
