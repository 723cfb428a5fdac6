//! Bulk carrier: a five-deep LIFO tube and no hand.

use am_core::{MailItem, RobotKind};

use crate::{Carrier, Tube, VariantProfile};

pub static BULK: VariantProfile = VariantProfile {
    kind:           RobotKind::Bulk,
    speed:          1,
    capacity:       5,
    max_deliveries: 5,
    fee_rate:       0.01,
};

const TUBE_SIZE: usize = 5;

/// Every load goes on top of the tube; deliveries come off the top.  Loading
/// `[3, 7, 2]` visits floors 2, 7, 3.
#[derive(Clone, Debug)]
pub struct BulkCarrier {
    tube: Tube,
}

impl BulkCarrier {
    pub fn new() -> Self {
        Self { tube: Tube::with_capacity(TUBE_SIZE) }
    }
}

impl Default for BulkCarrier {
    fn default() -> Self {
        Self::new()
    }
}

impl Carrier for BulkCarrier {
    fn profile(&self) -> &'static VariantProfile {
        &BULK
    }

    fn load(&mut self, item: MailItem) -> Result<(), MailItem> {
        self.tube.push(item)
    }

    fn next_item(&self) -> Option<&MailItem> {
        self.tube.peek()
    }

    fn take_next(&mut self) -> Option<MailItem> {
        self.tube.pop()
    }

    fn is_full(&self) -> bool {
        self.tube.is_full()
    }

    fn is_empty(&self) -> bool {
        self.tube.is_empty()
    }

    fn len(&self) -> usize {
        self.tube.len()
    }
}
