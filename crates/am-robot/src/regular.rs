//! Single-slot carrier: one item in hand, one waiting in a one-deep tube.

use am_core::{MailItem, RobotKind};

use crate::{Carrier, Tube, VariantProfile};

pub static REGULAR: VariantProfile = VariantProfile {
    kind:           RobotKind::Regular,
    speed:          1,
    capacity:       2,
    max_deliveries: 2,
    fee_rate:       0.025,
};

const TUBE_SIZE: usize = 1;

/// Hand first, tube only once the hand is taken.
///
/// After each delivery the tube item moves into the hand, so the hand is
/// never empty while the tube holds something.
#[derive(Clone, Debug)]
pub struct RegularCarrier {
    hand: Option<MailItem>,
    tube: Tube,
}

impl RegularCarrier {
    pub fn new() -> Self {
        Self {
            hand: None,
            tube: Tube::with_capacity(TUBE_SIZE),
        }
    }
}

impl Default for RegularCarrier {
    fn default() -> Self {
        Self::new()
    }
}

impl Carrier for RegularCarrier {
    fn profile(&self) -> &'static VariantProfile {
        &REGULAR
    }

    fn load(&mut self, item: MailItem) -> Result<(), MailItem> {
        if self.hand.is_none() {
            self.hand = Some(item);
            Ok(())
        } else {
            self.tube.push(item)
        }
    }

    fn next_item(&self) -> Option<&MailItem> {
        self.hand.as_ref().or_else(|| self.tube.peek())
    }

    fn take_next(&mut self) -> Option<MailItem> {
        let delivered = self.hand.take().or_else(|| self.tube.pop());
        self.hand = self.tube.pop();
        delivered
    }

    fn is_full(&self) -> bool {
        self.hand.is_some() && self.tube.is_full()
    }

    fn is_empty(&self) -> bool {
        self.hand.is_none() && self.tube.is_empty()
    }

    fn len(&self) -> usize {
        usize::from(self.hand.is_some()) + self.tube.len()
    }
}
