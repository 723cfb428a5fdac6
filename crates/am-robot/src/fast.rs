//! Hand-only carrier: a single item, carried three floors per tick.

use am_core::{MailItem, RobotKind};

use crate::{Carrier, VariantProfile};

pub static FAST: VariantProfile = VariantProfile {
    kind:           RobotKind::Fast,
    speed:          3,
    capacity:       1,
    max_deliveries: 1,
    fee_rate:       0.05,
};

#[derive(Clone, Debug, Default)]
pub struct FastCarrier {
    hand: Option<MailItem>,
}

impl FastCarrier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Carrier for FastCarrier {
    fn profile(&self) -> &'static VariantProfile {
        &FAST
    }

    fn load(&mut self, item: MailItem) -> Result<(), MailItem> {
        if self.hand.is_some() {
            return Err(item);
        }
        self.hand = Some(item);
        Ok(())
    }

    fn next_item(&self) -> Option<&MailItem> {
        self.hand.as_ref()
    }

    fn take_next(&mut self) -> Option<MailItem> {
        self.hand.take()
    }

    fn is_full(&self) -> bool {
        self.hand.is_some()
    }

    fn is_empty(&self) -> bool {
        self.hand.is_none()
    }

    fn len(&self) -> usize {
        usize::from(self.hand.is_some())
    }
}
