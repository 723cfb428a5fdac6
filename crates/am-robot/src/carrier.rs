//! The capability interface every carrying variant implements.

use am_core::{MailItem, RobotKind};

// ── VariantProfile ────────────────────────────────────────────────────────────

/// Fixed per-variant constants.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VariantProfile {
    pub kind:           RobotKind,
    /// Floors moved per tick.
    pub speed:          u32,
    /// Items the robot can hold at once, hand and tube together.
    pub capacity:       u32,
    /// Deliveries allowed in one dispatch.  Equal to `capacity`: going over
    /// means items were loaded outside the dispatch protocol.
    pub max_deliveries: u32,
    /// Maintenance charge per unit of average operating time.
    pub fee_rate:       f64,
}

// ── Carrier ───────────────────────────────────────────────────────────────────

/// Variant-specific carrying storage.
///
/// `Robot` validates weight before calling [`load`](Carrier::load), so
/// implementations only decide *where* an item goes and whether there is
/// room for it.
pub trait Carrier {
    fn profile(&self) -> &'static VariantProfile;

    /// Store `item`, or hand it back if there is no slot for it.
    fn load(&mut self, item: MailItem) -> Result<(), MailItem>;

    /// The item the robot should deliver next.  Its floor is the robot's
    /// destination.
    fn next_item(&self) -> Option<&MailItem>;

    /// Remove and return the item returned by [`next_item`](Carrier::next_item).
    fn take_next(&mut self) -> Option<MailItem>;

    fn is_full(&self) -> bool;

    fn is_empty(&self) -> bool;

    /// Items currently carried.
    fn len(&self) -> usize;
}

// ── Tube ──────────────────────────────────────────────────────────────────────

/// A bounded LIFO slot sequence.  The most recently loaded item comes out
/// first.
#[derive(Clone, Debug)]
pub struct Tube {
    items:    Vec<MailItem>,
    capacity: usize,
}

impl Tube {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Push onto the top of the tube.  A full tube rejects the item.
    pub fn push(&mut self, item: MailItem) -> Result<(), MailItem> {
        if self.is_full() {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    #[inline]
    pub fn pop(&mut self) -> Option<MailItem> {
        self.items.pop()
    }

    #[inline]
    pub fn peek(&self) -> Option<&MailItem> {
        self.items.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }
}
