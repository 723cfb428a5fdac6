//! Collaborators a robot talks to during its tick.

use am_core::{Building, MailItem, RobotId, Tick};

use crate::FleetLedger;

/// The mail-sorting side of the protocol.
///
/// A robot registers itself when it reaches the mailroom; the source later
/// calls [`Robot::load_item`][crate::Robot::load_item] and
/// [`Robot::dispatch`][crate::Robot::dispatch] on it.
pub trait MailSource {
    fn register_waiting(&mut self, robot: RobotId);
}

/// Receives every delivered item, exactly once, in delivery order.
pub trait DeliverySink {
    /// `fee_summary` is empty when fee charging is off.
    fn deliver(&mut self, tick: Tick, robot: RobotId, item: MailItem, fee_summary: &str);
}

/// Everything a robot may touch during one call to
/// [`Robot::operate`][crate::Robot::operate], besides itself.
///
/// Built by the driver for each robot in turn.  All borrows end when
/// `operate` returns.
pub struct TickContext<'a> {
    pub tick:     Tick,
    pub building: &'a dyn Building,
    pub mail:     &'a mut dyn MailSource,
    pub sink:     &'a mut dyn DeliverySink,
    pub ledger:   &'a mut FleetLedger,
}

impl<'a> TickContext<'a> {
    #[inline]
    pub fn new(
        tick:     Tick,
        building: &'a dyn Building,
        mail:     &'a mut dyn MailSource,
        sink:     &'a mut dyn DeliverySink,
        ledger:   &'a mut FleetLedger,
    ) -> Self {
        Self { tick, building, mail, sink, ledger }
    }
}
