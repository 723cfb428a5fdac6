//! `Robot`: shared identity, movement, and the dispatch state machine.

use am_core::{MailItem, RobotId, RobotKind, Tick};
use tracing::{debug, error};

use crate::{
    BulkCarrier, Carrier, FastCarrier, RegularCarrier, RobotError, RobotResult, RobotState,
    TickContext, VariantProfile, move_towards,
};

/// One mail-carrying robot.
///
/// The state machine is the same for every variant; capacity, speed, fee
/// rate and the per-dispatch delivery limit come from the boxed [`Carrier`].
///
/// # Protocol
///
/// The mail source calls [`load_item`](Self::load_item) one or more times on
/// a `Waiting` robot, then [`dispatch`](Self::dispatch).  The driver calls
/// [`operate`](Self::operate) exactly once per tick.
pub struct Robot {
    id:                RobotId,
    state:             RobotState,
    current_floor:     i32,
    destination_floor: i32,
    received_dispatch: bool,
    delivery_counter:  u32,
    fee_charging:      bool,
    carrier:           Box<dyn Carrier>,
}

impl Robot {
    /// A robot of `carrier`'s variant, `Returning` at the mailroom floor.
    pub fn new(number: u32, carrier: Box<dyn Carrier>, mailroom_floor: i32, fee_charging: bool) -> Self {
        Self {
            id:                RobotId::new(carrier.profile().kind, number),
            state:             RobotState::Returning,
            current_floor:     mailroom_floor,
            destination_floor: mailroom_floor,
            received_dispatch: false,
            delivery_counter:  0,
            fee_charging,
            carrier,
        }
    }

    /// A robot of the given variant with fresh, empty storage.
    pub fn of_kind(kind: RobotKind, number: u32, mailroom_floor: i32, fee_charging: bool) -> Self {
        let carrier: Box<dyn Carrier> = match kind {
            RobotKind::Regular => Box::new(RegularCarrier::new()),
            RobotKind::Fast    => Box::new(FastCarrier::new()),
            RobotKind::Bulk    => Box::new(BulkCarrier::new()),
        };
        Self::new(number, carrier, mailroom_floor, fee_charging)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> RobotId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> RobotKind {
        self.id.kind
    }

    #[inline]
    pub fn profile(&self) -> &'static VariantProfile {
        self.carrier.profile()
    }

    #[inline]
    pub fn state(&self) -> RobotState {
        self.state
    }

    #[inline]
    pub fn current_floor(&self) -> i32 {
        self.current_floor
    }

    /// Only meaningful while `Delivering`.
    #[inline]
    pub fn destination_floor(&self) -> i32 {
        self.destination_floor
    }

    #[inline]
    pub fn received_dispatch(&self) -> bool {
        self.received_dispatch
    }

    /// Deliveries made since the current dispatch began.
    #[inline]
    pub fn delivery_counter(&self) -> u32 {
        self.delivery_counter
    }

    #[inline]
    pub fn fee_charging(&self) -> bool {
        self.fee_charging
    }

    /// Items currently carried.
    #[inline]
    pub fn load(&self) -> usize {
        self.carrier.len()
    }

    /// Id with current load, e.g. `R0(1)`.
    pub fn id_with_load(&self) -> String {
        format!("{}({})", self.id, self.carrier.len())
    }

    // ── Mail-source protocol ──────────────────────────────────────────────

    /// Signal that loading is complete.  Idempotent.
    pub fn dispatch(&mut self) {
        self.received_dispatch = true;
    }

    /// Place `item` in this robot's storage.
    ///
    /// Weight is checked before anything is stored, so a rejected item leaves
    /// the robot exactly as it was.  Either way the rejected item is returned
    /// inside the error.
    pub fn load_item(&mut self, item: MailItem) -> RobotResult<()> {
        if item.is_overweight() {
            return Err(RobotError::ItemTooHeavy { item });
        }
        let robot = self.id;
        self.carrier
            .load(item)
            .map_err(|item| RobotError::StorageFull { robot, item })
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.carrier.is_full()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.carrier.is_empty()
    }

    /// Point the robot at the floor of the next item to deliver.  Leaves the
    /// destination unchanged when nothing is carried.
    pub fn set_destination(&mut self) {
        if let Some(item) = self.carrier.next_item() {
            self.destination_floor = item.destination_floor;
        }
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance this robot by one tick.
    ///
    /// # Errors
    ///
    /// [`RobotError::ExcessiveDelivery`] when this dispatch has delivered
    /// more items than the variant can carry.  The robot's state is left as
    /// it was at the moment of the fault; the caller should stop the run.
    pub fn operate(&mut self, ctx: &mut TickContext<'_>) -> RobotResult<()> {
        if self.state != RobotState::Waiting {
            ctx.ledger.record_operating_tick(self.kind());
        }
        let next = match self.state {
            RobotState::Returning  => self.returning(ctx),
            RobotState::Waiting    => self.waiting(),
            RobotState::Delivering => self.delivering(ctx)?,
        };
        self.change_state(next, ctx.tick);
        Ok(())
    }

    fn returning(&mut self, ctx: &mut TickContext<'_>) -> RobotState {
        let mailroom = ctx.building.mailroom_floor();
        if self.current_floor != mailroom {
            self.current_floor = move_towards(self.current_floor, mailroom, self.profile().speed);
            return RobotState::Returning;
        }
        ctx.mail.register_waiting(self.id);
        self.change_state(RobotState::Waiting, ctx.tick);
        // A robot loaded and dispatched before it arrived leaves this same tick.
        self.waiting()
    }

    fn waiting(&mut self) -> RobotState {
        if self.is_empty() || !self.received_dispatch {
            return RobotState::Waiting;
        }
        self.received_dispatch = false;
        self.delivery_counter = 0;
        self.set_destination();
        RobotState::Delivering
    }

    fn delivering(&mut self, ctx: &mut TickContext<'_>) -> RobotResult<RobotState> {
        let profile = self.profile();
        if self.current_floor != self.destination_floor {
            self.current_floor = move_towards(self.current_floor, self.destination_floor, profile.speed);
            return Ok(RobotState::Delivering);
        }

        let Some(item) = self.carrier.take_next() else {
            return Ok(RobotState::Returning);
        };
        let summary = if self.fee_charging {
            ctx.ledger.fee_summary(profile.kind, item.destination_floor, profile.fee_rate)
        } else {
            String::new()
        };
        ctx.sink.deliver(ctx.tick, self.id, item, &summary);

        self.delivery_counter += 1;
        if self.delivery_counter > profile.max_deliveries {
            error!(
                tick = ctx.tick.0,
                robot = %self.id,
                delivered = self.delivery_counter,
                limit = profile.max_deliveries,
                "excessive deliveries in one dispatch",
            );
            return Err(RobotError::ExcessiveDelivery {
                robot:     self.id,
                delivered: self.delivery_counter,
                limit:     profile.max_deliveries,
            });
        }

        if self.is_empty() {
            Ok(RobotState::Returning)
        } else {
            self.set_destination();
            self.log_route(ctx.tick);
            Ok(RobotState::Delivering)
        }
    }

    fn change_state(&mut self, next: RobotState, tick: Tick) {
        if self.state == next {
            return;
        }
        debug!(
            tick = tick.0,
            robot = %self.id_with_load(),
            from = %self.state,
            to = %next,
            "state change",
        );
        self.state = next;
        if next == RobotState::Delivering {
            self.log_route(tick);
        }
    }

    fn log_route(&self, tick: Tick) {
        if let Some(item) = self.carrier.next_item() {
            debug!(tick = tick.0, robot = %self.id_with_load(), "-> [{item}]");
        }
    }
}

impl std::fmt::Debug for Robot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Robot")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("current_floor", &self.current_floor)
            .field("destination_floor", &self.destination_floor)
            .field("load", &self.carrier.len())
            .finish()
    }
}
