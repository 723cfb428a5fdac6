//! The `Sim` struct and its tick loop.

use std::collections::BTreeMap;

use am_core::{BuildingLayout, MailItem, SimClock, SimConfig, Tick};
use am_robot::{FleetLedger, Robot, TickContext};
use tracing::info;

use crate::{DeliveryLog, MailPool, SimError, SimObserver, SimReport, SimResult};

/// The main simulation runner.
///
/// `Sim<P>` owns the fleet, its ledger, the mail pool and the delivery log,
/// and drives the four-phase tick loop described in the crate docs.  Robots
/// are operated sequentially in fleet order, each with exclusive access to
/// the shared collaborators for its turn.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: MailPool> {
    pub config:   SimConfig,
    pub clock:    SimClock,
    pub building: BuildingLayout,

    /// The fleet, in construction order.
    pub robots:   Vec<Robot>,

    /// Per-variant counters and fee adapters.
    pub ledger:   FleetLedger,

    pub pool:     P,
    pub log:      DeliveryLog,

    /// Mail not yet arrived, keyed by arrival tick.
    pub arrivals: BTreeMap<Tick, Vec<MailItem>>,

    /// Items the run must account for, delivered or rejected.
    pub total_mail: usize,
}

impl<P: MailPool> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every item is delivered or rejected.
    ///
    /// # Errors
    ///
    /// Stops at the first robot fault or duplicate delivery, or when the
    /// clock passes `config.max_ticks` with mail outstanding.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimReport> {
        while !self.is_finished() {
            if self.clock.expired() {
                return Err(SimError::TickLimit(self.clock.now()));
            }
            self.step(observer)?;
        }
        let report = self.report();
        info!(final_tick = report.final_tick.0, delivered = report.delivered, "simulation complete");
        observer.on_sim_end(&report);
        Ok(report)
    }

    /// Run exactly `n` ticks, whether or not mail is outstanding.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// `true` once every item has been delivered or rejected.
    pub fn is_finished(&self) -> bool {
        self.log.len() + self.pool.rejected().len() >= self.total_mail
    }

    pub fn report(&self) -> SimReport {
        SimReport {
            final_tick:  self.clock.now(),
            delivered:   self.log.len(),
            rejected:    self.pool.rejected().len(),
            total_score: self.log.total_score(),
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.now();
        observer.on_tick_start(now);

        // ── Phase 1: arrivals ─────────────────────────────────────────────
        if let Some(arrived) = self.arrivals.remove(&now) {
            for item in arrived {
                self.pool.add_to_pool(item);
            }
        }

        // ── Phase 2: load and dispatch waiting robots ─────────────────────
        self.pool.load_items_to_robots(&mut self.robots)?;

        // ── Phase 3: operate every robot once ─────────────────────────────
        for robot in &mut self.robots {
            let mut ctx = TickContext::new(
                now,
                &self.building,
                &mut self.pool,
                &mut self.log,
                &mut self.ledger,
            );
            robot.operate(&mut ctx)?;
        }
        if let Some(id) = self.log.take_duplicate() {
            return Err(SimError::DuplicateDelivery(id));
        }

        // ── Phase 4: report ───────────────────────────────────────────────
        for record in self.log.unreported() {
            observer.on_delivery(record);
        }
        observer.on_tick_end(now, self.log.len());

        self.clock.advance();
        Ok(())
    }
}
