//! The delivery sink: records, scores, and audits every delivery.

use std::fmt;

use am_core::{MailId, MailItem, RobotId, Tick};
use am_robot::DeliverySink;
use rustc_hash::FxHashSet;
use tracing::info;

/// Exponent applied to an item's delivery delay when scoring.
const DELAY_PENALTY: f64 = 1.2;

/// One delivered item.
#[derive(Clone, Debug, PartialEq)]
pub struct DeliveryRecord {
    pub tick:        Tick,
    pub robot:       RobotId,
    pub item:        MailItem,
    /// Empty when fee charging is off.
    pub fee_summary: String,
    /// `(tick - arrival) ^ 1.2`; lower is better.
    pub score:       f64,
}

/// Collects every delivery in order.
///
/// A second delivery of the same item is not recorded; the first offending
/// id is held for the driver to pick up with
/// [`take_duplicate`](Self::take_duplicate), since `deliver` cannot fail.
#[derive(Debug, Default)]
pub struct DeliveryLog {
    records:     Vec<DeliveryRecord>,
    delivered:   FxHashSet<MailId>,
    total_score: f64,
    duplicate:   Option<MailId>,
    reported:    usize,
}

impl DeliveryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[DeliveryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_score(&self) -> f64 {
        self.total_score
    }

    /// The first item delivered twice, if any.  Cleared by the call.
    pub fn take_duplicate(&mut self) -> Option<MailId> {
        self.duplicate.take()
    }

    /// Records added since the previous call.
    pub fn unreported(&mut self) -> &[DeliveryRecord] {
        let start = self.reported;
        self.reported = self.records.len();
        &self.records[start..]
    }
}

impl DeliverySink for DeliveryLog {
    fn deliver(&mut self, tick: Tick, robot: RobotId, item: MailItem, fee_summary: &str) {
        if !self.delivered.insert(item.id) {
            self.duplicate.get_or_insert(item.id);
            return;
        }
        let score = (tick.since(item.arrival_tick) as f64).powf(DELAY_PENALTY);
        info!(tick = tick.0, %robot, "Delivered({:4}) [{item}{fee_summary}]", self.records.len() + 1);
        self.total_score += score;
        self.records.push(DeliveryRecord {
            tick,
            robot,
            item,
            fee_summary: fee_summary.to_string(),
            score,
        });
    }
}

// ── SimReport ─────────────────────────────────────────────────────────────────

/// End-of-run summary.
#[derive(Clone, Debug, PartialEq)]
pub struct SimReport {
    /// First tick not simulated.
    pub final_tick:  Tick,
    pub delivered:   usize,
    pub rejected:    usize,
    pub total_score: f64,
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation complete!")?;
        writeln!(f, "Final Delivery time: {}", self.final_tick.0.saturating_sub(1))?;
        writeln!(f, "Delivered: {} | Rejected: {}", self.delivered, self.rejected)?;
        write!(f, "Final Score: {:.2}", self.total_score)
    }
}
