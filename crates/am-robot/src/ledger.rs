//! Per-variant aggregates shared by every robot of the same kind.

use am_core::RobotKind;
use am_fee::{FeeAdapter, PriceLookup};
use rustc_hash::FxHashMap;

/// Builds the price lookup behind a variant's fee adapter.  Called at most
/// once per variant, on that variant's first fee request.
pub type LookupFactory = Box<dyn FnMut(RobotKind) -> Box<dyn PriceLookup>>;

#[derive(Default)]
struct VariantLedger {
    robots:          u32,
    operating_ticks: u64,
    fees:            Option<FeeAdapter>,
}

/// Registry of per-variant robot counts, cumulative operating ticks, and fee
/// adapters.
///
/// The driver owns the ledger and lends it to each robot for one tick at a
/// time, so updates are serialised by construction.  All mutation goes
/// through [`entry`](Self::entry).
pub struct FleetLedger {
    variants: FxHashMap<RobotKind, VariantLedger>,
    lookups:  LookupFactory,
}

impl FleetLedger {
    /// Create an empty ledger whose fee adapters draw prices from `lookups`.
    pub fn new<F>(lookups: F) -> Self
    where
        F: FnMut(RobotKind) -> Box<dyn PriceLookup> + 'static,
    {
        Self {
            variants: FxHashMap::default(),
            lookups:  Box::new(lookups),
        }
    }

    fn entry(&mut self, kind: RobotKind) -> &mut VariantLedger {
        self.variants.entry(kind).or_default()
    }

    /// Count one more robot of `kind`.  Called once per robot at construction.
    pub fn register_robot(&mut self, kind: RobotKind) {
        self.entry(kind).robots += 1;
    }

    /// Add one operating tick to `kind`'s running total.
    pub fn record_operating_tick(&mut self, kind: RobotKind) {
        self.entry(kind).operating_ticks += 1;
    }

    pub fn robot_count(&self, kind: RobotKind) -> u32 {
        self.variants.get(&kind).map_or(0, |v| v.robots)
    }

    pub fn operating_ticks(&self, kind: RobotKind) -> u64 {
        self.variants.get(&kind).map_or(0, |v| v.operating_ticks)
    }

    /// Cumulative operating ticks divided by robot count; `0.0` for a variant
    /// with no robots.
    pub fn average_operating_time(&self, kind: RobotKind) -> f64 {
        match self.variants.get(&kind) {
            Some(v) if v.robots > 0 => v.operating_ticks as f64 / v.robots as f64,
            _ => 0.0,
        }
    }

    /// Fee summary for a delivery by a `kind` robot to `floor`.
    ///
    /// Builds the variant's adapter on first use.
    pub fn fee_summary(&mut self, kind: RobotKind, floor: i32, fee_rate: f64) -> String {
        let avg = self.average_operating_time(kind);
        let lookups = &mut self.lookups;
        let entry = self.variants.entry(kind).or_default();
        let fees = entry.fees.get_or_insert_with(|| FeeAdapter::new(lookups(kind)));
        fees.summary(floor, avg, fee_rate)
    }

    /// The variant's fee adapter, if one has been built yet.
    pub fn fee_adapter(&self, kind: RobotKind) -> Option<&FeeAdapter> {
        self.variants.get(&kind).and_then(|v| v.fees.as_ref())
    }
}
