//! Fluent builder for constructing a [`Sim`].

use std::collections::BTreeMap;

use am_core::{MailItem, RobotKind, SimClock, SimConfig, SimRng, Tick};
use am_fee::{PriceLookup, SimulatedModem};
use am_robot::{FleetLedger, LookupFactory};
use rustc_hash::FxHashSet;

use crate::{DeliveryLog, FifoMailPool, MailGenerator, MailPool, Sim, SimError, SimResult, build_fleet};

/// RNG stream offsets, so the mail schedule does not shift when pricing
/// draws change and vice versa.
const MAIL_STREAM:  u64 = 1;
const PRICE_STREAM: u64 = 2;

/// Fluent builder for [`Sim<P>`].
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                                          |
/// |----------------------|--------------------------------------------------|
/// | `.pool(p)`           | `FifoMailPool`                                   |
/// | `.price_lookup(f)`   | One `SimulatedModem` per variant, seeded         |
/// | `.mail(items)`       | Generated by `MailGenerator` from the config     |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .price_lookup(|_kind| Box::new(|_floor: i32| PriceQuote::Unavailable))
///     .build()?;
/// ```
pub struct SimBuilder<P: MailPool> {
    config:  SimConfig,
    pool:    P,
    lookups: Option<LookupFactory>,
    mail:    Option<Vec<MailItem>>,
}

impl SimBuilder<FifoMailPool> {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            pool:    FifoMailPool::new(),
            lookups: None,
            mail:    None,
        }
    }
}

impl<P: MailPool> SimBuilder<P> {
    /// Swap in a different mail pool.
    pub fn pool<Q: MailPool>(self, pool: Q) -> SimBuilder<Q> {
        SimBuilder {
            config:  self.config,
            pool,
            lookups: self.lookups,
            mail:    self.mail,
        }
    }

    /// Supply the price source behind each variant's fee adapter.  Called at
    /// most once per variant, on that variant's first charged delivery.
    pub fn price_lookup<F>(mut self, lookups: F) -> Self
    where
        F: FnMut(RobotKind) -> Box<dyn PriceLookup> + 'static,
    {
        self.lookups = Some(Box::new(lookups));
        self
    }

    /// Use `items` instead of generated mail.  Each item arrives at its own
    /// `arrival_tick`; ids must be unique.
    pub fn mail(mut self, items: Vec<MailItem>) -> Self {
        self.mail = Some(items);
        self
    }

    /// Validate inputs, build the fleet, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;
        let building = self.config.building();
        let mut rng = SimRng::new(self.config.seed);

        // ── Mail schedule ─────────────────────────────────────────────────
        let arrivals = match self.mail {
            Some(items) => {
                let mut arrivals: BTreeMap<Tick, Vec<MailItem>> = BTreeMap::new();
                let mut seen = FxHashSet::default();
                for item in items {
                    if !seen.insert(item.id) {
                        return Err(SimError::Config(format!("mail item {} appears twice", item.id)));
                    }
                    if !building.contains(item.destination_floor) {
                        return Err(SimError::Config(format!(
                            "mail item {} is addressed to floor {}, outside the building",
                            item.id, item.destination_floor,
                        )));
                    }
                    arrivals.entry(item.arrival_tick.max(Tick(1))).or_default().push(item);
                }
                arrivals
            }
            None => MailGenerator::new(&self.config, rng.child(MAIL_STREAM)).generate(),
        };
        let total_mail = arrivals.values().map(Vec::len).sum();

        // ── Fleet and ledger ──────────────────────────────────────────────
        let lookups: LookupFactory = match self.lookups {
            Some(f) => f,
            None => {
                let mut prices = rng.child(PRICE_STREAM);
                let mailroom = self.config.mailroom_floor;
                let failure_rate = self.config.modem_failure_rate;
                Box::new(move |kind: RobotKind| -> Box<dyn PriceLookup> {
                    Box::new(SimulatedModem::new(prices.child(kind as u64), mailroom, failure_rate))
                })
            }
        };
        let mut ledger = FleetLedger::new(lookups);
        let robots = build_fleet(&self.config, &mut ledger);

        Ok(Sim {
            clock: SimClock::new(self.config.max_ticks),
            config: self.config,
            building,
            robots,
            ledger,
            pool: self.pool,
            log: DeliveryLog::new(),
            arrivals,
            total_mail,
        })
    }
}
