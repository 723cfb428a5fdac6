//! Random mail arrivals.

use std::collections::BTreeMap;

use am_core::{Building, MailId, MailItem, SimConfig, SimRng, Tick};

/// Creates the run's mail up front from a seeded RNG.
///
/// Arrival ticks are uniform over `1 ..= mail_receiving_length`,
/// destinations uniform over the building's floors, and weights uniform over
/// `1 ..= mail_max_weight`.
pub struct MailGenerator {
    rng:          SimRng,
    count:        u32,
    receiving:    u64,
    max_weight:   u32,
    lowest_floor: i32,
    top_floor:    i32,
}

impl MailGenerator {
    pub fn new(config: &SimConfig, rng: SimRng) -> Self {
        let building = config.building();
        Self {
            rng,
            count:        config.mail_to_create,
            receiving:    config.mail_receiving_length,
            max_weight:   config.mail_max_weight.max(1),
            lowest_floor: building.lowest_floor(),
            top_floor:    building.top_floor(),
        }
    }

    /// Generate every item, grouped by arrival tick.  Within a tick, items
    /// keep creation order.
    pub fn generate(&mut self) -> BTreeMap<Tick, Vec<MailItem>> {
        let mut schedule: BTreeMap<Tick, Vec<MailItem>> = BTreeMap::new();
        for n in 0..self.count {
            let arrival = Tick(self.rng.gen_range(1..=self.receiving));
            let floor = self.rng.gen_range(self.lowest_floor..=self.top_floor);
            let weight = self.rng.gen_range(1..=self.max_weight);
            schedule
                .entry(arrival)
                .or_default()
                .push(MailItem::new(MailId(n), floor, arrival, weight));
        }
        schedule
    }
}
