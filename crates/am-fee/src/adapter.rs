//! `FeeAdapter`: stable fees on top of a flaky [`PriceLookup`].

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{PriceLookup, PriceQuote};

/// Wraps a [`PriceLookup`] and remembers the last price seen per floor.
///
/// One adapter serves every robot of a variant for the whole run.  The cache
/// only ever grows or overwrites; it is never cleared.
pub struct FeeAdapter {
    lookup:     Box<dyn PriceLookup>,
    last_known: FxHashMap<i32, f64>,
}

impl FeeAdapter {
    pub fn new(lookup: Box<dyn PriceLookup>) -> Self {
        Self {
            lookup,
            last_known: FxHashMap::default(),
        }
    }

    /// Service fee for `floor`.
    ///
    /// A fresh price replaces the cached one.  When the lookup is
    /// unavailable the cached price is returned, or `0.0` if the floor has
    /// never been priced.
    pub fn service_fee(&mut self, floor: i32) -> f64 {
        match self.lookup.lookup_price(floor) {
            PriceQuote::Price(fee) => {
                self.last_known.insert(floor, fee);
                fee
            }
            PriceQuote::Unavailable => {
                let fallback = self.last_known.get(&floor).copied().unwrap_or(0.0);
                debug!(floor, fallback, "price lookup unavailable, using last known fee");
                fallback
            }
        }
    }

    /// Maintenance fee: average operating time times the variant's rate.
    #[inline]
    pub fn maintenance_fee(avg_operating_time: f64, type_rate: f64) -> f64 {
        avg_operating_time * type_rate
    }

    /// Charge summary appended to a delivery report.
    ///
    /// Performs one service-fee lookup for `floor`.
    pub fn summary(&mut self, floor: i32, avg_operating_time: f64, type_rate: f64) -> String {
        let service = self.service_fee(floor);
        let maintenance = Self::maintenance_fee(avg_operating_time, type_rate);
        format!(
            " | Service Fee: {:.2} | Maintenance: {:.2} | Avg. Operating Time: {:.2} | Total Charge: {:.2}",
            service,
            maintenance,
            avg_operating_time,
            service + maintenance,
        )
    }

    /// Last price observed for `floor`, if any.
    #[inline]
    pub fn cached_fee(&self, floor: i32) -> Option<f64> {
        self.last_known.get(&floor).copied()
    }
}
