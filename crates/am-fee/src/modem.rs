//! A seeded stand-in for the building's pricing modem.

use am_core::SimRng;

use crate::{PriceLookup, PriceQuote};

/// Flat part of every service fee.
const BASE_FEE: f64 = 2.0;

/// Extra fee per floor between the mailroom and the destination.
const FEE_PER_FLOOR: f64 = 1.5;

/// A [`PriceLookup`] that behaves like the real pricing service: prices grow
/// with distance from the mailroom, carry a little noise, and each call
/// independently fails with probability `failure_rate`.
///
/// Replies are produced as raw wire values and decoded through
/// [`PriceQuote::from_raw`], so the sentinel path is exercised exactly as it
/// would be with real hardware.
pub struct SimulatedModem {
    rng:            SimRng,
    mailroom_floor: i32,
    failure_rate:   f64,
    calls:          u64,
    failures:       u64,
}

impl SimulatedModem {
    pub fn new(rng: SimRng, mailroom_floor: i32, failure_rate: f64) -> Self {
        Self {
            rng,
            mailroom_floor,
            failure_rate,
            calls:    0,
            failures: 0,
        }
    }

    /// Lookups answered so far, and how many of them failed.
    pub fn stats(&self) -> (u64, u64) {
        (self.calls, self.failures)
    }

    fn forward_call(&mut self, floor: i32) -> f64 {
        if self.rng.gen_bool(self.failure_rate) {
            return PriceQuote::UNAVAILABLE_SENTINEL;
        }
        let distance = (floor - self.mailroom_floor).unsigned_abs() as f64;
        let jitter: f64 = self.rng.gen_range(0.0..1.0);
        let price = BASE_FEE + FEE_PER_FLOOR * distance + jitter;
        (price * 100.0).round() / 100.0
    }
}

impl PriceLookup for SimulatedModem {
    fn lookup_price(&mut self, floor: i32) -> PriceQuote {
        self.calls += 1;
        let quote = PriceQuote::from_raw(self.forward_call(floor));
        if quote == PriceQuote::Unavailable {
            self.failures += 1;
        }
        quote
    }
}
