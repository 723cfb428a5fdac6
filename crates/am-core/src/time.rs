//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter starting at 1, which is
//! the first tick on which mail can arrive and robots operate.  One tick is
//! the time a regular robot needs to climb one floor.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T: {:3}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation clock.  Owned by the driver and advanced once per tick;
/// everything else receives the current [`Tick`] by value.
#[derive(Clone, Debug)]
pub struct SimClock {
    current_tick: Tick,
    /// Hard stop; the driver refuses to advance past it.
    last_tick:    Tick,
}

impl SimClock {
    /// A clock positioned at tick 1 that allows `max_ticks` ticks.
    pub fn new(max_ticks: u64) -> Self {
        Self {
            current_tick: Tick(1),
            last_tick:    Tick(max_ticks),
        }
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.current_tick
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
    }

    /// `true` once the current tick has passed the configured cap.
    #[inline]
    pub fn expired(&self) -> bool {
        self.current_tick > self.last_tick
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.current_tick.fmt(f)
    }
}
