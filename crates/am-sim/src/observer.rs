//! Simulation observer trait for progress reporting and data collection.

use am_core::Tick;

use crate::{DeliveryRecord, SimReport};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per delivered item, after all robots have operated, in
    /// delivery order.
    fn on_delivery(&mut self, _record: &DeliveryRecord) {}

    /// Called at the end of each tick.
    ///
    /// `delivered` is the running total of delivered items.
    fn on_tick_end(&mut self, _tick: Tick, _delivered: usize) {}

    /// Called once after the last item is delivered.
    fn on_sim_end(&mut self, _report: &SimReport) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
