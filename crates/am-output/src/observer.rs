//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use am_core::Tick;
use am_sim::{DeliveryRecord, SimObserver, SimReport};

use crate::row::{DeliveryRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every delivery and a per-tick summary to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    sequence:   u32,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sequence:   0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_delivery(&mut self, record: &DeliveryRecord) {
        self.sequence += 1;
        let row = DeliveryRow::from_record(self.sequence, record);
        let result = self.writer.write_delivery(&row);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, tick: Tick, delivered: usize) {
        let row = TickSummaryRow { tick: tick.0, delivered_total: delivered as u64 };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _report: &SimReport) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
