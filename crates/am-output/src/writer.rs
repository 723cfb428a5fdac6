//! The `OutputWriter` trait implemented by backend writers.

use crate::{DeliveryRow, OutputResult, TickSummaryRow};

/// A sink for delivery rows and per-tick summaries.
///
/// The observer cannot fail, so errors are stored and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one delivered item.
    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
