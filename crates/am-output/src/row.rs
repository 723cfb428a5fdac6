//! Plain data row types written by output backends.

use am_sim::DeliveryRecord;

/// One delivered mail item.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryRow {
    /// 1-based position in delivery order.
    pub sequence:          u32,
    pub tick:              u64,
    /// Robot id as displayed, e.g. `R0`.
    pub robot:             String,
    pub mail_id:           u32,
    pub destination_floor: i32,
    pub arrival_tick:      u64,
    pub weight:            u32,
    pub score:             f64,
    /// Empty when fee charging is off.
    pub fee_summary:       String,
}

impl DeliveryRow {
    pub fn from_record(sequence: u32, record: &DeliveryRecord) -> Self {
        Self {
            sequence,
            tick:              record.tick.0,
            robot:             record.robot.to_string(),
            mail_id:           record.item.id.0,
            destination_floor: record.item.destination_floor,
            arrival_tick:      record.item.arrival_tick.0,
            weight:            record.item.weight,
            score:             record.score,
            fee_summary:       record.fee_summary.trim_start_matches(" | ").to_string(),
        }
    }
}

/// Running totals at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:            u64,
    pub delivered_total: u64,
}
