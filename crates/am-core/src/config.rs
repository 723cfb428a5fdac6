//! Top-level simulation configuration.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature) and passed to the simulation builder.  Every field has a
//! default, so a config file only needs the keys it wants to override.

use crate::{AmError, AmResult, BuildingLayout, MAX_ITEM_WEIGHT};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Number of floors in the building.
    pub floors: i32,

    /// Lowest floor number.
    pub lowest_floor: i32,

    /// Floor holding the mailroom.  Must lie within the building.
    pub mailroom_floor: i32,

    /// Total mail items the generator creates.
    pub mail_to_create: u32,

    /// Heaviest item the generator may create.  Values above
    /// [`MAX_ITEM_WEIGHT`] produce items no robot will accept.
    pub mail_max_weight: u32,

    /// Mail arrival times are spread uniformly over ticks `1 ..= this`.
    pub mail_receiving_length: u64,

    pub regular_robots: u32,
    pub fast_robots:    u32,
    pub bulk_robots:    u32,

    /// When `true`, every delivery carries a fee summary string.
    pub fee_charging: bool,

    /// Probability in `[0, 1]` that one price lookup reports the service as
    /// unavailable.
    pub modem_failure_rate: f64,

    /// Safety cap on the run length.
    pub max_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                  30006,
            floors:                10,
            lowest_floor:          1,
            mailroom_floor:        1,
            mail_to_create:        80,
            mail_max_weight:       MAX_ITEM_WEIGHT,
            mail_receiving_length: 100,
            regular_robots:        2,
            fast_robots:           1,
            bulk_robots:           1,
            fee_charging:          true,
            modem_failure_rate:    0.1,
            max_ticks:             10_000,
        }
    }
}

impl SimConfig {
    /// Total robots across all variants.
    #[inline]
    pub fn robot_count(&self) -> u32 {
        self.regular_robots + self.fast_robots + self.bulk_robots
    }

    /// The building this configuration describes.
    pub fn building(&self) -> BuildingLayout {
        BuildingLayout::new(self.lowest_floor, self.floors, self.mailroom_floor)
    }

    /// Reject configurations the simulation cannot run.
    pub fn validate(&self) -> AmResult<()> {
        if self.floors < 1 {
            return Err(AmError::Config(format!("floors must be positive, got {}", self.floors)));
        }
        if !self.building().contains(self.mailroom_floor) {
            return Err(AmError::Config(format!(
                "mailroom floor {} is outside floors {}..={}",
                self.mailroom_floor,
                self.lowest_floor,
                self.lowest_floor + self.floors - 1,
            )));
        }
        if self.robot_count() == 0 && self.mail_to_create > 0 {
            return Err(AmError::Config("mail is generated but no robots are configured".into()));
        }
        if self.mail_receiving_length == 0 {
            return Err(AmError::Config("mail_receiving_length must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.modem_failure_rate) {
            return Err(AmError::Config(format!(
                "modem_failure_rate must be within [0, 1], got {}",
                self.modem_failure_rate,
            )));
        }
        Ok(())
    }
}
