//! The robot factory.

use am_core::{RobotKind, SimConfig};
use am_robot::{FleetLedger, Robot};

/// Build the configured fleet and register every robot with `ledger`.
///
/// Regular robots come first, then fast, then bulk.  Ordinals run across the
/// whole fleet, so a `2 / 1 / 1` config yields `R0 R1 F2 B3`.  Every robot
/// starts `Returning` at the mailroom floor with the configured fee-charging
/// flag.
pub fn build_fleet(config: &SimConfig, ledger: &mut FleetLedger) -> Vec<Robot> {
    let counts = [
        (RobotKind::Regular, config.regular_robots),
        (RobotKind::Fast,    config.fast_robots),
        (RobotKind::Bulk,    config.bulk_robots),
    ];
    let mut robots = Vec::with_capacity(config.robot_count() as usize);
    for (kind, count) in counts {
        for _ in 0..count {
            let number = robots.len() as u32;
            ledger.register_robot(kind);
            robots.push(Robot::of_kind(kind, number, config.mailroom_floor, config.fee_charging));
        }
    }
    robots
}
