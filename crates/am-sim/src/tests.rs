//! Integration tests for am-sim.

use am_core::{MailId, MailItem, RobotId, RobotKind, SimConfig, SimRng, Tick};
use am_fee::{PriceLookup, PriceQuote};
use am_robot::{FleetLedger, MailSource, Robot, RobotError, RobotResult, RobotState};

use crate::{
    DeliveryLog, DeliveryRecord, FifoMailPool, MailGenerator, MailPool, NoopObserver, SimBuilder,
    SimError, SimObserver, SimReport, build_fleet,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config() -> SimConfig {
    SimConfig {
        seed:                  7,
        floors:                10,
        lowest_floor:          1,
        mailroom_floor:        1,
        mail_to_create:        30,
        mail_max_weight:       2000,
        mail_receiving_length: 20,
        regular_robots:        1,
        fast_robots:           1,
        bulk_robots:           1,
        fee_charging:          true,
        modem_failure_rate:    0.2,
        max_ticks:             2_000,
    }
}

fn item(id: u32, floor: i32, weight: u32) -> MailItem {
    MailItem::new(MailId(id), floor, Tick(1), weight)
}

fn no_prices(_kind: RobotKind) -> Box<dyn PriceLookup> {
    Box::new(|_floor: i32| PriceQuote::Unavailable)
}

// ── Fleet factory ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod fleet_tests {
    use super::*;

    #[test]
    fn ordinals_run_across_variants() {
        let config = SimConfig { regular_robots: 2, fast_robots: 1, bulk_robots: 1, ..test_config() };
        let mut ledger = FleetLedger::new(no_prices);
        let robots = build_fleet(&config, &mut ledger);
        let ids: Vec<String> = robots.iter().map(|r| r.id().to_string()).collect();
        assert_eq!(ids, vec!["R0", "R1", "F2", "B3"]);
        assert_eq!(ledger.robot_count(RobotKind::Regular), 2);
        assert_eq!(ledger.robot_count(RobotKind::Fast), 1);
        assert_eq!(ledger.robot_count(RobotKind::Bulk), 1);
    }

    #[test]
    fn robots_start_returning_at_mailroom() {
        let config = SimConfig { mailroom_floor: 4, fee_charging: false, ..test_config() };
        let mut ledger = FleetLedger::new(no_prices);
        for robot in build_fleet(&config, &mut ledger) {
            assert_eq!(robot.state(), RobotState::Returning);
            assert_eq!(robot.current_floor(), 4);
            assert!(!robot.fee_charging());
            assert!(robot.is_empty());
        }
    }

    #[test]
    fn empty_variant_is_skipped() {
        let config = SimConfig { regular_robots: 0, fast_robots: 2, bulk_robots: 0, ..test_config() };
        let mut ledger = FleetLedger::new(no_prices);
        let robots = build_fleet(&config, &mut ledger);
        assert_eq!(robots.len(), 2);
        assert!(robots.iter().all(|r| r.kind() == RobotKind::Fast));
    }
}

// ── FifoMailPool ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod pool_tests {
    use super::*;

    fn fleet(kind: RobotKind, n: u32) -> Vec<Robot> {
        (0..n).map(|i| Robot::of_kind(kind, i, 1, false)).collect()
    }

    #[test]
    fn register_is_deduplicated() {
        let mut pool = FifoMailPool::new();
        let id = RobotId::new(RobotKind::Bulk, 0);
        pool.register_waiting(id);
        pool.register_waiting(id);
        assert_eq!(pool.waiting().count(), 1);
    }

    #[test]
    fn fills_robot_then_dispatches() {
        let mut pool = FifoMailPool::new();
        let mut robots = fleet(RobotKind::Bulk, 1);
        for i in 0..7 {
            pool.add_to_pool(item(i, 3, 100));
        }
        pool.register_waiting(robots[0].id());
        assert_eq!(pool.load_items_to_robots(&mut robots).unwrap(), 1);
        assert!(robots[0].is_full());
        assert!(robots[0].received_dispatch());
        assert_eq!(pool.pending(), 2);
        assert_eq!(pool.waiting().count(), 0);
    }

    #[test]
    fn robot_without_mail_keeps_waiting() {
        let mut pool = FifoMailPool::new();
        let mut robots = fleet(RobotKind::Regular, 1);
        pool.register_waiting(robots[0].id());
        assert_eq!(pool.load_items_to_robots(&mut robots).unwrap(), 0);
        assert!(!robots[0].received_dispatch());
        assert_eq!(pool.waiting().count(), 1);

        pool.add_to_pool(item(0, 5, 100));
        assert_eq!(pool.load_items_to_robots(&mut robots).unwrap(), 1);
        assert_eq!(robots[0].load(), 1);
    }

    #[test]
    fn overweight_mail_is_set_aside() {
        let mut pool = FifoMailPool::new();
        let mut robots = fleet(RobotKind::Regular, 1);
        pool.add_to_pool(item(0, 5, 2500));
        pool.add_to_pool(item(1, 6, 100));
        pool.add_to_pool(item(2, 7, 100));
        pool.register_waiting(robots[0].id());
        pool.load_items_to_robots(&mut robots).unwrap();
        assert_eq!(pool.rejected().len(), 1);
        assert_eq!(pool.rejected()[0].id, MailId(0));
        assert_eq!(robots[0].load(), 2);
        assert_eq!(pool.pending(), 0);
    }

    #[test]
    fn only_overweight_mail_leaves_robot_waiting() {
        let mut pool = FifoMailPool::new();
        let mut robots = fleet(RobotKind::Fast, 1);
        pool.add_to_pool(item(0, 5, 9000));
        pool.register_waiting(robots[0].id());
        assert_eq!(pool.load_items_to_robots(&mut robots).unwrap(), 0);
        assert!(robots[0].is_empty());
        assert_eq!(pool.waiting().count(), 1);
    }

    #[test]
    fn robots_served_in_registration_order() {
        let mut pool = FifoMailPool::new();
        let mut robots = fleet(RobotKind::Fast, 2);
        pool.register_waiting(robots[1].id());
        pool.register_waiting(robots[0].id());
        pool.add_to_pool(item(0, 5, 100));
        pool.load_items_to_robots(&mut robots).unwrap();
        assert_eq!(robots[1].load(), 1);
        assert_eq!(robots[0].load(), 0);
    }
}

// ── MailGenerator ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod generator_tests {
    use super::*;

    #[test]
    fn generates_configured_mail_within_bounds() {
        let config = test_config();
        let schedule = MailGenerator::new(&config, SimRng::new(1)).generate();
        let items: Vec<&MailItem> = schedule.values().flatten().collect();
        assert_eq!(items.len(), 30);
        for (tick, batch) in &schedule {
            assert!((1..=20).contains(&tick.0));
            assert!(batch.iter().all(|i| i.arrival_tick == *tick));
        }
        for i in items {
            assert!((1..=10).contains(&i.destination_floor));
            assert!((1..=2000).contains(&i.weight));
        }
    }

    #[test]
    fn same_seed_same_mail() {
        let config = test_config();
        let a = MailGenerator::new(&config, SimRng::new(5)).generate();
        let b = MailGenerator::new(&config, SimRng::new(5)).generate();
        assert_eq!(a, b);
    }
}

// ── DeliveryLog ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod delivery_tests {
    use am_robot::DeliverySink;

    use super::*;

    #[test]
    fn scores_delay_with_penalty() {
        let mut log = DeliveryLog::new();
        let robot = RobotId::new(RobotKind::Fast, 0);
        log.deliver(Tick(1), robot, item(0, 2, 10), "");
        log.deliver(Tick(3), robot, item(1, 2, 10), "");
        assert_eq!(log.records()[0].score, 0.0);
        assert!((log.records()[1].score - 2f64.powf(1.2)).abs() < 1e-9);
        assert!((log.total_score() - 2f64.powf(1.2)).abs() < 1e-9);
    }

    #[test]
    fn duplicate_is_flagged_not_recorded() {
        let mut log = DeliveryLog::new();
        let robot = RobotId::new(RobotKind::Bulk, 0);
        log.deliver(Tick(2), robot, item(4, 2, 10), "");
        log.deliver(Tick(3), robot, item(4, 2, 10), "");
        assert_eq!(log.len(), 1);
        assert_eq!(log.take_duplicate(), Some(MailId(4)));
        assert_eq!(log.take_duplicate(), None);
    }

    #[test]
    fn unreported_advances() {
        let mut log = DeliveryLog::new();
        let robot = RobotId::new(RobotKind::Regular, 0);
        log.deliver(Tick(2), robot, item(0, 2, 10), " | fee");
        assert_eq!(log.unreported().len(), 1);
        assert!(log.unreported().is_empty());
        log.deliver(Tick(3), robot, item(1, 2, 10), "");
        let fresh = log.unreported();
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].item.id, MailId(1));
        assert_eq!(log.records()[0].fee_summary, " | fee");
    }

    #[test]
    fn report_display() {
        let report = SimReport { final_tick: Tick(51), delivered: 3, rejected: 1, total_score: 12.346 };
        let s = report.to_string();
        assert!(s.contains("Final Delivery time: 50"), "got {s}");
        assert!(s.contains("Final Score: 12.35"), "got {s}");
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_from_config() {
        let sim = SimBuilder::new(test_config()).build().unwrap();
        assert_eq!(sim.robots.len(), 3);
        assert_eq!(sim.total_mail, 30);
        assert_eq!(sim.clock.now(), Tick(1));
    }

    #[test]
    fn invalid_config_errors() {
        let config = SimConfig { mailroom_floor: 0, ..test_config() };
        assert!(matches!(SimBuilder::new(config).build(), Err(SimError::Core(_))));
    }

    #[test]
    fn mail_outside_building_errors() {
        let result = SimBuilder::new(test_config()).mail(vec![item(0, 11, 10)]).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn repeated_mail_id_errors() {
        let result = SimBuilder::new(test_config())
            .mail(vec![item(0, 3, 100), item(0, 7, 100)])
            .build();
        match result {
            Err(SimError::Config(msg)) => assert!(msg.contains("M000 appears twice"), "got {msg}"),
            Err(other) => panic!("expected a config error, got {other}"),
            Ok(_) => panic!("expected a config error, got a sim"),
        }
    }

    #[test]
    fn supplied_mail_replaces_generator() {
        let sim = SimBuilder::new(test_config())
            .mail(vec![item(0, 4, 10), item(1, 5, 10)])
            .build()
            .unwrap();
        assert_eq!(sim.total_mail, 2);
        assert_eq!(sim.arrivals.get(&Tick(1)).map(Vec::len), Some(2));
    }
}

// ── Full runs ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    /// Observer that records deliveries and tick boundaries.
    #[derive(Default)]
    struct Recorder {
        ticks:      u64,
        deliveries: Vec<DeliveryRecord>,
        ended:      Option<SimReport>,
    }

    impl SimObserver for Recorder {
        fn on_tick_end(&mut self, _tick: Tick, _delivered: usize) {
            self.ticks += 1;
        }

        fn on_delivery(&mut self, record: &DeliveryRecord) {
            self.deliveries.push(record.clone());
        }

        fn on_sim_end(&mut self, report: &SimReport) {
            self.ended = Some(report.clone());
        }
    }

    #[test]
    fn delivers_all_generated_mail() {
        let mut sim = SimBuilder::new(test_config()).build().unwrap();
        let mut rec = Recorder::default();
        let report = sim.run(&mut rec).unwrap();
        assert_eq!(report.delivered + report.rejected, 30);
        assert_eq!(report.rejected, 0);
        assert_eq!(rec.deliveries.len(), 30);
        assert_eq!(rec.ended.as_ref(), Some(&report));
        assert_eq!(rec.ticks, report.final_tick.0 - 1);
        assert!(sim.is_finished());
    }

    #[test]
    fn runs_are_reproducible() {
        let a = SimBuilder::new(test_config()).build().unwrap().run(&mut NoopObserver).unwrap();
        let b = SimBuilder::new(test_config()).build().unwrap().run(&mut NoopObserver).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn overweight_mail_counts_as_rejected() {
        let mail = vec![item(0, 3, 100), item(1, 4, 5000), item(2, 5, 100)];
        let mut sim = SimBuilder::new(test_config()).mail(mail).build().unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(report.delivered, 2);
        assert_eq!(report.rejected, 1);
    }

    #[test]
    fn fee_summaries_follow_config() {
        let mut charged = SimBuilder::new(test_config())
            .price_lookup(no_prices)
            .build()
            .unwrap();
        charged.run(&mut NoopObserver).unwrap();
        assert!(
            charged.log.records().iter().all(|r| r.fee_summary.starts_with(" | Service Fee: 0.00 |")),
        );

        let config = SimConfig { fee_charging: false, ..test_config() };
        let mut free = SimBuilder::new(config).build().unwrap();
        free.run(&mut NoopObserver).unwrap();
        assert!(free.log.records().iter().all(|r| r.fee_summary.is_empty()));
    }

    #[test]
    fn tick_limit_is_an_error() {
        let config = SimConfig { max_ticks: 3, ..test_config() };
        let mut sim = SimBuilder::new(config).build().unwrap();
        assert!(matches!(sim.run(&mut NoopObserver), Err(SimError::TickLimit(Tick(4)))));
    }

    #[test]
    fn run_ticks_advances_clock() {
        let mut sim = SimBuilder::new(test_config()).build().unwrap();
        sim.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.clock.now(), Tick(6));
    }

    /// A pool that ignores the protocol and tops robots up every tick,
    /// even mid-delivery.
    #[derive(Default)]
    struct OverloadingPool {
        next_id: u32,
    }

    impl MailSource for OverloadingPool {
        fn register_waiting(&mut self, _robot: RobotId) {}
    }

    impl MailPool for OverloadingPool {
        fn add_to_pool(&mut self, _item: MailItem) {}

        fn load_items_to_robots(&mut self, robots: &mut [Robot]) -> RobotResult<usize> {
            for robot in robots.iter_mut() {
                while !robot.is_full() {
                    let mail = item(self.next_id, 2, 100);
                    self.next_id += 1;
                    match robot.load_item(mail) {
                        Ok(()) => {}
                        Err(e @ RobotError::ExcessiveDelivery { .. }) => return Err(e),
                        Err(_) => break,
                    }
                }
                robot.dispatch();
            }
            Ok(robots.len())
        }

        fn pending(&self) -> usize {
            0
        }

        fn rejected(&self) -> &[MailItem] {
            &[]
        }
    }

    #[test]
    fn protocol_violation_halts_the_run() {
        let config = SimConfig { regular_robots: 0, fast_robots: 0, bulk_robots: 1, ..test_config() };
        let mut sim = SimBuilder::new(config)
            .pool(OverloadingPool::default())
            .mail(vec![])
            .build()
            .unwrap();
        let err = sim.run_ticks(50, &mut NoopObserver).unwrap_err();
        match err {
            SimError::Robot(fault) => {
                assert!(fault.is_fatal());
                assert!(matches!(fault, RobotError::ExcessiveDelivery { delivered: 6, limit: 5, .. }));
            }
            other => panic!("expected a robot fault, got {other}"),
        }
        assert_eq!(sim.log.len(), 6);
    }
}
