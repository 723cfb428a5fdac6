//! Integration tests for am-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{DeliveryRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn delivery_row(sequence: u32, tick: u64) -> DeliveryRow {
        DeliveryRow {
            sequence,
            tick,
            robot:             "F2".to_string(),
            mail_id:           sequence + 100,
            destination_floor: 7,
            arrival_tick:      tick - 4,
            weight:            1500,
            score:             4f64.powf(1.2),
            fee_summary:       String::new(),
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("deliveries.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_creates_missing_dir() {
        let dir = tmp();
        let nested = dir.path().join("run").join("out");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("deliveries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("deliveries.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            [
                "sequence",
                "tick",
                "robot",
                "mail_id",
                "destination_floor",
                "arrival_tick",
                "weight",
                "score",
                "fee_summary",
            ],
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "delivered_total"]);
    }

    #[test]
    fn csv_delivery_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_delivery(&delivery_row(1, 10)).unwrap();
        w.write_delivery(&delivery_row(2, 12)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("deliveries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "1");       // sequence
        assert_eq!(&rows[0][2], "F2");      // robot
        assert_eq!(&rows[0][3], "101");     // mail_id
        assert_eq!(&rows[1][1], "12");      // tick
        assert_eq!(&rows[1][5], "8");       // arrival_tick
        assert_eq!(&rows[1][7], "5.2780");  // 4^1.2
    }

    #[test]
    fn csv_tick_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow { tick: 3, delivered_total: 2 }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "2");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod row_tests {
    use am_core::{MailId, MailItem, RobotId, RobotKind, Tick};
    use am_sim::DeliveryRecord;

    use crate::DeliveryRow;

    #[test]
    fn row_from_record() {
        let record = DeliveryRecord {
            tick:        Tick(9),
            robot:       RobotId::new(RobotKind::Bulk, 3),
            item:        MailItem::new(MailId(12), 4, Tick(5), 800),
            fee_summary: " | Service Fee: 8.10 | Maintenance: 0.01".to_string(),
            score:       4f64.powf(1.2),
        };
        let row = DeliveryRow::from_record(7, &record);
        assert_eq!(row.sequence, 7);
        assert_eq!(row.tick, 9);
        assert_eq!(row.robot, "B3");
        assert_eq!(row.mail_id, 12);
        assert_eq!(row.destination_floor, 4);
        assert_eq!(row.arrival_tick, 5);
        assert_eq!(row.fee_summary, "Service Fee: 8.10 | Maintenance: 0.01");
    }
}

#[cfg(test)]
mod observer_tests {
    use am_core::SimConfig;
    use am_sim::{SimBuilder, SimObserver};

    use crate::{CsvWriter, DeliveryRow, OutputError, OutputResult, OutputWriter, SimOutputObserver, TickSummaryRow};

    /// In-memory writer that can be told to fail.
    #[derive(Default)]
    struct MemWriter {
        deliveries: Vec<DeliveryRow>,
        summaries:  Vec<TickSummaryRow>,
        finished:   u32,
        fail:       bool,
    }

    impl OutputWriter for MemWriter {
        fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.deliveries.push(row.clone());
            Ok(())
        }

        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            self.summaries.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    fn small_config() -> SimConfig {
        SimConfig {
            seed:                  11,
            mail_to_create:        15,
            mail_receiving_length: 10,
            regular_robots:        1,
            fast_robots:           1,
            bulk_robots:           1,
            fee_charging:          false,
            ..SimConfig::default()
        }
    }

    #[test]
    fn one_row_per_delivery() {
        let mut sim = SimBuilder::new(small_config()).build().unwrap();
        let mut obs = SimOutputObserver::new(MemWriter::default());
        let report = sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.deliveries.len(), report.delivered);
        assert_eq!(w.finished, 1);
        let sequences: Vec<u32> = w.deliveries.iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, (1..=report.delivered as u32).collect::<Vec<_>>());
        assert_eq!(w.summaries.len() as u64, report.final_tick.0 - 1);
        assert_eq!(w.summaries.last().map(|s| s.delivered_total), Some(report.delivered as u64));
    }

    #[test]
    fn first_error_is_kept() {
        let mut obs = SimOutputObserver::new(MemWriter { fail: true, ..MemWriter::default() });
        let mut sim = SimBuilder::new(small_config()).build().unwrap();
        sim.run(&mut obs).unwrap();
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn csv_log_matches_run() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        let mut sim = SimBuilder::new(small_config()).build().unwrap();
        let report = sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("deliveries.csv")).unwrap();
        assert_eq!(rdr.records().count(), report.delivered);
    }

    #[test]
    fn tick_end_without_deliveries() {
        let mut obs = SimOutputObserver::new(MemWriter::default());
        obs.on_tick_end(am_core::Tick(1), 0);
        let w = obs.into_writer();
        assert_eq!(w.summaries, vec![TickSummaryRow { tick: 1, delivered_total: 0 }]);
        assert!(w.deliveries.is_empty());
    }
}
