//! Integration tests for ts-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{EventKind, RoundEventRow, TickSummaryRow};
    use crate::writer::EventWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("round_events.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(dir.path().join("round_events.csv")),
            ["tick", "event", "traveler", "station", "detail"]
        );
        assert_eq!(
            headers(dir.path().join("tick_summaries.csv")),
            ["tick", "elapsed_secs", "in_flight", "finished", "fraud_success"]
        );
    }

    #[test]
    fn missing_ids_are_blank() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_events(&[
            RoundEventRow {
                tick:     7,
                event:    EventKind::Admitted,
                traveler: Some(3),
                station:  Some(1),
                detail:   "fraud",
            },
            RoundEventRow {
                tick:     9,
                event:    EventKind::RoundEnd,
                traveler: None,
                station:  None,
                detail:   "lost",
            },
        ])
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("round_events.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "admitted");
        assert_eq!(&rows[0][2], "3");
        assert_eq!(&rows[0][4], "fraud");
        assert_eq!(&rows[1][2], "");
        assert_eq!(&rows[1][3], "");
        assert_eq!(&rows[1][4], "lost");
    }

    #[test]
    fn tick_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick:          120,
            elapsed_secs:  2.0,
            in_flight:     4,
            finished:      6,
            fraud_success: 1,
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "120");
        assert_eq!(&rows[0][1], "2.000");
        assert_eq!(&rows[0][2], "4");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use ts_core::{Point, RoundConfig, StationId, Tick, TravelerId, TravelerTuning};
    use ts_motion::LinearMotionProvider;
    use ts_sim::{Round, RoundBuilder, RoundObserver};

    use crate::{
        CsvWriter, EventKind, EventLogObserver, EventWriter, OutputError, OutputResult,
        RoundEventRow, TickSummaryRow,
    };

    /// In-memory writer that can be told to fail.
    #[derive(Default)]
    struct MemWriter {
        events:    Vec<RoundEventRow>,
        summaries: Vec<TickSummaryRow>,
        finishes:  usize,
        fail:      bool,
    }

    impl EventWriter for MemWriter {
        fn write_events(&mut self, rows: &[RoundEventRow]) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.events.extend_from_slice(rows);
            Ok(())
        }

        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            self.summaries.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    fn config() -> RoundConfig {
        RoundConfig {
            total_travelers:   3,
            max_fraud_success: 0,
            tick_secs:         0.05,
            traveler:          TravelerTuning { fraud_probability: 0.0, ..TravelerTuning::default() },
            ..RoundConfig::default()
        }
    }

    fn build_round() -> Round<LinearMotionProvider> {
        let slots = (0..3).map(|i| Point::new(0.0, 0.0, i as f32)).collect();
        RoundBuilder::new(config(), LinearMotionProvider::default())
            .station(slots, Point::new(0.0, 0.0, -1.0))
            .spawn_points(vec![Point::new(0.0, 0.0, 4.0)])
            .exit_points(vec![Point::new(0.0, 0.0, -4.0)])
            .build()
            .unwrap()
    }

    fn run_round<W: EventWriter>(obs: &mut EventLogObserver<W>) {
        build_round().run(obs).unwrap();
    }

    #[test]
    fn events_are_batched_per_tick() {
        let mut obs = EventLogObserver::new(MemWriter::default(), 0);
        obs.on_traveler_spawned(Tick(2), TravelerId(0), StationId(1), true);
        obs.on_traveler_admitted(Tick(2), TravelerId(0), StationId(1), false);
        assert!(obs.into_writer().events.is_empty());

        let mut obs = EventLogObserver::new(MemWriter::default(), 0);
        obs.on_traveler_spawned(Tick(2), TravelerId(0), StationId(1), true);
        obs.on_tick_end(Tick(2), 0.1, 1);
        let w = obs.into_writer();
        assert_eq!(w.events.len(), 1);
        assert_eq!(w.events[0].event, EventKind::Spawned);
        assert_eq!(w.events[0].station, Some(1));
        assert_eq!(w.events[0].detail, "intends_fraud");
        // Interval 0 disables summaries.
        assert!(w.summaries.is_empty());
    }

    #[test]
    fn summaries_follow_interval_and_counters() {
        let mut obs = EventLogObserver::new(MemWriter::default(), 10);
        obs.on_wave_progress(2, 3);
        obs.on_fraud_tally(1, 0);
        for t in 0..25 {
            obs.on_tick_end(Tick(t), t as f64 * 0.05, 4);
        }
        let w = obs.into_writer();
        let ticks: Vec<u64> = w.summaries.iter().map(|r| r.tick).collect();
        assert_eq!(ticks, vec![0, 10, 20]);
        assert_eq!(w.summaries[1].finished, 2);
        assert_eq!(w.summaries[1].fraud_success, 1);
        assert!((w.summaries[2].elapsed_secs - 1.0).abs() < 1e-6);
    }

    #[test]
    fn summary_time_follows_scaled_clock() {
        let mut round = build_round();
        round.clock.time_scale = 0.5;
        let mut obs = EventLogObserver::new(MemWriter::default(), 10);
        round.run_ticks(31, &mut obs).unwrap();

        let w = obs.into_writer();
        let ticks: Vec<u64> = w.summaries.iter().map(|r| r.tick).collect();
        assert_eq!(ticks, vec![0, 10, 20, 30]);
        for row in &w.summaries {
            let expected = row.tick as f64 * 0.05 * 0.5;
            assert!(
                (row.elapsed_secs - expected).abs() < 1e-4,
                "tick {}: {} != {}",
                row.tick,
                row.elapsed_secs,
                expected
            );
        }
    }

    #[test]
    fn first_write_error_is_kept() {
        let writer = MemWriter { fail: true, ..MemWriter::default() };
        let mut obs = EventLogObserver::new(writer, 0);
        obs.on_station_upgraded(Tick(0), StationId(0));
        obs.on_tick_end(Tick(0), 0.0, 0);
        obs.on_station_upgraded(Tick(1), StationId(1));
        obs.on_tick_end(Tick(1), 0.05, 0);

        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn full_round_is_logged() {
        let mut obs = EventLogObserver::new(MemWriter::default(), 20);
        run_round(&mut obs);
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.finishes, 1);
        let count = |kind| w.events.iter().filter(|e| e.event == kind).count();
        assert_eq!(count(EventKind::Spawned), 3);
        assert_eq!(count(EventKind::Admitted), 3);
        assert_eq!(count(EventKind::Exited), 3);
        assert_eq!(count(EventKind::StationAnimation), 3);

        let last = w.events.last().unwrap();
        assert_eq!(last.event, EventKind::RoundEnd);
        assert_eq!(last.detail, "won");
        assert!(w.events.windows(2).all(|p| p[0].tick <= p[1].tick));
    }

    #[test]
    fn full_round_to_csv() {
        let dir: TempDir = tempfile::tempdir().expect("create temp dir");
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = EventLogObserver::new(writer, 20);
        run_round(&mut obs);
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("round_events.csv")).unwrap();
        let kinds: Vec<String> = rdr.records().map(|r| r.unwrap()[1].to_owned()).collect();
        assert_eq!(kinds.iter().filter(|k| *k == "exited").count(), 3);
        assert_eq!(kinds.last().map(String::as_str), Some("round_end"));

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert!(rdr.records().count() > 0);
    }
}
