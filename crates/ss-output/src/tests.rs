//! Integration tests for ss-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, RESCUER_HEADERS, RESPONSE_HEADERS};
    use crate::row::{RescuerRow, ResponseRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn response_row(time: f64) -> ResponseRow {
        ResponseRow {
            episode:             1,
            time,
            rescuers_responding: 5,
            rescuers_arrived:    2,
            closest_eta:         0.0,
            min_distance:        0.0,
        }
    }

    fn rescuer_row(rescuer_id: u32) -> RescuerRow {
        RescuerRow {
            episode:    1,
            time:       0.5,
            rescuer_id,
            status:     "responding",
            lat:        40.7128,
            lon:        -74.006,
            eta:        1.25,
            distance:   0.8,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("response_log.csv").exists());
        assert!(dir.path().join("rescuer_snapshots.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("response_log.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, RESPONSE_HEADERS);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("rescuer_snapshots.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, RESCUER_HEADERS);
    }

    #[test]
    fn csv_response_row_formatting() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_response(&response_row(1.5)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("response_log.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "1");     // episode
        assert_eq!(&rows[0][1], "1.500"); // time
        assert_eq!(&rows[0][2], "5");
        assert_eq!(&rows[0][3], "2");
    }

    #[test]
    fn csv_rescuer_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_rescuers(&[rescuer_row(1), rescuer_row(2), rescuer_row(3)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("rescuer_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[2][2], "3");
        assert_eq!(&rows[0][3], "responding");
        assert_eq!(&rows[0][4], "40.712800");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_batch_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_rescuers(&[]).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use ss_core::{ManualClock, SwarmConfig, Timestamp};
    use ss_sim::{EpisodeEnd, PollLoop, SwarmBuilder};

    use crate::csv::CsvWriter;
    use crate::error::OutputResult;
    use crate::observer::SwarmOutputObserver;
    use crate::row::{RescuerRow, ResponseRow};
    use crate::writer::OutputWriter;

    /// Collects rows in memory; optionally fails every response write.
    #[derive(Default)]
    struct MemWriter {
        responses:     Vec<ResponseRow>,
        rescuers:      Vec<RescuerRow>,
        finishes:      usize,
        fail_response: bool,
    }

    impl OutputWriter for MemWriter {
        fn write_response(&mut self, row: &ResponseRow) -> OutputResult<()> {
            if self.fail_response {
                return Err(std::io::Error::other("disk full").into());
            }
            self.responses.push(*row);
            Ok(())
        }

        fn write_rescuers(&mut self, rows: &[RescuerRow]) -> OutputResult<()> {
            self.rescuers.extend_from_slice(rows);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    fn config(count: usize) -> SwarmConfig {
        SwarmConfig { rescuer_count: count, ..SwarmConfig::default() }
    }

    #[test]
    fn records_every_log_entry_and_rescuer() {
        let mut swarm = SwarmBuilder::new().config(config(3)).seed(5).build().unwrap();
        let mut poll = PollLoop::new(ManualClock::new(Timestamp::ZERO), 0.5);
        let mut obs = SwarmOutputObserver::new(MemWriter::default());

        poll.activate(&mut swarm, &mut obs).unwrap();
        let end = poll.run_until_settled(&mut swarm, 100, &mut obs).unwrap();
        assert!(matches!(end, EpisodeEnd::Settled { .. }));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.episodes(), 1);

        let log_len = swarm.response_log().len();
        let w = obs.into_writer();
        assert_eq!(w.responses.len(), log_len);
        assert_eq!(w.rescuers.len(), log_len * 3);
        assert_eq!(w.finishes, 1);
        assert_eq!(w.responses[0].rescuers_responding, 0);
        assert_eq!(w.responses.last().unwrap().rescuers_arrived, 3);
        assert!(w.rescuers[w.rescuers.len() - 3..].iter().all(|r| r.status == "arrived"));
    }

    #[test]
    fn episode_counter_advances_after_reset() {
        let mut swarm = SwarmBuilder::new().config(config(2)).seed(9).build().unwrap();
        let mut poll = PollLoop::new(ManualClock::new(Timestamp::ZERO), 0.5);
        let mut obs = SwarmOutputObserver::new(MemWriter::default());

        poll.activate(&mut swarm, &mut obs).unwrap();
        poll.run_ticks(&mut swarm, 1, &mut obs).unwrap();
        poll.reset(&mut swarm, &mut obs);
        poll.activate(&mut swarm, &mut obs).unwrap();

        assert_eq!(obs.episodes(), 2);
        let w = obs.into_writer();
        let episodes: Vec<u32> = w.responses.iter().map(|r| r.episode).collect();
        assert_eq!(episodes, [1, 1, 2]);
    }

    #[test]
    fn first_error_is_kept() {
        let mut swarm = SwarmBuilder::new().config(config(2)).seed(1).build().unwrap();
        let mut poll = PollLoop::new(ManualClock::new(Timestamp::ZERO), 0.5);
        let writer = MemWriter { fail_response: true, ..MemWriter::default() };
        let mut obs = SwarmOutputObserver::new(writer);

        poll.activate(&mut swarm, &mut obs).unwrap();
        poll.run_ticks(&mut swarm, 2, &mut obs).unwrap();

        let err = obs.take_error().expect("write failure recorded");
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn integration_csv() {
        let dir = TempDir::new().unwrap();
        let mut swarm = SwarmBuilder::new().config(config(5)).seed(42).build().unwrap();
        let mut poll = PollLoop::new(ManualClock::new(Timestamp(1_000.0)), 0.5);
        let mut obs = SwarmOutputObserver::new(CsvWriter::new(dir.path()).unwrap());

        poll.activate(&mut swarm, &mut obs).unwrap();
        poll.run_until_settled(&mut swarm, 100, &mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("response_log.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), swarm.response_log().len());

        let mut rdr = csv::Reader::from_path(dir.path().join("rescuer_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), swarm.response_log().len() * 5);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::row::{RescuerRow, ResponseRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn rescuer_row(rescuer_id: u32, status: &'static str) -> RescuerRow {
        RescuerRow {
            episode: 1, time: 2.0, rescuer_id, status,
            lat: 40.7, lon: -74.0, eta: 0.0, distance: 1.1,
        }
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_rescuer_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_rescuers(&[
            rescuer_row(1, "arrived"),
            rescuer_row(2, "responding"),
            rescuer_row(3, "responding"),
        ]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM rescuer_snapshots WHERE status = 'responding'", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn sqlite_response_row() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_response(&ResponseRow {
            episode: 3, time: 4.5, rescuers_responding: 5, rescuers_arrived: 1,
            closest_eta: 0.0, min_distance: 0.0,
        }).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (episode, time, arrived): (i64, f64, i64) = conn.query_row(
            "SELECT episode, time, rescuers_arrived FROM response_log",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        ).unwrap();
        assert_eq!(episode, 3);
        assert_eq!(time, 4.5);
        assert_eq!(arrived, 1);
    }
}
