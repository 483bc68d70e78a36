//! Integration tests for eco-output.

use eco_core::{Calendar, Tick};
use eco_sim::EcoSnapshot;

use crate::MonthRow;

fn snapshot(month: u8) -> EcoSnapshot {
    EcoSnapshot {
        calendar:               Calendar { year: 2025, month },
        temperature:            40.681,
        precipitation:          8.553,
        previous_precipitation: 0.0,
        grain_height:           15.87,
        deer:                   3,
        hoppers:                12,
        swarm_grazing:          0.0,
    }
}

#[cfg(test)]
mod row_tests {
    use super::*;

    #[test]
    fn month_is_one_based() {
        let row = MonthRow::new(Tick(0), &snapshot(0));
        assert_eq!(row.month, 1);
        assert_eq!(row.year, 2025);
        assert_eq!(MonthRow::new(Tick(11), &snapshot(11)).month, 12);
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::writer::RowWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_file_created_with_header() {
        let dir = tmp();
        let path = dir.path().join("eco.csv");
        let mut w = CsvWriter::create(&path).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["tick", "year", "month", "temperature", "precipitation",
             "grain_height", "deer", "hoppers", "swarm_grazing"],
        );
    }

    #[test]
    fn csv_rows_written_in_order() {
        let dir = tmp();
        let path = dir.path().join("eco.csv");
        let mut w = CsvWriter::create(&path).unwrap();
        w.write_row(&MonthRow::new(Tick(0), &snapshot(0))).unwrap();
        w.write_row(&MonthRow::new(Tick(1), &snapshot(1))).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][2], "1");      // month
        assert_eq!(&rows[0][3], "40.68");  // temperature
        assert_eq!(&rows[1][2], "2");
        assert_eq!(&rows[1][7], "12");     // hoppers
    }

    #[test]
    fn finish_is_idempotent() {
        let mut w = CsvWriter::from_writer(Vec::new()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
        let bytes = w.into_inner().unwrap();
        assert!(String::from_utf8(bytes).unwrap().starts_with("tick,year,month"));
    }
}

#[cfg(test)]
mod console_tests {
    use super::*;
    use crate::writer::RowWriter;
    use crate::ConsoleWriter;

    #[test]
    fn progress_line_format() {
        let mut w = ConsoleWriter::new(Vec::new());
        w.write_row(&MonthRow::new(Tick(0), &snapshot(0))).unwrap();
        let line = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(line, " 1 , 2025 ,  40.68 ,   8.55 ,  15.87 ,  3, 12\n");
    }
}

#[cfg(test)]
mod reporter_tests {
    use std::io;

    use eco_core::EcoConfig;
    use eco_sim::{EcoSimBuilder, Fanout, Reporter};
    use tempfile::TempDir;

    use super::*;
    use crate::{ConsoleWriter, CsvWriter, OutputError, OutputReporter};

    /// A sink that rejects every write.
    struct Broken;

    impl io::Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn one_row_per_month() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eco.csv");
        let mut reporter = OutputReporter::new(CsvWriter::create(&path).unwrap());

        let mut sim = EcoSimBuilder::new(EcoConfig::default()).build().unwrap();
        sim.run_months(12, &mut reporter).unwrap();
        assert!(reporter.take_error().is_none());
        assert_eq!(reporter.rows(), 12);

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let months: Vec<String> = rdr.records().map(|r| r.unwrap()[2].to_owned()).collect();
        let expected: Vec<String> = (1..=12).map(|m| m.to_string()).collect();
        assert_eq!(months, expected);
    }

    #[test]
    fn write_errors_are_stored_not_raised() {
        let mut reporter = OutputReporter::new(ConsoleWriter::new(Broken));
        reporter.on_tick(Tick(0), &snapshot(0));
        reporter.on_tick(Tick(1), &snapshot(1));
        reporter.on_sim_end(Tick(2), &snapshot(2));

        assert_eq!(reporter.rows(), 0);
        assert!(matches!(reporter.take_error(), Some(OutputError::Io(_))));
        // Only the first error is kept.
        assert!(reporter.take_error().is_none());
    }

    #[test]
    fn borrowed_reporter_keeps_its_error_after_the_run() {
        let mut console = OutputReporter::new(ConsoleWriter::new(Broken));
        let mut sim = EcoSimBuilder::new(EcoConfig::default()).build().unwrap();
        {
            let mut reporters = Fanout::new().with(&mut console);
            sim.run_months(3, &mut reporters).unwrap();
        }
        assert_eq!(console.rows(), 0);
        assert!(matches!(console.take_error(), Some(OutputError::Io(_))));
    }
}
