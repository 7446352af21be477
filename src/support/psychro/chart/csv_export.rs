use std::{io, path::PathBuf};

use super::{ChartError, ChartRenderer, Incidence, ProcessPath};

const HEADER: [&str; 7] = [
    "process",
    "from",
    "to",
    "from_temperature_c",
    "from_humidity_ratio",
    "to_temperature_c",
    "to_humidity_ratio",
];

/// Chart backend that exports the path as CSV segments.
///
/// Each record is one segment, ready to be drawn as a line on any plotting
/// tool with temperature on the x axis and humidity ratio on the y axis.
/// The file is overwritten on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvChart {
    path: PathBuf,
}

impl CsvChart {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination file of this backend.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Writes the segments of `path` to any writer.
    ///
    /// # Errors
    ///
    /// Returns a [`ChartError`] if serialization or the writer fails.
    pub fn write_to<W: io::Write, const S: usize, const N: usize>(
        writer: W,
        path: &ProcessPath<N>,
        incidence: &Incidence<S, N>,
    ) -> Result<(), ChartError> {
        let temperatures = path.temperatures();
        let humidity_ratios = path.humidity_ratios();

        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(HEADER)?;
        for segment in incidence.segments() {
            writer.write_record([
                segment.process.to_string(),
                segment.from.to_string(),
                segment.to.to_string(),
                temperatures[segment.from].to_string(),
                humidity_ratios[segment.from].to_string(),
                temperatures[segment.to].to_string(),
                humidity_ratios[segment.to].to_string(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl ChartRenderer for CsvChart {
    fn render<const S: usize, const N: usize>(
        &self,
        path: &ProcessPath<N>,
        incidence: &Incidence<S, N>,
    ) -> Result<(), ChartError> {
        let file = std::fs::File::create(&self.path)?;
        Self::write_to(io::BufWriter::new(file), path, incidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::psychro::AirState;

    #[test]
    fn writes_one_record_per_segment() {
        let path = ProcessPath::new([
            AirState::from_celsius(5.0, 0.004),
            AirState::from_celsius(14.5, 0.007),
            AirState::from_celsius(24.0, 0.009),
        ]);
        let incidence = Incidence::new([[-1, 1, -1], [0, -1, 1]]);

        let mut buffer = Vec::new();
        CsvChart::write_to(&mut buffer, &path, &incidence).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], HEADER.join(","));
        assert!(lines[1].starts_with("0,0,1,"));
        assert!(lines[2].starts_with("0,2,1,"));
        assert!(lines[3].starts_with("1,1,2,"));
        assert!(lines[3].ends_with(",0.009"));
    }
}
