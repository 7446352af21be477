//! Psychrometric chart collaborator.
//!
//! A process path is a fixed set of chart nodes plus an incidence matrix that
//! says which nodes each process connects. In row `i` of the incidence
//! matrix, `-1` marks a node flowing into process `i` and `+1` marks the node
//! it produces. A process with two `-1` entries (a mixing box) is drawn as two
//! segments converging on its outlet.

mod csv_export;

pub use csv_export::CsvChart;

use thiserror::Error;

use super::AirState;

/// Errors that can occur while rendering a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Writing the CSV export failed.
    #[error("csv export failed")]
    Csv(#[from] csv::Error),

    /// An I/O operation failed.
    #[error("chart i/o failed")]
    Io(#[from] std::io::Error),
}

/// Ordered chart nodes of an air-conditioning process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessPath<const N: usize> {
    pub nodes: [AirState; N],
}

impl<const N: usize> ProcessPath<N> {
    #[must_use]
    pub fn new(nodes: [AirState; N]) -> Self {
        Self { nodes }
    }

    /// Node temperatures in °C.
    #[must_use]
    pub fn temperatures(&self) -> [f64; N] {
        self.nodes.map(|node| node.celsius())
    }

    /// Node humidity ratios in kg/kg.
    #[must_use]
    pub fn humidity_ratios(&self) -> [f64; N] {
        self.nodes
            .map(|node| node.humidity_ratio.get::<uom::si::ratio::ratio>())
    }
}

/// Directed connection between two chart nodes within one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Row of the incidence matrix this segment comes from.
    pub process: usize,
    pub from: usize,
    pub to: usize,
}

/// Process-by-node incidence matrix with `S` processes over `N` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incidence<const S: usize, const N: usize> {
    rows: [[i8; N]; S],
}

impl<const S: usize, const N: usize> Incidence<S, N> {
    /// Creates an incidence matrix.
    ///
    /// Entries other than `-1`, `0`, and `1` are treated as `0`.
    #[must_use]
    pub const fn new(rows: [[i8; N]; S]) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[[i8; N]; S] {
        &self.rows
    }

    /// Expands every process into its inlet-to-outlet segments.
    ///
    /// Segments are ordered by process, then by inlet node, then by outlet node.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.rows.iter().enumerate().flat_map(|(process, row)| {
            let inlets = row.iter().enumerate().filter(|(_, v)| **v == -1);
            inlets.flat_map(move |(from, _)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, v)| **v == 1)
                    .map(move |(to, _)| Segment { process, from, to })
            })
        })
    }
}

/// Renders a process path on a psychrometric chart.
///
/// Rendering is a side effect; nothing is returned to the model.
pub trait ChartRenderer {
    /// Renders `path` with the connectivity given by `incidence`.
    ///
    /// # Errors
    ///
    /// Returns a [`ChartError`] if the backend fails.
    fn render<const S: usize, const N: usize>(
        &self,
        path: &ProcessPath<N>,
        incidence: &Incidence<S, N>,
    ) -> Result<(), ChartError>;
}

/// Chart backend that draws nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoChart;

impl ChartRenderer for NoChart {
    fn render<const S: usize, const N: usize>(
        &self,
        _path: &ProcessPath<N>,
        _incidence: &Incidence<S, N>,
    ) -> Result<(), ChartError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixing_process_yields_two_segments() {
        let incidence = Incidence::new([[-1, 1, 0, -1], [0, -1, 1, 0], [0, 0, -1, 1]]);
        let segments: Vec<_> = incidence.segments().collect();

        assert_eq!(
            segments,
            vec![
                Segment { process: 0, from: 0, to: 1 },
                Segment { process: 0, from: 3, to: 1 },
                Segment { process: 1, from: 1, to: 2 },
                Segment { process: 2, from: 2, to: 3 },
            ]
        );
    }

    #[test]
    fn path_projects_chart_axes() {
        let path = ProcessPath::new([
            AirState::from_celsius(5.0, 0.004),
            AirState::from_celsius(24.0, 0.009),
        ]);

        let t = path.temperatures();
        assert!((t[0] - 5.0).abs() < 1e-9);
        assert!((t[1] - 24.0).abs() < 1e-9);
        assert_eq!(path.humidity_ratios(), [0.004, 0.009]);
    }
}
