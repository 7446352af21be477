use std::fmt;

use uom::si::thermal_conductance::watt_per_kelvin;

use super::{EcsResults, NODE_LABELS};

/// Console summary of a solved balance.
///
/// Humidity ratios are shown in g/kg and duties in kW; the underlying
/// results keep SI units.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    results: &'a EcsResults,
}

impl<'a> Report<'a> {
    pub(super) fn new(results: &'a EcsResults) -> Self {
        Self { results }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let results = self.results;

        writeln!(f)?;
        writeln!(f, "{:<8}{:>10}{:>10}", "", "θ [°C]", "w [g/kg]")?;
        for (label, node) in NODE_LABELS.iter().zip(results.path.nodes) {
            writeln!(
                f,
                "{label:<8}{:>10.2}{:>10.2}",
                node.celsius(),
                node.grams_per_kilogram()
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{:>10}{:>10}{:>10}{:>10}", "QsHC", "QlVH", "QsTZ", "QlTZ")?;
        let [hc, vh, tz_sensible, tz_latent] = results.solution.duties().kilowatts();
        writeln!(
            f,
            "{hc:>10.2}{vh:>10.2}{tz_sensible:>10.2}{tz_latent:>10.2} kW"
        )?;

        writeln!(f)?;
        let ua = results.derived.envelope_ua.get::<watt_per_kelvin>();
        writeln!(f, "UA: {:.0}", ua.round_ties_even())
    }
}
