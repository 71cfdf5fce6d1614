mod config;
mod error;

use anyhow::Result;
use factory_lib::prelude::*;
use itertools::Itertools as _;
use tracing::info;

use crate::config::{AppConfig, OutputFormat};

/// Per-minute output the sample factory is asked for.
const SAMPLE_TARGETS: [(Component, f64); 5] = [
    (Component::IronIngot, 75.0),
    (Component::ReinforcedIronPlate, 5.0),
    (Component::Rotor, 4.0),
    (Component::IronPlate, 30.0),
    (Component::Screw, 110.0),
];

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    config.init_logging()?;

    let data = DataSet::standard()?.sorted_by_output();
    info!(recipes = data.recipes.len(), exact = config.exact, "loaded recipe catalog");

    match config.output {
        OutputFormat::Text => {
            println!("{}", data.recipes.pretty_string());
            println!("{}", sample_report(&data, config.exact).pretty_string());
        }
        OutputFormat::Json => {
            let rates = data.iter_recipes().map(Recipe::in_minute).collect_vec();
            println!("{}", serde_json::to_string_pretty(&rates)?);
        }
    }

    Ok(())
}

/// Report for the sample targets plus the iron ore feeding the smelters.
fn sample_report(data: &DataSet, exact: bool) -> Report {
    let mut report: Report = SAMPLE_TARGETS
        .iter()
        .filter_map(|(component, per_minute)| {
            ItemReportPart::for_rate(data.get_recipe(*component), *per_minute, exact)
        })
        .map(ReportPart::from)
        .collect();

    let smelting = data.get_recipe(Component::IronIngot).in_minute();
    if let Some(ore) = smelting.inputs.first() {
        let ore_per_ingot = ore.number / smelting.number;
        report.push(OreReportPart::new(
            Resource::IronOre,
            SAMPLE_TARGETS[0].1 * ore_per_ingot,
            exact,
        ));
    }

    report
}
