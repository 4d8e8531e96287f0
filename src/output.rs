use crate::core::estimator::{CostEstimate, Savings};
use anyhow::anyhow;
use formatx::formatx;
use std::fmt::Debug;
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub trait Output: Debug {
    fn writer_for_location_key(&self, location_key: &str) -> anyhow::Result<impl Write>;
    /// Whether this output can be considered a no-op and therefore that any code that only writes to the output can be skipped.
    fn is_noop(&self) -> bool {
        false
    }
}

/// An output writing each location key to its own file in a directory, the file name
/// coming from a template with a single `{}` placeholder for the key.
#[derive(Debug)]
pub struct FileOutput {
    directory_path: PathBuf,
    file_template: String,
}

impl FileOutput {
    pub fn new(directory_path: PathBuf, file_template: String) -> Self {
        Self {
            directory_path,
            file_template,
        }
    }

    fn file_name_for_location_key(&self, location_key: &str) -> anyhow::Result<String> {
        formatx!(&self.file_template, location_key).map_err(|err| {
            anyhow!(
                "Could not build an output file name from template '{}': {err:?}",
                self.file_template
            )
        })
    }
}

impl Output for FileOutput {
    fn writer_for_location_key(&self, location_key: &str) -> anyhow::Result<impl Write> {
        let file_name = self.file_name_for_location_key(location_key)?;
        Ok(BufWriter::new(File::create(
            self.directory_path.join(file_name),
        )?))
    }
}

impl Output for &FileOutput {
    fn writer_for_location_key(&self, location_key: &str) -> anyhow::Result<impl Write> {
        <FileOutput as Output>::writer_for_location_key(self, location_key)
    }
}

/// An output that goes to nowhere/ a "sink"/ /dev/null.
#[derive(Debug, Default)]
pub struct SinkOutput;

impl Output for SinkOutput {
    fn writer_for_location_key(&self, _location_key: &str) -> anyhow::Result<impl Write> {
        Ok(io::sink())
    }

    fn is_noop(&self) -> bool {
        true
    }
}

/// Format an amount of money to whole units, grouping thousands with commas.
///
/// Halves round away from zero. Amounts that are not finite are shown as-is.
pub fn format_currency(amount: f64, currency_symbol: &str) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded < 0. { "-" } else { "" };
    format!("{sign}{currency_symbol}{grouped}")
}

const PANEL_WIDTH: usize = 32;

fn write_panel(panel: &mut String, title: &str, rows: &[(&str, String)]) {
    panel.push_str(&format!("{title}\n{}\n", "-".repeat(PANEL_WIDTH)));
    for (label, value) in rows {
        panel.push_str(&format!("{label:<16}{value:>16}\n"));
    }
}

/// Render the three summary panels a host shows above its charts: current costs, heat
/// pump costs and savings.
pub fn summary_panels(estimate: &CostEstimate, currency_symbol: &str) -> String {
    let money = |amount: f64| format_currency(amount, currency_symbol);
    let mut panels = String::new();

    write_panel(
        &mut panels,
        "Current system",
        &[
            ("Heating", money(estimate.current_heating_cost)),
            ("Cooling", money(estimate.current_cooling_cost)),
            ("Total", money(estimate.current_total_cost())),
        ],
    );
    panels.push('\n');
    write_panel(
        &mut panels,
        "Heat pump",
        &[
            ("Heating", money(estimate.heat_pump_heating_cost)),
            ("Cooling", money(estimate.heat_pump_cooling_cost)),
            ("Total", money(estimate.heat_pump_total_cost())),
        ],
    );
    panels.push('\n');

    let Savings {
        heating,
        cooling,
        total,
    } = estimate.annual_savings;
    write_panel(
        &mut panels,
        "Estimated savings",
        &[
            ("Heating", money(heating)),
            ("Cooling", money(cooling)),
            ("Total", money(total)),
            ("Per month", money(estimate.monthly_savings.total)),
        ],
    );

    panels
}

/// Render the monthly series behind the cost and savings charts as a text table.
pub fn monthly_table(estimate: &CostEstimate, currency_symbol: &str) -> String {
    let mut table = format!(
        "{:<6}{:>16}{:>16}{:>16}\n{}\n",
        "Month",
        "Current system",
        "Heat pump",
        "Savings",
        "-".repeat(54)
    );
    for record in &estimate.monthly_breakdown {
        table.push_str(&format!(
            "{:<6}{:>16}{:>16}{:>16}\n",
            record.month.to_string(),
            format_currency(record.current_total, currency_symbol),
            format_currency(record.heat_pump_total, currency_symbol),
            format_currency(record.savings, currency_symbol),
        ));
    }

    table
}
