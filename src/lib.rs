pub mod core;
pub mod errors;
pub mod input;
pub mod output;

#[macro_use]
extern crate is_close;

pub use crate::core::estimator::{estimate, CostEstimate, MonthlyRecord, Savings};
use crate::errors::{EstimatorError, PostprocessingError};
use crate::input::{ingest_for_processing, Input, HOME_SIZE_BOUNDS, SEER_BOUNDS};
use crate::output::Output;
use csv::WriterBuilder;
use std::io::{Read, Write};
use tracing::{debug, instrument, warn};

/// Read an input document, estimate costs and savings for it and write the results
/// to the given output.
#[instrument(skip_all)]
pub fn run_estimate(
    input: impl Read,
    output: impl Output,
) -> Result<CostEstimate, EstimatorError> {
    let input = ingest_for_processing(input)?;
    debug!(
        ?input,
        "Estimating from {}",
        if input.manual_mode {
            "manually entered annual costs"
        } else {
            "floor area"
        }
    );

    for warning in unusual_input_warnings(&input) {
        warn!("{warning}");
    }

    let cost_estimate = estimate(&input);

    for warning in monthly_breakdown_mismatches(&cost_estimate) {
        warn!("{warning}");
    }

    if !output.is_noop() {
        write_summary_file(&output, &cost_estimate).map_err(PostprocessingError::new)?;
        write_monthly_breakdown_file(&output, &cost_estimate)
            .map_err(PostprocessingError::new)?;
    }

    Ok(cost_estimate)
}

/// Describe anything in the input a host's controls would not have offered, or that
/// makes the estimate meaningless. None of it stops the estimate being made.
pub(crate) fn unusual_input_warnings(input: &Input) -> Vec<String> {
    let has_cooling = input.cooling_system.provides_cooling();
    let mut warnings = vec![];

    if !input.manual_mode && !HOME_SIZE_BOUNDS.contains(input.home_size) {
        warnings.push(format!(
            "Home size of {} sq ft is outside the expected range of {} to {} sq ft in steps of {}",
            input.home_size, HOME_SIZE_BOUNDS.min, HOME_SIZE_BOUNDS.max, HOME_SIZE_BOUNDS.step
        ));
    }
    if has_cooling && !SEER_BOUNDS.contains(input.current_seer) {
        warnings.push(format!(
            "Current SEER of {} is outside the expected range of {} to {} in steps of {}",
            input.current_seer, SEER_BOUNDS.min, SEER_BOUNDS.max, SEER_BOUNDS.step
        ));
    }
    if !input.manual_mode && has_cooling && input.current_seer <= 0. {
        warnings.push(format!(
            "Current SEER of {} is not positive, so the current cooling cost cannot be meaningfully estimated",
            input.current_seer
        ));
    }

    warnings
}

/// Describe any system whose monthly breakdown does not add back up to its finite
/// annual total.
pub(crate) fn monthly_breakdown_mismatches(estimate: &CostEstimate) -> Vec<String> {
    let annual_totals = [
        ("current system", estimate.current_total_cost()),
        ("heat pump", estimate.heat_pump_total_cost()),
    ];
    let monthly_sums = [
        estimate
            .monthly_breakdown
            .iter()
            .map(|record| record.current_total)
            .sum::<f64>(),
        estimate
            .monthly_breakdown
            .iter()
            .map(|record| record.heat_pump_total)
            .sum::<f64>(),
    ];

    annual_totals
        .into_iter()
        .zip(monthly_sums)
        .filter(|((_, annual_total), monthly_sum)| {
            annual_total.is_finite()
                && !is_close!(*monthly_sum, *annual_total, rel_tol = 1e-6, abs_tol = 1e-9)
        })
        .map(|((system, annual_total), monthly_sum)| {
            format!(
                "Monthly breakdown for the {system} sums to {monthly_sum} but the annual total is {annual_total}"
            )
        })
        .collect()
}

fn write_summary_file(output: &impl Output, estimate: &CostEstimate) -> anyhow::Result<()> {
    let mut writer = output.writer_for_location_key("summary.json")?;
    serde_json::to_writer_pretty(&mut writer, estimate)?;
    writer.flush()?;

    Ok(())
}

fn write_monthly_breakdown_file(
    output: &impl Output,
    estimate: &CostEstimate,
) -> anyhow::Result<()> {
    let writer = output.writer_for_location_key("monthly.csv")?;
    let mut writer = WriterBuilder::new().flexible(true).from_writer(writer);

    writer.write_record(["Month", "Current system", "Heat pump", "Savings"])?;
    writer.write_record(["", "[currency]", "[currency]", "[currency]"])?;

    for MonthlyRecord {
        month,
        current_total,
        heat_pump_total,
        savings,
    } in &estimate.monthly_breakdown
    {
        writer.write_record([
            month.to_string(),
            current_total.to_string(),
            heat_pump_total.to_string(),
            savings.to_string(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests;
