mod test_run_estimate {
    use crate::errors::EstimatorError;
    use crate::input::{CoolingSystem, Input};
    use crate::output::{Output, SinkOutput};
    use crate::{estimate, monthly_breakdown_mismatches, run_estimate, unusual_input_warnings};
    use anyhow::anyhow;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io::{self, Cursor, Write};
    use std::rc::Rc;

    #[derive(Clone, Debug, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// An output keeping everything written to it in memory, by location key.
    #[derive(Debug, Default)]
    struct MemoryOutput {
        files: RefCell<HashMap<String, SharedBuffer>>,
    }

    impl MemoryOutput {
        fn contents(&self, location_key: &str) -> String {
            let files = self.files.borrow();
            let bytes = files[location_key].0.borrow().clone();
            String::from_utf8(bytes).unwrap()
        }
    }

    impl Output for &MemoryOutput {
        fn writer_for_location_key(&self, location_key: &str) -> anyhow::Result<impl Write> {
            Ok(self
                .files
                .borrow_mut()
                .entry(location_key.to_string())
                .or_default()
                .clone())
        }
    }

    #[derive(Debug)]
    struct FailingOutput;

    impl Output for FailingOutput {
        fn writer_for_location_key(&self, location_key: &str) -> anyhow::Result<impl Write> {
            Err::<io::Sink, _>(anyhow!("No space left to write {location_key}"))
        }
    }

    const INPUT: &str = r#"{
        "home_size": 1500,
        "heating_system": "oil_furnace",
        "cooling_system": "central_ac",
        "electricity_rate": 0.15,
        "oil_rate": 1.20,
        "gas_rate": 1.50,
        "current_seer": 10
    }"#;

    #[rstest]
    fn test_run_estimate_returns_estimate() {
        let result = run_estimate(Cursor::new(INPUT), SinkOutput).unwrap();

        assert_eq!(result, estimate(&Input::default()));
        assert_relative_eq!(result.current_heating_cost, 3000., max_relative = 1e-12);
    }

    #[rstest]
    fn test_run_estimate_writes_summary() {
        let output = MemoryOutput::default();
        let result = run_estimate(Cursor::new(INPUT), &output).unwrap();

        let summary: serde_json::Value =
            serde_json::from_str(&output.contents("summary.json")).unwrap();
        assert_relative_eq!(
            summary["current_heating_cost"].as_f64().unwrap(),
            result.current_heating_cost,
            max_relative = 1e-12
        );
        assert_eq!(summary["monthly_breakdown"].as_array().unwrap().len(), 12);
        assert_eq!(summary["monthly_breakdown"][0]["month"], "Jan");
        assert!(summary["annual_savings"]["total"].is_number());
    }

    #[rstest]
    fn test_run_estimate_writes_monthly_breakdown() {
        let output = MemoryOutput::default();
        let result = run_estimate(Cursor::new(INPUT), &output).unwrap();

        let csv = output.contents("monthly.csv");
        let lines = csv.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "Month,Current system,Heat pump,Savings");
        assert_eq!(lines[1], ",[currency],[currency],[currency]");

        let july = lines[2 + 6].split(',').collect::<Vec<_>>();
        assert_eq!(july[0], "Jul");
        assert_relative_eq!(
            july[1].parse::<f64>().unwrap(),
            result.monthly_breakdown[6].current_total,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            july[3].parse::<f64>().unwrap(),
            result.monthly_breakdown[6].savings,
            max_relative = 1e-12
        );
    }

    #[rstest]
    fn test_invalid_input_is_invalid_request() {
        let result = run_estimate(Cursor::new(r#"{"heating_system": "coal"}"#), SinkOutput);

        assert!(matches!(result, Err(EstimatorError::InvalidRequest(_))));
    }

    #[rstest]
    fn test_failure_to_write_is_postprocessing_error() {
        let result = run_estimate(Cursor::new(INPUT), FailingOutput);

        assert!(matches!(
            result,
            Err(EstimatorError::ErrorInPostprocessing(_))
        ));
    }

    #[rstest]
    fn test_out_of_range_input_still_estimated() {
        let result = run_estimate(
            Cursor::new(r#"{"home_size": 12000, "current_seer": 0}"#),
            SinkOutput,
        )
        .unwrap();

        assert!(result.current_heating_cost > 0.);
        assert_eq!(result.current_cooling_cost, f64::INFINITY);
    }

    #[rstest]
    fn test_null_rate_reads_as_zero() {
        let result = run_estimate(Cursor::new(r#"{"gas_rate": null}"#), SinkOutput).unwrap();

        assert_eq!(
            result,
            estimate(&Input {
                gas_rate: 0.,
                ..Default::default()
            })
        );
    }

    #[rstest]
    fn test_typical_input_raises_no_warnings() {
        assert_eq!(unusual_input_warnings(&Input::default()), Vec::<String>::new());
    }

    #[rstest]
    #[case(Input { home_size: 12_000., ..Default::default() }, &["Home size of 12000 sq ft is outside"])]
    #[case(Input { current_seer: 20., ..Default::default() }, &["Current SEER of 20 is outside"])]
    #[case(
        Input { current_seer: 0., ..Default::default() },
        &["Current SEER of 0 is outside", "Current SEER of 0 is not positive"]
    )]
    fn test_unusual_input_warnings(#[case] input: Input, #[case] expected_starts: &[&str]) {
        let warnings = unusual_input_warnings(&input);

        assert_eq!(warnings.len(), expected_starts.len());
        for (warning, expected_start) in warnings.iter().zip(expected_starts) {
            assert!(
                warning.starts_with(expected_start),
                "{warning} does not start with {expected_start}"
            );
        }
    }

    #[rstest]
    fn test_home_size_warning_gives_control_range() {
        let warnings = unusual_input_warnings(&Input {
            home_size: 100.,
            ..Default::default()
        });

        assert_eq!(
            warnings,
            ["Home size of 100 sq ft is outside the expected range of 500 to 4000 sq ft in steps of 100"]
        );
    }

    #[rstest]
    fn test_known_bills_ignore_home_size_and_zero_seer_formula_warning() {
        let input = Input {
            home_size: 12_000.,
            current_seer: 0.,
            manual_mode: true,
            ..Default::default()
        };

        let warnings = unusual_input_warnings(&input);

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Current SEER of 0 is outside"));
    }

    #[rstest]
    fn test_no_cooling_ignores_seer() {
        let input = Input {
            cooling_system: CoolingSystem::NoCooling,
            current_seer: 0.,
            ..Default::default()
        };

        assert!(unusual_input_warnings(&input).is_empty());
    }

    #[rstest]
    fn test_monthly_breakdown_reconciles() {
        assert!(monthly_breakdown_mismatches(&estimate(&Input::default())).is_empty());
    }

    #[rstest]
    fn test_monthly_breakdown_mismatch_reported() {
        let mut cost_estimate = estimate(&Input::default());
        cost_estimate.monthly_breakdown[0].current_total += 100.;

        let mismatches = monthly_breakdown_mismatches(&cost_estimate);

        assert_eq!(mismatches.len(), 1);
        assert!(mismatches[0].starts_with("Monthly breakdown for the current system"));
    }

    #[rstest]
    fn test_unbounded_totals_not_reconciled() {
        let cost_estimate = estimate(&Input {
            current_seer: 0.,
            ..Default::default()
        });

        assert_eq!(cost_estimate.current_total_cost(), f64::INFINITY);
        assert!(monthly_breakdown_mismatches(&cost_estimate).is_empty());
    }
}
