mod test_run_estimate;
