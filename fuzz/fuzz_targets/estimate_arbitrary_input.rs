#![no_main]

use heat_pump_savings::estimate;
use heat_pump_savings::input::Input;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: Input| {
    let _ = estimate(&input);
});
