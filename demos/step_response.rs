//! Step response of a simulated DC motor under PID speed regulation.
//! This demo requires the `--features simulation` flag to be enabled.
//!
//! Emits one CSV row per control step on stdout
//! (`step,setpoint,measurement,output`), suitable for plotting:
//!
//! ```sh
//! cargo run --example step_response --features simulation > log.csv
//! ```
// Copyright © 2026 The sampled_pid Developers
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense,
// and/or sell copies of the Software, and to permit persons to whom the
// Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included
// in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES
// OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.
// IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM,
// DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT,
// TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE
// OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use sampled_pid::pid::{PidConfigBuilder, PidController};
use sampled_pid::plant::Plant;
use sampled_pid::sim::{DcMotor, SimMotor};

const SAMPLE_PERIOD: f64 = 0.01; // 100 Hz control loop
const NUM_STEPS: usize = 1000; // 10 seconds
const SETPOINT: f64 = 10.0; // rad/s

fn main() {
    let config = PidConfigBuilder::default()
        .kp(0.05)
        .ki(0.2)
        .kd(0.002)
        .sample_period(SAMPLE_PERIOD)
        .output_limits(-1.0, 1.0)
        .filter_coefficient(0.5)
        .build()
        .expect("invalid PID config");
    let mut pid = PidController::new(config);

    let mut motor = SimMotor::new(DcMotor::default(), SAMPLE_PERIOD);
    motor.initialize();

    println!("step,setpoint,measurement,output");
    for step in 0..NUM_STEPS {
        let measurement = motor.measurement();
        let output = pid.compute(SETPOINT, measurement);
        motor.set_output(output);

        println!("{},{:.4},{:.4},{:.4}", step, SETPOINT, measurement, output);
    }
}
