#![warn(missing_docs)]

//! # Fixed-Sample-Rate PID Controller Library
//!
//! This library provides a PID (Proportional-Integral-Derivative) controller
//! designed for closed-loop actuator control at a fixed sample rate, e.g.
//! motor speed regulation from a periodic timer interrupt or real-time task.
//!
//! ## Features
//!
//! - Respects the best practices for PID control:
//!   - Configurable and fully validated gains, limits, and sample period.
//!   - Anti reset-windup: the integrator accumulator is clamped to its own
//!     bounds, independently of the final output clamp, so a saturated
//!     actuator never causes unbounded integral buildup.
//!   - Derivative-on-measurement to eliminate derivative kick on setpoint
//!     changes.
//!   - Optional exponential low-pass filtering of the derivative term.
//!
//! - Explicit support for **fixed-sample-rate** operation: the caller invokes
//!   [`compute`](pid::PidController::compute) once per configured sample
//!   period. The controller performs no timing detection of its own; timing
//!   fidelity is a caller contract.
//!
//! - Pure, synchronous, allocation-free computation, usable from `no_std`
//!   targets (disable the default `std` feature).
//!
//! ## Usage
//!
//! ### Standard construction
//!
//! Gains, sample period, and output limits; anti-windup bounds are derived
//! from the output limits and the integral gain.
//!
//! ```rust
//! use sampled_pid::pid::{PidConfig, PidController};
//!
//! let config = PidConfig::new(
//!     0.05, // kp
//!     0.2,  // ki
//!     0.0,  // kd
//!     0.01, // sample period, seconds
//!     -1.0, // output min
//!     1.0,  // output max
//! )
//! .expect("invalid PID config");
//!
//! let mut pid = PidController::new(config);
//!
//! let setpoint = 10.0;
//! let measurement = 0.0;
//! let output = pid.compute(setpoint, measurement);
//! assert!((-1.0..=1.0).contains(&output));
//! ```
//!
//! ### Advanced construction
//!
//! Explicit integrator limits and derivative filtering through the builder.
//!
//! ```rust
//! use sampled_pid::pid::{PidConfigBuilder, PidController};
//!
//! let config = PidConfigBuilder::default()
//!     .kp(2.0)
//!     .ki(0.5)
//!     .kd(0.1)
//!     .sample_period(0.01)
//!     .output_limits(-1.0, 1.0)
//!     .integrator_limits(-0.5, 0.5)
//!     .filter_coefficient(0.7)
//!     .build()
//!     .expect("invalid PID config");
//!
//! let mut pid = PidController::new(config);
//! let _ = pid.compute(1.0, 0.2);
//!
//! // After a large setpoint jump or a pause, drop the stale loop state.
//! pid.reset();
//! assert_eq!(pid.integrator(), 0.0);
//! ```
//!
//! ### Driving a plant
//!
//! A control loop owns the controller, a [`plant::Plant`] implementation,
//! and the schedule. A desktop simulation of a DC motor is available behind
//! the `simulation` feature; see `demos/step_response.rs`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

/// The main module for the PID controller library.
pub mod pid;

/// The module defining the actuator/sensor interface consumed by control
/// loops.
pub mod plant;

#[doc(hidden)]
#[cfg(feature = "simulation")]
pub mod sim;

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
