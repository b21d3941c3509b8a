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

use num_traits::float::FloatCore;

/// Clamps `value` into `[lo, hi]`.
///
/// Returns `hi` if `value > hi`, `lo` if `value < lo`, and `value` otherwise.
/// Callers must guarantee `lo <= hi`; configuration validation enforces this
/// for every clamp site in this module.
fn clamp<T: PartialOrd>(value: T, lo: T, hi: T) -> T {
    if value > hi {
        hi
    } else if value < lo {
        lo
    } else {
        value
    }
}

/// Errors raised when validating a PID configuration.
///
/// Invalid configuration is a programming error, not a runtime condition:
/// once a `PidConfig` has been constructed, `compute` and `reset` never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum PidConfigError {
    /// The proportional gain is negative or not finite.
    #[cfg_attr(
        feature = "std",
        error("proportional gain must be finite and non-negative")
    )]
    InvalidProportionalGain,

    /// The integral gain is negative or not finite.
    #[cfg_attr(
        feature = "std",
        error("integral gain must be finite and non-negative")
    )]
    InvalidIntegralGain,

    /// The derivative gain is negative or not finite.
    #[cfg_attr(
        feature = "std",
        error("derivative gain must be finite and non-negative")
    )]
    InvalidDerivativeGain,

    /// The sample period is zero, negative, or not finite.
    #[cfg_attr(
        feature = "std",
        error("sample period must be finite and strictly positive")
    )]
    InvalidSamplePeriod,

    /// The output limits are NaN or not strictly ordered.
    #[cfg_attr(
        feature = "std",
        error("output limits must satisfy output_min < output_max")
    )]
    InvalidOutputLimits,

    /// The integrator limits are NaN or not strictly ordered.
    #[cfg_attr(
        feature = "std",
        error("integrator limits must satisfy integrator_min < integrator_max")
    )]
    InvalidIntegratorLimits,

    /// The derivative filter coefficient is not finite.
    #[cfg_attr(
        feature = "std",
        error("derivative filter coefficient must be finite")
    )]
    InvalidFilterCoefficient,
}

/// Validated configuration of a PID controller.
///
/// A configuration is immutable once constructed: tuning parameters are set
/// exactly once, either through [`PidConfig::new`] (standard construction,
/// with anti-windup bounds derived from the output limits) or through
/// [`PidConfigBuilder`] (advanced construction, with explicit integrator
/// limits and derivative filtering).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PidConfig<T> {
    /// Proportional gain coefficient.
    kp: T,

    /// Integral gain coefficient.
    ki: T,

    /// Derivative gain coefficient.
    kd: T,

    /// Sample period in seconds. The caller must invoke `compute` at
    /// intervals equal to this period; irregular intervals silently degrade
    /// the integral and derivative terms.
    sample_period: T,

    /// Minimum output value of the PID controller.
    output_min: T,

    /// Maximum output value of the PID controller.
    output_max: T,

    /// Lower anti-windup bound on the integrator accumulator.
    integrator_min: T,

    /// Upper anti-windup bound on the integrator accumulator.
    integrator_max: T,

    /// Exponential smoothing coefficient for the derivative term, in [0, 1].
    /// Zero disables filtering.
    filter_coefficient: T,
}

impl<T: FloatCore> PidConfig<T> {
    /// Standard construction from gains, sample period, and output limits.
    ///
    /// Anti-windup bounds on the integrator are derived as
    /// `output_min / ki` and `output_max / ki` when `ki` is nonzero. When
    /// `ki` is zero the integral term is inert and the bounds fall back to
    /// the output limits. Derivative filtering is disabled.
    ///
    /// # Errors
    /// Returns a [`PidConfigError`] if any gain is negative or non-finite,
    /// the sample period is not strictly positive, or the output limits are
    /// not strictly ordered.
    ///
    /// # Example
    /// ```
    /// use sampled_pid::pid::PidConfig;
    ///
    /// let config = PidConfig::new(2.0, 0.5, 0.1, 0.01, -1.0, 1.0).unwrap();
    /// assert_eq!(config.integrator_max(), 1.0 / 0.5);
    /// ```
    pub fn new(
        kp: T,
        ki: T,
        kd: T,
        sample_period: T,
        output_min: T,
        output_max: T,
    ) -> Result<Self, PidConfigError> {
        PidConfigBuilder::default()
            .kp(kp)
            .ki(ki)
            .kd(kd)
            .sample_period(sample_period)
            .output_limits(output_min, output_max)
            .build()
    }

    /// Returns the proportional gain.
    pub fn kp(&self) -> T {
        self.kp
    }

    /// Returns the integral gain.
    pub fn ki(&self) -> T {
        self.ki
    }

    /// Returns the derivative gain.
    pub fn kd(&self) -> T {
        self.kd
    }

    /// Returns the sample period in seconds.
    pub fn sample_period(&self) -> T {
        self.sample_period
    }

    /// Returns the minimum output limit.
    pub fn output_min(&self) -> T {
        self.output_min
    }

    /// Returns the maximum output limit.
    pub fn output_max(&self) -> T {
        self.output_max
    }

    /// Returns the lower anti-windup bound on the integrator.
    pub fn integrator_min(&self) -> T {
        self.integrator_min
    }

    /// Returns the upper anti-windup bound on the integrator.
    pub fn integrator_max(&self) -> T {
        self.integrator_max
    }

    /// Returns the derivative filter coefficient.
    pub fn filter_coefficient(&self) -> T {
        self.filter_coefficient
    }
}

/// Builder for [`PidConfig`], covering the advanced construction mode.
///
/// Integrator limits and the derivative filter coefficient are optional;
/// when left unset they take the same defaults as standard construction.
/// All validation happens in [`build`](PidConfigBuilder::build).
///
/// # Example
/// ```
/// use sampled_pid::pid::PidConfigBuilder;
///
/// let config = PidConfigBuilder::default()
///     .kp(2.0)
///     .ki(0.5)
///     .sample_period(0.01)
///     .output_limits(-1.0, 1.0)
///     .integrator_limits(-0.5, 0.5)
///     .filter_coefficient(0.7)
///     .build()
///     .expect("invalid PID config");
/// assert_eq!(config.integrator_max(), 0.5);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct PidConfigBuilder<T> {
    kp: T,
    ki: T,
    kd: T,
    sample_period: Option<T>,
    output_min: T,
    output_max: T,
    integrator_limits: Option<(T, T)>,
    filter_coefficient: T,
}

impl<T: FloatCore> Default for PidConfigBuilder<T> {
    /// Unity proportional gain, no integral or derivative action, unbounded
    /// output, and no filtering. The sample period has no default and must
    /// be supplied before building.
    fn default() -> Self {
        Self {
            kp: T::one(),
            ki: T::zero(),
            kd: T::zero(),
            sample_period: None,
            output_min: -T::infinity(),
            output_max: T::infinity(),
            integrator_limits: None,
            filter_coefficient: T::zero(),
        }
    }
}

impl<T: FloatCore> PidConfigBuilder<T> {
    /// Sets the proportional gain.
    pub fn kp(mut self, kp: T) -> Self {
        self.kp = kp;
        self
    }

    /// Sets the integral gain.
    pub fn ki(mut self, ki: T) -> Self {
        self.ki = ki;
        self
    }

    /// Sets the derivative gain.
    pub fn kd(mut self, kd: T) -> Self {
        self.kd = kd;
        self
    }

    /// Sets the sample period in seconds.
    pub fn sample_period(mut self, sample_period: T) -> Self {
        self.sample_period = Some(sample_period);
        self
    }

    /// Sets the minimum and maximum output limits.
    ///
    /// Limits may be infinite to disable output clamping.
    pub fn output_limits(mut self, output_min: T, output_max: T) -> Self {
        self.output_min = output_min;
        self.output_max = output_max;
        self
    }

    /// Sets explicit anti-windup bounds on the integrator accumulator,
    /// overriding the bounds derived from the output limits.
    pub fn integrator_limits(mut self, integrator_min: T, integrator_max: T) -> Self {
        self.integrator_limits = Some((integrator_min, integrator_max));
        self
    }

    /// Sets the exponential smoothing coefficient for the derivative term.
    ///
    /// Finite values are clamped into `[0, 1]` at build time; zero disables
    /// filtering.
    pub fn filter_coefficient(mut self, filter_coefficient: T) -> Self {
        self.filter_coefficient = filter_coefficient;
        self
    }

    /// Validates the accumulated parameters and produces a [`PidConfig`].
    ///
    /// # Errors
    /// - [`PidConfigError::InvalidProportionalGain`],
    ///   [`PidConfigError::InvalidIntegralGain`], or
    ///   [`PidConfigError::InvalidDerivativeGain`] if a gain is negative or
    ///   non-finite.
    /// - [`PidConfigError::InvalidSamplePeriod`] if the sample period is
    ///   unset, non-positive, or non-finite.
    /// - [`PidConfigError::InvalidOutputLimits`] if the output limits are
    ///   NaN or not strictly ordered.
    /// - [`PidConfigError::InvalidIntegratorLimits`] if explicit integrator
    ///   limits are NaN or not strictly ordered.
    /// - [`PidConfigError::InvalidFilterCoefficient`] if the filter
    ///   coefficient is non-finite.
    pub fn build(self) -> Result<PidConfig<T>, PidConfigError> {
        if self.kp < T::zero() || !self.kp.is_finite() {
            return Err(PidConfigError::InvalidProportionalGain);
        }
        if self.ki < T::zero() || !self.ki.is_finite() {
            return Err(PidConfigError::InvalidIntegralGain);
        }
        if self.kd < T::zero() || !self.kd.is_finite() {
            return Err(PidConfigError::InvalidDerivativeGain);
        }

        let sample_period = self
            .sample_period
            .ok_or(PidConfigError::InvalidSamplePeriod)?;
        if sample_period <= T::zero() || !sample_period.is_finite() {
            return Err(PidConfigError::InvalidSamplePeriod);
        }

        if !(self.output_min < self.output_max) {
            return Err(PidConfigError::InvalidOutputLimits);
        }

        let (integrator_min, integrator_max) = match self.integrator_limits {
            Some((lo, hi)) => {
                if !(lo < hi) {
                    return Err(PidConfigError::InvalidIntegratorLimits);
                }
                (lo, hi)
            }
            // The derived bounds keep the integral contribution within the
            // output limits. With zero ki the integral term is inert and the
            // output limits stand in as structurally valid bounds.
            None if self.ki != T::zero() => {
                (self.output_min / self.ki, self.output_max / self.ki)
            }
            None => (self.output_min, self.output_max),
        };

        if self.filter_coefficient.is_nan() || self.filter_coefficient.is_infinite() {
            return Err(PidConfigError::InvalidFilterCoefficient);
        }
        let filter_coefficient = clamp(self.filter_coefficient, T::zero(), T::one());

        Ok(PidConfig {
            kp: self.kp,
            ki: self.ki,
            kd: self.kd,
            sample_period,
            output_min: self.output_min,
            output_max: self.output_max,
            integrator_min,
            integrator_max,
            filter_coefficient,
        })
    }
}

/// A fixed-sample-rate PID (Proportional-Integral-Derivative) controller.
///
/// The controller computes a bounded control output from the error between a
/// setpoint and a measured process variable. It owns its per-loop state
/// (integrator accumulator, last measurement, filtered derivative), so one
/// instance serves exactly one control loop; independent instances share
/// nothing and may run in parallel.
///
/// [`compute`](PidController::compute) must be invoked once per configured
/// sample period by an external scheduler. The controller performs no timing
/// detection of its own: irregular invocation silently degrades the integral
/// and derivative terms.
///
/// # Example
/// ```
/// use sampled_pid::pid::{PidConfig, PidController};
///
/// let config = PidConfig::new(2.0, 0.0, 0.0, 0.01, -1.0, 1.0).unwrap();
/// let mut pid = PidController::new(config);
///
/// let output = pid.compute(0.25, 0.0);
/// assert_eq!(output, 0.5);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct PidController<T> {
    config: PidConfig<T>,
    integrator: T,
    last_measurement: T,
    filtered_derivative: T,
    last_error: T,
}

impl<T: FloatCore> PidController<T> {
    /// Creates a controller with all state zeroed.
    pub fn new(config: PidConfig<T>) -> Self {
        Self {
            config,
            integrator: T::zero(),
            last_measurement: T::zero(),
            filtered_derivative: T::zero(),
            last_error: T::zero(),
        }
    }

    /// Returns the controller configuration.
    pub fn config(&self) -> &PidConfig<T> {
        &self.config
    }

    /// Runs one control step and returns the bounded output.
    ///
    /// The derivative term is computed on the measurement rather than on the
    /// error, so a step change in the setpoint produces no derivative kick.
    /// The integrator accumulator is clamped to its anti-windup bounds before
    /// the output is clamped to the output limits; the two clamps are
    /// independent, so a saturated actuator cannot cause unbounded integral
    /// buildup.
    ///
    /// This method never fails: all inputs are unconstrained reals and
    /// saturation is the designed steady-state behavior.
    pub fn compute(&mut self, setpoint: T, measurement: T) -> T {
        let error = setpoint - measurement;

        let p_term = self.config.kp * error;

        self.integrator = clamp(
            self.integrator + error * self.config.sample_period,
            self.config.integrator_min,
            self.config.integrator_max,
        );
        let i_term = self.config.ki * self.integrator;

        // Negative backward difference of the measurement. With a zero
        // filter coefficient the smoothing update passes the raw derivative
        // through unchanged.
        let raw_derivative =
            -(measurement - self.last_measurement) / self.config.sample_period;
        self.filtered_derivative = self.config.filter_coefficient * self.filtered_derivative
            + (T::one() - self.config.filter_coefficient) * raw_derivative;
        let d_term = self.config.kd * self.filtered_derivative;

        let output = clamp(
            p_term + i_term + d_term,
            self.config.output_min,
            self.config.output_max,
        );

        self.last_error = error;
        self.last_measurement = measurement;
        output
    }

    /// Zeroes the integrator, last error, last measurement, and filtered
    /// derivative. Configuration is untouched.
    ///
    /// Safe to call between any two `compute` calls. Use it when resuming
    /// after inactivity, after a large setpoint jump where stale integral and
    /// derivative history would mislead, or when recovering from an external
    /// fault.
    pub fn reset(&mut self) {
        self.integrator = T::zero();
        self.last_measurement = T::zero();
        self.filtered_derivative = T::zero();
        self.last_error = T::zero();
    }

    /// Returns the integrator accumulator, always within the configured
    /// anti-windup bounds after any `compute` call.
    pub fn integrator(&self) -> T {
        self.integrator
    }

    /// Returns the error recorded by the last `compute` call. Retained for
    /// diagnostics; it does not feed back into the output calculation.
    pub fn last_error(&self) -> T {
        self.last_error
    }

    /// Returns the process-variable value recorded by the last `compute`
    /// call.
    pub fn last_measurement(&self) -> T {
        self.last_measurement
    }
}
