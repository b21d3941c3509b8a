use crate::plant::Plant;
use nalgebra as na;

/// A brushed DC motor with armature current and shaft speed as states.
#[derive(Copy, Clone, Debug)]
pub struct DcMotor {
    pub resistance: f64,
    pub inductance: f64,
    pub back_emf_constant: f64,
    pub torque_constant: f64,
    pub inertia: f64,
    pub viscous_friction: f64,
    pub supply_voltage: f64,
}

impl Default for DcMotor {
    /// A small geared bench motor; steady-state speed is 20 rad/s at full
    /// positive duty cycle.
    fn default() -> Self {
        Self {
            resistance: 1.0,
            inductance: 0.02,
            back_emf_constant: 0.1,
            torque_constant: 0.1,
            inertia: 0.02,
            viscous_friction: 0.05,
            supply_voltage: 12.0,
        }
    }
}

impl DcMotor {
    /// Implements the state-space realization of the armature circuit and
    /// rotor dynamics:
    /// ┌    ┐   ┌               ┐┌   ┐   ┌     ┐
    /// │ i' │ = │ -R/L    -Kₑ/L ││ i │ + │ 1/L │ v
    /// │ ω' │   │  Kₜ/J   -b/J  ││ ω │   │ 0   │
    /// └    ┘   └               ┘└   ┘   └     ┘
    ///     ┌      ┐┌   ┐
    /// ω = │ 0  1 ││ i │
    ///     └      ┘│ ω │
    ///             └   ┘
    pub fn f(&self, x: na::Vector2<f64>, voltage: f64) -> na::Vector2<f64> {
        let mat_a = na::Matrix2::new(
            -self.resistance / self.inductance,
            -self.back_emf_constant / self.inductance,
            self.torque_constant / self.inertia,
            -self.viscous_friction / self.inertia,
        );
        let mat_b = na::Vector2::new(1.0 / self.inductance, 0.0);

        mat_a * x + mat_b * voltage
    }

    pub fn h(&self, x: na::Vector2<f64>) -> f64 {
        x[1]
    }
}

/// Fixed-step simulation of a [`DcMotor`] behind the [`Plant`] interface.
///
/// The control output is a signed duty cycle in `[-1, 1]`, scaled by the
/// supply voltage; values outside that range saturate. The measurement is
/// the shaft speed in rad/s. Each call to `set_output` advances the model by
/// one step, so the driving loop's sample period must equal `step_size`.
pub struct SimMotor {
    model: DcMotor,
    state: na::Vector2<f64>,
    step_size: f64,
}

impl SimMotor {
    pub fn new(model: DcMotor, step_size: f64) -> Self {
        Self {
            model,
            state: na::Vector2::zeros(),
            step_size,
        }
    }

    pub fn model(&self) -> &DcMotor {
        &self.model
    }
}

impl Plant<f64> for SimMotor {
    fn initialize(&mut self) {
        self.state = na::Vector2::zeros();
    }

    fn set_output(&mut self, output: f64) {
        let duty = output.clamp(-1.0, 1.0);
        let voltage = duty * self.model.supply_voltage;
        self.state += self.model.f(self.state, voltage) * self.step_size;
    }

    fn measurement(&self) -> f64 {
        self.model.h(self.state)
    }
}
