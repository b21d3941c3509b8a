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

/// A minimal capability interface over the actuator/sensor pair driven by a
/// control loop.
///
/// The controller itself never touches this trait: the driving loop reads the
/// measurement, calls [`PidController::compute`](crate::pid::PidController::compute),
/// and forwards the bounded output to [`set_output`](Plant::set_output). The
/// indirection keeps control loops and their tests decoupled from any
/// concrete hardware or simulation model. No dynamic dispatch is required;
/// loops are typically generic over the plant.
///
/// For a motor drive the output is typically a signed duty cycle in
/// `[-1, 1]` and the measurement the encoder speed; this trait imposes no
/// units of its own.
pub trait Plant<T> {
    /// Brings the actuator and sensor into a known idle state.
    fn initialize(&mut self);

    /// Applies a control output. Driving loops are responsible for keeping
    /// the value within the actuator's accepted range.
    fn set_output(&mut self, output: T);

    /// Reads the current process variable.
    fn measurement(&self) -> T;
}
