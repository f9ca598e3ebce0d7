//! Schedule generation.
//!
//! This module provides:
//! - [`ScheduleGenerator`]: the step-index base array and one method per decay policy
//! - [`DecayPolicy`]: a decay method and its parameters as a single value
//!
//! Decay methods are grouped by how they index the step axis:
//! - `continuous`: exponential, cosine, inverse time, polynomial (base step positions)
//! - `piecewise`: piecewise constant and constant (step index ranges)
//! - `recurrence`: geometric, arithmetic, time, step (element position)

mod continuous;
mod generator;
mod piecewise;
mod policy;
mod recurrence;

pub use generator::ScheduleGenerator;
pub use policy::DecayPolicy;
