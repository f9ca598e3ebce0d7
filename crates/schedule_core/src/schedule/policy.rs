//! Decay policies as parameter objects.
//!
//! [`DecayPolicy`] bundles a decay method with its parameters so that a
//! schedule can be described in data (a TOML or JSON document) and
//! evaluated later against any [`ScheduleGenerator`].

use super::generator::ScheduleGenerator;
use super::piecewise::{check_arity, check_boundaries};
use crate::types::ScheduleError;
use num_traits::Float;

/// A decay method together with its parameters.
///
/// With the `serde` feature, policies are internally tagged by `policy`
/// using snake_case names, and the `staircase` / `cycle` flags default to
/// `false`.
///
/// # Examples
///
/// ```
/// use schedule_core::schedule::{DecayPolicy, ScheduleGenerator};
///
/// let generator = ScheduleGenerator::<f64>::new(4).unwrap();
/// let policy = DecayPolicy::GeometricDecay {
///     initial_value: 10.0,
///     decay: 0.5,
///     minimum_value: 1.0,
/// };
///
/// assert_eq!(policy.name(), "geometric_decay");
/// assert_eq!(policy.generate(&generator).unwrap(), vec![10.0, 10.0, 5.0, 2.5]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "policy", rename_all = "snake_case"))]
pub enum DecayPolicy<T> {
    /// See [`ScheduleGenerator::exponential_decay`].
    ExponentialDecay {
        /// Value at step 0
        initial_value: T,
        /// Multiplicative decay over the full horizon
        decay_rate: T,
        /// Quantise the exponent to whole intervals
        #[cfg_attr(feature = "serde", serde(default))]
        staircase: bool,
    },

    /// See [`ScheduleGenerator::cosine_decay`].
    CosineDecay {
        /// Value at step 0
        initial_value: T,
        /// Final value as a fraction of `initial_value`
        alpha: T,
    },

    /// See [`ScheduleGenerator::inverse_time_decay`].
    InverseTimeDecay {
        /// Value at step 0
        initial_value: T,
        /// Decay rate over the full horizon
        decay_rate: T,
        /// Quantise the decay progress to whole intervals
        #[cfg_attr(feature = "serde", serde(default))]
        staircase: bool,
    },

    /// See [`ScheduleGenerator::polynomial_decay`].
    PolynomialDecay {
        /// Value at step 0
        initial_value: T,
        /// Value at the end of the horizon
        end_value: T,
        /// Polynomial exponent
        power: T,
        /// Restart the decay at every multiple of the horizon
        #[cfg_attr(feature = "serde", serde(default))]
        cycle: bool,
    },

    /// See [`ScheduleGenerator::piecewise_constant_decay`].
    PiecewiseConstantDecay {
        /// Interior step indices separating the pieces
        boundaries: Vec<usize>,
        /// One value per piece
        values: Vec<T>,
    },

    /// See [`ScheduleGenerator::constant`].
    Constant {
        /// Value at every step
        value: T,
    },

    /// See [`ScheduleGenerator::geometric_decay`].
    GeometricDecay {
        /// Value at step 0
        initial_value: T,
        /// Ratio between consecutive elements
        decay: T,
        /// Lower bound of the schedule
        minimum_value: T,
    },

    /// See [`ScheduleGenerator::arithmetic_decay`].
    ArithmeticDecay {
        /// Value at step 0
        initial_value: T,
        /// Difference between consecutive elements
        decay: T,
        /// Lower bound of the schedule
        minimum_value: T,
    },

    /// See [`ScheduleGenerator::time_decay`].
    TimeDecay {
        /// Value at step 0
        initial_value: T,
        /// Decay rate applied to the previous value
        decay_rate: T,
    },

    /// See [`ScheduleGenerator::step_decay`].
    StepDecay {
        /// Value at step 0
        initial_value: T,
        /// Factor applied at every drop
        drop: T,
        /// Number of elements between drops
        i_drop: usize,
    },
}

impl<T: Float> DecayPolicy<T> {
    /// Names of all policies, in declaration order.
    pub const NAMES: [&'static str; 10] = [
        "exponential_decay",
        "cosine_decay",
        "inverse_time_decay",
        "polynomial_decay",
        "piecewise_constant_decay",
        "constant",
        "geometric_decay",
        "arithmetic_decay",
        "time_decay",
        "step_decay",
    ];

    /// Returns the snake_case name of this policy.
    pub fn name(&self) -> &'static str {
        match self {
            DecayPolicy::ExponentialDecay { .. } => "exponential_decay",
            DecayPolicy::CosineDecay { .. } => "cosine_decay",
            DecayPolicy::InverseTimeDecay { .. } => "inverse_time_decay",
            DecayPolicy::PolynomialDecay { .. } => "polynomial_decay",
            DecayPolicy::PiecewiseConstantDecay { .. } => "piecewise_constant_decay",
            DecayPolicy::Constant { .. } => "constant",
            DecayPolicy::GeometricDecay { .. } => "geometric_decay",
            DecayPolicy::ArithmeticDecay { .. } => "arithmetic_decay",
            DecayPolicy::TimeDecay { .. } => "time_decay",
            DecayPolicy::StepDecay { .. } => "step_decay",
        }
    }

    /// Check the policy's input shape without a generator.
    ///
    /// Only piecewise policies carry shape constraints: the arity of
    /// `values` and the ordering of `boundaries`. The upper bound on
    /// boundaries depends on the step count and is checked by
    /// [`DecayPolicy::generate`].
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if let DecayPolicy::PiecewiseConstantDecay { boundaries, values } = self {
            check_arity(boundaries, values.len())?;
            check_boundaries(boundaries, usize::MAX)?;
        }
        Ok(())
    }

    /// Evaluate this policy on `generator`.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<T>)` - A schedule of `generator.n_steps()` values
    /// * `Err(ScheduleError)` - Only for malformed piecewise policies
    pub fn generate(&self, generator: &ScheduleGenerator<T>) -> Result<Vec<T>, ScheduleError> {
        let sequence = match self {
            DecayPolicy::ExponentialDecay {
                initial_value,
                decay_rate,
                staircase,
            } => generator.exponential_decay(*initial_value, *decay_rate, *staircase),
            DecayPolicy::CosineDecay {
                initial_value,
                alpha,
            } => generator.cosine_decay(*initial_value, *alpha),
            DecayPolicy::InverseTimeDecay {
                initial_value,
                decay_rate,
                staircase,
            } => generator.inverse_time_decay(*initial_value, *decay_rate, *staircase),
            DecayPolicy::PolynomialDecay {
                initial_value,
                end_value,
                power,
                cycle,
            } => generator.polynomial_decay(*initial_value, *end_value, *power, *cycle),
            DecayPolicy::PiecewiseConstantDecay { boundaries, values } => {
                generator.piecewise_constant_decay(boundaries, values)?
            }
            DecayPolicy::Constant { value } => generator.constant(*value),
            DecayPolicy::GeometricDecay {
                initial_value,
                decay,
                minimum_value,
            } => generator.geometric_decay(*initial_value, *decay, *minimum_value),
            DecayPolicy::ArithmeticDecay {
                initial_value,
                decay,
                minimum_value,
            } => generator.arithmetic_decay(*initial_value, *decay, *minimum_value),
            DecayPolicy::TimeDecay {
                initial_value,
                decay_rate,
            } => generator.time_decay(*initial_value, *decay_rate),
            DecayPolicy::StepDecay {
                initial_value,
                drop,
                i_drop,
            } => generator.step_decay(*initial_value, *drop, *i_drop),
        };

        Ok(sequence)
    }
}

impl<T: Float> std::fmt::Display for DecayPolicy<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
