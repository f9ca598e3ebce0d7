//! Index-driven decay policies.
//!
//! These schedules start at `initial_value` and are indexed by element
//! position rather than by the base step array. Element `i + 1` is derived
//! from decay index `i`.

use super::generator::{cast, ScheduleGenerator};
use num_traits::Float;

impl<T: Float> ScheduleGenerator<T> {
    /// Geometric decay floored at `minimum_value`.
    ///
    /// # Formula
    ///
    /// ```text
    /// value[0] = initial_value
    /// value[i] = max(initial_value * decay^(i - 1), minimum_value)    (i >= 1)
    /// ```
    ///
    /// # Example
    ///
    /// ```
    /// use schedule_core::schedule::ScheduleGenerator;
    ///
    /// let generator = ScheduleGenerator::<f64>::new(4).unwrap();
    /// let sequence = generator.geometric_decay(10.0, 0.5, 1.0);
    /// assert_eq!(sequence, vec![10.0, 10.0, 5.0, 2.5]);
    /// ```
    pub fn geometric_decay(&self, initial_value: T, decay: T, minimum_value: T) -> Vec<T> {
        self.seeded(initial_value, |i| {
            floor_at(initial_value * decay.powf(cast(i)), minimum_value)
        })
    }

    /// Arithmetic decay floored at `minimum_value`.
    ///
    /// # Formula
    ///
    /// ```text
    /// value[0] = initial_value
    /// value[i] = max(initial_value - decay * (i - 1), minimum_value)  (i >= 1)
    /// ```
    pub fn arithmetic_decay(&self, initial_value: T, decay: T, minimum_value: T) -> Vec<T> {
        self.seeded(initial_value, |i| {
            floor_at(initial_value - decay * cast(i), minimum_value)
        })
    }

    /// Time-based decay, each value derived from the previous one.
    ///
    /// # Formula
    ///
    /// ```text
    /// value[0] = initial_value
    /// value[i] = value[i - 1] / (1 + decay_rate * (i - 1))            (i >= 1)
    /// ```
    pub fn time_decay(&self, initial_value: T, decay_rate: T) -> Vec<T> {
        let mut previous = initial_value;
        self.seeded(initial_value, |i| {
            previous = previous / (T::one() + decay_rate * cast(i));
            previous
        })
    }

    /// Step decay: multiply by `drop` once every `i_drop` elements.
    ///
    /// `i_drop` is divided in floating point, so `i_drop == 0` yields an
    /// infinite exponent instead of a panic.
    ///
    /// # Formula
    ///
    /// ```text
    /// value[0] = initial_value
    /// value[i] = initial_value * drop^floor(i / i_drop)               (i >= 1)
    /// ```
    ///
    /// # Example
    ///
    /// ```
    /// use schedule_core::schedule::ScheduleGenerator;
    ///
    /// let generator = ScheduleGenerator::<f64>::new(5).unwrap();
    /// let sequence = generator.step_decay(1.0, 0.5, 2);
    /// assert_eq!(sequence, vec![1.0, 1.0, 0.5, 0.5, 0.25]);
    /// ```
    pub fn step_decay(&self, initial_value: T, drop: T, i_drop: usize) -> Vec<T> {
        let period: T = cast(i_drop);
        self.seeded(initial_value, |i| {
            let drops = (cast::<T>(i + 1) / period).floor();
            initial_value * drop.powf(drops)
        })
    }
}

/// `max(value, minimum)` that keeps NaN from either side.
#[inline]
fn floor_at<T: Float>(value: T, minimum: T) -> T {
    if value.is_nan() || minimum.is_nan() {
        T::nan()
    } else {
        value.max(minimum)
    }
}
