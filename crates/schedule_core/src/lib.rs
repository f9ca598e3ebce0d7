//! # schedule_core: Deterministic Hyperparameter Schedules
//!
//! Generates the sequence of values a scalar hyperparameter (typically a
//! learning rate) takes over a fixed number of optimisation steps.
//!
//! A [`ScheduleGenerator`](schedule::ScheduleGenerator) is built once per
//! run from the step count. It owns the base array of step positions and
//! exposes one method per decay policy; every call returns a new `Vec` of
//! `n_steps` values and leaves the generator untouched, so a single
//! generator can be shared freely across threads.
//!
//! ## Policies
//!
//! | Method | Indexed by |
//! |---|---|
//! | `exponential_decay`, `cosine_decay`, `inverse_time_decay`, `polynomial_decay` | base step positions |
//! | `piecewise_constant_decay`, `constant` | step index ranges |
//! | `geometric_decay`, `arithmetic_decay`, `time_decay`, `step_decay` | element position |
//!
//! ## Usage Examples
//!
//! ```rust
//! use schedule_core::schedule::{DecayPolicy, ScheduleGenerator};
//!
//! let generator = ScheduleGenerator::<f64>::new(6).unwrap();
//!
//! // Direct method call
//! let lr = generator.cosine_decay(0.1, 0.0);
//! assert_eq!(lr.len(), 6);
//!
//! // Piecewise constant is the only policy that validates its input
//! let lr = generator
//!     .piecewise_constant_decay(&[2, 4], &[1.0, 2.0, 3.0])
//!     .unwrap();
//! assert_eq!(lr, vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
//!
//! // The same schedule described as data
//! let policy = DecayPolicy::PiecewiseConstantDecay {
//!     boundaries: vec![2, 4],
//!     values: vec![1.0, 2.0, 3.0],
//! };
//! assert_eq!(policy.generate(&generator).unwrap(), lr);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `DecayPolicy` and `ScheduleError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod schedule;
pub mod types;

pub use schedule::{DecayPolicy, ScheduleGenerator};
pub use types::ScheduleError;
