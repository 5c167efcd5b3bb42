//! Library to calculate the "Sunny" star rating of osu!mania charts.
//!
//! The rating is derived from several skill curves, e.g. jacks, column
//! crossing, press rate, and hold note releases, which are evaluated on an
//! irregular time grid around every note and combined into a single
//! difficulty curve.
//!
//! ## Usage
//!
//! ```no_run
//! use rosu_sunny::{SunnyDifficulty, model::{ManiaChart, SpeedModifier}};
//!
//! # fn main() -> Result<(), rosu_sunny::model::SunnyError> {
//! // Decode the map
//! let chart = ManiaChart::from_path("./resources/1638954.osu")?;
//!
//! // Calculate its star rating on DT
//! let attrs = SunnyDifficulty::new()
//!     .speed(SpeedModifier::DoubleTime)
//!     .calculate_chart(&chart)?;
//!
//! println!("Stars: {}", attrs.stars);
//!
//! // The difficulty curve that the rating is built on
//! let strains = SunnyDifficulty::new().strains_chart(&chart)?;
//!
//! println!("Peak: {}", strains.peak());
//!
//! // Star ratings from 0.7x to 2.0x
//! let rates = SunnyDifficulty::new().all_rates_chart(&chart)?;
//!
//! for (rate, stars) in rates.iter() {
//!     println!("{rate}x: {stars}");
//! }
//! # Ok(()) }
//! ```
//!
//! If the error is of no interest, [`compute_difficulty`] returns
//! [`SunnyError::SENTINEL`](model::SunnyError::SENTINEL) instead of the
//! rating whenever the calculation fails.
//!
//! ```
//! use rosu_sunny::{compute_difficulty, model::{RawNote, SpeedModifier}};
//!
//! let notes = [RawNote::tap(0, 0.0), RawNote::hold(1, 250.0, 750.0)];
//! let stars = compute_difficulty(&notes, 4, 8.0, SpeedModifier::HalfTime);
//!
//! assert!(stars.is_finite());
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features enabled |
//! | `tracing` | Failed calculations and rejected hit objects are logged through `tracing::warn!`, sizes of each calculation through `tracing::debug!`. | [`tracing`]
//!
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::explicit_iter_loop,
    clippy::similar_names,
    clippy::many_single_char_names
)]

#[doc(inline)]
pub use self::mania::{
    compute_difficulty, SunnyAttributes, SunnyDifficulty, SunnyRates, SunnyStrains,
};

/// Types for osu!mania star rating calculations.
pub mod mania;

/// Types used in and around this crate.
pub mod model;

mod util;
