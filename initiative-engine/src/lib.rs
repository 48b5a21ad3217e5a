//! # initiative-engine
//!
//! Probability engine for speed-variance turn order.
//!
//! Every unit's effective speed on a turn is uniform over a band around its
//! nominal speed. On top of that model this crate answers:
//! - how likely one unit is to draw the highest speed among its competitors
//!   ([`estimators::single_unit`]),
//! - how likely the fastest member of one group is to outpace the fastest
//!   member of another ([`estimators::group`]),
//! - how to order the results for display ([`ranking`]).
//!
//! All computations are pure functions of their inputs with bounded cost.

pub mod distribution;
pub mod engine;
pub mod estimators;
pub mod intake;
pub mod ranking;

pub use distribution::{probability_below, SpeedBand, SpeedDistribution};
pub use engine::InitiativeEngine;
pub use estimators::group::group_advantage_probability;
pub use estimators::head_to_head::head_to_head_probability;
pub use estimators::single_unit::advantage_probability;
pub use ranking::RankingComposer;
