//! Numerical estimators over uniform speed distributions.
//!
//! All three are deterministic midpoint-rule quadratures with a fixed slice
//! count, so each call has bounded cost regardless of the speeds involved.

pub mod group;
pub mod head_to_head;
pub mod single_unit;
