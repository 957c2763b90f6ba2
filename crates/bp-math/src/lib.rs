//! Beta prime distribution math.
//!
//! Free functions follow the NaN-sentinel convention: invalid shape
//! parameters or NaN inputs return `f64::NAN` instead of panicking.
//! [`BetaPrime`] wraps a validated parameter pair for callers that prefer
//! typed errors at construction time.

pub mod error;
pub mod math;

pub use error::{ParamError, Result};
pub use math::beta::{reg_inc_beta, reg_inc_beta_inv};
pub use math::betaprime::*;
pub use math::stable::{log_beta, log_gamma};
