//! Beta prime distribution.
//!
//! Density on `x > 0`:
//!
//! ```text
//! f(x) = x^(alpha - 1) * (1 + x)^(-alpha - beta) / B(alpha, beta)
//! ```
//!
//! If `X ~ BetaPrime(alpha, beta)` then `X / (1 + X) ~ Beta(alpha, beta)`,
//! which is how the CDF and quantile are computed.
//!
//! Free functions return NaN for NaN inputs or shape parameters `<= 0`.
//! Shape checks run before any arithmetic, so wrong-signed infinities
//! never leak a finite result out of the formulas.

use serde::{Deserialize, Serialize};

use super::beta::{reg_inc_beta, reg_inc_beta_inv};
use super::stable::log_beta;
use crate::error::{ParamError, Result};

#[inline]
fn invalid_shapes(alpha: f64, beta: f64) -> bool {
    alpha.is_nan() || beta.is_nan() || alpha <= 0.0 || beta <= 0.0
}

/// Mode of BetaPrime(alpha, beta).
///
/// `(alpha - 1) / (beta + 1)` for `alpha >= 1`, `0` for `0 < alpha < 1`.
///
/// ```
/// use bp_math::betaprime_mode;
///
/// assert_eq!(betaprime_mode(5.0, 2.0), 4.0 / 3.0);
/// assert_eq!(betaprime_mode(0.5, 2.0), 0.0);
/// assert!(betaprime_mode(-1.0, 2.0).is_nan());
/// ```
pub fn betaprime_mode(alpha: f64, beta: f64) -> f64 {
    if invalid_shapes(alpha, beta) {
        return f64::NAN;
    }
    if alpha < 1.0 {
        return 0.0;
    }
    (alpha - 1.0) / (beta + 1.0)
}

/// Mean of BetaPrime(alpha, beta) = alpha / (beta - 1). Undefined (NaN) for `beta <= 1`.
pub fn betaprime_mean(alpha: f64, beta: f64) -> f64 {
    if invalid_shapes(alpha, beta) || beta <= 1.0 {
        return f64::NAN;
    }
    alpha / (beta - 1.0)
}

/// Variance of BetaPrime(alpha, beta). Undefined (NaN) for `beta <= 2`.
pub fn betaprime_var(alpha: f64, beta: f64) -> f64 {
    if invalid_shapes(alpha, beta) || beta <= 2.0 {
        return f64::NAN;
    }
    let bm1 = beta - 1.0;
    alpha * (alpha + beta - 1.0) / ((beta - 2.0) * bm1 * bm1)
}

/// Log of the BetaPrime PDF at x.
pub fn log_betaprime_pdf(x: f64, alpha: f64, beta: f64) -> f64 {
    if x.is_nan() || invalid_shapes(alpha, beta) {
        return f64::NAN;
    }
    if x < 0.0 || x == f64::INFINITY {
        return f64::NEG_INFINITY;
    }
    if x == 0.0 {
        if alpha < 1.0 {
            return f64::INFINITY;
        }
        if alpha > 1.0 {
            return f64::NEG_INFINITY;
        }
        // f(0) = 1 / B(1, beta) = beta
        return beta.ln();
    }
    (alpha - 1.0) * x.ln() - (alpha + beta) * x.ln_1p() - log_beta(alpha, beta)
}

/// BetaPrime PDF at x.
pub fn betaprime_pdf(x: f64, alpha: f64, beta: f64) -> f64 {
    let log_pdf = log_betaprime_pdf(x, alpha, beta);
    if log_pdf.is_nan() {
        return f64::NAN;
    }
    if log_pdf == f64::NEG_INFINITY {
        return 0.0;
    }
    if log_pdf == f64::INFINITY {
        return f64::INFINITY;
    }
    log_pdf.exp()
}

/// CDF P(X <= x) = I_{x/(1+x)}(alpha, beta).
pub fn betaprime_cdf(x: f64, alpha: f64, beta: f64) -> f64 {
    if x.is_nan() || invalid_shapes(alpha, beta) {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if x == f64::INFINITY {
        return 1.0;
    }
    reg_inc_beta(x / (1.0 + x), alpha, beta)
}

/// Quantile (inverse CDF). NaN for `p` outside `[0, 1]`, `+inf` at `p = 1`.
pub fn betaprime_inv_cdf(p: f64, alpha: f64, beta: f64) -> f64 {
    if p.is_nan() || invalid_shapes(alpha, beta) || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return 0.0;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }
    let y = reg_inc_beta_inv(p, alpha, beta);
    if y >= 1.0 {
        return f64::INFINITY;
    }
    y / (1.0 - y)
}

/// Unvalidated shape parameters, as read from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BetaPrimeParams {
    pub alpha: f64,
    pub beta: f64,
}

/// BetaPrime(alpha, beta) with both shapes checked to be finite and `> 0`.
///
/// Deserializes through [`BetaPrimeParams`], so invalid config values fail
/// at load time rather than surfacing as NaN later.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BetaPrimeParams", into = "BetaPrimeParams")]
pub struct BetaPrime {
    alpha: f64,
    beta: f64,
}

impl BetaPrime {
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        let checked = if !alpha.is_finite() || alpha <= 0.0 {
            Err(ParamError::InvalidAlpha(alpha))
        } else if !beta.is_finite() || beta <= 0.0 {
            Err(ParamError::InvalidBeta(beta))
        } else {
            Ok(Self { alpha, beta })
        };
        if let Err(err) = &checked {
            tracing::debug!(
                target: "bp_math::params",
                alpha,
                beta,
                param = err.param(),
                "rejected beta prime parameters"
            );
        }
        checked
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Never NaN for a constructed value.
    pub fn mode(&self) -> f64 {
        betaprime_mode(self.alpha, self.beta)
    }

    pub fn mean(&self) -> f64 {
        betaprime_mean(self.alpha, self.beta)
    }

    pub fn variance(&self) -> f64 {
        betaprime_var(self.alpha, self.beta)
    }

    pub fn pdf(&self, x: f64) -> f64 {
        betaprime_pdf(x, self.alpha, self.beta)
    }

    pub fn ln_pdf(&self, x: f64) -> f64 {
        log_betaprime_pdf(x, self.alpha, self.beta)
    }

    pub fn cdf(&self, x: f64) -> f64 {
        betaprime_cdf(x, self.alpha, self.beta)
    }

    pub fn quantile(&self, p: f64) -> f64 {
        betaprime_inv_cdf(p, self.alpha, self.beta)
    }
}

impl TryFrom<BetaPrimeParams> for BetaPrime {
    type Error = ParamError;

    fn try_from(params: BetaPrimeParams) -> Result<Self> {
        Self::new(params.alpha, params.beta)
    }
}

impl From<BetaPrime> for BetaPrimeParams {
    fn from(dist: BetaPrime) -> Self {
        Self {
            alpha: dist.alpha,
            beta: dist.beta,
        }
    }
}
