//! Fuzz target for the beta prime kernels.
//!
//! Arbitrary f64 triples (NaN, infinities, subnormals included) must never
//! panic, and the mode must be NaN exactly on invalid shapes.

#![no_main]

use arbitrary::Arbitrary;
use bp_math::{
    betaprime_cdf, betaprime_inv_cdf, betaprime_mean, betaprime_mode, betaprime_pdf,
    betaprime_var,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    x: f64,
    alpha: f64,
    beta: f64,
}

fuzz_target!(|input: Input| {
    let Input { x, alpha, beta } = input;

    let mode = betaprime_mode(alpha, beta);
    if !(alpha > 0.0 && beta > 0.0) {
        assert!(mode.is_nan(), "mode({alpha}, {beta}) = {mode}");
    } else if alpha.is_finite() && beta.is_finite() {
        assert!(mode >= 0.0, "mode({alpha}, {beta}) = {mode}");
    }

    let _ = betaprime_mean(alpha, beta);
    let _ = betaprime_var(alpha, beta);
    let _ = betaprime_pdf(x, alpha, beta);
    let _ = betaprime_cdf(x, alpha, beta);
    let _ = betaprime_inv_cdf(x, alpha, beta);
});
