//! Log-domain special functions used by the density and CDF.

use std::f64::consts::PI;

const HALF_LN_2PI: f64 = 0.918_938_533_204_672_8;
const LANCZOS_G: f64 = 7.0;
#[allow(clippy::excessive_precision)] // published Lanczos coefficients (g = 7, n = 9)
const LANCZOS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Natural log of |Gamma(z)|.
///
/// Lanczos series for `z >= 0.5`, reflection formula below that.
/// Returns NaN at the poles (non-positive integers), at NaN and at `-inf`.
pub fn log_gamma(z: f64) -> f64 {
    if z.is_nan() || z == f64::NEG_INFINITY {
        return f64::NAN;
    }
    if z == f64::INFINITY {
        return f64::INFINITY;
    }
    if z <= 0.0 && z == z.trunc() {
        return f64::NAN;
    }
    if z < 0.5 {
        let sin_pi_z = (PI * z).sin();
        if sin_pi_z == 0.0 {
            return f64::NAN;
        }
        return PI.ln() - sin_pi_z.abs().ln() - log_gamma(1.0 - z);
    }
    lanczos_log_gamma(z)
}

fn lanczos_log_gamma(z: f64) -> f64 {
    let shifted = z - 1.0;
    let series = LANCZOS
        .iter()
        .enumerate()
        .skip(1)
        .fold(LANCZOS[0], |acc, (k, c)| acc + c / (shifted + k as f64));
    let t = shifted + LANCZOS_G + 0.5;
    HALF_LN_2PI + (shifted + 0.5) * t.ln() - t + series.ln()
}

/// ln B(a, b) = ln Gamma(a) + ln Gamma(b) - ln Gamma(a + b).
pub fn log_beta(a: f64, b: f64) -> f64 {
    log_gamma(a) + log_gamma(b) - log_gamma(a + b)
}
