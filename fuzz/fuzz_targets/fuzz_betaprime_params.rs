//! Fuzz target for beta prime parameter loading.
//!
//! Arbitrary bytes parsed as params JSON should only ever error, and any
//! accepted value must carry strictly positive shapes.

#![no_main]

use bp_math::BetaPrime;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(dist) = serde_json::from_slice::<BetaPrime>(data) {
        assert!(dist.alpha() > 0.0 && dist.beta() > 0.0);
    }
});
