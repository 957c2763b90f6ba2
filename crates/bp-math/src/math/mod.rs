//! Core math modules.

pub mod beta;
pub mod betaprime;
pub mod stable;
