//! 액체 누출 체적 계산 모듈 모음.

pub mod spill_volume;

pub use spill_volume::*;
