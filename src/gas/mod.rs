//! 가스 누출(오리피스 배출) 계산 모듈 모음.

pub mod gas_release;

pub use gas_release::*;
