//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 와 GUI 가 같은 계산/검증 경로를 쓴다.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod gas;
pub mod input;
pub mod labels;
pub mod panel;
pub mod report;
pub mod spill;
pub mod ui_cli;
pub mod units;

pub use error::{CalcError, DomainError, Field, InputError};
pub use gas::compute_flow_rate;
pub use report::{format_flow_rate, format_volume};
pub use spill::{compute_spill_volume, SpillShape};
