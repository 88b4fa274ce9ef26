//! 계산식에 쓰이는 고정 단위 환산 계수.

pub mod pressure;
pub mod volume;

pub use pressure::{atmospheric_pascal, psi_to_pascal, ATM_PRESSURE_PSI, PA_PER_PSI};
pub use volume::{
    cubic_feet_to_gallons, cubic_meters_to_cubic_feet, CUBIC_FEET_PER_CUBIC_METER,
    GALLONS_PER_CUBIC_FOOT,
};
