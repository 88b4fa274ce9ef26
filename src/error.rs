//! 계산기 공통 오류 분류. 입력 오류와 수학적 정의역 오류를 구분한다.

use std::fmt;

use crate::units::ATM_PRESSURE_PSI;

/// 사용자가 입력하는 필드 이름.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Length,
    Width,
    Depth,
    OrificeDiameter,
    SourcePressure,
    GasTemperature,
    DischargeCoefficient,
}

impl Field {
    /// 메시지에 쓰이는 영문 이름.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Length => "length",
            Field::Width => "width",
            Field::Depth => "depth",
            Field::OrificeDiameter => "orifice diameter",
            Field::SourcePressure => "source pressure",
            Field::GasTemperature => "gas temperature",
            Field::DischargeCoefficient => "discharge coefficient",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// "a, b and c" 형태로 이어 붙인다.
pub fn join_fields(fields: &[Field]) -> String {
    let names: Vec<&str> = fields.iter().map(Field::name).collect();
    match names.split_last() {
        None => String::new(),
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{} and {last}", rest.join(", ")),
    }
}

/// 입력 단계에서 걸러지는 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// 필수 필드가 비어 있음
    MissingFields(Vec<Field>),
    /// 숫자로 해석할 수 없음
    InvalidNumber(Vec<Field>),
    /// 0 이하 치수
    NonPositive(Vec<Field>),
    /// 형상이 선택되지 않았거나 알 수 없는 형상
    ShapeNotSelected,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::MissingFields(fields) => {
                write!(f, "Please enter {}.", join_fields(fields))
            }
            InputError::InvalidNumber(fields) => write!(
                f,
                "Please enter valid numerical values ({}).",
                join_fields(fields)
            ),
            InputError::NonPositive(fields) => write!(
                f,
                "Dimensions must be greater than zero ({}).",
                join_fields(fields)
            ),
            InputError::ShapeNotSelected => f.write_str("Please select a shape."),
        }
    }
}

impl std::error::Error for InputError {}

/// 계산 도중 발생하는 수학적 정의역 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// 기체 온도 0 K 로 밀도 계산 시 0으로 나눔
    ZeroTemperature,
    /// 기체 온도가 음수라 밀도가 음수가 됨
    NegativeTemperature { kelvin: f64 },
    /// 공급 압력이 대기압보다 낮아 근호 안이 음수가 됨
    BelowAtmospheric { source_pressure_psi: f64 },
    /// 중간값 또는 결과가 유한하지 않음 (값이 너무 커서 넘침 등)
    NonFinite,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::ZeroTemperature => {
                f.write_str("Gas temperature must not be zero kelvin.")
            }
            DomainError::NegativeTemperature { kelvin } => write!(
                f,
                "Gas temperature must be above zero kelvin (got {kelvin} K)."
            ),
            DomainError::BelowAtmospheric {
                source_pressure_psi,
            } => write!(
                f,
                "Source pressure ({source_pressure_psi} psi) must not be below atmospheric \
                 pressure ({ATM_PRESSURE_PSI} psi)."
            ),
            DomainError::NonFinite => {
                f.write_str("The result is not a finite number; check the input magnitudes.")
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// 계산 호출이 반환하는 통합 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    Input(InputError),
    Domain(DomainError),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::Input(e) => write!(f, "{e}"),
            CalcError::Domain(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalcError::Input(e) => Some(e),
            CalcError::Domain(e) => Some(e),
        }
    }
}

impl From<InputError> for CalcError {
    fn from(value: InputError) -> Self {
        CalcError::Input(value)
    }
}

impl From<DomainError> for CalcError {
    fn from(value: DomainError) -> Self {
        CalcError::Domain(value)
    }
}
