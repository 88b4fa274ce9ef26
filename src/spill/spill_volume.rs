use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::str::FromStr;

use crate::error::{CalcError, DomainError, Field, InputError};
use crate::input::{parse_number, RawValue};
use crate::units::cubic_feet_to_gallons;

/// 누출 면적(footprint)의 형상.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpillShape {
    Rectangular,
    /// length 를 지름으로 해석한다.
    Circular,
}

impl SpillShape {
    pub const ALL: [SpillShape; 2] = [SpillShape::Rectangular, SpillShape::Circular];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpillShape::Rectangular => "Rectangular",
            SpillShape::Circular => "Circular",
        }
    }

}

impl FromStr for SpillShape {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rectangular" | "rectangle" | "rect" => Ok(SpillShape::Rectangular),
            "circular" | "circle" => Ok(SpillShape::Circular),
            _ => Err(InputError::ShapeNotSelected),
        }
    }
}

/// 검증을 거친 누출 체적 계산 입력 (단위: ft).
#[derive(Debug, Clone)]
pub struct SpillInput {
    pub shape: SpillShape,
    pub length_ft: f64,
    /// 사각형일 때만 사용
    pub width_ft: Option<f64>,
    pub depth_ft: f64,
}

/// 누출 체적 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpillResult {
    pub volume_cubic_feet: f64,
    pub volume_gallons: f64,
}

impl SpillResult {
    pub fn from_cubic_feet(volume_cubic_feet: f64) -> Self {
        Self {
            volume_cubic_feet,
            volume_gallons: cubic_feet_to_gallons(volume_cubic_feet),
        }
    }
}

/// 필수 치수를 모두 꺼낸다. 빈 값이 있으면 `MissingFields`, 0 이하이거나
/// 유한하지 않은 값이 있으면 `NonPositive`.
fn require_dimensions<const N: usize>(
    dims: [(Field, Option<f64>); N],
) -> Result<[f64; N], InputError> {
    let mut values = [0.0; N];
    let mut missing = Vec::new();
    let mut non_positive = Vec::new();
    for (slot, (field, value)) in values.iter_mut().zip(dims) {
        match value {
            None => missing.push(field),
            Some(v) if v.is_finite() && v > 0.0 => *slot = v,
            Some(_) => non_positive.push(field),
        }
    }
    if !missing.is_empty() {
        Err(InputError::MissingFields(missing))
    } else if !non_positive.is_empty() {
        Err(InputError::NonPositive(non_positive))
    } else {
        Ok(values)
    }
}

/// 누출 체적(ft³)을 계산한다.
/// - 사각형: L × W × D
/// - 원형: π × (L/2)² × D, width 는 무시
///
/// 치수 오류는 계산 전에 `InputError` 로, 곱이 f64 범위를 넘으면
/// `DomainError::NonFinite` 로 돌려준다.
pub fn compute_spill_volume(
    shape: SpillShape,
    length: Option<f64>,
    width: Option<f64>,
    depth: Option<f64>,
) -> Result<f64, CalcError> {
    let volume = match shape {
        SpillShape::Rectangular => {
            let [length, width, depth] = require_dimensions([
                (Field::Length, length),
                (Field::Width, width),
                (Field::Depth, depth),
            ])?;
            length * width * depth
        }
        SpillShape::Circular => {
            let [length, depth] =
                require_dimensions([(Field::Length, length), (Field::Depth, depth)])?;
            let radius = length / 2.0;
            PI * radius.powi(2) * depth
        }
    };
    if !volume.is_finite() || !cubic_feet_to_gallons(volume).is_finite() {
        return Err(DomainError::NonFinite.into());
    }
    Ok(volume)
}

impl SpillInput {
    /// 입력을 검증하고 체적을 계산한다.
    pub fn compute(&self) -> Result<SpillResult, CalcError> {
        let cubic_feet = compute_spill_volume(
            self.shape,
            Some(self.length_ft),
            self.width_ft,
            Some(self.depth_ft),
        )?;
        Ok(SpillResult::from_cubic_feet(cubic_feet))
    }
}

/// 입력창에서 읽은 원시 문자열 묶음.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpillForm {
    /// 선택된 형상 이름. 비어 있으면 미선택.
    pub shape: String,
    pub length: String,
    pub width: String,
    pub depth: String,
}

/// 필수 입력창을 모두 숫자로 읽는다. 빈 칸이 먼저 보고되고, 그다음 숫자가 아닌 칸이다.
fn parse_required<const N: usize>(texts: [(Field, &str); N]) -> Result<[f64; N], InputError> {
    let mut values = [0.0; N];
    let mut missing = Vec::new();
    let mut invalid = Vec::new();
    for (slot, (field, text)) in values.iter_mut().zip(texts) {
        match parse_number(text) {
            RawValue::Empty => missing.push(field),
            RawValue::Invalid => invalid.push(field),
            RawValue::Number(v) => *slot = v,
        }
    }
    if !missing.is_empty() {
        Err(InputError::MissingFields(missing))
    } else if !invalid.is_empty() {
        Err(InputError::InvalidNumber(invalid))
    } else {
        Ok(values)
    }
}

impl SpillForm {
    /// 원시 문자열을 검증된 입력으로 변환한다.
    ///
    /// 형상 → 빈 필드 → 숫자 형식 순으로 확인하고 처음 걸린 오류를 반환한다.
    /// 원형이면 width 칸은 읽지 않는다.
    pub fn parse(&self) -> Result<SpillInput, InputError> {
        let shape: SpillShape = self.shape.parse()?;
        let input = match shape {
            SpillShape::Rectangular => {
                let [length_ft, width_ft, depth_ft] = parse_required([
                    (Field::Length, self.length.as_str()),
                    (Field::Width, self.width.as_str()),
                    (Field::Depth, self.depth.as_str()),
                ])?;
                SpillInput {
                    shape,
                    length_ft,
                    width_ft: Some(width_ft),
                    depth_ft,
                }
            }
            SpillShape::Circular => {
                let [length_ft, depth_ft] = parse_required([
                    (Field::Length, self.length.as_str()),
                    (Field::Depth, self.depth.as_str()),
                ])?;
                SpillInput {
                    shape,
                    length_ft,
                    width_ft: None,
                    depth_ft,
                }
            }
        };
        Ok(input)
    }

    /// 세 입력 필드를 비운다. 형상 선택은 유지한다.
    pub fn clear_dimensions(&mut self) {
        self.length.clear();
        self.width.clear();
        self.depth.clear();
    }
}
