use std::f64::consts::PI;

use crate::error::{CalcError, DomainError, Field, InputError};
use crate::input::parse_number;
use crate::units::{atmospheric_pascal, cubic_meters_to_cubic_feet, psi_to_pascal};

/// 기체상수 R [J/(mol·K)]
pub const GAS_CONSTANT: f64 = 8.314;

/// 오리피스 가스 배출량 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasReleaseInput {
    /// 오리피스 지름. 라벨은 inch 이지만 변환 없이 면적 계산에 그대로 쓰인다.
    pub orifice_diameter: f64,
    /// 공급(상류) 압력 [psi]
    pub source_pressure_psi: f64,
    /// 기체 온도 [K]
    pub gas_temperature_k: f64,
    /// 배출계수 Cd. 범위 검사 없음
    pub discharge_coefficient: f64,
}

/// 가스 배출량 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasReleaseResult {
    pub flow_rate_m3_per_s: f64,
    pub flow_rate_ft3_per_s: f64,
}

/// 오리피스 배출 유량을 계산한다. 반환값은 (m³/s, ft³/s).
///
/// 1. P[Pa] = P[psi] × 6894.76
/// 2. ρ = P / (R·T)   (몰질량 없이 계산하는 단순식)
/// 3. Q = Cd · π · (d/2)² · √(2·(P − P_atm) / ρ)
/// 4. Q[ft³/s] = Q × 35.3147
///
/// 지름은 단위 변환 없이 쓰고 ρ 에 몰질량이 빠져 있어 물리적 단위는 맞지 않는다.
/// 기존 계산값과 같은 결과를 내기 위해 식을 그대로 유지한다.
///
/// T = 0 이면 `ZeroTemperature`, T < 0 이면 `NegativeTemperature`, 공급 압력이
/// 대기압보다 낮으면 `BelowAtmospheric` 을 반환한다. 대기압과 정확히 같으면 유량은 0 이다.
pub fn compute_flow_rate(
    diameter: f64,
    source_pressure_psi: f64,
    gas_temperature_k: f64,
    discharge_coefficient: f64,
) -> Result<(f64, f64), CalcError> {
    let invalid: Vec<Field> = [
        (Field::OrificeDiameter, diameter),
        (Field::SourcePressure, source_pressure_psi),
        (Field::GasTemperature, gas_temperature_k),
        (Field::DischargeCoefficient, discharge_coefficient),
    ]
    .into_iter()
    .filter(|(_, v)| !v.is_finite())
    .map(|(f, _)| f)
    .collect();
    if !invalid.is_empty() {
        return Err(InputError::InvalidNumber(invalid).into());
    }
    if gas_temperature_k == 0.0 {
        return Err(DomainError::ZeroTemperature.into());
    }
    if gas_temperature_k < 0.0 {
        return Err(DomainError::NegativeTemperature {
            kelvin: gas_temperature_k,
        }
        .into());
    }

    let source_pressure_pa = psi_to_pascal(source_pressure_psi);
    let pressure_drop_pa = source_pressure_pa - atmospheric_pascal();
    // 음압(0 psi 이하)도 여기서 걸러야 ρ 부호가 바뀌어 근호가 양수로 뒤집히지 않는다
    if pressure_drop_pa < 0.0 {
        return Err(DomainError::BelowAtmospheric {
            source_pressure_psi,
        }
        .into());
    }

    let gas_density = source_pressure_pa / (GAS_CONSTANT * gas_temperature_k);
    let radicand = 2.0 * pressure_drop_pa / gas_density;
    if !radicand.is_finite() {
        return Err(DomainError::NonFinite.into());
    }

    let flow_rate_m3_s =
        discharge_coefficient * PI * (diameter / 2.0).powi(2) * radicand.sqrt();
    if !flow_rate_m3_s.is_finite() {
        return Err(DomainError::NonFinite.into());
    }
    let flow_rate_ft3_s = cubic_meters_to_cubic_feet(flow_rate_m3_s);
    if !flow_rate_ft3_s.is_finite() {
        return Err(DomainError::NonFinite.into());
    }
    Ok((flow_rate_m3_s, flow_rate_ft3_s))
}

impl GasReleaseInput {
    pub fn compute(&self) -> Result<GasReleaseResult, CalcError> {
        let (flow_rate_m3_per_s, flow_rate_ft3_per_s) = compute_flow_rate(
            self.orifice_diameter,
            self.source_pressure_psi,
            self.gas_temperature_k,
            self.discharge_coefficient,
        )?;
        Ok(GasReleaseResult {
            flow_rate_m3_per_s,
            flow_rate_ft3_per_s,
        })
    }
}

/// 가스 계산기 입력창의 원시 문자열.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GasReleaseForm {
    pub orifice_diameter: String,
    pub source_pressure: String,
    pub gas_temperature: String,
    pub discharge_coefficient: String,
}

impl GasReleaseForm {
    /// 네 필드 모두 숫자여야 한다. 빈 칸도 잘못된 숫자로 취급한다.
    pub fn parse(&self) -> Result<GasReleaseInput, InputError> {
        let fields = [
            (Field::OrificeDiameter, parse_number(&self.orifice_diameter)),
            (Field::SourcePressure, parse_number(&self.source_pressure)),
            (Field::GasTemperature, parse_number(&self.gas_temperature)),
            (Field::DischargeCoefficient, parse_number(&self.discharge_coefficient)),
        ];
        let invalid: Vec<Field> = fields
            .iter()
            .filter(|(_, raw)| raw.number().is_none())
            .map(|(f, _)| *f)
            .collect();
        match fields.map(|(_, raw)| raw.number()) {
            [Some(d), Some(p), Some(t), Some(cd)] => Ok(GasReleaseInput {
                orifice_diameter: d,
                source_pressure_psi: p,
                gas_temperature_k: t,
                discharge_coefficient: cd,
            }),
            _ => Err(InputError::InvalidNumber(invalid)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scenario() {
        let (m3, ft3) = compute_flow_rate(1.0, 100.0, 300.0, 0.8).unwrap();
        assert!((m3 - 40.986912228369675).abs() / m3 < 1e-9, "m3={m3}");
        assert!((ft3 - 1447.4405092712066).abs() / ft3 < 1e-9, "ft3={ft3}");
    }

    #[test]
    fn atmospheric_source_gives_zero_flow() {
        let (m3, ft3) = compute_flow_rate(1.0, 14.696, 300.0, 0.8).unwrap();
        assert_eq!(m3, 0.0);
        assert_eq!(ft3, 0.0);
    }

    #[test]
    fn below_atmospheric_is_domain_error() {
        let err = compute_flow_rate(1.0, 10.0, 300.0, 0.8).unwrap_err();
        assert_eq!(
            err,
            CalcError::Domain(DomainError::BelowAtmospheric {
                source_pressure_psi: 10.0
            })
        );
    }

    #[test]
    fn zero_and_negative_pressure_are_below_atmospheric() {
        for psi in [0.0, -5.0] {
            let err = compute_flow_rate(1.0, psi, 300.0, 0.8).unwrap_err();
            assert!(
                matches!(err, CalcError::Domain(DomainError::BelowAtmospheric { .. })),
                "psi={psi} err={err:?}"
            );
        }
    }

    #[test]
    fn negative_temperature_is_reported_as_temperature() {
        let err = compute_flow_rate(1.0, 100.0, -300.0, 0.8).unwrap_err();
        assert_eq!(
            err,
            CalcError::Domain(DomainError::NegativeTemperature { kelvin: -300.0 })
        );
        assert!(err.to_string().starts_with("Gas temperature"));
    }

    #[test]
    fn overflowing_flow_is_non_finite() {
        let err = compute_flow_rate(1e200, 100.0, 300.0, 0.8).unwrap_err();
        assert_eq!(err, CalcError::Domain(DomainError::NonFinite));
    }

    #[test]
    fn zero_temperature_is_domain_error() {
        let err = compute_flow_rate(1.0, 100.0, 0.0, 0.8).unwrap_err();
        assert_eq!(err, CalcError::Domain(DomainError::ZeroTemperature));
    }

    #[test]
    fn non_finite_arguments_are_input_errors() {
        let err = compute_flow_rate(f64::NAN, 100.0, f64::INFINITY, 0.8).unwrap_err();
        assert_eq!(
            err,
            CalcError::Input(InputError::InvalidNumber(vec![
                Field::OrificeDiameter,
                Field::GasTemperature
            ]))
        );
    }

    #[test]
    fn discharge_coefficient_scales_linearly() {
        let (full, _) = compute_flow_rate(2.0, 60.0, 290.0, 1.0).unwrap();
        let (half, _) = compute_flow_rate(2.0, 60.0, 290.0, 0.5).unwrap();
        assert!((full / 2.0 - half).abs() < 1e-12);
    }

    #[test]
    fn form_rejects_empty_and_text() {
        let form = GasReleaseForm {
            orifice_diameter: "1".into(),
            source_pressure: "".into(),
            gas_temperature: "warm".into(),
            discharge_coefficient: "0.8".into(),
        };
        assert_eq!(
            form.parse().unwrap_err(),
            InputError::InvalidNumber(vec![Field::SourcePressure, Field::GasTemperature])
        );
    }

    #[test]
    fn form_parses_all_four_values() {
        let form = GasReleaseForm {
            orifice_diameter: "0.5".into(),
            source_pressure: "50".into(),
            gas_temperature: "293.15".into(),
            discharge_coefficient: "0.61".into(),
        };
        let result = form.parse().unwrap().compute().unwrap();
        assert!((result.flow_rate_m3_per_s - 7.026703644313732).abs() < 1e-9);
        assert!((result.flow_rate_ft3_per_s - 248.14593118784614).abs() < 1e-8);
    }
}
