//! 화면(GUI/CLI)이 공유하는 계산기 패널 상태.
//!
//! 패널은 입력창의 원시 문자열만 들고 있고, 계산 버튼을 누르면 해석 → 계산 →
//! 결과 문자열 갱신 순으로 처리한다. 실패 시 입력과 이전 결과를 그대로 둔다.

use crate::error::CalcError;
use crate::gas::{GasReleaseForm, GasReleaseResult};
use crate::labels;
use crate::report::{format_flow_rate, format_volume};
use crate::spill::{SpillForm, SpillResult, SpillShape};

/// 액체 누출 체적 계산기 패널.
#[derive(Debug, Clone)]
pub struct SpillPanel {
    pub form: SpillForm,
    /// 마지막 성공 결과 표시 문자열
    pub result_text: Option<String>,
    pub clear_inputs_on_success: bool,
}

impl SpillPanel {
    pub fn new(default_shape: SpillShape, clear_inputs_on_success: bool) -> Self {
        Self {
            form: SpillForm {
                shape: default_shape.as_str().to_string(),
                ..SpillForm::default()
            },
            result_text: None,
            clear_inputs_on_success,
        }
    }

    /// 계산 버튼 처리. 성공하면 결과 문자열을 갱신하고 (설정에 따라) 치수 입력을 비운다.
    pub fn calculate(&mut self) -> Result<SpillResult, CalcError> {
        let result = self.form.parse()?.compute()?;
        self.result_text = Some(format!(
            "{} {}",
            labels::RESULT_VOLUME,
            format_volume(result.volume_cubic_feet)
        ));
        if self.clear_inputs_on_success {
            self.form.clear_dimensions();
        }
        Ok(result)
    }
}

/// 가스 누출 유량 계산기 패널. 입력창은 계산 후에도 유지한다.
#[derive(Debug, Clone, Default)]
pub struct GasPanel {
    pub form: GasReleaseForm,
    pub result_text: Option<String>,
}

impl GasPanel {
    pub fn calculate(&mut self) -> Result<GasReleaseResult, CalcError> {
        let result = self.form.parse()?.compute()?;
        self.result_text = Some(format_flow_rate(
            result.flow_rate_m3_per_s,
            result.flow_rate_ft3_per_s,
        ));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainError, Field, InputError};

    #[test]
    fn spill_success_clears_dimensions_and_keeps_shape() {
        let mut panel = SpillPanel::new(SpillShape::Rectangular, true);
        panel.form.length = "1".into();
        panel.form.width = "1".into();
        panel.form.depth = "1".into();
        panel.calculate().unwrap();
        assert_eq!(
            panel.result_text.as_deref(),
            Some("Volume: 1.00 cubic feet (7.48 gallons)")
        );
        assert!(panel.form.length.is_empty());
        assert!(panel.form.width.is_empty());
        assert!(panel.form.depth.is_empty());
        assert_eq!(panel.form.shape, "Rectangular");
    }

    #[test]
    fn spill_failure_leaves_inputs_and_previous_result() {
        let mut panel = SpillPanel::new(SpillShape::Rectangular, true);
        panel.result_text = Some("Volume: earlier".into());
        panel.form.length = "4".into();
        panel.form.depth = "2".into();
        let err = panel.calculate().unwrap_err();
        assert_eq!(
            err,
            CalcError::Input(InputError::MissingFields(vec![Field::Width]))
        );
        assert_eq!(panel.form.length, "4");
        assert_eq!(panel.form.depth, "2");
        assert_eq!(panel.result_text.as_deref(), Some("Volume: earlier"));
    }

    #[test]
    fn spill_can_keep_inputs_when_configured() {
        let mut panel = SpillPanel::new(SpillShape::Circular, false);
        panel.form.length = "2".into();
        panel.form.depth = "1".into();
        panel.calculate().unwrap();
        assert_eq!(panel.form.length, "2");
    }

    #[test]
    fn empty_shape_asks_for_selection() {
        let mut panel = SpillPanel::new(SpillShape::Rectangular, true);
        panel.form.shape.clear();
        assert_eq!(
            panel.calculate().unwrap_err(),
            CalcError::Input(InputError::ShapeNotSelected)
        );
    }

    #[test]
    fn spill_overflow_keeps_inputs() {
        let mut panel = SpillPanel::new(SpillShape::Rectangular, true);
        panel.form.length = "1e200".into();
        panel.form.width = "1e200".into();
        panel.form.depth = "1".into();
        assert_eq!(
            panel.calculate().unwrap_err(),
            CalcError::Domain(DomainError::NonFinite)
        );
        assert!(panel.result_text.is_none());
        assert_eq!(panel.form.length, "1e200");
    }

    #[test]
    fn gas_success_keeps_inputs() {
        let mut panel = GasPanel::default();
        panel.form.orifice_diameter = "1".into();
        panel.form.source_pressure = "100".into();
        panel.form.gas_temperature = "300".into();
        panel.form.discharge_coefficient = "0.8".into();
        panel.calculate().unwrap();
        assert_eq!(
            panel.result_text.as_deref(),
            Some("Flow Rate (m³/s): 40.99\nFlow Rate (ft³/s): 1447.44")
        );
        assert_eq!(panel.form.source_pressure, "100");
    }

    #[test]
    fn gas_domain_error_produces_no_result() {
        let mut panel = GasPanel::default();
        panel.form.orifice_diameter = "1".into();
        panel.form.source_pressure = "100".into();
        panel.form.gas_temperature = "0".into();
        panel.form.discharge_coefficient = "0.8".into();
        assert_eq!(
            panel.calculate().unwrap_err(),
            CalcError::Domain(DomainError::ZeroTemperature)
        );
        assert!(panel.result_text.is_none());
    }
}
