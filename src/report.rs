//! 계산 결과를 화면 표시용 문자열로 만든다.

use crate::units::cubic_feet_to_gallons;

/// 체적을 "X.XX cubic feet (Y.YY gallons)" 형식으로 표시한다.
pub fn format_volume(cubic_feet: f64) -> String {
    let gallons = cubic_feet_to_gallons(cubic_feet);
    format!("{cubic_feet:.2} cubic feet ({gallons:.2} gallons)")
}

/// 두 단위의 유량을 줄바꿈으로 구분해 표시한다.
pub fn format_flow_rate(flow_rate_m3_per_s: f64, flow_rate_ft3_per_s: f64) -> String {
    format!(
        "Flow Rate (m³/s): {flow_rate_m3_per_s:.2}\nFlow Rate (ft³/s): {flow_rate_ft3_per_s:.2}"
    )
}
