/// 1 psi = 6894.76 Pa
pub const PA_PER_PSI: f64 = 6894.76;
/// 대기압(psi). 오리피스 배출 계산의 하류 기준압으로 쓴다.
pub const ATM_PRESSURE_PSI: f64 = 14.696;

/// psi 를 Pa 로 변환한다.
pub fn psi_to_pascal(psi: f64) -> f64 {
    psi * PA_PER_PSI
}

/// 대기압을 Pa 로 반환한다.
pub fn atmospheric_pascal() -> f64 {
    psi_to_pascal(ATM_PRESSURE_PSI)
}
