//! 입력창의 원시 문자열을 숫자로 해석한다.

/// 한 입력 필드의 해석 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue {
    /// 비어 있거나 공백만 있음
    Empty,
    /// 숫자로 해석 불가 (inf/NaN 포함)
    Invalid,
    Number(f64),
}

impl RawValue {
    pub fn number(self) -> Option<f64> {
        match self {
            RawValue::Number(v) => Some(v),
            _ => None,
        }
    }
}

/// 앞뒤 공백을 제거한 뒤 유한한 실수로 해석한다.
pub fn parse_number(text: &str) -> RawValue {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return RawValue::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => RawValue::Number(v),
        _ => RawValue::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_scientific_numbers() {
        assert_eq!(parse_number(" 12.5 "), RawValue::Number(12.5));
        assert_eq!(parse_number("1e3"), RawValue::Number(1000.0));
        assert_eq!(parse_number("-4"), RawValue::Number(-4.0));
    }

    #[test]
    fn blank_is_empty() {
        assert_eq!(parse_number(""), RawValue::Empty);
        assert_eq!(parse_number("   "), RawValue::Empty);
    }

    #[test]
    fn garbage_and_non_finite_are_invalid() {
        assert_eq!(parse_number("abc"), RawValue::Invalid);
        assert_eq!(parse_number("1,5"), RawValue::Invalid);
        assert_eq!(parse_number("inf"), RawValue::Invalid);
        assert_eq!(parse_number("NaN"), RawValue::Invalid);
    }
}
