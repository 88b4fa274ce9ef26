//! 화면에 표시하는 고정 영문 문자열. GUI 와 CLI 가 같은 라벨을 쓴다.

use crate::error::CalcError;

pub const APP_TITLE: &str = "Chemical Engineering Toolkit";
/// 창 제목에는 작성자 표기를 붙인다.
pub const WINDOW_TITLE: &str = "Chemical Engineering Toolkit - Author: Jesus Torres";
pub const APP_EXIT: &str = "Exiting.";
pub const ERROR_PREFIX: &str = "Error";

pub const MAIN_MENU_SPILL: &str = "1) Liquid Spill Volume Calculator";
pub const MAIN_MENU_GAS: &str = "2) Gas Release Rate Calculator";
pub const MAIN_MENU_SETTINGS: &str = "3) Settings";
pub const MAIN_MENU_EXIT: &str = "0) Exit";
pub const PROMPT_MENU_SELECT: &str = "Select menu: ";
pub const INVALID_SELECTION_RETRY: &str = "Invalid selection. Please try again.";

pub const SPILL_TITLE: &str = "Liquid Spill Volume Calculator";
pub const SPILL_SELECT_SHAPE: &str = "Select Shape:";
pub const PROMPT_SHAPE: &str = "Shape (1=Rectangular, 2=Circular): ";
pub const LABEL_LENGTH: &str = "Length (feet):";
pub const LABEL_WIDTH: &str = "Width (feet):";
pub const LABEL_DEPTH: &str = "Depth (feet):";
pub const RESULT_VOLUME: &str = "Volume:";

pub const GAS_TITLE: &str = "Gas Release Rate Calculator";
pub const LABEL_DIAMETER: &str = "Orifice Diameter (inches):";
pub const LABEL_SOURCE_PRESSURE: &str = "Source Pressure (psi):";
pub const LABEL_GAS_TEMPERATURE: &str = "Gas Temperature (Kelvin):";
pub const LABEL_DISCHARGE_COEFFICIENT: &str = "Discharge Coefficient:";
pub const DISCLAIMER: &str = "Note: Gas flow rate calculations are for quick estimation. \
For accurate gas flow rate calculations, consult engineering references.\n\
Spilled Bucket Image by brgfx on Freepik\n\
Bunsen Burner image by OpenClipart-Vector from Pixabay";

pub const BUTTON_CALCULATE: &str = "Calculate";
pub const BUTTON_OK: &str = "OK";

pub const SETTINGS_TITLE: &str = "Settings";
pub const SETTINGS_HEADING: &str = "\n-- Settings --";
pub const SETTINGS_DEFAULT_SHAPE: &str = "Default shape (1=Rectangular, 2=Circular)";
pub const SETTINGS_CLEAR_INPUTS: &str = "Clear inputs after a successful calculation";
pub const SETTINGS_SAVE: &str = "Save settings";
pub const SETTINGS_SAVED: &str = "Settings saved.";
pub const SETTINGS_UNCHANGED: &str = "Invalid input; setting unchanged.";

/// 오류 대화상자 제목. 입력 오류와 계산 오류를 구분한다.
pub fn error_title(err: &CalcError) -> &'static str {
    match err {
        CalcError::Input(_) => "Input Error",
        CalcError::Domain(_) => "Calculation Error",
    }
}
