use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::labels;
use crate::panel::{GasPanel, SpillPanel};
use crate::spill::SpillShape;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SpillVolume,
    GasRelease,
    Settings,
    Exit,
}

/// 메뉴 번호를 선택지로 바꾼다.
pub fn parse_menu_choice(sel: &str) -> Option<MenuChoice> {
    match sel.trim() {
        "1" => Some(MenuChoice::SpillVolume),
        "2" => Some(MenuChoice::GasRelease),
        "3" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 형상 번호(1/2) 또는 이름을 형상 문자열로 바꾼다. 그 외는 그대로 두어
/// 계산기에서 형상 미선택 오류가 나도록 한다.
pub fn shape_text_from_choice(sel: &str) -> String {
    match sel.trim() {
        "1" => SpillShape::Rectangular.as_str().to_string(),
        "2" => SpillShape::Circular.as_str().to_string(),
        other => other.to_string(),
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다. 입력이 끝나면(EOF) 종료로 본다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== {} ===", labels::APP_TITLE);
    println!("{}", labels::MAIN_MENU_SPILL);
    println!("{}", labels::MAIN_MENU_GAS);
    println!("{}", labels::MAIN_MENU_SETTINGS);
    println!("{}", labels::MAIN_MENU_EXIT);
    loop {
        let Some(sel) = read_line(labels::PROMPT_MENU_SELECT)? else {
            return Ok(MenuChoice::Exit);
        };
        match parse_menu_choice(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", labels::INVALID_SELECTION_RETRY),
        }
    }
}

/// 누출 체적 계산 메뉴를 처리한다. 원형이면 폭을 묻지 않는다.
pub fn handle_spill(panel: &mut SpillPanel) -> Result<(), AppError> {
    println!("\n-- {} --", labels::SPILL_TITLE);
    let shape = read_line(labels::PROMPT_SHAPE)?.unwrap_or_default();
    panel.form.shape = shape_text_from_choice(&shape);
    panel.form.length = prompt_field(labels::LABEL_LENGTH)?;
    panel.form.width = match panel.form.shape.parse::<SpillShape>() {
        Ok(SpillShape::Circular) => String::new(),
        _ => prompt_field(labels::LABEL_WIDTH)?,
    };
    panel.form.depth = prompt_field(labels::LABEL_DEPTH)?;
    panel.calculate()?;
    if let Some(text) = &panel.result_text {
        println!("{text}");
    }
    Ok(())
}

/// 가스 누출 유량 계산 메뉴를 처리한다.
pub fn handle_gas(panel: &mut GasPanel) -> Result<(), AppError> {
    println!("\n-- {} --", labels::GAS_TITLE);
    panel.form.orifice_diameter = prompt_field(labels::LABEL_DIAMETER)?;
    panel.form.source_pressure = prompt_field(labels::LABEL_SOURCE_PRESSURE)?;
    panel.form.gas_temperature = prompt_field(labels::LABEL_GAS_TEMPERATURE)?;
    panel.form.discharge_coefficient = prompt_field(labels::LABEL_DISCHARGE_COEFFICIENT)?;
    panel.calculate()?;
    if let Some(text) = &panel.result_text {
        println!("{text}");
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 변경이 있으면 true.
pub fn handle_settings(cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", labels::SETTINGS_HEADING);
    let mut changed = false;

    let shape = read_line(&format!(
        "{} [{}]: ",
        labels::SETTINGS_DEFAULT_SHAPE,
        cfg.default_shape.as_str()
    ))?
    .unwrap_or_default();
    if !shape.trim().is_empty() {
        match shape_text_from_choice(&shape).parse::<SpillShape>() {
            Ok(s) => {
                cfg.default_shape = s;
                changed = true;
            }
            Err(_) => println!("{}", labels::SETTINGS_UNCHANGED),
        }
    }

    let clear = read_line(&format!(
        "{} (y/n) [{}]: ",
        labels::SETTINGS_CLEAR_INPUTS,
        if cfg.clear_inputs_on_success { "y" } else { "n" }
    ))?
    .unwrap_or_default();
    match clear.trim().to_lowercase().as_str() {
        "" => {}
        "y" | "yes" => {
            cfg.clear_inputs_on_success = true;
            changed = true;
        }
        "n" | "no" => {
            cfg.clear_inputs_on_success = false;
            changed = true;
        }
        _ => println!("{}", labels::SETTINGS_UNCHANGED),
    }
    Ok(changed)
}

fn prompt_field(label: &str) -> Result<String, AppError> {
    Ok(read_line(&format!("{label} "))?.unwrap_or_default())
}

/// 한 줄을 읽는다. 입력 스트림이 끝났으면 None.
fn read_line(prompt: &str) -> Result<Option<String>, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let read = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }
}
