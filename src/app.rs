use crate::cli::Commands;
use crate::config::Config;
use crate::error::CalcError;
use crate::gas::GasReleaseForm;
use crate::labels;
use crate::panel::{GasPanel, SpillPanel};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 콘솔 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 입력 또는 계산 오류
    Calc(CalcError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "config error: {e}"),
            AppError::Calc(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<CalcError> for AppError {
    fn from(value: CalcError) -> Self {
        AppError::Calc(value)
    }
}

/// 단발성 서브커맨드를 실행하고 출력할 문자열을 돌려준다.
pub fn run_command(command: Commands, config: &Config) -> Result<String, AppError> {
    match command {
        Commands::Spill {
            shape,
            length,
            width,
            depth,
        } => {
            let mut panel = SpillPanel::new(config.default_shape, config.clear_inputs_on_success);
            if let Some(shape) = shape {
                panel.form.shape = shape;
            }
            panel.form.length = length.unwrap_or_default();
            panel.form.width = width.unwrap_or_default();
            panel.form.depth = depth.unwrap_or_default();
            panel.calculate()?;
            Ok(panel.result_text.unwrap_or_default())
        }
        Commands::Gas {
            diameter,
            pressure,
            temperature,
            discharge_coefficient,
        } => {
            let mut panel = GasPanel {
                form: GasReleaseForm {
                    orifice_diameter: diameter.unwrap_or_default(),
                    source_pressure: pressure.unwrap_or_default(),
                    gas_temperature: temperature.unwrap_or_default(),
                    discharge_coefficient: discharge_coefficient.unwrap_or_default(),
                },
                result_text: None,
            };
            panel.calculate()?;
            Ok(panel.result_text.unwrap_or_default())
        }
    }
}

/// CLI 대화형 메인 루프를 실행한다. 계산 오류는 출력 후 메뉴로 돌아간다.
pub fn run(config: &mut Config) -> Result<(), AppError> {
    let mut spill = SpillPanel::new(config.default_shape, config.clear_inputs_on_success);
    let mut gas = GasPanel::default();
    loop {
        let outcome = match ui_cli::main_menu()? {
            MenuChoice::SpillVolume => ui_cli::handle_spill(&mut spill),
            MenuChoice::GasRelease => ui_cli::handle_gas(&mut gas),
            MenuChoice::Settings => {
                if ui_cli::handle_settings(config)? {
                    config.save()?;
                    spill.clear_inputs_on_success = config.clear_inputs_on_success;
                    println!("{}", labels::SETTINGS_SAVED);
                }
                Ok(())
            }
            MenuChoice::Exit => {
                println!("{}", labels::APP_EXIT);
                break;
            }
        };
        match outcome {
            Ok(()) => {}
            Err(AppError::Calc(e)) => {
                println!("{}: {e}", labels::error_title(&e));
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
