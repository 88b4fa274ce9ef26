use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use chem_engineering_toolkit::app::{self, AppError};
use chem_engineering_toolkit::cli::Cli;
use chem_engineering_toolkit::config;
use chem_engineering_toolkit::labels;

/// 프로그램의 엔트리 포인트. 서브커맨드가 있으면 한 번 계산하고, 없으면 대화형 메뉴를 실행한다.
fn main() -> ExitCode {
    match try_run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", labels::ERROR_PREFIX);
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Some(command) => {
            let cfg = config::load_existing_or_default(Path::new(config::CONFIG_FILE))?;
            let output = app::run_command(command, &cfg)?;
            println!("{output}");
        }
        None => {
            let mut cfg = config::load_or_default()?;
            app::run(&mut cfg)?;
        }
    }
    Ok(())
}
