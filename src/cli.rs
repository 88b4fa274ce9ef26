use clap::{Parser, Subcommand};

/// 명령행 인자. 서브커맨드가 없으면 대화형 메뉴를 띄운다.
#[derive(Parser, Debug)]
#[command(
    name = "chem_engineering_toolkit_cli",
    version,
    about = "Liquid spill volume and gas release rate calculators"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// 값은 문자열 그대로 받아 계산기와 같은 검증을 거친다.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Liquid spill volume from footprint shape and depth (feet)
    Spill {
        #[arg(long, help = "rectangular or circular (defaults to the configured shape)")]
        shape: Option<String>,
        #[arg(long, allow_hyphen_values = true, help = "Length, or diameter for circular (ft)")]
        length: Option<String>,
        #[arg(long, allow_hyphen_values = true, help = "Width (ft), rectangular only")]
        width: Option<String>,
        #[arg(long, allow_hyphen_values = true, help = "Depth (ft)")]
        depth: Option<String>,
    },
    /// Gas release rate through an orifice
    Gas {
        #[arg(long, allow_hyphen_values = true, help = "Orifice diameter (inches)")]
        diameter: Option<String>,
        #[arg(long, allow_hyphen_values = true, help = "Source pressure (psi)")]
        pressure: Option<String>,
        #[arg(long, allow_hyphen_values = true, help = "Gas temperature (K)")]
        temperature: Option<String>,
        #[arg(long, allow_hyphen_values = true, help = "Discharge coefficient")]
        discharge_coefficient: Option<String>,
    },
}
