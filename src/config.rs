use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::spill::SpillShape;

/// 설정 파일 이름. 작업 디렉터리 기준.
pub const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 누출 계산기의 초기 형상 선택
    pub default_shape: SpillShape,
    /// 계산 성공 시 치수 입력창을 비운다
    pub clear_inputs_on_success: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_shape: SpillShape::Rectangular,
            clear_inputs_on_success: true,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "file I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_from(Path::new(CONFIG_FILE))
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값으로 새로 만든다.
pub fn load_or_default_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        read_config(path)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        Ok(cfg)
    }
}

/// 파일이 있으면 읽고, 없으면 파일을 만들지 않고 기본값을 돌려준다.
pub fn load_existing_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        read_config(path)
    } else {
        Ok(Config::default())
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    Ok(cfg)
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self, Path::new(CONFIG_FILE))
    }

    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "chem_toolkit_config_{}_{name}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir.join(CONFIG_FILE)
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let path = scratch_path("create");
        let _ = fs::remove_file(&path);
        let cfg = load_or_default_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn read_only_load_does_not_create_file() {
        let path = scratch_path("readonly");
        let _ = fs::remove_file(&path);
        let cfg = load_existing_or_default(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(!path.exists());
    }

    #[test]
    fn saved_config_round_trips() {
        let path = scratch_path("roundtrip");
        let cfg = Config {
            default_shape: SpillShape::Circular,
            clear_inputs_on_success: false,
        };
        cfg.save_to(&path).unwrap();
        assert_eq!(load_existing_or_default(&path).unwrap(), cfg);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let cfg: Config = toml::from_str("clear_inputs_on_success = false").unwrap();
        assert_eq!(cfg.default_shape, SpillShape::Rectangular);
        assert!(!cfg.clear_inputs_on_success);
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let path = scratch_path("malformed");
        fs::write(&path, "default_shape = \"Hexagon\"").unwrap();
        assert!(matches!(
            load_existing_or_default(&path),
            Err(ConfigError::Serde(_))
        ));
    }
}
