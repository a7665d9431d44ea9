use crate::config::AppConfig;
use crate::utils::error::{AssignerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional settings file. Every section and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub paths: Option<PathsConfig>,
    pub image: Option<ImageConfig>,
    pub roster: Option<RosterConfig>,
    pub sessions: Option<SessionsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    pub input_dir: Option<String>,
    pub output_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    pub first_name_column: Option<String>,
    pub last_name_column: Option<String>,
    pub delimiter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionsConfig {
    pub count: Option<usize>,
    pub header_prefix: Option<String>,
    pub column_padding: Option<usize>,
    pub image_scale: Option<f64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AssignerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AssignerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INPUT_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::LazyLock;

        static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
        });

        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    /// 將檔案中有設定的值覆蓋到 `config`
    pub fn apply_to(&self, config: &mut AppConfig) -> Result<()> {
        if let Some(paths) = &self.paths {
            if let Some(dir) = &paths.input_dir {
                config.input_dir = PathBuf::from(dir);
            }
            if let Some(dir) = &paths.output_dir {
                config.output_dir = PathBuf::from(dir);
            }
        }

        if let Some(endpoint) = self.image.as_ref().and_then(|i| i.endpoint.as_ref()) {
            config.image_endpoint = endpoint.clone();
        }

        if let Some(roster) = &self.roster {
            if let Some(column) = &roster.first_name_column {
                config.roster.first_name_column = column.clone();
            }
            if let Some(column) = &roster.last_name_column {
                config.roster.last_name_column = column.clone();
            }
            if let Some(delimiter) = &roster.delimiter {
                config.roster.delimiter = parse_delimiter(delimiter)?;
            }
        }

        if let Some(sessions) = &self.sessions {
            if let Some(count) = sessions.count {
                config.sessions.count = count;
            }
            if let Some(prefix) = &sessions.header_prefix {
                config.sessions.header_prefix = prefix.clone();
            }
            if let Some(padding) = sessions.column_padding {
                config.sessions.column_padding = padding;
            }
            if let Some(scale) = sessions.image_scale {
                config.sessions.image_scale = scale;
            }
        }

        Ok(())
    }
}

fn parse_delimiter(value: &str) -> Result<u8> {
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(AssignerError::InvalidConfigValueError {
            field: "roster.delimiter".to_string(),
            value: value.to_string(),
            reason: "Delimiter must be a single ASCII character".to_string(),
        }),
    }
}
