pub mod toml_config;

use crate::core::report::SessionLayout;
use crate::core::roster::RosterFormat;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_output_extension, validate_path, validate_range,
    validate_url, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use toml_config::TomlConfig;

pub const DEFAULT_INPUT_DIR: &str = "../input";
pub const DEFAULT_OUTPUT_DIR: &str = "../output";
pub const DEFAULT_IMAGE_ENDPOINT: &str = "https://source.unsplash.com/random";
const MAX_SESSION_COUNT: usize = 100;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "session-assigner")]
#[command(about = "Assign students to slots")]
pub struct CliConfig {
    #[arg(long, help = "Name of the student CSV file")]
    pub student_csv_file_name: String,

    #[arg(long, help = "Path to the image file")]
    pub image_path: Option<String>,

    #[arg(long, help = "Name of the output xlsx file")]
    pub output_xlsx_file_name: String,

    #[arg(long, allow_negative_numbers = true, help = "Seed for random number generator")]
    pub seed: Option<i64>,

    #[arg(long, help = "Directory holding the student CSV and temporary images [default: ../input]")]
    pub input_dir: Option<String>,

    #[arg(long, help = "Directory the xlsx file is written to [default: ../output]")]
    pub output_dir: Option<String>,

    #[arg(long, help = "Endpoint serving a random seed image")]
    pub image_endpoint: Option<String>,

    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併順序: CLI 旗標 > TOML 檔案 > 預設值
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = AppConfig::new(
            self.student_csv_file_name.clone(),
            self.output_xlsx_file_name.clone(),
        );

        if let Some(path) = &self.config {
            tracing::info!("Loading configuration from: {}", path);
            TomlConfig::from_file(path)?.apply_to(&mut config)?;
        }

        if let Some(dir) = &self.input_dir {
            config.input_dir = PathBuf::from(dir);
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(endpoint) = &self.image_endpoint {
            config.image_endpoint = endpoint.clone();
        }
        // 空字串視同未提供，改為下載圖片
        config.image_path = self
            .image_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        config.seed = self.seed;

        config.validate()?;
        Ok(config)
    }
}

/// Only checks that need no file access, so they run before anything is read.
#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_output_extension(&self.output_xlsx_file_name)?;
        validate_non_empty_string("student_csv_file_name", &self.student_csv_file_name)?;
        Ok(())
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub student_csv_file_name: String,
    pub output_xlsx_file_name: String,
    pub image_path: Option<PathBuf>,
    pub seed: Option<i64>,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub image_endpoint: String,
    pub roster: RosterFormat,
    pub sessions: SessionLayout,
}

impl AppConfig {
    pub fn new(student_csv_file_name: String, output_xlsx_file_name: String) -> Self {
        Self {
            student_csv_file_name,
            output_xlsx_file_name,
            image_path: None,
            seed: None,
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            image_endpoint: DEFAULT_IMAGE_ENDPOINT.to_string(),
            roster: RosterFormat::default(),
            sessions: SessionLayout::default(),
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_output_extension(&self.output_xlsx_file_name)?;
        validate_non_empty_string("student_csv_file_name", &self.student_csv_file_name)?;
        validate_path("paths.input_dir", &self.input_dir.to_string_lossy())?;
        validate_path("paths.output_dir", &self.output_dir.to_string_lossy())?;
        if let Some(image_path) = &self.image_path {
            validate_path("image_path", &image_path.to_string_lossy())?;
        }
        validate_url("image.endpoint", &self.image_endpoint)?;

        validate_non_empty_string("roster.first_name_column", &self.roster.first_name_column)?;
        validate_non_empty_string("roster.last_name_column", &self.roster.last_name_column)?;

        validate_range("sessions.count", self.sessions.count, 1, MAX_SESSION_COUNT)?;
        validate_range("sessions.column_padding", self.sessions.column_padding, 0, 50)?;
        validate_range("sessions.image_scale", self.sessions.image_scale, 0.01, 10.0)?;
        Ok(())
    }
}
