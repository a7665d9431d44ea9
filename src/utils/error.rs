use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssignerError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    #[error("Error reading student CSV file: {source}")]
    RosterReadError {
        #[source]
        source: Box<AssignerError>,
    },

    #[error("Error reading image for seed generation: {source}")]
    ImageReadError {
        #[source]
        source: std::io::Error,
    },

    #[error("Image endpoint {url} responded with status {status}")]
    ImageFetchError { url: String, status: u16 },

    #[error("Missing column '{column}' in student CSV header")]
    MissingColumnError { column: String },

    #[error("Output file should end with .xlsx")]
    OutputExtensionError { file_name: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AssignerError {
    pub fn roster_read(source: AssignerError) -> Self {
        AssignerError::RosterReadError {
            source: Box::new(source),
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            AssignerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AssignerError::ApiError(_) | AssignerError::ImageFetchError { .. } => {
                "Check the network connection or pass a local image with --image-path"
            }
            AssignerError::RosterReadError { .. }
            | AssignerError::CsvError(_)
            | AssignerError::MissingColumnError { .. } => {
                "Make sure the CSV exists in the input directory, is ';'-delimited and has the name columns"
            }
            AssignerError::ImageReadError { .. } => "Check that --image-path points to a readable file",
            AssignerError::XlsxError(_) => {
                "Make sure the seed image is a PNG, JPEG, GIF or BMP and the output directory is writable"
            }
            AssignerError::OutputExtensionError { .. } => "Use an output file name ending with .xlsx",
            AssignerError::ConfigValidationError { .. }
            | AssignerError::InvalidConfigValueError { .. } => {
                "Fix the flag or the TOML configuration value and try again"
            }
            AssignerError::IoError(_) => "Check file permissions and that the directories exist",
        }
    }
}

pub type Result<T> = std::result::Result<T, AssignerError>;
