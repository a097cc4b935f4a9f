use crate::image_classifier::models::model_config::{InputLayout, ModelConfig};
use crate::library::error::{HerbalError, HerbalResult};
use crate::symptom_matcher::interface::MatchStrategy;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierKind {
    Onnx,
    Fake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Web,
    Desktop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Tracing,
    Console,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub model: ModelConfig,
    pub classifier: ClassifierKind,
    pub herb_table_path: PathBuf,
    pub match_strategy: MatchStrategy,
    pub fallback_herbs: Vec<String>,
    pub surface: Surface,
    pub log_output: LogOutput,
    pub log_level: String,
    pub logger_timezone: chrono::FixedOffset,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 7860,
            model: ModelConfig::default(),
            classifier: ClassifierKind::Onnx,
            herb_table_path: PathBuf::from("data/herb_data.csv"),
            match_strategy: MatchStrategy::Substring,
            fallback_herbs: vec!["Tulsi".to_string(), "Turmeric".to_string()],
            surface: Surface::Web,
            log_output: LogOutput::Tracing,
            log_level: "info".to_string(),
            logger_timezone: local_offset(),
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present; every variable is optional.
    pub fn from_env() -> HerbalResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_process_env()
    }

    /// Same as [`Config::from_env`] without reading `.env`.
    pub fn from_process_env() -> HerbalResult<Self> {
        let defaults = Self::default();

        let model = ModelConfig {
            onnx_model_path: get_var("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model.onnx_model_path),
            labels_path: get_var("LABELS_PATH").map(PathBuf::from),
            input_layout: match get_var("MODEL_INPUT_LAYOUT") {
                Some(value) => parse_layout(&value)?,
                None => defaults.model.input_layout,
            },
            ..defaults.model
        };

        Ok(Self {
            host: get_var("HOST").unwrap_or(defaults.host),
            port: match get_var("PORT") {
                Some(value) => value
                    .parse()
                    .map_err(|e| HerbalError::Config(format!("invalid PORT: {e}")))?,
                None => defaults.port,
            },
            model,
            classifier: match get_var("CLASSIFIER") {
                Some(value) => parse_classifier(&value)?,
                None => defaults.classifier,
            },
            herb_table_path: get_var("HERB_TABLE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.herb_table_path),
            match_strategy: match get_var("MATCH_STRATEGY") {
                Some(value) => value.parse()?,
                None => defaults.match_strategy,
            },
            fallback_herbs: defaults.fallback_herbs,
            surface: match get_var("SURFACE") {
                Some(value) => parse_surface(&value)?,
                None => defaults.surface,
            },
            log_output: match get_var("LOG_OUTPUT") {
                Some(value) => parse_log_output(&value)?,
                None => defaults.log_output,
            },
            log_level: get_var("LOG_LEVEL").unwrap_or(defaults.log_level),
            logger_timezone: defaults.logger_timezone,
            max_upload_bytes: match get_var("MAX_UPLOAD_BYTES") {
                Some(value) => value
                    .parse()
                    .map_err(|e| HerbalError::Config(format!("invalid MAX_UPLOAD_BYTES: {e}")))?,
                None => defaults.max_upload_bytes,
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn get_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_layout(value: &str) -> HerbalResult<InputLayout> {
    match value.to_lowercase().as_str() {
        "nhwc" => Ok(InputLayout::Nhwc),
        "nchw" => Ok(InputLayout::Nchw),
        other => Err(HerbalError::Config(format!(
            "invalid MODEL_INPUT_LAYOUT: {other} (expected nhwc or nchw)"
        ))),
    }
}

fn parse_classifier(value: &str) -> HerbalResult<ClassifierKind> {
    match value.to_lowercase().as_str() {
        "onnx" => Ok(ClassifierKind::Onnx),
        "fake" => Ok(ClassifierKind::Fake),
        other => Err(HerbalError::Config(format!(
            "invalid CLASSIFIER: {other} (expected onnx or fake)"
        ))),
    }
}

fn parse_surface(value: &str) -> HerbalResult<Surface> {
    match value.to_lowercase().as_str() {
        "web" => Ok(Surface::Web),
        "desktop" => Ok(Surface::Desktop),
        other => Err(HerbalError::Config(format!(
            "invalid SURFACE: {other} (expected web or desktop)"
        ))),
    }
}

fn parse_log_output(value: &str) -> HerbalResult<LogOutput> {
    match value.to_lowercase().as_str() {
        "tracing" => Ok(LogOutput::Tracing),
        "console" => Ok(LogOutput::Console),
        other => Err(HerbalError::Config(format!(
            "invalid LOG_OUTPUT: {other} (expected tracing or console)"
        ))),
    }
}

fn local_offset() -> chrono::FixedOffset {
    *chrono::Local::now().offset()
}
