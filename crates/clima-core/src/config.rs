//! Configuration module
//!
//! This module provides configuration structures for the gateway service:
//! server basics, upload limits and allow-lists, and per-type size caps for
//! the climate document validator. Loaded once from the environment at
//! startup and injected read-only into every component.

use std::env;

use crate::models::ClimateFileType;

// Common constants
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_FILE_SIZE_MB: usize = 50;
const DEFAULT_MAX_FILES: usize = 5;
const DEFAULT_UPLOAD_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_TYPE_MAX_SIZE_MB: usize = 10;

const DEFAULT_ALLOWED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "text/csv",
    "text/plain",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
];

const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["pdf", "csv", "txt", "docx", "xlsx"];

/// Base configuration shared by the whole service
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub app_name: String,
    pub app_version: String,
}

/// Upload limits and allow-lists consumed by the generic file validator
/// and the upload orchestrator.
#[derive(Clone, Debug)]
pub struct FileUploadConfig {
    pub max_file_size_bytes: usize,
    pub max_files: usize,
    pub allowed_mime_types: Vec<String>,
    /// Lowercase, without the leading dot.
    pub allowed_extensions: Vec<String>,
    pub upload_timeout_ms: u64,
    /// Base URL of the external processing service. Absence triggers
    /// skip-mode: uploads are accepted and reported successful without
    /// being forwarded.
    pub python_service_url: Option<String>,
}

/// Per-file-type size caps for the climate document validator.
#[derive(Clone, Debug)]
pub struct ClimateValidationConfig {
    pub pdf_max_file_size: usize,
    pub csv_max_file_size: usize,
    pub txt_max_file_size: usize,
    pub docx_max_file_size: usize,
    pub xlsx_max_file_size: usize,
}

impl ClimateValidationConfig {
    /// Maximum size for a climate file type.
    pub fn max_size_for(&self, file_type: ClimateFileType) -> usize {
        match file_type {
            ClimateFileType::Pdf => self.pdf_max_file_size,
            ClimateFileType::Csv => self.csv_max_file_size,
            ClimateFileType::Txt => self.txt_max_file_size,
            ClimateFileType::Docx => self.docx_max_file_size,
            ClimateFileType::Xlsx => self.xlsx_max_file_size,
        }
    }
}

impl Default for ClimateValidationConfig {
    fn default() -> Self {
        let default_max = DEFAULT_TYPE_MAX_SIZE_MB * 1024 * 1024;
        Self {
            pdf_max_file_size: default_max,
            csv_max_file_size: default_max,
            txt_max_file_size: default_max,
            docx_max_file_size: default_max,
            xlsx_max_file_size: default_max,
        }
    }
}

/// Full gateway configuration
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub base: BaseConfig,
    pub file_upload: FileUploadConfig,
    pub climate: ClimateValidationConfig,
}

/// Process-wide configuration handle, constructed once at startup.
#[derive(Clone, Debug)]
pub struct Config(pub Box<GatewayConfig>);

impl Config {
    fn inner(&self) -> &GatewayConfig {
        &self.0
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment().to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        // Best-effort .env loading for local development.
        dotenvy::dotenv().ok();
        let config = GatewayConfig::from_env()?;
        let config = Config(Box::new(config));
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        let upload = &self.inner().file_upload;
        if upload.max_file_size_bytes == 0 {
            anyhow::bail!("MAX_FILE_SIZE_MB must be greater than zero");
        }
        if upload.max_files == 0 {
            anyhow::bail!("MAX_FILES must be greater than zero");
        }
        if upload.allowed_mime_types.is_empty() {
            anyhow::bail!("ALLOWED_MIME_TYPES must not be empty");
        }
        if upload.allowed_extensions.is_empty() {
            anyhow::bail!("ALLOWED_EXTENSIONS must not be empty");
        }
        if upload.upload_timeout_ms == 0 {
            anyhow::bail!("UPLOAD_TIMEOUT_MS must be greater than zero");
        }
        if let Some(url) = &upload.python_service_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("PYTHON_SERVICE_URL must be an http(s) URL");
            }
        }
        Ok(())
    }

    pub fn server_port(&self) -> u16 {
        self.inner().base.server_port
    }

    pub fn environment(&self) -> &str {
        &self.inner().base.environment
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.inner().base.cors_origins
    }

    pub fn app_name(&self) -> &str {
        &self.inner().base.app_name
    }

    pub fn app_version(&self) -> &str {
        &self.inner().base.app_version
    }

    pub fn file_upload(&self) -> &FileUploadConfig {
        &self.inner().file_upload
    }

    pub fn climate(&self) -> &ClimateValidationConfig {
        &self.inner().climate
    }

    pub fn max_file_size_bytes(&self) -> usize {
        self.inner().file_upload.max_file_size_bytes
    }

    pub fn max_files(&self) -> usize {
        self.inner().file_upload.max_files
    }

    pub fn upload_timeout_ms(&self) -> u64 {
        self.inner().file_upload.upload_timeout_ms
    }

    pub fn python_service_url(&self) -> Option<&str> {
        self.inner().file_upload.python_service_url.as_deref()
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_mb(key: &str, default_mb: usize) -> usize {
    env_usize(key, default_mb).saturating_mul(1024 * 1024)
}

fn env_list(key: &str, defaults: &[&str]) -> Vec<String> {
    match env::var(key) {
        Ok(raw) => raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Err(_) => defaults.iter().map(|s| s.to_string()).collect(),
    }
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins = env_list("CORS_ORIGINS", &["*"]);

        // Extensions are stored lowercase without the leading dot so that
        // lookups after extension extraction are a plain contains().
        let allowed_extensions = env_list("ALLOWED_EXTENSIONS", DEFAULT_ALLOWED_EXTENSIONS)
            .into_iter()
            .map(|e| e.trim_start_matches('.').to_lowercase())
            .collect();

        let python_service_url = env::var("PYTHON_SERVICE_URL")
            .ok()
            .map(|s| s.trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            base: BaseConfig {
                server_port: env::var("PORT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_PORT),
                environment,
                cors_origins,
                app_name: env::var("APP_NAME")
                    .unwrap_or_else(|_| "clima-risk-gateway".to_string()),
                app_version: env::var("APP_VERSION")
                    .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            },
            file_upload: FileUploadConfig {
                max_file_size_bytes: env_mb("MAX_FILE_SIZE_MB", DEFAULT_MAX_FILE_SIZE_MB),
                max_files: env_usize("MAX_FILES", DEFAULT_MAX_FILES),
                allowed_mime_types: env_list("ALLOWED_MIME_TYPES", DEFAULT_ALLOWED_MIME_TYPES),
                allowed_extensions,
                upload_timeout_ms: env::var("UPLOAD_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_UPLOAD_TIMEOUT_MS),
                python_service_url,
            },
            climate: ClimateValidationConfig {
                pdf_max_file_size: env_mb("PDF_MAX_FILE_SIZE_MB", DEFAULT_TYPE_MAX_SIZE_MB),
                csv_max_file_size: env_mb("CSV_MAX_FILE_SIZE_MB", DEFAULT_TYPE_MAX_SIZE_MB),
                txt_max_file_size: env_mb("TXT_MAX_FILE_SIZE_MB", DEFAULT_TYPE_MAX_SIZE_MB),
                docx_max_file_size: env_mb("DOCX_MAX_FILE_SIZE_MB", DEFAULT_TYPE_MAX_SIZE_MB),
                xlsx_max_file_size: env_mb("XLSX_MAX_FILE_SIZE_MB", DEFAULT_TYPE_MAX_SIZE_MB),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config(Box::new(GatewayConfig {
            base: BaseConfig {
                server_port: 3000,
                environment: "test".to_string(),
                cors_origins: vec!["*".to_string()],
                app_name: "clima-risk-gateway".to_string(),
                app_version: "0.1.0".to_string(),
            },
            file_upload: FileUploadConfig {
                max_file_size_bytes: 50 * 1024 * 1024,
                max_files: 5,
                allowed_mime_types: DEFAULT_ALLOWED_MIME_TYPES
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                upload_timeout_ms: 30_000,
                python_service_url: None,
            },
            climate: ClimateValidationConfig::default(),
        }))
    }

    #[test]
    fn test_validate_ok() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_max_files() {
        let mut config = test_config();
        config.0.file_upload.max_files = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_service_url() {
        let mut config = test_config();
        config.0.file_upload.python_service_url = Some("not-a-url".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_climate_max_size_per_type() {
        let climate = ClimateValidationConfig {
            pdf_max_file_size: 1,
            csv_max_file_size: 2,
            txt_max_file_size: 3,
            docx_max_file_size: 4,
            xlsx_max_file_size: 5,
        };
        assert_eq!(climate.max_size_for(ClimateFileType::Pdf), 1);
        assert_eq!(climate.max_size_for(ClimateFileType::Xlsx), 5);
    }

    #[test]
    fn test_env_mb_saturates_on_huge_value() {
        // Key unique to this test so no other test races on it.
        env::set_var("CLIMA_TEST_HUGE_MB", usize::MAX.to_string());
        assert_eq!(env_mb("CLIMA_TEST_HUGE_MB", 10), usize::MAX);
        env::remove_var("CLIMA_TEST_HUGE_MB");
    }

    #[test]
    fn test_is_production() {
        let mut config = test_config();
        assert!(!config.is_production());
        config.0.base.environment = "Production".to_string();
        assert!(config.is_production());
    }
}
