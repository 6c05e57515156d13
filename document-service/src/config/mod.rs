use crate::render::CompanyProfile;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "./invoices";

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    /// Directory that downloaded invoice PDFs are written to
    pub output_dir: PathBuf,
    pub company: CompanyProfile,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            company: CompanyProfile::default(),
        }
    }
}

impl DocumentConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let settings = core_config::builder().build()?;

        // The issuer profile is optional; any field left out keeps its default.
        let company = match settings.get::<CompanyProfile>("company") {
            Ok(company) => company,
            Err(::config::ConfigError::NotFound(_)) => CompanyProfile::default(),
            Err(e) => return Err(e.into()),
        };

        let output_dir = env::var("DOCUMENT_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR));

        Ok(DocumentConfig {
            common: common_config,
            output_dir,
            company,
        })
    }
}
