use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Application configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub analysis: AnalysisConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
    pub format: String, // "json" or "text"
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Classification strategy for single-text calls: "fine" or "coarse"
    pub granularity: String,
    /// Rows with trimmed text at most this long are dropped before scoring
    pub min_text_length: usize,
    /// Decimal places when displaying scores (exports keep full precision)
    pub display_decimals: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_directory: String,
    pub default_output_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
                format: "text".to_string(),
            },
            analysis: AnalysisConfig {
                granularity: "fine".to_string(),
                min_text_length: 3,
                display_decimals: 3,
            },
            export: ExportConfig {
                output_directory: "./output".to_string(),
                default_output_file: "sentiment_results.csv".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder();
        // Start with default values
        for (key, value) in Self::default() {
            builder = builder.set_default(key, value)?;
        }
        let config = builder
            // Add config file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(File::with_name("config").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix("MOOD_METER").separator("_"))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

        let app_config: Self = config
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize configuration: {}", e))?;

        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log level: {}. Must be one of: {:?}",
                self.logging.level,
                valid_levels
            ));
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log format: {}. Must be one of: {:?}",
                self.logging.format,
                valid_formats
            ));
        }

        self.analysis
            .granularity
            .parse::<crate::classify::Granularity>()
            .map_err(|e| anyhow::anyhow!(e))?;

        if self.analysis.min_text_length > 10_000 {
            return Err(anyhow::anyhow!(
                "min_text_length too large (max 10,000 characters)"
            ));
        }

        if self.analysis.display_decimals > 10 {
            return Err(anyhow::anyhow!("display_decimals too large (max 10)"));
        }

        if self.export.output_directory.trim().is_empty() {
            return Err(anyhow::anyhow!("output_directory cannot be empty"));
        }

        if self.export.default_output_file.trim().is_empty() {
            return Err(anyhow::anyhow!("default_output_file cannot be empty"));
        }

        Ok(())
    }

    /// Get log level from environment or config
    pub fn get_log_level(&self) -> String {
        std::env::var("RUST_LOG").unwrap_or_else(|_| self.logging.level.clone())
    }

    /// Get the classification granularity for single-text calls
    pub fn get_granularity(&self) -> crate::classify::Granularity {
        self.analysis
            .granularity
            .parse()
            .unwrap_or(crate::classify::Granularity::Fine)
    }
}

impl IntoIterator for AppConfig {
    type Item = (String, config::Value);
    type IntoIter = std::collections::hash_map::IntoIter<String, config::Value>;

    fn into_iter(self) -> Self::IntoIter {
        let mut map = std::collections::HashMap::new();

        // Flatten the configuration into key-value pairs
        map.insert(
            "logging.level".to_string(),
            config::Value::from(self.logging.level),
        );
        if let Some(file_path) = self.logging.file_path {
            map.insert(
                "logging.file_path".to_string(),
                config::Value::from(file_path),
            );
        }
        map.insert(
            "logging.format".to_string(),
            config::Value::from(self.logging.format),
        );

        map.insert(
            "analysis.granularity".to_string(),
            config::Value::from(self.analysis.granularity),
        );
        map.insert(
            "analysis.min_text_length".to_string(),
            config::Value::from(self.analysis.min_text_length as u64),
        );
        map.insert(
            "analysis.display_decimals".to_string(),
            config::Value::from(self.analysis.display_decimals as u64),
        );

        map.insert(
            "export.output_directory".to_string(),
            config::Value::from(self.export.output_directory),
        );
        map.insert(
            "export.default_output_file".to_string(),
            config::Value::from(self.export.default_output_file),
        );

        map.into_iter()
    }
}
