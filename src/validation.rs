use anyhow::{anyhow, Result};
use std::path::Path;

/// Validation utilities for input sanitization and edge case handling
#[derive(Debug, Copy, Clone)]
pub struct InputValidator;

impl InputValidator {
    /// Validate the designated text column name
    pub fn validate_column_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(anyhow!("Column name cannot be empty"));
        }

        if name.len() > 256 {
            return Err(anyhow!("Column name too long (max 256 characters)"));
        }

        if name.contains('\0') || name.contains('\r') || name.contains('\n') {
            return Err(anyhow!("Column name contains invalid characters"));
        }

        Ok(())
    }

    /// Validate an input or output file path
    pub fn validate_file_path(path: &Path) -> Result<()> {
        if path.to_string_lossy().is_empty() {
            return Err(anyhow!("File path cannot be empty"));
        }

        // Check for path traversal attempts
        let path_str = path.to_string_lossy();
        if path_str.contains("..") || path_str.contains('~') {
            return Err(anyhow!(
                "File path contains potentially dangerous characters"
            ));
        }

        if path_str.len() > 4096 {
            return Err(anyhow!("File path too long (max 4096 characters)"));
        }

        Ok(())
    }

    /// Validate an input file exists and is a regular file
    pub fn validate_input_file(path: &Path) -> Result<()> {
        Self::validate_file_path(path)?;

        if !path.exists() {
            return Err(anyhow!("Input file does not exist: {path:?}"));
        }

        if !path.is_file() {
            return Err(anyhow!("Input path is not a file: {path:?}"));
        }

        Ok(())
    }

    /// Validate the minimum text length filter threshold
    pub fn validate_min_text_length(length: usize) -> Result<()> {
        if length > 10_000 {
            return Err(anyhow!("Minimum text length too large (max 10,000)"));
        }

        Ok(())
    }

    /// Validate a classification granularity string
    pub fn validate_granularity(granularity: &str) -> Result<()> {
        granularity
            .parse::<crate::classify::Granularity>()
            .map(|_| ())
            .map_err(|e| anyhow!(e))
    }

    /// Sanitize text input
    #[must_use]
    pub fn sanitize_text(text: &str) -> String {
        text.chars()
            .filter(|c| !c.is_control() || *c == '\n' || *c == '\t' || *c == '\r')
            .collect::<String>()
            .trim()
            .to_string()
    }
}
