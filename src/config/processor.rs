//! Downstream processor configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// How accepted payloads are handed to the text-processing script
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessorConfig {
    /// When false, accepted jobs are only logged
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Interpreter or executable to launch
    #[serde(default = "default_program")]
    pub program: String,

    /// Script passed as the first argument
    #[serde(default = "default_script")]
    pub script: PathBuf,
}

impl ProcessorConfig {
    /// Validate processor configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.enabled {
            return Ok(());
        }
        if self.program.trim().is_empty() {
            return Err(ValidationError::MissingRequired("PROCESSOR__PROGRAM"));
        }
        if self.script.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("PROCESSOR__SCRIPT"));
        }
        Ok(())
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            program: default_program(),
            script: default_script(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_program() -> String {
    "python".to_string()
}

fn default_script() -> PathBuf {
    PathBuf::from("script.py")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processor_defaults() {
        let config = ProcessorConfig::default();
        assert!(config.enabled);
        assert_eq!(config.program, "python");
        assert_eq!(config.script, PathBuf::from("script.py"));
    }

    #[test]
    fn test_empty_program_rejected_only_when_enabled() {
        let mut config = ProcessorConfig {
            program: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.enabled = false;
        assert!(config.validate().is_ok());
    }
}
