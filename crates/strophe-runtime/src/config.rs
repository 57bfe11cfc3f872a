// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Runtime configuration, loadable from a JSON file.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors produced while loading a runtime configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON for [`RuntimeConfig`].
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    /// `tick_rate` was zero.
    #[error("tick_rate must be greater than zero")]
    InvalidTickRate,
}

/// Settings for the frame-loop driver.
///
/// Missing fields fall back to their defaults, so a config file may name
/// only the settings it overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Target frame ticks per second.
    pub tick_rate: u32,

    /// Stop after this many frames. `None` runs until the process is torn
    /// down, which is what a real game session wants; bounded runs are for
    /// demos and tests.
    pub max_frames: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            max_frames: None,
        }
    }
}

impl RuntimeConfig {
    /// Loads and validates a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::InvalidTickRate);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("runtime.json");
        fs::write(&path, body).expect("write test config");
        path
    }

    #[test]
    fn defaults_are_sixty_hertz_unbounded() {
        let config = RuntimeConfig::default();
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.max_frames, None);
    }

    #[test]
    fn loads_a_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, r#"{ "tick_rate": 120, "max_frames": 5 }"#);

        let config = RuntimeConfig::from_file(path).unwrap();
        assert_eq!(config.tick_rate, 120);
        assert_eq!(config.max_frames, Some(5));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "{}");

        let config = RuntimeConfig::from_file(path).unwrap();
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.max_frames, None);
    }

    #[test]
    fn rejects_a_zero_tick_rate() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, r#"{ "tick_rate": 0 }"#);

        assert!(matches!(
            RuntimeConfig::from_file(path),
            Err(ConfigError::InvalidTickRate)
        ));
    }

    #[test]
    fn reports_unreadable_files_as_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        assert!(matches!(
            RuntimeConfig::from_file(missing),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn reports_bad_json_as_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "tick_rate = 60");

        assert!(matches!(
            RuntimeConfig::from_file(path),
            Err(ConfigError::Parse(_))
        ));
    }
}
