// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use std::fs::File;

use anyhow::{Context, Result};
use ron::de::from_reader;
use ron::ser::{PrettyConfig, to_writer_pretty};
use serde::{Deserialize, Serialize};

use crate::ConfiguredCheck;

/// Accumulates configured checks and round-trips them through RON files.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CheckBuilder {
    pub checks: Vec<ConfiguredCheck>,
}

impl CheckBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, check: ConfiguredCheck) {
        self.checks.push(check);
    }

    pub fn build(self) -> Vec<ConfiguredCheck> {
        self.checks
    }

    /// Write the configured checks to a RON file.
    pub fn write_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())
            .with_context(|| format!("Failed to create {}", path.as_ref().display()))?;
        to_writer_pretty(file, &self.checks, PrettyConfig::default())
            .context("Failed to serialize check configuration")?;
        Ok(())
    }

    /// Read configured checks back from a RON file.
    pub fn read_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("Failed to open {}", path.as_ref().display()))?;
        let checks: Vec<ConfiguredCheck> =
            from_reader(file).context("Failed to parse check configuration")?;
        Ok(CheckBuilder { checks })
    }
}
