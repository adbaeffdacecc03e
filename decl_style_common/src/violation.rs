// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use std::fs;
use std::path::Path;

use ansi_term::Color;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Severity levels for check results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Severity {
    Info,
    #[default]
    Warn,
    Error,
}

/// One style violation raised by a check.
///
/// The message is kept as a positional template plus arguments so hosts can
/// re-render or localize it; `message()` fills the placeholders in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The kind of check itself ("modifier_order", "boundary", ...)
    pub check: String,

    /// The name of this configured check rule (user supplied)
    pub check_name: String,

    /// 1-based line the violation points at.
    pub line: usize,
    /// 0-based column the violation points at.
    pub col: usize,

    /// Message shape with `{0}`, `{1}`, ... placeholders.
    pub message_template: String,
    /// Positional renderings substituted into the template.
    pub args: Vec<String>,

    pub severity: Severity,
}

impl Violation {
    pub fn new(
        check: impl Into<String>,
        check_name: impl Into<String>,
        severity: Severity,
        line: usize,
        col: usize,
        message_template: &str,
        args: Vec<String>,
    ) -> Self {
        Self {
            check: check.into(),
            check_name: check_name.into(),
            line,
            col,
            message_template: message_template.to_string(),
            args,
            severity,
        }
    }

    /// The message with all positional placeholders substituted.
    pub fn message(&self) -> String {
        let mut message = self.message_template.clone();
        for (index, arg) in self.args.iter().enumerate() {
            message = message.replace(&format!("{{{index}}}"), arg);
        }
        message
    }

    fn severity_to_string(&self) -> String {
        match self.severity {
            Severity::Info => Color::Cyan.paint("info").to_string(),
            Severity::Warn => Color::Yellow.paint("warning").to_string(),
            Severity::Error => Color::Red.paint("error").to_string(),
        }
    }

    /// Convert the violation to a user-readable string with line information
    pub fn render(&self) -> String {
        format!(
            "{} [{}::{}]: {}:{} {}",
            self.severity_to_string(),
            self.check,
            self.check_name,
            self.line,
            self.col,
            self.message(),
        )
    }
}

/// All violations collected by one run, serializable for machine consumers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckReport {
    pub violations: Vec<Violation>,
}

impl CheckReport {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Save the report as JSON to the given path.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize check report")?;
        fs::write(path.as_ref(), json)
            .with_context(|| format!("Failed to write check report to {}", path.as_ref().display()))?;
        Ok(())
    }

    /// Load a report previously written with `save`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read check report from {}", path.as_ref().display()))?;
        serde_json::from_str(&json).context("Failed to parse check report")
    }
}
