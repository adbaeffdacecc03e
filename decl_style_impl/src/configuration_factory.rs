// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use std::path::Path;

use anyhow::{Context, Result};
use decl_style_config::{CheckBuilder, ConfiguredCheck};

use crate::checks::{BoundaryRule, DeclarationOrderRule, MemberGroupRule, ModifierOrderRule};
use crate::StyleCheckRule;

///
/// Turns persisted check configurations into runnable `StyleCheckRule`s.
///
pub struct CheckConfigurationFactory;

impl CheckConfigurationFactory {
    /// Load a RON configuration file and produce a list of `StyleCheckRule`s.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Box<dyn StyleCheckRule>>> {
        let builder = CheckBuilder::read_from_file(path)?;
        Ok(Self::from_checks(&builder.checks))
    }

    /// Parse a RON configuration string and produce a list of `StyleCheckRule`s.
    pub fn from_content(content: &str) -> Result<Vec<Box<dyn StyleCheckRule>>> {
        let checks: Vec<ConfiguredCheck> =
            ron::from_str(content).context("Failed to parse check configuration")?;
        Ok(Self::from_checks(&checks))
    }

    pub fn from_checks(checks: &[ConfiguredCheck]) -> Vec<Box<dyn StyleCheckRule>> {
        checks.iter().map(Self::build_rule).collect()
    }

    fn build_rule(check: &ConfiguredCheck) -> Box<dyn StyleCheckRule> {
        match check {
            ConfiguredCheck::ModifierOrder(_) => ModifierOrderRule::new(check),
            ConfiguredCheck::DeclarationOrder(_) => DeclarationOrderRule::new(check),
            ConfiguredCheck::Boundary(_) => BoundaryRule::new(check),
            ConfiguredCheck::MemberGroup(_) => MemberGroupRule::new(check),
        }
    }
}
