// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use decl_style_common::{CheckReport, Container, SourceLines, Violation};

use crate::StyleCheckRule;

///
/// Collects a set of style checks configured and ready to run.
///
pub struct StyleCheckCollection {
    checks: Vec<Box<dyn StyleCheckRule>>,
}

impl StyleCheckCollection {
    pub fn new(checks: Vec<Box<dyn StyleCheckRule>>) -> StyleCheckCollection {
        StyleCheckCollection { checks }
    }

    pub fn checks(&self) -> &Vec<Box<dyn StyleCheckRule>> {
        &self.checks
    }

    /// Runs every configured check against one container, in configuration
    /// order, and concatenates the violations.
    pub fn check_container(
        &self,
        container: &Container,
        source: &dyn SourceLines,
    ) -> Vec<Violation> {
        self.checks
            .iter()
            .flat_map(|check| check.check(container, source))
            .collect()
    }

    /// Runs the whole collection over a sequence of containers and wraps
    /// the results in a report.
    pub fn check_all(
        &self,
        containers: &[Container],
        source: &dyn SourceLines,
    ) -> CheckReport {
        let violations = containers
            .iter()
            .flat_map(|container| self.check_container(container, source))
            .collect();
        CheckReport::new(violations)
    }
}
