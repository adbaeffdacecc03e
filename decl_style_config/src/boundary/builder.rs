use super::types::BoundaryCheck;
use crate::check_builder::CheckBuilder;
use crate::{ConfiguredCheck, Severity};

/// Extension trait that adds boundary-spacing configuration to CheckBuilder
pub trait BoundaryExt {
    /// Build a check rule verifying blank-line boundaries between declarations
    fn boundary(&mut self) -> BoundaryCheckBuilder<'_>;
}

impl BoundaryExt for CheckBuilder {
    fn boundary(&mut self) -> BoundaryCheckBuilder<'_> {
        BoundaryCheckBuilder {
            parent: self,
            check: BoundaryCheck::default(),
        }
    }
}

/// Builder for configuring a boundary check
pub struct BoundaryCheckBuilder<'a> {
    parent: &'a mut CheckBuilder,
    check: BoundaryCheck,
}

impl<'a> BoundaryCheckBuilder<'a> {
    /// Give the check a name used in violation reports
    pub fn check_named(mut self, name: impl Into<String>) -> Self {
        self.check.name = name.into();
        self
    }

    /// Exempt pairs whose combined line span is below this length
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.check.min_length = min_length;
        self
    }

    /// Modifier-set template the preceding declaration must satisfy
    pub fn after(mut self, template: impl Into<String>) -> Self {
        self.check.after = template.into();
        self
    }

    /// Modifier-set template the following declaration must satisfy
    pub fn before(mut self, template: impl Into<String>) -> Self {
        self.check.before = template.into();
        self
    }

    /// Required minimum number of blank lines between the pair
    pub fn min_new_lines(mut self, min_new_lines: usize) -> Self {
        self.check.min_new_lines = min_new_lines;
        self
    }

    /// Cap on comment lines counted as blanks; 0 skips them entirely
    pub fn comment_lines_cap(mut self, cap: usize) -> Self {
        self.check.comment_lines_cap = cap;
        self
    }

    /// Set the severity reported for violations of this check
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.check.severity = severity;
        self
    }

    /// Finalize the check and return to the parent builder
    pub fn build(self) -> &'a mut CheckBuilder {
        self.parent.push(ConfiguredCheck::Boundary(self.check));
        self.parent
    }
}
