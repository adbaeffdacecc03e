use super::types::DeclarationOrderCheck;
use crate::check_builder::CheckBuilder;
use crate::{ConfiguredCheck, Severity};

/// Extension trait that adds declaration-order configuration to CheckBuilder
pub trait DeclarationOrderExt {
    /// Build a check rule verifying the order of declarations in a container
    fn declaration_order(&mut self) -> DeclarationOrderCheckBuilder<'_>;
}

impl DeclarationOrderExt for CheckBuilder {
    fn declaration_order(&mut self) -> DeclarationOrderCheckBuilder<'_> {
        DeclarationOrderCheckBuilder {
            parent: self,
            check: DeclarationOrderCheck::default(),
        }
    }
}

/// Builder for configuring a declaration-order check
pub struct DeclarationOrderCheckBuilder<'a> {
    parent: &'a mut CheckBuilder,
    check: DeclarationOrderCheck,
}

impl<'a> DeclarationOrderCheckBuilder<'a> {
    /// Give the check a name used in violation reports
    pub fn check_named(mut self, name: impl Into<String>) -> Self {
        self.check.name = name.into();
        self
    }

    /// Order template classifying container children into groups
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.check.template = template.into();
        self
    }

    /// Set the severity reported for violations of this check
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.check.severity = severity;
        self
    }

    /// Finalize the check and return to the parent builder
    pub fn build(self) -> &'a mut CheckBuilder {
        self.parent.push(ConfiguredCheck::DeclarationOrder(self.check));
        self.parent
    }
}
