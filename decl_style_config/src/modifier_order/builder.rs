use super::types::ModifierOrderCheck;
use crate::check_builder::CheckBuilder;
use crate::{ConfiguredCheck, Severity};

/// Extension trait that adds modifier-order configuration to CheckBuilder
pub trait ModifierOrderExt {
    /// Build a check rule verifying modifier order within declarations
    fn modifier_order(&mut self) -> ModifierOrderCheckBuilder<'_>;
}

impl ModifierOrderExt for CheckBuilder {
    fn modifier_order(&mut self) -> ModifierOrderCheckBuilder<'_> {
        ModifierOrderCheckBuilder {
            parent: self,
            check: ModifierOrderCheck::default(),
        }
    }
}

/// Builder for configuring a modifier-order check
pub struct ModifierOrderCheckBuilder<'a> {
    parent: &'a mut CheckBuilder,
    check: ModifierOrderCheck,
}

impl<'a> ModifierOrderCheckBuilder<'a> {
    /// Give the check a name used in violation reports
    pub fn check_named(mut self, name: impl Into<String>) -> Self {
        self.check.name = name.into();
        self
    }

    /// Order template for type declarations
    pub fn type_template(mut self, template: impl Into<String>) -> Self {
        self.check.type_template = template.into();
        self
    }

    /// Order template for field declarations
    pub fn field_template(mut self, template: impl Into<String>) -> Self {
        self.check.field_template = template.into();
        self
    }

    /// Order template for methods and constructors
    pub fn method_template(mut self, template: impl Into<String>) -> Self {
        self.check.method_template = template.into();
        self
    }

    /// Set the severity reported for violations of this check
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.check.severity = severity;
        self
    }

    /// Finalize the check and return to the parent builder
    pub fn build(self) -> &'a mut CheckBuilder {
        self.parent.push(ConfiguredCheck::ModifierOrder(self.check));
        self.parent
    }
}
