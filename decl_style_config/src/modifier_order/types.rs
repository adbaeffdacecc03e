use serde::{Deserialize, Serialize};

use crate::Severity;

/// Configuration for the within-declaration modifier ordering check.
///
/// Each template uses the order grammar: groups separated by a comma or
/// three-or-more spaces, modifiers within a group by single spaces,
/// `name(...)` marking argument-sensitive annotation specs. An empty
/// template disables the check for that declaration kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierOrderCheck {
    pub name: String,
    /// Template applied to type declarations.
    pub type_template: String,
    /// Template applied to field declarations.
    pub field_template: String,
    /// Template applied to methods and constructors.
    pub method_template: String,
    pub severity: Severity,
}

impl Default for ModifierOrderCheck {
    fn default() -> Self {
        Self {
            name: "modifier_order".to_string(),
            type_template: String::new(),
            field_template: String::new(),
            method_template: String::new(),
            severity: Severity::default(),
        }
    }
}
