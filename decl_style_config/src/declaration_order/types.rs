use serde::{Deserialize, Serialize};

use crate::Severity;

/// Configuration for the across-declarations ordering check. The template
/// uses the order grammar; each declaration is classified into the
/// best-matching group by the full-spec-set test, and matched groups must
/// appear in non-decreasing template order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeclarationOrderCheck {
    pub name: String,
    pub template: String,
    pub severity: Severity,
}

impl Default for DeclarationOrderCheck {
    fn default() -> Self {
        Self {
            name: "declaration_order".to_string(),
            template: String::new(),
            severity: Severity::default(),
        }
    }
}
