use decl_style_common::{Container, Severity, SourceLines, Violation};
use decl_style_config::template::{GroupOrder, Order};
use decl_style_config::ConfiguredCheck;

use crate::StyleCheckRule;

const CHECK: &str = "declaration_order";

const MSG_BEFORE: &str = "{0} must be placed before {1}";

/// Verifies the order of declarations within a container: each declaration
/// is classified into the best-matching template group by its full modifier
/// set, and matched groups must appear in non-decreasing template order.
/// Only ordering is checked here; line placement is the modifier-order
/// check's concern.
pub struct DeclarationOrderRule {
    name: String,
    severity: Severity,
    template: Order,
}

impl DeclarationOrderRule {
    pub fn new(config: &ConfiguredCheck) -> Box<dyn StyleCheckRule> {
        if let ConfiguredCheck::DeclarationOrder(c) = config {
            Box::new(Self {
                name: c.name.clone(),
                severity: c.severity,
                template: Order::parse(&c.template),
            })
        } else {
            panic!("Expected a DeclarationOrder check configuration")
        }
    }
}

impl StyleCheckRule for DeclarationOrderRule {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn check(&self, container: &Container, _source: &dyn SourceLines) -> Vec<Violation> {
        let mut violations = Vec::new();

        let mut last: Option<&GroupOrder> = None;
        for declaration in &container.declarations {
            let Some(group) = self.template.group_for(&declaration.modifiers) else {
                continue;
            };

            if let Some(last_group) = last {
                if group.order < last_group.order {
                    violations.push(Violation::new(
                        CHECK,
                        &self.name,
                        self.severity,
                        declaration.line,
                        declaration.col,
                        MSG_BEFORE,
                        vec![group.to_string(), last_group.to_string()],
                    ));
                }
            }
            last = Some(group);
        }

        violations
    }
}
