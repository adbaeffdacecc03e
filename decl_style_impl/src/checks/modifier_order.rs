use std::collections::HashMap;

use decl_style_common::{Container, DeclarationKind, Modifier, Severity, SourceLines, Violation};
use decl_style_config::template::{ModifierOrder, Order};
use decl_style_config::ConfiguredCheck;

use crate::StyleCheckRule;

const CHECK: &str = "modifier_order";

const MSG_BEFORE: &str = "{0} must be placed before {1}";
const MSG_SAME_LINE: &str = "{0} must be placed on the same line with {1}";
const MSG_NEW_LINE: &str = "{0} must be placed on the new line after {1}";

/// Verifies that the modifiers of each declaration appear in template order:
/// earlier-template modifiers first, same-group modifiers on one line, and
/// each later group starting on a new line. The template is selected per
/// declaration kind; kinds without a template are skipped.
pub struct ModifierOrderRule {
    name: String,
    severity: Severity,
    templates: HashMap<DeclarationKind, Order>,
}

impl ModifierOrderRule {
    pub fn new(config: &ConfiguredCheck) -> Box<dyn StyleCheckRule> {
        if let ConfiguredCheck::ModifierOrder(c) = config {
            let mut templates = HashMap::new();
            templates.insert(DeclarationKind::Type, Order::parse(&c.type_template));
            templates.insert(DeclarationKind::Field, Order::parse(&c.field_template));
            let method_order = Order::parse(&c.method_template);
            templates.insert(DeclarationKind::Constructor, method_order.clone());
            templates.insert(DeclarationKind::Method, method_order);

            Box::new(Self {
                name: c.name.clone(),
                severity: c.severity,
                templates,
            })
        } else {
            panic!("Expected a ModifierOrder check configuration")
        }
    }

    fn violation(&self, modifier: &Modifier, template: &str, last: &Modifier) -> Violation {
        Violation::new(
            CHECK,
            &self.name,
            self.severity,
            modifier.line,
            modifier.col,
            template,
            vec![modifier.to_string(), last.to_string()],
        )
    }
}

impl StyleCheckRule for ModifierOrderRule {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn check(&self, container: &Container, _source: &dyn SourceLines) -> Vec<Violation> {
        let mut violations = Vec::new();

        for declaration in &container.declarations {
            let Some(order) = self.templates.get(&declaration.kind) else {
                continue;
            };

            // Unresolved modifiers are skipped and never become `last`.
            let mut last: Option<(&Modifier, &ModifierOrder)> = None;
            for modifier in &declaration.modifiers {
                let Some(expected) = order.order_for(modifier) else {
                    continue;
                };

                if let Some((last_modifier, last_expected)) = last {
                    if expected.order < last_expected.order {
                        violations.push(self.violation(modifier, MSG_BEFORE, last_modifier));
                    }
                    if expected.group_order == last_expected.group_order
                        && modifier.line != last_modifier.line
                    {
                        violations.push(self.violation(modifier, MSG_SAME_LINE, last_modifier));
                    }
                    if expected.group_order > last_expected.group_order
                        && modifier.line <= last_modifier.line
                    {
                        violations.push(self.violation(modifier, MSG_NEW_LINE, last_modifier));
                    }
                }

                last = Some((modifier, expected));
            }
        }

        violations
    }
}
