use decl_style_common::{Container, Severity, SourceLines, Violation};
use decl_style_config::template::Order;
use decl_style_config::ConfiguredCheck;

use crate::helpers::interval::boundary_interval;
use crate::StyleCheckRule;

const CHECK: &str = "boundary";

const MSG_INTERVAL: &str = "Current interval ({0} lines) is less than required: {1}";

/// Verifies the blank-line interval between adjacent declaration pairs.
/// A pair is checked only when the predecessor matches `after`, the
/// follower matches `before`, and the pair's combined line span reaches
/// `min_length`; the templates act purely as modifier-set matchers.
pub struct BoundaryRule {
    name: String,
    severity: Severity,
    min_length: usize,
    after: Order,
    before: Order,
    min_new_lines: usize,
    comment_lines_cap: usize,
}

impl BoundaryRule {
    pub fn new(config: &ConfiguredCheck) -> Box<dyn StyleCheckRule> {
        if let ConfiguredCheck::Boundary(c) = config {
            Box::new(Self {
                name: c.name.clone(),
                severity: c.severity,
                min_length: c.min_length,
                after: Order::parse(&c.after),
                before: Order::parse(&c.before),
                min_new_lines: c.min_new_lines,
                comment_lines_cap: c.comment_lines_cap,
            })
        } else {
            panic!("Expected a Boundary check configuration")
        }
    }
}

impl StyleCheckRule for BoundaryRule {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn check(&self, container: &Container, source: &dyn SourceLines) -> Vec<Violation> {
        let mut violations = Vec::new();

        for pair in container.declarations.windows(2) {
            let (predecessor, follower) = (&pair[0], &pair[1]);

            if !self.after.matches(&predecessor.modifiers) {
                continue;
            }
            if !self.before.matches(&follower.modifiers) {
                continue;
            }
            // Short-declaration exemption.
            if predecessor.line_span + follower.line_span < self.min_length {
                continue;
            }

            let interval = boundary_interval(source, follower.line, self.comment_lines_cap);
            if interval < self.min_new_lines {
                violations.push(Violation::new(
                    CHECK,
                    &self.name,
                    self.severity,
                    follower.line,
                    follower.col,
                    MSG_INTERVAL,
                    vec![interval.to_string(), self.min_new_lines.to_string()],
                ));
            }
        }

        violations
    }
}
