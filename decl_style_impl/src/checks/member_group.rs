use decl_style_common::{Container, Declaration, DeclarationKind, Severity, SourceLines, Violation};
use decl_style_config::template::ExpectedGroup;
use decl_style_config::ConfiguredCheck;

use crate::helpers::interval::member_interval;
use crate::StyleCheckRule;

const CHECK: &str = "member_group";

const MSG_GROUP_ORDER: &str = "'{0}' members group must be placed before '{1}' group";
const MSG_GROUP_INTERVAL: &str =
    "Member groups must be separated by {0} line(s). Current interval: {1} line(s)";
const MSG_GROUP_OR_MEMBER_INTERVAL: &str =
    "Member groups must be separated by {0} or {1} line(s). Current interval: {2} line(s)";
const MSG_MEMBER_INTERVAL: &str =
    "Members must be separated by {0} line(s). Current interval: {1} line(s)";
const MSG_SINGLE_LINE_INTERVAL: &str =
    "Single-line members must be separated by {0} line(s). Current interval: {1} line(s)";

/// Classifies each member of a container against an ordered list of group
/// definitions and verifies two things in one pass: groups appear in
/// template order, and the interval before each member matches the regime
/// it is in - `group_interval` at a group transition, the single-line
/// interval inside a run of single-line members, `member_interval`
/// otherwise. Helper patterns continue a group without re-triggering a
/// transition.
pub struct MemberGroupRule {
    name: String,
    severity: Severity,
    groups: Vec<ExpectedGroup>,
    member_interval: usize,
    single_line_member_interval: usize,
    group_interval: usize,
}

impl MemberGroupRule {
    pub fn new(config: &ConfiguredCheck) -> Box<dyn StyleCheckRule> {
        if let ConfiguredCheck::MemberGroup(c) = config {
            Box::new(Self {
                name: c.name.clone(),
                severity: c.severity,
                groups: ExpectedGroup::parse_groups(&c.groups),
                member_interval: c.member_interval,
                single_line_member_interval: c.single_line_member_interval,
                group_interval: c.group_interval,
            })
        } else {
            panic!("Expected a MemberGroup check configuration")
        }
    }

    fn is_member(declaration: &Declaration) -> bool {
        matches!(
            declaration.kind,
            DeclarationKind::Field | DeclarationKind::Constructor | DeclarationKind::Method
        )
    }

    fn violation(
        &self,
        member: &Declaration,
        template: &str,
        args: Vec<String>,
    ) -> Violation {
        Violation::new(
            CHECK,
            &self.name,
            self.severity,
            member.line,
            member.col,
            template,
            args,
        )
    }

    fn require_interval(
        &self,
        member: &Declaration,
        starts_group: Option<&ExpectedGroup>,
        is_helper: bool,
        interval: usize,
        ordinary_interval: usize,
        violations: &mut Vec<Violation>,
    ) {
        if starts_group.is_some() {
            if interval == self.group_interval {
                return;
            }
            if is_helper {
                violations.push(self.violation(
                    member,
                    MSG_GROUP_OR_MEMBER_INTERVAL,
                    vec![
                        ordinary_interval.to_string(),
                        self.group_interval.to_string(),
                        interval.to_string(),
                    ],
                ));
            } else {
                violations.push(self.violation(
                    member,
                    MSG_GROUP_INTERVAL,
                    vec![self.group_interval.to_string(), interval.to_string()],
                ));
            }
        } else {
            if interval == ordinary_interval {
                return;
            }
            if ordinary_interval == self.member_interval {
                violations.push(self.violation(
                    member,
                    MSG_MEMBER_INTERVAL,
                    vec![ordinary_interval.to_string(), interval.to_string()],
                ));
            } else {
                violations.push(self.violation(
                    member,
                    MSG_SINGLE_LINE_INTERVAL,
                    vec![ordinary_interval.to_string(), interval.to_string()],
                ));
            }
        }
    }
}

impl StyleCheckRule for MemberGroupRule {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn check(&self, container: &Container, source: &dyn SourceLines) -> Vec<Violation> {
        let mut violations = Vec::new();

        let mut last_group: Option<&ExpectedGroup> = None;
        let mut helper_run = 0usize;
        let mut prev_single_line = container.header_is_single_line();

        for member in &container.declarations {
            if !Self::is_member(member) {
                // Ineligible siblings still count as predecessors.
                prev_single_line = member.is_single_line;
                continue;
            }

            let modifiers = member.modifier_set();
            let mut starts_group = self
                .groups
                .iter()
                .find(|group| group.matches_group_start(&modifiers));
            let is_helper = last_group.is_some_and(|group| group.matches_helper(&modifiers));
            let interval = member_interval(source, member.line);
            let ordinary_interval = if member.is_single_line && prev_single_line {
                self.single_line_member_interval
            } else {
                self.member_interval
            };

            // When multiple members belong to the same group -> require the
            // ordinary interval, not a fresh group transition.
            if helper_run == 0 {
                if let (Some(starting), Some(last)) = (starts_group, last_group) {
                    if starting.order == last.order {
                        starts_group = None;
                    }
                }
            }

            helper_run = if is_helper && interval == ordinary_interval {
                helper_run + 1
            } else {
                0
            };

            self.require_interval(
                member,
                starts_group,
                is_helper,
                interval,
                ordinary_interval,
                &mut violations,
            );

            if let Some(starting) = starts_group {
                if let Some(last) = last_group {
                    if starting.order < last.order {
                        violations.push(self.violation(
                            member,
                            MSG_GROUP_ORDER,
                            vec![starting.to_string(), last.to_string()],
                        ));
                    }
                }
                last_group = Some(starting);
            }

            prev_single_line = member.is_single_line;
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decl_style_common::{Modifier, SourceBuffer};
    use decl_style_config::{CheckBuilder, MemberGroupExt};

    const GROUPS: &str = "private static field\n   private field\n   @Override public method, private method\n   public method, private method";

    fn rule(groups: &str) -> Box<dyn StyleCheckRule> {
        let mut builder = CheckBuilder::new();
        builder
            .member_group()
            .check_named("layout")
            .groups(groups)
            .build();
        MemberGroupRule::new(&builder.checks[0])
    }

    fn member(kind: DeclarationKind, texts: &[&str], line: usize, line_span: usize) -> Declaration {
        Declaration {
            kind,
            modifiers: texts.iter().map(|t| Modifier::new(*t, line, 4)).collect(),
            line,
            col: 4,
            line_span,
            is_single_line: line_span == 1,
        }
    }

    fn field(texts: &[&str], line: usize) -> Declaration {
        member(DeclarationKind::Field, texts, line, 1)
    }

    fn method(texts: &[&str], line: usize, line_span: usize) -> Declaration {
        member(DeclarationKind::Method, texts, line, line_span)
    }

    #[test]
    fn consecutive_single_line_fields_require_tight_interval() {
        // class C
        // {
        //                      (line 3)
        //     int a;           (line 4)
        //
        //     int b;           (line 6)
        // }
        let source = SourceBuffer::new("class C\n{\n\nint a;\n\nint b;\n}\n");
        let container = Container::new(
            1,
            Some(2),
            vec![
                field(&["private", "field"], 4),
                field(&["private", "field"], 6),
            ],
        );

        let violations = rule(GROUPS).check(&container, &source);
        // The first field opens its group at the group interval; the
        // continuation at line 6 has interval 1 where the single-line
        // regime requires 0.
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line, 6);
        assert_eq!(
            violations[0].message(),
            "Single-line members must be separated by 0 line(s). Current interval: 1 line(s)"
        );
    }

    #[test]
    fn multi_line_members_require_member_interval() {
        // class C
        // {
        //
        //     void a() {       (line 4)
        //     }
        //     void b() {       (line 6)
        //     }
        // }
        let source = SourceBuffer::new("class C\n{\n\nvoid a() {\n}\nvoid b() {\n}\n}\n");
        let container = Container::new(
            1,
            Some(2),
            vec![
                method(&["public", "method"], 4, 2),
                method(&["public", "method"], 6, 2),
            ],
        );

        let violations = rule(GROUPS).check(&container, &source);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line, 6);
        assert_eq!(
            violations[0].message(),
            "Members must be separated by 1 line(s). Current interval: 0 line(s)"
        );
    }

    #[test]
    fn group_transition_requires_group_interval() {
        // class C
        // {
        //
        //     int a;           (line 4)
        //
        //     void m() {       (line 6)
        //     }
        // }
        let source = SourceBuffer::new("class C\n{\n\nint a;\n\nvoid m() {\n}\n}\n");
        let container = Container::new(
            1,
            Some(2),
            vec![
                field(&["private", "field"], 4),
                method(&["public", "method"], 6, 2),
            ],
        );

        let violations = rule(GROUPS).check(&container, &source);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line, 6);
        assert_eq!(
            violations[0].message(),
            "Member groups must be separated by 2 line(s). Current interval: 1 line(s)"
        );
    }

    #[test]
    fn conforming_layout_produces_no_violations() {
        // class C
        // {
        //
        //     int a;           (line 4)
        //     int b;
        //
        //
        //     void m() {       (line 8)
        //     }
        // }
        let source = SourceBuffer::new("class C\n{\n\nint a;\nint b;\n\n\nvoid m() {\n}\n}\n");
        let container = Container::new(
            1,
            Some(2),
            vec![
                field(&["private", "field"], 4),
                field(&["private", "field"], 5),
                method(&["public", "method"], 8, 2),
            ],
        );

        let violations = rule(GROUPS).check(&container, &source);
        assert!(violations.is_empty());
    }

    #[test]
    fn out_of_order_groups_are_reported() {
        // class C
        // {
        //
        //     void m() {       (line 4)
        //     }
        //
        //
        //     int a;           (line 8)
        // }
        let source = SourceBuffer::new("class C\n{\n\nvoid m() {\n}\n\n\nint a;\n}\n");
        let container = Container::new(
            1,
            Some(2),
            vec![
                method(&["public", "method"], 4, 2),
                field(&["private", "field"], 8),
            ],
        );

        let violations = rule("private field\n   public method").check(&container, &source);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line, 8);
        assert_eq!(
            violations[0].message(),
            "'private field' members group must be placed before 'public method' group"
        );
    }

    #[test]
    fn helper_members_continue_the_group() {
        // A private method right after a public one is a helper of the
        // method group; at the ordinary interval it neither starts a new
        // group nor violates spacing.
        //
        // class C
        // {
        //
        //     void a() {       (line 4)
        //     }
        //
        //     void b() {       (line 7)
        //     }
        // }
        let source = SourceBuffer::new("class C\n{\n\nvoid a() {\n}\n\nvoid b() {\n}\n}\n");
        let container = Container::new(
            1,
            Some(2),
            vec![
                method(&["public", "method"], 4, 2),
                method(&["private", "method"], 7, 2),
            ],
        );

        let violations = rule("field\n   public method, private method").check(&container, &source);
        assert!(violations.is_empty());
    }

    #[test]
    fn misplaced_helper_offers_both_intervals() {
        // `helper field` both opens its own group and continues the method
        // group as a helper; at neither interval, the message names both.
        //
        // class C
        // {
        //
        //     void a() {       (line 4)
        //     }
        //     int b;           (line 6)
        // }
        let source = SourceBuffer::new("class C\n{\n\nvoid a() {\n}\nint b;\n}\n");
        let container = Container::new(
            1,
            Some(2),
            vec![
                method(&["public", "method"], 4, 2),
                field(&["helper", "field"], 6),
            ],
        );

        let violations =
            rule("public method, helper field\n   helper field").check(&container, &source);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message(),
            "Member groups must be separated by 1 or 2 line(s). Current interval: 0 line(s)"
        );
    }

    #[test]
    fn single_line_helper_run_allows_reopening_the_group() {
        // Two single-line helpers at the tight interval follow the
        // group-starting member; the next primary member then reopens the
        // same group and is measured against the group interval.
        //
        // class C
        // {
        //
        //     void a() {}      (line 4)
        //     void b() {}
        //     void c() {}
        //
        //
        //     void d() {}      (line 9)
        // }
        let source = SourceBuffer::new(
            "class C\n{\n\nvoid a() {}\nvoid b() {}\nvoid c() {}\n\n\nvoid d() {}\n}\n",
        );
        let container = Container::new(
            1,
            Some(2),
            vec![
                method(&["public", "method"], 4, 1),
                method(&["private", "method"], 5, 1),
                method(&["private", "method"], 6, 1),
                method(&["public", "method"], 9, 1),
            ],
        );

        let violations = rule("public method, private method").check(&container, &source);
        assert!(violations.is_empty());
    }

    #[test]
    fn breaking_the_single_line_run_resets_the_helper_counter() {
        // A multi-line member interrupts the run, so both it and the next
        // member are measured against the plain member interval.
        //
        // class C
        // {
        //
        //     void a() {}      (line 4)
        //     void b() {       (line 5)
        //     }
        //     void c() {}      (line 7)
        // }
        let source =
            SourceBuffer::new("class C\n{\n\nvoid a() {}\nvoid b() {\n}\nvoid c() {}\n}\n");
        let container = Container::new(
            1,
            Some(2),
            vec![
                method(&["public", "method"], 4, 1),
                method(&["private", "method"], 5, 2),
                method(&["private", "method"], 7, 1),
            ],
        );

        let violations = rule("public method, private method").check(&container, &source);
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().all(|v| v.message()
            == "Members must be separated by 1 line(s). Current interval: 0 line(s)"));
    }

    #[test]
    fn first_member_after_open_brace_line_is_in_group_regime() {
        // @Annotation          (line 1)
        // class C {            (line 2)
        //     int a;           (line 3)
        // }
        let source = SourceBuffer::new("@Annotation\npublic class C {\nint a;\n}\n");
        let container = Container::new(1, Some(2), vec![field(&["private", "field"], 3)]);

        let violations = rule("private field").check(&container, &source);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line, 3);
        assert_eq!(
            violations[0].message(),
            "Member groups must be separated by 2 line(s). Current interval: 0 line(s)"
        );
    }

    #[test]
    fn empty_group_template_only_checks_member_intervals() {
        let source = SourceBuffer::new("class C {\nint a;\nint b;\n}\n");
        let container = Container::new(
            1,
            Some(1),
            vec![
                field(&["private", "field"], 2),
                field(&["private", "field"], 3),
            ],
        );

        let violations = rule("").check(&container, &source);
        assert!(violations.is_empty());
    }
}
