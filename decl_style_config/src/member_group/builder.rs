use super::types::MemberGroupCheck;
use crate::check_builder::CheckBuilder;
use crate::{ConfiguredCheck, Severity};

/// Extension trait that adds member-group configuration to CheckBuilder
pub trait MemberGroupExt {
    /// Build a check rule verifying member grouping and spacing
    fn member_group(&mut self) -> MemberGroupCheckBuilder<'_>;
}

impl MemberGroupExt for CheckBuilder {
    fn member_group(&mut self) -> MemberGroupCheckBuilder<'_> {
        MemberGroupCheckBuilder {
            parent: self,
            check: MemberGroupCheck::default(),
        }
    }
}

/// Builder for configuring a member-group check
pub struct MemberGroupCheckBuilder<'a> {
    parent: &'a mut CheckBuilder,
    check: MemberGroupCheck,
}

impl<'a> MemberGroupCheckBuilder<'a> {
    /// Give the check a name used in violation reports
    pub fn check_named(mut self, name: impl Into<String>) -> Self {
        self.check.name = name.into();
        self
    }

    /// Group-set template defining the expected member groups
    pub fn groups(mut self, template: impl Into<String>) -> Self {
        self.check.groups = template.into();
        self
    }

    /// Required interval between ordinary members of the same group
    pub fn member_interval(mut self, interval: usize) -> Self {
        self.check.member_interval = interval;
        self
    }

    /// Required interval inside a run of single-line members
    pub fn single_line_member_interval(mut self, interval: usize) -> Self {
        self.check.single_line_member_interval = interval;
        self
    }

    /// Required interval when a new group begins
    pub fn group_interval(mut self, interval: usize) -> Self {
        self.check.group_interval = interval;
        self
    }

    /// Set the severity reported for violations of this check
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.check.severity = severity;
        self
    }

    /// Finalize the check and return to the parent builder
    pub fn build(self) -> &'a mut CheckBuilder {
        self.parent.push(ConfiguredCheck::MemberGroup(self.check));
        self.parent
    }
}
