use serde::{Deserialize, Serialize};

use crate::Severity;

/// Configuration for the member grouping and spacing check.
///
/// `groups` uses the group-set grammar: groups separated by three-or-more
/// consecutive whitespace characters (newlines included), alternatives
/// within a group separated by commas. The first alternative of each group
/// starts the group; the rest are helper continuation patterns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberGroupCheck {
    pub name: String,
    pub groups: String,
    /// Required interval between ordinary members of the same group.
    pub member_interval: usize,
    /// Required interval inside a run of single-line members.
    pub single_line_member_interval: usize,
    /// Required interval when a new group begins.
    pub group_interval: usize,
    pub severity: Severity,
}

impl Default for MemberGroupCheck {
    fn default() -> Self {
        Self {
            name: "member_group".to_string(),
            groups: String::new(),
            member_interval: 1,
            single_line_member_interval: 0,
            group_interval: 2,
            severity: Severity::default(),
        }
    }
}
