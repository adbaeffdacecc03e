use serde::{Deserialize, Serialize};

use crate::Severity;

/// Configuration for a boundary spacing check on adjacent declaration pairs.
///
/// `after` and `before` use the order grammar but act purely as set-matchers:
/// the pair is checked only when the predecessor satisfies `after` and the
/// follower satisfies `before`. An empty template matches everything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryCheck {
    pub name: String,
    /// Pairs whose combined line span is below this are exempt.
    pub min_length: usize,
    /// Template the preceding declaration must satisfy.
    pub after: String,
    /// Template the following declaration must satisfy.
    pub before: String,
    /// Required minimum of blank lines between the pair.
    pub min_new_lines: usize,
    /// How many comment lines may count as blank lines when measuring the
    /// interval. `0` skips comment lines without counting them.
    pub comment_lines_cap: usize,
    pub severity: Severity,
}

impl Default for BoundaryCheck {
    fn default() -> Self {
        Self {
            name: "boundary".to_string(),
            min_length: 0,
            after: String::new(),
            before: String::new(),
            min_new_lines: 0,
            comment_lines_cap: usize::MAX,
            severity: Severity::default(),
        }
    }
}
