// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

//! The two template grammars and their compiled models.
//!
//! *Order templates* ("`public static`, `final`" or wide-space separated)
//! compile to an [`Order`]: ordered groups of expected modifiers, used both
//! for within-declaration ordering and as a set-matcher for boundary rules.
//!
//! *Group-set templates* compile to a list of [`ExpectedGroup`]s: ordered
//! alternatives of required-modifier sets, where the first alternative starts
//! the group and the rest are helper (continuation) patterns.
//!
//! Parsing is pure and total: any input yields a model, a blank input yields
//! an empty one. Both models are built once at configuration time and shared
//! read-only across all checked containers.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use decl_style_common::Modifier;
use regex::Regex;

static ORDER_GROUP_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{3,}|,").expect("valid group split pattern"));
static WIDE_SPACE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{3,}").expect("valid wide space pattern"));
static SPACE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// The expected position of one modifier text within a compiled template:
/// the group it belongs to and its rank across the whole template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierOrder {
    pub modifier: String,
    pub has_args: bool,
    pub group_order: usize,
    pub order: usize,
}

impl ModifierOrder {
    /// Matches a concrete modifier against this spec. With `ignore_args` an
    /// argument-agnostic spec accepts any spelling of the text; a spec that
    /// requires arguments still insists on them.
    pub fn matches(&self, modifier: &Modifier, ignore_args: bool) -> bool {
        if ignore_args && !self.has_args {
            return self.modifier == modifier.text;
        }
        self.modifier == modifier.text && self.has_args == modifier.has_args
    }

    fn matches_any(&self, modifiers: &[Modifier]) -> bool {
        modifiers.iter().any(|modifier| self.matches(modifier, true))
    }
}

impl fmt::Display for ModifierOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_args {
            write!(f, "{}()", self.modifier)
        } else {
            write!(f, "{}", self.modifier)
        }
    }
}

/// One template group: the modifier specs declared together, in declared
/// order, plus the group's 0-based position in the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOrder {
    pub modifiers: Vec<ModifierOrder>,
    pub order: usize,
}

impl GroupOrder {
    pub fn get_order(&self, modifier: &Modifier, ignore_args: bool) -> Option<&ModifierOrder> {
        self.modifiers
            .iter()
            .find(|spec| spec.matches(modifier, ignore_args))
    }

    /// True when every spec of this group is present among `modifiers`.
    pub fn matches(&self, modifiers: &[Modifier]) -> bool {
        self.modifiers.iter().all(|spec| spec.matches_any(modifiers))
    }
}

impl fmt::Display for GroupOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.modifiers.iter().map(ModifierOrder::to_string).collect();
        write!(f, "{}", rendered.join(" "))
    }
}

/// A compiled order template. Groups are kept in declaration sequence;
/// `order` values increase monotonically with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    pub groups: Vec<GroupOrder>,
}

impl Order {
    /// Compiles an order template. Groups split on a comma or three-or-more
    /// consecutive spaces, modifiers within a group on whitespace. A spec
    /// written `name(...)` requires arguments and is stored as `name`.
    /// Blank groups are skipped without advancing any counter.
    pub fn parse(template: &str) -> Self {
        let mut groups: Vec<GroupOrder> = Vec::new();
        let mut order = 0;

        for group_text in ORDER_GROUP_SPLIT.split(template) {
            if group_text.trim().is_empty() {
                continue;
            }

            let group_order = groups.len();
            let mut modifiers = Vec::new();
            for spec in SPACE_SPLIT.split(group_text) {
                let spec = spec.trim();
                if spec.is_empty() {
                    continue;
                }

                let has_args = spec.contains('(') && spec.contains(')');
                let text = spec.split_once('(').map_or(spec, |(name, _)| name);
                modifiers.push(ModifierOrder {
                    modifier: text.trim().to_string(),
                    has_args,
                    group_order,
                    order,
                });
                order += 1;
            }
            groups.push(GroupOrder {
                modifiers,
                order: group_order,
            });
        }

        Self { groups }
    }

    /// The best-matching group for a declaration's modifier list: among
    /// groups whose entire spec set is present, the one with the most specs.
    /// Ties go to the first-declared group.
    pub fn group_for(&self, modifiers: &[Modifier]) -> Option<&GroupOrder> {
        let mut best: Option<&GroupOrder> = None;
        for group in self.groups.iter().filter(|group| group.matches(modifiers)) {
            match best {
                Some(current) if group.modifiers.len() <= current.modifiers.len() => {}
                _ => best = Some(group),
            }
        }
        best
    }

    /// The expected position of a single modifier. When both an
    /// argument-specific and an argument-agnostic spec exist for the same
    /// text, a modifier with arguments prefers the argument-specific one,
    /// and a modifier without arguments can only match the agnostic one.
    pub fn order_for(&self, modifier: &Modifier) -> Option<&ModifierOrder> {
        if !modifier.has_args {
            return self.order_for_args(modifier, true);
        }
        self.order_for_args(modifier, false)
            .or_else(|| self.order_for_args(modifier, true))
    }

    fn order_for_args(&self, modifier: &Modifier, ignore_args: bool) -> Option<&ModifierOrder> {
        self.groups
            .iter()
            .find_map(|group| group.get_order(modifier, ignore_args))
    }

    /// Set-matcher view used by boundary rules: an empty template matches
    /// everything, otherwise any fully-present group accepts.
    pub fn matches(&self, modifiers: &[Modifier]) -> bool {
        if self.groups.is_empty() {
            return true;
        }
        self.groups.iter().any(|group| group.matches(modifiers))
    }
}

/// One alternative of a member group: the modifier texts that must all be
/// present (extra actual modifiers are ignored).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedMember {
    pub modifiers: Vec<String>,
}

impl ExpectedMember {
    pub fn matches(&self, actual: &HashSet<&str>) -> bool {
        self.modifiers.iter().all(|required| actual.contains(required.as_str()))
    }
}

impl fmt::Display for ExpectedMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.modifiers.join(" "))
    }
}

/// A member group: alternative #0 starts the group, the rest are helper
/// patterns that continue it without triggering a new group transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedGroup {
    pub alternatives: Vec<ExpectedMember>,
    pub order: usize,
}

impl ExpectedGroup {
    pub fn matches_group_start(&self, actual: &HashSet<&str>) -> bool {
        self.alternatives
            .first()
            .is_some_and(|primary| primary.matches(actual))
    }

    pub fn matches_helper(&self, actual: &HashSet<&str>) -> bool {
        self.alternatives
            .iter()
            .skip(1)
            .any(|helper| helper.matches(actual))
    }

    /// Compiles a group-set template: groups split on three-or-more
    /// consecutive whitespace characters (newlines included), alternatives
    /// within a group on commas, modifiers within an alternative on spaces.
    /// Blank groups and blank alternatives are skipped.
    pub fn parse_groups(template: &str) -> Vec<ExpectedGroup> {
        let mut groups: Vec<ExpectedGroup> = Vec::new();

        for group_text in WIDE_SPACE_SPLIT.split(template) {
            if group_text.trim().is_empty() {
                continue;
            }

            let mut alternatives = Vec::new();
            for alternative in group_text.split(',') {
                let required: Vec<String> = SPACE_SPLIT
                    .split(alternative)
                    .map(str::trim)
                    .filter(|token| !token.is_empty())
                    .map(String::from)
                    .collect();
                if required.is_empty() {
                    continue;
                }
                alternatives.push(ExpectedMember { modifiers: required });
            }
            if alternatives.is_empty() {
                continue;
            }

            groups.push(ExpectedGroup {
                alternatives,
                order: groups.len(),
            });
        }

        groups
    }
}

impl fmt::Display for ExpectedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.alternatives.iter().map(ExpectedMember::to_string).collect();
        write!(f, "{}", rendered.join(", "))
    }
}
