// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

mod builder;
/// Member group module configures the richest check: members are classified
/// into an ordered list of groups (one primary pattern plus helper
/// continuation patterns each), group order must be monotonic, and spacing
/// differs between single-line runs, ordinary members and group transitions.
///
/// # Example
/// ```
/// use decl_style_config::{CheckBuilder, MemberGroupExt};
///
/// let mut builder = CheckBuilder::new();
///
/// builder.member_group()
///     .check_named("class_layout")
///     .groups("private static field\n   private field\n   public method, private method")
///     .member_interval(1)
///     .single_line_member_interval(0)
///     .group_interval(2)
///     .build();
/// ```
mod types;

pub use builder::{MemberGroupCheckBuilder, MemberGroupExt};
pub use types::MemberGroupCheck;
