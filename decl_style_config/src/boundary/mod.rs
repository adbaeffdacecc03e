// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

mod builder;
/// Boundary module configures the inter-declaration spacing check: when an
/// adjacent declaration pair matches the `after`/`before` modifier-set
/// templates, the blank-line interval between them must meet a minimum.
///
/// # Example
/// ```
/// use decl_style_config::{BoundaryExt, CheckBuilder};
///
/// let mut builder = CheckBuilder::new();
///
/// builder.boundary()
///     .check_named("blank_line_before_method")
///     .after("field,method")
///     .before("method")
///     .min_new_lines(1)
///     .build();
/// ```
mod types;

pub use builder::{BoundaryCheckBuilder, BoundaryExt};
pub use types::BoundaryCheck;
