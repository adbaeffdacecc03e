// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

mod builder;
/// Modifier order module configures the within-declaration ordering check:
/// per declaration kind, a template of modifier groups that must appear in
/// order, grouped on the same line, with new groups on new lines.
///
/// # Example
/// ```
/// use decl_style_config::{CheckBuilder, ModifierOrderExt};
///
/// let mut builder = CheckBuilder::new();
///
/// builder.modifier_order()
///     .check_named("annotation_order")
///     .field_template("@Autowired @Value\n   private static final")
///     .build();
/// ```
mod types;

pub use builder::{ModifierOrderCheckBuilder, ModifierOrderExt};
pub use types::ModifierOrderCheck;
