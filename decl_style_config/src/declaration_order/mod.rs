// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

mod builder;
/// Declaration order module configures the across-declarations ordering
/// check: a single template classifies each child of a container into a
/// group, and groups must appear in template order.
mod types;

pub use builder::{DeclarationOrderCheckBuilder, DeclarationOrderExt};
pub use types::DeclarationOrderCheck;
