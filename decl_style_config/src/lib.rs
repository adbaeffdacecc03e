// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

pub mod check_builder;
pub mod template;

mod boundary;
mod declaration_order;
mod member_group;
mod modifier_order;

pub use boundary::{BoundaryCheck, BoundaryCheckBuilder, BoundaryExt};
pub use check_builder::CheckBuilder;
pub use declaration_order::{DeclarationOrderCheck, DeclarationOrderCheckBuilder, DeclarationOrderExt};
pub use member_group::{MemberGroupCheck, MemberGroupCheckBuilder, MemberGroupExt};
pub use modifier_order::{ModifierOrderCheck, ModifierOrderCheckBuilder, ModifierOrderExt};
pub use template::{ExpectedGroup, ExpectedMember, GroupOrder, ModifierOrder, Order};

// Severity rides along with every configured check; it lives in the common
// crate next to Violation.
pub use decl_style_common::Severity;

use serde::{Deserialize, Serialize};

/// One fully-configured check, as stored in a RON configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ConfiguredCheck {
    ModifierOrder(ModifierOrderCheck),
    DeclarationOrder(DeclarationOrderCheck),
    Boundary(BoundaryCheck),
    MemberGroup(MemberGroupCheck),
}
