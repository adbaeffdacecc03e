pub mod boundary;
pub mod declaration_order;
pub mod member_group;
pub mod modifier_order;

pub use boundary::BoundaryRule;
pub use declaration_order::DeclarationOrderRule;
pub use member_group::MemberGroupRule;
pub use modifier_order::ModifierOrderRule;
