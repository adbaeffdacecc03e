// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

pub mod checks;
pub mod helpers;

mod check_collection;
mod configuration_factory;
mod style_check_rule;

// Re-export our public API
pub use check_collection::StyleCheckCollection;
pub use configuration_factory::CheckConfigurationFactory;
pub use style_check_rule::StyleCheckRule;
