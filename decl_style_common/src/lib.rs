// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

pub mod declaration;
pub mod violation;

pub use declaration::{Container, Declaration, DeclarationKind, Modifier, SourceBuffer, SourceLines};
pub use violation::{CheckReport, Severity, Violation};
