use decl_style_common::{Container, SourceLines, Violation};

///
/// One of our checks. A check is handed one container's worth of normalized
/// declarations plus read access to the physical source lines, and returns
/// the violations it found. Checks hold only their compiled configuration;
/// all per-pass state is local to `check`, so a configured check can be
/// shared freely across containers.
///
pub trait StyleCheckRule: Send + Sync {
    ///
    /// Returns the name of the check rule. This is the name specified
    /// in the check configuration.
    ///
    fn name(&self) -> String;

    ///
    /// Runs the check over one container, in a single pass over its
    /// declarations. Never fails: malformed templates degrade to
    /// non-matching, and everything user-visible is a violation.
    ///
    fn check(&self, container: &Container, source: &dyn SourceLines) -> Vec<Violation>;
}
