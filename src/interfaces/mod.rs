use crate::ClassificationResult;

/// Presentation hook for classified numbers.
///
/// The crate ships no implementation: formatting rules for Algerian numbers
/// are left to the host application, which picks its own `Style` type.
pub trait NumberFormatter {
    type Style;

    fn format(&self, result: &ClassificationResult, style: &Self::Style) -> String;
}
