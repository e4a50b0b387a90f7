/// Numeric display helpers.
///
/// This module provides the formatting used when printing computed results:
/// values that are mathematically integers are rendered without a trailing
/// `.0`, while everything else uses the default floating-point rendering.
pub mod num;
