pub mod json;
pub mod path;
pub mod query;
pub mod validated;

/// Gives access to the value an extractor produced.
///
/// Implemented by the wrapping extractors so [`validated::Validated`] can validate
/// the value without knowing which extractor produced it.
pub trait Extractor {
    type Extracted;

    fn extracted(&self) -> &Self::Extracted;
}
