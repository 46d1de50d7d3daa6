//! Bioscope extraction crate - text normalization and entity extraction.
//!
//! Turns raw publication fields into typed entity mentions using a fixed
//! pattern/keyword vocabulary. Recall is deliberately precision-biased:
//! text that matches nothing simply contributes no entities.

pub mod extractor;
pub mod normalize;
pub mod vocab;

pub use extractor::{DocumentEntities, EntityExtractor};
pub use normalize::normalize;
