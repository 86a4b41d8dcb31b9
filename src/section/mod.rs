mod catalog;
mod dimensions;
mod record;

pub use catalog::SectionCatalog;
pub use dimensions::{BoxDimensions, SectionShape};
pub use record::{BoxSection, SectionBefore, SectionProperties, SectionRecord, SectionSizes};
