mod enums;
mod reference_dataset;
mod region;
pub(crate) mod tables;

use std::sync::LazyLock;

pub use enums::{ExpectedLength, NumberCategory};
pub use reference_dataset::ReferenceDataset;
pub use region::Region;

pub static DATASET: LazyLock<ReferenceDataset> = LazyLock::new(|| {
    ReferenceDataset::new()
});
