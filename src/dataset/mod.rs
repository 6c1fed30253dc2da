mod dataset;
mod load;
mod records;

pub use dataset::Dataset;
pub use load::load_dataset;
pub use records::{CrewRecord, MovieId, MovieRecord};
