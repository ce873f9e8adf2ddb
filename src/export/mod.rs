//! Serialization of the dataset and delivery of the resulting files.

mod encode;
mod sink;

pub use encode::{from_csv, to_csv, DecodedCsv};
pub use sink::{Artifact, ArtifactSink, DirectorySink, MemorySink, CSV_MIME};
