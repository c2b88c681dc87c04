//! Library side of the SpaceParts ETL runner: logging setup and the curation
//! engine shared by the binary and the integration tests.

pub mod engine;
pub mod logging;
