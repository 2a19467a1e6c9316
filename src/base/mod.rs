pub mod accident;
pub mod aggregator;
pub mod boundingbox;
pub mod config;
pub mod dataset;
pub mod fs;
pub mod tally;

pub use accident::Accident;
pub use aggregator::Aggregator;
pub use boundingbox::BoundingBox;
pub use config::Config;
pub use fs::Fs;
pub use tally::Tally;
