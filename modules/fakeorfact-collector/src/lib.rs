pub mod collector;
pub mod fan_in;
pub mod interval;

pub use collector::{CollectionStats, Collector, SourceGroup};
pub use fan_in::{fan_in, spawn_producer, PRODUCER_CAPACITY};
pub use interval::start_collection_interval;
