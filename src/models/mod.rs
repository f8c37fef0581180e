pub mod measurement;
pub mod snapshot;
pub mod station;

pub use measurement::Measurement;
pub use snapshot::ClimateSnapshot;
pub use station::Station;
