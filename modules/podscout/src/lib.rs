pub mod adapters;
pub mod aggregator;
pub mod export;
pub mod extract;
pub mod sources;
