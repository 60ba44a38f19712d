pub mod adapters;
pub mod repositories;
