pub mod log_port;
pub mod log_provider_port;

pub use log_port::Logger;
pub use log_provider_port::DatabaseLogProvider;
