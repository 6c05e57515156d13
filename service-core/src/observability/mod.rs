pub mod logging;
pub mod metrics;

pub use logging::init_tracing;
pub use self::metrics::{get_metrics, init_metrics, metrics_handler};
