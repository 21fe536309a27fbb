pub mod alerts;

pub use alerts::{AlertsAggregator, AlertsError};
