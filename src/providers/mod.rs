pub mod simulated;

pub use simulated::{SimulatedRateProvider, fetch_rates};
