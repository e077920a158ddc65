//! Forecast adapters - implementations of the ForecastClient port.

mod bmkg;

pub use bmkg::{BmkgConfig, BmkgForecastClient};
