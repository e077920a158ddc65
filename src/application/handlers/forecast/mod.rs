//! Forecast handlers - dashboard reads of the wave feed.

mod get_overview;

pub use get_overview::GetForecastOverviewHandler;
