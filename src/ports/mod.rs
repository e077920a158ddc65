//! Ports - Interfaces between the core and its collaborators.

mod forecast_client;
mod notifier;
mod session_registry;

pub use forecast_client::{ForecastClient, ForecastError, ForecastOverview, ForecastPeriod};
pub use notifier::{EmergencyNotifier, NotifyError};
pub use session_registry::{RegistryError, SessionHandle, SessionRegistry};
