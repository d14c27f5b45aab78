//! Current weather lookup against WeatherAPI.com.
//!
//! [`lookup::Lookup`] drives a search from a free-text or `lat,lon` query to
//! a displayed [`weather::WeatherResult`]; [`app`] is the terminal screen on
//! top of it.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod icons;
pub mod logging;
pub mod lookup;
pub mod units;
pub mod weather;
pub mod weatherapi;

pub use error::{FailureKind, LookupError, UnitError};
pub use icons::{resolve_icon, Icon};
pub use lookup::{Lookup, Outcome, Phase, Ticket};
pub use units::{Unit, UnitToggle};
pub use weather::{Coordinates, LocationQuery, WeatherResult};
pub use weatherapi::WeatherApi;
