//! Search orchestration: query → client → decoder → icon → unit state.
//!
//! A search is split into [`Lookup::begin`], which hands out a [`Ticket`],
//! and [`Lookup::finish`], which applies the completion for that ticket. The
//! request itself can run anywhere in between. Only the completion for the
//! most recent ticket is applied, so when searches overlap the last one
//! issued is the one displayed.

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::error::{FailureKind, LookupError};
use crate::icons::{resolve_icon, Icon};
use crate::units::UnitToggle;
use crate::weather::{Coordinates, LocationQuery, WeatherResult};
use crate::weatherapi::WeatherApi;

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    Idle,
    Fetching,
    Displaying { icon: Icon },
    Failed(FailureKind),
}

/// Identifies one search. Completions carrying an older ticket are stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// What a completion did to the display.
#[derive(Debug)]
pub enum Outcome {
    Displayed { result: WeatherResult, icon: Icon },
    Failed(LookupError),
    Superseded,
}

#[derive(Debug)]
pub struct Lookup {
    api: WeatherApi,
    units: UnitToggle,
    phase: Phase,
    generation: u64,
    updated: Option<DateTime<Local>>,
}

impl Lookup {
    pub fn new(api: WeatherApi) -> Self {
        Self {
            api,
            units: UnitToggle::default(),
            phase: Phase::Idle,
            generation: 0,
            updated: None,
        }
    }

    pub fn api(&self) -> &WeatherApi {
        &self.api
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// When the displayed result arrived.
    pub fn updated(&self) -> Option<DateTime<Local>> {
        self.updated
    }

    pub fn units(&self) -> &UnitToggle {
        &self.units
    }

    pub fn units_mut(&mut self) -> &mut UnitToggle {
        &mut self.units
    }

    /// Start a search. The unit goes back to Celsius right away, before any
    /// response arrives.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.units.reset_unit();
        self.phase = Phase::Fetching;
        Ticket(self.generation)
    }

    pub fn finish(&mut self, ticket: Ticket, completion: Result<WeatherResult, LookupError>) -> Outcome {
        if ticket.0 != self.generation {
            debug!(ticket = ticket.0, latest = self.generation, "dropping superseded result");
            return Outcome::Superseded;
        }

        match completion {
            Ok(result) => {
                let icon = resolve_icon(result.condition_code);
                info!(
                    location = %result.location_name,
                    temp_c = result.temperature_celsius,
                    condition = %result.condition_text,
                    icon = icon.id(),
                    "displaying weather"
                );
                self.units.record_result(result.clone());
                self.updated = Some(Local::now());
                self.phase = Phase::Displaying { icon };
                Outcome::Displayed { result, icon }
            }
            Err(err) => {
                warn!(error = %err, "lookup failed");
                self.phase = Phase::Failed(err.kind());
                Outcome::Failed(err)
            }
        }
    }

    pub async fn search(&mut self, query: &str) -> Outcome {
        let ticket = self.begin();
        let completion = self.api.current(query).await;
        self.finish(ticket, completion)
    }

    pub async fn search_coordinates(&mut self, coords: Coordinates) -> Outcome {
        let query = LocationQuery::from(coords);
        self.search(query.as_str()).await
    }
}
