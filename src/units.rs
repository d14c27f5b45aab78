use crate::error::UnitError;
use crate::weather::WeatherResult;

const MISSING: &str = "--";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Unit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Unit {
    pub fn other(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

/// The last fetched result and the unit it is shown in.
///
/// Both temperatures come from the response; nothing here converts between
/// scales, so with no result there is nothing to show in either unit.
#[derive(Clone, Debug, Default)]
pub struct UnitToggle {
    last_result: Option<WeatherResult>,
    unit: Unit,
}

impl UnitToggle {
    pub fn record_result(&mut self, result: WeatherResult) {
        self.last_result = Some(result);
        self.unit = Unit::Celsius;
    }

    pub fn set_unit(&mut self, unit: Unit) -> Result<(), UnitError> {
        if self.last_result.is_none() {
            return Err(UnitError::NoResultYet);
        }
        self.unit = unit;
        Ok(())
    }

    pub fn toggle(&mut self) -> Result<Unit, UnitError> {
        let unit = self.unit.other();
        self.set_unit(unit)?;
        Ok(unit)
    }

    pub fn reset_unit(&mut self) {
        self.unit = Unit::Celsius;
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn last_result(&self) -> Option<&WeatherResult> {
        self.last_result.as_ref()
    }

    pub fn render(&self) -> String {
        match &self.last_result {
            Some(result) => {
                let value = match self.unit {
                    Unit::Celsius => result.temperature_celsius,
                    Unit::Fahrenheit => result.temperature_fahrenheit,
                };
                format!("{value}{}", self.unit.symbol())
            }
            None => MISSING.to_string(),
        }
    }
}
