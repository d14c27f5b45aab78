use std::path::PathBuf;

use clap::builder::{styling::AnsiColor, Styles};
use clap::Parser;

use crate::weather::Coordinates;

const ABOUT: &str = "Current weather conditions from WeatherAPI.com";

const LONG_ABOUT: &str = "
Look up current weather conditions by place name or by coordinates.

Without --print an interactive screen opens: type a location and press Enter to search, Tab to
switch between Celsius and Fahrenheit, Ctrl-L to look up the home location from the config file.

An API key from https://www.weatherapi.com is required. Pass it with --api-key, the WEATHERAPI_KEY
environment variable, or `api_key` in the config file.
";

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default())
    .usage(AnsiColor::Green.on_default())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Green.on_default());

#[derive(Parser, Debug)]
#[command(version, styles=STYLES, about=ABOUT, long_about = LONG_ABOUT)]
pub struct Args {
    #[arg(help = "Place name to look up (e.g. Kathmandu, \"New York\")")]
    pub query: Vec<String>,

    #[arg(long, value_name = "LAT,LON", conflicts_with = "query", allow_hyphen_values = true)]
    /// Look up a latitude/longitude pair instead of a place name
    pub coords: Option<Coordinates>,

    #[arg(long)]
    /// Print one lookup to stdout instead of opening the interactive screen
    pub print: bool,

    #[arg(long, requires = "print")]
    /// Print the temperature in Fahrenheit
    pub fahrenheit: bool,

    #[arg(long, env = "WEATHERAPI_KEY", hide_env_values = true)]
    /// WeatherAPI.com key
    pub api_key: Option<String>,

    #[arg(long, value_name = "URL")]
    /// API base URL [default: https://api.weatherapi.com/v1/]
    pub base_url: Option<String>,

    #[arg(long, value_name = "SECS")]
    /// Request timeout in seconds [default: 10]
    pub timeout: Option<u64>,

    #[arg(long, value_name = "PATH")]
    /// Config file [default: <config dir>/wxnow/config.toml]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "PATH")]
    /// Log file for the interactive screen [default: <cache dir>/wxnow/wxnow.log]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// The positional words as one place name, if any were given.
    pub fn query(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_words_are_joined() {
        let args = Args::try_parse_from(["wxnow", "New", "York"]).unwrap();
        assert_eq!(args.query().as_deref(), Some("New York"));
        assert!(!args.print);
    }

    #[test]
    fn test_coords() {
        let args = Args::try_parse_from(["wxnow", "--print", "--coords", "-33.87,151.21"]).unwrap();
        assert_eq!(args.coords, Some(Coordinates { lat: -33.87, lon: 151.21 }));
        assert_eq!(args.query(), None);
    }

    #[test]
    fn test_coords_and_query_conflict() {
        assert!(Args::try_parse_from(["wxnow", "Paris", "--coords", "1,2"]).is_err());
    }

    #[test]
    fn test_fahrenheit_requires_print() {
        assert!(Args::try_parse_from(["wxnow", "--fahrenheit"]).is_err());
    }
}
