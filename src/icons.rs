/// Symbol shown for a condition code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Clear,
    PartlyCloudy,
    Cloudy,
    Overcast,
    Fog,
    Drizzle,
    SnowPatchy,
    SleetPatchy,
    HailPatchy,
    Thunder,
    DrizzleLight,
    Unknown,
}

// WeatherAPI.com condition codes.
const ICONS: [(i64, Icon); 11] = [
    (1000, Icon::Clear),
    (1003, Icon::PartlyCloudy),
    (1006, Icon::Cloudy),
    (1009, Icon::Overcast),
    (1030, Icon::Fog),
    (1063, Icon::Drizzle),
    (1066, Icon::SnowPatchy),
    (1069, Icon::SleetPatchy),
    (1072, Icon::HailPatchy),
    (1087, Icon::Thunder),
    (1183, Icon::DrizzleLight),
];

pub fn resolve_icon(code: i64) -> Icon {
    ICONS
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(Icon::Unknown, |(_, icon)| *icon)
}

impl Icon {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::PartlyCloudy => "partly-cloudy",
            Self::Cloudy => "cloudy",
            Self::Overcast => "overcast",
            Self::Fog => "fog",
            Self::Drizzle => "drizzle",
            Self::SnowPatchy => "snow-patchy",
            Self::SleetPatchy => "sleet-patchy",
            Self::HailPatchy => "hail-patchy",
            Self::Thunder => "thunder",
            Self::DrizzleLight => "drizzle-light",
            Self::Unknown => "unknown",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Clear => "☀",
            Self::PartlyCloudy => "⛅",
            Self::Cloudy | Self::Overcast => "☁",
            Self::Fog => "🌫",
            Self::Drizzle | Self::DrizzleLight => "🌦",
            Self::SnowPatchy => "🌨",
            Self::SleetPatchy | Self::HailPatchy => "🌧",
            Self::Thunder => "⛈",
            Self::Unknown => "?",
        }
    }
}

#[test]
fn test_resolve_icon() {
    assert_eq!(resolve_icon(1000), Icon::Clear);
    assert_eq!(resolve_icon(1000).id(), "clear");
    assert_eq!(resolve_icon(1087).id(), "thunder");
    assert_eq!(resolve_icon(1183).id(), "drizzle-light");
}

#[test]
fn test_resolve_icon_unknown_code() {
    assert_eq!(resolve_icon(9999), Icon::Unknown);
    assert_eq!(resolve_icon(-1).id(), "unknown");
    assert_eq!(resolve_icon(9999), resolve_icon(9999));
}

#[test]
fn test_icon_table_codes_are_unique() {
    for (i, (code, _)) in ICONS.iter().enumerate() {
        assert!(ICONS[i + 1..].iter().all(|(other, _)| other != code));
    }
}
