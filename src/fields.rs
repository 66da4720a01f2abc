use std::{fmt, str::FromStr};

use crate::error::UnknownField;

// ---------- Field names ----------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Hour,
    Season,
    Holiday,
    Temperature,
    Humidity,
    DewPoint,
    WindSpeed,
    Visibility,
    SolarRadiation,
    Rainfall,
    Snowfall,
}

impl FieldName {
    /// Form order.
    pub const ALL: [FieldName; 11] = [
        FieldName::Hour,
        FieldName::Season,
        FieldName::Holiday,
        FieldName::Temperature,
        FieldName::Humidity,
        FieldName::DewPoint,
        FieldName::WindSpeed,
        FieldName::Visibility,
        FieldName::SolarRadiation,
        FieldName::Rainfall,
        FieldName::Snowfall,
    ];

    /// Name used on the wire and by the form inputs.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Hour => "hour",
            FieldName::Season => "season",
            FieldName::Holiday => "holiday",
            FieldName::Temperature => "temperature",
            FieldName::Humidity => "humidity",
            FieldName::DewPoint => "dewPoint",
            FieldName::WindSpeed => "windSpeed",
            FieldName::Visibility => "visibility",
            FieldName::SolarRadiation => "solarRadiation",
            FieldName::Rainfall => "rainfall",
            FieldName::Snowfall => "snowfall",
        }
    }

    /// Human label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            FieldName::Hour => "Hour",
            FieldName::Season => "Season",
            FieldName::Holiday => "Holiday",
            FieldName::Temperature => "Temperature",
            FieldName::Humidity => "Humidity",
            FieldName::DewPoint => "Dew point",
            FieldName::WindSpeed => "Wind speed",
            FieldName::Visibility => "Visibility",
            FieldName::SolarRadiation => "Solar radiation",
            FieldName::Rainfall => "Rainfall",
            FieldName::Snowfall => "Snowfall",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

// ---------- Categorical values ----------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Case-insensitive match on the four season names.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holiday {
    Holiday,
    NoHoliday,
}

impl Holiday {
    /// Only the exact "Holiday" option counts; any other text is a regular day.
    pub fn parse(raw: &str) -> Self {
        if raw.trim() == "Holiday" {
            Holiday::Holiday
        } else {
            Holiday::NoHoliday
        }
    }

    pub fn flag(self) -> u8 {
        match self {
            Holiday::Holiday => 1,
            Holiday::NoHoliday => 0,
        }
    }
}

// ---------- Field store ----------

/// Raw form values exactly as the user typed or selected them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    pub hour: String,
    pub season: String,
    pub holiday: String,
    pub temperature: String,
    pub humidity: String,
    pub dew_point: String,
    pub wind_speed: String,
    pub visibility: String,
    pub solar_radiation: String,
    pub rainfall: String,
    pub snowfall: String,
}

impl Default for FieldSet {
    fn default() -> Self {
        Self {
            hour: "10".into(),
            season: "Summer".into(),
            holiday: "No Holiday".into(),
            temperature: "15.0".into(),
            humidity: "60".into(),
            dew_point: "10.0".into(),
            wind_speed: "2.5".into(),
            visibility: "2000".into(),
            solar_radiation: "0.5".into(),
            rainfall: "0.0".into(),
            snowfall: "0.0".into(),
        }
    }
}

impl FieldSet {
    pub fn get(&self, name: FieldName) -> &str {
        match name {
            FieldName::Hour => &self.hour,
            FieldName::Season => &self.season,
            FieldName::Holiday => &self.holiday,
            FieldName::Temperature => &self.temperature,
            FieldName::Humidity => &self.humidity,
            FieldName::DewPoint => &self.dew_point,
            FieldName::WindSpeed => &self.wind_speed,
            FieldName::Visibility => &self.visibility,
            FieldName::SolarRadiation => &self.solar_radiation,
            FieldName::Rainfall => &self.rainfall,
            FieldName::Snowfall => &self.snowfall,
        }
    }

    /// Replace one raw value; every other field is left as is.
    pub fn set(&mut self, name: FieldName, raw: impl Into<String>) {
        let slot = match name {
            FieldName::Hour => &mut self.hour,
            FieldName::Season => &mut self.season,
            FieldName::Holiday => &mut self.holiday,
            FieldName::Temperature => &mut self.temperature,
            FieldName::Humidity => &mut self.humidity,
            FieldName::DewPoint => &mut self.dew_point,
            FieldName::WindSpeed => &mut self.wind_speed,
            FieldName::Visibility => &mut self.visibility,
            FieldName::SolarRadiation => &mut self.solar_radiation,
            FieldName::Rainfall => &mut self.rainfall,
            FieldName::Snowfall => &mut self.snowfall,
        };
        *slot = raw.into();
    }
}
