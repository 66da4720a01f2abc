use crate::error::ValidationError;
use crate::fields::{FieldName, FieldSet, Holiday, Season};

/// A form that passed every rule, coerced to semantic types.
///
/// Only [`validate`] can build one, and it is the only input a
/// [`PredictionPayload`](crate::payload::PredictionPayload) accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidFieldSet {
    hour: i64,
    season: Season,
    holiday: Holiday,
    temperature: f64,
    humidity: i64,
    dew_point: f64,
    wind_speed: f64,
    visibility: i64,
    solar_radiation: f64,
    rainfall: f64,
    snowfall: f64,
}

impl ValidFieldSet {
    pub fn hour(&self) -> i64 {
        self.hour
    }
    pub fn season(&self) -> Season {
        self.season
    }
    pub fn holiday(&self) -> Holiday {
        self.holiday
    }
    pub fn temperature(&self) -> f64 {
        self.temperature
    }
    pub fn humidity(&self) -> i64 {
        self.humidity
    }
    pub fn dew_point(&self) -> f64 {
        self.dew_point
    }
    pub fn wind_speed(&self) -> f64 {
        self.wind_speed
    }
    pub fn visibility(&self) -> i64 {
        self.visibility
    }
    pub fn solar_radiation(&self) -> f64 {
        self.solar_radiation
    }
    pub fn rainfall(&self) -> f64 {
        self.rainfall
    }
    pub fn snowfall(&self) -> f64 {
        self.snowfall
    }
}

fn number(fields: &FieldSet, name: FieldName) -> Result<f64, ValidationError> {
    fields
        .get(name)
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::NotANumber(name))
}

/// Truncate toward zero; values past the `i64` range are not representable.
fn whole(value: f64, name: FieldName) -> Result<i64, ValidationError> {
    let t = value.trunc();
    if t >= i64::MIN as f64 && t < i64::MAX as f64 {
        Ok(t as i64)
    } else {
        Err(ValidationError::NotANumber(name))
    }
}

/// Checks run in a fixed order and the first violated rule is returned.
///
/// Range rules come first (hour, humidity, visibility, rainfall, snowfall,
/// solar radiation), then coercion of the unconstrained fields. Integer fields
/// are checked on the typed value and truncated toward zero afterwards.
pub fn validate(fields: &FieldSet) -> Result<ValidFieldSet, ValidationError> {
    let hour = number(fields, FieldName::Hour)?;
    if !(0.0..=23.0).contains(&hour) {
        return Err(ValidationError::HourOutOfRange);
    }

    let humidity = number(fields, FieldName::Humidity)?;
    if !(0.0..=100.0).contains(&humidity) {
        return Err(ValidationError::HumidityOutOfRange);
    }

    let visibility = number(fields, FieldName::Visibility)?;
    if visibility < 0.0 {
        return Err(ValidationError::NegativeVisibility);
    }
    let visibility = whole(visibility, FieldName::Visibility)?;

    let rainfall = number(fields, FieldName::Rainfall)?;
    if rainfall < 0.0 {
        return Err(ValidationError::NegativeRainfall);
    }

    let snowfall = number(fields, FieldName::Snowfall)?;
    if snowfall < 0.0 {
        return Err(ValidationError::NegativeSnowfall);
    }

    let solar_radiation = number(fields, FieldName::SolarRadiation)?;
    if solar_radiation < 0.0 {
        return Err(ValidationError::NegativeSolarRadiation);
    }

    // No range rules below: any value of the right type is accepted,
    // including a negative wind speed.
    let season = Season::parse(&fields.season).ok_or(ValidationError::UnknownSeason)?;
    let temperature = number(fields, FieldName::Temperature)?;
    let dew_point = number(fields, FieldName::DewPoint)?;
    let wind_speed = number(fields, FieldName::WindSpeed)?;

    Ok(ValidFieldSet {
        hour: whole(hour, FieldName::Hour)?,
        season,
        holiday: Holiday::parse(&fields.holiday),
        temperature,
        humidity: whole(humidity, FieldName::Humidity)?,
        dew_point,
        wind_speed,
        visibility,
        solar_radiation,
        rainfall,
        snowfall,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(edits: &[(FieldName, &str)]) -> FieldSet {
        let mut f = FieldSet::default();
        for (name, raw) in edits {
            f.set(*name, *raw);
        }
        f
    }

    #[test]
    fn default_form_is_valid() {
        let v = validate(&FieldSet::default()).unwrap();
        assert_eq!(v.hour(), 10);
        assert_eq!(v.season(), Season::Summer);
        assert_eq!(v.holiday(), Holiday::NoHoliday);
        assert_eq!(v.visibility(), 2000);
        assert_eq!(v.solar_radiation(), 0.5);
    }

    #[test]
    fn hour_bounds_are_inclusive() {
        for ok in ["0", "23", " 7 "] {
            assert!(validate(&with(&[(FieldName::Hour, ok)])).is_ok(), "{ok}");
        }
        for bad in ["-1", "24", "25", "23.5"] {
            assert_eq!(
                validate(&with(&[(FieldName::Hour, bad)])),
                Err(ValidationError::HourOutOfRange),
                "{bad}"
            );
        }
    }

    #[test]
    fn first_violated_rule_wins() {
        // Every range rule broken at once: hour is reported.
        let all_bad = with(&[
            (FieldName::Hour, "30"),
            (FieldName::Humidity, "101"),
            (FieldName::Visibility, "-1"),
            (FieldName::Rainfall, "-1"),
            (FieldName::Snowfall, "-1"),
            (FieldName::SolarRadiation, "-1"),
        ]);
        assert_eq!(validate(&all_bad), Err(ValidationError::HourOutOfRange));

        let mut f = all_bad;
        let expected = [
            (FieldName::Hour, "5", ValidationError::HumidityOutOfRange),
            (FieldName::Humidity, "50", ValidationError::NegativeVisibility),
            (FieldName::Visibility, "10", ValidationError::NegativeRainfall),
            (FieldName::Rainfall, "0", ValidationError::NegativeSnowfall),
            (FieldName::Snowfall, "0", ValidationError::NegativeSolarRadiation),
        ];
        for (name, fix, next) in expected {
            f.set(name, fix);
            assert_eq!(validate(&f), Err(next));
        }
        f.set(FieldName::SolarRadiation, "0");
        assert!(validate(&f).is_ok());
    }

    #[test]
    fn humidity_error_reported_when_hour_is_valid() {
        for bad in ["-0.5", "100.1", "250"] {
            assert_eq!(
                validate(&with(&[(FieldName::Humidity, bad)])),
                Err(ValidationError::HumidityOutOfRange)
            );
        }
    }

    #[test]
    fn unconstrained_fields_accept_any_number() {
        let f = with(&[
            (FieldName::Temperature, "-40"),
            (FieldName::DewPoint, "-55.5"),
            (FieldName::WindSpeed, "-3"),
        ]);
        let v = validate(&f).unwrap();
        assert_eq!(v.wind_speed(), -3.0);
        assert_eq!(v.dew_point(), -55.5);
    }

    #[test]
    fn non_numeric_text_is_a_validation_error() {
        assert_eq!(
            validate(&with(&[(FieldName::Hour, "ten")])),
            Err(ValidationError::NotANumber(FieldName::Hour))
        );
        assert_eq!(
            validate(&with(&[(FieldName::Temperature, "")])),
            Err(ValidationError::NotANumber(FieldName::Temperature))
        );
        assert_eq!(
            validate(&with(&[(FieldName::Rainfall, "NaN")])),
            Err(ValidationError::NotANumber(FieldName::Rainfall))
        );
        assert_eq!(
            validate(&with(&[(FieldName::Season, "Monsoon")])),
            Err(ValidationError::UnknownSeason)
        );
    }

    #[test]
    fn integer_fields_truncate_after_the_range_check() {
        let v = validate(&with(&[
            (FieldName::Hour, "22.9"),
            (FieldName::Humidity, "59.99"),
            (FieldName::Visibility, "0.4"),
        ]))
        .unwrap();
        assert_eq!((v.hour(), v.humidity(), v.visibility()), (22, 59, 0));
    }

    #[test]
    fn visibility_beyond_integer_range_is_rejected() {
        for huge in ["1e30", "9223372036854775808"] {
            assert_eq!(
                validate(&with(&[(FieldName::Visibility, huge)])),
                Err(ValidationError::NotANumber(FieldName::Visibility)),
                "{huge}"
            );
        }
        // Range rules still run first.
        assert_eq!(
            validate(&with(&[(FieldName::Visibility, "-1e30")])),
            Err(ValidationError::NegativeVisibility)
        );
        let v = validate(&with(&[(FieldName::Visibility, "1e15")])).unwrap();
        assert_eq!(v.visibility(), 1_000_000_000_000_000);
    }
}
