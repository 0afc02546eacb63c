use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};

use crate::{
    stmt::{Type, Value},
    Error, Result,
};

/// Text layout used when a naive date-time is written as a string.
const NAIVE_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

impl Type {
    pub(crate) fn cast_chrono(&self, value: Value) -> Result<Value> {
        let cast = match (&value, self) {
            // Same type
            (Value::ChronoDateTimeUtc(_), Type::ChronoDateTimeUtc)
            | (Value::ChronoNaiveDateTime(_), Type::ChronoNaiveDateTime)
            | (Value::ChronoNaiveDate(_), Type::ChronoNaiveDate)
            | (Value::ChronoNaiveTime(_), Type::ChronoNaiveTime) => return Ok(value),

            // String -> chrono
            (Value::String(v), Type::ChronoDateTimeUtc) => v
                .trim()
                .parse::<DateTime<Utc>>()
                .map(Value::ChronoDateTimeUtc)
                .map_err(|e| e.to_string()),
            (Value::String(v), Type::ChronoNaiveDateTime) => v
                .trim()
                .parse::<NaiveDateTime>()
                .map(Value::ChronoNaiveDateTime)
                .map_err(|e| e.to_string()),
            (Value::String(v), Type::ChronoNaiveDate) => v
                .trim()
                .parse::<NaiveDate>()
                .map(Value::ChronoNaiveDate)
                .map_err(|e| e.to_string()),
            (Value::String(v), Type::ChronoNaiveTime) => v
                .trim()
                .parse::<NaiveTime>()
                .map(Value::ChronoNaiveTime)
                .map_err(|e| e.to_string()),

            // Narrowing between chrono types
            (Value::ChronoDateTimeUtc(v), Type::ChronoNaiveDateTime) => {
                Ok(Value::ChronoNaiveDateTime(v.naive_utc()))
            }
            (Value::ChronoNaiveDateTime(v), Type::ChronoNaiveDate) => {
                Ok(Value::ChronoNaiveDate(v.date()))
            }

            // chrono -> String
            (Value::ChronoDateTimeUtc(v), Type::String) => Ok(Value::String(
                v.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            )),
            (Value::ChronoNaiveDateTime(v), Type::String) => {
                Ok(Value::String(v.format(NAIVE_DATE_TIME_FORMAT).to_string()))
            }
            (Value::ChronoNaiveDate(v), Type::String) => Ok(Value::String(v.to_string())),
            (Value::ChronoNaiveTime(v), Type::String) => Ok(Value::String(v.to_string())),

            _ => return Err(Error::type_conversion(value, self.to_string())),
        };

        cast.map_err(|reason| Error::type_conversion_reason(value, self.to_string(), reason))
    }
}
