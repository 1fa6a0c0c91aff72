use crate::literal::Literal;
use crate::scalar::ParsedLiteral;
use crate::scalar::ScalarCodec;
use crate::scalar::ScalarParseError;
use crate::scalar::SerializationError;
use crate::Value;
use chrono::DateTime;
use chrono::Local;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::TimeZone;
use chrono::Utc;
use inherent::inherent;

/// The `Date` custom scalar.
///
/// On the wire a `Date` is an integer count of milliseconds since the Unix
/// epoch. Inline literals are only accepted as int literals (epoch
/// milliseconds). Variables accept anything a date can be constructed from:
/// a millisecond timestamp, an RFC 3339 or RFC 2822 string, a bare
/// `YYYY-MM-DD` date (midnight UTC), or an offset-less `YYYY-MM-DDTHH:MM:SS`
/// datetime (local time).
#[derive(Clone, Copy, Debug, Default)]
pub struct DateScalar;

impl DateScalar {
    pub const NAME: &'static str = "Date";

    fn datetime_from_millis(&self, millis: i64) -> Result<Value, ScalarParseError> {
        DateTime::from_timestamp_millis(millis)
            .map(Value::DateTime)
            .ok_or_else(|| ScalarParseError::new(
                Self::NAME,
                format!("timestamp {millis} is outside the representable date range"),
            ))
    }

    fn parse_date_str(&self, str: &str) -> Result<Value, ScalarParseError> {
        let str = str.trim();
        if let Ok(datetime) = DateTime::parse_from_rfc3339(str) {
            return Ok(Value::DateTime(datetime.with_timezone(&Utc)));
        }

        if let Ok(date) = NaiveDate::parse_from_str(str, "%Y-%m-%d")
            && let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Value::DateTime(midnight.and_utc()));
        }

        if let Ok(naive) = NaiveDateTime::parse_from_str(str, "%Y-%m-%dT%H:%M:%S%.f")
            && let Some(local) = Local.from_local_datetime(&naive).earliest() {
            return Ok(Value::DateTime(local.with_timezone(&Utc)));
        }

        if let Ok(datetime) = DateTime::parse_from_rfc2822(str) {
            return Ok(Value::DateTime(datetime.with_timezone(&Utc)));
        }

        Err(ScalarParseError::new(
            Self::NAME,
            format!("\"{str}\" is not a recognized date format"),
        ))
    }
}

#[inherent]
impl ScalarCodec for DateScalar {
    pub fn name(&self) -> &str {
        Self::NAME
    }

    pub fn serialize(
        &self,
        value: &Value,
    ) -> Result<serde_json::Value, SerializationError> {
        match value {
            Value::DateTime(datetime) =>
                Ok(serde_json::Value::from(datetime.timestamp_millis())),

            // Already a millisecond timestamp (e.g. echoed back from an int
            // literal argument).
            Value::Int(millis) =>
                Ok(serde_json::Value::from(*millis)),

            other => Err(SerializationError::new(
                Self::NAME,
                format!("a non-date {} value", other.kind_name()),
            )),
        }
    }

    pub fn parse_value(
        &self,
        wire_value: &serde_json::Value,
    ) -> Result<Value, ScalarParseError> {
        match wire_value {
            serde_json::Value::Number(num) => {
                if let Some(millis) = num.as_i64() {
                    return self.datetime_from_millis(millis);
                }
                match num.as_f64() {
                    Some(float) if float.is_finite()
                        && float.trunc() >= i64::MIN as f64
                        && float.trunc() <= i64::MAX as f64 =>
                        self.datetime_from_millis(float.trunc() as i64),
                    _ => Err(ScalarParseError::new(
                        Self::NAME,
                        format!("{num} is not a valid timestamp"),
                    )),
                }
            },

            serde_json::Value::String(str) => self.parse_date_str(str),

            serde_json::Value::Null
            | serde_json::Value::Bool(_)
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => Err(ScalarParseError::new(
                Self::NAME,
                format!("cannot construct a date from `{wire_value}`"),
            )),
        }
    }

    pub fn parse_literal(
        &self,
        literal: &Literal,
    ) -> Result<ParsedLiteral, ScalarParseError> {
        match literal {
            Literal::Int(millis) => self.datetime_from_millis(*millis).map(ParsedLiteral::Value),

            Literal::Float(_)
            | Literal::String(_)
            | Literal::Boolean(_)
            | Literal::Null
            | Literal::Enum(_)
            | Literal::List(_)
            | Literal::Object(_) => Ok(ParsedLiteral::Unrepresentable),
        }
    }
}
