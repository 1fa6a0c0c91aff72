use crate::literal::Literal;
use crate::scalar::ParsedLiteral;
use crate::scalar::ScalarCodec;
use crate::scalar::ScalarParseError;
use crate::scalar::SerializationError;
use crate::Value;
use inherent::inherent;
use std::sync::Arc;

/// Codecs for the scalar types every GraphQL schema defines implicitly.
pub(crate) fn builtin_codecs() -> Vec<Arc<dyn ScalarCodec>> {
    vec![
        Arc::new(BooleanScalar),
        Arc::new(FloatScalar),
        Arc::new(IdScalar),
        Arc::new(IntScalar),
        Arc::new(StringScalar),
    ]
}

fn describe_json(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "list",
        serde_json::Value::Object(_) => "object",
    }
}

fn json_f64(scalar_name: &str, value: f64) -> Result<serde_json::Value, SerializationError> {
    serde_json::Number::from_f64(value)
        .map(serde_json::Value::Number)
        .ok_or_else(|| SerializationError::new(
            scalar_name,
            format!("non-finite value: {value}"),
        ))
}

fn i32_from_f64(value: f64) -> Option<i64> {
    if value.fract() == 0.0
        && value >= f64::from(i32::MIN)
        && value <= f64::from(i32::MAX) {
        Some(value as i64)
    } else {
        None
    }
}

fn i32_range(value: i64) -> Option<i64> {
    i32::try_from(value).ok().map(i64::from)
}

/// The built-in 32-bit signed `Int` scalar.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntScalar;

#[inherent]
impl ScalarCodec for IntScalar {
    pub fn name(&self) -> &str {
        "Int"
    }

    pub fn serialize(
        &self,
        value: &Value,
    ) -> Result<serde_json::Value, SerializationError> {
        let int =
            match value {
                Value::Int(int) => i32_range(*int),
                Value::Float(float) => i32_from_f64(*float),
                Value::Boolean(bool) => Some(i64::from(*bool)),
                Value::String(str) => str.trim().parse::<i64>().ok().and_then(i32_range),
                _ => None,
            };

        int.map(serde_json::Value::from)
            .ok_or_else(|| SerializationError::new(
                self.name(),
                format!("non 32-bit signed integer {} value", value.kind_name()),
            ))
    }

    pub fn parse_value(
        &self,
        wire_value: &serde_json::Value,
    ) -> Result<Value, ScalarParseError> {
        let int =
            if let serde_json::Value::Number(num) = wire_value {
                num.as_i64()
                    .and_then(i32_range)
                    .or_else(|| num.as_f64().and_then(i32_from_f64))
            } else {
                None
            };

        int.map(Value::Int)
            .ok_or_else(|| ScalarParseError::new(
                self.name(),
                format!(
                    "expected a 32-bit signed integer but got {} `{wire_value}`",
                    describe_json(wire_value),
                ),
            ))
    }

    pub fn parse_literal(
        &self,
        literal: &Literal,
    ) -> Result<ParsedLiteral, ScalarParseError> {
        match literal {
            Literal::Int(int) => i32_range(*int)
                .map(|int| ParsedLiteral::Value(Value::Int(int)))
                .ok_or_else(|| ScalarParseError::new(
                    self.name(),
                    format!("{int} does not fit in a 32-bit signed integer"),
                )),

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

/// The built-in double-precision `Float` scalar.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatScalar;

#[inherent]
impl ScalarCodec for FloatScalar {
    pub fn name(&self) -> &str {
        "Float"
    }

    pub fn serialize(
        &self,
        value: &Value,
    ) -> Result<serde_json::Value, SerializationError> {
        match value {
            Value::Float(float) => json_f64(self.name(), *float),
            Value::Int(int) => json_f64(self.name(), *int as f64),
            Value::Boolean(bool) => json_f64(self.name(), if *bool { 1.0 } else { 0.0 }),
            Value::String(str) => match str.trim().parse::<f64>() {
                Ok(float) => json_f64(self.name(), float),
                Err(_) => Err(SerializationError::new(
                    self.name(),
                    format!("non numeric string value: \"{str}\""),
                )),
            },
            other => Err(SerializationError::new(
                self.name(),
                format!("{} value", other.kind_name()),
            )),
        }
    }

    pub fn parse_value(
        &self,
        wire_value: &serde_json::Value,
    ) -> Result<Value, ScalarParseError> {
        wire_value.as_f64()
            .map(Value::Float)
            .ok_or_else(|| ScalarParseError::new(
                self.name(),
                format!("expected a number but got {}", describe_json(wire_value)),
            ))
    }

    pub fn parse_literal(
        &self,
        literal: &Literal,
    ) -> Result<ParsedLiteral, ScalarParseError> {
        match literal {
            Literal::Float(float) => Ok(ParsedLiteral::Value(Value::Float(*float))),
            Literal::Int(int) => Ok(ParsedLiteral::Value(Value::Float(*int as f64))),
            Literal::String(_)
            | Literal::Boolean(_)
            | Literal::Null
            | Literal::Enum(_)
            | Literal::List(_)
            | Literal::Object(_) => Ok(ParsedLiteral::Unrepresentable),
        }
    }
}

/// The built-in UTF-8 `String` scalar.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringScalar;

#[inherent]
impl ScalarCodec for StringScalar {
    pub fn name(&self) -> &str {
        "String"
    }

    pub fn serialize(
        &self,
        value: &Value,
    ) -> Result<serde_json::Value, SerializationError> {
        match value {
            Value::String(str) => Ok(serde_json::Value::String(str.to_owned())),
            Value::Enum(name) => Ok(serde_json::Value::String(name.to_owned())),
            Value::Int(int) => Ok(serde_json::Value::String(int.to_string())),
            Value::Float(float) => Ok(serde_json::Value::String(float.to_string())),
            Value::Boolean(bool) => Ok(serde_json::Value::String(bool.to_string())),
            other => Err(SerializationError::new(
                self.name(),
                format!("{} value", other.kind_name()),
            )),
        }
    }

    pub fn parse_value(
        &self,
        wire_value: &serde_json::Value,
    ) -> Result<Value, ScalarParseError> {
        wire_value.as_str()
            .map(Value::from)
            .ok_or_else(|| ScalarParseError::new(
                self.name(),
                format!("expected a string but got {}", describe_json(wire_value)),
            ))
    }

    pub fn parse_literal(
        &self,
        literal: &Literal,
    ) -> Result<ParsedLiteral, ScalarParseError> {
        match literal {
            Literal::String(str) => Ok(ParsedLiteral::Value(Value::from(str.as_str()))),
            Literal::Int(_)
            | Literal::Float(_)
            | Literal::Boolean(_)
            | Literal::Null
            | Literal::Enum(_)
            | Literal::List(_)
            | Literal::Object(_) => Ok(ParsedLiteral::Unrepresentable),
        }
    }
}

/// The built-in `Boolean` scalar.
#[derive(Clone, Copy, Debug, Default)]
pub struct BooleanScalar;

#[inherent]
impl ScalarCodec for BooleanScalar {
    pub fn name(&self) -> &str {
        "Boolean"
    }

    pub fn serialize(
        &self,
        value: &Value,
    ) -> Result<serde_json::Value, SerializationError> {
        match value {
            Value::Boolean(bool) => Ok(serde_json::Value::Bool(*bool)),
            Value::Int(int) => Ok(serde_json::Value::Bool(*int != 0)),
            Value::Float(float) if float.is_finite() =>
                Ok(serde_json::Value::Bool(*float != 0.0)),
            other => Err(SerializationError::new(
                self.name(),
                format!("non boolean {} value", other.kind_name()),
            )),
        }
    }

    pub fn parse_value(
        &self,
        wire_value: &serde_json::Value,
    ) -> Result<Value, ScalarParseError> {
        wire_value.as_bool()
            .map(Value::Boolean)
            .ok_or_else(|| ScalarParseError::new(
                self.name(),
                format!("expected a boolean but got {}", describe_json(wire_value)),
            ))
    }

    pub fn parse_literal(
        &self,
        literal: &Literal,
    ) -> Result<ParsedLiteral, ScalarParseError> {
        match literal {
            Literal::Boolean(bool) => Ok(ParsedLiteral::Value(Value::Boolean(*bool))),
            Literal::Int(_)
            | Literal::Float(_)
            | Literal::String(_)
            | Literal::Null
            | Literal::Enum(_)
            | Literal::List(_)
            | Literal::Object(_) => Ok(ParsedLiteral::Unrepresentable),
        }
    }
}

/// The built-in `ID` scalar. Accepts strings and integers on input and always
/// serializes as a string.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdScalar;

#[inherent]
impl ScalarCodec for IdScalar {
    pub fn name(&self) -> &str {
        "ID"
    }

    pub fn serialize(
        &self,
        value: &Value,
    ) -> Result<serde_json::Value, SerializationError> {
        match value {
            Value::String(str) => Ok(serde_json::Value::String(str.to_owned())),
            Value::Int(int) => Ok(serde_json::Value::String(int.to_string())),
            other => Err(SerializationError::new(
                self.name(),
                format!("{} value", other.kind_name()),
            )),
        }
    }

    pub fn parse_value(
        &self,
        wire_value: &serde_json::Value,
    ) -> Result<Value, ScalarParseError> {
        match wire_value {
            serde_json::Value::String(str) => Ok(Value::from(str.as_str())),
            serde_json::Value::Number(num) if num.is_i64() || num.is_u64() =>
                Ok(Value::String(num.to_string())),
            other => Err(ScalarParseError::new(
                self.name(),
                format!("expected a string or integer but got {}", describe_json(other)),
            )),
        }
    }

    pub fn parse_literal(
        &self,
        literal: &Literal,
    ) -> Result<ParsedLiteral, ScalarParseError> {
        match literal {
            Literal::String(str) => Ok(ParsedLiteral::Value(Value::from(str.as_str()))),
            Literal::Int(int) => Ok(ParsedLiteral::Value(Value::String(int.to_string()))),
            Literal::Float(_)
            | Literal::Boolean(_)
            | Literal::Null
            | Literal::Enum(_)
            | Literal::List(_)
            | Literal::Object(_) => Ok(ParsedLiteral::Unrepresentable),
        }
    }
}
