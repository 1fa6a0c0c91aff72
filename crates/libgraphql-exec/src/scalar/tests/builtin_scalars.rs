use crate::literal::Literal;
use crate::scalar::BooleanScalar;
use crate::scalar::FloatScalar;
use crate::scalar::IdScalar;
use crate::scalar::IntScalar;
use crate::scalar::ParsedLiteral;
use crate::scalar::StringScalar;
use crate::Value;
use serde_json::json;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

mod int_scalar {
    use super::*;

    #[test]
    fn serialize_coerces_to_32_bits() -> Result<()> {
        assert_eq!(IntScalar.serialize(&Value::Int(7))?, json!(7));
        assert_eq!(IntScalar.serialize(&Value::Float(3.0))?, json!(3));
        assert_eq!(IntScalar.serialize(&Value::Boolean(true))?, json!(1));
        assert_eq!(IntScalar.serialize(&Value::from(" 12 "))?, json!(12));

        assert!(IntScalar.serialize(&Value::Float(2.5)).is_err());
        assert!(IntScalar.serialize(&Value::Int(i64::from(i32::MAX) + 1)).is_err());
        assert!(IntScalar.serialize(&Value::from("twelve")).is_err());

        Ok(())
    }

    #[test]
    fn parse_value_accepts_only_integral_numbers() -> Result<()> {
        assert_eq!(IntScalar.parse_value(&json!(-4))?, Value::Int(-4));
        assert_eq!(IntScalar.parse_value(&json!(4.0))?, Value::Int(4));

        assert!(IntScalar.parse_value(&json!(4.5)).is_err());
        assert!(IntScalar.parse_value(&json!("4")).is_err());
        assert!(IntScalar.parse_value(&json!(5_000_000_000i64)).is_err());

        Ok(())
    }

    #[test]
    fn parse_literal() -> Result<()> {
        assert_eq!(
            IntScalar.parse_literal(&Literal::Int(1))?,
            ParsedLiteral::Value(Value::Int(1)),
        );
        assert_eq!(
            IntScalar.parse_literal(&Literal::Float(1.0))?,
            ParsedLiteral::Unrepresentable,
        );

        let err = IntScalar.parse_literal(&Literal::Int(1 << 40)).unwrap_err();
        assert_eq!(err.scalar_name, "Int");

        Ok(())
    }
}

mod float_scalar {
    use super::*;

    #[test]
    fn ints_widen_to_floats() -> Result<()> {
        assert_eq!(FloatScalar.serialize(&Value::Int(2))?, json!(2.0));
        assert_eq!(FloatScalar.parse_value(&json!(2))?, Value::Float(2.0));
        assert_eq!(
            FloatScalar.parse_literal(&Literal::Int(2))?,
            ParsedLiteral::Value(Value::Float(2.0)),
        );
        Ok(())
    }

    #[test]
    fn non_finite_values_cannot_be_serialized() {
        assert!(FloatScalar.serialize(&Value::Float(f64::NAN)).is_err());
        assert!(FloatScalar.serialize(&Value::Float(f64::INFINITY)).is_err());
    }
}

mod string_scalar {
    use super::*;

    #[test]
    fn serialize_stringifies_scalars() -> Result<()> {
        assert_eq!(StringScalar.serialize(&Value::from("Ada"))?, json!("Ada"));
        assert_eq!(StringScalar.serialize(&Value::Int(1))?, json!("1"));
        assert_eq!(StringScalar.serialize(&Value::Boolean(false))?, json!("false"));
        assert!(StringScalar.serialize(&Value::List(vec![])).is_err());
        Ok(())
    }

    #[test]
    fn parse_is_strict() -> Result<()> {
        assert_eq!(StringScalar.parse_value(&json!("Ada"))?, Value::from("Ada"));
        assert!(StringScalar.parse_value(&json!(1)).is_err());
        assert_eq!(
            StringScalar.parse_literal(&Literal::Int(1))?,
            ParsedLiteral::Unrepresentable,
        );
        Ok(())
    }
}

mod boolean_scalar {
    use super::*;

    #[test]
    fn coercion() -> Result<()> {
        assert_eq!(BooleanScalar.serialize(&Value::Int(0))?, json!(false));
        assert_eq!(BooleanScalar.parse_value(&json!(true))?, Value::Boolean(true));
        assert!(BooleanScalar.parse_value(&json!("true")).is_err());
        assert!(BooleanScalar.serialize(&Value::from("true")).is_err());
        Ok(())
    }
}

mod id_scalar {
    use super::*;

    #[test]
    fn integers_become_strings() -> Result<()> {
        assert_eq!(IdScalar.parse_value(&json!(7))?, Value::from("7"));
        assert_eq!(IdScalar.serialize(&Value::Int(7))?, json!("7"));
        assert_eq!(
            IdScalar.parse_literal(&Literal::Int(7))?,
            ParsedLiteral::Value(Value::from("7")),
        );
        assert!(IdScalar.parse_value(&json!(7.5)).is_err());
        Ok(())
    }
}
