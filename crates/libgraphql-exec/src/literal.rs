use indexmap::IndexMap;

/// A value written inline in a query document, as opposed to one supplied
/// via a separate variables payload.
///
/// The set of literal kinds is closed: scalar codecs switch over
/// [`LiteralKind`] and report any kind they do not accept as
/// [`ParsedLiteral::Unrepresentable`](crate::scalar::ParsedLiteral::Unrepresentable).
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
    Enum(String),
    List(Vec<Literal>),
    Object(IndexMap<String, Literal>),
}
impl Literal {
    pub fn kind(&self) -> LiteralKind {
        match self {
            Self::Int(_) => LiteralKind::Int,
            Self::Float(_) => LiteralKind::Float,
            Self::String(_) => LiteralKind::String,
            Self::Boolean(_) => LiteralKind::Boolean,
            Self::Null => LiteralKind::Null,
            Self::Enum(_) => LiteralKind::Enum,
            Self::List(_) => LiteralKind::List,
            Self::Object(_) => LiteralKind::Object,
        }
    }
}
impl std::convert::From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl std::convert::From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Int,
    Float,
    String,
    Boolean,
    Null,
    Enum,
    List,
    Object,
}
impl LiteralKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Enum => "enum",
            Self::List => "list",
            Self::Object => "object",
        }
    }
}
impl std::fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Reasons an AST value cannot be represented as a [`Literal`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum LiteralFromAstError {
    IntOutOfRange(String),
    VariableRef(String),
}

impl Literal {
    pub(crate) fn try_from_ast(
        ast_value: &crate::ast::query::Value,
    ) -> Result<Self, LiteralFromAstError> {
        use crate::ast::query::Value as AstValue;
        Ok(match ast_value {
            AstValue::Variable(var_name) =>
                return Err(LiteralFromAstError::VariableRef(var_name.to_string())),

            AstValue::Int(number) => match number.as_i64() {
                Some(int) => Self::Int(int),
                None => return Err(LiteralFromAstError::IntOutOfRange(
                    format!("{number:?}"),
                )),
            },

            AstValue::Float(value) => Self::Float(*value),
            AstValue::String(value) => Self::String(value.to_string()),
            AstValue::Boolean(value) => Self::Boolean(*value),
            AstValue::Null => Self::Null,
            AstValue::Enum(value) => Self::Enum(value.to_string()),

            AstValue::List(values) => Self::List(
                values.iter()
                    .map(Self::try_from_ast)
                    .collect::<Result<Vec<_>, _>>()?
            ),

            AstValue::Object(entries) => Self::Object(
                entries.iter()
                    .map(|(key, value)| Ok((key.to_string(), Self::try_from_ast(value)?)))
                    .collect::<Result<IndexMap<_, _>, LiteralFromAstError>>()?
            ),
        })
    }
}
