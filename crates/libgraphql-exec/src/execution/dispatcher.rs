use crate::execution::ExecutionError;
use crate::literal::Literal;
use crate::operation::RawArgument;
use crate::resolver::Arguments;
use crate::resolver::RequestContext;
use crate::scalar::ParsedLiteral;
use crate::scalar::ScalarCodec;
use crate::scalar::SerializationError;
use crate::schema::FieldLookup;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, ExecutionError>;

/// What a single dispatched field produced.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldOutput {
    /// The field is scalar-typed and its value has already been encoded into
    /// wire form.
    Leaf(serde_json::Value),

    /// The field is object-typed. The value still needs to be completed
    /// against the object type's fields.
    Composite(Value),
}
impl FieldOutput {
    pub fn is_null(&self) -> bool {
        match self {
            Self::Leaf(json) => json.is_null(),
            Self::Composite(value) => value.is_null(),
        }
    }
}

/// Resolves one field at a time: decodes the field's arguments, invokes its
/// resolver and encodes any scalar-typed result.
///
/// A [`Dispatcher`] only borrows the [`Schema`]. It holds no per-request
/// state, so a field is never served from a cache.
#[derive(Clone, Copy, Debug)]
pub struct Dispatcher<'schema> {
    schema: &'schema Schema,
}
impl<'schema> Dispatcher<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self { schema }
    }

    pub async fn dispatch(
        &self,
        type_name: &str,
        field_name: &str,
        raw_args: &IndexMap<String, RawArgument>,
        parent: &Value,
        ctx: &RequestContext,
    ) -> Result<FieldOutput> {
        let lookup = self.schema.lookup_field(type_name, field_name)?;
        self.dispatch_lookup(lookup, raw_args, parent, ctx).await
    }

    /// Same as [`Dispatcher::dispatch()`] for a field that was already looked
    /// up.
    pub(crate) async fn dispatch_lookup(
        &self,
        lookup: FieldLookup<'schema>,
        raw_args: &IndexMap<String, RawArgument>,
        parent: &Value,
        ctx: &RequestContext,
    ) -> Result<FieldOutput> {
        let field = lookup.field;
        let args = self.coerce_arguments(field, raw_args)?;

        tracing::trace!(
            type_name = field.parent_type_name(),
            field_name = field.name(),
            num_args = args.len(),
            "dispatching field",
        );

        let raw_result =
            match lookup.resolver {
                Some(resolver) =>
                    resolver.resolve(parent, &args, ctx).await.inspect_err(|err| {
                        tracing::warn!(
                            type_name = field.parent_type_name(),
                            field_name = field.name(),
                            "resolver failed: {err}",
                        );
                    })?,

                // Default resolution: read the same-named property.
                None => parent.get(field.name()).cloned().unwrap_or(Value::Null),
            };

        self.encode_result(field, raw_result)
    }

    fn coerce_arguments(
        &self,
        field: &Field,
        raw_args: &IndexMap<String, RawArgument>,
    ) -> Result<Arguments> {
        if let Some(argument_name) =
            raw_args.keys().find(|name| !field.parameters().contains_key(name.as_str())) {
            return Err(ExecutionError::UnknownArgument {
                argument_name: argument_name.to_string(),
                field_name: field.name().to_string(),
                type_name: field.parent_type_name().to_string(),
            });
        }

        let mut args = Arguments::new();
        for (param_name, param) in field.parameters() {
            let value =
                match (raw_args.get(param_name), param.default_value()) {
                    (Some(RawArgument::Variable(json)), _) =>
                        self.coerce_variable(field, param, param.type_annotation(), json)?,

                    (Some(RawArgument::Literal(literal)), _)
                    | (None, Some(literal)) =>
                        self.coerce_literal(field, param, param.type_annotation(), literal)?,

                    (None, None) if param.is_required() =>
                        return Err(ExecutionError::MissingArgument {
                            argument_name: param_name.to_string(),
                            argument_type: param.type_annotation().to_string(),
                            field_name: field.name().to_string(),
                            type_name: field.parent_type_name().to_string(),
                        }),

                    (None, None) => continue,
                };
            args.insert(param_name.as_str(), value);
        }

        Ok(args)
    }

    fn coerce_literal(
        &self,
        field: &Field,
        param: &Parameter,
        annotation: &TypeAnnotation,
        literal: &Literal,
    ) -> Result<Value> {
        if let Literal::Null = literal {
            return self.coerce_null(field, param, annotation);
        }

        match annotation {
            TypeAnnotation::List(list_annot) => {
                let items =
                    if let Literal::List(items) = literal {
                        items.iter().collect::<Vec<_>>()
                    } else {
                        vec![literal]
                    };
                items.into_iter()
                    .map(|item| self.coerce_literal(field, param, list_annot.inner_type(), item))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::List)
            },

            TypeAnnotation::Named(named_annot) => {
                let codec = self.input_codec(field, param, named_annot.type_name())?;
                let parsed =
                    codec.parse_literal(literal)
                        .map_err(|err| invalid_argument(field, param, err.to_string()))?;
                match parsed {
                    ParsedLiteral::Value(value) => Ok(value),
                    ParsedLiteral::Unrepresentable =>
                        Err(ExecutionError::UnrepresentableLiteral {
                            argument_name: param.name().to_string(),
                            argument_type: annotation.to_string(),
                            literal_kind: literal.kind(),
                        }),
                }
            },
        }
    }

    fn coerce_null(
        &self,
        field: &Field,
        param: &Parameter,
        annotation: &TypeAnnotation,
    ) -> Result<Value> {
        if annotation.nullable() {
            Ok(Value::Null)
        } else {
            Err(invalid_argument(
                field,
                param,
                format!("null is not a valid value for the non-null type `{annotation}`"),
            ))
        }
    }

    fn coerce_variable(
        &self,
        field: &Field,
        param: &Parameter,
        annotation: &TypeAnnotation,
        json: &serde_json::Value,
    ) -> Result<Value> {
        if json.is_null() {
            return self.coerce_null(field, param, annotation);
        }

        match annotation {
            TypeAnnotation::List(list_annot) => {
                let items =
                    if let serde_json::Value::Array(items) = json {
                        items.iter().collect::<Vec<_>>()
                    } else {
                        vec![json]
                    };
                items.into_iter()
                    .map(|item| self.coerce_variable(field, param, list_annot.inner_type(), item))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::List)
            },

            TypeAnnotation::Named(named_annot) =>
                self.input_codec(field, param, named_annot.type_name())?
                    .parse_value(json)
                    .map_err(|err| invalid_argument(field, param, err.to_string())),
        }
    }

    fn encode_result(&self, field: &Field, value: Value) -> Result<FieldOutput> {
        let result_type = field.type_annotation();
        let type_name = result_type.innermost_type_name();
        if !self.is_leaf_type(type_name) {
            return Ok(FieldOutput::Composite(value));
        }

        let codec =
            self.schema.lookup_scalar(type_name)
                .ok_or_else(|| SerializationError::new(
                    type_name,
                    "any value: no codec is registered for it",
                ))?;
        self.serialize_leaf(field, codec, result_type, &value)
            .map(FieldOutput::Leaf)
    }

    fn input_codec(
        &self,
        field: &Field,
        param: &Parameter,
        type_name: &str,
    ) -> Result<&'schema dyn ScalarCodec> {
        self.schema.lookup_scalar(type_name).ok_or_else(|| invalid_argument(
            field,
            param,
            format!("`{type_name}` is not an input type"),
        ))
    }

    fn is_leaf_type(&self, type_name: &str) -> bool {
        self.schema.lookup_type(type_name).is_some_and(GraphQLType::is_leaf)
    }

    fn serialize_leaf(
        &self,
        field: &Field,
        codec: &dyn ScalarCodec,
        annotation: &TypeAnnotation,
        value: &Value,
    ) -> Result<serde_json::Value> {
        if value.is_null() {
            return Ok(serde_json::Value::Null);
        }

        match annotation {
            TypeAnnotation::List(list_annot) => match value {
                Value::List(items) =>
                    items.iter()
                        .map(|item| self.serialize_leaf(field, codec, list_annot.inner_type(), item))
                        .collect::<Result<Vec<_>>>()
                        .map(serde_json::Value::Array),

                other => Err(ExecutionError::UnexpectedValue {
                    actual: other.kind_name(),
                    expected: format!("a list of `{}`", list_annot.inner_type()),
                    field_name: field.name().to_string(),
                    type_name: field.parent_type_name().to_string(),
                }),
            },

            TypeAnnotation::Named(_) => Ok(codec.serialize(value)?),
        }
    }
}

fn invalid_argument(field: &Field, param: &Parameter, reason: String) -> ExecutionError {
    ExecutionError::InvalidArgumentValue {
        argument_name: param.name().to_string(),
        field_name: field.name().to_string(),
        reason,
        type_name: field.parent_type_name().to_string(),
    }
}
