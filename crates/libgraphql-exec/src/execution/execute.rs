use crate::execution::Dispatcher;
use crate::execution::ExecutionError;
use crate::execution::ExecutionResult;
use crate::execution::FieldOutput;
use crate::execution::GraphQLError;
use crate::execution::operation_validator::OperationValidator;
use crate::execution::PathSegment;
use crate::operation::FieldSelection;
use crate::operation::Operation;
use crate::resolver::RequestContext;
use crate::schema::FieldLookup;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::Value;
use std::future::Future;
use std::pin::Pin;
use tracing::Instrument;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Raised when a null lands in a non-null position. The error describing
/// why has already been recorded; the nearest nullable ancestor becomes
/// null.
#[derive(Clone, Copy, Debug)]
struct NullPropagation;

type Completion = std::result::Result<serde_json::Value, NullPropagation>;

const TYPENAME_FIELD: &str = "__typename";

/// Executes `operation` against `schema`.
///
/// Never fails: every problem (an unknown root field, bad arguments, a
/// failing resolver, ...) is reported in [`ExecutionResult::errors`].
/// Variables whose declared types do not exist, or do not fit the arguments
/// they are passed to, reject the operation before any resolver runs. A
/// failure of the root field itself produces no `data`; failures of nested
/// fields null out the nearest nullable ancestor and leave their siblings
/// intact.
pub async fn execute(
    schema: &Schema,
    operation: Operation,
    ctx: &RequestContext,
) -> ExecutionResult {
    let kind = operation.kind();
    let span = tracing::debug_span!(
        "execute",
        operation = %kind,
        field = operation.field_name(),
    );

    async move {
        let Some(root_type_name) = schema.root_type_name(kind) else {
            let err = ExecutionError::UnsupportedOperationType { operation: kind };
            return ExecutionResult::from_errors(vec![err.to_graphql_error(vec![])]);
        };

        let validation_errors =
            OperationValidator::new(schema, &operation).validate(root_type_name);
        if !validation_errors.is_empty() {
            return ExecutionResult::from_errors(
                validation_errors.iter()
                    .map(|err| err.to_graphql_error(vec![]))
                    .collect(),
            );
        }

        let executor = Executor {
            ctx: ctx.for_operation(kind),
            dispatcher: Dispatcher::new(schema),
            schema,
        };
        let result = executor.execute_root(root_type_name, &operation.root_field).await;

        tracing::debug!(
            has_data = result.data.is_some(),
            num_errors = result.errors.len(),
            "executed operation",
        );
        result
    }.instrument(span).await
}

struct Executor<'schema> {
    ctx: RequestContext,
    dispatcher: Dispatcher<'schema>,
    schema: &'schema Schema,
}
impl<'schema> Executor<'schema> {
    async fn execute_root(
        &self,
        root_type_name: &str,
        selection: &FieldSelection,
    ) -> ExecutionResult {
        let path = vec![PathSegment::from(selection.response_key())];
        let root_error = |err: ExecutionError| {
            ExecutionResult::from_errors(vec![err.to_graphql_error(path.clone())])
        };

        let lookup =
            match self.schema.lookup_field(root_type_name, selection.name()) {
                Ok(lookup) => lookup,
                Err(err) => return root_error(err.into()),
            };
        let output =
            match self.dispatch(lookup, selection, &Value::Null).await {
                Ok(output) => output,
                Err(err) => return root_error(err),
            };

        let mut errors = vec![];
        let completion = self.complete_value(
            lookup.field,
            lookup.result_type(),
            output,
            selection,
            path.clone(),
            &mut errors,
        ).await;

        let data =
            completion.ok().map(|value| {
                let mut data = serde_json::Map::new();
                data.insert(selection.response_key().to_string(), value);
                serde_json::Value::Object(data)
            });

        ExecutionResult { data, errors }
    }

    async fn dispatch(
        &self,
        lookup: FieldLookup<'schema>,
        selection: &FieldSelection,
        parent: &Value,
    ) -> Result<FieldOutput, ExecutionError> {
        let result_type = lookup.result_type();
        if selection.selection_set().is_some()
            && self.is_leaf_type(result_type.innermost_type_name()) {
            return Err(ExecutionError::InvalidSelection {
                field_name: lookup.field.name().to_string(),
                result_type: result_type.to_string(),
                type_name: lookup.field.parent_type_name().to_string(),
            });
        }

        self.dispatcher.dispatch_lookup(
            lookup,
            selection.arguments(),
            parent,
            &self.ctx,
        ).await
    }

    /// Resolves and completes one field nested beneath the root field.
    fn resolve_field<'a>(
        &'a self,
        obj_type: &'schema ObjectType,
        selection: &'a FieldSelection,
        parent: &'a Value,
        path: Vec<PathSegment>,
        errors: &'a mut Vec<GraphQLError>,
    ) -> BoxFuture<'a, Completion> {
        Box::pin(async move {
            if selection.name() == TYPENAME_FIELD {
                return Ok(serde_json::Value::from(obj_type.name()));
            }

            let lookup =
                match self.schema.lookup_field(obj_type.name(), selection.name()) {
                    Ok(lookup) => lookup,
                    Err(err) => {
                        // Unknown fields have no declared nullability.
                        errors.push(ExecutionError::from(err).to_graphql_error(path));
                        return Ok(serde_json::Value::Null);
                    },
                };

            match self.dispatch(lookup, selection, parent).await {
                Ok(output) => self.complete_value(
                    lookup.field,
                    lookup.result_type(),
                    output,
                    selection,
                    path,
                    errors,
                ).await,

                Err(err) => {
                    errors.push(err.to_graphql_error(path));
                    null_or_propagate(lookup.result_type())
                },
            }
        })
    }

    fn complete_value<'a>(
        &'a self,
        field: &'schema Field,
        annotation: &'schema TypeAnnotation,
        output: FieldOutput,
        selection: &'a FieldSelection,
        path: Vec<PathSegment>,
        errors: &'a mut Vec<GraphQLError>,
    ) -> BoxFuture<'a, Completion> {
        Box::pin(async move {
            if output.is_null() {
                if annotation.nullable() {
                    return Ok(serde_json::Value::Null);
                }
                let err = ExecutionError::NonNullViolation {
                    field_name: field.name().to_string(),
                    type_name: field.parent_type_name().to_string(),
                };
                errors.push(err.to_graphql_error(path));
                return Err(NullPropagation);
            }

            match annotation {
                TypeAnnotation::List(list_annot) => {
                    let items: Vec<FieldOutput> =
                        match output {
                            FieldOutput::Leaf(serde_json::Value::Array(items)) =>
                                items.into_iter().map(FieldOutput::Leaf).collect(),
                            FieldOutput::Composite(Value::List(items)) =>
                                items.into_iter().map(FieldOutput::Composite).collect(),
                            other => return self.unexpected_value(
                                field,
                                annotation,
                                output_kind(&other),
                                path,
                                errors,
                            ),
                        };

                    let mut completed = Vec::with_capacity(items.len());
                    for (idx, item) in items.into_iter().enumerate() {
                        let mut item_path = path.clone();
                        item_path.push(PathSegment::Index(idx));
                        let item_completion = self.complete_value(
                            field,
                            list_annot.inner_type(),
                            item,
                            selection,
                            item_path,
                            errors,
                        ).await;
                        match item_completion {
                            Ok(value) => completed.push(value),
                            Err(NullPropagation) => return null_or_propagate(annotation),
                        }
                    }
                    Ok(serde_json::Value::Array(completed))
                },

                TypeAnnotation::Named(named_annot) => match output {
                    FieldOutput::Leaf(json) => Ok(json),

                    FieldOutput::Composite(value) => {
                        let obj_type =
                            named_annot.graphql_type(self.schema)
                                .and_then(GraphQLType::as_object);
                        match (obj_type, &value) {
                            (Some(obj_type), Value::Object(_)) => {
                                let completion = self.complete_object(
                                    obj_type,
                                    &value,
                                    selection,
                                    path,
                                    errors,
                                ).await;
                                completion.or_else(|_| null_or_propagate(annotation))
                            },
                            _ => self.unexpected_value(
                                field,
                                annotation,
                                value.kind_name(),
                                path,
                                errors,
                            ),
                        }
                    },
                },
            }
        })
    }

    /// Produces the response object for `value`. With a selection set only
    /// the selected fields are resolved; without one every declared field
    /// present on `value` is emitted.
    async fn complete_object(
        &self,
        obj_type: &'schema ObjectType,
        value: &Value,
        selection: &FieldSelection,
        path: Vec<PathSegment>,
        errors: &mut Vec<GraphQLError>,
    ) -> Completion {
        let implicit_selections;
        let sub_selections =
            match selection.selection_set() {
                Some(sub_selections) => sub_selections,
                None => {
                    implicit_selections =
                        obj_type.fields()
                            .keys()
                            .filter(|field_name| value.get(field_name).is_some())
                            .map(FieldSelection::new)
                            .collect::<Vec<_>>();
                    implicit_selections.as_slice()
                },
            };

        let mut completed = serde_json::Map::new();
        for sub_selection in sub_selections {
            let response_key = sub_selection.response_key();
            let mut field_path = path.clone();
            field_path.push(PathSegment::from(response_key));
            let field_value = self.resolve_field(
                obj_type,
                sub_selection,
                value,
                field_path,
                errors,
            ).await?;
            completed.insert(response_key.to_string(), field_value);
        }
        Ok(serde_json::Value::Object(completed))
    }

    fn is_leaf_type(&self, type_name: &str) -> bool {
        self.schema.lookup_type(type_name).is_some_and(GraphQLType::is_leaf)
    }

    fn unexpected_value(
        &self,
        field: &Field,
        annotation: &TypeAnnotation,
        actual: &'static str,
        path: Vec<PathSegment>,
        errors: &mut Vec<GraphQLError>,
    ) -> Completion {
        let err = ExecutionError::UnexpectedValue {
            actual,
            expected: format!("a `{annotation}`"),
            field_name: field.name().to_string(),
            type_name: field.parent_type_name().to_string(),
        };
        errors.push(err.to_graphql_error(path));
        null_or_propagate(annotation)
    }
}

fn output_kind(output: &FieldOutput) -> &'static str {
    match output {
        FieldOutput::Leaf(_) => "scalar",
        FieldOutput::Composite(value) => value.kind_name(),
    }
}

fn null_or_propagate(annotation: &TypeAnnotation) -> Completion {
    if annotation.nullable() {
        Ok(serde_json::Value::Null)
    } else {
        Err(NullPropagation)
    }
}
