use crate::operation::OperationKind;
use crate::resolver::Arguments;
use crate::resolver::RequestContext;
use crate::resolver::ResolverError;
use crate::Value;

#[test]
fn typed_accessors() -> Result<(), ResolverError> {
    let args: Arguments = [
        ("id", Value::Int(1)),
        ("name", Value::from("Ada")),
    ].into_iter().collect();

    assert_eq!(args.len(), 2);
    assert_eq!(args.i64("id")?, 1);
    assert_eq!(args.str("name")?, "Ada");

    Ok(())
}

#[test]
fn accessor_errors_name_the_argument() {
    let args: Arguments = [("id", Value::from("1"))].into_iter().collect();

    let err = args.i64("id").unwrap_err();
    assert_eq!(err.message(), "expected an integer `id` argument");

    let err = args.str("name").unwrap_err();
    assert_eq!(err.message(), "expected a string `name` argument");
}

#[test]
fn iteration_preserves_insertion_order() {
    let mut args = Arguments::new();
    args.insert("b", Value::Null);
    args.insert("a", Value::Boolean(true));

    assert_eq!(
        args.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>(),
        vec!["b", "a"],
    );
}

#[test]
fn request_context_data() {
    #[derive(Debug, PartialEq)]
    struct Caller(&'static str);

    let ctx = RequestContext::with_data(Caller("ada"));
    assert_eq!(ctx.data::<Caller>(), Some(&Caller("ada")));
    assert_eq!(ctx.data::<String>(), None);
    assert_eq!(ctx.operation_kind(), None);

    let op_ctx = ctx.for_operation(OperationKind::Mutation);
    assert_eq!(op_ctx.operation_kind(), Some(OperationKind::Mutation));
    assert_eq!(op_ctx.data::<Caller>(), Some(&Caller("ada")));
}
