use crate::ast;
use crate::loc::SchemaDefLocation;
use crate::types::TypeAnnotation;

fn named(name: &str) -> ast::schema::Type {
    ast::schema::Type::NamedType(name.to_string())
}

fn non_null(inner: ast::schema::Type) -> ast::schema::Type {
    ast::schema::Type::NonNullType(Box::new(inner))
}

fn list(inner: ast::schema::Type) -> ast::schema::Type {
    ast::schema::Type::ListType(Box::new(inner))
}

fn annotation(ast_type: ast::schema::Type) -> TypeAnnotation {
    TypeAnnotation::from_ast_type(&SchemaDefLocation::GraphQLBuiltIn, &ast_type)
}

#[test]
fn nullable_named_type() {
    let annot = annotation(named("User"));
    assert!(annot.nullable());
    assert!(annot.as_named_annotation().is_some());
    assert_eq!(annot.innermost_type_name(), "User");
    assert_eq!(annot.to_string(), "User");
}

#[test]
fn non_null_named_type() {
    let annot = annotation(non_null(named("Int")));
    assert!(!annot.nullable());
    assert_eq!(annot.to_string(), "Int!");
}

#[test]
fn nested_lists_track_nullability_per_level() {
    let annot = annotation(non_null(list(non_null(named("Int")))));
    assert!(!annot.nullable());
    assert_eq!(annot.to_string(), "[Int!]!");
    assert_eq!(annot.innermost_type_name(), "Int");

    let list_annot = annot.as_list_annotation().unwrap();
    assert!(!list_annot.inner_type().nullable());

    let annot = annotation(list(list(named("Date"))));
    assert!(annot.nullable());
    assert_eq!(annot.to_string(), "[[Date]]");
    assert_eq!(annot.innermost_named_type_annotation().type_name(), "Date");
}
