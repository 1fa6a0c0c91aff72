use crate::ast;
use crate::literal::Literal;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::types::TypesMapBuilder;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Visits `type` definitions and `extend type` extensions in SDL documents.
///
/// Extensions may appear before the type they extend (e.g. in an earlier
/// SDL string), so unresolved extensions are held until
/// [`ObjectTypeBuilder::finalize()`].
#[derive(Debug)]
pub struct ObjectTypeBuilder {
    extensions: Vec<(Option<PathBuf>, ast::schema::ObjectTypeExtension)>,
}

impl ObjectTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    pub fn finalize(mut self, types_builder: &mut TypesMapBuilder) -> Result<()> {
        // Apply in the order the extensions were encountered.
        self.extensions.reverse();
        while let Some((ext_path, ext)) = self.extensions.pop() {
            let ext_loc: loc::SchemaDefLocation =
                loc::FilePosition::from_pos(ext_path.as_ref(), ext.position).into();
            match types_builder.get_type_mut(ext.name.as_str()) {
                Some(GraphQLType::Object(obj_type)) =>
                    merge_type_extension(obj_type, ext_path.as_deref(), ext)?,

                Some(non_obj_type) =>
                    return Err(SchemaBuildError::InvalidExtensionType {
                        extension_loc: ext_loc,
                        type_name: non_obj_type.name().to_string(),
                    }),

                None =>
                    return Err(SchemaBuildError::ExtensionOfUndefinedType {
                        type_name: ext.name.to_string(),
                        extension_type_loc: ext_loc,
                    }),
            }
        }
        Ok(())
    }

    pub fn visit_type_def(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        def: ast::schema::ObjectType,
    ) -> Result<()> {
        let def_location: loc::SchemaDefLocation =
            loc::FilePosition::from_pos(file_path, def.position).into();

        if let Some(iface_name) = def.implements_interfaces.first() {
            return Err(SchemaBuildError::UnsupportedDefinition {
                def_location,
                description: format!(
                    "`{}` implements the `{iface_name}` interface, but \
                    interfaces are not supported",
                    def.name,
                ),
            });
        }

        let mut obj_type = ObjectType {
            def_location: def_location.clone(),
            description: def.description.to_owned(),
            fields: IndexMap::new(),
            name: def.name.to_string(),
        };
        add_fields(&mut obj_type, file_path, &def.fields)?;

        types_builder.add_new_type(
            def.name.as_str(),
            &def_location,
            GraphQLType::Object(obj_type),
        )
    }

    pub fn visit_type_extension(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        ext: ast::schema::ObjectTypeExtension,
    ) -> Result<()> {
        match types_builder.get_type_mut(ext.name.as_str()) {
            Some(GraphQLType::Object(obj_type)) =>
                merge_type_extension(obj_type, file_path, ext),

            Some(non_obj_type) =>
                Err(SchemaBuildError::InvalidExtensionType {
                    extension_loc:
                        loc::FilePosition::from_pos(file_path, ext.position).into(),
                    type_name: non_obj_type.name().to_string(),
                }),

            None => {
                self.extensions.push((file_path.map(Path::to_path_buf), ext));
                Ok(())
            },
        }
    }
}

fn add_fields(
    obj_type: &mut ObjectType,
    file_path: Option<&Path>,
    ast_fields: &[ast::schema::Field],
) -> Result<()> {
    for ast_field in ast_fields {
        let field = field_from_ast(obj_type.name(), file_path, ast_field)?;
        if let Some(existing_field) = obj_type.fields.get(field.name()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: obj_type.name().to_string(),
                field_name: field.name().to_string(),
                field_def1: existing_field.def_location().to_owned(),
                field_def2: field.def_location().to_owned(),
            });
        }
        obj_type.fields.insert(field.name().to_string(), field);
    }
    Ok(())
}

fn field_from_ast(
    type_name: &str,
    file_path: Option<&Path>,
    ast_field: &ast::schema::Field,
) -> Result<Field> {
    let def_location: loc::SchemaDefLocation =
        loc::FilePosition::from_pos(file_path, ast_field.position).into();

    if ast_field.name.starts_with("__") {
        return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
            def_location,
            field_name: ast_field.name.to_string(),
            type_name: type_name.to_string(),
        });
    }

    let mut params: IndexMap<String, Parameter> = IndexMap::new();
    for input_val in &ast_field.arguments {
        let param = parameter_from_ast(type_name, &ast_field.name, file_path, input_val)?;
        if let Some(existing_param) = params.get(param.name()) {
            return Err(SchemaBuildError::DuplicateParameterDefinition {
                type_name: type_name.to_string(),
                field_name: ast_field.name.to_string(),
                param_name: param.name().to_string(),
                param_def1: existing_param.def_location().to_owned(),
                param_def2: param.def_location().to_owned(),
            });
        }
        params.insert(param.name().to_string(), param);
    }

    Ok(Field {
        type_annotation: TypeAnnotation::from_ast_type(
            &def_location,
            &ast_field.field_type,
        ),
        def_location,
        description: ast_field.description.to_owned(),
        name: ast_field.name.to_string(),
        params,
        parent_type_name: type_name.to_string(),
    })
}

fn parameter_from_ast(
    type_name: &str,
    field_name: &str,
    file_path: Option<&Path>,
    input_val: &ast::schema::InputValue,
) -> Result<Parameter> {
    let def_location: loc::SchemaDefLocation =
        loc::FilePosition::from_pos(file_path, input_val.position).into();

    if input_val.name.starts_with("__") {
        return Err(SchemaBuildError::InvalidDunderPrefixedParamName {
            def_location,
            field_name: field_name.to_string(),
            param_name: input_val.name.to_string(),
            type_name: type_name.to_string(),
        });
    }

    let default_value =
        match &input_val.default_value {
            Some(ast_value) => Some(
                Literal::try_from_ast(ast_value).map_err(|err| {
                    SchemaBuildError::InvalidDefaultValue {
                        def_location: def_location.clone(),
                        param_name: input_val.name.to_string(),
                        reason: format!("{err:?}"),
                    }
                })?
            ),
            None => None,
        };

    Ok(Parameter {
        type_annotation: TypeAnnotation::from_ast_type(
            &def_location,
            &input_val.value_type,
        ),
        def_location,
        default_value,
        name: input_val.name.to_string(),
    })
}

fn merge_type_extension(
    obj_type: &mut ObjectType,
    ext_file_path: Option<&Path>,
    ext: ast::schema::ObjectTypeExtension,
) -> Result<()> {
    if let Some(iface_name) = ext.implements_interfaces.first() {
        return Err(SchemaBuildError::UnsupportedDefinition {
            def_location:
                loc::FilePosition::from_pos(ext_file_path, ext.position).into(),
            description: format!(
                "an extension of `{}` implements the `{iface_name}` interface, \
                but interfaces are not supported",
                ext.name,
            ),
        });
    }
    add_fields(obj_type, ext_file_path, &ext.fields)
}
