mod type_annotation;
