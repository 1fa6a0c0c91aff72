mod schema_builder;
mod schema_lookup;
