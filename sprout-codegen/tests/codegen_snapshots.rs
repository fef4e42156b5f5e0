//! Snapshot tests for generated files.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use sprout_codegen::patch::{Injection, RouteRegistration, inject_route, model_block};
use sprout_codegen::project::files::{IndexEntry, PrismaSchema};
use sprout_core::{Database, GeneratedFile, Language, Template};

#[test]
fn test_entry_point_with_routes() {
    let mut content = IndexEntry::new(Language::TypeScript, Template::Api).render();
    for (name, route) in [("user", "/users"), ("post", "/posts")] {
        let registration = RouteRegistration::new(name, route, Language::TypeScript);
        match inject_route(&content, &registration).expect("no anchor") {
            Injection::Applied { content: patched, .. } => content = patched,
            Injection::AlreadyPresent => panic!("{name} already present"),
        }
    }

    insta::assert_snapshot!("entry_point_with_routes", content);
}

#[test]
fn test_schema_with_models() {
    let mut schema = PrismaSchema::for_database(Database::Sqlite)
        .expect("sqlite has a provider")
        .render();
    schema.push_str(&model_block("User"));
    schema.push_str(&model_block("Post"));

    insta::assert_snapshot!("schema_with_models", schema);
}
