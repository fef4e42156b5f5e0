use std::path::PathBuf;

use sprout_core::GeneratedFile;

use super::Entity;

/// `requests/<e>.http`, a REST Client request collection.
pub struct HttpRequests<'a> {
    pub entity: &'a Entity,
}

impl GeneratedFile for HttpRequests<'_> {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(format!("requests/{}.http", self.entity.name))
    }

    fn render(&self) -> String {
        let Entity {
            name,
            capitalized,
            table,
            route,
        } = self.entity;

        format!(
            r#"# {capitalized} API Requests

@baseUrl = http://localhost:3000
@contentType = application/json

### Get all {table}
GET {{{{baseUrl}}}}{route}

### Get one {name}
GET {{{{baseUrl}}}}{route}/1

### Create {name}
POST {{{{baseUrl}}}}{route}
Content-Type: {{{{contentType}}}}

{{
  // "field": "Example"
}}

### Update {name}
PATCH {{{{baseUrl}}}}{route}/1
Content-Type: {{{{contentType}}}}

{{
  // "field": "Example"
}}

### Delete {name}
DELETE {{{{baseUrl}}}}{route}/1
"#
        )
    }
}
