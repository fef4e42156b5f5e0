use sprout_core::{capitalize_first, is_identifier, is_route_path};

use crate::{Error, Result};

/// Naming of one CRUD resource.
///
/// Every generated identifier derives from `name` and `capitalized`, so
/// imports across the generated files line up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// As typed by the user, e.g. `user`.
    pub name: String,
    /// `name` with its first character uppercased, e.g. `User`.
    pub capitalized: String,
    /// Collection name, used for list variables, e.g. `users`.
    pub table: String,
    /// Mount path of the router, e.g. `/users`.
    pub route: String,
}

impl Entity {
    /// Entity with `table = name` and `route = "/" + table`.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(Error::invalid_name(
                name,
                "entity name",
                "use letters, digits or '_', not starting with a digit",
            ));
        }
        Ok(Self {
            capitalized: capitalize_first(&name),
            table: name.clone(),
            route: format!("/{name}"),
            name,
        })
    }

    /// Set the table name. The route follows unless it was set explicitly.
    pub fn with_table(mut self, table: impl Into<String>) -> Result<Self> {
        let table = table.into();
        if !is_identifier(&table) {
            return Err(Error::invalid_name(
                table,
                "table name",
                "use letters, digits or '_', not starting with a digit",
            ));
        }
        if self.route == format!("/{}", self.table) {
            self.route = format!("/{table}");
        }
        self.table = table;
        Ok(self)
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Result<Self> {
        let route = route.into();
        if !is_route_path(&route) {
            return Err(Error::invalid_name(
                route,
                "route path",
                "route paths start with '/' and contain no quotes, backslashes, backticks or whitespace",
            ));
        }
        self.route = route;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let entity = Entity::new("user").unwrap();
        assert_eq!(entity.capitalized, "User");
        assert_eq!(entity.table, "user");
        assert_eq!(entity.route, "/user");
    }

    #[test]
    fn test_table_moves_default_route() {
        let entity = Entity::new("user").unwrap().with_table("users").unwrap();
        assert_eq!(entity.route, "/users");

        let entity = Entity::new("user")
            .unwrap()
            .with_route("/people")
            .unwrap()
            .with_table("users")
            .unwrap();
        assert_eq!(entity.route, "/people");
    }

    #[test]
    fn test_invalid_names() {
        assert!(Entity::new("").is_err());
        assert!(Entity::new("1user").is_err());
        assert!(Entity::new("user-profile").is_err());
        assert!(Entity::new("$cache").is_err());
        assert!(Entity::new("user").unwrap().with_table("$users").is_err());
        assert!(Entity::new("user").unwrap().with_table("").is_err());

        let err = Entity::new("user").unwrap().with_route("users").unwrap_err();
        assert!(matches!(*err, Error::InvalidName { context: "route path", .. }));
    }

    #[test]
    fn test_route_rejects_literal_breaking_chars() {
        for route in ["/it's", "/a\"b", "/a\\b", "/a`b", "/a b", "/a\tb"] {
            let err = Entity::new("user").unwrap().with_route(route).unwrap_err();
            assert!(
                matches!(*err, Error::InvalidName { context: "route path", .. }),
                "{route:?} should be rejected"
            );
        }
        assert_eq!(
            Entity::new("user").unwrap().with_route("/api/v1/users").unwrap().route,
            "/api/v1/users"
        );
    }
}
