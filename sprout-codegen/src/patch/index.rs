//! Registering route modules in the Express entry point.
//!
//! Entry points written by `sprout init` carry two marker comments,
//! [`IMPORTS_MARKER`] and [`MOUNTS_MARKER`]. New lines go after the last
//! route import / mount already present, else after the marker. Entry points
//! from older releases have no markers; for those the section comments
//! (`// Import Routes`, `// Routes`, `// Error Handler`) and the `express`
//! import serve as anchors. When nothing matches the injection fails rather
//! than guessing.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use sprout_core::Language;
use thiserror::Error;

use crate::{Error, Result};

/// Marker line below which route imports are inserted (protocol v1).
pub const IMPORTS_MARKER: &str = "// sprout:route-imports v1";
/// Marker line below which route mounts are inserted (protocol v1).
pub const MOUNTS_MARKER: &str = "// sprout:route-mounts v1";

static ROUTE_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+\w+Routes\s+from\s+["']\./routes/.+["'];?"#).expect("Invalid regex")
});
static ROUTE_MOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"app\.use\(["'][^"']+["'],\s*\w+Routes\);?"#).expect("Invalid regex")
});
static IMPORTS_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//\s*Import Routes").expect("Invalid regex"));
static EXPRESS_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"import express[^;]+;").expect("Invalid regex"));
static ROUTES_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//[ \t]*Routes\r?\n").expect("Invalid regex"));
static ERROR_HANDLER_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//\s*Error Handler").expect("Invalid regex"));

/// A route module to register: `import <name>Routes ...` and
/// `app.use("<route>", <name>Routes)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRegistration {
    pub name: String,
    pub route: String,
    /// Appended to the relative module path (`.js` for untyped projects).
    pub import_suffix: &'static str,
}

impl RouteRegistration {
    pub fn new(name: impl Into<String>, route: impl Into<String>, language: Language) -> Self {
        Self {
            name: name.into(),
            route: route.into(),
            import_suffix: language.import_suffix(),
        }
    }

    pub fn import_statement(&self) -> String {
        format!(
            "import {name}Routes from \"./routes/{name}.routes{suffix}\";",
            name = self.name,
            suffix = self.import_suffix
        )
    }

    pub fn mount_statement(&self) -> String {
        format!("app.use(\"{}\", {}Routes);", self.route, self.name)
    }
}

/// What an insertion was anchored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// After the last existing route import or mount.
    AfterLast,
    /// After the marker comment.
    Marker,
    /// After a section comment of an entry point without markers.
    LegacyComment,
    /// Next to the `express` import or the error handler section.
    Fallback,
}

impl Anchor {
    /// Whether the insertion used a path kept for entry points without markers.
    pub fn is_compatibility_path(&self) -> bool {
        matches!(self, Anchor::LegacyComment | Anchor::Fallback)
    }
}

/// Outcome of [`inject_route`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Injection {
    Applied {
        content: String,
        imports: Anchor,
        mounts: Anchor,
    },
    /// The import statement is already in the file; nothing changed.
    AlreadyPresent,
}

/// No anchor was found for one of the two insertions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no anchor for the route {what}")]
pub struct MissingAnchor {
    pub what: &'static str,
    pub marker: &'static str,
    pub statement: String,
}

/// Insert the import and mount statements of `route` into `content`.
///
/// The mount position is computed on the text that already contains the new
/// import.
pub fn inject_route(
    content: &str,
    route: &RouteRegistration,
) -> std::result::Result<Injection, MissingAnchor> {
    let import = route.import_statement();
    if content.contains(&import) {
        return Ok(Injection::AlreadyPresent);
    }
    let newline = line_ending(content);

    let (content, imports) = insert_import(content, &import, newline).ok_or(MissingAnchor {
        what: "import",
        marker: IMPORTS_MARKER,
        statement: import,
    })?;

    let mount = route.mount_statement();
    let (content, mounts) = insert_mount(&content, &mount, newline).ok_or(MissingAnchor {
        what: "mount",
        marker: MOUNTS_MARKER,
        statement: mount,
    })?;

    Ok(Injection::Applied {
        content,
        imports,
        mounts,
    })
}

/// Read the entry point at `path`, inject `route` and write it back once.
///
/// A missing file surfaces as an I/O error.
pub fn inject_route_file(path: &Path, route: &RouteRegistration) -> Result<Injection> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    let injection = inject_route(&content, route).map_err(|e| {
        Box::new(Error::AnchorNotFound {
            path: path.to_path_buf(),
            what: e.what,
            marker: e.marker,
            statement: e.statement,
        })
    })?;

    if let Injection::Applied { content, .. } = &injection {
        std::fs::write(path, content).map_err(|e| Error::write(path, e))?;
    }
    Ok(injection)
}

fn insert_import(content: &str, statement: &str, nl: &str) -> Option<(String, Anchor)> {
    if let Some(last) = ROUTE_IMPORT.find_iter(content).last() {
        return Some((insert_line(content, last.end(), statement, nl), Anchor::AfterLast));
    }
    if let Some(end) = marker_line_end(content, IMPORTS_MARKER) {
        return Some((insert_line(content, end, statement, nl), Anchor::Marker));
    }
    if let Some(comment) = IMPORTS_COMMENT.find(content) {
        let replacement = format!("// Import Routes{nl}{statement}");
        return Some((
            splice(content, comment.start(), comment.end(), &replacement),
            Anchor::LegacyComment,
        ));
    }
    if let Some(express) = EXPRESS_IMPORT.find(content) {
        let replacement = format!("{}{nl}{nl}// Import Routes{nl}{statement}", express.as_str());
        return Some((
            splice(content, express.start(), express.end(), &replacement),
            Anchor::Fallback,
        ));
    }
    None
}

fn insert_mount(content: &str, statement: &str, nl: &str) -> Option<(String, Anchor)> {
    if let Some(last) = ROUTE_MOUNT.find_iter(content).last() {
        return Some((insert_line(content, last.end(), statement, nl), Anchor::AfterLast));
    }
    if let Some(end) = marker_line_end(content, MOUNTS_MARKER) {
        return Some((insert_line(content, end, statement, nl), Anchor::Marker));
    }
    if let Some(comment) = ROUTES_COMMENT.find(content) {
        let replacement = format!("// Routes{nl}{statement}{nl}{nl}");
        return Some((
            splice(content, comment.start(), comment.end(), &replacement),
            Anchor::LegacyComment,
        ));
    }
    if let Some(comment) = ERROR_HANDLER_COMMENT.find(content) {
        let replacement = format!("// Routes{nl}{statement}{nl}{nl}// Error Handler");
        return Some((
            splice(content, comment.start(), comment.end(), &replacement),
            Anchor::Fallback,
        ));
    }
    None
}

/// `"\r\n"` when the file already uses CRLF line endings, else `"\n"`.
fn line_ending(content: &str) -> &'static str {
    if content.contains("\r\n") { "\r\n" } else { "\n" }
}

/// Byte offset of the end of the line holding `marker`, line ending excluded.
fn marker_line_end(content: &str, marker: &str) -> Option<usize> {
    let start = content.find(marker)?;
    let end = content[start..]
        .find('\n')
        .map_or(content.len(), |offset| start + offset);
    Some(content[..end].strip_suffix('\r').map_or(end, str::len))
}

/// Put `statement` on its own line right after byte offset `at`.
fn insert_line(content: &str, at: usize, statement: &str, nl: &str) -> String {
    format!("{}{nl}{}{}", &content[..at], statement, &content[at..])
}

fn splice(content: &str, start: usize, end: usize, replacement: &str) -> String {
    format!("{}{}{}", &content[..start], replacement, &content[end..])
}

#[cfg(test)]
mod tests {
    use sprout_core::{GeneratedFile, Template};

    use super::*;
    use crate::project::files::IndexEntry;

    const LEGACY: &str = r#"import express from "express";

import errorHandler from "./middlewares/error.middleware.js";

const app = express();

// Routes
app.get("/api", (_, res) => {
  res.json({ message: "Welcome to my app" });
});

// Error Handler
app.use(errorHandler);
"#;

    fn user() -> RouteRegistration {
        RouteRegistration::new("user", "/users", Language::TypeScript)
    }

    fn applied(injection: Injection) -> (String, Anchor, Anchor) {
        match injection {
            Injection::Applied {
                content,
                imports,
                mounts,
            } => (content, imports, mounts),
            Injection::AlreadyPresent => panic!("expected an insertion"),
        }
    }

    #[test]
    fn test_statements() {
        let route = RouteRegistration::new("post", "/articles", Language::JavaScript);
        assert_eq!(
            route.import_statement(),
            r#"import postRoutes from "./routes/post.routes.js";"#
        );
        assert_eq!(
            route.mount_statement(),
            r#"app.use("/articles", postRoutes);"#
        );
    }

    #[test]
    fn test_marker_anchors() {
        let content = format!(
            "import express from \"express\";\n\n// Import Routes\n{IMPORTS_MARKER}\n\nconst app = express();\n\n// Routes\n{MOUNTS_MARKER}\n\n// Error Handler\napp.use(errorHandler);\n"
        );
        let (out, imports, mounts) = applied(inject_route(&content, &user()).unwrap());

        assert_eq!(imports, Anchor::Marker);
        assert_eq!(mounts, Anchor::Marker);
        assert!(out.contains(&format!(
            "{IMPORTS_MARKER}\nimport userRoutes from \"./routes/user.routes\";\n"
        )));
        assert!(out.contains(&format!(
            "{MOUNTS_MARKER}\napp.use(\"/users\", userRoutes);\n\n// Error Handler"
        )));
    }

    #[test]
    fn test_legacy_entry_point() {
        let (out, imports, mounts) = applied(inject_route(LEGACY, &user()).unwrap());

        assert_eq!(imports, Anchor::Fallback);
        assert_eq!(mounts, Anchor::LegacyComment);
        assert!(imports.is_compatibility_path());
        assert!(out.starts_with(
            "import express from \"express\";\n\n// Import Routes\nimport userRoutes from \"./routes/user.routes\";\n"
        ));
        assert!(out.contains("// Routes\napp.use(\"/users\", userRoutes);\n\napp.get(\"/api\""));
        assert_eq!(out.matches("// Routes\n").count(), 1);
    }

    #[test]
    fn test_after_last_existing_registration() {
        let (first, _, _) = applied(inject_route(LEGACY, &user()).unwrap());
        let post = RouteRegistration::new("post", "/posts", Language::TypeScript);
        let (out, imports, mounts) = applied(inject_route(&first, &post).unwrap());

        assert_eq!(imports, Anchor::AfterLast);
        assert_eq!(mounts, Anchor::AfterLast);
        assert!(out.contains(
            "import userRoutes from \"./routes/user.routes\";\nimport postRoutes from \"./routes/post.routes\";\n"
        ));
        assert!(out.contains(
            "app.use(\"/users\", userRoutes);\napp.use(\"/posts\", postRoutes);\n"
        ));
    }

    #[test]
    fn test_legacy_import_comment() {
        let content = "import express from \"express\";\n// Import Routes\n\nconst app = express();\n// Error Handler\n";
        let (out, imports, mounts) = applied(inject_route(content, &user()).unwrap());

        assert_eq!(imports, Anchor::LegacyComment);
        assert_eq!(mounts, Anchor::Fallback);
        assert_eq!(out.matches("// Import Routes").count(), 1);
        assert!(out.contains("// Routes\napp.use(\"/users\", userRoutes);\n\n// Error Handler"));
    }

    #[test]
    fn test_second_entity_follows_first() {
        let entry = IndexEntry::new(Language::TypeScript, Template::Api).render();
        let cache = RouteRegistration::new("_cache", "/cache", Language::TypeScript);
        let post = RouteRegistration::new("post", "/posts", Language::TypeScript);

        let (first, _, _) = applied(inject_route(&entry, &cache).unwrap());
        let (out, imports, mounts) = applied(inject_route(&first, &post).unwrap());

        assert_eq!(imports, Anchor::AfterLast);
        assert_eq!(mounts, Anchor::AfterLast);
        let position = |needle: &str| out.find(needle).unwrap();
        assert!(position("import _cacheRoutes") < position("import postRoutes"));
        assert!(position("app.use(\"/cache\"") < position("app.use(\"/posts\""));
    }

    #[test]
    fn test_duplicate_is_noop() {
        let (once, _, _) = applied(inject_route(LEGACY, &user()).unwrap());
        assert_eq!(inject_route(&once, &user()).unwrap(), Injection::AlreadyPresent);
    }

    #[test]
    fn test_missing_anchors() {
        let err = inject_route("const app = 1;\n", &user()).unwrap_err();
        assert_eq!(err.what, "import");
        assert_eq!(err.marker, IMPORTS_MARKER);

        let err = inject_route("import express from \"express\";\n", &user()).unwrap_err();
        assert_eq!(err.what, "mount");
        assert_eq!(err.statement, r#"app.use("/users", userRoutes);"#);
    }

    #[test]
    fn test_crlf_line_endings_are_kept() {
        let content = format!(
            "import express from \"express\";\r\n// Import Routes\r\n{IMPORTS_MARKER}\r\n\r\n// Routes\r\n{MOUNTS_MARKER}\r\n\r\n// Error Handler\r\n"
        );
        let (first, _, _) = applied(inject_route(&content, &user()).unwrap());
        let post = RouteRegistration::new("post", "/posts", Language::TypeScript);
        let (out, _, _) = applied(inject_route(&first, &post).unwrap());

        assert_eq!(out.matches('\n').count(), out.matches("\r\n").count());
        assert!(out.contains(&format!(
            "{IMPORTS_MARKER}\r\nimport userRoutes from \"./routes/user.routes\";\r\nimport postRoutes from \"./routes/post.routes\";\r\n"
        )));
        assert!(out.contains(
            "app.use(\"/users\", userRoutes);\r\napp.use(\"/posts\", postRoutes);\r\n"
        ));
    }

    #[test]
    fn test_crlf_legacy_comments() {
        let content = "import express from \"express\";\r\n\r\nconst app = express();\r\n\r\n// Routes\r\napp.get(\"/api\", handler);\r\n";
        let (out, imports, mounts) = applied(inject_route(content, &user()).unwrap());

        assert_eq!(imports, Anchor::Fallback);
        assert_eq!(mounts, Anchor::LegacyComment);
        assert_eq!(out.matches('\n').count(), out.matches("\r\n").count());
    }

    #[test]
    fn test_marker_at_end_of_file() {
        let content = format!("{IMPORTS_MARKER}\n{MOUNTS_MARKER}");
        let (out, _, _) = applied(inject_route(&content, &user()).unwrap());
        assert!(out.ends_with(&format!("{MOUNTS_MARKER}\napp.use(\"/users\", userRoutes);")));
    }
}
