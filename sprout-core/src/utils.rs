//! Shared naming helpers.

/// Uppercase the first character and keep the rest untouched
/// (e.g., "blogPost" -> "BlogPost").
///
/// Every generated cross-file reference goes through this function so
/// import names line up textually.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Check that a name matches `[A-Za-z_][A-Za-z0-9_]*`.
///
/// Generated route imports are recognised again by `\w+Routes`, so names
/// stay within word characters.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check that a route path starts with `/` and can sit inside a quoted
/// string literal: no quotes, backslashes, backticks or whitespace.
pub fn is_route_path(s: &str) -> bool {
    s.starts_with('/')
        && !s
            .chars()
            .any(|c| matches!(c, '"' | '\'' | '\\' | '`') || c.is_whitespace())
}

/// Check that a name is usable as a project directory and package name
/// (letters, digits, hyphens and underscores only).
pub fn is_project_name(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("user"), "User");
        assert_eq!(capitalize_first("blogPost"), "BlogPost");
        assert_eq!(capitalize_first("User"), "User");
        assert_eq!(capitalize_first("x"), "X");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("user"));
        assert!(is_identifier("blog_post"));
        assert!(is_identifier("_cache"));
        assert!(!is_identifier("$cache"));
        assert!(!is_identifier("ca$h"));
        assert!(!is_identifier("2fa"));
        assert!(!is_identifier("blog-post"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_is_route_path() {
        assert!(is_route_path("/users"));
        assert!(is_route_path("/api/v1/blog-posts"));
        assert!(!is_route_path("users"));
        for bad in ["/it's", "/a\"b", "/a\\b", "/a`b", "/a b", "/a\tb", "/a\nb"] {
            assert!(!is_route_path(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_is_project_name() {
        assert!(is_project_name("my-api"));
        assert!(is_project_name("my_api2"));
        assert!(!is_project_name("my api"));
        assert!(!is_project_name("../escape"));
        assert!(!is_project_name(""));
    }
}
