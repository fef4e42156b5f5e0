use std::path::PathBuf;

use sprout_core::{GeneratedFile, Language};

/// `src/middlewares/error.middleware.<ext>`
///
/// With a database, Prisma's known request errors map to HTTP statuses:
/// P2002 (unique constraint) to 409 and P2025 (record not found) to 404.
pub struct ErrorMiddleware {
    pub language: Language,
    pub database: bool,
}

impl ErrorMiddleware {
    pub fn new(language: Language, database: bool) -> Self {
        Self { language, database }
    }
}

const RESPOND: &str = r#"  res.status(statusCode).json({
    message,
    stack: process.env.NODE_ENV === "production" ? null : err.stack,
  });
};

export default errorHandler;
"#;

impl GeneratedFile for ErrorMiddleware {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(format!(
            "src/middlewares/error.middleware.{}",
            self.language.extension()
        ))
    }

    fn render(&self) -> String {
        match (self.language.is_typed(), self.database) {
            (true, true) => format!(
                r#"import {{ Prisma }} from "../lib/generated/prisma/client";
import {{ NextFunction, Request, Response }} from "express";

const errorHandler = (
  err: Error | Prisma.PrismaClientKnownRequestError,
  _req: Request,
  res: Response,
  _next: NextFunction
) => {{
  let statusCode = res.statusCode !== 200 ? res.statusCode : 500;
  let message: string | object = err.message;

  if (err instanceof Prisma.PrismaClientKnownRequestError) {{
    if (err.code === "P2002") {{
      statusCode = 409;
      message = `Duplicate field value: ${{err.meta?.target}}`;
    }} else if (err.code === "P2025") {{
      statusCode = 404;
      message = `Resource not found: ${{err.meta?.cause}}`;
    }}
  }}

{RESPOND}"#
            ),
            (true, false) => format!(
                r#"import {{ NextFunction, Request, Response }} from "express";

const errorHandler = (
  err: Error,
  _req: Request,
  res: Response,
  _next: NextFunction
) => {{
  const statusCode = res.statusCode !== 200 ? res.statusCode : 500;
  const message = err.message;

{RESPOND}"#
            ),
            (false, true) => format!(
                r#"const errorHandler = (err, _req, res, _next) => {{
  let statusCode = res.statusCode !== 200 ? res.statusCode : 500;
  let message = err.message;

  if (err.code === "P2002") {{
    statusCode = 409;
    message = `Duplicate field value: ${{err.meta?.target}}`;
  }} else if (err.code === "P2025") {{
    statusCode = 404;
    message = `Resource not found: ${{err.meta?.cause}}`;
  }}

{RESPOND}"#
            ),
            (false, false) => format!(
                r#"const errorHandler = (err, _req, res, _next) => {{
  const statusCode = res.statusCode !== 200 ? res.statusCode : 500;
  const message = err.message;

{RESPOND}"#
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prisma_codes_mapped_with_database() {
        for language in [Language::TypeScript, Language::JavaScript] {
            let content = ErrorMiddleware::new(language, true).render();
            assert!(content.contains("\"P2002\""));
            assert!(content.contains("statusCode = 409"));
            assert!(content.contains("\"P2025\""));
            assert!(content.contains("statusCode = 404"));
        }
    }

    #[test]
    fn test_plain_handler_without_database() {
        let content = ErrorMiddleware::new(Language::TypeScript, false).render();
        assert!(!content.contains("Prisma"));
        assert!(content.ends_with("export default errorHandler;\n"));
    }
}
