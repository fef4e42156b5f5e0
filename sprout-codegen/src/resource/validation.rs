use std::path::PathBuf;

use sprout_core::{GeneratedFile, Language};

use super::{Entity, source_file};

/// `src/validations/<e>.validation.<ext>`: zod schemas wrapped as Express
/// middlewares.
pub struct Validation<'a> {
    pub entity: &'a Entity,
    pub language: Language,
}

impl GeneratedFile for Validation<'_> {
    fn relative_path(&self) -> PathBuf {
        source_file(
            "validations",
            &format!("{}.validation", self.entity.name),
            self.language,
        )
    }

    fn render(&self) -> String {
        let e = &self.entity.name;
        let cap = &self.entity.capitalized;
        let typed = self.language.is_typed();

        let express_import = if typed {
            "import { Request, Response, NextFunction } from \"express\";\n"
        } else {
            ""
        };
        let factory = if typed {
            r#"(schema: z.ZodSchema, source: "body" | "params" = "body")"#
        } else {
            r#"(schema, source = "body")"#
        };
        let handler = if typed {
            "(req: Request, res: Response, next: NextFunction)"
        } else {
            "(req, res, next)"
        };
        let params_cast = if typed { " as any" } else { "" };

        format!(
            r#"{express_import}import {{ z }} from "zod";

const {e}CreateSchema = z.object({{
  // Add your fields here after extending the Prisma model
}});

const {e}UpdateSchema = z.object({{
  // Add your fields here (make them optional)
}});

const idParamSchema = z.object({{
  id: z
    .string()
    .regex(/^\d+$/, "ID must be a positive integer")
    .transform(Number)
    .refine((n) => n > 0 && n <= Number.MAX_SAFE_INTEGER, {{
      message: "ID out of valid range",
    }}),
}});

const validate = {factory} => {{
  return {handler} => {{
    try {{
      const data = source === "body" ? req.body : req.params;
      const validated = schema.parse(data);

      if (source === "body") {{
        req.body = validated;
      }} else {{
        req.params = validated{params_cast};
      }}

      next();
    }} catch (err) {{
      if (err instanceof z.ZodError) {{
        res.status(400).json({{
          message: "Validation failed",
          errors: err.issues.map((e) => ({{
            field: e.path.join("."),
            message: e.message,
          }})),
        }});
      }} else {{
        next(err);
      }}
    }}
  }};
}};

export const validate{cap}Create = validate({e}CreateSchema, "body");
export const validate{cap}Update = validate({e}UpdateSchema, "body");
export const validate{cap}Id = validate(idParamSchema, "params");

export {{ {e}CreateSchema, {e}UpdateSchema, idParamSchema }};
"#
        )
    }
}
