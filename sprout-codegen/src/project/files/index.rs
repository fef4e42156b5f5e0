//! Express entry point generator.

use std::path::PathBuf;

use sprout_core::{GeneratedFile, Language, Template};

use crate::patch::index::{IMPORTS_MARKER, MOUNTS_MARKER};

/// `src/index.<ext>` for Express templates.
///
/// The route sections carry the marker comments that
/// [`inject_route`](crate::patch::index::inject_route) anchors on.
pub struct IndexEntry {
    pub language: Language,
    pub template: Template,
}

impl IndexEntry {
    pub fn new(language: Language, template: Template) -> Self {
        Self { language, template }
    }
}

impl GeneratedFile for IndexEntry {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(format!("src/index.{}", self.language.extension()))
    }

    fn render(&self) -> String {
        let typed = self.language.is_typed();
        let (express_import, handler_args) = if typed {
            (
                r#"import express, { Request, Response } from "express";"#,
                "_: Request, res: Response",
            )
        } else {
            (r#"import express from "express";"#, "_, res")
        };
        let static_assets = if self.template == Template::Web {
            "app.use(express.static(\"public\"));\n"
        } else {
            ""
        };

        format!(
            r#"{express_import}

import errorHandler from "./middlewares/error.middleware{suffix}";

// Import Routes
{IMPORTS_MARKER}

const app = express();
const PORT = process.env.PORT || 3000;

// Middleware
app.use(express.json());
app.use(express.urlencoded({{ extended: true }}));
{static_assets}
// Routes
app.get("/api", ({handler_args}) => {{
  res.json({{ message: "Welcome to my app" }});
}});
{MOUNTS_MARKER}

// Error Handler
app.use(errorHandler);

app.listen(PORT, () => {{
  console.log(`Server running on http://localhost:${{PORT}}`);
}});
"#,
            suffix = self.language.import_suffix(),
        )
    }
}
