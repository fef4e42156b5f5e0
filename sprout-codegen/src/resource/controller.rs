use std::path::PathBuf;

use sprout_core::{GeneratedFile, Language};

use super::{Entity, source_file};

/// `src/controllers/<e>.controller.<ext>`: request handlers answering 404
/// for missing rows.
pub struct Controller<'a> {
    pub entity: &'a Entity,
    pub language: Language,
}

impl GeneratedFile for Controller<'_> {
    fn relative_path(&self) -> PathBuf {
        source_file(
            "controllers",
            &format!("{}.controller", self.entity.name),
            self.language,
        )
    }

    fn render(&self) -> String {
        let e = &self.entity.name;
        let cap = &self.entity.capitalized;
        let table = &self.entity.table;
        let suffix = self.language.import_suffix();
        let (express_import, list_args, args) = if self.language.is_typed() {
            (
                "import { Request, Response } from \"express\";\n",
                "_: Request, res: Response",
                "req: Request, res: Response",
            )
        } else {
            ("", "_, res", "req, res")
        };
        let not_found = format!(
            r#"  if (!{e}) {{
    res.status(404);
    throw new Error("{cap} not found");
  }}
"#
        );

        format!(
            r#"{express_import}import asyncHandler from "express-async-handler";
import {{
  getAll{cap}s,
  get{cap},
  create{cap},
  update{cap},
  delete{cap},
}} from "../services/{e}.service{suffix}";

const all = asyncHandler(async ({list_args}) => {{
  const {table} = await getAll{cap}s();
  res.json({table});
}});

const findOne = asyncHandler(async ({args}) => {{
  const {{ id }} = req.params;
  const {e} = await get{cap}(Number(id));

{not_found}
  res.json({e});
}});

const create = asyncHandler(async ({args}) => {{
  const {e} = await create{cap}(req.body);
  res.status(201).json({e});
}});

const update = asyncHandler(async ({args}) => {{
  const {{ id }} = req.params;
  const {e} = await get{cap}(Number(id));

{not_found}
  const updated{cap} = await update{cap}({e}.id, req.body);
  res.json(updated{cap});
}});

const remove = asyncHandler(async ({args}) => {{
  const {{ id }} = req.params;
  const {e} = await get{cap}(Number(id));

{not_found}
  await delete{cap}({e}.id);
  res.status(204).send();
}});

export {{ all, findOne, create, update, remove }};
"#
        )
    }
}
