use std::path::PathBuf;

use sprout_core::{GeneratedFile, Language};

use super::{Entity, source_file};

/// `src/routes/<e>.routes.<ext>`
pub struct Routes<'a> {
    pub entity: &'a Entity,
    pub language: Language,
}

impl GeneratedFile for Routes<'_> {
    fn relative_path(&self) -> PathBuf {
        source_file("routes", &format!("{}.routes", self.entity.name), self.language)
    }

    fn render(&self) -> String {
        let e = &self.entity.name;
        let cap = &self.entity.capitalized;
        let suffix = self.language.import_suffix();

        format!(
            r#"import {{ Router }} from "express";
import {{
  all,
  findOne,
  create,
  update,
  remove,
}} from "../controllers/{e}.controller{suffix}";
import {{
  validate{cap}Create,
  validate{cap}Update,
  validate{cap}Id,
}} from "../validations/{e}.validation{suffix}";

const router = Router();

router.route("/")
  .get(all)
  .post(validate{cap}Create, create);

router.route("/:id")
  .get(validate{cap}Id, findOne)
  .patch(validate{cap}Id, validate{cap}Update, update)
  .delete(validate{cap}Id, remove);

export default router;
"#
        )
    }
}
