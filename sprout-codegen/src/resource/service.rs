use std::path::PathBuf;

use sprout_core::{GeneratedFile, Language};

use super::{Entity, source_file};

/// `src/services/<e>.service.<ext>`
pub struct Service<'a> {
    pub entity: &'a Entity,
    pub language: Language,
}

impl GeneratedFile for Service<'_> {
    fn relative_path(&self) -> PathBuf {
        source_file("services", &format!("{}.service", self.entity.name), self.language)
    }

    fn render(&self) -> String {
        let e = &self.entity.name;
        let cap = &self.entity.capitalized;
        let suffix = self.language.import_suffix();
        let typed = self.language.is_typed();

        let types_import = if typed {
            format!(
                r#"import type {{
  {cap},
  {cap}CreateInput,
  {cap}UpdateInput,
}} from "../types/{e}";
"#
            )
        } else {
            String::new()
        };
        let sig = |typed_sig: String, plain: &str| {
            if typed { typed_sig } else { plain.to_string() }
        };
        let all = sig(format!("(): Promise<{cap}[]>"), "()");
        let one = sig(format!("(id: number): Promise<{cap} | null>"), "(id)");
        let create = sig(format!("(\n  data: {cap}CreateInput\n): Promise<{cap}>"), "(data)");
        let update = sig(
            format!("(\n  id: number,\n  data: {cap}UpdateInput\n): Promise<{cap} | null>"),
            "(id, data)",
        );
        let delete = sig(format!("(id: number): Promise<{cap} | null>"), "(id)");

        format!(
            r#"import {{
  {e}FindAll,
  {e}FindOne,
  {e}Create,
  {e}Update,
  {e}Delete,
}} from "../models/{e}.model{suffix}";
{types_import}
export const getAll{cap}s = async {all} => {{
  return {e}FindAll();
}};

export const get{cap} = async {one} => {{
  return {e}FindOne(id);
}};

export const create{cap} = async {create} => {{
  return {e}Create(data);
}};

export const update{cap} = async {update} => {{
  return {e}Update(id, data);
}};

export const delete{cap} = async {delete} => {{
  return {e}Delete(id);
}};
"#
        )
    }
}
