use std::path::PathBuf;

use sprout_core::{GeneratedFile, Language};

use super::{Entity, source_file};

/// `src/models/<e>.model.<ext>`: Prisma data access for one entity.
pub struct Model<'a> {
    pub entity: &'a Entity,
    pub language: Language,
}

impl GeneratedFile for Model<'_> {
    fn relative_path(&self) -> PathBuf {
        source_file("models", &format!("{}.model", self.entity.name), self.language)
    }

    fn render(&self) -> String {
        let e = &self.entity.name;
        let cap = &self.entity.capitalized;
        let suffix = self.language.import_suffix();

        let (header, all, one, create, update, delete) = if self.language.is_typed() {
            (
                format!(
                    r#"import prisma from "../lib/prisma";
import type {{
  {cap},
  {cap}CreateInput,
  {cap}UpdateInput,
}} from "../types/{e}";
"#
                ),
                format!("(): Promise<{cap}[]>"),
                format!("(id: number): Promise<{cap} | null>"),
                format!("(data: {cap}CreateInput): Promise<{cap}>"),
                format!("(\n  id: number,\n  data: {cap}UpdateInput\n): Promise<{cap} | null>"),
                format!("(id: number): Promise<{cap} | null>"),
            )
        } else {
            (
                format!("import prisma from \"../lib/prisma{suffix}\";\n"),
                "()".to_string(),
                "(id)".to_string(),
                "(data)".to_string(),
                "(id, data)".to_string(),
                "(id)".to_string(),
            )
        };

        format!(
            r#"{header}
const {e}FindAll = async {all} => {{
  return prisma.{e}.findMany();
}};

const {e}FindOne = async {one} => {{
  return prisma.{e}.findUnique({{
    where: {{ id }},
  }});
}};

const {e}Create = async {create} => {{
  return prisma.{e}.create({{
    data,
  }});
}};

const {e}Update = async {update} => {{
  return prisma.{e}.update({{
    where: {{ id }},
    data,
  }});
}};

const {e}Delete = async {delete} => {{
  return prisma.{e}.delete({{
    where: {{ id }},
  }});
}};

export {{
  {e}FindAll,
  {e}FindOne,
  {e}Create,
  {e}Update,
  {e}Delete,
}};
"#
        )
    }
}
