use std::path::PathBuf;

use sprout_core::GeneratedFile;

use super::Entity;

/// `src/types/<e>.d.ts`, generated for typed projects only.
pub struct Types<'a> {
    pub entity: &'a Entity,
}

impl GeneratedFile for Types<'_> {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(format!("src/types/{}.d.ts", self.entity.name))
    }

    fn render(&self) -> String {
        let cap = &self.entity.capitalized;
        format!(
            r#"export interface {cap} {{
  id: number;
  createdAt: Date;
  updatedAt: Date;
}}

export type {cap}CreateInput = Omit<{cap}, "id" | "createdAt" | "updatedAt">;

export type {cap}UpdateInput = Partial<{cap}CreateInput>;
"#
        )
    }
}
