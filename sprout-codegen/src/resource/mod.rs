//! CRUD resource generators.

mod controller;
mod entity;
mod http;
mod model;
mod routes;
mod service;
mod types;
mod validation;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use sprout_core::{GeneratedFile, Language};

pub use controller::Controller;
pub use entity::Entity;
pub use http::HttpRequests;
pub use model::Model;
pub use routes::Routes;
pub use service::Service;
pub use types::Types;
pub use validation::Validation;

const SRC_DIR: &str = "src";

fn source_file(dir: &str, stem: &str, language: Language) -> PathBuf {
    PathBuf::from(SRC_DIR)
        .join(dir)
        .join(format!("{stem}.{}", language.extension()))
}

/// Which part of a resource to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Schema model, data access and types.
    Model,
    /// Service and controller.
    Controller,
    /// Validation, router and the entry point registration.
    Routes,
    /// Everything above plus the `.http` request file.
    #[default]
    Resources,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Model,
        ResourceKind::Controller,
        ResourceKind::Routes,
        ResourceKind::Resources,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Model => "model",
            ResourceKind::Controller => "controller",
            ResourceKind::Routes => "routes",
            ResourceKind::Resources => "resources",
        }
    }

    pub fn includes_model(&self) -> bool {
        matches!(self, ResourceKind::Model | ResourceKind::Resources)
    }

    pub fn includes_controller(&self) -> bool {
        matches!(self, ResourceKind::Controller | ResourceKind::Resources)
    }

    pub fn includes_routes(&self) -> bool {
        matches!(self, ResourceKind::Routes | ResourceKind::Resources)
    }

    pub fn includes_requests(&self) -> bool {
        matches!(self, ResourceKind::Resources)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "model" => Ok(ResourceKind::Model),
            "controller" => Ok(ResourceKind::Controller),
            "routes" | "route" => Ok(ResourceKind::Routes),
            "resources" | "resource" | "all" => Ok(ResourceKind::Resources),
            _ => Err(format!(
                "invalid resource type '{}', valid types: routes, controller, model, resources",
                s
            )),
        }
    }
}

/// Files generated for `entity`, in write order.
pub fn resource_files<'a>(
    entity: &'a Entity,
    language: Language,
    kind: ResourceKind,
) -> Vec<Box<dyn GeneratedFile + 'a>> {
    let mut files: Vec<Box<dyn GeneratedFile + 'a>> = Vec::new();

    if kind.includes_model() {
        files.push(Box::new(Model { entity, language }));
        if language.is_typed() {
            files.push(Box::new(Types { entity }));
        }
    }
    if kind.includes_controller() {
        files.push(Box::new(Service { entity, language }));
        files.push(Box::new(Controller { entity, language }));
    }
    if kind.includes_routes() {
        files.push(Box::new(Validation { entity, language }));
        files.push(Box::new(Routes { entity, language }));
    }
    if kind.includes_requests() {
        files.push(Box::new(HttpRequests { entity }));
    }

    files
}
