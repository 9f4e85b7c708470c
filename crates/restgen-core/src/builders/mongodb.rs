//! MongoDB (Mongoose) context builder.

use super::{DatabaseContextBuilder, Dependency, EnvVar, ModelQueries};

#[derive(Debug, Clone)]
pub struct MongoContextBuilder;

impl DatabaseContextBuilder for MongoContextBuilder {
    fn dependencies(&self) -> Vec<Dependency> {
        vec![Dependency::new("mongoose", "^6.2.4")]
    }

    fn connection_var(&self, project_name: &str) -> EnvVar {
        EnvVar::new("MONGODB_URI", format!("mongodb://localhost/{project_name}"))
    }

    fn queries(&self) -> ModelQueries {
        ModelQueries {
            find_all: "find",
            find_by_id: "findById",
        }
    }
}
