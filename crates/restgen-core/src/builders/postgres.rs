//! PostgreSQL (Sequelize) context builder.

use super::{DatabaseContextBuilder, Dependency, EnvVar, ModelQueries};

#[derive(Debug, Clone)]
pub struct PostgresContextBuilder;

impl DatabaseContextBuilder for PostgresContextBuilder {
    fn dependencies(&self) -> Vec<Dependency> {
        vec![
            Dependency::new("pg", "^8.7.3"),
            Dependency::new("pg-hstore", "^2.3.4"),
            Dependency::new("sequelize", "^6.17.0"),
        ]
    }

    fn connection_var(&self, project_name: &str) -> EnvVar {
        EnvVar::new(
            "DATABASE_URL",
            format!("postgres://localhost:5432/{project_name}"),
        )
    }

    fn queries(&self) -> ModelQueries {
        ModelQueries {
            find_all: "findAll",
            find_by_id: "findByPk",
        }
    }
}
