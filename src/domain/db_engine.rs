use std::fmt;

/// Database engine chosen for a generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbEngine {
    /// No database, or a choice plinth does not recognise.
    None,
    Mongo,
    MySql,
    Postgres,
    SqlServer,
}

impl DbEngine {
    /// Engines offered by the full generator, in menu order.
    pub const ALL: [DbEngine; 5] =
        [DbEngine::Mongo, DbEngine::MySql, DbEngine::Postgres, DbEngine::SqlServer, DbEngine::None];

    /// Choice labels as presented to the user.
    pub fn choices() -> Vec<String> {
        Self::ALL.iter().map(|engine| engine.choice_label().to_string()).collect()
    }

    /// Map a prompt answer to an engine. Unknown labels become [`DbEngine::None`].
    pub fn from_choice(label: &str) -> DbEngine {
        match label.trim().to_lowercase().as_str() {
            "mongodb" | "mongo" => DbEngine::Mongo,
            "mysql" => DbEngine::MySql,
            "postgresql" | "postgres" => DbEngine::Postgres,
            "sqlserver" | "sql server" | "mssql" => DbEngine::SqlServer,
            _ => DbEngine::None,
        }
    }

    pub fn choice_label(&self) -> &'static str {
        match self {
            DbEngine::None => "None",
            DbEngine::Mongo => "MongoDB",
            DbEngine::MySql => "MySQL",
            DbEngine::Postgres => "PostgreSQL",
            DbEngine::SqlServer => "SQLServer",
        }
    }

    /// Short name used in template ids and generated file names.
    pub fn slug(&self) -> Option<&'static str> {
        match self {
            DbEngine::None => None,
            DbEngine::Mongo => Some("mongo"),
            DbEngine::MySql => Some("mysql"),
            DbEngine::Postgres => Some("postgres"),
            DbEngine::SqlServer => Some("sqlserver"),
        }
    }

    /// npm packages the engine needs.
    pub fn packages(&self) -> &'static [&'static str] {
        match self {
            DbEngine::None => &[],
            DbEngine::Mongo => &["mongoose"],
            DbEngine::MySql => &["mysql2", "sequelize"],
            DbEngine::Postgres => &["pg", "pg-hstore", "sequelize"],
            DbEngine::SqlServer => &["mssql", "tedious", "sequelize"],
        }
    }
}

impl fmt::Display for DbEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.choice_label())
    }
}
