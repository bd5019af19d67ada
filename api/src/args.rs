use backoffice_core::domain::common::{BackofficeConfig, DatabaseConfig};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "backoffice-api", version, about = "Backoffice table query API")]
pub struct Args {
    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub server: ServerArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub database_host: String,

    #[arg(long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub database_port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub database_user: String,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub database_password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "backoffice")]
    pub database_name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix of every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

impl From<Args> for BackofficeConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.database_host,
                port: args.db.database_port,
                username: args.db.database_user,
                password: args.db.database_password,
                name: args.db.database_name,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_ids_are_unique() {
        use clap::CommandFactory;

        Args::command().debug_assert();
    }

    #[test]
    fn test_server_and_database_ports_are_independent() {
        let args = Args::try_parse_from([
            "backoffice-api",
            "--server-host",
            "127.0.0.1",
            "--server-port",
            "8080",
            "--database-host",
            "db.internal",
            "--database-port",
            "6543",
        ])
        .unwrap();

        assert_eq!(args.server.host, "127.0.0.1");
        assert_eq!(args.server.port, 8080);
        assert_eq!(args.db.database_host, "db.internal");
        assert_eq!(args.db.database_port, 6543);
    }

    #[test]
    fn test_parse_flags_into_config() {
        let args = Args::try_parse_from([
            "backoffice-api",
            "--database-host",
            "db.internal",
            "--database-name",
            "shop",
            "--server-root-path",
            "/api",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ])
        .unwrap();

        assert_eq!(args.server.root_path, "/api");
        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );

        let config = BackofficeConfig::from(args);
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.name, "shop");
        assert_eq!(config.database.port, 5432);
    }
}
