#[derive(Clone, Debug)]
pub struct TaskboardConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub port: u16,
    pub cors_origin: String,
}

impl TaskboardConfig {
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://taskboard.db".to_string());

        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(15);

        let port = std::env::var("PORT")
            .ok()
            .and_then(|val| val.parse::<u16>().ok())
            .unwrap_or(3000);

        let cors_origin = std::env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".to_string());

        Self {
            database_url,
            max_connections,
            port,
            cors_origin,
        }
    }
}
