pub use crate::utils::store;
use async_trait::async_trait;
use std::env;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub store: store::Store,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct StoreConfig {
    pub seed_path: Option<String>,
}

#[derive(Clone)]
pub struct Config {
    pub app: AppConfig,
    pub store: StoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u32>()
            .expect("Invalid PORT number");
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let seed_path = env::var("SEED_DATA_PATH").ok();

        Self {
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
            },
            store: StoreConfig { seed_path },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, store::Error>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, store::Error> {
        let store = match self.store.seed_path {
            Some(path) => store::Store::load(&path).await?,
            None => store::Store::default(),
        };

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
            },
            store,
        })
    }
}

#[cfg(test)]
impl Context {
    pub fn for_tests() -> Self {
        Self {
            app: AppContext {
                host: "127.0.0.1".to_string(),
                environment: AppEnvironment::Development,
                port: 8000,
                url: "http://127.0.0.1:8000".to_string(),
            },
            store: store::Store::default(),
        }
    }
}
