use super::mocks::MockLlmClient;
use axum::Router;
use expert_relay::{
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
    resolver::Resolver,
    server::{self, AppState, PageRenderer},
};
use std::sync::Arc;

pub const TEST_MODEL: &str = "gpt-4o-mini";
pub const TEST_TEMPERATURE: f32 = 0.7;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8501,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            base_url: String::new(),
            model: TEST_MODEL.to_string(),
            temperature: TEST_TEMPERATURE,
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: Some("test-api-key".to_string()),
        },
    }
}

pub fn create_test_resolver(client: &MockLlmClient) -> Resolver {
    Resolver::new(Arc::new(client.clone()), TEST_MODEL, TEST_TEMPERATURE)
}

pub fn create_test_app(resolver: Resolver) -> Router {
    let page = PageRenderer::new("OPENAI_API_KEY").expect("template should parse");
    server::router(AppState::new(resolver, page))
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "0.0.0.0"
  port: 9000
  logs:
    level: "debug"

llm:
  base_url: "http://localhost:4000/v1"
  model: "gpt-4o"
  temperature: 0.2
  api_key_env: "RELAY_API_KEY"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: "not-a-number"
"#;
