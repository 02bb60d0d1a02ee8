use crate::{
    config::LlmConfig,
    expert::Mode,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient, OpenAiClient},
};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

pub const EMPTY_INPUT_MESSAGE: &str = "入力が空です。テキストを入力して送信してください。";

pub const MISSING_API_KEY_MESSAGE: &str = concat!(
    "OpenAI APIキーが設定されていません。\n",
    "ローカル実行の場合は .env に `OPENAI_API_KEY=...` を設定してください。\n",
    "デプロイ環境の場合はホスティング先の Secrets に `OPENAI_API_KEY` を設定してください。",
);

/// Followed by the underlying error text.
pub const SERVICE_FAILURE_PREFIX: &str =
    "LLMへの問い合わせに失敗しました。時間をおいて再度お試しください。\n詳細: ";

/// Turns one form submission into answer text.
///
/// Every outcome is a user-facing string: the service reply, or one of the
/// diagnostics above. The completion client exists only when a credential
/// was configured, so a missing credential never reaches the network.
pub struct Resolver {
    client: Option<Arc<dyn LlmClient>>,
    model: String,
    temperature: f32,
}

impl Resolver {
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            client: Some(client),
            model: model.into(),
            temperature,
        }
    }

    pub fn without_credential(model: impl Into<String>, temperature: f32) -> Self {
        Self {
            client: None,
            model: model.into(),
            temperature,
        }
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        match &config.api_key {
            Some(api_key) => Self::new(
                Arc::new(OpenAiClient::new(&config.base_url, api_key.clone())),
                config.model.clone(),
                config.temperature,
            ),
            None => Self::without_credential(config.model.clone(), config.temperature),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.client.is_some()
    }

    pub async fn resolve(&self, user_text: &str, mode_label: Option<&str>) -> String {
        let request_id = Uuid::new_v4();
        let user_text = user_text.trim();
        let mode = Mode::from_label(mode_label);

        if user_text.is_empty() {
            info!(%request_id, "Rejected empty input");
            return EMPTY_INPUT_MESSAGE.to_string();
        }

        let Some(client) = &self.client else {
            warn!(%request_id, "Rejected submission: no API key configured");
            return MISSING_API_KEY_MESSAGE.to_string();
        };

        info!(
            %request_id,
            ?mode,
            input_chars = user_text.chars().count(),
            "Forwarding submission to {}",
            self.model
        );

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: build_messages(mode, user_text),
            temperature: self.temperature,
        };

        match client.create_chat_completion(request).await {
            Ok(response) => {
                if let Some(usage) = &response.usage {
                    info!(
                        %request_id,
                        prompt_tokens = usage.prompt_tokens,
                        completion_tokens = usage.completion_tokens,
                        "Completion received"
                    );
                }
                response.first_content().unwrap_or_default().to_string()
            }
            Err(e) => {
                error!(%request_id, "Completion request failed: {}", e);
                format!("{}{}", SERVICE_FAILURE_PREFIX, e)
            }
        }
    }
}

/// Instruction first, then the user's text verbatim.
pub fn build_messages(mode: Mode, user_text: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(mode.system_prompt()),
        ChatMessage::user(user_text),
    ]
}
