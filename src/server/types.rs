use serde::Deserialize;

/// Fields posted by the HTML form.
#[derive(Debug, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub input: String,
}
