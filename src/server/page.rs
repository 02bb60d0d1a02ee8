use crate::{Result, expert::Mode};
use minijinja::{Environment, context};
use serde::Serialize;

const TEMPLATE_NAME: &str = "index.html";
const TEMPLATE: &str = include_str!("templates/index.html");

pub const PAGE_TITLE: &str = "LLMアプリ";
pub const PAGE_ICON: &str = "🤖";
pub const HEADING: &str = "エキスパート LLMアプリ";
pub const PLACEHOLDER: &str = "例：Pythonで辞書の使い方を教えて / 新機能の企画を整理したい";

#[derive(Debug, Serialize)]
struct ModeOption {
    label: &'static str,
    selected: bool,
}

/// Renders the single form page. The `.html` template name turns on
/// minijinja's HTML auto-escaping, so answers and input are shown verbatim.
pub struct PageRenderer {
    env: Environment<'static>,
    footer: String,
}

impl PageRenderer {
    pub fn new(api_key_env: &str) -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, TEMPLATE)?;

        let footer = format!(
            "※ローカル実行：.env に {0} を設定してください。 ※デプロイ時：ホスティング先の Secrets に {0} を設定してください。",
            api_key_env
        );

        Ok(Self { env, footer })
    }

    /// `answer` is `None` until the first submission.
    pub fn render(&self, selected: Mode, input: &str, answer: Option<&str>) -> Result<String> {
        // An unknown posted label falls back to the default radio choice.
        let selected = match selected {
            Mode::Unrecognized => Mode::default(),
            mode => mode,
        };

        let modes: Vec<ModeOption> = Mode::OPTIONS
            .iter()
            .filter_map(|mode| {
                mode.label().map(|label| ModeOption {
                    label,
                    selected: *mode == selected,
                })
            })
            .collect();

        let html = self.env.get_template(TEMPLATE_NAME)?.render(context! {
            page_title => PAGE_TITLE,
            page_icon => PAGE_ICON,
            heading => HEADING,
            placeholder => PLACEHOLDER,
            modes => modes,
            input => input,
            answer => answer,
            footer => &self.footer,
        })?;

        Ok(html)
    }
}
