//! Expert modes offered by the form and the instruction text behind each.

const PYTHON_COACH_LABEL: &str = "Python学習コーチ";
const PRODUCT_MENTOR_LABEL: &str = "プロダクト企画メンター";

const PYTHON_COACH_PROMPT: &str = concat!(
    "あなたは熟練のPython学習コーチです。",
    "初心者にも分かるように、手順と理由を丁寧に説明し、必要なら短い例を示してください。",
    "不明点がある場合は、最初に確認質問を1〜2個だけしてから提案してください。",
);

const PRODUCT_MENTOR_PROMPT: &str = concat!(
    "あなたは経験豊富なプロダクト企画メンターです。",
    "ユーザーの課題を整理し、仮説→検証→次アクションの順で具体的に提案してください。",
    "できれば箇条書きで、実行しやすい粒度にしてください。",
);

pub const FALLBACK_PROMPT: &str = "あなたは有能なアシスタントです。";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    PythonCoach,
    ProductMentor,
    /// Any label outside the two offered options, including none at all.
    Unrecognized,
}

impl Mode {
    /// Selectable modes in display order. The first one is preselected.
    pub const OPTIONS: [Mode; 2] = [Mode::PythonCoach, Mode::ProductMentor];

    /// Exact match on the display label; no trimming or case folding.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some(PYTHON_COACH_LABEL) => Self::PythonCoach,
            Some(PRODUCT_MENTOR_LABEL) => Self::ProductMentor,
            _ => Self::Unrecognized,
        }
    }

    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::PythonCoach => Some(PYTHON_COACH_LABEL),
            Self::ProductMentor => Some(PRODUCT_MENTOR_LABEL),
            Self::Unrecognized => None,
        }
    }

    pub fn system_prompt(self) -> &'static str {
        match self {
            Self::PythonCoach => PYTHON_COACH_PROMPT,
            Self::ProductMentor => PRODUCT_MENTOR_PROMPT,
            Self::Unrecognized => FALLBACK_PROMPT,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::OPTIONS[0]
    }
}
