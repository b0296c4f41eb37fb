//! Localized UI strings and locale resolution.

/// Supported locales. `EnUs` is the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    EnUs,
    EsEs,
}

impl Default for Locale {
    fn default() -> Self {
        Self::EnUs
    }
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::EnUs, Locale::EsEs];

    /// BCP 47 tag, e.g. `en-US`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EsEs => "es-ES",
        }
    }

    /// Find a locale for a tag: exact match first, then the first locale
    /// sharing the base language.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = normalize_tag(tag);
        if tag.is_empty() {
            return None;
        }

        if let Some(exact) = Self::ALL
            .into_iter()
            .find(|locale| locale.as_str().eq_ignore_ascii_case(&tag))
        {
            return Some(exact);
        }

        let language = tag.split('-').next().unwrap_or_default();
        Self::ALL.into_iter().find(|locale| {
            locale
                .as_str()
                .split('-')
                .next()
                .is_some_and(|base| base.eq_ignore_ascii_case(language))
        })
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::EnUs => EN_US,
            Self::EsEs => ES_ES,
        }
    }
}

/// Pick the locale to play in.
///
/// An explicitly configured tag wins when it is recognized; otherwise the
/// environment's locales are tried in order; otherwise the baseline.
pub fn resolve_locale(configured: Option<&str>, environment: &[String]) -> Locale {
    configured
        .and_then(Locale::from_tag)
        .or_else(|| environment.iter().find_map(|tag| Locale::from_tag(tag)))
        .unwrap_or_default()
}

/// Turn POSIX-style values such as `es_ES.UTF-8` into `es-ES`.
fn normalize_tag(tag: &str) -> String {
    let tag = tag.trim();
    let tag = tag.split(['.', '@']).next().unwrap_or_default();
    tag.replace('_', "-")
}

/// Keys of the UI string table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    GameTitle,
    GameSubtitle,
    PlayButton,
    CorrectLabel,
    QuestionsLabel,
    AccuracyLabel,
    ComboLabel,
    ResetButton,
    LoadingMessage,
    QuestionPrompt,
    HintPrefix,
    AnswerPlaceholder,
    SubmitButton,
    HintButton,
    YourAnswerLabel,
    MovieLabel,
    NextQuestionButton,
    PerfectFeedback,
    CorrectFeedback,
    TryAgainFeedback,
    PointsSuffix,
    ClaudePrompt,
}

impl TextKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GameTitle => "gameTitle",
            Self::GameSubtitle => "gameSubtitle",
            Self::PlayButton => "playButton",
            Self::CorrectLabel => "correctLabel",
            Self::QuestionsLabel => "questionsLabel",
            Self::AccuracyLabel => "accuracyLabel",
            Self::ComboLabel => "comboLabel",
            Self::ResetButton => "resetButton",
            Self::LoadingMessage => "loadingMessage",
            Self::QuestionPrompt => "questionPrompt",
            Self::HintPrefix => "hintPrefix",
            Self::AnswerPlaceholder => "answerPlaceholder",
            Self::SubmitButton => "submitButton",
            Self::HintButton => "hintButton",
            Self::YourAnswerLabel => "yourAnswerLabel",
            Self::MovieLabel => "movieLabel",
            Self::NextQuestionButton => "nextQuestionButton",
            Self::PerfectFeedback => "perfectFeedback",
            Self::CorrectFeedback => "correctFeedback",
            Self::TryAgainFeedback => "tryAgainFeedback",
            Self::PointsSuffix => "pointsSuffix",
            Self::ClaudePrompt => "claudePrompt",
        }
    }
}

/// Look up a UI string.
pub fn translate(locale: Locale, key: TextKey) -> &'static str {
    lookup(locale, key.as_str())
}

/// Look up a UI string by raw key, falling back to the baseline locale and
/// then to the key itself.
pub fn lookup<'a>(locale: Locale, key: &'a str) -> &'a str {
    let found: Option<&'a str> = find(locale.table(), key).or_else(|| find(EN_US, key));
    found.unwrap_or(key)
}

fn find(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, text)| *text)
}

const EN_US: &[(&str, &str)] = &[
    ("gameTitle", "Movie Quote Charades"),
    ("gameSubtitle", "Decode emoji clues to reveal iconic movie quotes"),
    ("playButton", "Play"),
    ("correctLabel", "Correct"),
    ("questionsLabel", "Questions"),
    ("accuracyLabel", "Accuracy"),
    ("comboLabel", "Combo"),
    ("resetButton", "Reset"),
    ("loadingMessage", "Loading next quote..."),
    ("questionPrompt", "What famous movie quote do these emojis represent?"),
    ("hintPrefix", "💡"),
    ("answerPlaceholder", "Enter the movie quote..."),
    ("submitButton", "Submit"),
    ("hintButton", "Hint"),
    ("yourAnswerLabel", "Your answer:"),
    ("movieLabel", "Movie:"),
    ("nextQuestionButton", "Next quote"),
    ("perfectFeedback", "Perfect!"),
    ("correctFeedback", "Correct!"),
    ("tryAgainFeedback", "Try again next time!"),
    ("pointsSuffix", "points"),
    ("claudePrompt", "Please respond in"),
];

const ES_ES: &[(&str, &str)] = &[
    ("gameTitle", "Charadas de Citas de Películas"),
    (
        "gameSubtitle",
        "Decodifica pistas de emojis para revelar citas icónicas de películas",
    ),
    ("playButton", "Jugar"),
    ("correctLabel", "Correctas"),
    ("questionsLabel", "Preguntas"),
    ("accuracyLabel", "Precisión"),
    ("comboLabel", "Combo"),
    ("resetButton", "Reiniciar"),
    ("loadingMessage", "Cargando siguiente cita..."),
    (
        "questionPrompt",
        "¿Qué cita famosa de película representan estos emojis?",
    ),
    ("hintPrefix", "💡"),
    ("answerPlaceholder", "Ingresa la cita de la película..."),
    ("submitButton", "Enviar"),
    ("hintButton", "Pista"),
    ("yourAnswerLabel", "Tu respuesta:"),
    ("movieLabel", "Película:"),
    ("nextQuestionButton", "Siguiente cita"),
    ("perfectFeedback", "¡Perfecto!"),
    ("correctFeedback", "¡Correcto!"),
    ("tryAgainFeedback", "¡Inténtalo de nuevo la próxima vez!"),
    ("pointsSuffix", "puntos"),
    ("claudePrompt", "Por favor responde en idioma"),
];
