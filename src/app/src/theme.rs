use serde::Deserialize;
use serde::Serialize;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn flip(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Capabilities the embedding UI lends to the store: a persisted
/// preference, the OS-level appearance signal, marking the document root,
/// and writing the preference back. Persisting is best-effort, the host
/// swallows its own failures.
pub trait ThemeHost {
    fn persisted(&self) -> Option<Theme>;
    fn system(&self) -> Option<Theme>;
    fn apply(&self, theme: Theme);
    fn persist(&self, theme: Theme);
}

/// Single owner of the session's theme. There is one writer (the toggle)
/// and any number of readers going through [`ThemeStore::theme`].
pub struct ThemeStore {
    theme: Theme,
    host: Box<dyn ThemeHost>,
}

impl ThemeStore {
    pub fn new(host: Box<dyn ThemeHost>) -> Self {
        let theme = host
            .persisted()
            .or_else(|| host.system())
            .unwrap_or(Theme::Light);
        host.apply(theme);

        ThemeStore { theme, host }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme. The visual application happens before anything
    /// else so there is no frame rendered with the stale theme; the
    /// preference write follows.
    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.flip();
        self.host.apply(next);
        self.host.persist(next);
        self.theme = next;

        next
    }
}
