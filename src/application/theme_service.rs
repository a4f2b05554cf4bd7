// Theme service - Load and save the UI theme preference
use crate::application::preference_store::PreferenceStore;
use crate::domain::theme::Theme;
use std::sync::Arc;

pub const DEFAULT_STORAGE_KEY: &str = "app-theme";

#[derive(Clone)]
pub struct ThemeService {
    store: Arc<dyn PreferenceStore>,
    storage_key: String,
    default_theme: Theme,
}

impl ThemeService {
    pub fn new(store: Arc<dyn PreferenceStore>, storage_key: String, default_theme: Theme) -> Self {
        Self {
            store,
            storage_key,
            default_theme,
        }
    }

    /// Stored theme, or the default when nothing usable is stored.
    pub async fn current(&self) -> anyhow::Result<Theme> {
        let stored = self.store.get(&self.storage_key).await?;

        let theme = match stored {
            Some(value) => match value.parse::<Theme>() {
                Ok(theme) => theme,
                Err(e) => {
                    tracing::warn!("Ignoring stored theme under {}: {}", self.storage_key, e);
                    self.default_theme
                }
            },
            None => self.default_theme,
        };

        Ok(theme)
    }

    pub async fn set(&self, theme: Theme) -> anyhow::Result<()> {
        self.store.set(&self.storage_key, theme.as_str()).await?;
        tracing::info!("Theme preference set to {}", theme);
        Ok(())
    }
}
