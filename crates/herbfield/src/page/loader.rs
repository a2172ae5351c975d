use crate::api::config::PageConfig;

/// Where the page loader is in its exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderPhase {
    /// Fully shown.
    Visible,
    /// Opacity set to 0, still in the layout while the CSS fade runs.
    Fading,
    /// `display: none`.
    Hidden,
}

/// Timeline of the loader fade-out, measured from page setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderFade {
    pub delay_ms: u32,
    pub fade_ms: u32,
}

impl LoaderFade {
    pub fn new(delay_ms: u32, fade_ms: u32) -> Self {
        Self { delay_ms, fade_ms }
    }

    pub fn from_config(config: &PageConfig) -> Self {
        Self::new(config.loader_delay_ms, config.loader_fade_ms)
    }

    /// Time at which the loader leaves the layout.
    pub fn hidden_at_ms(&self) -> u32 {
        self.delay_ms.saturating_add(self.fade_ms)
    }

    pub fn at(&self, elapsed_ms: u32) -> LoaderPhase {
        if elapsed_ms < self.delay_ms {
            LoaderPhase::Visible
        } else if elapsed_ms < self.hidden_at_ms() {
            LoaderPhase::Fading
        } else {
            LoaderPhase::Hidden
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeline() {
        let fade = LoaderFade::from_config(&PageConfig::default());
        assert_eq!(fade.at(0), LoaderPhase::Visible);
        assert_eq!(fade.at(1499), LoaderPhase::Visible);
        assert_eq!(fade.at(1500), LoaderPhase::Fading);
        assert_eq!(fade.at(1999), LoaderPhase::Fading);
        assert_eq!(fade.at(2000), LoaderPhase::Hidden);
        assert_eq!(fade.hidden_at_ms(), 2000);
    }

    #[test]
    fn zero_fade_skips_fading() {
        let fade = LoaderFade::new(100, 0);
        assert_eq!(fade.at(100), LoaderPhase::Hidden);
    }
}
