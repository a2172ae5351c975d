//! Fade-in of content cards as they scroll into view.

use crate::api::config::PageConfig;

/// Inline style values applied to a card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    pub opacity: String,
    pub transform: String,
    pub transition: Option<String>,
}

/// Style a card starts with: invisible and shifted down.
pub fn hidden_style(config: &PageConfig) -> CardStyle {
    CardStyle {
        opacity: "0".to_string(),
        transform: format!("translateY({}px)", config.card_offset_px),
        transition: Some(format!(
            "opacity {s}s ease, transform {s}s ease",
            s = config.card_transition_s
        )),
    }
}

/// Style a card ends with once revealed. The transition set while hidden stays.
pub fn revealed_style() -> CardStyle {
    CardStyle {
        opacity: "1".to_string(),
        transform: "translateY(0)".to_string(),
        transition: None,
    }
}

/// Whether an intersection report should reveal the card. The observer's
/// threshold decides when reports arrive; the reported ratio is not checked
/// again, since a crossing entry can land just under it and a card taller
/// than the viewport may never reach it.
pub fn should_reveal(is_intersecting: bool) -> bool {
    is_intersecting
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_style_uses_config() {
        let style = hidden_style(&PageConfig::default());
        assert_eq!(style.opacity, "0");
        assert_eq!(style.transform, "translateY(30px)");
        assert_eq!(
            style.transition.as_deref(),
            Some("opacity 0.6s ease, transform 0.6s ease")
        );
    }

    #[test]
    fn reveal_follows_intersection_only() {
        assert!(should_reveal(true));
        assert!(!should_reveal(false));
    }

    #[test]
    fn revealed_resets_transform() {
        let style = revealed_style();
        assert_eq!(style.opacity, "1");
        assert_eq!(style.transform, "translateY(0)");
    }
}
