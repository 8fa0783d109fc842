//! Packaging design configuration.
//!
//! The studio panel mutates one [`DesignConfig`] per session, one value per
//! field, last write wins. The selectable attributes are closed enums so the
//! views can match on them exhaustively.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxColor {
    Yellow,
    Gray,
}

impl BoxColor {
    pub const ALL: [BoxColor; 2] = [BoxColor::Yellow, BoxColor::Gray];
}

impl std::fmt::Display for BoxColor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Yellow => write!(f, "Yellow"),
            Self::Gray => write!(f, "Gray"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignStyle {
    Instagram,
    Minimalist,
    Retro,
    Festive,
}

impl DesignStyle {
    pub const ALL: [DesignStyle; 4] = [
        DesignStyle::Instagram,
        DesignStyle::Minimalist,
        DesignStyle::Retro,
        DesignStyle::Festive,
    ];
}

impl std::fmt::Display for DesignStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Instagram => write!(f, "Instagram"),
            Self::Minimalist => write!(f, "Minimalist"),
            Self::Retro => write!(f, "Retro"),
            Self::Festive => write!(f, "Festive"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowerPattern {
    Marble,
}

impl FlowerPattern {
    pub const ALL: [FlowerPattern; 1] = [FlowerPattern::Marble];
}

impl std::fmt::Display for FlowerPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Marble => write!(f, "Marble"),
        }
    }
}

/// The attributes driving the design generation service. No cross-field
/// invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignConfig {
    pub product_type: String,
    pub brand_name: String,
    pub box_color: BoxColor,
    pub style: DesignStyle,
    pub pattern: FlowerPattern,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            product_type: "Aromatherapy".to_string(),
            brand_name: "Moments".to_string(),
            box_color: BoxColor::Yellow,
            style: DesignStyle::Instagram,
            pattern: FlowerPattern::Marble,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = DesignConfig::default();
        assert_eq!(config.product_type, "Aromatherapy");
        assert_eq!(config.brand_name, "Moments");
        assert_eq!(config.box_color, BoxColor::Yellow);
        assert_eq!(config.style, DesignStyle::Instagram);
        assert_eq!(config.pattern, FlowerPattern::Marble);
    }

    #[test]
    fn selections_are_last_write_wins() {
        let mut config = DesignConfig::default();
        config.style = DesignStyle::Minimalist;
        config.style = DesignStyle::Festive;
        config.box_color = BoxColor::Gray;
        assert_eq!(config.style, DesignStyle::Festive);
        assert_eq!(config.box_color, BoxColor::Gray);
        // Untouched fields keep their defaults.
        assert_eq!(config.pattern, FlowerPattern::Marble);
    }
}
