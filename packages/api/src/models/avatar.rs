//! Trainer avatar configuration.
//!
//! Avatars are drawn by the DiceBear "adventurer" style. The backend stores
//! the configuration as-is and clients render it through the DiceBear HTTP API,
//! so field names follow DiceBear's camelCase option names.

use reqwest::Url;
use serde::{Deserialize, Serialize};

const DICEBEAR_URL: &str = "https://api.dicebear.com/7.x/adventurer/svg";

/// Skin tones offered by the avatar builder (hex, no leading `#`).
pub const SKIN_COLORS: [&str; 4] = ["f2d3b1", "ecad80", "9e5622", "763900"];

/// Background colours offered by the avatar builder (hex, no leading `#`).
pub const BACKGROUND_COLORS: [&str; 5] = ["b6e3f4", "c0aede", "d1d4f9", "ffd5dc", "ffdfbf"];

/// Visual traits of a trainer avatar. Probabilities are percentages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvatarConfig {
    pub seed: String,
    pub hair_probability: u8,
    pub glasses_probability: u8,
    pub earrings_probability: u8,
    pub features_probability: u8,
    pub flip: bool,
    pub skin_color: String,
    pub background_color: String,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            seed: "pokebattle".to_string(),
            hair_probability: 100,
            glasses_probability: 20,
            earrings_probability: 30,
            features_probability: 10,
            flip: false,
            skin_color: SKIN_COLORS[0].to_string(),
            background_color: BACKGROUND_COLORS[0].to_string(),
        }
    }
}

impl AvatarConfig {
    /// Builder method to replace the seed.
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = seed.into();
        self
    }

    /// Copy with every probability capped at 100.
    pub fn normalized(&self) -> Self {
        Self {
            hair_probability: self.hair_probability.min(100),
            glasses_probability: self.glasses_probability.min(100),
            earrings_probability: self.earrings_probability.min(100),
            features_probability: self.features_probability.min(100),
            ..self.clone()
        }
    }

    /// DiceBear image URL rendering this avatar.
    pub fn preview_url(&self) -> Option<String> {
        let config = self.normalized();
        let params = [
            ("seed", config.seed),
            ("flip", config.flip.to_string()),
            ("hairProbability", config.hair_probability.to_string()),
            ("glassesProbability", config.glasses_probability.to_string()),
            ("earringsProbability", config.earrings_probability.to_string()),
            ("featuresProbability", config.features_probability.to_string()),
            ("skinColor", config.skin_color),
            ("backgroundColor", config.background_color),
        ];
        Url::parse_with_params(DICEBEAR_URL, &params)
            .map(String::from)
            .ok()
    }
}
