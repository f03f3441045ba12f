//! Avatar builder shown on the create-account tab.

use api::models::{BACKGROUND_COLORS, SKIN_COLORS};
use api::AvatarConfig;
use dioxus::prelude::*;

use crate::cn;
use crate::icons::FaDice;
use crate::Icon;

/// Probability-driven avatar traits exposed as sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarTrait {
    Hair,
    Glasses,
    Earrings,
    Features,
}

impl AvatarTrait {
    pub const ALL: [AvatarTrait; 4] = [
        AvatarTrait::Hair,
        AvatarTrait::Glasses,
        AvatarTrait::Earrings,
        AvatarTrait::Features,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AvatarTrait::Hair => "Hair",
            AvatarTrait::Glasses => "Glasses",
            AvatarTrait::Earrings => "Earrings",
            AvatarTrait::Features => "Features",
        }
    }

    pub fn get(self, config: &AvatarConfig) -> u8 {
        match self {
            AvatarTrait::Hair => config.hair_probability,
            AvatarTrait::Glasses => config.glasses_probability,
            AvatarTrait::Earrings => config.earrings_probability,
            AvatarTrait::Features => config.features_probability,
        }
    }

    /// Set the trait's probability, capped at 100.
    pub fn set(self, config: &mut AvatarConfig, value: u8) {
        let value = value.min(100);
        match self {
            AvatarTrait::Hair => config.hair_probability = value,
            AvatarTrait::Glasses => config.glasses_probability = value,
            AvatarTrait::Earrings => config.earrings_probability = value,
            AvatarTrait::Features => config.features_probability = value,
        }
    }
}

/// Fresh random seed for the "reroll" button.
pub fn random_seed() -> String {
    #[cfg(target_arch = "wasm32")]
    let bits = (js_sys::Math::random() * f64::from(u32::MAX)) as u32;
    #[cfg(not(target_arch = "wasm32"))]
    let bits = rand::random::<u32>();
    format!("trainer-{bits:08x}")
}

fn emit(mut config: Signal<AvatarConfig>, on_change: EventHandler<AvatarConfig>, next: AvatarConfig) {
    config.set(next.clone());
    on_change.call(next);
}

/// Interactive avatar editor. Calls `on_change` with the complete config on
/// every edit.
#[component]
pub fn AvatarBuilder(
    #[props(default)] initial: AvatarConfig,
    on_change: EventHandler<AvatarConfig>,
) -> Element {
    let config = use_signal(move || initial);
    let current = config();

    rsx! {
        div {
            class: "flex flex-col md:flex-row gap-5 items-start w-full",

            div {
                class: "flex flex-col items-center gap-2",
                if let Some(src) = current.preview_url() {
                    img {
                        class: "h-32 w-32 rounded-md border-4 border-base-300 bg-base-200",
                        src: "{src}",
                        alt: "Avatar preview",
                    }
                }
                button {
                    class: "btn btn-sm gap-2",
                    r#type: "button",
                    onclick: move |_| {
                        let next = config().with_seed(random_seed());
                        emit(config, on_change, next);
                    },
                    Icon { icon: FaDice, width: 14, height: 14 }
                    "Reroll"
                }
            }

            div {
                class: "flex flex-col gap-3 w-full max-w-sm",

                for avatar_trait in AvatarTrait::ALL {
                    label {
                        key: "{avatar_trait.label()}",
                        class: "flex flex-col gap-1 text-sm",
                        span { "{avatar_trait.label()}: {avatar_trait.get(&current)}%" }
                        input {
                            class: "range range-primary range-xs",
                            r#type: "range",
                            min: "0",
                            max: "100",
                            value: "{avatar_trait.get(&current)}",
                            oninput: move |evt| {
                                let mut next = config();
                                avatar_trait.set(&mut next, evt.value().parse().unwrap_or(0));
                                emit(config, on_change, next);
                            },
                        }
                    }
                }

                label {
                    class: "flex items-center gap-2 text-sm cursor-pointer",
                    input {
                        class: "checkbox checkbox-sm",
                        r#type: "checkbox",
                        checked: current.flip,
                        onchange: move |evt| {
                            let next = AvatarConfig {
                                flip: evt.checked(),
                                ..config()
                            };
                            emit(config, on_change, next);
                        },
                    }
                    "Flip"
                }

                ColorRow {
                    label: "Skin",
                    colors: SKIN_COLORS.to_vec(),
                    selected: current.skin_color.clone(),
                    on_pick: move |color: String| {
                        let next = AvatarConfig {
                            skin_color: color,
                            ..config()
                        };
                        emit(config, on_change, next);
                    },
                }

                ColorRow {
                    label: "Background",
                    colors: BACKGROUND_COLORS.to_vec(),
                    selected: current.background_color.clone(),
                    on_pick: move |color: String| {
                        let next = AvatarConfig {
                            background_color: color,
                            ..config()
                        };
                        emit(config, on_change, next);
                    },
                }
            }
        }
    }
}

#[component]
fn ColorRow(
    label: String,
    colors: Vec<&'static str>,
    selected: String,
    on_pick: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "flex items-center gap-2 text-sm",
            span { class: "w-24", "{label}" }
            for color in colors {
                button {
                    key: "{color}",
                    r#type: "button",
                    title: "#{color}",
                    class: cn!(
                        "h-6 w-6 rounded-md border-2 border-base-300",
                        (selected == color).then_some("border-primary")
                    ),
                    style: "background-color: #{color};",
                    onclick: move |_| on_pick.call(color.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_set_caps_at_100() {
        let mut config = AvatarConfig::default();
        AvatarTrait::Glasses.set(&mut config, 180);
        assert_eq!(AvatarTrait::Glasses.get(&config), 100);
        AvatarTrait::Hair.set(&mut config, 0);
        assert_eq!(config.hair_probability, 0);
    }

    #[test]
    fn test_traits_cover_every_probability() {
        let mut config = AvatarConfig::default();
        for (i, avatar_trait) in AvatarTrait::ALL.iter().enumerate() {
            avatar_trait.set(&mut config, i as u8 + 1);
        }
        assert_eq!(config.hair_probability, 1);
        assert_eq!(config.glasses_probability, 2);
        assert_eq!(config.earrings_probability, 3);
        assert_eq!(config.features_probability, 4);
    }

    #[test]
    fn test_random_seed_shape() {
        let seed = random_seed();
        assert!(seed.starts_with("trainer-"));
        assert_eq!(seed.len(), "trainer-".len() + 8);
        assert_ne!(seed, random_seed());
    }
}
