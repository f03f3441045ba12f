//! Tailwind class list merging.
//!
//! Components take a base class list and let callers append overrides. Plain
//! concatenation would leave both `p-2` and `p-4` in the list and the winner
//! would depend on stylesheet order, so [`merge_classes`] resolves conflicts:
//!
//! - exact duplicates collapse to one token;
//! - two tokens in the same utility group under the same variants
//!   (`hover:`, `disabled:`, `md:` ...) conflict, and the later one wins;
//! - a shorthand drops the earlier per-side tokens it covers (`p-2` drops
//!   `px-4` and `pt-1`, `border-4` drops `border-b-8`). A per-side token
//!   placed after its shorthand is kept, since it refines it.
//!
//! Only the groups used by this workspace are known. Unknown utilities never
//! conflict with anything.

/// Merge class lists left to right; later tokens take precedence.
pub fn merge_classes<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut merged: Vec<(Option<ConflictKey>, String)> = Vec::new();

    for part in parts {
        for token in part.as_ref().split_whitespace() {
            let key = conflict_key(token);
            merged.retain(|(k, t)| t != token && !overrides(key.as_ref(), k.as_ref()));
            merged.push((key, token.to_string()));
        }
    }

    merged
        .into_iter()
        .map(|(_, t)| t)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Merge class parts, skipping absent ones.
///
/// ```
/// let active = true;
/// let class = ui::cn!("tab tab-bordered", active.then_some("tab-active"));
/// assert_eq!(class, "tab tab-bordered tab-active");
/// ```
#[macro_export]
macro_rules! cn {
    ($($part:expr),* $(,)?) => {
        $crate::class_merge::merge_classes(
            [$($crate::class_merge::ClassPart::class_part(&$part)),*]
                .into_iter()
                .flatten(),
        )
    };
}

/// Anything that may contribute a class list to [`cn!`].
pub trait ClassPart {
    fn class_part(&self) -> Option<&str>;
}

impl ClassPart for &str {
    fn class_part(&self) -> Option<&str> {
        Some(self)
    }
}

impl ClassPart for String {
    fn class_part(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl ClassPart for Option<&str> {
    fn class_part(&self) -> Option<&str> {
        *self
    }
}

impl ClassPart for Option<String> {
    fn class_part(&self) -> Option<&str> {
        self.as_deref()
    }
}

/// Variant prefix and utility group of a token.
type ConflictKey = (String, String);

/// `None` when the utility is not in a known group.
fn conflict_key(token: &str) -> Option<ConflictKey> {
    let (variants, utility) = split_variants(token);
    let utility = utility.trim_start_matches('!');
    utility_group(utility).map(|group| (variants.to_string(), group))
}

/// Whether a later token with key `later` removes an earlier one with key `earlier`.
fn overrides(later: Option<&ConflictKey>, earlier: Option<&ConflictKey>) -> bool {
    match (later, earlier) {
        (Some((lv, lg)), Some((ev, eg))) => {
            lv == ev && (lg == eg || covered_groups(lg).contains(&eg.as_str()))
        }
        _ => false,
    }
}

/// Per-side groups a shorthand group sets as well.
fn covered_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "gap" => &["gap-x", "gap-y"],
        "border-w" => &[
            "border-w-x",
            "border-w-y",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        _ => &[],
    }
}

/// Split `hover:md:bg-red-500` into `("hover:md:", "bg-red-500")`, ignoring
/// colons inside arbitrary values such as `bg-[url(a:b)]`.
fn split_variants(token: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut split = 0;
    for (i, c) in token.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split = i + 1,
            _ => {}
        }
    }
    token.split_at(split)
}

const TEXT_SIZES: [&str; 13] = [
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: [&str; 6] = ["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: [&str; 9] = [
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const BORDER_STYLES: [&str; 6] = ["solid", "dashed", "dotted", "double", "hidden", "none"];
const RADII: [&str; 8] = ["none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];
const DISPLAYS: [&str; 9] = [
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "contents",
    "hidden",
];

fn is_length(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit()) || value.starts_with('[')
}

fn utility_group(utility: &str) -> Option<String> {
    if DISPLAYS.contains(&utility) {
        return Some("display".into());
    }
    if utility == "border" {
        return Some("border-w".into());
    }
    if utility == "rounded" {
        return Some("rounded".into());
    }
    if utility == "shadow" || utility == "transition" {
        return Some(utility.into());
    }

    let (prefix, value) = utility.split_once('-')?;
    let group = match prefix {
        "p" | "px" | "py" | "pt" | "pr" | "pb" | "pl" | "m" | "mx" | "my" | "mt" | "mr"
        | "mb" | "ml" | "w" | "h" | "opacity" | "cursor" | "justify" | "items" | "bg" => {
            prefix.to_string()
        }
        "min" | "max" => {
            let (axis, _) = value.split_once('-')?;
            format!("{prefix}-{axis}")
        }
        "gap" => match value.split_once('-') {
            Some((axis @ ("x" | "y"), _)) => format!("gap-{axis}"),
            _ => "gap".to_string(),
        },
        "text" if TEXT_SIZES.contains(&value) => "text-size".to_string(),
        "text" if TEXT_ALIGN.contains(&value) => "text-align".to_string(),
        "text" if value.starts_with('[') && (value.ends_with("rem]") || value.ends_with("px]")) => {
            "text-size".to_string()
        }
        "text" => "text-color".to_string(),
        "font" if FONT_WEIGHTS.contains(&value) => "font-weight".to_string(),
        "font" => "font-family".to_string(),
        "border" if is_length(value) => "border-w".to_string(),
        "border" if BORDER_STYLES.contains(&value) => "border-style".to_string(),
        "border" => match value.split_once('-') {
            Some((side @ ("x" | "y" | "t" | "r" | "b" | "l"), width)) if is_length(width) => {
                format!("border-w-{side}")
            }
            _ if ["x", "y", "t", "r", "b", "l"].contains(&value) => format!("border-w-{value}"),
            _ => "border-color".to_string(),
        },
        "rounded" if RADII.contains(&value) || value.starts_with('[') => "rounded".to_string(),
        "shadow" => "shadow".to_string(),
        "transition" => "transition".to_string(),
        "flex" if ["row", "row-reverse", "col", "col-reverse"].contains(&value) => {
            "flex-direction".to_string()
        }
        "flex" if ["1", "auto", "initial", "none"].contains(&value) => "flex".to_string(),
        _ => return None,
    };
    Some(group)
}
