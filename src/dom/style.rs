//! Inline style declarations and computed-style defaults

/// Initial `color` when nothing in the ancestry sets one
pub const DEFAULT_COLOR: &str = "rgb(0, 0, 0)";

/// Initial `background-color`, fully transparent
pub const DEFAULT_BACKGROUND: &str = "rgba(0, 0, 0, 0)";

/// Properties whose computed value falls back to the parent's
const INHERITED_PROPERTIES: &[&str] = &[
    "color",
    "font-family",
    "font-size",
    "font-style",
    "font-weight",
    "line-height",
    "visibility",
];

/// Check if a property inherits from the parent element
pub fn is_inherited(property: &str) -> bool {
    INHERITED_PROPERTIES.contains(&property)
}

/// Initial value of a property when neither the node nor its ancestry sets it
pub fn initial_value(property: &str) -> Option<&'static str> {
    match property {
        "color" => Some(DEFAULT_COLOR),
        "background-color" => Some(DEFAULT_BACKGROUND),
        _ => None,
    }
}

/// Parse a `style` attribute into `(property, value)` pairs.
///
/// Property names are lowercased, `!important` is dropped and malformed
/// declarations are skipped.
pub fn parse_declarations(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|declaration| {
            let (name, value) = declaration.split_once(':')?;
            let name = name.trim().to_lowercase();
            let value = value.trim();
            let value = value
                .strip_suffix("!important")
                .map(str::trim_end)
                .unwrap_or(value);

            if name.is_empty() || value.is_empty() {
                return None;
            }

            Some((name, value.to_string()))
        })
        .collect()
}

/// Find the effective value of `property` in parsed declarations.
///
/// `background` shorthand counts for `background-color`. Later declarations
/// override earlier ones.
pub fn lookup<'a>(declarations: &'a [(String, String)], property: &str) -> Option<&'a str> {
    declarations
        .iter()
        .rev()
        .find(|(name, _)| {
            name == property || (property == "background-color" && name == "background")
        })
        .map(|(_, value)| value.as_str())
}
