//! Named telop color and effect combinations.
//!
//! Lookups take the camelCase names used in scripts (`"yellowOutline"`, `"risePulse"`).

use crate::composition::model::{TelopColor, TelopEffects};

const SOFT_SHADOW: &str = "rgba(0,0,0,0.8)";

fn shadowed(text: &str, shadow: &str) -> TelopColor {
    TelopColor {
        text: Some(text.to_owned()),
        shadow: Some(shadow.to_owned()),
        ..TelopColor::default()
    }
}

fn outlined(stroke: &str, width: f64) -> TelopColor {
    TelopColor {
        text: Some("#ffffff".to_owned()),
        stroke: Some(stroke.to_owned()),
        stroke_width: Some(width),
        ..TelopColor::default()
    }
}

fn double_stroked(text: &str) -> TelopColor {
    TelopColor {
        text: Some(text.to_owned()),
        stroke: Some("#ffffff".to_owned()),
        stroke_width: Some(8.0),
        outer_stroke: Some("#000000".to_owned()),
        outer_stroke_width: Some(16.0),
        ..TelopColor::default()
    }
}

/// Every color preset name, in declaration order.
pub const COLOR_PRESETS: [&str; 30] = [
    "white",
    "yellow",
    "pink",
    "cyan",
    "green",
    "orange",
    "red",
    "purple",
    "blue",
    "blackOutline",
    "yellowOutline",
    "pinkOutline",
    "cyanOutline",
    "blueOutline",
    "redOutline",
    "greenOutline",
    "orangeOutline",
    "purpleOutline",
    "sunset",
    "ocean",
    "neon",
    "gold",
    "doubleYellow",
    "doublePink",
    "doublePurple",
    "doubleRed",
    "doubleBlue",
    "doubleGreen",
    "doubleOrange",
    "doubleBrown",
];

fn palette(name: &str) -> Option<&'static str> {
    Some(match name {
        "white" => "#ffffff",
        "yellow" => "#FFD700",
        "pink" => "#FF69B4",
        "cyan" => "#00FFFF",
        "green" => "#00FF7F",
        "orange" => "#FFA500",
        "red" => "#FF4444",
        "purple" => "#DA70D6",
        "blue" => "#4169E1",
        "black" => "#000000",
        _ => return None,
    })
}

/// Color preset by name; `None` for unknown names.
pub fn telop_color(name: &str) -> Option<TelopColor> {
    if let Some(base) = name.strip_suffix("Outline") {
        return palette(base).map(|c| outlined(c, 20.0));
    }
    if let Some(base) = name.strip_prefix("double") {
        let text = match base {
            "Yellow" => "#ffdd00",
            "Pink" => "#ff69b4",
            "Purple" => "#9933ff",
            "Red" => "#ff0000",
            "Blue" => "#0066ff",
            "Green" => "#00cc66",
            "Orange" => "#ff8800",
            "Brown" => "#8B4513",
            _ => return None,
        };
        return Some(double_stroked(text));
    }
    match name {
        "sunset" => Some(shadowed("#FF6B6B", "rgba(255,165,0,0.8)")),
        "ocean" => Some(shadowed("#4ECDC4", "rgba(0,100,150,0.8)")),
        "neon" => Some(shadowed("#39FF14", "rgba(57,255,20,0.5)")),
        "gold" => Some(shadowed("#FFD700", "rgba(218,165,32,0.8)")),
        "tvStyle" => Some(outlined("#000000", 6.0)),
        "black" => None,
        other => palette(other).map(|c| shadowed(c, SOFT_SHADOW)),
    }
}

/// White text with a thin black outline, the broadcast caption look.
pub fn tv_style() -> TelopColor {
    outlined("#000000", 6.0)
}

/// Effect preset by name; `None` for unknown names.
pub fn telop_effects(name: &str) -> Option<TelopEffects> {
    let (enter, exit, emphasis) = match name {
        "none" => return Some(TelopEffects::default()),
        "dropRainbow" => ("drop", "dropOut", Some("rainbow")),
        "bouncePulse" => ("bounce", "zoomOut", Some("pulse")),
        "slideGlow" => ("slideInLeft", "slideOutRight", Some("glow")),
        "zoomNeon" => ("zoomIn", "zoomOut", Some("neon")),
        "typeWave" => ("typewriter", "dissolve", Some("wave")),
        "elasticShake" => ("elastic", "scatter", Some("shake")),
        "blurGlow" => ("blur", "dissolve", Some("glow")),
        "rotateRainbow" => ("rotate", "scatter", Some("rainbow")),
        "risePulse" => ("rise", "riseOut", Some("pulse")),
        "simple" => ("zoomIn", "zoomOut", None),
        "spring" => ("spring", "springOut", Some("kirakira")),
        _ => return None,
    };
    Some(TelopEffects::new(Some(enter), Some(exit), emphasis))
}

pub fn rise_pulse() -> TelopEffects {
    TelopEffects::new(Some("rise"), Some("riseOut"), Some("pulse"))
}

pub fn simple() -> TelopEffects {
    TelopEffects::new(Some("zoomIn"), Some("zoomOut"), None)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/presets.rs"]
mod tests;
