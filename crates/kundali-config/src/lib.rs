use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Paths tried, in order, when no explicit config file is given.
pub const CONFIG_SEARCH_PATHS: [&str; 2] = ["configs/kundali.toml", "../../configs/kundali.toml"];

/// `[chart]` table of `kundali.toml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub size: f32,
    pub margin: f32,
    pub title: String,
    pub title_size: f32,
    pub house_number_size: f32,
    pub sign_label_size: f32,
    pub planet_label_size: f32,
    pub planet_spacing: f32,
    pub tooltip_offset_x: f32,
    pub tooltip_offset_y: f32,
    pub show_nakshatra: bool,
    pub background_color: String,
    pub line_color: String,
    pub line_width: f32,
    pub text_color: String,
    pub retrograde_color: String,
    pub kendra_fill: Option<String>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            size: 600.0,
            margin: 40.0,
            title: "Rasi Chart".to_string(),
            title_size: 18.0,
            house_number_size: 11.0,
            sign_label_size: 12.0,
            planet_label_size: 13.0,
            planet_spacing: 16.0,
            tooltip_offset_x: 10.0,
            tooltip_offset_y: -28.0,
            show_nakshatra: true,
            background_color: "#FFFDF7".to_string(),
            line_color: "#8B4513".to_string(),
            line_width: 1.5,
            text_color: "#333333".to_string(),
            retrograde_color: "#C0392B".to_string(),
            kendra_fill: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    chart: Option<ChartSettings>,
}

/// Try the common relative paths for `configs/kundali.toml`.
///
/// Returns `None` when no file exists at any of them.
pub fn read_config_toml_text() -> Option<(PathBuf, String)> {
    CONFIG_SEARCH_PATHS.iter().find_map(|p| {
        fs::read_to_string(p)
            .ok()
            .map(|text| (PathBuf::from(p), text))
    })
}

/// Parse the `[chart]` table out of a TOML document.
pub fn parse_chart_settings(text: &str) -> anyhow::Result<ChartSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse kundali.toml chart settings: {e}"))?;
    let settings = root.chart.unwrap_or_default();
    validate_chart_settings(&settings)?;
    Ok(settings)
}

pub fn validate_chart_settings(settings: &ChartSettings) -> anyhow::Result<()> {
    if !(settings.size > 0.0) {
        anyhow::bail!("chart.size must be positive, got {}", settings.size);
    }
    if settings.margin < 0.0 || settings.margin * 2.0 >= settings.size {
        anyhow::bail!(
            "chart.margin must be non-negative and leave room for the chart (size {}, margin {})",
            settings.size,
            settings.margin
        );
    }
    if !(settings.planet_spacing > 0.0) {
        anyhow::bail!("chart.planet_spacing must be positive, got {}", settings.planet_spacing);
    }
    for (field, value) in [
        ("title_size", settings.title_size),
        ("house_number_size", settings.house_number_size),
        ("sign_label_size", settings.sign_label_size),
        ("planet_label_size", settings.planet_label_size),
    ] {
        if !(value > 0.0) {
            anyhow::bail!("chart.{field} must be positive, got {value}");
        }
    }
    Ok(())
}

/// Load chart settings.
///
/// An explicit `path` must exist. Without one the search paths are tried and
/// defaults are returned when none of them exists.
pub fn load_chart_settings(path: Option<&Path>) -> anyhow::Result<ChartSettings> {
    let text = match path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Could not read chart config {}: {e}", path.display())
        })?,
        None => match read_config_toml_text() {
            Some((_, text)) => text,
            None => return Ok(ChartSettings::default()),
        },
    };
    parse_chart_settings(&text)
}
