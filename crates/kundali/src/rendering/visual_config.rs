use crate::chart::data::PlanetPlacement;
use crate::layout::types::{label_box_width, LayoutSettings, Point};
use crate::rendering::primitives::{Color, Stroke};
use crate::vedic::zodiac::Graha;
use kundali_config::ChartSettings;
use std::collections::HashMap;

/// Visual styling configuration for chart elements
#[derive(Debug, Clone)]
pub struct VisualConfig {
    /// Side of the square scene
    pub size: f32,
    /// Gap between the scene edge and the chart frame
    pub margin: f32,
    pub title: String,
    pub title_size: f32,
    pub background_color: Color,
    pub text_color: Color,
    pub line_stroke: Stroke,
    /// Optional fill for the four kendra cells
    pub kendra_fill: Option<Color>,
    pub house_number_size: f32,
    pub house_number_offset: f32,
    pub house_number_color: Color,
    pub sign_label_size: f32,
    pub sign_label_offset: f32,
    pub planet_label_size: f32,
    pub planet_start_offset: f32,
    pub planet_spacing: f32,
    pub planet_colors: HashMap<Graha, Color>,
    pub default_planet_color: Color,
    pub retrograde_color: Color,
    pub retrograde_size: f32,
    /// Tooltip placement relative to the pointer's page coordinates
    pub tooltip_offset: Point,
    pub show_nakshatra: bool,
}

fn hex_or(hex: &str, fallback: Color) -> Color {
    Color::from_hex(hex).unwrap_or(fallback)
}

impl Default for VisualConfig {
    fn default() -> Self {
        // Traditional parchment theme
        let mut planet_colors = HashMap::new();
        planet_colors.insert(Graha::Sun, hex_or("#D35400", Color::BLACK));
        planet_colors.insert(Graha::Moon, hex_or("#5D6D7E", Color::BLACK));
        planet_colors.insert(Graha::Mercury, hex_or("#1E8449", Color::BLACK));
        planet_colors.insert(Graha::Venus, hex_or("#AF7AC5", Color::BLACK));
        planet_colors.insert(Graha::Mars, hex_or("#C0392B", Color::BLACK));
        planet_colors.insert(Graha::Jupiter, hex_or("#B7950B", Color::BLACK));
        planet_colors.insert(Graha::Saturn, hex_or("#2E4053", Color::BLACK));
        planet_colors.insert(Graha::Rahu, hex_or("#616A6B", Color::BLACK));
        planet_colors.insert(Graha::Ketu, hex_or("#784212", Color::BLACK));

        Self {
            size: 600.0,
            margin: 40.0,
            title: "Rasi Chart".to_string(),
            title_size: 18.0,
            background_color: hex_or("#FFFDF7", Color::WHITE),
            text_color: hex_or("#333333", Color::BLACK),
            line_stroke: Stroke {
                color: hex_or("#8B4513", Color::BLACK),
                width: 1.5,
                dash_array: None,
            },
            kendra_fill: None,
            house_number_size: 11.0,
            house_number_offset: -26.0,
            house_number_color: hex_or("#999999", Color::BLACK),
            sign_label_size: 12.0,
            sign_label_offset: -11.0,
            planet_label_size: 13.0,
            planet_start_offset: 10.0,
            planet_spacing: 16.0,
            planet_colors,
            default_planet_color: hex_or("#333333", Color::BLACK),
            retrograde_color: hex_or("#C0392B", Color::BLACK),
            retrograde_size: 9.0,
            tooltip_offset: Point::new(10.0, -28.0),
            show_nakshatra: true,
        }
    }
}

impl VisualConfig {
    /// Apply user settings on top of the defaults.
    ///
    /// Unparseable colors keep the default and are reported at warn level.
    pub fn from_settings(settings: &ChartSettings) -> Self {
        let defaults = Self::default();
        let color = |field: &str, hex: &str, fallback: Color| match Color::from_hex(hex) {
            Some(c) => c,
            None => {
                log::warn!("chart.{field}: {hex:?} is not a hex color, keeping default");
                fallback
            }
        };

        let kendra_fill = match settings.kendra_fill.as_deref() {
            Some(hex) => Color::from_hex(hex).or_else(|| {
                log::warn!("chart.kendra_fill: {hex:?} is not a hex color, leaving cells unfilled");
                None
            }),
            None => None,
        };

        Self {
            size: settings.size,
            margin: settings.margin,
            title: settings.title.clone(),
            title_size: settings.title_size,
            background_color: color(
                "background_color",
                &settings.background_color,
                defaults.background_color,
            ),
            text_color: color("text_color", &settings.text_color, defaults.text_color),
            line_stroke: Stroke {
                color: color("line_color", &settings.line_color, defaults.line_stroke.color),
                width: settings.line_width,
                dash_array: None,
            },
            kendra_fill,
            house_number_size: settings.house_number_size,
            sign_label_size: settings.sign_label_size,
            planet_label_size: settings.planet_label_size,
            planet_spacing: settings.planet_spacing,
            retrograde_color: color(
                "retrograde_color",
                &settings.retrograde_color,
                defaults.retrograde_color,
            ),
            tooltip_offset: Point::new(settings.tooltip_offset_x, settings.tooltip_offset_y),
            show_nakshatra: settings.show_nakshatra,
            ..defaults
        }
    }

    /// Geometry rules handed to the layout engine
    pub fn layout_settings(&self) -> LayoutSettings {
        LayoutSettings {
            origin: Point::new(self.margin, self.margin),
            size: (self.size - 2.0 * self.margin).max(0.0),
            planet_start_offset: self.planet_start_offset,
            planet_spacing: self.planet_spacing,
            label_width: label_box_width(self.planet_label_size),
            label_height: self.planet_label_size,
        }
    }

    /// Label color for a planet: the payload hint when it is a hex color,
    /// otherwise the theme color for its graha.
    pub fn planet_color(&self, planet: &PlanetPlacement) -> Color {
        Color::from_hex(&planet.color)
            .or_else(|| planet.graha().and_then(|g| self.planet_colors.get(&g).copied()))
            .unwrap_or(self.default_planet_color)
    }
}
