use crate::interaction::tooltip::TooltipContent;
use crate::layout::types::{CellKind, ChartLayout, PlacedPlanet, CHAR_WIDTH_RATIO};
use crate::rendering::primitives::{Color, Point, Rect, Shape, TextAnchor};
use crate::rendering::scene::{ChartScene, HitRegion};
use crate::rendering::visual_config::VisualConfig;

/// Scene generator - converts a chart layout into drawable shapes
pub struct ChartSceneGenerator {
    visual_config: VisualConfig,
}

impl ChartSceneGenerator {
    /// Create a new generator with the default theme
    pub fn new() -> Self {
        Self {
            visual_config: VisualConfig::default(),
        }
    }

    pub fn with_config(visual_config: VisualConfig) -> Self {
        Self { visual_config }
    }

    pub fn visual_config(&self) -> &VisualConfig {
        &self.visual_config
    }

    /// Empty scene of the configured size; used when layout fails
    pub fn blank(&self) -> ChartScene {
        let mut scene = ChartScene::new(self.visual_config.size, self.visual_config.size);
        scene.background_color = self.visual_config.background_color;
        scene
    }

    /// Generate the full scene for a layout
    pub fn generate(&self, layout: &ChartLayout) -> ChartScene {
        let mut scene = self.blank();

        scene.shapes.push(self.title_shape());
        scene.shapes.extend(self.outline_shapes(layout));
        scene.shapes.extend(self.house_label_shapes(layout));

        for placed in &layout.planets {
            let region = scene.hit_regions.len();
            let (label_shapes, hit) = self.planet_shapes(placed, region);
            scene.shapes.extend(label_shapes);
            scene.hit_regions.push(hit);
        }

        scene
    }

    fn title_shape(&self) -> Shape {
        let cfg = &self.visual_config;
        Shape::Text {
            position: Point::new(cfg.size / 2.0, cfg.margin / 2.0),
            content: cfg.title.clone(),
            size: cfg.title_size,
            color: cfg.text_color,
            anchor: TextAnchor::Middle,
            bold: true,
        }
    }

    /// Frame, diamond, diagonals and optional kendra fills
    fn outline_shapes(&self, layout: &ChartLayout) -> Vec<Shape> {
        let cfg = &self.visual_config;
        let geometry = &layout.geometry;
        let mut shapes = Vec::new();

        if let Some(fill) = cfg.kendra_fill {
            for cell in geometry.cells.iter().filter(|c| c.kind == CellKind::Kendra) {
                shapes.push(Shape::Polygon {
                    points: cell.polygon.clone(),
                    fill: Some(fill),
                    stroke: None,
                });
            }
        }

        shapes.push(Shape::Polygon {
            points: geometry.frame.clone(),
            fill: None,
            stroke: Some(cfg.line_stroke.clone()),
        });
        shapes.push(Shape::Polygon {
            points: geometry.diamond.clone(),
            fill: None,
            stroke: Some(cfg.line_stroke.clone()),
        });
        for diagonal in &geometry.diagonals {
            shapes.push(Shape::Line {
                from: diagonal.from,
                to: diagonal.to,
                stroke: cfg.line_stroke.clone(),
            });
        }

        shapes
    }

    /// House number and occupying sign for each of the 12 cells
    fn house_label_shapes(&self, layout: &ChartLayout) -> Vec<Shape> {
        let cfg = &self.visual_config;
        let mut shapes = Vec::with_capacity(24);

        for (cell, sign) in layout.geometry.cells.iter().zip(layout.chart_signs.iter()) {
            shapes.push(Shape::Text {
                position: cell.center.offset(0.0, cfg.house_number_offset),
                content: cell.number.to_string(),
                size: cfg.house_number_size,
                color: cfg.house_number_color,
                anchor: TextAnchor::Middle,
                bold: false,
            });
            shapes.push(Shape::Text {
                position: cell.center.offset(0.0, cfg.sign_label_offset),
                content: sign.abbreviation().to_string(),
                size: cfg.sign_label_size,
                color: cfg.text_color,
                anchor: TextAnchor::Middle,
                bold: true,
            });
        }

        shapes
    }

    fn planet_shapes(&self, placed: &PlacedPlanet, region: usize) -> (Vec<Shape>, HitRegion) {
        let cfg = &self.visual_config;
        let planet = &placed.placement;
        let label = planet.label();
        let color: Color = cfg.planet_color(planet);

        let char_count = label.chars().count().max(1) as f32;
        let label_width = char_count * cfg.planet_label_size * CHAR_WIDTH_RATIO;

        let mut shapes = vec![Shape::PlanetLabel {
            position: placed.position,
            planet: planet.planet.clone(),
            label,
            size: cfg.planet_label_size,
            color,
            region,
        }];

        if planet.is_retrograde {
            shapes.push(Shape::RetrogradeMarker {
                position: placed
                    .position
                    .offset(label_width / 2.0 + 3.0, -cfg.planet_label_size * 0.35),
                size: cfg.retrograde_size,
                color: cfg.retrograde_color,
            });
        }

        let mut tooltip = TooltipContent::from_placement(planet);
        if !cfg.show_nakshatra {
            tooltip.nakshatra = None;
        }

        let hit = HitRegion {
            planet: planet.planet.clone(),
            house: placed.house,
            bounds: Rect::centered(placed.position, label_width, cfg.planet_label_size),
            tooltip,
        };

        (shapes, hit)
    }
}

impl Default for ChartSceneGenerator {
    fn default() -> Self {
        Self::new()
    }
}
