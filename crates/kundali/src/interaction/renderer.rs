//! Interactive chart renderer.
//!
//! Owns one chart instance's scene and its share of the page tooltip. Every
//! `draw` is a full rebuild; nothing is patched incrementally.

use crate::chart::data::ChartVisualizationData;
use crate::interaction::document::{Document, TooltipHost};
use crate::interaction::hit::{hit_test, transition, HoverTransition, PointerEvent};
use crate::interaction::tooltip::Tooltip;
use crate::layout::assembler::ChartAssembler;
use crate::layout::types::{ChartLayout, LayoutError, LayoutWarning, Point};
use crate::rendering::generator::ChartSceneGenerator;
use crate::rendering::scene::{ChartScene, HitRegion};
use crate::rendering::svg::scene_to_svg;
use crate::rendering::visual_config::VisualConfig;
use std::cell::RefCell;
use std::rc::Rc;

/// Result of one draw pass
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOutcome {
    Drawn {
        planets: usize,
        warnings: Vec<LayoutWarning>,
    },
    /// Layout failed; the scene was left blank
    Blank(LayoutError),
}

impl DrawOutcome {
    pub fn is_drawn(&self) -> bool {
        matches!(self, DrawOutcome::Drawn { .. })
    }
}

pub struct ChartRenderer<H: TooltipHost = Document> {
    id: String,
    generator: ChartSceneGenerator,
    scene: ChartScene,
    layout: Option<ChartLayout>,
    tooltip: Tooltip<H>,
    hovered: Option<usize>,
}

impl<H: TooltipHost> ChartRenderer<H> {
    pub fn new(host: Rc<RefCell<H>>) -> Self {
        Self::with_config(host, VisualConfig::default())
    }

    pub fn with_config(host: Rc<RefCell<H>>, visual_config: VisualConfig) -> Self {
        let offset = visual_config.tooltip_offset;
        let generator = ChartSceneGenerator::with_config(visual_config);
        Self {
            id: format!("kundali-{}", uuid::Uuid::new_v4()),
            scene: generator.blank(),
            generator,
            layout: None,
            tooltip: Tooltip::new(host, offset),
            hovered: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn scene(&self) -> &ChartScene {
        &self.scene
    }

    pub fn layout(&self) -> Option<&ChartLayout> {
        self.layout.as_ref()
    }

    pub fn host(&self) -> &Rc<RefCell<H>> {
        self.tooltip.host()
    }

    /// Rebuild the scene from a payload.
    ///
    /// Never fails: a payload without a usable ascendant yields a blank
    /// scene, a warning in the log and [`DrawOutcome::Blank`].
    pub fn draw(&mut self, data: &ChartVisualizationData) -> DrawOutcome {
        self.hovered = None;
        self.layout = None;
        self.scene = self.generator.blank();

        let settings = self.generator.visual_config().layout_settings();
        match ChartAssembler::build_chart(data, &settings) {
            Ok(layout) => {
                self.scene = self.generator.generate(&layout);
                self.tooltip.acquire();

                let outcome = DrawOutcome::Drawn {
                    planets: layout.planets.len(),
                    warnings: layout.warnings.clone(),
                };
                self.layout = Some(layout);
                outcome
            }
            Err(err) => {
                log::warn!("Chart {} not drawn: {err}", self.id);
                self.tooltip.release();
                DrawOutcome::Blank(err)
            }
        }
    }

    /// Region currently under the pointer
    pub fn hovered(&self) -> Option<&HitRegion> {
        self.hovered.and_then(|i| self.scene.hit_regions.get(i))
    }

    /// Hit-test a pointer move and show or hide the tooltip accordingly.
    pub fn on_pointer_move(&mut self, event: PointerEvent) -> HoverTransition {
        let current = hit_test(&self.scene.hit_regions, event.scene);
        let change = transition(self.hovered, current);
        match change {
            HoverTransition::Unchanged => {}
            HoverTransition::Entered(region) | HoverTransition::Moved { to: region, .. } => {
                self.pointer_enter(region, event.page);
            }
            HoverTransition::Left(_) => self.pointer_leave(),
        }
        change
    }

    /// Pointer entered the label of hit region `region`.
    pub fn pointer_enter(&mut self, region: usize, page: Point) -> bool {
        let Some(hit) = self.scene.hit_regions.get(region) else {
            return false;
        };
        self.tooltip.show(&hit.tooltip, page);
        self.hovered = Some(region);
        true
    }

    /// Pointer left a planet label.
    pub fn pointer_leave(&mut self) {
        self.hovered = None;
        self.tooltip.hide();
    }

    /// Scene as SVG, with this instance's id on the root element
    pub fn to_svg(&self) -> String {
        scene_to_svg(&self.scene, Some(&self.id))
    }

    /// Whether the last draw succeeded and the chart has not been unmounted
    pub fn is_mounted(&self) -> bool {
        self.tooltip.is_held()
    }

    /// Tear down: clear the scene and let go of the tooltip. The node is
    /// removed once no other chart on the page holds it. Dropping the
    /// renderer does the same.
    pub fn unmount(&mut self) {
        self.hovered = None;
        self.layout = None;
        self.scene = self.generator.blank();
        self.tooltip.release();
    }
}
