use crate::chart::data::PlanetPlacement;
use crate::interaction::document::{NodeId, TooltipHost};
use crate::layout::types::Point;
use crate::vedic::nakshatra::nakshatra_for_longitude;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Marker class identifying the shared tooltip node in the host document.
pub const TOOLTIP_MARKER: &str = "kundali-tooltip";

/// Planet detail shown on hover
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub planet: String,
    /// Degree within the sign
    pub degree: f64,
    pub sign: String,
    /// House as supplied by the payload
    pub house: u8,
    pub nakshatra: Option<String>,
    pub retrograde: bool,
}

impl TooltipContent {
    pub fn from_placement(planet: &PlanetPlacement) -> Self {
        let nakshatra = nakshatra_for_longitude(planet.degree);
        Self {
            planet: planet.planet.clone(),
            degree: planet.degree_in_sign(),
            sign: planet.sign.clone(),
            house: planet.house,
            nakshatra: Some(format!("{}, pada {}", nakshatra.record.name, nakshatra.pada)),
            retrograde: planet.is_retrograde,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            self.planet.clone(),
            format!("Degree: {:.2}°", self.degree),
            format!("Sign: {}", self.sign),
            format!("House: {}", self.house),
        ];
        if let Some(nakshatra) = &self.nakshatra {
            lines.push(format!("Nakshatra: {nakshatra}"));
        }
        if self.retrograde {
            lines.push("Retrograde".to_string());
        }
        lines
    }

    pub fn to_text(&self) -> String {
        self.lines().join("\n")
    }
}

/// Handle on the document-level tooltip shared by every chart on a page.
///
/// Holds no node id of its own: the node is looked up by
/// [`TOOLTIP_MARKER`] on every use, so a node replaced by another chart
/// instance is picked up transparently. While held, the handle counts as one
/// user of the node; the node is removed when the last user lets go.
pub struct Tooltip<H: TooltipHost> {
    host: Rc<RefCell<H>>,
    offset: Point,
    held: bool,
}

impl<H: TooltipHost> Tooltip<H> {
    pub fn new(host: Rc<RefCell<H>>, offset: Point) -> Self {
        Self {
            host,
            offset,
            held: false,
        }
    }

    pub fn host(&self) -> &Rc<RefCell<H>> {
        &self.host
    }

    /// Whether this handle currently counts as a user of the node
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Run `f` against the host, or log and skip when the host is already
    /// borrowed further up the stack.
    fn with_host<R>(&self, action: &str, f: impl FnOnce(&mut H) -> R) -> Option<R> {
        match self.host.try_borrow_mut() {
            Ok(mut host) => Some(f(&mut host)),
            Err(_) => {
                log::warn!("Tooltip host busy during {action}; skipped");
                None
            }
        }
    }

    /// Drop any stale tooltip node and create a fresh hidden one.
    pub fn acquire(&mut self) -> Option<NodeId> {
        let newly_held = !self.held;
        let node = self.with_host("acquire", |host| {
            if newly_held {
                host.add_user(TOOLTIP_MARKER);
            }
            let removed = host.remove_by_marker(TOOLTIP_MARKER);
            if removed > 0 {
                log::debug!("Replaced {removed} stale tooltip node(s)");
            }
            host.create_node(TOOLTIP_MARKER)
        })?;
        self.held = true;
        Some(node)
    }

    /// Fill and reveal the tooltip near a page-space pointer position.
    ///
    /// The node is created if another chart removed it. The position is not
    /// clamped to the viewport.
    pub fn show(&self, content: &TooltipContent, page: Point) -> bool {
        let (left, top) = (page.x + self.offset.x, page.y + self.offset.y);
        self.with_host("show", |host| {
            let node = match host.find_by_marker(TOOLTIP_MARKER) {
                Some(node) => node,
                None => host.create_node(TOOLTIP_MARKER),
            };
            host.set_content(node, &content.lines())
                && host.set_position(node, left, top)
                && host.set_visible(node, true)
        })
        .unwrap_or(false)
    }

    /// Hide without removing the node.
    pub fn hide(&self) {
        self.with_host("hide", |host| {
            if let Some(node) = host.find_by_marker(TOOLTIP_MARKER) {
                host.set_visible(node, false);
            }
        });
    }

    /// Stop using the node. It is removed from the document once no other
    /// chart holds it; returns the number of nodes removed.
    pub fn release(&mut self) -> usize {
        if !self.held {
            return 0;
        }
        let removed = self.with_host("release", |host| {
            if host.remove_user(TOOLTIP_MARKER) == 0 {
                host.remove_by_marker(TOOLTIP_MARKER)
            } else {
                0
            }
        });
        match removed {
            Some(removed) => {
                self.held = false;
                removed
            }
            None => 0,
        }
    }
}

impl<H: TooltipHost> Drop for Tooltip<H> {
    fn drop(&mut self) {
        self.release();
    }
}
