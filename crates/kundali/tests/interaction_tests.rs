use kundali::chart::{load_chart_data_from_json, ChartVisualizationData};
use kundali::interaction::{
    ChartRenderer, Document, DrawOutcome, HoverTransition, PointerEvent, TooltipHost,
    TOOLTIP_MARKER,
};
use kundali::layout::{LayoutError, Point};
use kundali::VisualConfig;
use std::cell::RefCell;
use std::rc::Rc;

const LEO_CHART: &str = r#"
{
  "planets": [
    { "planet": "Mars", "degree": 222.5, "sign": "Scorpio", "house": 4, "color": "" },
    { "planet": "Jupiter", "degree": 95.0, "sign": "Cancer", "house": 12, "color": "" }
  ],
  "houses": [
    { "houseNumber": 1, "sign": "Leo", "startDegree": 120.0, "lord": "Sun", "meaning": "Self" }
  ],
  "aspects": []
}
"#;

fn leo_chart() -> ChartVisualizationData {
    load_chart_data_from_json(LEO_CHART).unwrap()
}

fn tooltip_count(doc: &Rc<RefCell<Document>>) -> usize {
    doc.borrow().count_marker(TOOLTIP_MARKER)
}

fn tooltip_node(doc: &Rc<RefCell<Document>>) -> kundali::interaction::BodyNode {
    let doc = doc.borrow();
    let id = doc.find_by_marker(TOOLTIP_MARKER).unwrap();
    doc.node(id).unwrap().clone()
}

#[test]
fn test_draw_creates_one_hidden_tooltip() {
    let doc = Rc::new(RefCell::new(Document::new()));
    let mut renderer = ChartRenderer::new(Rc::clone(&doc));

    let outcome = renderer.draw(&leo_chart());
    assert_eq!(
        outcome,
        DrawOutcome::Drawn {
            planets: 2,
            warnings: Vec::new()
        }
    );
    assert!(outcome.is_drawn());
    assert_eq!(tooltip_count(&doc), 1);
    assert!(!tooltip_node(&doc).visible);
    assert!(renderer.id().starts_with("kundali-"));
}

#[test]
fn test_hover_shows_planet_details_near_pointer() {
    let doc = Rc::new(RefCell::new(Document::new()));
    let mut renderer = ChartRenderer::new(Rc::clone(&doc));
    renderer.draw(&leo_chart());

    assert!(renderer.pointer_enter(0, Point::new(100.0, 200.0)));
    let node = tooltip_node(&doc);
    assert!(node.visible);
    assert_eq!(node.lines[0], "Mars");
    assert!(node.lines.contains(&"House: 4".to_string()));
    assert!(node.lines.contains(&"Sign: Scorpio".to_string()));

    let offset = VisualConfig::default().tooltip_offset;
    assert_eq!(node.left, 100.0 + offset.x);
    assert_eq!(node.top, 200.0 + offset.y);
    assert_eq!(renderer.hovered().map(|r| r.planet.as_str()), Some("Mars"));
}

#[test]
fn test_leave_hides_but_keeps_node() {
    let doc = Rc::new(RefCell::new(Document::new()));
    let mut renderer = ChartRenderer::new(Rc::clone(&doc));
    renderer.draw(&leo_chart());

    renderer.pointer_enter(1, Point::new(10.0, 10.0));
    renderer.pointer_leave();

    assert_eq!(tooltip_count(&doc), 1);
    assert!(!tooltip_node(&doc).visible);
    assert!(renderer.hovered().is_none());
}

#[test]
fn test_enter_out_of_range_region_is_ignored() {
    let doc = Rc::new(RefCell::new(Document::new()));
    let mut renderer = ChartRenderer::new(Rc::clone(&doc));
    renderer.draw(&leo_chart());

    assert!(!renderer.pointer_enter(7, Point::new(0.0, 0.0)));
    assert!(!tooltip_node(&doc).visible);
}

#[test]
fn test_pointer_move_drives_hover_transitions() {
    let doc = Rc::new(RefCell::new(Document::new()));
    let mut renderer = ChartRenderer::new(Rc::clone(&doc));
    renderer.draw(&leo_chart());

    let bounds = renderer.scene().hit_regions[0].bounds;
    let on_mars = Point::new(bounds.x + bounds.width / 2.0, bounds.y + bounds.height / 2.0);
    let chart_origin = Point::new(50.0, 80.0);
    let page = on_mars.offset(chart_origin.x, chart_origin.y);

    let entered = renderer.on_pointer_move(PointerEvent::at_page(page, chart_origin));
    assert_eq!(entered, HoverTransition::Entered(0));
    assert!(tooltip_node(&doc).visible);

    let again = renderer.on_pointer_move(PointerEvent::at_page(page, chart_origin));
    assert_eq!(again, HoverTransition::Unchanged);

    let left = renderer.on_pointer_move(PointerEvent::new(Point::new(1.0, 1.0), Point::new(51.0, 81.0)));
    assert_eq!(left, HoverTransition::Left(0));
    assert!(!tooltip_node(&doc).visible);
}

#[test]
fn test_unmount_removes_tooltip() {
    let doc = Rc::new(RefCell::new(Document::new()));
    let mut renderer = ChartRenderer::new(Rc::clone(&doc));
    renderer.draw(&leo_chart());

    renderer.unmount();
    assert_eq!(tooltip_count(&doc), 0);
    assert!(renderer.scene().is_blank());
    assert!(renderer.layout().is_none());
}

#[test]
fn test_drop_removes_tooltip() {
    let doc = Rc::new(RefCell::new(Document::new()));
    {
        let mut renderer = ChartRenderer::new(Rc::clone(&doc));
        renderer.draw(&leo_chart());
        assert_eq!(tooltip_count(&doc), 1);
    }
    assert_eq!(tooltip_count(&doc), 0);
}

#[test]
fn test_repeated_draws_keep_a_single_tooltip() {
    let doc = Rc::new(RefCell::new(Document::new()));
    let mut renderer = ChartRenderer::new(Rc::clone(&doc));
    let data = leo_chart();

    for _ in 0..5 {
        renderer.draw(&data);
        assert_eq!(tooltip_count(&doc), 1);
    }
}

#[test]
fn test_redraw_is_idempotent() {
    let doc = Rc::new(RefCell::new(Document::new()));
    let mut renderer = ChartRenderer::new(Rc::clone(&doc));
    let data = leo_chart();

    renderer.draw(&data);
    let first = renderer.scene().clone();
    let first_svg = renderer.to_svg();
    renderer.draw(&data);

    assert_eq!(renderer.scene(), &first);
    assert_eq!(renderer.to_svg(), first_svg);
}

#[test]
fn test_charts_sharing_a_page_share_one_tooltip() {
    let doc = Rc::new(RefCell::new(Document::new()));
    let mut first = ChartRenderer::new(Rc::clone(&doc));
    let mut second = ChartRenderer::new(Rc::clone(&doc));
    assert_ne!(first.id(), second.id());

    first.draw(&leo_chart());
    second.draw(&leo_chart());
    assert_eq!(tooltip_count(&doc), 1);
    assert_eq!(doc.borrow().users(TOOLTIP_MARKER), 2);

    // The first chart still drives the surviving node
    first.pointer_enter(0, Point::new(5.0, 5.0));
    assert!(tooltip_node(&doc).visible);

    // Unmounting one chart leaves the node for the other
    second.unmount();
    assert_eq!(tooltip_count(&doc), 1);
    assert!(!second.is_mounted());

    first.pointer_enter(1, Point::new(5.0, 5.0));
    assert_eq!(tooltip_node(&doc).lines[0], "Jupiter");

    first.unmount();
    assert_eq!(tooltip_count(&doc), 0);
    assert_eq!(doc.borrow().users(TOOLTIP_MARKER), 0);
}

#[test]
fn test_dropping_or_failing_one_chart_keeps_tooltip_for_the_other() {
    let doc = Rc::new(RefCell::new(Document::new()));
    let mut first = ChartRenderer::new(Rc::clone(&doc));
    first.draw(&leo_chart());

    {
        let mut second = ChartRenderer::new(Rc::clone(&doc));
        second.draw(&leo_chart());
    }
    assert_eq!(tooltip_count(&doc), 1);

    let mut third = ChartRenderer::new(Rc::clone(&doc));
    third.draw(&leo_chart());
    third.draw(&ChartVisualizationData::default());
    assert!(!third.is_mounted());
    assert_eq!(tooltip_count(&doc), 1);
    assert_eq!(doc.borrow().users(TOOLTIP_MARKER), 1);

    assert!(first.pointer_enter(0, Point::new(0.0, 0.0)));
    assert!(tooltip_node(&doc).visible);
}

#[test]
fn test_redraw_does_not_inflate_user_count() {
    let doc = Rc::new(RefCell::new(Document::new()));
    let mut renderer = ChartRenderer::new(Rc::clone(&doc));
    for _ in 0..3 {
        renderer.draw(&leo_chart());
    }
    assert_eq!(doc.borrow().users(TOOLTIP_MARKER), 1);

    renderer.unmount();
    assert_eq!(tooltip_count(&doc), 0);
}

#[test]
fn test_busy_host_skips_tooltip_updates() {
    let doc = Rc::new(RefCell::new(Document::new()));
    let mut renderer = ChartRenderer::new(Rc::clone(&doc));
    renderer.draw(&leo_chart());

    {
        let _held = doc.borrow();
        assert!(renderer.pointer_enter(0, Point::new(0.0, 0.0)));
        renderer.pointer_leave();
        renderer.pointer_enter(1, Point::new(0.0, 0.0));
    }
    assert!(!tooltip_node(&doc).visible);

    // Normal service resumes once the host is free
    renderer.pointer_enter(0, Point::new(0.0, 0.0));
    assert!(tooltip_node(&doc).visible);
    assert_eq!(tooltip_node(&doc).lines[0], "Mars");
}

#[test]
fn test_drop_while_host_busy_does_not_panic() {
    let doc = Rc::new(RefCell::new(Document::new()));
    let mut renderer = ChartRenderer::new(Rc::clone(&doc));
    renderer.draw(&leo_chart());

    let held = doc.borrow();
    drop(renderer);
    assert_eq!(held.count_marker(TOOLTIP_MARKER), 1);
}

#[test]
fn test_document_counts_users_per_marker() {
    let mut doc = Document::new();
    assert_eq!(doc.add_user(TOOLTIP_MARKER), 1);
    assert_eq!(doc.add_user(TOOLTIP_MARKER), 2);
    assert_eq!(doc.users("other"), 0);

    assert_eq!(doc.remove_user(TOOLTIP_MARKER), 1);
    assert_eq!(doc.remove_user(TOOLTIP_MARKER), 0);
    assert_eq!(doc.remove_user(TOOLTIP_MARKER), 0);
    assert_eq!(doc.users(TOOLTIP_MARKER), 0);
}

#[test]
fn test_tooltip_recreated_after_external_removal() {
    let doc = Rc::new(RefCell::new(Document::new()));
    let mut renderer = ChartRenderer::new(Rc::clone(&doc));
    renderer.draw(&leo_chart());

    doc.borrow_mut().remove_by_marker(TOOLTIP_MARKER);
    renderer.pointer_enter(0, Point::new(0.0, 0.0));

    assert_eq!(tooltip_count(&doc), 1);
    assert!(tooltip_node(&doc).visible);
}

#[test]
fn test_unknown_ascendant_draws_blank() {
    let doc = Rc::new(RefCell::new(Document::new()));
    let mut renderer = ChartRenderer::new(Rc::clone(&doc));
    let mut data = leo_chart();
    data.houses[0].sign = "Unknownsign".to_string();

    let outcome = renderer.draw(&data);
    assert_eq!(
        outcome,
        DrawOutcome::Blank(LayoutError::InvalidAscendant {
            found: Some("Unknownsign".to_string())
        })
    );
    assert!(renderer.scene().is_blank());
    assert!(renderer.scene().hit_regions.is_empty());
    assert_eq!(renderer.scene().planet_labels().count(), 0);
    assert_eq!(tooltip_count(&doc), 0);
    assert!(!renderer.to_svg().contains("kundali-planet"));
}

#[test]
fn test_failed_redraw_clears_previous_chart() {
    let doc = Rc::new(RefCell::new(Document::new()));
    let mut renderer = ChartRenderer::new(Rc::clone(&doc));
    renderer.draw(&leo_chart());
    renderer.pointer_enter(0, Point::new(0.0, 0.0));

    let outcome = renderer.draw(&ChartVisualizationData::default());
    assert_eq!(outcome, DrawOutcome::Blank(LayoutError::EmptyPayload));
    assert!(renderer.scene().is_blank());
    assert!(renderer.hovered().is_none());
    assert_eq!(tooltip_count(&doc), 0);
}

#[test]
fn test_svg_root_carries_instance_id() {
    let doc = Rc::new(RefCell::new(Document::new()));
    let mut renderer = ChartRenderer::new(Rc::clone(&doc));
    renderer.draw(&leo_chart());
    let svg = renderer.to_svg();
    assert!(svg.contains(&format!("id=\"{}\"", renderer.id())));
}
