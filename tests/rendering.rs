use eframe_whiteboard::{Document, Renderer, Shape, ShapeStampKind, Surface, Whiteboard, WhiteboardConfig};
use egui::{Color32, pos2};

fn three_shape_document() -> Document {
    let mut document = Document::new();
    document.push(Shape::stamp(ShapeStampKind::Rectangle, Color32::RED, 3.0));
    document.push(Shape::stamp(ShapeStampKind::Circle, Color32::BLUE, 5.0));
    document.push(Shape::freehand(
        pos2(20.0, 20.0),
        vec![pos2(20.0, 20.0), pos2(60.0, 80.0), pos2(120.0, 40.0)],
        Color32::BLACK,
        2.0,
    ));
    document
}

#[test]
fn test_rendering_twice_is_deterministic() {
    let document = three_shape_document();
    let mut renderer = Renderer::default();

    let mut first = Surface::new(250, 250).unwrap();
    renderer.render(&document, &mut first);
    let mut second = Surface::new(250, 250).unwrap();
    renderer.render(&document, &mut second);

    assert_eq!(first.data(), second.data());
    assert_eq!(renderer.render_count(), 2);
}

#[test]
fn test_render_replaces_previous_contents() {
    let document = three_shape_document();
    let mut renderer = Renderer::default();

    let mut clean = Surface::new(250, 250).unwrap();
    renderer.render(&document, &mut clean);

    let mut dirty = Surface::new(250, 250).unwrap();
    dirty.fill(Color32::GREEN);
    renderer.render(&document, &mut dirty);

    assert_eq!(clean, dirty);
}

#[test]
fn test_triangle_outline_follows_its_bounding_box() {
    let mut board = Whiteboard::with_surface(WhiteboardConfig {
        surface_width: 250,
        surface_height: 250,
        ..Default::default()
    })
    .unwrap();
    board.add_shape(ShapeStampKind::Triangle);
    let surface = board.surface().unwrap();

    // Apex at the bottom centre of the 100x100 box at (100, 100).
    assert!(surface.pixel(150, 199).unwrap().a() > 0);
    // Top edge joins the two upper corners.
    assert!(surface.pixel(150, 100).unwrap().a() > 0);
    // Interior stays empty.
    assert_eq!(surface.pixel(150, 130).unwrap().a(), 0);
}

#[test]
fn test_undo_removes_pixels_on_redraw() {
    let mut board = Whiteboard::with_surface(WhiteboardConfig {
        surface_width: 250,
        surface_height: 250,
        ..Default::default()
    })
    .unwrap();
    board.add_shape(ShapeStampKind::Circle);
    // Leftmost point of the circle centred at (100, 100) with radius 50.
    assert!(board.surface().unwrap().pixel(50, 100).unwrap().a() > 0);

    board.undo();
    assert_eq!(board.surface().unwrap().pixel(50, 100).unwrap().a(), 0);

    board.redo();
    assert!(board.surface().unwrap().pixel(50, 100).unwrap().a() > 0);
}
