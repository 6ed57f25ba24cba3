use eframe_whiteboard::{
    FreehandCapture, ShapeKind, ShapeStampKind, ToolKind, Whiteboard, WhiteboardConfig,
};
use egui::{Color32, pos2};

fn board_with(capture: FreehandCapture) -> Whiteboard {
    let config = WhiteboardConfig {
        surface_width: 300,
        surface_height: 300,
        freehand_capture: capture,
        ..Default::default()
    };
    Whiteboard::with_surface(config).unwrap()
}

#[test]
fn test_freehand_stroke_commits_origin_and_color() {
    let mut board = board_with(FreehandCapture::OriginOnly);
    board.select_color(Color32::RED);
    board.select_tool(ToolKind::Freehand);

    board.pointer_down(pos2(10.0, 10.0));
    board.pointer_move(pos2(20.0, 20.0));
    board.pointer_up();

    assert_eq!(board.shapes().len(), 1);
    let shape = &board.shapes()[0];
    assert_eq!(shape.color(), Color32::RED);
    assert!(matches!(
        shape.kind(),
        ShapeKind::Freehand { origin, path } if *origin == pos2(10.0, 10.0) && path.is_empty()
    ));
    assert!(!board.is_drawing());
}

#[test]
fn test_full_path_capture_keeps_every_point() {
    let mut board = board_with(FreehandCapture::FullPath);

    board.pointer_down(pos2(10.0, 10.0));
    board.pointer_move(pos2(20.0, 20.0));
    board.pointer_move(pos2(30.0, 20.0));
    board.pointer_up();

    let ShapeKind::Freehand { path, .. } = board.shapes()[0].kind() else {
        panic!("expected a freehand shape");
    };
    assert_eq!(path, &vec![pos2(10.0, 10.0), pos2(20.0, 20.0), pos2(30.0, 20.0)]);

    // The committed path is redrawn, so the midpoint of the first segment is inked.
    let surface = board.surface().unwrap();
    assert!(surface.pixel(15, 15).unwrap().a() > 0);
}

#[test]
fn test_release_without_press_is_ignored() {
    let mut board = board_with(FreehandCapture::OriginOnly);
    board.pointer_up();
    board.pointer_move(pos2(40.0, 40.0));

    assert!(board.shapes().is_empty());
    assert!(!board.can_undo());
}

#[test]
fn test_pointer_leave_discards_half_built_stroke() {
    let mut board = board_with(FreehandCapture::OriginOnly);
    board.pointer_down(pos2(10.0, 10.0));
    board.pointer_move(pos2(50.0, 10.0));
    assert!(board.is_drawing());

    board.pointer_leave();
    assert!(!board.is_drawing());
    board.pointer_up();
    assert!(board.shapes().is_empty());

    // The live segment stays on the surface until the next full redraw.
    assert!(board.surface().unwrap().pixel(30, 10).unwrap().a() > 0);
    board.redraw();
    assert_eq!(board.surface().unwrap().pixel(30, 10).unwrap().a(), 0);
}

#[test]
fn test_switching_tools_cancels_stroke() {
    let mut board = board_with(FreehandCapture::OriginOnly);
    board.pointer_down(pos2(10.0, 10.0));

    board.select_tool(ToolKind::Eraser);
    board.pointer_up();

    assert!(board.shapes().is_empty());
    assert_eq!(board.tool(), ToolKind::Eraser);
}

#[test]
fn test_eraser_commits_nothing() {
    let mut board = board_with(FreehandCapture::OriginOnly);
    board.add_shape(ShapeStampKind::Rectangle);
    board.select_tool(ToolKind::Eraser);

    board.pointer_down(pos2(50.0, 50.0));
    board.pointer_move(pos2(52.0, 52.0));
    board.pointer_up();

    assert_eq!(board.shapes().len(), 1);
    assert_eq!(board.history().undo_stack().len(), 1);
}

#[test]
fn test_erased_pixels_come_back_on_redraw() {
    let mut board = board_with(FreehandCapture::OriginOnly);
    board.add_shape(ShapeStampKind::Rectangle);
    assert!(board.surface().unwrap().pixel(105, 100).unwrap().a() > 0);

    board.select_tool(ToolKind::Eraser);
    board.pointer_down(pos2(110.0, 110.0));
    board.pointer_move(pos2(110.0, 110.0));
    board.pointer_up();
    assert_eq!(board.surface().unwrap().pixel(105, 100).unwrap().a(), 0);

    // Any redraw rebuilds the surface from the shapes alone.
    board.redraw();
    assert!(board.surface().unwrap().pixel(105, 100).unwrap().a() > 0);
}

#[test]
fn test_stroke_width_is_clamped() {
    let mut board = board_with(FreehandCapture::OriginOnly);

    board.select_stroke_width(42.0);
    assert_eq!(board.stroke_width(), 10.0);
    board.select_stroke_width(0.0);
    assert_eq!(board.stroke_width(), 1.0);
    board.select_stroke_width(f32::NAN);
    assert_eq!(board.stroke_width(), 1.0);
}

#[test]
fn test_hex_colors_are_accepted() {
    let mut board = board_with(FreehandCapture::OriginOnly);
    board.select_color_hex("#00ff00").unwrap();
    assert_eq!(board.color(), Color32::from_rgb(0, 255, 0));
    assert!(board.select_color_hex("green").is_err());
    assert_eq!(board.color(), Color32::from_rgb(0, 255, 0));
}

#[test]
fn test_input_before_surface_is_dropped() {
    let mut board = Whiteboard::new(WhiteboardConfig::default());
    board.pointer_down(pos2(10.0, 10.0));
    board.pointer_up();
    assert!(board.shapes().is_empty());

    // Document operations still apply and their redraw waits for the surface.
    board.add_shape(ShapeStampKind::Rectangle);
    assert!(board.redraw_pending());
    assert_eq!(board.render_count(), 0);

    board.bind_surface(300, 300).unwrap();
    assert!(!board.redraw_pending());
    assert!(board.surface().unwrap().pixel(150, 100).unwrap().a() > 0);
}

#[test]
fn test_default_width_is_clamped_into_range() {
    let board = Whiteboard::new(WhiteboardConfig {
        default_stroke_width: 40.0,
        ..Default::default()
    });
    assert_eq!(board.stroke_width(), 10.0);
}

#[test]
fn test_reversed_width_range_does_not_panic() {
    let mut board = Whiteboard::new(WhiteboardConfig {
        min_stroke_width: 8.0,
        max_stroke_width: 4.0,
        ..Default::default()
    });
    board.select_stroke_width(5.0);
    assert_eq!(board.stroke_width(), 5.0);
    board.select_stroke_width(1.0);
    assert_eq!(board.stroke_width(), 4.0);
}
