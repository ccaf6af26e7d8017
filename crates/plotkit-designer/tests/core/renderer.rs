use plotkit_core::{AppState, Element, ElementId};
use plotkit_designer::layout_state::{add_element, move_element};
use plotkit_designer::renderer::{
    dimension_labels, element_label, format_meters, rasterize, render_commands, DrawCommand,
    LandEdge, RenderScale, ELEMENT_FILL, LABEL_FONT_SIZE,
};

fn shed() -> AppState {
    let state = add_element(&AppState::new(), 10.0, 20.0, Some("Shed"));
    let id = state.elements[0].id;
    move_element(&state, id, 30.0, 40.0)
}

#[test]
fn test_command_layout() {
    let state = shed();
    let commands = render_commands(state.land_width, state.land_height, &state.elements, 5.0);

    assert_eq!(commands.len(), 4);
    assert_eq!(
        commands[0],
        DrawCommand::Clear {
            width: 500.0,
            height: 500.0
        }
    );
    assert!(matches!(
        commands[1],
        DrawCommand::StrokeRect { width, height, .. } if width == 500.0 && height == 500.0
    ));
    assert_eq!(
        commands[2],
        DrawCommand::FillRect {
            x: 150.0,
            y: 200.0,
            width: 50.0,
            height: 100.0,
            color: ELEMENT_FILL,
        }
    );
    match &commands[3] {
        DrawCommand::Text { text, x, y, .. } => {
            assert_eq!(text, "10m x 20m");
            assert_eq!((*x, *y), (175.0, 250.0));
        }
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn test_commands_follow_element_order() {
    let state = add_element(&AppState::new(), 1.0, 1.0, Some("a"));
    let state = add_element(&state, 2.0, 2.0, Some("b"));
    let commands = render_commands(100.0, 100.0, &state.elements, 1.0);

    assert_eq!(commands.len(), 2 + 2 * 2);
    assert!(matches!(commands[2], DrawCommand::FillRect { width, .. } if width == 1.0));
    assert!(matches!(commands[4], DrawCommand::FillRect { width, .. } if width == 2.0));
}

#[test]
fn test_render_is_deterministic() {
    let state = shed();
    let a = render_commands(state.land_width, state.land_height, &state.elements, 3.0);
    let b = render_commands(state.land_width, state.land_height, &state.elements, 3.0);
    assert_eq!(a, b);
}

#[test]
fn test_format_meters() {
    assert_eq!(format_meters(10.0), "10");
    assert_eq!(format_meters(2.5), "2.5");
    assert_eq!(format_meters(-0.0), "0");

    let element = Element::new(ElementId(1), "x", 1.5, 3.0);
    assert_eq!(element_label(&element), "1.5m x 3m");
}

#[test]
fn test_render_scale_breakpoint() {
    let scale = RenderScale::default();
    assert_eq!(scale.scale_for(1280), 5.0);
    assert_eq!(scale.scale_for(769), 5.0);
    assert_eq!(scale.scale_for(768), 3.0);
    assert_eq!(scale.scale_for(375), 3.0);
}

#[test]
fn test_rasterize_size_and_fill() {
    let state = add_element(&AppState::new(), 10.0, 10.0, None);
    let commands = render_commands(20.0, 10.0, &state.elements, 4.0);
    let image = rasterize(&commands);

    assert_eq!(image.dimensions(), (80, 40));
    // Corner of the element, away from border and label.
    let pixel = image.get_pixel(3, 3);
    assert_eq!(pixel[0], 0);
    assert!(pixel[1] > 100);
    assert!(pixel[3] > 100 && pixel[3] < 200);
    // Outside any element, inside the border.
    assert_eq!(image.get_pixel(60, 20)[3], 0);
}

#[test]
fn test_rasterize_empty_surface() {
    let commands = render_commands(0.0, 10.0, &[], 5.0);
    assert_eq!(rasterize(&commands).dimensions(), (0, 0));
    assert_eq!(rasterize(&[]).dimensions(), (0, 0));
}

#[test]
fn test_dimension_labels_sit_on_each_edge() {
    let labels = dimension_labels(20.0, 12.5, 4.0);
    let half_line = f64::from(LABEL_FONT_SIZE) / 2.0;

    let placed: Vec<(LandEdge, &str, f64, f64)> = labels
        .iter()
        .map(|command| match command {
            DrawCommand::DimensionLabel {
                text, edge, x, y, ..
            } => (*edge, text.as_str(), *x, *y),
            other => panic!("expected dimension label, got {:?}", other),
        })
        .collect();

    assert_eq!(
        placed,
        vec![
            (LandEdge::Top, "20m", 40.0, 4.0 + half_line),
            (LandEdge::Bottom, "20m", 40.0, 50.0 - 4.0 - half_line),
            (LandEdge::Left, "12.5m", 4.0, 25.0),
            (LandEdge::Right, "12.5m", 76.0, 25.0),
        ]
    );
}

#[test]
fn test_dimension_labels_leave_element_commands_alone() {
    let state = shed();
    let mut commands = render_commands(state.land_width, state.land_height, &state.elements, 5.0);
    assert_eq!(commands.len(), 2 + 2 * state.elements.len());

    commands.extend(dimension_labels(state.land_width, state.land_height, 5.0));
    let image = rasterize(&commands);
    assert_eq!(image.dimensions(), (500, 500));
}
