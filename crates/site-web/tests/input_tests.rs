// Host-side tests for the pure pointer math.
// The main crate is wasm-only, so the pure module is included directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn pointer_center_maps_to_origin() {
    let p = normalized_pointer(400.0, 300.0, 800.0, 600.0);
    assert!(p.x.abs() < 1e-6);
    assert!(p.y.abs() < 1e-6);
}

#[test]
fn pointer_corners_map_to_unit_square() {
    let tl = normalized_pointer(0.0, 0.0, 800.0, 600.0);
    assert_eq!((tl.x, tl.y), (-1.0, 1.0));

    let br = normalized_pointer(800.0, 600.0, 800.0, 600.0);
    assert_eq!((br.x, br.y), (1.0, -1.0));
}

#[test]
fn pointer_y_axis_points_up() {
    // Moving the cursor down the screen lowers the normalized y.
    let high = normalized_pointer(100.0, 100.0, 800.0, 600.0);
    let low = normalized_pointer(100.0, 500.0, 800.0, 600.0);
    assert!(high.y > low.y);
}

#[test]
fn degenerate_viewport_does_not_divide_by_zero() {
    let p = normalized_pointer(10.0, 10.0, 0.0, 0.0);
    assert!(p.x.is_finite());
    assert!(p.y.is_finite());
}

#[test]
fn mouse_state_normalizes_like_raw_coords() {
    let mouse = MouseState {
        x: 200.0,
        y: 150.0,
        down: false,
    };
    let via_state = mouse_normalized(&mouse, 800.0, 600.0);
    let direct = normalized_pointer(200.0, 150.0, 800.0, 600.0);
    assert_eq!(via_state, direct);
}
