use glam::Vec2;

/// Latest pointer state shared between the event wiring and the frame
/// loop.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
}

/// Normalize client coordinates to [-1, 1] with +y up, the space the
/// scene's pointer parallax works in.
#[inline]
pub fn normalized_pointer(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new(
        (client_x / w) * 2.0 - 1.0,
        -((client_y / h) * 2.0 - 1.0),
    )
}

#[inline]
pub fn mouse_normalized(mouse: &MouseState, width: f32, height: f32) -> Vec2 {
    normalized_pointer(mouse.x, mouse.y, width, height)
}
