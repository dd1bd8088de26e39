use glam::Vec3;

// Shared presentation tuning constants used by both the pure logic and
// the web frontend.

// Loading screen
pub const LOADING_FADE_DELAY_MS: i32 = 1000; // wait after window load before fading
pub const LOADING_HIDE_MS: i32 = 500; // fade duration before display:none

// Theme toggle button feedback
pub const THEME_BOUNCE_MS: i32 = 200;

// Mobile menu
pub const MENU_CLOSE_MS: i32 = 300; // hide after the collapse transition

// Mascot and notifications
pub const MASCOT_REVEAL_MS: i32 = 2000;
pub const BUBBLE_HIDE_MS: i32 = 3000;
pub const BUBBLE_HOVER_HIDE_MS: i32 = 1000;
pub const NOTIFICATION_MS: i32 = 3000;
pub const NOTIFICATION_SLIDE_MS: i32 = 500;

// Form flow
pub const FORM_REVERT_MS: i32 = 3000; // success/error back to idle
pub const MESSAGE_MAX_CHARS: usize = 500;
pub const MESSAGE_WARN_FRACTION: f32 = 0.9;

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const SKILL_THRESHOLD: f64 = 0.5;
pub const SKILL_FILL_DELAY_MS: i32 = 200;
pub const SECTION_CELEBRATE_THRESHOLD: f64 = 0.5;

// Scene layout and motion
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_PULL: f32 = 0.5; // pointer offset applied to the camera
pub const CAMERA_SMOOTHING: f32 = 0.05; // exponential damping per frame
pub const POINTER_INFLUENCE: f32 = 0.1; // pointer pull on floating shapes
pub const POSITION_SMOOTHING: f32 = 0.05;
pub const POINTER_SPIN: f32 = 0.01; // extra Y rotation from pointer X
pub const FLOAT_AMPLITUDE: f32 = 0.5;
pub const FIELD_PARTICLE_COUNT: usize = 100;
pub const FIELD_EXTENT: f32 = 20.0;
pub const FIELD_SPIN_Y: f32 = 0.002;
pub const FIELD_SPIN_X: f32 = 0.001;
pub const WAVE_AMPLITUDE: f32 = 0.1;
pub const EMBLEM_SPIN: f32 = 0.005;
pub const EMBLEM_CLONES: usize = 3;
pub const EMBLEM_CLONE_SCALE: f32 = 0.3;

// Transient DOM effects
pub const SPARKLES_PER_BURST: usize = 5;
pub const SPARKLE_LIFETIME_MS: i32 = 1000;
pub const HEART_EVERY_N_CLICKS: u64 = 5;
pub const HEART_LIFETIME_MS: i32 = 1500;
pub const RIPPLE_LIFETIME_MS: i32 = 600;
pub const BURST_PARTICLES: usize = 12;
pub const BURST_LIFETIME_MS: i32 = 800;
pub const CONFETTI_PIECES: usize = 30;
pub const CONFETTI_STAGGER_MS: i32 = 30;
pub const CONFETTI_LIFETIME_MS: i32 = 3000;
pub const FIREWORK_BURSTS: usize = 5;
pub const FIREWORK_SPARKS: usize = 20;
pub const FIREWORK_STAGGER_MS: i32 = 300;
pub const FIREWORK_LIFETIME_MS: i32 = 1000;
pub const EMOJI_TICK_MS: i32 = 3000;
pub const EMOJI_CHANCE: f64 = 0.1;
pub const EMOJI_LIFETIME_MS: i32 = 8000;
pub const RAINBOW_MS: i32 = 3000;
pub const DOUBLE_CLICK_WINDOW_MS: i32 = 500;

// Shake-to-reveal
pub const SHAKE_THRESHOLD: f64 = 30.0;
pub const SHAKE_DEBOUNCE_MS: f64 = 1000.0;
pub const SHAKES_TO_REVEAL: u32 = 3;

// Click milestones
pub const MILESTONE_CONFETTI: u64 = 10;
pub const MILESTONE_FIREWORKS: u64 = 50;
pub const MILESTONE_RAINBOW: u64 = 100;

/// Base positions for the five floating shapes, matching the scene catalog.
pub const SHAPE_BASE_POSITIONS: [[f32; 3]; 5] = [
    [-3.0, 2.0, -2.0],
    [3.0, -1.0, -3.0],
    [-2.0, -2.0, -1.0],
    [2.0, 1.0, -2.0],
    [0.0, 3.0, -4.0],
];

#[inline]
pub fn emblem_home() -> Vec3 {
    Vec3::new(0.0, 0.0, -10.0)
}
