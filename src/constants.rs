use raylib::prelude::Color;

pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 800;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const AUTO_ADVANCE_INTERVAL: f32 = 5.0;   // Time between automatic carousel advances (seconds)
pub const MIN_AUTO_ADVANCE_INTERVAL: f32 = 0.05; // Shortest accepted auto-advance interval (seconds)
pub const TRACK_TRANSITION: f32 = 0.5;        // Duration of the track slide animation (seconds)

pub const COUNTER_SPEED: u32 = 200;           // Divisor of the counter target, larger is smoother
pub const COUNTER_STEP_DELAY: f32 = 0.0;      // Delay between counter steps (seconds), zero means every tick
pub const COUNTER_THRESHOLD: f32 = 0.5;       // Visible fraction of the stats section that starts the counters

pub const REVEAL_VIEWPORT_DIVISOR: f32 = 1.3;  // A section reveals once its top is above viewport height / 1.3
pub const REVEAL_DURATION: f32 = 0.6;         // Fade-in duration of a revealed section (seconds)
pub const REVEAL_STAGGER: f32 = 0.15;         // Extra delay per feature card, as a fraction of the fade-in
pub const REVEAL_OFFSET: f32 = 40.0;          // Vertical slide distance of an unrevealed section (pixels)

pub const SCROLL_STEP: f32 = 80.0;            // Pixels scrolled per mouse wheel notch
pub const SCROLL_DURATION: f32 = 0.6;         // Duration of a nav link scroll (seconds)

pub const MOBILE_BREAKPOINT: f32 = 768.0;     // Below this width the nav collapses behind a toggle
pub const HEADER_HEIGHT: f32 = 64.0;          // Height of the fixed navigation header
pub const CONTENT_MAX_WIDTH: f32 = 1100.0;    // Maximum width of section content
pub const GUTTER: f32 = 24.0;                 // Horizontal padding and grid gap

pub const HERO_HEIGHT: f32 = 420.0;
pub const SECTION_HEADING_HEIGHT: f32 = 90.0;
pub const FEATURE_CARD_HEIGHT: f32 = 170.0;
pub const STAT_CARD_HEIGHT: f32 = 130.0;
pub const TESTIMONIAL_HEIGHT: f32 = 320.0;
pub const NEWSLETTER_HEIGHT: f32 = 300.0;
pub const FOOTER_HEIGHT: f32 = 80.0;
pub const SECTION_PADDING: f32 = 48.0;

pub const EMAIL_MAX_LEN: usize = 64;          // Characters accepted by the newsletter field
pub const STATUS_MESSAGE_DURATION: f32 = 5.0; // How long the newsletter result stays on screen (seconds)

// --- Palette ---
pub const BACKGROUND: Color = Color { r: 248, g: 249, b: 252, a: 255 };
pub const SURFACE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
pub const INK: Color = Color { r: 30, g: 34, b: 48, a: 255 };
pub const MUTED: Color = Color { r: 110, g: 116, b: 136, a: 255 };
pub const ACCENT: Color = Color { r: 79, g: 70, b: 229, a: 255 };
pub const ACCENT_DARK: Color = Color { r: 55, g: 48, b: 163, a: 255 };
pub const SUCCESS: Color = Color { r: 22, g: 163, b: 74, a: 255 };
pub const DANGER: Color = Color { r: 220, g: 38, b: 38, a: 255 };
pub const BORDER: Color = Color { r: 226, g: 228, b: 236, a: 255 };
