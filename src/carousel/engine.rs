use raylib::prelude::*;
use tracing::debug;
use crate::carousel::slide::TestimonialSlide;
use crate::carousel::state::{CarouselState, TrackTransform};
use crate::constants::*;
use crate::engine::{contains, Engine, Key, TimerEvent, Timers};
use crate::error::ConfigError;
use crate::page::content::Testimonials;
use crate::page::text::{draw_centered, faded};
use crate::reveal::Reveal;
use crate::timer::TimerId;
use crate::visibility::Visibility;

const CONTROL_RADIUS: f32 = 22.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Timer,
    Control,
    Keyboard,
}

// Eases the drawn track position toward the last rendered transform
pub struct Track {
    offset: f32, // Percent of one slide width
    tween: Option<ease::Tween>,
}

impl Track {
    pub fn new() -> Self {
        Self { offset: 0.0, tween: None }
    }

    // Starts from wherever the track is drawn now, mid-slide included
    pub fn apply(&mut self, transform: TrackTransform) {
        self.tween = Some(ease::Tween::new(
            ease::cubic_out,
            self.offset,
            transform.translate_percent,
            TRACK_TRANSITION,
        ));
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(tween) = self.tween.as_mut() {
            self.offset = tween.apply(dt);
            if tween.has_completed() {
                self.tween = None;
            }
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }
}

pub struct CarouselEngine {
    heading: String,
    slides: Vec<TestimonialSlide>,
    state: CarouselState,
    track: Track,
    interval: f32,
    auto_advance: Option<TimerId>,
    reveal: Reveal,
}

impl CarouselEngine {
    pub fn new(content: &Testimonials, interval: f32) -> Result<Self, ConfigError> {
        let state = CarouselState::new(content.slides.len())?;
        Ok(Self {
            heading: content.heading.clone(),
            slides: content.slides.iter().map(TestimonialSlide::new).collect(),
            state,
            track: Track::new(),
            interval,
            auto_advance: None,
            reveal: Reveal::new(1),
        })
    }

    pub fn current(&self) -> usize {
        self.state.current()
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn advance(&mut self, trigger: Trigger) {
        let transform = self.state.advance();
        self.track.apply(transform);
        debug!(index = self.state.current(), ?trigger, "Carousel advanced");
    }

    pub fn retreat(&mut self, trigger: Trigger) {
        let transform = self.state.retreat();
        self.track.apply(transform);
        debug!(index = self.state.current(), ?trigger, "Carousel retreated");
    }

    fn track_area(area: Rectangle) -> Rectangle {
        Rectangle::new(
            area.x,
            area.y + SECTION_PADDING + SECTION_HEADING_HEIGHT,
            area.width,
            TESTIMONIAL_HEIGHT,
        )
    }

    // Centers of the previous and next controls
    fn controls(area: Rectangle) -> (Vector2, Vector2) {
        let track = Self::track_area(area);
        let y = track.y + track.height * 0.5;
        (
            Vector2::new(track.x + GUTTER + CONTROL_RADIUS, y),
            Vector2::new(track.x + track.width - GUTTER - CONTROL_RADIUS, y),
        )
    }

    fn control_bounds(center: Vector2) -> Rectangle {
        Rectangle::new(
            center.x - CONTROL_RADIUS,
            center.y - CONTROL_RADIUS,
            CONTROL_RADIUS * 2.0,
            CONTROL_RADIUS * 2.0,
        )
    }

    fn draw_control(d: &mut RaylibDrawHandle, center: Vector2, label: &str, alpha: f32) {
        d.draw_circle(center.x as i32, center.y as i32, CONTROL_RADIUS, faded(ACCENT, alpha));
        draw_centered(d, label, center.x, center.y - 11.0, 22, faded(SURFACE, alpha));
    }
}

impl Engine for CarouselEngine {
    fn name(&self) -> &'static str {
        "testimonials"
    }

    fn height(&self, _width: f32) -> f32 {
        SECTION_PADDING * 2.0 + SECTION_HEADING_HEIGHT + TESTIMONIAL_HEIGHT + 30.0
    }

    // Runs for the lifetime of the page, user input neither pauses nor resets it
    fn start(&mut self, timers: &mut Timers) {
        if self.auto_advance.is_none() {
            self.auto_advance = Some(timers.every(self.interval, TimerEvent::CarouselAdvance));
        }
    }

    fn on_visibility(&mut self, view: Visibility, _timers: &mut Timers) {
        self.reveal.observe(view, self.name());
    }

    fn on_click(&mut self, point: Vector2, area: Rectangle, _timers: &mut Timers) {
        let (prev, next) = Self::controls(area);
        if contains(Self::control_bounds(prev), point) {
            self.retreat(Trigger::Control);
        } else if contains(Self::control_bounds(next), point) {
            self.advance(Trigger::Control);
        }
    }

    fn on_key(&mut self, key: Key, _timers: &mut Timers) {
        match key {
            Key::Left => self.retreat(Trigger::Keyboard),
            Key::Right => self.advance(Trigger::Keyboard),
            _ => {}
        }
    }

    fn on_timer(&mut self, event: TimerEvent, _timers: &mut Timers) {
        if event == TimerEvent::CarouselAdvance {
            self.advance(Trigger::Timer);
        }
    }

    fn animate(&mut self, dt: f32) {
        self.track.update(dt);
        self.reveal.update(dt);
    }

    fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        let alpha = self.reveal.progress(0);
        let lift = self.reveal.offset(0);

        draw_centered(d, &self.heading, area.x + area.width * 0.5, area.y + SECTION_PADDING + lift, 36, faded(INK, alpha));

        // Slide i sits at (i + offset / 100) slide widths from the track origin
        let track = Self::track_area(area);
        for (i, slide) in self.slides.iter().enumerate() {
            let x = track.x + track.width * (i as f32 + self.track().offset() / 100.0);
            if x + track.width <= track.x || x >= track.x + track.width {
                continue;
            }
            slide.draw(d, Rectangle::new(x, track.y + lift, track.width, track.height), alpha);
        }

        let (prev, next) = Self::controls(area);
        Self::draw_control(d, prev, "<", alpha);
        Self::draw_control(d, next, ">", alpha);

        // Position dots
        let spacing = 18.0;
        let dots_width = spacing * (self.slides.len() as f32 - 1.0);
        let dots_y = track.y + track.height + 16.0;
        for i in 0..self.slides.len() {
            let x = area.x + area.width * 0.5 - dots_width * 0.5 + spacing * i as f32;
            let color = if i == self.current() { ACCENT } else { BORDER };
            d.draw_circle(x as i32, dots_y as i32, 5.0, faded(color, alpha));
        }
    }
}
