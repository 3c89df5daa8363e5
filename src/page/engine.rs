use raylib::prelude::*;
use tracing::{debug, info};
use crate::carousel::engine::CarouselEngine;
use crate::constants::*;
use crate::counter::engine::CounterEngine;
use crate::engine::{Engine, Key, Timers};
use crate::error::ConfigError;
use crate::nav::{NavAction, NavMenu};
use crate::newsletter::NewsletterForm;
use crate::page::content::{PageContent, SectionId};
use crate::page::layout::Layout;
use crate::page::sections::{FeaturesSection, FooterSection, HeroSection};
use crate::visibility::{Span, Visibility};

pub const SECTION_ORDER: [SectionId; 6] = [
    SectionId::Hero,
    SectionId::Features,
    SectionId::Stats,
    SectionId::Testimonials,
    SectionId::Newsletter,
    SectionId::Footer,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub auto_advance_interval: f32,
    pub counter_speed: u32,
    pub counter_step_delay: f32,
    pub counter_threshold: f32,
}

impl Settings {
    pub fn new(auto_advance_interval: f32, counter_speed: u32) -> Result<Self, ConfigError> {
        if !auto_advance_interval.is_finite() || auto_advance_interval < MIN_AUTO_ADVANCE_INTERVAL {
            return Err(ConfigError::InvalidInterval(auto_advance_interval));
        }
        if counter_speed == 0 {
            return Err(ConfigError::ZeroSpeed);
        }
        Ok(Self {
            auto_advance_interval,
            counter_speed,
            counter_step_delay: COUNTER_STEP_DELAY,
            counter_threshold: COUNTER_THRESHOLD,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_advance_interval: AUTO_ADVANCE_INTERVAL,
            counter_speed: COUNTER_SPEED,
            counter_step_delay: COUNTER_STEP_DELAY,
            counter_threshold: COUNTER_THRESHOLD,
        }
    }
}

/// Input gathered by the host for one frame.
#[derive(Debug, Clone)]
pub struct FrameInput {
    pub dt: f32,
    pub screen_width: f32,
    pub screen_height: f32,
    pub mouse: Vector2,
    pub clicked: bool,
    pub wheel: f32,
    pub keys: Vec<Key>,
}

struct Sections {
    hero: HeroSection,
    features: FeaturesSection,
    stats: CounterEngine,
    testimonials: CarouselEngine,
    newsletter: NewsletterForm,
    footer: FooterSection,
}

impl Sections {
    // Same order as SECTION_ORDER
    fn all(&self) -> [&dyn Engine; 6] {
        [&self.hero, &self.features, &self.stats, &self.testimonials, &self.newsletter, &self.footer]
    }

    fn all_mut(&mut self) -> [&mut dyn Engine; 6] {
        [
            &mut self.hero,
            &mut self.features,
            &mut self.stats,
            &mut self.testimonials,
            &mut self.newsletter,
            &mut self.footer,
        ]
    }
}

pub struct PageEngine {
    nav: NavMenu,
    sections: Sections,
    layout: Layout,
    timers: Timers,

    scroll: f32,
    scroll_tween: Option<ease::Tween>,
    width: f32,
    height: f32,
}

impl PageEngine {
    pub fn new(content: &PageContent, settings: Settings) -> Result<Self, ConfigError> {
        let sections = Sections {
            hero: HeroSection::new(&content.hero),
            features: FeaturesSection::new(&content.features),
            stats: CounterEngine::new(
                &content.stats,
                settings.counter_speed,
                settings.counter_step_delay,
                settings.counter_threshold,
            )?,
            testimonials: CarouselEngine::new(&content.testimonials, settings.auto_advance_interval)?,
            newsletter: NewsletterForm::new(&content.newsletter),
            footer: FooterSection::new(&content.footer),
        };

        let mut page = Self {
            nav: NavMenu::new(&content.site.name, &content.nav),
            sections,
            layout: Layout::new(),
            timers: Timers::new(),
            scroll: 0.0,
            scroll_tween: None,
            width: 0.0,
            height: 0.0,
        };

        for section in page.sections.all_mut() {
            section.start(&mut page.timers);
        }
        info!(
            slides = content.testimonials.slides.len(),
            counters = content.stats.counters.len(),
            interval = settings.auto_advance_interval,
            speed = settings.counter_speed,
            "Page initialized"
        );
        Ok(page)
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Measures the header links once the window can measure text.
    pub fn measure_links(&mut self, measure: impl Fn(&str, i32) -> i32) {
        self.nav.measure_links(measure);
    }

    pub fn update(&mut self, input: &FrameInput) {
        // --- Layout ---
        self.resize(input.screen_width, input.screen_height);

        // --- Input ---
        if input.wheel != 0.0 {
            self.scroll_tween = None;
            self.scroll -= input.wheel * SCROLL_STEP;
        }
        if input.clicked {
            self.click(input.mouse);
        }
        for key in input.keys.iter() {
            // A focused field takes the keyboard for itself
            if self.sections.newsletter.is_focused() {
                self.sections.newsletter.on_key(*key, &mut self.timers);
                continue;
            }
            for section in self.sections.all_mut() {
                section.on_key(*key, &mut self.timers);
            }
        }

        self.update_scroll(input.dt);

        // --- Visibility ---
        let viewport = Span::new(self.scroll, self.height);
        for (section, span) in self.sections.all_mut().into_iter().zip(self.layout.sections.iter()) {
            section.on_visibility(Visibility::of(*span, viewport), &mut self.timers);
        }

        // --- Timers ---
        for event in self.timers.advance(input.dt) {
            for section in self.sections.all_mut() {
                section.on_timer(event, &mut self.timers);
            }
        }

        // --- Animations ---
        for section in self.sections.all_mut() {
            section.animate(input.dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(BACKGROUND);

        for (section, span) in self.sections.all().into_iter().zip(self.layout.sections.iter()) {
            let top = span.top - self.scroll();
            if top + span.height() < 0.0 || top > self.height {
                continue;
            }
            section.draw(d, Rectangle::new(0.0, top, self.width, span.height()));
        }

        // Header stays on top of everything
        self.nav.draw(d, self.width);
    }

    fn resize(&mut self, width: f32, height: f32) {
        if width == self.width && height == self.height {
            return;
        }
        debug!(width, height, "Page resized");
        self.width = width;
        self.height = height;
        self.nav.resize(width);

        let heights: Vec<f32> = self.sections.all().iter().map(|section| section.height(width)).collect();
        self.layout.compute_layout(heights);
        self.scroll = self.scroll.clamp(0.0, self.layout.max_scroll(height));
    }

    fn click(&mut self, mouse: Vector2) {
        match self.nav.on_click(mouse, self.width) {
            Some(NavAction::Navigate(target)) => self.scroll_to(target),
            Some(_) => {}
            None => {
                // Every section sees the click, each hit-tests its own controls
                let point = Vector2::new(mouse.x, mouse.y + self.scroll);
                for (section, span) in self.sections.all_mut().into_iter().zip(self.layout.sections.iter()) {
                    let area = Rectangle::new(0.0, span.top, self.width, span.height());
                    section.on_click(point, area, &mut self.timers);
                }
            }
        }
    }

    fn scroll_to(&mut self, target: SectionId) {
        let Some(index) = SECTION_ORDER.iter().position(|id| *id == target) else {
            return;
        };
        let target = self.layout.scroll_to(index, self.height);
        self.scroll_tween = Some(ease::Tween::new(ease::cubic_out, self.scroll, target, SCROLL_DURATION));
    }

    fn update_scroll(&mut self, dt: f32) {
        if let Some(tween) = self.scroll_tween.as_mut() {
            self.scroll = tween.apply(dt);
            if tween.has_completed() {
                self.scroll_tween = None;
            }
        }
        self.scroll = self.scroll.clamp(0.0, self.layout.max_scroll(self.height));
    }
}
