use raylib::prelude::*;
use crate::constants::*;
use crate::engine::{Engine, Timers};
use crate::page::content::{Feature, Footer, Hero};
use crate::page::layout::grid;
use crate::page::text::{draw_centered, draw_wrapped, faded};
use crate::reveal::Reveal;
use crate::visibility::Visibility;

pub struct HeroSection {
    hero: Hero,
}

impl HeroSection {
    pub fn new(hero: &Hero) -> Self {
        Self { hero: hero.clone() }
    }
}

impl Engine for HeroSection {
    fn name(&self) -> &'static str {
        "hero"
    }

    fn height(&self, _width: f32) -> f32 {
        HERO_HEIGHT
    }

    fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        d.draw_rectangle_rec(area, ACCENT);

        let width = (area.width - GUTTER * 2.0).min(CONTENT_MAX_WIDTH * 0.8);
        let x = area.x + (area.width - width) * 0.5;
        let title_size = if area.width < MOBILE_BREAKPOINT { 34 } else { 48 };

        let title = Rectangle::new(x, area.y + 110.0, width, 140.0);
        let used = draw_wrapped(d, &self.hero.title, title, title_size, title_size as f32 * 1.2, true, SURFACE);

        let subtitle = Rectangle::new(x, title.y + used + 24.0, width, 100.0);
        draw_wrapped(d, &self.hero.subtitle, subtitle, 22, 30.0, true, BORDER);
    }
}

pub struct FeaturesSection {
    features: Vec<Feature>,
    reveal: Reveal,
}

impl FeaturesSection {
    pub fn new(features: &[Feature]) -> Self {
        Self { features: features.to_vec(), reveal: Reveal::new(features.len()) }
    }
}

impl Engine for FeaturesSection {
    fn name(&self) -> &'static str {
        "features"
    }

    fn height(&self, width: f32) -> f32 {
        let (_, rows) = grid(self.features.len(), width, 3, 1);
        SECTION_PADDING * 2.0 + rows as f32 * (FEATURE_CARD_HEIGHT + GUTTER)
    }

    fn on_visibility(&mut self, view: Visibility, _timers: &mut Timers) {
        self.reveal.observe(view, self.name());
    }

    fn animate(&mut self, dt: f32) {
        self.reveal.update(dt);
    }

    fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        let (columns, _) = grid(self.features.len(), area.width, 3, 1);
        let content_width = (area.width - GUTTER * 2.0).min(CONTENT_MAX_WIDTH);
        let left = area.x + (area.width - content_width) * 0.5;
        let card_width = (content_width - GUTTER * (columns as f32 - 1.0)) / columns as f32;

        // Cards fade in one after another
        for (i, feature) in self.features.iter().enumerate() {
            let alpha = self.reveal.progress(i);
            let x = left + (i % columns) as f32 * (card_width + GUTTER);
            let y = area.y + SECTION_PADDING + (i / columns) as f32 * (FEATURE_CARD_HEIGHT + GUTTER) + self.reveal.offset(i);
            let card = Rectangle::new(x, y, card_width, FEATURE_CARD_HEIGHT);

            d.draw_rectangle_rounded(card, 0.1, 8, faded(SURFACE, alpha));
            d.draw_rectangle_rec(Rectangle::new(card.x, card.y, 6.0, card.height), faded(ACCENT, alpha));
            d.draw_text(&feature.title, (card.x + 28.0) as i32, (card.y + 24.0) as i32, 24, faded(INK, alpha));
            let body = Rectangle::new(card.x + 28.0, card.y + 64.0, card.width - 52.0, card.height - 76.0);
            draw_wrapped(d, &feature.body, body, 18, 24.0, false, faded(MUTED, alpha));
        }
    }
}

pub struct FooterSection {
    footer: Footer,
}

impl FooterSection {
    pub fn new(footer: &Footer) -> Self {
        Self { footer: footer.clone() }
    }
}

impl Engine for FooterSection {
    fn name(&self) -> &'static str {
        "footer"
    }

    fn height(&self, _width: f32) -> f32 {
        FOOTER_HEIGHT
    }

    fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        d.draw_rectangle_rec(area, INK);
        draw_centered(d, &self.footer.text, area.x + area.width * 0.5, area.y + (area.height - 18.0) * 0.5, 18, MUTED);
    }
}
