use raylib::prelude::*;
use crate::constants::*;
use crate::page::content::Testimonial;
use crate::page::text::{draw_centered, draw_wrapped, faded};

const CARD_MAX_WIDTH: f32 = 760.0;
const CONTROL_ROOM: f32 = 80.0; // Space kept free for the prev/next controls

pub struct TestimonialSlide {
    pub quote: String,
    pub author: String,
    pub role: String,
}

impl TestimonialSlide {
    pub fn new(testimonial: &Testimonial) -> Self {
        Self {
            quote: testimonial.quote.clone(),
            author: testimonial.author.clone(),
            role: testimonial.role.clone(),
        }
    }

    // `area` is one slide-wide window of the track, already translated
    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle, alpha: f32) {
        let card_width = (area.width - CONTROL_ROOM * 2.0).min(CARD_MAX_WIDTH).max(0.0);
        let card = Rectangle::new(
            area.x + (area.width - card_width) * 0.5,
            area.y + 10.0,
            card_width,
            area.height - 20.0,
        );

        d.draw_rectangle_rounded(card, 0.08, 8, faded(SURFACE, alpha));

        // Opening quote mark
        d.draw_text("\"", (card.x + 28.0) as i32, (card.y + 18.0) as i32, 60, faded(ACCENT, alpha));

        let text_area = Rectangle::new(card.x + 48.0, card.y + 48.0, card.width - 96.0, card.height - 130.0);
        draw_wrapped(d, &self.quote, text_area, 22, 30.0, true, faded(INK, alpha));

        let center_x = card.x + card.width * 0.5;
        draw_centered(d, &self.author, center_x, card.y + card.height - 72.0, 22, faded(INK, alpha));
        draw_centered(d, &self.role, center_x, card.y + card.height - 44.0, 18, faded(MUTED, alpha));
    }
}
