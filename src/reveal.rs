use raylib::prelude::*;
use tracing::debug;
use crate::constants::*;
use crate::visibility::Visibility;

// Fade and slide a section in the first time its top scrolls above
// viewport height / REVEAL_VIEWPORT_DIVISOR

struct RevealItem {
    delay: f32, // Remaining stagger before the fade starts
    tween: ease::Tween,
    progress: f32,
}

pub struct Reveal {
    items: Vec<RevealItem>,
    triggered: bool,
}

impl Reveal {
    /// A reveal for `count` items, each starting a little after the previous one.
    pub fn new(count: usize) -> Self {
        let items = (0..count.max(1))
            .map(|i| RevealItem {
                delay: i as f32 * REVEAL_STAGGER * REVEAL_DURATION,
                tween: ease::Tween::new(ease::cubic_out, 0.0, 1.0, REVEAL_DURATION),
                progress: 0.0,
            })
            .collect();
        Self { items, triggered: false }
    }

    pub fn observe(&mut self, view: Visibility, name: &str) {
        if !self.triggered && view.screen_top < view.viewport_height / REVEAL_VIEWPORT_DIVISOR {
            debug!(section = name, "Revealing section");
            self.triggered = true;
        }
    }

    pub fn update(&mut self, dt: f32) {
        if !self.triggered {
            return;
        }
        for item in self.items.iter_mut() {
            let mut dt = dt;
            if item.delay > 0.0 {
                let waited = item.delay.min(dt);
                item.delay -= waited;
                dt -= waited;
                if item.delay > 0.0 {
                    continue;
                }
            }
            item.progress = item.tween.apply(dt);
        }
    }

    pub fn progress(&self, index: usize) -> f32 {
        self.items.get(index).map_or(0.0, |item| item.progress)
    }

    pub fn offset(&self, index: usize) -> f32 {
        (1.0 - self.progress(index)) * REVEAL_OFFSET
    }
}
