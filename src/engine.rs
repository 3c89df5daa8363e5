use raylib::prelude::*;
use crate::timer::Scheduler;
use crate::visibility::Visibility;

// Everything the page schedules goes through one scheduler. Each section
// picks the events addressed to it and ignores the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    CarouselAdvance,
    CounterStep(usize),
    NewsletterStatusExpired,
}

pub type Timers = Scheduler<TimerEvent>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Enter,
    Backspace,
    Escape,
    Char(char),
}

/// One vertically stacked part of the page. Areas are in screen coordinates
/// for drawing and in page coordinates for input; both share the width.
pub trait Engine {
    fn name(&self) -> &'static str;
    fn height(&self, width: f32) -> f32;

    fn start(&mut self, _timers: &mut Timers) {}
    fn on_visibility(&mut self, _view: Visibility, _timers: &mut Timers) {}
    fn on_click(&mut self, _point: Vector2, _area: Rectangle, _timers: &mut Timers) {}
    fn on_key(&mut self, _key: Key, _timers: &mut Timers) {}
    fn on_timer(&mut self, _event: TimerEvent, _timers: &mut Timers) {}
    fn animate(&mut self, _dt: f32) {}

    fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle);
}

pub fn contains(area: Rectangle, point: Vector2) -> bool {
    point.x >= area.x
        && point.x <= area.x + area.width
        && point.y >= area.y
        && point.y <= area.y + area.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_includes_edges() {
        let area = Rectangle::new(10.0, 20.0, 100.0, 50.0);
        assert!(contains(area, Vector2::new(10.0, 20.0)));
        assert!(contains(area, Vector2::new(110.0, 70.0)));
        assert!(!contains(area, Vector2::new(9.0, 40.0)));
        assert!(!contains(area, Vector2::new(50.0, 71.0)));
    }
}
