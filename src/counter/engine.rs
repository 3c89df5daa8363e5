use raylib::prelude::*;
use tracing::{debug, info};
use crate::constants::*;
use crate::counter::state::{CounterState, CounterStep};
use crate::engine::{Engine, TimerEvent, Timers};
use crate::error::ConfigError;
use crate::page::content::Stats;
use crate::page::layout::grid;
use crate::page::text::{draw_centered, faded};
use crate::reveal::Reveal;
use crate::timer::TimerId;
use crate::visibility::{Visibility, VisibilityObserver};

pub struct StatCounter {
    pub label: String,
    pub state: CounterState,
    step_timer: Option<TimerId>,
}

pub struct CounterEngine {
    heading: String,
    counters: Vec<StatCounter>,
    observer: VisibilityObserver,
    step_delay: f32,
    reveal: Reveal,
}

impl CounterEngine {
    // The only place declared counters are checked
    pub fn new(content: &Stats, speed: u32, step_delay: f32, threshold: f32) -> Result<Self, ConfigError> {
        if content.counters.is_empty() {
            return Err(ConfigError::NoCounters);
        }

        let mut counters = Vec::with_capacity(content.counters.len());
        for counter in content.counters.iter() {
            if counter.initial > counter.target {
                return Err(ConfigError::InitialAboveTarget {
                    label: counter.label.clone(),
                    initial: counter.initial,
                    target: counter.target,
                });
            }
            counters.push(StatCounter {
                label: counter.label.clone(),
                state: CounterState::new(counter.initial, counter.target, speed)?,
                step_timer: None,
            });
        }

        Ok(Self {
            heading: content.heading.clone(),
            counters,
            observer: VisibilityObserver::new(threshold),
            step_delay,
            reveal: Reveal::new(content.counters.len()),
        })
    }

    pub fn counters(&self) -> &[StatCounter] {
        &self.counters
    }

    pub fn is_running(&self) -> bool {
        self.counters.iter().any(|counter| counter.step_timer.is_some())
    }

    // Every counter gets its own step loop, so one finishing early never holds up the others
    fn start_counting(&mut self, timers: &mut Timers) {
        info!(counters = self.counters.len(), "Stats in view, starting counters");
        for (index, counter) in self.counters.iter_mut().enumerate() {
            counter.step_timer = Some(timers.every(self.step_delay, TimerEvent::CounterStep(index)));
        }
    }

    fn step(&mut self, index: usize, timers: &mut Timers) {
        let Some(counter) = self.counters.get_mut(index) else {
            return;
        };
        if let CounterStep::Done = counter.state.step() {
            if let Some(id) = counter.step_timer.take() {
                timers.cancel(id);
            }
            debug!(
                label = %counter.label,
                value = counter.state.current(),
                timers = timers.len(),
                "Counter finished"
            );
            if !self.is_running() {
                info!("All counters reached their targets");
            }
        }
    }
}

impl Engine for CounterEngine {
    fn name(&self) -> &'static str {
        "stats"
    }

    fn height(&self, width: f32) -> f32 {
        let (_, rows) = grid(self.counters.len(), width, 4, 2);
        SECTION_PADDING * 2.0 + SECTION_HEADING_HEIGHT + rows as f32 * (STAT_CARD_HEIGHT + GUTTER)
    }

    fn on_visibility(&mut self, view: Visibility, timers: &mut Timers) {
        self.reveal.observe(view, self.name());
        if self.observer.observe(view.ratio) {
            self.start_counting(timers);
        }
    }

    fn on_timer(&mut self, event: TimerEvent, timers: &mut Timers) {
        if let TimerEvent::CounterStep(index) = event {
            self.step(index, timers);
        }
    }

    fn animate(&mut self, dt: f32) {
        self.reveal.update(dt);
    }

    fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        d.draw_rectangle_rec(area, ACCENT_DARK);

        let alpha = self.reveal.progress(0);
        draw_centered(d, &self.heading, area.x + area.width * 0.5, area.y + SECTION_PADDING, 36, faded(SURFACE, alpha));

        let (columns, _) = grid(self.counters.len(), area.width, 4, 2);
        let content_width = (area.width - GUTTER * 2.0).min(CONTENT_MAX_WIDTH);
        let left = area.x + (area.width - content_width) * 0.5;
        let cell_width = (content_width - GUTTER * (columns as f32 - 1.0)) / columns as f32;
        let top = area.y + SECTION_PADDING + SECTION_HEADING_HEIGHT;

        for (i, counter) in self.counters().iter().enumerate() {
            let column = i % columns;
            let row = i / columns;
            let x = left + column as f32 * (cell_width + GUTTER);
            let y = top + row as f32 * (STAT_CARD_HEIGHT + GUTTER) + self.reveal.offset(i);
            let item_alpha = self.reveal.progress(i);

            let center_x = x + cell_width * 0.5;
            draw_centered(d, &format_count(counter.state.current()), center_x, y + 20.0, 48, faded(SURFACE, item_alpha));
            draw_centered(d, &counter.label, center_x, y + 82.0, 20, faded(BORDER, item_alpha));
        }
    }
}

// 120000 -> "120,000"
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::content::StatCounter as Declared;

    fn stats(targets: &[u32]) -> Stats {
        Stats {
            heading: "Numbers".into(),
            counters: targets
                .iter()
                .map(|&target| Declared { label: format!("t{target}"), target, initial: 0 })
                .collect(),
        }
    }

    fn engine(targets: &[u32]) -> CounterEngine {
        CounterEngine::new(&stats(targets), COUNTER_SPEED, COUNTER_STEP_DELAY, COUNTER_THRESHOLD).unwrap()
    }

    fn seen(ratio: f32) -> Visibility {
        Visibility { ratio, screen_top: 0.0, viewport_height: 800.0 }
    }

    // One event loop tick: fire due timers and hand them to the engine
    fn tick(engine: &mut CounterEngine, timers: &mut Timers) {
        for event in timers.advance(1.0 / 60.0) {
            engine.on_timer(event, timers);
        }
    }

    #[test]
    fn nothing_moves_before_the_section_is_half_visible() {
        let mut timers = Timers::new();
        let mut engine = engine(&[1000]);

        engine.on_visibility(seen(0.3), &mut timers);
        for _ in 0..10 {
            tick(&mut engine, &mut timers);
        }
        assert_eq!(engine.counters()[0].state.current(), 0);
        assert!(!engine.is_running());
    }

    #[test]
    fn ramps_to_target_one_step_per_tick() {
        let mut timers = Timers::new();
        let mut engine = engine(&[1000]);
        engine.on_visibility(seen(0.5), &mut timers);

        for k in 1..=200u32 {
            tick(&mut engine, &mut timers);
            assert_eq!(engine.counters()[0].state.current(), (5 * k).min(1000));
        }
        assert!(engine.is_running());

        // The next tick sees the target reached and stops the loop
        tick(&mut engine, &mut timers);
        assert!(!engine.is_running());
        assert_eq!(timers.len(), 0);
        assert_eq!(engine.counters()[0].state.current(), 1000);
    }

    #[test]
    fn zero_target_stops_on_first_check() {
        let mut timers = Timers::new();
        let mut engine = engine(&[0]);
        engine.on_visibility(seen(1.0), &mut timers);

        tick(&mut engine, &mut timers);
        assert_eq!(engine.counters()[0].state.current(), 0);
        assert!(!engine.is_running());
    }

    #[test]
    fn counters_finish_independently() {
        let mut timers = Timers::new();
        let mut engine = engine(&[10, 1000]);
        engine.on_visibility(seen(1.0), &mut timers);

        // ceil(10 / 200) = 1, so the small counter needs 10 steps and one more to stop
        for _ in 0..11 {
            tick(&mut engine, &mut timers);
        }
        assert_eq!(engine.counters()[0].state.current(), 10);
        assert_eq!(engine.counters()[1].state.current(), 55);
        assert_eq!(timers.len(), 1);

        for _ in 0..200 {
            tick(&mut engine, &mut timers);
        }
        assert_eq!(engine.counters()[1].state.current(), 1000);
        assert!(!engine.is_running());
    }

    #[test]
    fn second_trigger_has_no_effect() {
        let mut timers = Timers::new();
        let mut engine = engine(&[1000]);

        engine.on_visibility(seen(0.8), &mut timers);
        engine.on_visibility(seen(0.9), &mut timers);
        assert_eq!(timers.len(), 1);

        let mut ticks = 0;
        while engine.is_running() {
            tick(&mut engine, &mut timers);
            ticks += 1;
        }
        assert_eq!(ticks, 201);

        // Scrolling away and back again does not restart anything
        engine.on_visibility(seen(0.0), &mut timers);
        engine.on_visibility(seen(1.0), &mut timers);
        assert!(!engine.is_running());
        assert_eq!(engine.counters()[0].state.current(), 1000);
    }

    #[test]
    fn carousel_events_are_ignored() {
        let mut timers = Timers::new();
        let mut engine = engine(&[1000]);
        engine.on_timer(TimerEvent::CarouselAdvance, &mut timers);
        assert_eq!(engine.counters()[0].state.current(), 0);
    }

    #[test]
    fn empty_region_and_bad_counters_are_rejected() {
        let err = CounterEngine::new(&stats(&[]), 200, 0.0, 0.5).err();
        assert!(matches!(err, Some(ConfigError::NoCounters)));

        let err = CounterEngine::new(&stats(&[10]), 0, 0.0, 0.5).err();
        assert!(matches!(err, Some(ConfigError::ZeroSpeed)));

        let mut declared = stats(&[10]);
        declared.counters[0].initial = 11;
        let err = CounterEngine::new(&declared, 200, 0.0, 0.5).err();
        assert!(matches!(err, Some(ConfigError::InitialAboveTarget { .. })));
    }

    #[test]
    fn counts_are_grouped_by_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(24500), "24,500");
        assert_eq!(format_count(120000), "120,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
