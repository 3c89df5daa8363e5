// Frame driven timers. The host calls `advance` once per frame with the frame
// delta and dispatches the returned events after the call, so handlers are
// free to schedule or cancel timers while dispatching.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
enum Repeat {
    Once,
    Every,
}

#[derive(Debug)]
struct Timer<E> {
    id: TimerId,
    event: E,
    period: f32,
    elapsed: f32,
    repeat: Repeat,
}

#[derive(Debug)]
pub struct Scheduler<E> {
    timers: Vec<Timer<E>>,
    next_id: u64,
}

impl<E: Clone> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            timers: Vec::new(),
            next_id: 0,
        }
    }

    /// Fires `event` once, `delay` seconds from now.
    pub fn once(&mut self, delay: f32, event: E) -> TimerId {
        self.push(delay, event, Repeat::Once)
    }

    /// Fires `event` every `interval` seconds until cancelled. A zero interval
    /// fires once per `advance`.
    pub fn every(&mut self, interval: f32, event: E) -> TimerId {
        self.push(interval, event, Repeat::Every)
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|timer| timer.id != id);
        self.timers.len() != before
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn advance(&mut self, dt: f32) -> Vec<E> {
        let mut fired = Vec::new();

        for timer in self.timers.iter_mut() {
            timer.elapsed += dt.max(0.0);

            match timer.repeat {
                Repeat::Once => {
                    if timer.elapsed >= timer.period {
                        fired.push(timer.event.clone());
                    }
                }
                Repeat::Every if timer.period <= 0.0 => {
                    timer.elapsed = 0.0;
                    fired.push(timer.event.clone());
                }
                Repeat::Every => {
                    // At most one event per frame, periods missed during a stall are dropped
                    if timer.elapsed >= timer.period {
                        timer.elapsed %= timer.period;
                        fired.push(timer.event.clone());
                    }
                }
            }
        }

        self.timers
            .retain(|timer| !(matches!(timer.repeat, Repeat::Once) && timer.elapsed >= timer.period));

        fired
    }

    fn push(&mut self, period: f32, event: E, repeat: Repeat) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            event,
            period: period.max(0.0),
            elapsed: 0.0,
            repeat,
        });
        id
    }
}

impl<E: Clone> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}
