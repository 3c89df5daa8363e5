use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterStep {
    Advanced(u32), // New displayed value
    Done,          // Target reached, stop stepping
}

/// Displayed value of one stat counter ramping up to its declared target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterState {
    current: u32,
    target: u32,
    increment: u32,
}

impl CounterState {
    pub fn new(initial: u32, target: u32, speed: u32) -> Result<Self, ConfigError> {
        if speed == 0 {
            return Err(ConfigError::ZeroSpeed);
        }
        Ok(Self {
            current: initial,
            target,
            increment: target.div_ceil(speed),
        })
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn step(&mut self) -> CounterStep {
        if self.current >= self.target {
            return CounterStep::Done;
        }
        self.current = self.current.saturating_add(self.increment).min(self.target);
        CounterStep::Advanced(self.current)
    }
}
