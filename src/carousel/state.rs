use crate::error::ConfigError;

/// Index of the testimonial in view. `current` always stays in `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    current: usize,
}

/// Track translation, as a percentage of one slide width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackTransform {
    pub translate_percent: f32,
}

impl CarouselState {
    pub fn new(len: usize) -> Result<Self, ConfigError> {
        if len == 0 {
            return Err(ConfigError::NoSlides);
        }
        Ok(Self { len, current: 0 })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn advance(&mut self) -> TrackTransform {
        self.current = (self.current + 1) % self.len;
        self.render()
    }

    pub fn retreat(&mut self) -> TrackTransform {
        self.current = (self.current + self.len - 1) % self.len;
        self.render()
    }

    pub fn render(&self) -> TrackTransform {
        TrackTransform {
            translate_percent: -(self.current as f32) * 100.0,
        }
    }
}
