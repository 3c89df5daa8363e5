// Vertical intersection between a section and the scrolled viewport

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub bottom: f32,
}

impl Span {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, bottom: top + height.max(0.0) }
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Fraction of `element` inside `viewport`, in `[0, 1]`.
pub fn intersection_ratio(element: Span, viewport: Span) -> f32 {
    let height = element.height();
    if height <= 0.0 {
        let inside = element.top >= viewport.top && element.top <= viewport.bottom;
        return if inside { 1.0 } else { 0.0 };
    }

    let overlap = element.bottom.min(viewport.bottom) - element.top.max(viewport.top);
    (overlap / height).clamp(0.0, 1.0)
}

/// Where a section sits relative to the viewport in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub ratio: f32,
    pub screen_top: f32, // Section top measured from the top of the window
    pub viewport_height: f32,
}

impl Visibility {
    pub fn of(element: Span, viewport: Span) -> Self {
        Self {
            ratio: intersection_ratio(element, viewport),
            screen_top: element.top - viewport.top,
            viewport_height: viewport.height(),
        }
    }
}

/// Fires once, the first time the observed ratio reaches the threshold, and
/// ignores everything after that.
#[derive(Debug, Clone)]
pub struct VisibilityObserver {
    threshold: f32,
    observing: bool,
}

impl VisibilityObserver {
    pub fn new(threshold: f32) -> Self {
        Self { threshold, observing: true }
    }

    pub fn observe(&mut self, ratio: f32) -> bool {
        if self.observing && ratio >= self.threshold {
            self.observing = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_of_partially_visible_element() {
        let viewport = Span::new(0.0, 800.0);
        assert_eq!(intersection_ratio(Span::new(600.0, 400.0), viewport), 0.5);
        assert_eq!(intersection_ratio(Span::new(100.0, 200.0), viewport), 1.0);
        assert_eq!(intersection_ratio(Span::new(900.0, 200.0), viewport), 0.0);
        assert_eq!(intersection_ratio(Span::new(-300.0, 400.0), viewport), 0.25);
    }

    #[test]
    fn element_taller_than_viewport_is_capped_by_the_viewport() {
        let ratio = intersection_ratio(Span::new(0.0, 1600.0), Span::new(0.0, 800.0));
        assert_eq!(ratio, 0.5);
    }

    #[test]
    fn zero_height_element_is_visible_only_inside() {
        let viewport = Span::new(100.0, 100.0);
        assert_eq!(intersection_ratio(Span::new(150.0, 0.0), viewport), 1.0);
        assert_eq!(intersection_ratio(Span::new(250.0, 0.0), viewport), 0.0);
    }

    #[test]
    fn visibility_measures_from_the_window_top() {
        let view = Visibility::of(Span::new(1000.0, 400.0), Span::new(700.0, 800.0));
        assert_eq!(view.screen_top, 300.0);
        assert_eq!(view.viewport_height, 800.0);
        assert_eq!(view.ratio, 1.0);
    }

    #[test]
    fn observer_fires_exactly_once_at_threshold() {
        let mut observer = VisibilityObserver::new(0.5);

        assert!(!observer.observe(0.49));
        assert!(observer.observe(0.5));
        assert!(!observer.observe(1.0));
        assert!(!observer.observe(0.0));
        assert!(!observer.observe(0.75));
    }
}
