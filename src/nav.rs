use raylib::prelude::*;
use tracing::debug;
use crate::constants::*;
use crate::engine::contains;
use crate::page::content::{NavLink, SectionId};

const TOGGLE_SIZE: f32 = 40.0;
const LINK_FONT: i32 = 20;
const LINK_SPACING: f32 = 28.0;
const MENU_ROW_HEIGHT: f32 = 48.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    None,
    Toggled(bool),
    Navigate(SectionId),
}

// Fixed header with the site name and links. Below the breakpoint the links
// move into a menu opened by a toggle button.
pub struct NavMenu {
    site_name: String,
    links: Vec<NavLink>,
    link_widths: Vec<f32>,
    open: bool,
}

impl NavMenu {
    pub fn new(site_name: &str, links: &[NavLink]) -> Self {
        Self {
            site_name: site_name.to_string(),
            links: links.to_vec(),
            link_widths: vec![0.0; links.len()],
            open: false,
        }
    }

    /// Caches link label widths, hit-testing happens outside the draw pass.
    pub fn measure_links(&mut self, measure: impl Fn(&str, i32) -> i32) {
        self.link_widths = self.links.iter().map(|link| measure(&link.label, LINK_FONT) as f32).collect();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_mobile(width: f32) -> bool {
        width < MOBILE_BREAKPOINT
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        debug!(open = self.open, "Navigation menu toggled");
        self.open
    }

    // Widening the window past the breakpoint leaves no toggle to close the menu with
    pub fn resize(&mut self, width: f32) {
        if self.open && !Self::is_mobile(width) {
            self.open = false;
        }
    }

    pub fn toggle_bounds(width: f32) -> Rectangle {
        Rectangle::new(
            width - GUTTER - TOGGLE_SIZE,
            (HEADER_HEIGHT - TOGGLE_SIZE) * 0.5,
            TOGGLE_SIZE,
            TOGGLE_SIZE,
        )
    }

    /// Hit areas of the links in screen coordinates for the current mode.
    pub fn link_bounds(&self, width: f32) -> Vec<Rectangle> {
        if Self::is_mobile(width) {
            if !self.is_open() {
                return Vec::new();
            }
            return (0..self.links.len())
                .map(|i| Rectangle::new(0.0, HEADER_HEIGHT + i as f32 * MENU_ROW_HEIGHT, width, MENU_ROW_HEIGHT))
                .collect();
        }

        // Right aligned, laid out from the last link backwards
        let mut right = width - GUTTER;
        let mut bounds: Vec<Rectangle> = self
            .link_widths
            .iter()
            .rev()
            .map(|&link_width| {
                let rect = Rectangle::new(right - link_width, 0.0, link_width, HEADER_HEIGHT);
                right -= link_width + LINK_SPACING;
                rect
            })
            .collect();
        bounds.reverse();
        bounds
    }

    /// Handles a click in screen coordinates. Returns `None` when the click
    /// belongs to the page underneath.
    pub fn on_click(&mut self, point: Vector2, width: f32) -> Option<NavAction> {
        let mobile = Self::is_mobile(width);
        if mobile && contains(Self::toggle_bounds(width), point) {
            return Some(NavAction::Toggled(self.toggle()));
        }

        let bounds = self.link_bounds(width);
        if let Some(index) = bounds.iter().position(|rect| contains(*rect, point)) {
            self.open = false;
            let target = self.links[index].target;
            debug!(?target, "Navigation link chosen");
            return Some(NavAction::Navigate(target));
        }

        if point.y <= HEADER_HEIGHT {
            return Some(NavAction::None);
        }
        if self.open {
            // Clicking outside an open menu closes it
            self.open = false;
            return Some(NavAction::Toggled(false));
        }
        None
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, width: f32) {
        d.draw_rectangle_rec(Rectangle::new(0.0, 0.0, width, HEADER_HEIGHT), SURFACE);
        d.draw_rectangle_rec(Rectangle::new(0.0, HEADER_HEIGHT - 1.0, width, 1.0), BORDER);
        d.draw_text(&self.site_name, GUTTER as i32, ((HEADER_HEIGHT - 24.0) * 0.5) as i32, 24, ACCENT_DARK);

        let bounds = self.link_bounds(width);
        if Self::is_mobile(width) {
            let toggle = Self::toggle_bounds(width);
            // Three bars, or a cross while open
            if self.open {
                d.draw_line_ex(
                    Vector2::new(toggle.x + 8.0, toggle.y + 8.0),
                    Vector2::new(toggle.x + toggle.width - 8.0, toggle.y + toggle.height - 8.0),
                    3.0,
                    INK,
                );
                d.draw_line_ex(
                    Vector2::new(toggle.x + toggle.width - 8.0, toggle.y + 8.0),
                    Vector2::new(toggle.x + 8.0, toggle.y + toggle.height - 8.0),
                    3.0,
                    INK,
                );
            } else {
                for bar in 0..3 {
                    let y = toggle.y + 10.0 + bar as f32 * 9.0;
                    d.draw_rectangle_rec(Rectangle::new(toggle.x + 6.0, y, toggle.width - 12.0, 3.0), INK);
                }
            }

            for (link, rect) in self.links.iter().zip(bounds.iter()) {
                d.draw_rectangle_rec(*rect, SURFACE);
                d.draw_rectangle_rec(Rectangle::new(rect.x, rect.y + rect.height - 1.0, rect.width, 1.0), BORDER);
                d.draw_text(&link.label, GUTTER as i32, (rect.y + 14.0) as i32, LINK_FONT, INK);
            }
        } else {
            for (link, rect) in self.links.iter().zip(bounds.iter()) {
                d.draw_text(&link.label, rect.x as i32, ((HEADER_HEIGHT - LINK_FONT as f32) * 0.5) as i32, LINK_FONT, MUTED);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_per_char(s: &str) -> i32 {
        s.chars().count() as i32 * 10
    }

    fn menu() -> NavMenu {
        let mut nav = NavMenu::new(
            "Site",
            &[
                NavLink { label: "Features".into(), target: SectionId::Features },
                NavLink { label: "Customers".into(), target: SectionId::Testimonials },
            ],
        );
        nav.measure_links(|label, _| ten_per_char(label));
        nav
    }

    fn center(rect: Rectangle) -> Vector2 {
        Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5)
    }

    #[test]
    fn toggle_opens_and_closes_on_mobile() {
        let mut nav = menu();
        let toggle = center(NavMenu::toggle_bounds(400.0));

        assert_eq!(nav.on_click(toggle, 400.0), Some(NavAction::Toggled(true)));
        assert!(nav.is_open());
        assert_eq!(nav.on_click(toggle, 400.0), Some(NavAction::Toggled(false)));
        assert!(!nav.is_open());
    }

    #[test]
    fn toggle_is_inert_on_desktop() {
        let mut nav = menu();
        let toggle = center(NavMenu::toggle_bounds(1200.0));
        // On desktop that corner holds the last link instead
        assert_eq!(nav.on_click(toggle, 1200.0), Some(NavAction::Navigate(SectionId::Testimonials)));
        assert!(!nav.is_open());
    }

    #[test]
    fn closed_mobile_menu_has_no_links() {
        let nav = menu();
        assert!(nav.link_bounds(400.0).is_empty());
        assert_eq!(nav.link_bounds(1200.0).len(), 2);
    }

    #[test]
    fn choosing_a_link_navigates_and_closes() {
        let mut nav = menu();
        nav.toggle();
        let links = nav.link_bounds(400.0);

        assert_eq!(nav.on_click(center(links[0]), 400.0), Some(NavAction::Navigate(SectionId::Features)));
        assert!(!nav.is_open());
    }

    #[test]
    fn clicking_the_page_closes_an_open_menu() {
        let mut nav = menu();
        nav.toggle();
        let below = Vector2::new(200.0, 700.0);

        assert_eq!(nav.on_click(below, 400.0), Some(NavAction::Toggled(false)));
        assert_eq!(nav.on_click(below, 400.0), None);
    }

    #[test]
    fn desktop_links_are_right_aligned_in_order() {
        let nav = menu();
        let links = nav.link_bounds(1200.0);
        assert!(links[0].x < links[1].x);
        assert_eq!(links[1].x + links[1].width, 1200.0 - GUTTER);
    }

    #[test]
    fn link_widths_come_from_the_measure() {
        let mut nav = menu();
        nav.measure_links(|label, size| label.len() as i32 * size);
        let links = nav.link_bounds(1200.0);
        assert_eq!(links[0].width, 8.0 * LINK_FONT as f32);
        assert_eq!(links[1].width, 9.0 * LINK_FONT as f32);
    }

    #[test]
    fn widening_closes_the_menu() {
        let mut nav = menu();
        nav.toggle();
        nav.resize(500.0);
        assert!(nav.is_open());
        nav.resize(1024.0);
        assert!(!nav.is_open());
    }
}
