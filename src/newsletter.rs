use raylib::prelude::*;
use tracing::info;
use crate::constants::*;
use crate::engine::{contains, Engine, Key, TimerEvent, Timers};
use crate::page::content::Newsletter;
use crate::page::text::{draw_centered, draw_wrapped, faded, text_width};
use crate::reveal::Reveal;
use crate::timer::TimerId;
use crate::visibility::Visibility;

const FIELD_HEIGHT: f32 = 48.0;
const BUTTON_WIDTH: f32 = 150.0;
const FORM_MAX_WIDTH: f32 = 560.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Subscribed,
    Invalid,
}

// Loose shape check, the subscription itself is only simulated
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

pub struct NewsletterForm {
    copy: Newsletter,
    email: String,
    focused: bool,
    status: FormStatus,
    status_timer: Option<TimerId>,
    reveal: Reveal,
}

impl NewsletterForm {
    pub fn new(copy: &Newsletter) -> Self {
        Self {
            copy: copy.clone(),
            email: String::new(),
            focused: false,
            status: FormStatus::Idle,
            status_timer: None,
            reveal: Reveal::new(1),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn submit(&mut self) -> &FormStatus {
        let email = self.email.trim();
        if is_valid_email(email) {
            let domain = email.rsplit('@').next().unwrap_or_default();
            info!(domain, "Newsletter subscription simulated, nothing was sent");
            self.email.clear();
            self.status = FormStatus::Subscribed;
        } else {
            self.status = FormStatus::Invalid;
        }
        &self.status
    }

    // The result message clears itself after a while, a new submission restarts the clock
    fn submit_with_timeout(&mut self, timers: &mut Timers) {
        self.submit();
        if let Some(id) = self.status_timer.take() {
            timers.cancel(id);
        }
        self.status_timer = Some(timers.once(STATUS_MESSAGE_DURATION, TimerEvent::NewsletterStatusExpired));
    }

    // The form slides in with the reveal, drawing and clicks share this area
    fn shifted(&self, area: Rectangle) -> Rectangle {
        Rectangle::new(area.x, area.y + self.reveal.offset(0), area.width, area.height)
    }

    /// Email field and submit button for the section at `area`.
    pub fn form_bounds(&self, area: Rectangle) -> (Rectangle, Rectangle) {
        let area = self.shifted(area);
        let width = (area.width - GUTTER * 2.0).min(FORM_MAX_WIDTH);
        let x = area.x + (area.width - width) * 0.5;
        let y = area.y + SECTION_PADDING + 120.0;
        let field = Rectangle::new(x, y, width - BUTTON_WIDTH - 12.0, FIELD_HEIGHT);
        let button = Rectangle::new(x + width - BUTTON_WIDTH, y, BUTTON_WIDTH, FIELD_HEIGHT);
        (field, button)
    }
}

impl Engine for NewsletterForm {
    fn name(&self) -> &'static str {
        "newsletter"
    }

    fn height(&self, _width: f32) -> f32 {
        NEWSLETTER_HEIGHT
    }

    fn on_visibility(&mut self, view: Visibility, _timers: &mut Timers) {
        self.reveal.observe(view, self.name());
    }

    fn on_click(&mut self, point: Vector2, area: Rectangle, timers: &mut Timers) {
        let (field, button) = self.form_bounds(area);
        if contains(button, point) {
            self.submit_with_timeout(timers);
        } else {
            self.focused = contains(field, point);
        }
    }

    fn on_key(&mut self, key: Key, timers: &mut Timers) {
        if !self.focused {
            return;
        }
        match key {
            Key::Char(c) if !c.is_control() && self.email.chars().count() < EMAIL_MAX_LEN => {
                self.email.push(c);
                self.status = FormStatus::Idle;
            }
            Key::Backspace => {
                self.email.pop();
            }
            Key::Enter => self.submit_with_timeout(timers),
            Key::Escape => self.focused = false,
            _ => {}
        }
    }

    fn on_timer(&mut self, event: TimerEvent, _timers: &mut Timers) {
        if event == TimerEvent::NewsletterStatusExpired {
            self.status_timer = None;
            self.status = FormStatus::Idle;
        }
    }

    fn animate(&mut self, dt: f32) {
        self.reveal.update(dt);
    }

    fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        let alpha = self.reveal.progress(0);
        let (field, button) = self.form_bounds(area);
        let area = self.shifted(area);
        let center_x = area.x + area.width * 0.5;

        draw_centered(d, &self.copy.heading, center_x, area.y + SECTION_PADDING, 36, faded(INK, alpha));
        let body = Rectangle::new(area.x + GUTTER, area.y + SECTION_PADDING + 52.0, area.width - GUTTER * 2.0, 60.0);
        draw_wrapped(d, &self.copy.body, body, 20, 26.0, true, faded(MUTED, alpha));

        d.draw_rectangle_rec(field, faded(SURFACE, alpha));
        let outline = if self.focused { ACCENT } else { BORDER };
        d.draw_rectangle_lines_ex(field, 2.0, faded(outline, alpha));

        let text_y = (field.y + (FIELD_HEIGHT - 20.0) * 0.5) as i32;
        if self.email().is_empty() {
            d.draw_text(&self.copy.placeholder, (field.x + 14.0) as i32, text_y, 20, faded(MUTED, alpha));
        } else {
            d.draw_text(&self.email, (field.x + 14.0) as i32, text_y, 20, faded(INK, alpha));
        }
        if self.is_focused() {
            let caret_x = field.x + 16.0 + text_width(d, &self.email, 20) as f32;
            d.draw_rectangle_rec(Rectangle::new(caret_x, field.y + 12.0, 2.0, FIELD_HEIGHT - 24.0), faded(INK, alpha));
        }

        d.draw_rectangle_rec(button, faded(ACCENT, alpha));
        draw_centered(d, &self.copy.button, button.x + button.width * 0.5, text_y as f32, 20, faded(SURFACE, alpha));

        let message = match self.status() {
            FormStatus::Idle => None,
            FormStatus::Subscribed => Some((&self.copy.success, SUCCESS)),
            FormStatus::Invalid => Some((&self.copy.invalid, DANGER)),
        };
        if let Some((text, color)) = message {
            draw_centered(d, text, center_x, field.y + FIELD_HEIGHT + 20.0, 18, faded(color, alpha));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn copy() -> Newsletter {
        Newsletter {
            heading: "News".into(),
            body: "Monthly".into(),
            placeholder: "you@company.com".into(),
            button: "Subscribe".into(),
            success: "Thanks".into(),
            invalid: "Invalid".into(),
        }
    }

    fn area() -> Rectangle {
        Rectangle::new(0.0, 2000.0, 1200.0, NEWSLETTER_HEIGHT)
    }

    fn center(rect: Rectangle) -> Vector2 {
        Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5)
    }

    fn type_text(form: &mut NewsletterForm, text: &str, timers: &mut Timers) {
        for c in text.chars() {
            form.on_key(Key::Char(c), timers);
        }
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@localhost"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@example."));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn typing_needs_focus() {
        let mut timers = Timers::new();
        let mut form = NewsletterForm::new(&copy());
        type_text(&mut form, "ignored", &mut timers);
        assert_eq!(form.email(), "");

        let (field, _) = form.form_bounds(area());
        form.on_click(center(field), area(), &mut timers);
        assert!(form.is_focused());
        type_text(&mut form, "me@x.io", &mut timers);
        form.on_key(Key::Backspace, &mut timers);
        assert_eq!(form.email(), "me@x.i");

        form.on_click(Vector2::new(5.0, 2005.0), area(), &mut timers);
        assert!(!form.is_focused());
    }

    #[test]
    fn valid_submission_clears_the_field() {
        let mut timers = Timers::new();
        let mut form = NewsletterForm::new(&copy());
        let (field, button) = form.form_bounds(area());

        form.on_click(center(field), area(), &mut timers);
        type_text(&mut form, "me@example.com", &mut timers);
        form.on_click(center(button), area(), &mut timers);

        assert_eq!(form.status(), &FormStatus::Subscribed);
        assert_eq!(form.email(), "");
    }

    #[test]
    fn invalid_submission_keeps_the_field() {
        let mut timers = Timers::new();
        let mut form = NewsletterForm::new(&copy());
        let (field, _) = form.form_bounds(area());

        form.on_click(center(field), area(), &mut timers);
        type_text(&mut form, "not-an-email", &mut timers);
        form.on_key(Key::Enter, &mut timers);

        assert_eq!(form.status(), &FormStatus::Invalid);
        assert_eq!(form.email(), "not-an-email");

        // Typing again clears the message
        type_text(&mut form, "@x.io", &mut timers);
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[test]
    fn result_message_expires() {
        let mut timers = Timers::new();
        let mut form = NewsletterForm::new(&copy());
        let (field, button) = form.form_bounds(area());
        let run = |form: &mut NewsletterForm, seconds: f32, timers: &mut Timers| {
            for event in timers.advance(seconds) {
                form.on_timer(event, timers);
            }
        };

        form.on_click(center(field), area(), &mut timers);
        type_text(&mut form, "bad", &mut timers);
        form.on_click(center(button), area(), &mut timers);
        assert_eq!(form.status(), &FormStatus::Invalid);

        run(&mut form, STATUS_MESSAGE_DURATION - 1.0, &mut timers);
        // Submitting again restarts the clock
        form.on_click(center(button), area(), &mut timers);
        assert_eq!(timers.len(), 1);
        run(&mut form, 2.0, &mut timers);
        assert_eq!(form.status(), &FormStatus::Invalid);

        run(&mut form, STATUS_MESSAGE_DURATION, &mut timers);
        assert_eq!(form.status(), &FormStatus::Idle);
        assert_eq!(timers.len(), 0);
    }

    #[test]
    fn result_message_lasts_five_seconds() {
        let mut timers = Timers::new();
        let mut form = NewsletterForm::new(&copy());
        let (field, _) = form.form_bounds(area());
        form.on_click(center(field), area(), &mut timers);
        type_text(&mut form, "me@example.com", &mut timers);
        form.on_key(Key::Enter, &mut timers);

        for event in timers.advance(4.9) {
            form.on_timer(event, &mut timers);
        }
        assert_eq!(form.status(), &FormStatus::Subscribed);
        for event in timers.advance(0.1) {
            form.on_timer(event, &mut timers);
        }
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[test]
    fn clicks_follow_the_form_as_it_slides_in() {
        let mut timers = Timers::new();
        let mut form = NewsletterForm::new(&copy());
        let (hidden_field, _) = form.form_bounds(area());

        form.on_visibility(Visibility { ratio: 1.0, screen_top: 0.0, viewport_height: 800.0 }, &mut timers);
        form.animate(REVEAL_DURATION);
        let (field, _) = form.form_bounds(area());
        assert_eq!(hidden_field.y - field.y, REVEAL_OFFSET);

        // The top edge of the drawn field, which the unshifted area would have missed
        let edge = Vector2::new(field.x + 10.0, field.y + 2.0);
        form.on_click(edge, area(), &mut timers);
        assert!(form.is_focused());

        form.on_click(Vector2::new(field.x + 10.0, field.y + FIELD_HEIGHT + 2.0), area(), &mut timers);
        assert!(!form.is_focused());
    }

    #[test]
    fn field_length_is_capped() {
        let mut timers = Timers::new();
        let mut form = NewsletterForm::new(&copy());
        let (field, _) = form.form_bounds(area());
        form.on_click(center(field), area(), &mut timers);

        type_text(&mut form, &"a".repeat(EMAIL_MAX_LEN + 10), &mut timers);
        assert_eq!(form.email().len(), EMAIL_MAX_LEN);
    }
}
