use raylib::prelude::*;

// Width of `text` in the default font, in pixels. raylib cannot measure
// strings with interior NULs, those count as empty.
pub fn text_width(rl: &RaylibHandle, text: &str, font_size: i32) -> i32 {
    if text.contains('\0') {
        return 0;
    }
    rl.measure_text(text, font_size)
}

/// Greedy word wrap. Words wider than `max_width` get a line of their own.
pub fn wrap(text: &str, max_width: i32, measure: impl Fn(&str) -> i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", line, word);
        if measure(&candidate) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

pub fn draw_wrapped(
    d: &mut RaylibDrawHandle,
    text: &str,
    area: Rectangle,
    font_size: i32,
    line_height: f32,
    centered: bool,
    color: Color,
) -> f32 {
    let lines = {
        let rl: &RaylibHandle = d;
        wrap(text, area.width as i32, |s| text_width(rl, s, font_size))
    };
    let mut y = area.y;
    for line in lines.iter() {
        let x = if centered {
            area.x + (area.width - text_width(d, line, font_size) as f32) * 0.5
        } else {
            area.x
        };
        d.draw_text(line, x as i32, y as i32, font_size, color);
        y += line_height;
    }
    y - area.y
}

pub fn draw_centered(d: &mut RaylibDrawHandle, text: &str, center_x: f32, y: f32, font_size: i32, color: Color) {
    let x = center_x - text_width(d, text, font_size) as f32 * 0.5;
    d.draw_text(text, x as i32, y as i32, font_size, color);
}

pub fn faded(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * alpha.clamp(0.0, 1.0)) as u8)
}
