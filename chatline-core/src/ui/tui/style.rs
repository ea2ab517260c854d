//! Conversion from `anstyle` segment styles to ratatui styles.
//!
//! The formatter and transcript store styles in the backend-neutral
//! `anstyle` representation; this module adapts them at render time.

use anstyle::{AnsiColor, Color as AnsiColorEnum, Effects, Style as AnsiStyle};
use ratatui::style::{Color, Modifier, Style};
use unicode_width::UnicodeWidthStr;

pub fn measure_text_width(text: &str) -> u16 {
    UnicodeWidthStr::width(text) as u16
}

pub fn ratatui_color_from_ansi(color: AnsiColorEnum) -> Color {
    match color {
        AnsiColorEnum::Ansi(base) => match base {
            AnsiColor::Black => Color::Black,
            AnsiColor::Red => Color::Red,
            AnsiColor::Green => Color::Green,
            AnsiColor::Yellow => Color::Yellow,
            AnsiColor::Blue => Color::Blue,
            AnsiColor::Magenta => Color::Magenta,
            AnsiColor::Cyan => Color::Cyan,
            AnsiColor::White => Color::White,
            AnsiColor::BrightBlack => Color::DarkGray,
            AnsiColor::BrightRed => Color::LightRed,
            AnsiColor::BrightGreen => Color::LightGreen,
            AnsiColor::BrightYellow => Color::LightYellow,
            AnsiColor::BrightBlue => Color::LightBlue,
            AnsiColor::BrightMagenta => Color::LightMagenta,
            AnsiColor::BrightCyan => Color::LightCyan,
            AnsiColor::BrightWhite => Color::White,
        },
        AnsiColorEnum::Ansi256(value) => Color::Indexed(value.index()),
        AnsiColorEnum::Rgb(rgb) => Color::Rgb(rgb.r(), rgb.g(), rgb.b()),
    }
}

pub fn ratatui_style_from_ansi(style: AnsiStyle) -> Style {
    let mut converted = Style::default();
    if let Some(fg) = style.get_fg_color() {
        converted = converted.fg(ratatui_color_from_ansi(fg));
    }
    if let Some(bg) = style.get_bg_color() {
        converted = converted.bg(ratatui_color_from_ansi(bg));
    }
    let effects = style.get_effects();
    if effects.contains(Effects::BOLD) {
        converted = converted.add_modifier(Modifier::BOLD);
    }
    if effects.contains(Effects::ITALIC) {
        converted = converted.add_modifier(Modifier::ITALIC);
    }
    if effects.contains(Effects::UNDERLINE) {
        converted = converted.add_modifier(Modifier::UNDERLINED);
    }
    if effects.contains(Effects::DIMMED) {
        converted = converted.add_modifier(Modifier::DIM);
    }
    converted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_effect_maps_to_bold_modifier() {
        let style = ratatui_style_from_ansi(AnsiStyle::new().bold());
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn rgb_color_is_preserved() {
        let style = ratatui_style_from_ansi(
            AnsiStyle::new().fg_color(Some(AnsiColorEnum::Rgb(anstyle::RgbColor(1, 2, 3)))),
        );
        assert_eq!(style.fg, Some(Color::Rgb(1, 2, 3)));
    }
}
