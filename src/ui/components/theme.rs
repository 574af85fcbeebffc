//! Shared UI color constants.

use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(239, 68, 68);
pub const ACCENT_WARM: Color = Color::Rgb(251, 146, 60);
pub const SUCCESS: Color = Color::Rgb(34, 197, 94);
pub const PAUSED: Color = Color::Rgb(245, 158, 11);
pub const STAR: Color = Color::Rgb(234, 179, 8);

pub const TEXT_PRIMARY: Color = Color::Rgb(241, 245, 249);
pub const TEXT_SECONDARY: Color = Color::Rgb(203, 213, 225);
pub const TEXT_MUTED: Color = Color::Rgb(148, 163, 184);
pub const TEXT_FAINT: Color = Color::Rgb(100, 116, 139);

pub const SURFACE_BG: Color = Color::Rgb(2, 6, 23);
pub const PANEL_BG: Color = Color::Rgb(15, 23, 42);
pub const CODE_BG: Color = Color::Rgb(30, 41, 59);
pub const BORDER: Color = Color::Rgb(51, 65, 85);
