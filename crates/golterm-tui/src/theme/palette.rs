//! Color palette.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(10, 12, 16);
pub const CARD_BG: Color = Color::Rgb(18, 21, 28);
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(45, 51, 59);
pub const BORDER_ACTIVE: Color = Color::Rgb(88, 166, 255);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(88, 166, 255);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(201, 209, 217);
pub const TEXT_SECONDARY: Color = Color::Rgb(125, 133, 144);
pub const TEXT_MUTED: Color = Color::Rgb(72, 79, 88);
pub const TEXT_BRIGHT: Color = Color::Rgb(240, 246, 252);
/// Dark text on bright toast/selection backgrounds
pub const CONTRAST_FG: Color = Color::Rgb(10, 12, 16);

// --- Status (toast severities) ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);
pub const STATUS_RED: Color = Color::Rgb(239, 68, 68);
pub const STATUS_YELLOW: Color = Color::Rgb(245, 158, 11);
pub const STATUS_BLUE: Color = Color::Rgb(59, 130, 246);

// --- Cells ---
pub const CELL_ALIVE: Color = Color::Rgb(16, 185, 129);
pub const CELL_BORN: Color = Color::Rgb(110, 231, 183);
pub const CELL_DEAD: Color = Color::Rgb(31, 36, 46);
pub const CELL_DIED: Color = Color::Rgb(244, 63, 94);
pub const CELL_CURSOR: Color = Color::Rgb(234, 179, 8);

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(5, 6, 8);
