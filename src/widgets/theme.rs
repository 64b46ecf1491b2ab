use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub page_bg: Color,
    pub card_bg: Color,
    pub card_bg_hover: Color,
    pub border: Color,
    pub border_hover: Color,
    pub accent: Color,
    pub accent_bright: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_faint: Color,
    pub spotlight_inner: Color,
    pub spotlight_outer: Color,
    pub ambient_inner: Color,
    pub ambient_outer: Color,
    pub ripple: Color,
    pub toast_success: Color,
    pub toast_error: Color,
    pub badge_dots: [Color; 3],
}

impl Default for Theme {
    fn default() -> Self {
        // Dark slate page with a cyan accent.
        Self {
            page_bg: Color::Rgb(9, 12, 22),
            card_bg: Color::Rgb(17, 22, 36),
            card_bg_hover: Color::Rgb(22, 29, 46),
            border: Color::Rgb(44, 52, 70),
            border_hover: Color::Rgb(34, 160, 184),
            accent: Color::Rgb(34, 211, 238),
            accent_bright: Color::Rgb(103, 232, 249),
            text_primary: Color::Rgb(229, 233, 240),
            text_secondary: Color::Rgb(148, 158, 176),
            text_faint: Color::Rgb(90, 99, 118),
            spotlight_inner: Color::Rgb(32, 41, 60),
            spotlight_outer: Color::Rgb(25, 32, 50),
            ambient_inner: Color::Rgb(15, 20, 34),
            ambient_outer: Color::Rgb(12, 16, 28),
            ripple: Color::Rgb(125, 211, 252),
            toast_success: Color::Rgb(74, 222, 128),
            toast_error: Color::Rgb(248, 113, 113),
            badge_dots: [
                Color::Rgb(34, 211, 238),
                Color::Rgb(192, 132, 252),
                Color::Rgb(96, 165, 250),
            ],
        }
    }
}

pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

pub fn get_theme() -> &'static Theme {
    &THEME
}
