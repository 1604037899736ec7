use ratatui::style::Color;

/// Runtime theme colors (Gruvbox Dark palette)
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Semantic colors
    pub accent: Color,
    pub active: Color,
    pub disabled: Color,
    pub focus: Color,
    pub tag: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey0: Color::Rgb(0x7c, 0x6f, 0x64),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            active: Color::Rgb(0xd8, 0xa6, 0x57),
            disabled: Color::Rgb(0x50, 0x49, 0x45),
            focus: Color::Rgb(0x7d, 0xae, 0xa3),
            tag: Color::Rgb(0xd3, 0x86, 0x9b),
            warning: Color::Rgb(0xe7, 0x8a, 0x4e),
        }
    }
}
