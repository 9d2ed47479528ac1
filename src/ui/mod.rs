// src/ui/mod.rs

pub mod calendar;
pub mod day;
pub mod notification;
pub mod styles;

// --- WIDGET PALETTE ---
pub mod palette {
    use iced::Color;

    pub const BLUE: Color = Color::from_rgb(0.0, 0.439, 1.0);        // #0070ff
    pub const LIGHT_BLUE: Color = Color::from_rgb(0.275, 0.533, 0.922); // #4688eb
    pub const ORANGE: Color = Color::from_rgb(1.0, 0.667, 0.165);    // #ffaa2a
    pub const SURFACE: Color = Color::from_rgb(0.965, 0.965, 0.965); // #f6f6f6
    pub const OTHER_MONTH: Color = Color::from_rgb(0.941, 0.941, 0.941); // #f0f0f0
    pub const TEXT_MAIN: Color = Color::from_rgb(0.2, 0.2, 0.2);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.667, 0.667, 0.667); // #aaa
    pub const DANGER: Color = Color::from_rgb(0.8, 0.4, 0.4);

    /// Opacity applied to days that cannot be picked.
    pub const DIMMED_ALPHA: f32 = 0.4;

    /// Semantic colors the widget asks the host theme for.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Swatch {
        Blue,
        LightBlue,
        Orange,
        Surface,
        OtherMonth,
        Text,
        MutedText,
        Danger,
    }

    impl Swatch {
        pub fn color(self) -> Color {
            match self {
                Swatch::Blue => BLUE,
                Swatch::LightBlue => LIGHT_BLUE,
                Swatch::Orange => ORANGE,
                Swatch::Surface => SURFACE,
                Swatch::OtherMonth => OTHER_MONTH,
                Swatch::Text => TEXT_MAIN,
                Swatch::MutedText => TEXT_MUTED,
                Swatch::Danger => DANGER,
            }
        }

        pub fn from_name(name: &str) -> Option<Self> {
            match name {
                "blue" => Some(Swatch::Blue),
                "lightBlue" => Some(Swatch::LightBlue),
                "orange" => Some(Swatch::Orange),
                "surface" => Some(Swatch::Surface),
                "otherMonth" => Some(Swatch::OtherMonth),
                "text" => Some(Swatch::Text),
                "mutedText" => Some(Swatch::MutedText),
                "danger" => Some(Swatch::Danger),
                _ => None,
            }
        }
    }

    /// Color lookup by semantic name, e.g. `named("lightBlue")`.
    pub fn named(name: &str) -> Option<Color> {
        Swatch::from_name(name).map(Swatch::color)
    }

    pub fn dimmed(color: Color) -> Color {
        Color {
            a: color.a * DIMMED_ALPHA,
            ..color
        }
    }

}
