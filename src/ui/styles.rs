use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::calendar::{CellAppearance, CellTone};
use crate::models::NotificationKind;
use crate::ui::palette::{self, Swatch};

/// Background, border and label color of a day cell.
pub struct DayStyle(pub CellAppearance);

impl DayStyle {
    pub fn label_color(&self) -> Color {
        let base = if self.0.filled {
            Color::WHITE
        } else if self.0.emphasize_label {
            Swatch::Blue.color()
        } else {
            Swatch::Text.color()
        };
        if self.0.is_dimmed() && !self.0.filled {
            palette::dimmed(base)
        } else {
            base
        }
    }

    fn background(&self) -> Color {
        if self.0.filled {
            return Swatch::LightBlue.color();
        }
        match self.0.tone {
            CellTone::OtherMonth => palette::dimmed(Swatch::OtherMonth.color()),
            CellTone::Unavailable => palette::dimmed(Swatch::Surface.color()),
            CellTone::Available => Swatch::Surface.color(),
        }
    }

    fn border_color(&self) -> Color {
        if self.0.today_border {
            Swatch::Blue.color()
        } else {
            self.background()
        }
    }
}

impl button::StyleSheet for DayStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(self.background())),
            text_color: self.label_color(),
            border: Border {
                color: self.border_color(),
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        }
    }
    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        let mut appearance = self.active(style);
        if let Some(Background::Color(color)) = appearance.background {
            appearance.background = Some(Background::Color(Color { a: color.a * 0.8, ..color }));
        }
        appearance
    }
}

/// Round chevron buttons in the month header.
pub struct MonthButtonStyle;
impl button::StyleSheet for MonthButtonStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(Swatch::LightBlue.color())),
            text_color: Color::WHITE,
            border: Border {
                radius: 15.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(Swatch::Blue.color())),
            text_color: Color::WHITE,
            border: Border {
                radius: 15.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
    fn disabled(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(palette::dimmed(Swatch::LightBlue.color()))),
            text_color: Color::WHITE,
            border: Border {
                radius: 15.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

pub struct OrderButtonStyle;
impl button::StyleSheet for OrderButtonStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(Swatch::LightBlue.color())),
            text_color: Color::WHITE,
            border: Border {
                radius: 15.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
            ..Default::default()
        }
    }
    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(Swatch::Blue.color())),
            ..self.active(style)
        }
    }
    fn disabled(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(Color::from_rgb(0.8, 0.8, 0.8))),
            text_color: Color::from_rgb(0.5, 0.5, 0.5),
            border: Border {
                radius: 15.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

pub struct NotificationStyle(pub NotificationKind);
impl container::StyleSheet for NotificationStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        let accent = match self.0 {
            NotificationKind::Success => Swatch::Blue.color(),
            NotificationKind::Failure => Swatch::Danger.color(),
        };
        container::Appearance {
            background: Some(Background::Color(Color::WHITE)),
            border: Border {
                color: accent,
                width: 1.0,
                radius: 12.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 10.0,
            },
            text_color: Some(Swatch::Text.color()),
        }
    }
}

pub struct BackgroundStyle;
impl container::StyleSheet for BackgroundStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(Color::WHITE)),
            ..Default::default()
        }
    }
}
