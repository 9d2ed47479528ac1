// src/ui/day.rs

use iced::alignment::Horizontal;
use iced::widget::{button, column, text, Space};
use iced::{Alignment, Element, Font, Length};

use crate::calendar::CellAppearance;
use crate::messages::Message;
use crate::models::DayCell;
use crate::ui::palette::Swatch;
use crate::ui::styles::DayStyle;

pub const CELL_HEIGHT: u16 = 44;

/// One pressable day. Every tap is reported; the controller decides what it means.
pub fn view_day<'a>(cell: &DayCell, is_selected: bool) -> Element<'a, Message> {
    let appearance = CellAppearance::derive(cell, is_selected);
    let style = DayStyle(appearance);

    let label: Element<'a, Message> = if appearance.show_label {
        let font = if appearance.emphasize_label {
            Font {
                weight: iced::font::Weight::Bold,
                ..Font::DEFAULT
            }
        } else {
            Font::DEFAULT
        };
        text(cell.day_label.clone())
            .size(13)
            .font(font)
            .width(Length::Fill)
            .horizontal_alignment(Horizontal::Center)
            .style(iced::theme::Text::Color(style.label_color()))
            .into()
    } else {
        Space::new(Length::Fill, Length::Shrink).into()
    };

    let marker: Element<'a, Message> = if appearance.order_marker {
        text("•")
            .size(10)
            .width(Length::Fill)
            .horizontal_alignment(Horizontal::Center)
            .style(iced::theme::Text::Color(if appearance.filled {
                iced::Color::WHITE
            } else {
                Swatch::LightBlue.color()
            }))
            .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(10.0)).into()
    };

    button(
        column![label, marker]
            .align_items(Alignment::Center)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(CELL_HEIGHT)
    .padding([6, 0])
    .style(iced::theme::Button::Custom(Box::new(style)))
    .on_press(Message::CellTapped(cell.clone()))
    .into()
}
