// src/ui/notification.rs

use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use crate::messages::Message;
use crate::models::Notification;
use crate::ui::palette::Swatch;
use crate::ui::styles::{NotificationStyle, OrderButtonStyle};

/// Modal-style card with a static title and message, dismissed with "OK".
pub fn view_notification<'a>(notification: &Notification) -> Element<'a, Message> {
    let title_color = if notification.is_success() {
        Swatch::Blue.color()
    } else {
        Swatch::Danger.color()
    };

    container(
        column![
            text(notification.title.clone())
                .size(18)
                .style(iced::theme::Text::Color(title_color)),
            text(notification.message.clone()).size(14),
            row![
                horizontal_space(),
                button(text("OK").size(14))
                    .padding([6, 18])
                    .style(iced::theme::Button::Custom(Box::new(OrderButtonStyle)))
                    .on_press(Message::DismissNotification),
            ]
            .align_items(Alignment::Center),
        ]
        .spacing(10),
    )
    .width(Length::Fill)
    .padding(16)
    .style(iced::theme::Container::Custom(Box::new(NotificationStyle(notification.kind))))
    .into()
}
