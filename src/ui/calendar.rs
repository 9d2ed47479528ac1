// src/ui/calendar.rs

use chrono::NaiveDate;
use iced::alignment::Horizontal;
use iced::widget::{button, column, container, horizontal_space, row, text, Column, Row};
use iced::{Alignment, Element, Length};

use crate::calendar::SelectionController;
use crate::messages::Message;
use crate::ui::day::view_day;
use crate::ui::palette::Swatch;
use crate::ui::styles::{MonthButtonStyle, OrderButtonStyle};

/// Month header, weekday header, the grid and, with a selection, the order bar.
pub fn view_month<'a>(controller: &SelectionController, today: NaiveDate) -> Element<'a, Message> {
    let grid = controller.grid(today);

    let nav_button = |label: &'static str, msg: Message, enabled: bool| {
        button(
            text(label)
                .size(18)
                .width(Length::Fill)
                .horizontal_alignment(Horizontal::Center),
        )
        .width(40)
        .height(40)
        .padding([8, 0])
        .style(iced::theme::Button::Custom(Box::new(MonthButtonStyle)))
        .on_press_maybe(enabled.then_some(msg))
    };

    let header = row![
        nav_button("‹", Message::PreviousMonth, controller.can_go_previous()),
        text(controller.month_title())
            .size(24)
            .width(Length::Fill)
            .horizontal_alignment(Horizontal::Center)
            .style(iced::theme::Text::Color(Swatch::Text.color())),
        nav_button("›", Message::NextMonth, controller.can_go_next()),
    ]
    .align_items(Alignment::Center)
    .padding([10, 0]);

    let weekday_header = Row::with_children(
        controller
            .weekday_labels()
            .into_iter()
            .map(|label| {
                text(label)
                    .size(10)
                    .width(Length::Fill)
                    .horizontal_alignment(Horizontal::Center)
                    .style(iced::theme::Text::Color(Swatch::MutedText.color()))
                    .into()
            })
            .collect::<Vec<Element<'a, Message>>>(),
    )
    .spacing(2);

    let weeks = Column::with_children(
        grid.weeks
            .iter()
            .map(|week| {
                Row::with_children(
                    week.iter()
                        .map(|cell| view_day(cell, controller.is_selected(cell)))
                        .collect::<Vec<_>>(),
                )
                .spacing(2)
                .into()
            })
            .collect::<Vec<Element<'a, Message>>>(),
    )
    .spacing(2);

    let mut content = column![header, weekday_header, weeks].spacing(6);

    if let Some(title) = controller.selected_title() {
        content = content.push(view_order_bar(controller, title));
    }

    container(content).width(Length::Fill).padding(2).into()
}

fn view_order_bar<'a>(controller: &SelectionController, title: String) -> Element<'a, Message> {
    let locale = controller.locale();
    let label = if controller.is_submitting() {
        locale.order_pending
    } else {
        locale.order_action
    };

    row![
        text(title)
            .size(16)
            .style(iced::theme::Text::Color(Swatch::Blue.color())),
        horizontal_space(),
        button(text(label).size(14))
            .padding([10, 20])
            .style(iced::theme::Button::Custom(Box::new(OrderButtonStyle)))
            .on_press_maybe(controller.can_submit().then_some(Message::SubmitOrder)),
    ]
    .align_items(Alignment::Center)
    .padding([20, 0, 0, 0])
    .into()
}
