//! The iced application hosting the calendar widget.

use iced::widget::{column, container};
use iced::{Application, Command, Element, Length, Theme};
use log::info;
use tokio_util::sync::CancellationToken;

use crate::calendar::SelectionController;
use crate::command_handlers::OrderHandlers;
use crate::config::AppConfig;
use crate::messages::Message;
use crate::ui::calendar::view_month;
use crate::ui::notification::view_notification;
use crate::ui::styles::BackgroundStyle;
use crate::ui_state::UiState;

/// Everything the application needs at start-up.
pub struct AppFlags {
    pub config: AppConfig,
    pub handlers: OrderHandlers,
    pub shutdown: CancellationToken,
}

pub struct OrderCalApp {
    config: AppConfig,
    controller: SelectionController,
    handlers: OrderHandlers,
    shutdown: CancellationToken,
    ui_state: UiState,
}

impl Application for OrderCalApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = AppFlags;

    fn new(flags: Self::Flags) -> (Self, Command<Message>) {
        let AppFlags { config, handlers, shutdown } = flags;
        let controller = SelectionController::new(
            config.initial_month(),
            config.offer_dates.clone(),
            config.order_dates.clone(),
            config.locale.clone(),
        );
        info!("Showing {}", controller.month_title());

        (
            OrderCalApp {
                config,
                controller,
                handlers,
                shutdown,
                ui_state: UiState::new(),
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        format!("OrderCal - {}", self.controller.month_title())
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::PreviousMonth => {
                self.controller.go_to_previous_month();
                Command::none()
            }
            Message::NextMonth => {
                self.controller.go_to_next_month();
                Command::none()
            }
            Message::CellTapped(cell) => {
                self.controller.handle_cell_tap(&cell);
                Command::none()
            }
            Message::SubmitOrder => match self.controller.begin_submission() {
                Some(pending) => {
                    let handlers = self.handlers.clone();
                    Command::perform(
                        async move { handlers.submit(pending).await },
                        |(id, outcome)| Message::OrderFinished(id, outcome),
                    )
                }
                None => Command::none(),
            },
            Message::OrderFinished(id, outcome) => {
                if self.shutdown.is_cancelled() {
                    return Command::none();
                }
                if let Some(notification) = self.controller.finish_submission(id, outcome) {
                    self.ui_state.notify(notification);
                }
                Command::none()
            }
            Message::DismissNotification => {
                self.ui_state.dismiss();
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let mut content = column![].spacing(16);
        if let Some(notification) = &self.ui_state.notification {
            content = content.push(view_notification(notification));
        }
        content = content.push(view_month(&self.controller, self.config.today()));

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(12)
            .style(iced::theme::Container::Custom(Box::new(BackgroundStyle)))
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

impl Drop for OrderCalApp {
    fn drop(&mut self) {
        // abandon any pending submission
        self.shutdown.cancel();
    }
}
