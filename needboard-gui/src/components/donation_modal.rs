use iced::{
    Element,
    widget::{button, column, container, row, space, text},
};

use crate::config::Donation;

#[derive(Debug, Clone)]
pub enum Message {
    ClosePressed,
}

pub fn view(donation: &Donation) -> Element<'_, Message> {
    container(
        column![
            text(&donation.title).size(24),
            text(&donation.message),
            text(&donation.contact).size(13),
            row![
                space::horizontal(),
                button("Fechar").on_press(Message::ClosePressed)
            ],
        ]
        .spacing(16),
    )
    .padding(24)
    .width(420)
    .style(container::rounded_box)
    .into()
}
