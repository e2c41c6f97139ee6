use iced::{
    Alignment, Element, Length,
    widget::{button, column, container, text, text_input},
};

use crate::icons::icon;

#[derive(Debug, Clone)]
pub enum Message {
    PasswordChanged(String),
    SubmitPressed,
}

pub fn view(password: &str) -> Element<'_, Message> {
    container(
        container(
            column![
                icon("key").width(40).height(40),
                text("PAINEL DE CONTROLE").size(22),
                text_input("DIGITE A CHAVE MESTRA", password)
                    .secure(true)
                    .padding(14)
                    .on_input(Message::PasswordChanged)
                    .on_submit(Message::SubmitPressed),
                button("Entrar no Sistema")
                    .width(Length::Fill)
                    .padding(14)
                    .on_press(Message::SubmitPressed),
            ]
            .spacing(24)
            .align_x(Alignment::Center),
        )
        .padding(40)
        .width(420)
        .style(container::rounded_box),
    )
    .padding(64)
    .center_x(Length::Fill)
    .into()
}
