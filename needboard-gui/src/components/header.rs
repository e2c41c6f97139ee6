use iced::{
    Alignment, Element, Length,
    widget::{button, column, container, mouse_area, row, space, text},
};
use needboard_lib::View;

use crate::icons::icon;

#[derive(Debug, Clone)]
pub enum Message {
    BrandPressed,
    RestrictedPressed,
}

/// Label of the restricted-area button, which doubles as "back to site".
pub fn toggle_label(current: View) -> &'static str {
    match current {
        View::Listing => "Área Restrita",
        View::Login | View::Admin => "Voltar ao Site",
    }
}

pub fn view<'a>(current: View) -> Element<'a, Message> {
    let brand = mouse_area(
        row![
            icon("heart").width(32).height(32),
            column![
                text("CASA GERIÁTRICA").size(18),
                text("São Mateus").size(10),
            ]
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .on_press(Message::BrandPressed);

    let toggle = if current == View::Listing {
        row![icon("lock"), text(toggle_label(current)).size(12)]
    } else {
        row![text(toggle_label(current)).size(12)]
    };

    container(
        row![
            brand,
            space::horizontal(),
            button(toggle.spacing(8).align_y(Alignment::Center))
                .style(button::text)
                .on_press(Message::RestrictedPressed),
        ]
        .align_y(Alignment::Center)
        .padding(16),
    )
    .width(Length::Fill)
    .into()
}
