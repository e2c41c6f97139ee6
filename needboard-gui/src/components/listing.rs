use iced::{
    Alignment, Element, Length,
    widget::{Column, button, column, container, row, space, text},
};
use needboard_lib::NeedRecord;

use crate::icons::icon;

#[derive(Debug, Clone)]
pub enum Message {
    ContributePressed,
}

pub fn view(records: &[NeedRecord]) -> Element<'_, Message> {
    let hero = container(
        column![
            text("SEJA A LUZ NA VIDA DE ALGUÉM").size(11),
            text("Cuidando com Amor e Dignidade.").size(40),
            text(
                "Conheça nossas necessidades atuais e ajude a manter o sorriso no rosto de \
                 nossos residentes."
            ),
            button("Quero Contribuir")
                .padding(16)
                .on_press(Message::ContributePressed),
        ]
        .spacing(20)
        .align_x(Alignment::Center),
    )
    .padding(48)
    .center_x(Length::Fill);

    let heading = row![
        column![
            text("NECESSIDADES URGENTES").size(26),
            text("Clique em \"Ajudar\" para saber como doar este item.").size(13),
        ],
        space::horizontal(),
        text("Atualizado Hoje").size(11),
    ]
    .align_y(Alignment::End);

    let items: Element<'_, Message> = if records.is_empty() {
        container(
            column![
                icon("leaf").width(48).height(48),
                text("Nenhuma campanha ativa no momento.").size(12),
            ]
            .spacing(16)
            .align_x(Alignment::Center),
        )
        .padding(64)
        .center_x(Length::Fill)
        .style(container::bordered_box)
        .into()
    } else {
        Column::with_children(records.iter().map(card))
            .spacing(16)
            .into()
    };

    column![hero, column![heading, items].spacing(24).padding(24)].into()
}

fn card(record: &NeedRecord) -> Element<'_, Message> {
    let mut details = column![text(record.name()).size(20)].spacing(8);

    if !record.category().is_empty() {
        details = details.push(text(record.category()).size(11));
    }
    if !record.description().is_empty() {
        details = details.push(text(record.description()));
    }
    if !record.image().is_empty() {
        details = details.push(row![icon("image"), text(record.image()).size(10)].spacing(6));
    }

    container(
        row![
            details,
            space::horizontal(),
            button("Ajudar").on_press(Message::ContributePressed),
        ]
        .align_y(Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}
