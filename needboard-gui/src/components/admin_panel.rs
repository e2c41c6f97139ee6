use iced::{
    Alignment, Element, Length, Task,
    widget::{Column, button, column, container, row, scrollable, space, text, text_input},
};
use needboard_lib::{NeedDraft, NeedRecord};
use rfd::AsyncFileDialog;

use crate::icons::icon;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

#[derive(Debug, Clone)]
pub enum Message {
    NameInput(String),
    CategoryInput(String),
    DescriptionInput(String),
    ImageInput(String),
    PickImage,
    ImagePicked(Option<String>),
    AddPressed,
    DeletePressed(String),
}

/// Action used for communicating with the parent component
#[derive(Debug)]
pub enum Action {
    None,
    Run(Task<Message>),
    Add(NeedDraft),
    Delete(String),
}

/// The add form and the list of records that can be removed.
#[derive(Debug, Default)]
pub struct AdminPanel {
    draft: NeedDraft,
}

impl AdminPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the form
    pub fn clear(&mut self) {
        self.draft = NeedDraft::default();
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::NameInput(name) => {
                self.draft.name = name;
                Action::None
            }
            Message::CategoryInput(category) => {
                self.draft.category = category;
                Action::None
            }
            Message::DescriptionInput(description) => {
                self.draft.description = description;
                Action::None
            }
            Message::ImageInput(image) => {
                self.draft.image = image;
                Action::None
            }
            Message::PickImage => Action::Run(Task::perform(
                async {
                    AsyncFileDialog::new()
                        .add_filter("Imagens", IMAGE_EXTENSIONS)
                        .pick_file()
                        .await
                        .map(|file_handle| file_handle.path().display().to_string())
                },
                Message::ImagePicked,
            )),
            Message::ImagePicked(image) => {
                if let Some(image) = image {
                    self.draft.image = image;
                }
                Action::None
            }
            Message::AddPressed => {
                if !self.validate() {
                    return Action::None;
                }

                // Kept until the parent knows the record was saved
                Action::Add(self.draft.clone())
            }
            Message::DeletePressed(id) => Action::Delete(id),
        }
    }

    pub fn view<'a>(&'a self, records: &'a [NeedRecord]) -> Element<'a, Message> {
        let form = container(
            column![
                text("NOVO ITEM").size(14),
                field("Nome", &self.draft.name, Message::NameInput),
                field("Categoria", &self.draft.category, Message::CategoryInput),
                field(
                    "Descrição",
                    &self.draft.description,
                    Message::DescriptionInput
                ),
                row![
                    text("Imagem").width(90),
                    text_input("URL ou arquivo", &self.draft.image).on_input(Message::ImageInput),
                    button(icon("image")).on_press(Message::PickImage),
                ]
                .spacing(8)
                .align_y(Alignment::Center),
                row![
                    space::horizontal(),
                    button("Adicionar").on_press_maybe(self.validate().then_some(Message::AddPressed)),
                ],
            ]
            .spacing(16),
        )
        .padding(24)
        .width(Length::FillPortion(5))
        .style(container::rounded_box);

        let items: Element<'a, Message> = if records.is_empty() {
            container(text("Sem itens para gerenciar.").size(11))
                .padding(48)
                .center_x(Length::Fill)
                .into()
        } else {
            scrollable(Column::with_children(records.iter().map(managed_row)).spacing(8)).into()
        };

        let list = container(column![text("GESTÃO DE POSTAGENS").size(14), items].spacing(16))
            .padding(24)
            .width(Length::FillPortion(7))
            .style(container::rounded_box);

        row![form, list].spacing(24).padding(24).into()
    }

    fn validate(&self) -> bool {
        !self.draft.name.trim().is_empty()
    }
}

fn field<'a>(
    label: &'a str,
    value: &'a str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    row![text(label).width(90), text_input("...", value).on_input(on_input)]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}

fn managed_row(record: &NeedRecord) -> Element<'_, Message> {
    container(
        row![
            text(record.name()),
            space::horizontal(),
            button(icon("delete"))
                .style(button::text)
                .on_press(Message::DeletePressed(record.id().clone())),
        ]
        .align_y(Alignment::Center)
        .padding(12),
    )
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}
