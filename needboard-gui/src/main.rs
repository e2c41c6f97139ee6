use iced::{
    Color, Element,
    Length::Fill,
    Task, Theme, application,
    widget::{center, column, container, mouse_area, opaque, scrollable, stack, text},
};
use needboard_lib::{Db, Intent, Prompt, Session, View, config::CoreConfig};
use tracing::error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    components::{
        admin_panel::{self, AdminPanel},
        donation_modal, header, listing, login,
    },
    config::GuiConfig,
    prompt::DialogPrompt,
};

pub mod components;
pub mod config;
pub mod icons;
pub mod prompt;

const SAVE_FAILED: &str = "Não foi possível salvar as alterações.";
const SCRIM_ALPHA: f32 = 0.7;

fn main() -> iced::Result {
    // Human friendly panicking in release mode
    human_panic::setup_panic!();

    // Logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logging: {e}");
    }

    application(App::new, App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    Header(header::Message),
    Listing(listing::Message),
    Login(login::Message),
    AdminPanel(admin_panel::Message),
    DonationModal(donation_modal::Message),
}

enum State {
    Error(String),
    Ready(Session),
}

struct App {
    title: String,
    theme: Theme,
    cfg: GuiConfig,
    state: State,
    prompt: DialogPrompt,
    // Components
    admin_panel: AdminPanel,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let cfg = GuiConfig::load();
        let theme = cfg.theme();

        let state = match open_session() {
            Ok(session) => State::Ready(session),
            Err(e) => {
                error!("Failed to open the record store: {e}");
                State::Error(e.to_string())
            }
        };

        (
            Self {
                title: "Casa Geriátrica São Mateus".into(),
                theme,
                cfg,
                state,
                prompt: DialogPrompt,
                admin_panel: AdminPanel::new(),
            },
            Task::none(),
        )
    }

    // Translate component messages into session intents
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let intent = match message {
            Message::Header(header::Message::BrandPressed) => Intent::GoHome,
            Message::Header(header::Message::RestrictedPressed) => Intent::ToggleRestricted,
            Message::Listing(listing::Message::ContributePressed) => Intent::OpenDonation,
            Message::DonationModal(donation_modal::Message::ClosePressed) => Intent::CloseDonation,
            Message::Login(login::Message::PasswordChanged(password)) => {
                Intent::PasswordChanged(password)
            }
            Message::Login(login::Message::SubmitPressed) => Intent::SubmitLogin,
            Message::AdminPanel(msg) => match self.admin_panel.update(msg) {
                admin_panel::Action::None => return Task::none(),
                admin_panel::Action::Run(task) => return task.map(Message::AdminPanel),
                admin_panel::Action::Add(draft) => Intent::AddRecord(draft),
                admin_panel::Action::Delete(id) => Intent::DeleteRecord(id),
            },
        };

        let State::Ready(session) = &mut self.state else {
            return Task::none();
        };

        let adding = matches!(intent, Intent::AddRecord(_));

        match session.dispatch(intent, &self.prompt) {
            Ok(()) if adding => self.admin_panel.clear(),
            Ok(()) => {}
            Err(e) => {
                error!("{e}");
                self.prompt.notify(SAVE_FAILED);
            }
        }

        Task::none()
    }

    // Render the active screen from the session
    pub fn view(&self) -> Element<'_, Message> {
        let session = match &self.state {
            State::Error(e) => {
                return center(column![text("Não foi possível abrir os dados."), text(e)].spacing(8))
                    .into();
            }
            State::Ready(session) => session,
        };

        let current = session.view();
        let body = match current {
            View::Listing => listing::view(session.store().records()).map(Message::Listing),
            View::Login => login::view(session.views().password()).map(Message::Login),
            View::Admin => self
                .admin_panel
                .view(session.store().records())
                .map(Message::AdminPanel),
        };

        let content = column![
            header::view(current).map(Message::Header),
            scrollable(column![body, footer()]).height(Fill),
        ]
        .height(Fill);

        if session.donation_open() {
            donation_overlay(
                content.into(),
                donation_modal::view(&self.cfg.donation).map(Message::DonationModal),
            )
        } else {
            content.into()
        }
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

fn open_session() -> needboard_lib::Result<Session> {
    let db = Db::new(&CoreConfig::load())?;
    Session::open(Box::new(db))
}

fn footer<'a>() -> Element<'a, Message> {
    container(
        column![
            text("CASA GERIÁTRICA SÃO MATEUS").size(11),
            text("© 2025 Dedicação Integral ao Bem Estar do Idoso").size(10),
        ]
        .spacing(8)
        .align_x(iced::Alignment::Center),
    )
    .padding(40)
    .center_x(Fill)
    .into()
}

/// Dim the page and float the donation card over it. Clicking the dimmed area closes the card.
fn donation_overlay<'a>(
    page: Element<'a, Message>,
    card: Element<'a, Message>,
) -> Element<'a, Message> {
    let backdrop = mouse_area(center(opaque(card)).padding(24).style(scrim)).on_press(
        Message::DonationModal(donation_modal::Message::ClosePressed),
    );

    stack![page, opaque(backdrop)]
        .width(Fill)
        .height(Fill)
        .into()
}

fn scrim(theme: &Theme) -> container::Style {
    let shade = if theme.extended_palette().is_dark {
        Color::BLACK
    } else {
        theme.palette().text
    };

    container::background(Color {
        a: SCRIM_ALPHA,
        ..shade
    })
}
