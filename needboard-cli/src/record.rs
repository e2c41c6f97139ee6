use chrono::DateTime;
use clap::Subcommand;
use colored::Colorize;
use needboard_lib::{Intent, NeedDraft, NeedRecord, Prompt, Result, Session, View};
use sysexits::ExitCode;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List needed items, newest first
    List,
    /// Add a needed item
    Add {
        name: String,
        /// Image URL or path
        #[arg(short, long, default_value = "")]
        image: String,
        #[arg(short, long, default_value = "")]
        category: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// Admin key
        #[arg(short, long)]
        key: String,
    },
    /// Remove a needed item by id
    Remove {
        id: String,
        /// Admin key
        #[arg(short, long)]
        key: String,
        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

impl Command {
    pub fn assume_yes(&self) -> bool {
        matches!(self, Command::Remove { yes: true, .. })
    }
}

pub fn handle(session: &mut Session, cmd: &Command, prompt: &dyn Prompt) -> Result<ExitCode> {
    match cmd {
        Command::List => {
            let records = session.store().records();
            if records.is_empty() {
                println!("{}", "Nenhuma campanha ativa no momento.".dimmed());
            }
            for record in records {
                println!("{}", describe(record));
            }
        }
        Command::Add {
            name,
            image,
            category,
            description,
            key,
        } => {
            if !unlock(session, key, prompt)? {
                return Ok(ExitCode::NoPerm);
            }

            let draft = NeedDraft::new(name, image)
                .with_category(category)
                .with_description(description);
            session.dispatch(Intent::AddRecord(draft), prompt)?;

            if let Some(record) = session.store().records().first() {
                println!("{} {}", "Added".green(), describe(record));
            }
        }
        Command::Remove { id, key, .. } => {
            if !unlock(session, key, prompt)? {
                return Ok(ExitCode::NoPerm);
            }

            if session.store().get(id).is_none() {
                println!("No item with id {id}");
                return Ok(ExitCode::Ok);
            }

            session.dispatch(Intent::DeleteRecord(id.clone()), prompt)?;

            if session.store().get(id).is_none() {
                println!("{} {id}", "Removed".green());
            } else {
                println!("Kept {id}");
            }
        }
    }

    Ok(ExitCode::Ok)
}

/// Walk the session through the login prompt. Returns whether the admin panel was reached.
fn unlock(session: &mut Session, key: &str, prompt: &dyn Prompt) -> Result<bool> {
    session.dispatch(Intent::Navigate(View::Login), prompt)?;
    session.dispatch(Intent::PasswordChanged(key.into()), prompt)?;
    session.dispatch(Intent::SubmitLogin, prompt)?;

    Ok(session.view() == View::Admin)
}

fn describe(record: &NeedRecord) -> String {
    let created = DateTime::from_timestamp_millis(record.created_at())
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    let mut line = format!(
        "{} {} {}",
        record.id().dimmed(),
        record.name().bold(),
        created.dimmed()
    );
    if !record.category().is_empty() {
        line.push_str(&format!(" [{}]", record.category()));
    }
    if !record.description().is_empty() {
        line.push_str(&format!(" - {}", record.description()));
    }

    line
}
