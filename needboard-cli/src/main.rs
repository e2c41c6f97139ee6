use clap::Parser;
use colored::Colorize;
use needboard_lib::{Db, Session, config::CoreConfig};
use sysexits::ExitCode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::prompt::TerminalPrompt;

mod prompt;
mod record;

#[derive(Parser, Debug)]
#[command(name = "needboard")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: record::Command,

    /// Work on a throwaway in-memory store instead of the one on disk
    #[arg(long, global = true)]
    ephemeral: bool,
}

fn main() -> ExitCode {
    human_panic::setup_panic!();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logging: {e}");
    }

    let cli = Cli::parse();

    let mut session = match open_session(cli.ephemeral) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            return ExitCode::IoErr;
        }
    };

    let prompt = TerminalPrompt::new(cli.command.assume_yes());

    match record::handle(&mut session, &cli.command, &prompt) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            ExitCode::IoErr
        }
    }
}

fn open_session(ephemeral: bool) -> needboard_lib::Result<Session> {
    let db = if ephemeral {
        Db::in_memory()?
    } else {
        Db::new(&CoreConfig::load())?
    };

    Session::open(Box::new(db))
}

#[cfg(test)]
mod test {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "needboard",
            "add",
            "Cadeira de rodas",
            "--image",
            "x.jpg",
            "-k",
            "saomateus2025",
            "--ephemeral",
        ])
        .unwrap();

        assert!(cli.ephemeral);
        assert!(matches!(
            cli.command,
            record::Command::Add { ref name, ref image, .. } if name == "Cadeira de rodas" && image == "x.jpg"
        ));
    }

    #[test]
    fn test_add_requires_key() {
        assert!(Cli::try_parse_from(["needboard", "add", "Fraldas"]).is_err());
    }
}
