mod cli;
mod commands;
mod io;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, TranscodeArgs};
use commands::CommandHandler;
use textcodec::{error, types, Context, Mode};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = match cli.command {
        Command::Serve { .. } => "info",
        _ => "warn",
    };
    init_tracing(default_filter);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            e.exit_code().into()
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn transcode_command(mode: Mode, args: TranscodeArgs) -> Box<dyn CommandHandler> {
    Box::new(commands::TranscodeCommand {
        mode,
        scheme: args.scheme,
        input: types::InputSource::parse(&args.r#in),
        json: args.json,
    })
}

fn run(cli: Cli) -> error::Result<()> {
    let ctx = Context::default();

    let handler: Box<dyn CommandHandler> = match cli.command {
        Command::Enc(args) => transcode_command(Mode::Encode, args),
        Command::Dec(args) => transcode_command(Mode::Decode, args),
        Command::Jmp(args) => transcode_command(Mode::Jump, args),

        Command::List { json } => Box::new(commands::ListCommand { json }),

        Command::Info { scheme, json } => Box::new(commands::InfoCommand { scheme, json }),

        Command::Serve { bind, read_timeout } => Box::new(commands::ServeCommand {
            bind,
            read_timeout: Duration::from_secs(read_timeout),
        }),
    };

    handler.execute(&ctx)
}
