use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "textcodec")]
#[command(about = "Encode, decode and jump across sixteen text schemes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args)]
pub struct TranscodeArgs {
    #[arg(long, short = 's', help = "Scheme name, e.g. Base64, Hex, MorseCode")]
    pub scheme: String,

    #[arg(long, short = 'i', default_value = "-", help = "Input: '-' for stdin, @path for a file, or literal text")]
    pub r#in: String,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Encode text with a scheme")]
    Enc(TranscodeArgs),

    #[command(about = "Decode text with a scheme")]
    Dec(TranscodeArgs),

    #[command(about = "Decode text and validate it as a redirect URL")]
    Jmp(TranscodeArgs),

    #[command(about = "List supported schemes")]
    List {
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Show scheme details")]
    Info {
        scheme: String,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "Run the HTTP service")]
    Serve {
        #[arg(long, env = "TEXTCODEC_BIND", default_value = "127.0.0.1:8787")]
        bind: SocketAddr,

        #[arg(long, env = "TEXTCODEC_READ_TIMEOUT", default_value_t = 10, help = "Seconds to wait for a request head")]
        read_timeout: u64,
    },
}
