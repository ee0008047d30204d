mod info;
mod serve;
mod transcode;

pub use info::{run_info, run_list};
pub use serve::run_serve;
pub use transcode::run_transcode;

use std::net::SocketAddr;
use std::time::Duration;

use crate::io::{write_json, write_text};
use textcodec::dispatch::Outcome;
use textcodec::error::Result;
use textcodec::types::{Context, InputSource, Mode};

pub trait CommandHandler {
    fn execute(&self, ctx: &Context) -> Result<()>;
}

pub struct TranscodeCommand {
    pub mode: Mode,
    pub scheme: String,
    pub input: InputSource,
    pub json: bool,
}

impl CommandHandler for TranscodeCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let outcome = run_transcode(ctx, self.mode, &self.scheme, &self.input)?;

        if self.json {
            return write_json(&outcome);
        }

        match &outcome {
            Outcome::Text(result) => {
                if !result.partial_loss.is_empty() {
                    eprintln!(
                        "warning: {} could not carry {} item(s): {}",
                        result.scheme,
                        result.partial_loss.len(),
                        result.partial_loss.dropped.join(" ")
                    );
                }
                write_text(&result.value)
            }
            Outcome::Redirect { target, .. } => write_text(target.as_str()),
        }
    }
}

pub struct ListCommand {
    pub json: bool,
}

impl CommandHandler for ListCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let schemes = run_list(ctx);
        if self.json {
            return write_json(&schemes);
        }

        println!("{:<20} {:<10} DESCRIPTION", "NAME", "UNIT");
        println!("{}", "-".repeat(72));
        for meta in schemes {
            println!("{:<20} {:<10} {}", meta.name, format!("{:?}", meta.unit), meta.description);
        }
        Ok(())
    }
}

pub struct InfoCommand {
    pub scheme: String,
    pub json: bool,
}

impl CommandHandler for InfoCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let meta = run_info(ctx, &self.scheme)?;
        if self.json {
            return write_json(&meta);
        }

        let aliases = if meta.aliases.is_empty() {
            "-".to_string()
        } else {
            meta.aliases.join(", ")
        };
        println!("Name:        {}", meta.name);
        println!("Aliases:     {}", aliases);
        println!("Alphabet:    {}", meta.alphabet);
        println!("Unit:        {:?}", meta.unit);
        println!("Padding:     {:?}", meta.padding);
        println!("Case:        {:?}", meta.case_sensitivity);
        println!("Lossy:       {}", meta.lossy);
        println!("Description: {}", meta.description);
        Ok(())
    }
}

pub struct ServeCommand {
    pub bind: SocketAddr,
    pub read_timeout: Duration,
}

impl CommandHandler for ServeCommand {
    fn execute(&self, _ctx: &Context) -> Result<()> {
        run_serve(self.bind, self.read_timeout)
    }
}
