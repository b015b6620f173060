use crate::commands::{compile::CompileArgs, quote::QuoteArgs};

pub mod compile;
pub mod quote;

/// Subcommands for rxcompose-cli
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Quote text so that it matches literally.
    Quote(QuoteArgs),

    /// Compile fragments into a named pattern.
    Compile(CompileArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Quote(cmd) => cmd.run(),
            Commands::Compile(cmd) => cmd.run(),
        }
    }
}
