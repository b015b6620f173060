use std::io::Write;

use rxcompose::fragment::try_literal;

use crate::{logging::LogArgs, output::OutputArgs};

/// Args for the quote command.
#[derive(clap::Args, Debug)]
pub struct QuoteArgs {
    /// Text to quote; one output line per argument.
    #[arg(required = true)]
    text: Vec<String>,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    logging: LogArgs,
}

impl QuoteArgs {
    /// Run the quote command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let mut writer = self.output.open_writer()?;
        for text in &self.text {
            let quoted = try_literal(text)?;
            log::debug!("quoted {text:?} as {quoted}");
            writeln!(writer, "{quoted}")?;
        }
        writer.flush()?;

        Ok(())
    }
}
