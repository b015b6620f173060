use std::io::Write;

use rxcompose::{
    CompileOptions,
    Fragment,
    fragment::{anchor, to_fragment, try_literal},
    render::{RegexFile, RenderOptions},
};

use crate::{logging::LogArgs, output::OutputArgs};

/// Args for the compile command.
#[derive(clap::Args, Debug)]
pub struct CompileArgs {
    /// Name of the compiled variable.
    #[arg(long)]
    name: String,

    /// Quote each fragment so it matches verbatim.
    #[arg(long)]
    literal: bool,

    /// Anchor the whole pattern at both ends.
    #[arg(long)]
    anchor: bool,

    /// Compile case-insensitively.
    #[arg(short = 'i', long)]
    case_insensitive: bool,

    /// Let `^` and `$` match at line boundaries.
    #[arg(long)]
    multi_line: bool,

    /// Module name used in the rendered file header.
    #[arg(long, default_value = "patterns")]
    module: String,

    /// Visibility prefix of the rendered items; empty for private.
    #[arg(long, default_value = "pub")]
    visibility: String,

    /// Print only the canonical pattern, not a Rust module.
    #[arg(long)]
    pattern_only: bool,

    /// Regex fragments, concatenated in order.
    #[arg(required = true)]
    fragments: Vec<String>,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    logging: LogArgs,
}

impl CompileArgs {
    /// Run the compile command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let mut fragments = self
            .fragments
            .iter()
            .map(|text| {
                if self.literal {
                    try_literal(text)
                } else {
                    Ok(to_fragment(text))
                }
            })
            .collect::<Result<Vec<Fragment>, _>>()?;

        if self.anchor {
            fragments = vec![anchor(&fragments)];
        }

        let compiler = CompileOptions::default()
            .with_case_insensitive(self.case_insensitive)
            .with_multi_line(self.multi_line)
            .compiler();

        let variable = compiler.compile(&self.name, &fragments)?;
        log::info!(
            "compiled {} with {} capture group(s)",
            variable.name(),
            variable.max_cap()
        );

        let mut writer = self.output.open_writer()?;
        if self.pattern_only {
            writeln!(writer, "{variable}")?;
        } else {
            let options = RenderOptions::default().with_visibility(&self.visibility);
            let file = RegexFile::with_variables(&self.module, [variable]);
            write!(writer, "{}", file.source(&options))?;
        }
        writer.flush()?;

        if let Some(path) = self.output.path() {
            log::info!("wrote {path}");
        }

        Ok(())
    }
}
