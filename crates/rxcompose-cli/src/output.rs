use std::{
    fs::File,
    io::{BufWriter, Write},
};

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(short, long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// The output path, with "-" folded into `None` (stdout).
    pub fn path(&self) -> Option<&str> {
        match self.output.as_deref() {
            Some("-") | None => None,
            Some(p) => Some(p),
        }
    }

    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match self.path() {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_is_stdout() {
        let args = |output: Option<&str>| OutputArgs {
            output: output.map(str::to_string),
        };

        assert_eq!(args(None).path(), None);
        assert_eq!(args(Some("-")).path(), None);
        assert_eq!(args(Some("out.rs")).path(), Some("out.rs"));
    }
}
