use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use linkwise::error::LinkwiseError;
use linkwise::render::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "linkwise")]
#[command(about = "Suggest contextual internal links for a page using Gemini")]
#[command(version)]
pub struct Args {
    /// File with the page content to pre-fill ("-" reads standard input)
    #[arg(short, long, value_name = "FILE")]
    pub content: Option<PathBuf>,

    /// File with candidate links, one per line ("-" reads standard input)
    #[arg(short, long, value_name = "FILE")]
    pub links: Option<PathBuf>,

    /// Config file (default: ~/.config/linkwise/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run one request and print the suggestions instead of starting the UI
    #[arg(short, long)]
    pub print: bool,

    /// Output format for --print
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Html,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

impl Args {
    /// Read the page content and link list named on the command line
    ///
    /// Missing arguments yield empty strings.
    pub fn read_inputs(&self) -> Result<(String, String), LinkwiseError> {
        if let (Some(content), Some(links)) = (&self.content, &self.links)
            && is_stdin(content)
            && is_stdin(links)
        {
            return Err(LinkwiseError::StdinTwice);
        }

        Ok((
            read_input(self.content.as_deref())?,
            read_input(self.links.as_deref())?,
        ))
    }
}

fn read_input(path: Option<&Path>) -> Result<String, LinkwiseError> {
    match path {
        None => Ok(String::new()),
        Some(path) if is_stdin(path) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(LinkwiseError::Stdin)?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(path).map_err(|source| LinkwiseError::ReadInput {
            path: path.to_path_buf(),
            source,
        }),
    }
}
