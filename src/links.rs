//! Candidate link list handling and browser launching

use std::io;
use std::process::{Command, Stdio};

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("Not an http(s) link: {0}")]
    UnsupportedLink(String),

    #[error("No browser opener found in PATH ({0})")]
    NoOpener(&'static str),

    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: &'static str,
        #[source]
        source: io::Error,
    },
}

/// Split the newline-separated link field into trimmed, non-empty entries
pub fn parse_link_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether `link` is one of the submitted links (exact match after trimming)
pub fn is_listed(link: &str, links: &[String]) -> bool {
    let link = link.trim();
    links.iter().any(|candidate| candidate == link)
}

/// Parse a link and accept only http and https URLs
pub fn validate_link(link: &str) -> Result<Url, OpenError> {
    let url = Url::parse(link.trim()).map_err(|_| OpenError::UnsupportedLink(link.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(OpenError::UnsupportedLink(link.to_string())),
    }
}

/// Program and argv that hand `url` to the platform's URL handler
///
/// The URL is always a single argv entry and no shell is involved, so
/// characters such as `&` or `|` in a query cannot start another command.
fn opener_command(os: &str, url: &Url) -> (&'static str, Vec<String>) {
    match os {
        "macos" => ("open", vec![url.to_string()]),
        "windows" => (
            "rundll32",
            vec![
                "url.dll,FileProtocolHandler".to_string(),
                url.to_string(),
            ],
        ),
        _ => ("xdg-open", vec![url.to_string()]),
    }
}

/// Open a link in the system browser as a detached process
pub fn open_in_browser(link: &str) -> Result<(), OpenError> {
    let url = validate_link(link)?;
    let (program, args) = opener_command(std::env::consts::OS, &url);
    let path = which::which(program).map_err(|_| OpenError::NoOpener(program))?;

    let mut child = Command::new(path)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| OpenError::Launch { program, source })?;

    log::debug!("Opened {} with {}", url, program);

    // Reap the opener so it does not linger as a zombie
    std::thread::spawn(move || {
        let _ = child.wait();
    });

    Ok(())
}
