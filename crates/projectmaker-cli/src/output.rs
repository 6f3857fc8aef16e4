//! User-facing terminal output.
//!
//! Regular messages go to stdout. Warnings and errors go to stderr so they
//! stay visible when stdout is piped.

use std::borrow::Cow;
use std::io::{self, IsTerminal};
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Writes user-facing messages, honouring `--quiet` and colour settings.
pub struct OutputManager {
    interactive: bool,
    quiet: bool,
    no_color: bool,
    term: Term,
    err_term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            interactive: io::stdout().is_terminal(),
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    /// Unadorned line on stdout.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit(&self.term, msg.to_owned())
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        let line = self.tagged('+', msg, |t| t.green().bold().to_string());
        self.emit(&self.term, line)
    }

    /// Goes to stderr so it survives `> file` redirection of stdout.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        let line = self.tagged('!', msg, |t| t.yellow().bold().to_string());
        self.emit(&self.err_term, line)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        let line = self.tagged('*', msg, |t| t.blue().bold().to_string());
        self.emit(&self.term, line)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.bold().underline().to_string()
        };
        self.emit(&self.term, line)
    }

    /// Spinner shown while work is in progress.
    ///
    /// Hidden unless stdout is a terminal and quiet mode is off, so piped
    /// output never contains control sequences.
    pub fn spinner(&self, msg: impl Into<Cow<'static, str>>) -> ProgressBar {
        if self.quiet || !self.interactive {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        let template = if self.no_color {
            "{spinner} {msg}"
        } else {
            "{spinner:.green} {msg}"
        };
        if let Ok(style) = ProgressStyle::default_spinner().template(template) {
            spinner.set_style(style);
        }
        spinner.set_message(msg);
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    }

    fn tagged(&self, tag: char, msg: &str, paint: fn(&str) -> String) -> String {
        let tag = format!("[{tag}]");
        if self.no_color {
            format!("{tag} {msg}")
        } else {
            format!("{} {msg}", paint(&tag))
        }
    }

    fn emit(&self, term: &Term, line: String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        term.write_line(&line)
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            quiet,
            no_color,
            ..GlobalArgs::default()
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = manager(true, true);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn color_follows_flag() {
        assert!(manager(false, false).supports_color());
        assert!(!manager(false, true).supports_color());
    }

    #[test]
    fn config_can_disable_color() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let out = OutputManager::new(&GlobalArgs::default(), &config);
        assert!(!out.supports_color());
    }

    #[test]
    fn plain_tags_have_no_escape_codes() {
        let out = manager(false, true);
        assert_eq!(out.tagged('+', "done", |t| t.green().to_string()), "[+] done");
    }

    #[test]
    fn quiet_spinner_is_hidden() {
        let spinner = manager(true, true).spinner("working");
        assert!(spinner.is_hidden());
        spinner.finish_and_clear();
    }
}
