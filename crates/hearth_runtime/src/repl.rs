//! The interactive command loop.
//!
//! Plain lines are voice commands routed to the hub; lines starting with
//! `:` are meta-commands for inspecting the hub itself.

use std::fs;
use std::path::Path;

use hearth_foundation::Result;

use crate::demo::DEMO_SCRIPT;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::hub::{CommandHub, CommandOutcome};

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The hub commands are routed to.
    hub: CommandHub,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Whether to print the parse trace after every command.
    trace_mode: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            hub: CommandHub::new(),
            show_banner: true,
            trace_mode: false,
            prompt: "hearth> ".to_string(),
        }
    }

    /// Sets the hub for this REPL.
    #[must_use]
    pub fn with_hub(mut self, hub: CommandHub) -> Self {
        self.hub = hub;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Enables printing the parse trace after every command.
    #[must_use]
    pub const fn with_trace_mode(mut self) -> Self {
        self.trace_mode = true;
        self
    }

    /// Returns a reference to the hub.
    #[must_use]
    pub const fn hub(&self) -> &CommandHub {
        &self.hub
    }

    /// Returns a mutable reference to the hub.
    pub fn hub_mut(&mut self) -> &mut CommandHub {
        &mut self.hub
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            let prompt = self.prompt.clone();
            match self.editor.read_line(&prompt)? {
                ReadResult::Eof => break,
                ReadResult::Interrupted => continue,
                ReadResult::Line(input) => {
                    let trimmed = input.trim().to_string();
                    if trimmed.is_empty() {
                        continue;
                    }
                    self.editor.add_history(&trimmed);
                    if !self.eval_line(&trimmed)? {
                        break;
                    }
                }
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Runs every command in a file, one per line, printing each outcome.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn eval_file(&mut self, path: &Path) -> Result<()> {
        let script = fs::read_to_string(path)?;
        for line in script.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            self.submit(trimmed)?;
        }
        Ok(())
    }

    /// Evaluates one line. Returns `Ok(false)` to exit the loop.
    fn eval_line(&mut self, line: &str) -> Result<bool> {
        if let Some(meta) = line.strip_prefix(':') {
            return self.eval_meta(meta);
        }
        self.submit(line)?;
        Ok(true)
    }

    /// Routes a voice command to the hub and prints the outcome.
    fn submit(&mut self, command: &str) -> Result<()> {
        println!("> {command}");
        match self.hub.new_command(command)? {
            CommandOutcome::Dispatched(report) => println!("  {report}"),
            CommandOutcome::NoMatch => println!("  no match"),
        }
        if self.trace_mode {
            self.print_trace();
        }
        Ok(())
    }

    /// Evaluates a `:` meta-command. Returns `Ok(false)` to exit.
    fn eval_meta(&mut self, meta: &str) -> Result<bool> {
        match meta.trim() {
            "devices" => {
                for device in self.hub.registry().iter() {
                    println!("  {} ({})", device.nickname(), device.kind());
                }
            }
            "trace" => self.print_trace(),
            "demo" => {
                for command in DEMO_SCRIPT {
                    self.submit(command)?;
                }
            }
            "help" => Self::print_help(),
            "quit" => return Ok(false),
            other => println!("unknown command :{other} (try :help)"),
        }
        Ok(true)
    }

    fn print_trace(&self) {
        match self.hub.last_trace() {
            Some(trace) => print!("{trace}"),
            None => println!("no command parsed yet"),
        }
    }

    fn print_banner(&self) {
        println!("Hearth {} - voice command hub", env!("CARGO_PKG_VERSION"));
        println!(
            "{} device(s) connected. Type a command, or :help.",
            self.hub.registry().len()
        );
    }

    fn print_help() {
        println!(
            "Commands:
  <free-form voice command>   e.g. Alexa! Turn-off kitchen lights.
  :devices                    list connected devices
  :trace                      print the last command's parse trace
  :demo                       run the demo command script
  :help                       this text
  :quit                       exit (also Ctrl+D)"
        );
    }
}
