//! System clipboard backends for the terminal front-end.
//!
//! [`system_clipboard`] prefers a native helper program (`wl-copy`, `xclip`,
//! `xsel`, `pbcopy`) and falls back to an OSC52 escape sequence, which also
//! reaches the local clipboard through tmux and ssh.

use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use snipview_core::{Clipboard, ClipboardError, WithFallback};

/// A native helper program that reads the clipboard contents on stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardTool {
	program: String,
	args: Vec<String>,
}

impl ClipboardTool {
	pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
		Self {
			program: program.into(),
			args: args.iter().map(|arg| (*arg).to_string()).collect(),
		}
	}

	fn pipe(&self, text: &str) -> io::Result<bool> {
		let mut child = Command::new(&self.program)
			.args(&self.args)
			.stdin(Stdio::piped())
			.stdout(Stdio::null())
			.stderr(Stdio::null())
			.spawn()?;
		let written = match child.stdin.take() {
			Some(mut stdin) => stdin.write_all(text.as_bytes()),
			None => Ok(()),
		};
		// Reap the helper even when it hung up before reading everything.
		let status = child.wait()?;
		written?;
		Ok(status.success())
	}
}

/// Copies by piping into the first helper program that succeeds.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
	tools: Vec<ClipboardTool>,
}

impl CommandClipboard {
	/// Use exactly `tools`, tried in order.
	pub fn with_tools(tools: Vec<ClipboardTool>) -> Self {
		Self { tools }
	}

	/// The helpers usually available on this platform.
	pub fn detect() -> Self {
		let mut tools = Vec::new();
		if env::var_os("WAYLAND_DISPLAY").is_some() {
			tools.push(ClipboardTool::new("wl-copy", &[]));
		}
		tools.push(ClipboardTool::new("xclip", &["-selection", "clipboard"]));
		tools.push(ClipboardTool::new("xsel", &["--clipboard", "--input"]));
		tools.push(ClipboardTool::new("pbcopy", &[]));
		Self { tools }
	}
}

impl Clipboard for CommandClipboard {
	fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
		for tool in &self.tools {
			match tool.pipe(text) {
				Ok(true) => {
					log::debug!("copied {} bytes with {}", text.len(), tool.program);
					return Ok(());
				}
				Ok(false) => log::debug!("{} exited unsuccessfully", tool.program),
				Err(err) => log::debug!("{} unavailable: {err}", tool.program),
			}
		}
		Err(ClipboardError::Unavailable)
	}
}

/// Writes an OSC52 "set clipboard" sequence to a terminal stream.
///
/// The terminal gives no acknowledgement, so a successful write only means
/// the sequence was emitted.
#[derive(Debug)]
pub struct Osc52Clipboard<W> {
	out: W,
	tmux: bool,
}

impl Osc52Clipboard<io::Stdout> {
	/// Target the process stdout, wrapping the sequence for tmux when
	/// running inside it.
	pub fn stdout() -> Self {
		Self::new(io::stdout(), env::var_os("TMUX").is_some())
	}
}

impl<W: Write> Osc52Clipboard<W> {
	pub fn new(out: W, tmux: bool) -> Self {
		Self { out, tmux }
	}

	pub fn into_inner(self) -> W {
		self.out
	}
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
	fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
		let sequence = osc52_sequence(text, self.tmux);
		self.out
			.write_all(sequence.as_bytes())
			.and_then(|()| self.out.flush())
			.map_err(|err| ClipboardError::Rejected(err.to_string()))
	}
}

fn osc52_sequence(text: &str, tmux: bool) -> String {
	let encoded = STANDARD.encode(text);
	if tmux {
		format!("\x1bPtmux;\x1b\x1b]52;c;{encoded}\x07\x1b\\")
	} else {
		format!("\x1b]52;c;{encoded}\x07")
	}
}

/// Clipboard used by the interactive viewer.
pub fn system_clipboard() -> WithFallback<CommandClipboard, Osc52Clipboard<io::Stdout>> {
	WithFallback::new(CommandClipboard::detect(), Osc52Clipboard::stdout())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn osc52_encodes_payload() {
		insta::assert_snapshot!(osc52_sequence("hi", false).escape_debug().to_string(), @r"\u{1b}]52;c;aGk=\u{7}");
	}

	#[test]
	fn osc52_wraps_for_tmux() {
		let sequence = osc52_sequence("hi", true);
		assert!(sequence.starts_with("\x1bPtmux;\x1b\x1b]52;c;aGk="));
		assert!(sequence.ends_with("\x1b\\"));
	}

	#[test]
	fn osc52_writes_to_its_stream() {
		let mut clipboard = Osc52Clipboard::new(Vec::new(), false);
		clipboard.copy("x").unwrap();
		let written = String::from_utf8(clipboard.into_inner()).unwrap();
		assert_eq!(written, osc52_sequence("x", false));
	}

	#[test]
	fn missing_tools_report_unavailable() {
		let mut clipboard = CommandClipboard::with_tools(vec![ClipboardTool::new(
			"snipview-no-such-clipboard-helper",
			&[],
		)]);
		assert_eq!(clipboard.copy("x"), Err(ClipboardError::Unavailable));
	}

	#[cfg(unix)]
	#[test]
	fn helper_that_hangs_up_early_reports_the_write_error() {
		let tool = ClipboardTool::new("true", &[]);
		let payload = "x".repeat(1 << 20);
		let err = tool.pipe(&payload).expect_err("helper never reads stdin");
		assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
	}

	#[test]
	fn command_failure_falls_back_to_osc52() {
		let tools = CommandClipboard::with_tools(Vec::new());
		let mut clipboard = WithFallback::new(tools, Osc52Clipboard::new(Vec::new(), false));
		assert_eq!(clipboard.copy("fallback"), Ok(()));
	}
}
