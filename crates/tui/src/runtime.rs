//! Application runtime and event loop.

use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use snipview_core::ViewerController;

use crate::config::UiLabels;
use crate::outcome::ViewerOutcome;
use crate::style::StyleConfig;
use crate::App;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Construct an [`App`] around `controller` and run it to completion.
pub fn run(controller: ViewerController, ui: UiLabels, style: StyleConfig) -> Result<ViewerOutcome> {
	let mut app = App::new(controller).with_labels(ui).with_style(style);
	app.run()
}

impl App<'_> {
	/// Pump the terminal event loop until the user exits.
	pub fn run(&mut self) -> Result<ViewerOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;

		let initial_size = terminal.size()?;
		self.handle_resize(initial_size.width);

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<ViewerOutcome> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(width, _)) => self.handle_resize(width),
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						if let Some(outcome) = self.handle_key(key) {
							maybe_outcome = Some(outcome);
							break;
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => {}
				}
			}

			if let Some(outcome) = maybe_outcome {
				break Ok(outcome);
			}

			self.controller.tick();
			self.pump_viewer_events();

			terminal.draw(|frame| self.draw(frame))?;

			thread::sleep(frame_pause(self.controller.time_until_next_timer()));
		};

		self.controller.teardown();
		ratatui::restore();
		execute!(stdout(), DisableMouseCapture)?;

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}

/// Sleep for one frame, or less when a controller timer falls due sooner.
fn frame_pause(next_timer: Option<Duration>) -> Duration {
	next_timer.map_or(FRAME_INTERVAL, |due| due.min(FRAME_INTERVAL))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pause_is_a_frame_without_pending_timers() {
		assert_eq!(frame_pause(None), FRAME_INTERVAL);
		assert_eq!(frame_pause(Some(Duration::from_secs(2))), FRAME_INTERVAL);
	}

	#[test]
	fn pause_shortens_for_a_timer_due_within_the_frame() {
		assert_eq!(frame_pause(Some(Duration::from_millis(3))), Duration::from_millis(3));
		assert_eq!(frame_pause(Some(Duration::ZERO)), Duration::ZERO);
	}
}
