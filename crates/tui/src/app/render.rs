use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use snipview_core::format_title;

use super::App;
use crate::components::{
	CodePaneContext, InputContext, SidebarContext, SidebarRow, render_code_pane, render_input,
	render_sidebar,
};

const SIDEBAR_WIDTH: u16 = 32;
const KEY_HINTS: &str = "^Y copy  ^B index  Enter accept  Esc quit";
const BACK_TO_TOP_HINT: &str = "Home ↑ top";

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		self.refresh_document();

		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [prompt_area, body_area, status_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Min(1),
			Constraint::Length(1),
		])
		.areas(area);

		self.render_prompt(frame, prompt_area);

		if self.controller.layout().sidebar_visible() {
			let sidebar_width = SIDEBAR_WIDTH.min(body_area.width / 2);
			let [sidebar_area, code_area] =
				Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(1)])
					.areas(body_area);
			self.render_sidebar(frame, sidebar_area);
			self.render_code(frame, code_area);
		} else {
			self.sidebar.area = None;
			self.render_code(frame, body_area);
		}

		self.render_status(frame, status_area);
	}

	fn render_prompt(&mut self, frame: &mut Frame, area: Rect) {
		let count_label = format!(
			"{}/{}",
			self.controller.filtered_len(),
			self.controller.items().len()
		);
		let ctx = InputContext {
			search_input: &self.search_input,
			placeholder: Some(self.ui.filter_label.as_str()),
			count_label: &count_label,
			pending: self.controller.has_pending_query(),
			area,
			theme: &self.style.theme,
		};
		render_input(frame, ctx);
	}

	fn render_sidebar(&mut self, frame: &mut Frame, area: Rect) {
		self.sidebar.area = Some(area);
		let active = self.controller.active_item_id();
		let rows = self
			.controller
			.filtered_items()
			.into_iter()
			.map(|item| SidebarRow {
				item,
				active: active == Some(&item.id),
				copied: self.controller.copy_state(item.id.as_str()),
			})
			.collect();
		let ctx = SidebarContext {
			rows,
			title: &self.ui.sidebar_title,
			theme: &self.style.theme,
		};
		render_sidebar(frame, area, ctx, &mut self.sidebar.list_state);
	}

	fn render_code(&mut self, frame: &mut Frame, area: Rect) {
		self.code.area = Some(area);
		self.code.set_viewport(area.height.saturating_sub(2) as usize);
		self.controller.layout_mut().handle_scroll(self.code.scroll);

		let ctx = CodePaneContext {
			document: &self.code.document,
			scroll: self.code.scroll,
			metrics: self.code.metrics,
			scrollbar_state: &mut self.code.scrollbar_state,
			title: &self.ui.title,
			empty_label: &self.ui.empty_label,
			theme: &self.style.theme,
		};
		self.code.scrollbar_area = render_code_pane(frame, area, ctx);
	}

	fn render_status(&self, frame: &mut Frame, area: Rect) {
		let theme = &self.style.theme;
		let mut spans = match &self.copy_status {
			Some(status) if status.ok => {
				let title = self
					.controller
					.item(status.id.as_str())
					.map(|item| format_title(&item.title))
					.unwrap_or_else(|| status.id.to_string());
				vec![Span::styled(format!("Copied {title}"), theme.highlight)]
			}
			Some(_) => vec![Span::styled("Copy failed", theme.empty)],
			None => vec![Span::styled(KEY_HINTS, theme.muted_style())],
		};
		if self.controller.layout().show_back_to_top() {
			spans.push(Span::raw("  "));
			spans.push(Span::styled(BACK_TO_TOP_HINT, theme.prompt));
		}
		frame.render_widget(Paragraph::new(Line::from(spans)), area);
	}
}
