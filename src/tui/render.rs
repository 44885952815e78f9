//! Frame composition for the browser UI.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::components::rows::build_rows;
use super::components::tables::render_list;
use super::preview::popup_area;
use super::state::App;

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(1), Constraint::Min(1)])
			.split(area);

		self.search_input.render_textarea(frame, layout[0]);

		let body = layout[1];
		let list_area = if self.detail_enabled {
			let split = Layout::default()
				.direction(Direction::Horizontal)
				.constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
				.split(body);
			self.render_detail_pane(frame, split[1]);
			split[0]
		} else {
			body
		};

		self.render_sections(frame, list_area);
		self.render_peek(frame);
	}

	fn render_sections(&mut self, frame: &mut Frame, area: Rect) {
		let rows = build_rows(&self.browser, &self.flat, &self.style.theme);
		let title = self.ui.list_title.clone();
		let inner = render_list(
			frame,
			area,
			&mut self.table_state,
			rows,
			&title,
			&self.style.theme,
		);
		self.list_area = Some(inner);

		if self.browser.active().is_empty() && inner.height > 0 {
			let message = Paragraph::new(Span::styled(
				self.ui.empty_message.clone(),
				self.style.theme.empty_style(),
			))
			.alignment(Alignment::Center);
			let message_area = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
			frame.render_widget(message, message_area);
		}
	}

	fn render_detail_pane(&mut self, frame: &mut Frame, area: Rect) {
		let theme = &self.style.theme;
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(Style::default().fg(theme.header.fg.unwrap_or(ratatui::style::Color::Reset)))
			.title(self.ui.detail_title.clone());
		let paragraph = Paragraph::new(self.detail.to_text(theme)).block(block);
		frame.render_widget(paragraph, area);
	}

	fn render_peek(&mut self, frame: &mut Frame) {
		let Some(peek) = &self.peek else {
			return;
		};
		let theme = &self.style.theme;

		const PEEK_HINT: &str = "enter: open   esc: dismiss";

		let mut text: Text<'static> = peek.view.to_text(theme);
		text.lines.push(Line::default());
		text.lines
			.push(Line::from(Span::styled(PEEK_HINT, theme.empty_style())));

		let content_width = peek
			.view
			.width()
			.max(PEEK_HINT.width())
			.max(self.ui.peek_title.width());
		let width = (content_width as u16).saturating_add(4);
		// Card lines plus the blank/hint pair and the border rows.
		let height = (peek.view.height() as u16).saturating_add(4);
		let popup = popup_area(peek.anchor, frame.area(), width, height);

		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.marker_style())
			.title(self.ui.peek_title.clone());

		frame.render_widget(Clear, popup);
		frame.render_widget(Paragraph::new(text).block(block), popup);
	}
}
