//! Message log widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Widget};

use crate::theme::Theme;

/// Widget showing the most recent messages, newest at the bottom
pub struct MessagesWidget<'a> {
    messages: &'a [String],
    theme: Theme,
}

impl<'a> MessagesWidget<'a> {
    pub fn new(messages: &'a [String], theme: Theme) -> Self {
        Self { messages, theme }
    }
}

impl Widget for MessagesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = (area.height.saturating_sub(2)) as usize;
        let start = self.messages.len().saturating_sub(visible);
        let items: Vec<ListItem> = self.messages[start..]
            .iter()
            .map(|m| ListItem::new(m.as_str()))
            .collect();

        Widget::render(
            List::new(items)
                .style(Style::default().fg(self.theme.text))
                .block(Block::default().borders(Borders::ALL).title("Messages")),
            area,
            buf,
        );
    }
}
