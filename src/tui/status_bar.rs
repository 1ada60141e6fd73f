//! Status bar widget for status messages, the share link and key help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, InputMode, Theme};
use crate::shortcuts::{INPUT_CONTEXT, MAIN_CONTEXT};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::new();

        // First line: color input prompt, error, or status message
        if let InputMode::ColorInput(buffer) = &state.mode {
            lines.push(Line::from(vec![
                Span::styled("Color: ", Style::default().fg(theme.primary)),
                Span::styled(buffer.clone(), Style::default().fg(theme.text)),
                Span::styled("█", Style::default().fg(theme.accent)),
            ]));
        } else if let Some(error) = &state.error_message {
            lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.as_str()),
                Span::styled("  (Enter/Esc to dismiss)", Style::default().fg(theme.text_muted)),
            ]));
        } else {
            lines.push(Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.text),
            )));
        }

        lines.push(Line::from(vec![
            Span::styled("Share: ", Style::default().fg(theme.primary)),
            Span::styled(state.share_url(), Style::default().fg(theme.text_muted)),
        ]));

        if state.show_help {
            lines.push(Self::help_line(state, theme));
        }

        let status = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(theme.text_muted))
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Key help for the current input context
    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let context = match state.mode {
            InputMode::Normal => MAIN_CONTEXT,
            InputMode::ColorInput(_) => INPUT_CONTEXT,
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, label)) in state.shortcuts.help_entries(context).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(label, Style::default().fg(theme.text_muted)));
        }

        Line::from(spans)
    }
}
