//! Swatch row widget: one colored column per palette cell.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;
use crate::models::Cell;

/// Narrowest swatch that still gets a hex label.
const MIN_LABEL_WIDTH: u16 = 9;

/// Swatch row widget
pub struct SwatchRow;

impl SwatchRow {
    /// Render every cell as an equal-width column
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let palette = state.palette();
        let len = palette.len() as u32;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..len).map(|_| Constraint::Ratio(1, len)))
            .split(area);

        for (i, (cell, column)) in palette.iter().zip(columns.iter()).enumerate() {
            Self::render_swatch(f, *column, cell, i == state.selected, state);
        }
    }

    fn render_swatch(f: &mut Frame, area: Rect, cell: &Cell, selected: bool, state: &AppState) {
        let fill = cell.color.to_ratatui_color();
        let text = Self::label_color(cell);

        let mut lines = Vec::new();
        if state.config.ui.show_hex_labels && area.width >= MIN_LABEL_WIDTH {
            lines.push(Line::from(cell.color.to_hex()));
        }
        if cell.locked {
            lines.push(Line::from(if area.width >= MIN_LABEL_WIDTH {
                "locked"
            } else {
                "L"
            }));
        }

        // Center the labels vertically
        let inner_height = area.height.saturating_sub(2) as usize;
        let padding = inner_height.saturating_sub(lines.len()) / 2;
        let mut content = vec![Line::from(""); padding];
        content.extend(lines);

        let mut block = Block::default().style(Style::default().bg(fill));
        if selected {
            block = block
                .borders(Borders::ALL)
                .border_style(Style::default().fg(text).add_modifier(Modifier::BOLD));
        }

        let swatch = Paragraph::new(content)
            .alignment(Alignment::Center)
            .style(Style::default().bg(fill).fg(text))
            .block(block);

        f.render_widget(swatch, area);
    }

    /// Black on light colors, white on dark ones
    fn label_color(cell: &Cell) -> Color {
        if cell.color.is_light() {
            Color::Black
        } else {
            Color::White
        }
    }
}
