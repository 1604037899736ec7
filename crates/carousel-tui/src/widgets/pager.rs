use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// One dot per slide, the active slide highlighted
///
/// Falls back to an "n / total" counter when the dots do not fit.
pub struct PagerWidget;

impl PagerWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let area = app.layout.pager;
        let theme = &app.theme;
        let count = app.slider.slide_count();
        if count == 0 || area.width == 0 {
            return;
        }
        let current = app.slider.controls().current_index;

        let line = if count * 2 <= usize::from(area.width) {
            let spans: Vec<Span> = (0..count)
                .map(|i| {
                    if i == current {
                        Span::styled("● ", Style::default().fg(theme.active))
                    } else {
                        Span::styled("○ ", Style::default().fg(theme.grey0))
                    }
                })
                .collect();
            Line::from(spans)
        } else {
            Line::from(Span::styled(
                format!("{} / {}", current + 1, count),
                Style::default().fg(theme.grey1),
            ))
        };

        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}
