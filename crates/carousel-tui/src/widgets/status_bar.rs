use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use carousel_core::Surface;
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let focus_str = match app.focus {
            Focus::Carousel => "Carousel",
            Focus::Page => "Page",
        };

        let status_text = if let Some(msg) = &app.status_message {
            msg.clone()
        } else if let Some(state) = app.slider.state() {
            let motion = if app.slider.surface().prefers_reduced_motion() {
                " | reduced motion"
            } else {
                ""
            };
            format!(
                " {} | Slide {}/{} | Offset {:.0}/{:.0}{}",
                focus_str,
                state.current_index() + 1,
                app.slider.slide_count().max(1),
                state.current_offset(),
                state.max_offset(),
                motion
            )
        } else {
            format!(" {} | inert", focus_str)
        };

        let help_hint = " q:quit h/l:slide 1-9:jump tab:focus ";
        let padding_len = usize::from(area.width)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.grey1).bg(theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
