use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::Theme;

/// Previous / next buttons, greyed out while disabled
pub struct ControlsWidget;

impl ControlsWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let controls = app.slider.controls();
        let theme = &app.theme;

        let prev = button(" ◀ Prev ", controls.prev_disabled, theme);
        frame.render_widget(
            Paragraph::new(prev).alignment(Alignment::Left),
            app.layout.prev_button,
        );

        let next = button(" Next ▶ ", controls.next_disabled, theme);
        frame.render_widget(
            Paragraph::new(next).alignment(Alignment::Right),
            app.layout.next_button,
        );
    }
}

fn button(label: &'static str, disabled: bool, theme: &Theme) -> Line<'static> {
    let style = if disabled {
        Style::default().fg(theme.disabled).bg(theme.bg1)
    } else {
        Style::default()
            .fg(theme.fg1)
            .bg(theme.bg2)
            .add_modifier(Modifier::BOLD)
    };
    Line::from(Span::styled(label, style))
}
