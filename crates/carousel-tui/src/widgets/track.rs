use carousel_core::{CardConfig, ChildRole};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
    Frame,
};

use super::fit;
use crate::app::{App, Focus};
use crate::theme::Theme;

/// The carousel track, drawn through the viewport at the animated offset
///
/// The whole track is rendered into an offscreen buffer as wide as its
/// content, then the visible columns are copied into the frame. This is the
/// terminal equivalent of translating an overflow-hidden strip.
pub struct TrackWidget;

impl TrackWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let is_focused = app.focus == Focus::Carousel;

        let border_style = if is_focused {
            Style::default().fg(theme.focus)
        } else {
            Style::default().fg(theme.grey0)
        };

        let block = Block::default()
            .title(" Portfolio ")
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(theme.bg0));
        frame.render_widget(block, app.layout.track);

        let viewport = app.layout.viewport;
        let surface = app.slider.surface();
        let content_width = surface.content_width();
        if viewport.is_empty() || content_width == 0 {
            return;
        }

        let mut track = Buffer::empty(Rect::new(0, 0, content_width, viewport.height));
        let active = app.slider.controls().current_index;

        for (i, child) in surface.children().iter().enumerate() {
            let Some(start) = surface.child_start(i) else {
                continue;
            };
            let area = Rect::new(start, 0, child.width, viewport.height).intersection(track.area);
            match (child.role, child.card.and_then(|c| app.card(c))) {
                (ChildRole::Card, Some(card)) => {
                    let is_active = child.card == Some(active);
                    draw_card(&mut track, area, card, is_active, theme);
                }
                _ => draw_divider(&mut track, area, theme),
            }
        }

        blit(&track, frame.buffer_mut(), viewport, app.drawn_offset());
    }
}

fn draw_card(buf: &mut Buffer, area: Rect, card: &CardConfig, active: bool, theme: &Theme) {
    let border_style = if active {
        Style::default().fg(theme.active)
    } else {
        Style::default().fg(theme.grey1)
    };
    let title_width = usize::from(area.width.saturating_sub(4));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", fit(&card.title, title_width)),
            Style::default()
                .fg(theme.fg1)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(theme.bg1));
    let inner = block.inner(area);
    block.render(area, buf);

    let [body, tag_row] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    Paragraph::new(card.description.as_str())
        .style(Style::default().fg(theme.fg0))
        .wrap(Wrap { trim: true })
        .render(body, buf);

    if let Some(tag) = &card.tag {
        let label = fit(&format!("#{tag}"), usize::from(tag_row.width));
        Paragraph::new(Line::from(Span::styled(
            label,
            Style::default().fg(theme.tag),
        )))
        .render(tag_row, buf);
    }
}

fn draw_divider(buf: &mut Buffer, area: Rect, theme: &Theme) {
    for y in area.top()..area.bottom() {
        if let Some(cell) = buf.cell_mut((area.x, y)) {
            cell.set_symbol("┆").set_fg(theme.grey0);
        }
    }
}

/// Copy the columns of `track` starting at `offset` into `viewport`
fn blit(track: &Buffer, target: &mut Buffer, viewport: Rect, offset: f64) {
    // `as` saturates: negative and NaN land on 0
    let start = offset.round() as u16;

    for col in 0..viewport.width {
        let Some(src_x) = start.checked_add(col) else {
            break;
        };
        if src_x >= track.area.width {
            break;
        }
        for row in 0..viewport.height {
            let src = track.cell((src_x, row));
            let dst = target.cell_mut((viewport.x + col, viewport.y + row));
            if let (Some(src), Some(dst)) = (src, dst) {
                *dst = src.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    use carousel_core::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};

    use crate::input::Action;

    fn render(app: &App) -> Buffer {
        let backend = TestBackend::new(40, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| TrackWidget::render(frame, app))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    fn app() -> App {
        let mut config = AppConfig::default();
        config.ui.card_width = 20;
        config.ui.card_gap = 2;
        config.slider.reduced_motion = true;
        let mut app = App::new(config);
        let now = Instant::now();
        app.resize(Rect::new(0, 0, 40, 24), now);
        app.after_frame(now);
        app
    }

    #[test]
    fn test_first_card_visible_at_start() {
        let app = app();
        let buf = render(&app);
        let title_row = row_text(&buf, app.layout.viewport.y);
        assert!(title_row.contains("Aurora"));
        assert!(!title_row.contains("Harbor"));
    }

    #[test]
    fn test_track_scrolls_with_offset() {
        let mut app = app();
        app.dispatch(Action::GoTo(2), Instant::now() + Duration::from_millis(1));
        let buf = render(&app);
        let title_row = row_text(&buf, app.layout.viewport.y);
        assert!(title_row.contains("Harbor"));
        assert!(!title_row.contains("Aurora"));
    }

    #[test]
    fn test_blit_clips_to_content() {
        let mut track = Buffer::empty(Rect::new(0, 0, 4, 1));
        track.set_string(0, 0, "abcd", Style::default());
        let mut target = Buffer::empty(Rect::new(0, 0, 6, 1));

        blit(&track, &mut target, Rect::new(1, 0, 5, 1), 2.0);
        assert_eq!(row_text(&target, 0), " cd   ");

        blit(&track, &mut target, Rect::new(0, 0, 6, 1), -3.0);
        assert_eq!(row_text(&target, 0), "abcd  ");
    }
}
