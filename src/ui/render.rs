use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::app::{App, Focus, NoticeKind};
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DONE_TEXT, GLOBAL_BORDER, HEADER_TEXT, HINT_TEXT, STATUS_ERROR,
    STATUS_OK,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, list, input, hints) = layout_regions(frame.area());

    frame.render_widget(header_widget(app), header);
    frame.render_widget(list_widget(app, list.height), list);
    frame.render_widget(input_widget(app, input.width), input);
    frame.render_widget(hints_widget(app), hints);

    if app.focus() == Focus::Input && input.width > 2 && input.height > 2 {
        place_cursor(frame, app, input);
    }
}

fn header_widget(app: &App) -> Paragraph<'static> {
    let state = app.state();
    let text_style = Style::default().fg(HEADER_TEXT);
    let separator_style = Style::default().fg(HINT_TEXT);

    let mut spans = vec![
        Span::styled("  ticklist", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled("  │  ", separator_style),
        Span::styled(format!("{} open", state.open_count()), text_style),
        Span::styled("  │  ", separator_style),
        Span::styled(format!("{} done", state.done_count()), text_style),
    ];
    if app.is_loading() {
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled("fetching…", Style::default().fg(ACCENT)));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn list_widget(app: &App, height: u16) -> Paragraph<'static> {
    let state = app.state();
    if state.items.is_empty() {
        return Paragraph::new(Line::from(Span::styled(
            "  Nothing here yet. Type below and press Enter.",
            Style::default().fg(HINT_TEXT),
        )));
    }

    let visible = height as usize;
    let first = scroll_offset(app.selected(), state.items.len(), visible);

    let mut lines = Vec::new();
    for (idx, item) in state.items.iter().enumerate().skip(first).take(visible) {
        let selected = idx == app.selected() && app.focus() == Focus::List;
        let marker = if selected { "❯ " } else { "  " };
        let (check, check_style) = if item.done {
            ("[x] ", Style::default().fg(STATUS_OK))
        } else {
            ("[ ] ", Style::default().fg(HINT_TEXT))
        };
        let text_style = if item.done {
            Style::default().fg(DONE_TEXT).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(HEADER_TEXT)
        };

        let mut line = Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT)),
            Span::styled(check, check_style),
            Span::styled(item.text.clone(), text_style),
        ]);
        if selected {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }

    Paragraph::new(lines)
}

fn input_widget(app: &App, width: u16) -> Paragraph<'static> {
    let focused = app.focus() == Focus::Input;
    let (title, text) = match app.edit() {
        Some(edit) => (format!(" edit #{} ", edit.id), edit.buffer.clone()),
        None => (" new item ".to_string(), app.state().draft.clone()),
    };

    // Keep the tail (and the cursor cell) visible once the text outgrows
    // the box.
    let inner_width = width.saturating_sub(2) as usize;
    let overflow = text.chars().count().saturating_sub(inner_width.saturating_sub(1));

    let border_color = if focused { ACCENT } else { GLOBAL_BORDER };

    Paragraph::new(Line::from(Span::styled(text, Style::default().fg(HEADER_TEXT))))
        .scroll((0, overflow as u16))
        .block(
            Block::default()
                .title(Span::styled(title, Style::default().fg(border_color)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
}

fn hints_widget(app: &App) -> Paragraph<'static> {
    if let Some((text, kind)) = app.notice() {
        let color = match kind {
            NoticeKind::Info => STATUS_OK,
            NoticeKind::Error => STATUS_ERROR,
        };
        return Paragraph::new(Line::from(Span::styled(
            format!("  {text}"),
            Style::default().fg(color),
        )));
    }

    let hints = if app.is_editing() {
        "  Enter: save  Esc: cancel"
    } else {
        match app.focus() {
            Focus::Input => "  Enter: add  Tab: list  Ctrl+Q: quit",
            Focus::List => "  Space: toggle  e: edit  d: delete  r: reload  Tab: input  q: quit",
        }
    };
    Paragraph::new(Line::from(Span::styled(hints, Style::default().fg(HINT_TEXT))))
}

fn place_cursor(frame: &mut Frame<'_>, app: &App, input: Rect) {
    let text = match app.edit() {
        Some(edit) => edit.buffer.as_str(),
        None => app.state().draft.as_str(),
    };
    let inner_width = input.width.saturating_sub(2) as usize;
    let column = text.chars().count().min(inner_width.saturating_sub(1)) as u16;
    frame.set_cursor_position((input.x + 1 + column, input.y + 1));
}

/// First visible row such that the selected row stays on screen.
fn scroll_offset(selected: usize, len: usize, visible: usize) -> usize {
    if visible == 0 || len <= visible {
        return 0;
    }
    selected.min(len - 1).saturating_sub(visible - 1).min(len - visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lists_never_scroll() {
        assert_eq!(scroll_offset(0, 3, 10), 0);
        assert_eq!(scroll_offset(2, 3, 10), 0);
        assert_eq!(scroll_offset(2, 3, 3), 0);
    }

    #[test]
    fn selection_below_the_window_scrolls_down() {
        assert_eq!(scroll_offset(5, 10, 4), 2);
        assert_eq!(scroll_offset(9, 10, 4), 6);
    }

    #[test]
    fn offset_never_leaves_blank_rows_at_the_bottom() {
        // Even with an out-of-range selection the window stays full.
        assert_eq!(scroll_offset(42, 10, 4), 6);
    }

    #[test]
    fn zero_height_window_is_safe() {
        assert_eq!(scroll_offset(3, 10, 0), 0);
    }
}
