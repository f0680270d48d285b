//! Rendering of a loaded page.
//!
//! Draws the page number, the surah label, the optional basmala block and
//! the verse text with inline verse numbers, all right-aligned for the
//! Arabic reading order.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{PageView, BASMALA};

use super::theme::{COLOR_DIM, COLOR_GOLD, COLOR_LABEL, COLOR_TEXT};

/// Render the page card into `area`.
pub fn render(frame: &mut Frame, area: Rect, page: &PageView) {
    if area.height < 4 || area.width < 10 {
        return;
    }

    let basmala_height = if page.show_basmala { 2 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // page number
            Constraint::Length(1), // surah label
            Constraint::Length(1), // spacer
            Constraint::Length(basmala_height),
            Constraint::Min(1), // verses
        ])
        .split(area);

    let number_line = Line::from(Span::styled(
        page.page_number.to_string(),
        Style::default().fg(COLOR_GOLD).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        Paragraph::new(number_line).alignment(Alignment::Center),
        chunks[0],
    );

    let label = fit_to_width(
        &format!("هذه الصفحة من سورة {}", page.surah_name),
        chunks[1].width as usize,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            label,
            Style::default().fg(COLOR_LABEL),
        )))
        .alignment(Alignment::Center),
        chunks[1],
    );

    if page.show_basmala {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                BASMALA,
                Style::default().fg(COLOR_GOLD).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            chunks[3],
        );
    }

    frame.render_widget(verses_paragraph(page), chunks[4]);
}

/// Build the wrapped verse paragraph: text in body color, `(n)` markers in
/// gold, one continuous flow like the printed page.
fn verses_paragraph(page: &PageView) -> Paragraph<'_> {
    let mut spans: Vec<Span> = Vec::with_capacity(page.content.len() * 3);
    for verse in &page.content {
        spans.push(Span::styled(
            verse.text.as_str(),
            Style::default().fg(COLOR_TEXT),
        ));
        spans.push(Span::styled(
            format!(" ({})", verse.number),
            Style::default().fg(COLOR_GOLD),
        ));
        spans.push(Span::styled(" ", Style::default().fg(COLOR_DIM)));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Right)
        .wrap(Wrap { trim: true })
}

/// Truncate `text` to at most `width` display columns, appending an
/// ellipsis when anything was cut.
fn fit_to_width(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
