//! UI rendering for the mushaf screen.
//!
//! One screen: a bordered card with the title, a status line (action hint
//! or loading spinner), an error banner when present, the loaded page and a
//! footer. The error banner never replaces content; a previously loaded
//! page stays on screen under it.

mod page;
mod theme;

pub use theme::{
    COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_GOLD, COLOR_HEADER, COLOR_LABEL, COLOR_LOADING,
    COLOR_TEXT,
};

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Application title shown in the header.
const TITLE: &str = "مصحف عشوائي 📖";

/// Label of the random-page action.
const ACTION_LABEL: &str = "أعطني صفحة عشوائية";

/// Shown next to the spinner while a load is in flight.
const LOADING_LABEL: &str = "جاري التحميل...";

/// Footer note carried over from the reference design.
const FOOTER_NOTE: &str = "❤️ ( ادعو لصاحب الموقع)";

/// Spinner frames for the loading state.
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let error_height = if app.error.is_some() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // status / action hint
            Constraint::Length(error_height),
            Constraint::Min(1),    // page content
            Constraint::Length(1), // footer
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(status_line(app)).alignment(Alignment::Center),
        chunks[1],
    );

    if let Some(ref message) = app.error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(COLOR_ERROR),
            )))
            .alignment(Alignment::Center),
            chunks[2],
        );
    }

    if let Some(ref current) = app.current_page {
        page::render(frame, chunks[3], current);
    }

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(FOOTER_NOTE, Style::default().fg(COLOR_DIM)),
            Span::styled("  ·  q خروج", Style::default().fg(COLOR_DIM)),
        ]))
        .alignment(Alignment::Center),
        chunks[4],
    );
}

/// Status line: spinner while loading, otherwise the keybinding hint.
/// The hint disappearing during a load mirrors a disabled button.
fn status_line(app: &App) -> Line<'static> {
    if app.loading {
        let frame_idx = (app.tick_count / 2) as usize % SPINNER.len();
        Line::from(vec![
            Span::styled(SPINNER[frame_idx], Style::default().fg(COLOR_LOADING)),
            Span::raw(" "),
            Span::styled(
                LOADING_LABEL.to_string(),
                Style::default().fg(COLOR_LOADING),
            ),
        ])
    } else {
        Line::from(Span::styled(
            format!("r: {}", ACTION_LABEL),
            Style::default().fg(COLOR_DIM),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, SeqRandom};
    use crate::api::QuranClient;
    use crate::app::{PageView, VerseLine};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn test_app() -> App {
        let client = QuranClient::with_url(
            Arc::new(MockHttpClient::new()),
            "https://example.com/v1",
        );
        App::new(client, Box::new(SeqRandom::new(vec![1])))
    }

    fn draw(app: &App) {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
    }

    #[test]
    fn test_render_initial_state() {
        draw(&test_app());
    }

    #[test]
    fn test_render_loading_state() {
        let mut app = test_app();
        app.loading = true;
        app.tick_count = 7;
        draw(&app);
    }

    #[test]
    fn test_render_error_over_loaded_page() {
        let mut app = test_app();
        app.current_page = Some(PageView {
            page_number: 1,
            surah_name: "الفاتحة".to_string(),
            content: vec![VerseLine {
                text: "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ".to_string(),
                number: 1,
            }],
            show_basmala: true,
        });
        app.error = Some("Page not found".to_string());
        draw(&app);
    }

    #[test]
    fn test_status_line_variants() {
        let mut app = test_app();
        assert!(!app.loading);
        let hint = status_line(&app);
        assert!(hint.spans[0].content.contains(ACTION_LABEL));

        app.loading = true;
        let spinner = status_line(&app);
        assert!(spinner
            .spans
            .iter()
            .any(|span| span.content.contains(LOADING_LABEL)));
    }
}
