use crate::core::languages::display_name;
use crate::ui::translator::TranslatorApp;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const PLACEHOLDER: &str = "Translation will appear here";

pub fn ui(f: &mut Frame, app: &TranslatorApp) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let session = app.session();
    let header = Paragraph::new(header_line(
        &session.source_language,
        &session.target_language,
    ))
    .style(Style::default().fg(Color::Gray));
    f.render_widget(header, rows[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(display_name(&session.source_language).to_string());
    let input_inner = input_block.inner(panes[0]);
    f.render_widget(input_block, panes[0]);
    f.render_widget(app.input(), input_inner);

    let output_block = Block::default()
        .borders(Borders::ALL)
        .title(display_name(&session.target_language).to_string());
    let output = if session.translated_text.is_empty() {
        Paragraph::new(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Paragraph::new(session.translated_text.as_str())
    };
    f.render_widget(
        output.block(output_block).wrap(Wrap { trim: false }),
        panes[1],
    );

    let status = Paragraph::new(status_line(app)).style(Style::default().fg(Color::Yellow));
    f.render_widget(status, rows[2]);
}

pub fn header_line(source_language: &str, target_language: &str) -> Line<'static> {
    Line::from(format!(
        "autotranslate v{} • {} → {} • Ctrl+S swap • Ctrl+F/Ctrl+T language • Ctrl+L clear • Esc quit",
        env!("CARGO_PKG_VERSION"),
        display_name(source_language),
        display_name(target_language),
    ))
}

/// Activity indicator followed by the input length.
pub fn status_line(app: &TranslatorApp) -> String {
    let activity = if app.session().pending {
        "Translating…"
    } else if app.scheduler().is_timer_live() {
        "Auto-translating…"
    } else {
        ""
    };
    let count = app.session().source_text.chars().count();
    let noun = if count == 1 { "character" } else { "characters" };
    if activity.is_empty() {
        format!("{count} {noun}")
    } else {
        format!("{activity}  {count} {noun}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::backend::{ProxyClient, TranslationBackend};
    use crate::core::scheduler::SchedulerOptions;
    use crate::ui::translator::TranslatorOptions;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::Arc;

    fn app() -> TranslatorApp {
        let backend: Arc<dyn TranslationBackend> = Arc::new(ProxyClient::new("http://127.0.0.1:1"));
        let (app, _rx) = TranslatorApp::new(
            backend,
            TranslatorOptions {
                source_language: "en".to_string(),
                target_language: "ja".to_string(),
                scheduler: SchedulerOptions::default(),
            },
        );
        app
    }

    #[test]
    fn header_names_both_languages() {
        let line = header_line("en", "ja").to_string();
        assert!(line.contains("English → Japanese"));
    }

    #[tokio::test(start_paused = true)]
    async fn status_reflects_timer_and_length() {
        let mut app = app();
        assert_eq!(status_line(&app), "0 characters");

        app.handle_key(KeyEvent::new(KeyCode::Char('é'), KeyModifiers::NONE));
        assert_eq!(status_line(&app), "Auto-translating…  1 character");
    }
}
