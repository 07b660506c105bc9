use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

use pingview::{HealthProbe, Notice, Notifier, PingStatus};

use crate::app::{App, Focus};

const BUTTON_LABEL: &str = "Ping";
const BUTTON_WIDTH: u16 = 10;

pub fn render<P, N>(frame: &mut Frame, app: &App<P, N>)
where
    P: HealthProbe,
    N: Notifier,
{
    let [header, controls, log, status] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header);
    render_controls(frame, controls, app);
    render_log(frame, log, app);
    render_status(frame, status, app);

    if let Some(notice) = &app.modal {
        render_modal(frame, frame.area(), notice);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            " Ping console",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            " Pings the backend health endpoint and logs the result.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::Rgb(60, 60, 60))
    }
}

fn render_controls<P, N>(frame: &mut Frame, area: Rect, app: &App<P, N>)
where
    P: HealthProbe,
    N: Notifier,
{
    let [input_area, button_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
            .spacing(1)
            .areas(area);

    let input_focused = app.focus == Focus::Input && app.modal.is_none();
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(focus_style(input_focused));
    let inner = input_block.inner(input_area);

    let text = app.view.input();
    let input = if text.is_empty() {
        Paragraph::new(Span::styled("Type here…", Style::default().fg(Color::DarkGray)))
    } else {
        // Keep the cursor visible by scrolling long input horizontally.
        let cursor = u16::try_from(app.cursor.min(text.chars().count())).unwrap_or(u16::MAX);
        let offset = cursor.saturating_sub(inner.width.saturating_sub(1));
        Paragraph::new(text).scroll((0, offset))
    };
    frame.render_widget(input.block(input_block), input_area);

    if input_focused && inner.width > 0 {
        let cursor = u16::try_from(app.cursor.min(text.chars().count())).unwrap_or(u16::MAX);
        let x = cursor.min(inner.width.saturating_sub(1));
        frame.set_cursor_position((inner.x + x, inner.y));
    }

    let button_focused = app.focus == Focus::Button && app.modal.is_none();
    let label_style = if button_focused {
        Style::default().fg(Color::Black).bg(Color::Magenta).bold()
    } else {
        Style::default().fg(Color::White).bold()
    };
    let button = Paragraph::new(Span::styled(BUTTON_LABEL, label_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(focus_style(button_focused)),
        );
    frame.render_widget(button, button_area);
}

fn status_color(status: PingStatus) -> Color {
    match status {
        PingStatus::Http(code) if (200..300).contains(&code) => Color::Green,
        PingStatus::Http(_) => Color::Yellow,
        PingStatus::TransportFailure => Color::Red,
    }
}

fn render_log<P, N>(frame: &mut Frame, area: Rect, app: &App<P, N>)
where
    P: HealthProbe,
    N: Notifier,
{
    let entries = app.view.log().entries();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(60, 60, 60)))
        .padding(Padding::new(1, 1, 0, 0))
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled("LOG", Style::default().fg(Color::Yellow).bold()),
            Span::styled(
                format!(" {} ", entries.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

    let inner = block.inner(area);
    if inner.width == 0 || inner.height == 0 {
        frame.render_widget(block, area);
        return;
    }

    // Entries are short and never wrap, so only the tail that fits is drawn.
    let tail = &entries[entries.len().saturating_sub(inner.height as usize)..];
    let lines: Vec<Line> = tail
        .iter()
        .map(|record| {
            Line::from(Span::styled(
                record.to_string(),
                Style::default().fg(status_color(record.status)),
            ))
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn render_status<P, N>(frame: &mut Frame, area: Rect, app: &App<P, N>)
where
    P: HealthProbe,
    N: Notifier,
{
    let backend = match app.view.base_url() {
        Some(base) => Span::styled(base.to_string(), Style::default().fg(Color::White)),
        None => Span::styled(
            format!("{} not set", pingview::API_BASE_URL_VAR),
            Style::default().fg(Color::Red),
        ),
    };

    let mut spans = vec![
        Span::styled(" backend: ", Style::default().fg(Color::DarkGray)),
        backend,
    ];

    let in_flight = app.view.in_flight();
    if in_flight > 0 {
        spans.push(Span::styled(
            format!("  {in_flight} in flight"),
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::styled(
        "  tab focus · enter/ctrl-p ping · esc quit",
        Style::default().fg(Color::DarkGray),
    ));

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(20, 20, 20)));
    frame.render_widget(bar, area);
}

fn render_modal(frame: &mut Frame, area: Rect, notice: &Notice) {
    let width = area.width.min(60);
    let height = area.height.min(7);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, popup);

    let body = vec![
        Line::from(Span::styled(notice.to_string(), Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            "press enter to dismiss",
            Style::default().fg(Color::DarkGray).italic(),
        )),
    ];

    let dialog = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red))
                .padding(Padding::new(1, 1, 0, 0))
                .title(Span::styled(
                    format!(" {} ", notice.title()),
                    Style::default().fg(Color::Red).bold(),
                ))
                .style(Style::default().bg(Color::Rgb(30, 30, 30))),
        );
    frame.render_widget(dialog, popup);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pingview::{
        PingView, RecordingNotifier, ScriptedProbe, ScriptedReply, ViewConfig,
    };
    use ratatui::backend::TestBackend;

    use super::*;

    type TestApp = App<ScriptedProbe, Arc<RecordingNotifier>>;

    fn app(base: Option<&str>, probe: ScriptedProbe) -> TestApp {
        let view = PingView::new(
            ViewConfig::from_value(base),
            probe,
            Arc::new(RecordingNotifier::new()),
        );
        App::new(view)
    }

    fn draw(app: &TestApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[tokio::test]
    async fn shows_controls_and_backend() {
        let app = app(Some("https://api.example.com"), ScriptedProbe::default());
        let screen = draw(&app);

        assert!(screen.contains("Ping console"));
        assert!(screen.contains("Ping"));
        assert!(screen.contains("LOG 0"));
        assert!(screen.contains("https://api.example.com"));
    }

    #[tokio::test]
    async fn shows_log_entries_oldest_first() {
        let probe = ScriptedProbe::default()
            .then(ScriptedReply::Status(200))
            .then(ScriptedReply::TransportFailure);
        let mut app = app(Some("https://api.example.com"), probe);

        for _ in 0..2 {
            app.view.ping().unwrap();
            app.view.next_result().await.unwrap();
        }

        let screen = draw(&app);
        let first = screen.find("ping -> 200").expect("first entry drawn");
        let second = screen.find("ping -> NG").expect("second entry drawn");
        assert!(first < second);
        assert!(screen.contains("LOG 2"));
    }

    #[tokio::test]
    async fn shows_missing_backend_and_modal() {
        let mut app = app(None, ScriptedProbe::default());
        app.modal = Some(Notice::configuration_missing());

        let screen = draw(&app);
        assert!(screen.contains("API_BASE_URL not set"));
        assert!(screen.contains("Configuration missing"));
        assert!(screen.contains("press enter to dismiss"));
    }

    #[tokio::test]
    async fn log_scrolls_to_newest_entry() {
        let mut probe = ScriptedProbe::always(ScriptedReply::Status(200));
        for _ in 0..30 {
            probe = probe.then(ScriptedReply::Status(200));
        }
        probe = probe.then(ScriptedReply::Status(503));
        let mut app = app(Some("https://api.example.com"), probe);

        for _ in 0..31 {
            app.view.ping().unwrap();
            app.view.next_result().await.unwrap();
        }

        let screen = draw(&app);
        assert!(screen.contains("ping -> 503"));
        assert!(screen.contains("LOG 31"));
    }

    #[tokio::test]
    async fn newest_entry_stays_visible_past_u16_lines() {
        const PINGS: usize = 70_000;

        // Every ping but the last answers 200; the fallback answers the last.
        let mut probe = ScriptedProbe::always(ScriptedReply::Status(503));
        for _ in 0..PINGS - 1 {
            probe = probe.then(ScriptedReply::Status(200));
        }
        let mut app = app(Some("https://api.example.com"), probe);

        for _ in 0..PINGS {
            app.view.ping().unwrap();
            app.view.next_result().await.unwrap();
        }

        let screen = draw(&app);
        assert!(screen.contains("LOG 70000"));
        assert!(screen.contains("ping -> 503"), "newest entry not visible:\n{screen}");
        let newest = screen.find("ping -> 503").unwrap();
        let older = screen.rfind("ping -> 200").expect("older entries drawn above");
        assert!(older < newest);
    }

    #[tokio::test]
    async fn cursor_far_past_u16_keeps_input_renderable() {
        let mut app = app(Some("https://api.example.com"), ScriptedProbe::default());
        app.view.update_input("x".repeat(70_000));
        app.cursor = 70_000;

        let screen = draw(&app);
        assert!(screen.contains("xxxx"));
    }
}
