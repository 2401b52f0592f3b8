//! Status bar widget: one line of session context.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::RecordId;

/// Data passed to the status bar widget; decoupled from `Session`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Number of committed records.
    pub record_count: usize,
    /// The record under edit, if any.
    pub editing: Option<RecordId>,
    /// Outcome of the last action.
    pub message: Option<String>,
}

/// Formats the record count with the right plural.
fn count_label(count: usize) -> String {
    match count {
        1 => "1 record".to_string(),
        n => format!("{n} records"),
    }
}

/// Renders a one-line status bar.
///
/// Display format (Cyan), with optional parts:
/// - Idle:    `3 records  Record #3 added`
/// - Editing: `3 records  EDITING #2  Editing record #2` (EDITING in Yellow)
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let yellow = Style::default().fg(Color::Yellow);

    let mut spans = vec![Span::styled(count_label(ctx.record_count), cyan)];

    if let Some(id) = ctx.editing {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("EDITING {id}"), yellow));
    }
    if let Some(msg) = &ctx.message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(msg.clone(), cyan));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::tui::testing::buffer_to_string;

    fn render_status_bar(ctx: &StatusBarContext, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_status_bar(ctx, frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn count_label_plural() {
        assert_eq!(count_label(0), "0 records");
        assert_eq!(count_label(1), "1 record");
        assert_eq!(count_label(12), "12 records");
    }

    #[test]
    fn renders_idle() {
        let ctx = StatusBarContext {
            record_count: 3,
            editing: None,
            message: Some("Record #3 added".to_string()),
        };
        let output = render_status_bar(&ctx, 60);
        assert!(output.contains("3 records"), "should show count");
        assert!(output.contains("Record #3 added"), "should show message");
        assert!(!output.contains("EDITING"), "idle should not show EDITING");
    }

    #[test]
    fn renders_editing() {
        let ctx = StatusBarContext {
            record_count: 1,
            editing: Some(RecordId::new(2)),
            message: None,
        };
        let output = render_status_bar(&ctx, 60);
        assert!(output.contains("1 record"), "should show count");
        assert!(output.contains("EDITING #2"), "should show edit target");
    }

    #[test]
    fn renders_default() {
        let output = render_status_bar(&StatusBarContext::default(), 40);
        assert!(output.contains("0 records"));
    }
}
