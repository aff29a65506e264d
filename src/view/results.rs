//! Search results rendering: a count header followed by one card per record.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};

use crate::model::ResultRecord;
use super::utils::wrap_text;

/// Header text for a non-empty result list.
pub fn count_line(count: usize) -> String {
    format!("{} results found", count)
}

/// Draw the results into `area`. An empty list draws nothing at all.
pub fn render_results(
    frame: &mut Frame,
    area: Rect,
    results: &[ResultRecord],
    selected_index: usize,
    is_focused: bool,
) {
    if results.is_empty() {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let header = Paragraph::new(count_line(results.len()))
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search Results ")
                .padding(Padding::horizontal(1))
                .border_style(border_style),
        );
    frame.render_widget(header, chunks[0]);

    // borders + padding + indent
    let content_width = chunks[1].width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = results
        .iter()
        .enumerate()
        .map(|(i, record)| {
            ListItem::new(card_text(record, i == selected_index && is_focused, content_width))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .padding(Padding::horizontal(1))
                .border_style(border_style),
        )
        .highlight_style(Style::default()); // Highlight handled by card styles

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index.min(results.len() - 1)));

    frame.render_stateful_widget(list, chunks[1], &mut list_state);
}

/// One card: title, author, description, keywords, art and play lines.
/// Fields are wrapped to `width`, never cut.
fn card_text(record: &ResultRecord, is_selected: bool, width: usize) -> Text<'static> {
    let title_style = if is_selected {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    let art = match record.image_source() {
        Some(src) => format!("art: {} [{}]", src, record.alt_text()),
        None => format!("art: - [{}]", record.alt_text()),
    };
    let play = match record.play_url() {
        Some(url) => format!("▶ {}", url),
        None => "▶ unavailable".to_string(),
    };

    let fields = [
        (record.title(), title_style),
        (record.author(), Style::default().fg(Color::Cyan)),
        (record.description(), Style::default()),
        (record.keywords(), Style::default().add_modifier(Modifier::ITALIC)),
        (art.as_str(), Style::default().fg(Color::DarkGray)),
        (play.as_str(), Style::default().fg(Color::Green)),
    ];

    let mut lines = Vec::new();
    for (text, style) in fields {
        for wrapped in wrap_text(text, width) {
            let indent = if lines.is_empty() && is_selected { "> " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(indent, title_style),
                Span::styled(wrapped, style),
            ]));
        }
    }
    lines.push(Line::from(""));
    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::view::utils::test_support::{buffer_lines, buffer_text};

    fn titled(title: &str) -> ResultRecord {
        ResultRecord {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    fn draw(results: &[ResultRecord], width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| render_results(f, f.area(), results, 0, true))
            .unwrap();
        terminal
    }

    #[test]
    fn empty_results_draw_nothing() {
        let terminal = draw(&[], 40, 10);
        let lines = buffer_lines(terminal.backend().buffer());
        assert!(lines.iter().all(|line| line.trim().is_empty()));
    }

    #[test]
    fn count_line_is_exact() {
        assert_eq!(count_line(1), "1 results found");
        assert_eq!(count_line(100), "100 results found");

        let terminal = draw(&[titled("A"), titled("B")], 60, 30);
        assert!(buffer_text(terminal.backend().buffer()).contains("2 results found"));
    }

    #[test]
    fn cards_keep_input_order() {
        let results = [titled("Zeta"), titled("Alpha"), titled("Mid")];
        let terminal = draw(&results, 60, 40);
        let text = buffer_text(terminal.backend().buffer());

        let zeta = text.find("Zeta").unwrap();
        let alpha = text.find("Alpha").unwrap();
        let mid = text.find("Mid").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }

    #[test]
    fn card_shows_fields_and_resolved_urls() {
        let record = ResultRecord {
            title: Some("Strategy 101".to_string()),
            author: Some("Jane Host".to_string()),
            description: Some("All about\nstrategy".to_string()),
            keywords: Some("business, planning".to_string()),
            summary: Some("cover".to_string()),
            image_href: Some("https://img/href.png".to_string()),
            enclosure_url: Some("https://cdn/ep.mp3".to_string()),
            ..Default::default()
        };
        let terminal = draw(&[record], 80, 16);
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("Strategy 101"));
        assert!(text.contains("Jane Host"));
        let about = text.find("All about").unwrap();
        let strategy = text[about..].find("strategy").unwrap();
        // the line break in the description survives
        assert!(text[about..about + strategy].contains('\n'));
        assert!(text.contains("business, planning"));
        assert!(text.contains("art: https://img/href.png [cover]"));
        assert!(text.contains("https://cdn/ep.mp3"));
    }

    #[test]
    fn long_fields_are_wrapped_not_cut() {
        let record = ResultRecord {
            description: Some(
                "In this episode we discuss strategy with a founder who built \
                 three companies and sold two of them END-MARKER"
                    .to_string(),
            ),
            enclosure_url: Some("https://cdn.example.com/feeds/strategy/episode-042.mp3".to_string()),
            ..Default::default()
        };
        let terminal = draw(&[record], 50, 30);
        let lines = buffer_lines(terminal.backend().buffer());
        let text = lines.join("\n");

        assert!(text.contains("END-MARKER"));
        assert!(!text.contains("..."));
        // the URL is split over lines but every character is drawn
        let drawn: String = lines
            .iter()
            .map(|l| l.trim_matches(|c| c == '│' || c == ' '))
            .collect();
        assert!(drawn.contains("https://cdn.example.com/feeds/strategy/episode-042.mp3"));
    }

    #[test]
    fn missing_fields_render_empty() {
        let terminal = draw(&[ResultRecord::default()], 60, 12);
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("1 results found"));
        assert!(text.contains("art: - []"));
        assert!(text.contains("unavailable"));
    }
}
