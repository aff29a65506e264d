//! Search bar rendering (banner + input)

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use unicode_width::UnicodeWidthStr;

use crate::model::SearchBarState;

pub const PLACEHOLDER: &str = "Search for podcasts...";
const BANNER_HEIGHT: u16 = 5;
const INPUT_HEIGHT: u16 = 3;

/// Rows the search bar needs for its current state.
pub fn height(bar: &SearchBarState) -> u16 {
    if bar.is_expanded {
        BANNER_HEIGHT + INPUT_HEIGHT
    } else {
        INPUT_HEIGHT
    }
}

pub fn render_search_bar(
    frame: &mut Frame,
    area: Rect,
    bar: &SearchBarState,
    is_searching: bool,
    is_focused: bool,
) {
    let input_area = if bar.is_expanded {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(BANNER_HEIGHT), Constraint::Length(INPUT_HEIGHT)])
            .split(area);
        render_banner(frame, chunks[0]);
        chunks[1]
    } else {
        area
    };

    let border_style = if is_searching {
        Style::default().fg(Color::DarkGray)
    } else if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let (text, text_style) = if bar.query.is_empty() {
        (PLACEHOLDER.to_string(), Style::default().fg(Color::DarkGray))
    } else if is_searching {
        (bar.query.clone(), Style::default().fg(Color::DarkGray))
    } else {
        (bar.query.clone(), Style::default().fg(Color::White))
    };

    let title = if is_searching { " Searching... " } else { " Search " };

    let input = Paragraph::new(text).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .padding(Padding::horizontal(1))
            .border_style(border_style),
    );
    frame.render_widget(input, input_area);

    if is_focused && !is_searching {
        // inside border + padding
        let cursor_x = input_area
            .x
            .saturating_add(2)
            .saturating_add(cursor_column(&bar.query));
        if cursor_x < input_area.right().saturating_sub(1) {
            frame.set_cursor_position((cursor_x, input_area.y + 1));
        }
    }
}

/// Columns the query occupies on screen, saturating at `u16::MAX`.
fn cursor_column(query: &str) -> u16 {
    u16::try_from(query.width()).unwrap_or(u16::MAX)
}

fn render_banner(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("P O D C A S T   S E A R C H").style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("Find episodes by topic, guest or keyword")
            .style(Style::default().fg(Color::DarkGray)),
    ];

    let banner = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        );
    frame.render_widget(banner, area);
}
