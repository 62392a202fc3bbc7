use crate::api::SearchResult;
use crate::tui::app::{App, SearchPhase};
use crate::tui::colors;
use crate::tui::effects::{self, Effects};
use crate::tui::results::ListState;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

/// Lines per result card: borders plus title, two snippet lines, footer.
const CARD_HEIGHT: u16 = 6;

/// Width of the relevance bar in the card footer.
const SCORE_BAR_WIDTH: usize = 20;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Result area
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);
    draw_search_bar(frame, app, chunks[1]);
    draw_main(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);

    // Show cursor in the search bar when focused
    if app.search.focused {
        // Border (1) + space (1) + magnifier glyph (2) + space (1)
        let typed = app.search.query[..app.search.cursor_pos].width() as u16;
        let cursor_x = chunks[1].x + 5 + typed;
        let cursor_y = chunks[1].y + 1;
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::raw(" \u{1F50D} "),
        Span::styled(
            "DocSeek",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ];

    // Result count on the right once a search has been performed
    if app.search_performed {
        if let Some(results) = app.phase.results() {
            let count = format!("{} results ", results.len());
            let used: usize = spans.iter().map(|s| s.content.width()).sum();
            let padding = (area.width as usize).saturating_sub(used + count.width());
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(count, Style::default().fg(Color::Gray)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.search.focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search ");

    let paragraph = if app.search.query.is_empty() {
        Paragraph::new(" \u{1F50D} Search for documents... (e.g., 'machine learning')")
            .block(block)
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
    } else {
        Paragraph::new(format!(" \u{1F50D} {}", app.search.query))
            .block(block)
            .style(Style::default().fg(Color::White))
    };

    frame.render_widget(paragraph, area);
}

/// View selection is a pure function of the current phase.
fn draw_main(frame: &mut Frame, app: &mut App, area: Rect) {
    app.list.visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);

    match &app.phase {
        SearchPhase::Idle => draw_idle(frame, app, area),
        SearchPhase::Loading => {
            let line = Line::from(vec![
                Span::styled(app.effects.spinner(), Style::default().fg(Color::Cyan)),
                Span::styled(" Searching...", Style::default().fg(Color::Cyan)),
            ]);
            draw_centered_lines(frame, vec![line], area);
        }
        SearchPhase::Failed(message) => {
            let line = Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            ));
            draw_centered_lines(frame, vec![line], area);
        }
        SearchPhase::Loaded(results) if results.is_empty() => {
            let lines = vec![
                Line::from(Span::styled(
                    "Your search did not match any documents.",
                    Style::default().fg(Color::Gray),
                )),
                Line::default(),
                Line::from(Span::styled(
                    "Try different keywords",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            draw_centered_lines(frame, lines, area);
        }
        SearchPhase::Loaded(results) => {
            draw_result_cards(frame, &app.list, &app.effects, results, area);
        }
    }
}

/// Introductory screen, shown only before the first search.
fn draw_idle(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(effects::wordmark_spans("DocSeek", app.effects.frame())),
        Line::default(),
        Line::from(Span::styled(
            "Semantic document retrieval powered by TF-IDF and Word2Vec",
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Type a query and press Enter to search",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    draw_centered_lines(frame, lines, area);
}

fn draw_result_cards(
    frame: &mut Frame,
    list: &ListState,
    effects: &Effects,
    results: &[SearchResult],
    area: Rect,
) {
    let start = list.scroll_offset;
    let end = (start + list.visible_rows).min(results.len());
    let revealed = effects.revealed(results.len());

    for (slot, index) in (start..end).enumerate() {
        // Cards stagger in after arrival; the index drives only the delay
        if index >= revealed {
            break;
        }

        let card_area = Rect::new(
            area.x,
            area.y + slot as u16 * CARD_HEIGHT,
            area.width,
            CARD_HEIGHT,
        )
        .intersection(area);
        if card_area.height == 0 {
            break;
        }
        let is_selected = list.selected == Some(index);
        draw_card(frame, &results[index], is_selected, card_area);
    }
}

fn draw_card(frame: &mut Frame, result: &SearchResult, is_selected: bool, area: Rect) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    // Title line, with the category badge when the document has one
    let mut title_spans = vec![Span::styled(
        result.display_title(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    if let Some(category) = &result.category {
        title_spans.push(Span::raw("  "));
        title_spans.push(Span::styled(
            format!("[{}]", category),
            Style::default().fg(colors::category_color(category)),
        ));
    }
    let title_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 1);
    frame.render_widget(Paragraph::new(Line::from(title_spans)), title_area);

    // Snippet, wrapped into two lines
    if inner.height >= 3 {
        let snippet_area = Rect::new(
            inner.x + 1,
            inner.y + 1,
            inner.width.saturating_sub(2),
            2,
        );
        frame.render_widget(
            Paragraph::new(result.snippet())
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true }),
            snippet_area,
        );
    }

    // Footer: document id on the left, relevance bar and percentage right
    if inner.height >= 4 {
        let footer_area = Rect::new(
            inner.x + 1,
            inner.y + 3,
            inner.width.saturating_sub(2),
            1,
        );
        frame.render_widget(Paragraph::new(footer_line(result, footer_area.width)), footer_area);
    }
}

fn footer_line(result: &SearchResult, width: u16) -> Line<'static> {
    let percent = result.score_percent();
    let filled = ((percent / 100.0) * SCORE_BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(SCORE_BAR_WIDTH);

    let id_text = format!("ID: {}", result.id);
    let percent_text = crate::format_percent(percent);

    let right_width = SCORE_BAR_WIDTH + 1 + percent_text.width();
    let padding = (width as usize).saturating_sub(id_text.width() + right_width);

    Line::from(vec![
        Span::styled(id_text, Style::default().fg(Color::DarkGray)),
        Span::raw(" ".repeat(padding)),
        Span::styled(
            "\u{2588}".repeat(filled),
            Style::default().fg(colors::score_color(percent)),
        ),
        Span::styled(
            "\u{2591}".repeat(SCORE_BAR_WIDTH - filled),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(" "),
        Span::styled(percent_text, Style::default().fg(Color::Yellow)),
    ])
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = if app.phase.is_loading() {
        format!(" \u{23F3} {}", app.status_message)
    } else {
        format!(" {}", app.status_message)
    };

    let right_text = " Tab:Focus  \u{2191}\u{2193}:Select  Enter:Search  Esc:Clear  Ctrl+Q:Quit ";

    let available_width = area.width as usize;
    let left_len = left_text.width();
    let right_len = right_text.width();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        format!("{:width$}", left_text, width = available_width)
    };

    let status = Paragraph::new(status_str)
        .style(Style::default().fg(Color::White).bg(Color::Rgb(0, 95, 135)));

    frame.render_widget(status, area);
}

/// Render a block of lines centered in `area`.
fn draw_centered_lines(frame: &mut Frame, lines: Vec<Line>, area: Rect) {
    let height = lines.len() as u16;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let target = Rect::new(area.x, y, area.width, height.min(area.height));

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        target,
    );
}
