use crate::session::QuizSession;
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::truncate_to_width;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz(f: &mut Frame, session: &QuizSession) {
    let Some(question) = session.current_question() else {
        return;
    };
    let layout = calculate_quiz_chunks(f.area());

    let header = Paragraph::new(format!(
        "Databricks DE Professional Quiz - {}",
        session.progress_label()
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let mut question_text = Text::from(question.prompt.as_str());
    if question.has_images() {
        question_text.push_line(Line::from(""));
        if session.images_visible() {
            let width = layout.question_area.width.saturating_sub(4) as usize;
            for image in &question.images {
                question_text.push_line(Line::from(Span::styled(
                    format!("[img] {}", truncate_to_width(image, width)),
                    Style::default().fg(Color::Magenta),
                )));
            }
        } else {
            question_text.push_line(Line::from(Span::styled(
                format!("({} image(s) hidden - press i to show)", question.images.len()),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    let question_widget = Paragraph::new(question_text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Question #{}", question.id)),
        );
    f.render_widget(question_widget, layout.question_area);

    let items: Vec<ListItem> = question
        .choices
        .iter()
        .enumerate()
        .map(|(i, choice)| {
            let style = if !session.is_revealed() {
                if i == session.cursor() {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                }
            } else if session.is_correct(&choice.id) {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else if session.selected_choice_id() == Some(choice.id.as_str()) {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(format!("[{}] {}", choice.id, choice.text)).style(style)
        })
        .collect();
    let choices = List::new(items).block(Block::default().borders(Borders::ALL).title("Choices"));
    f.render_widget(choices, layout.choices_area);

    let answer_content = if session.is_revealed() {
        let mut text = Text::default();
        text.push_line(Line::from(Span::styled(
            format!("Correct answer: {}", question.correct_choice_id),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        if let Some(selected) = session.selected_choice_id() {
            let verdict = if session.is_correct(selected) {
                Span::styled("Your pick was correct.", Style::default().fg(Color::Green))
            } else {
                Span::styled(
                    format!("Your pick: {} (incorrect)", selected),
                    Style::default().fg(Color::Red),
                )
            };
            text.push_line(Line::from(verdict));
        }
        text.push_line(Line::from(""));
        match question.explanation.as_deref() {
            Some(explanation) if !explanation.trim().is_empty() => {
                text.push_line(Line::from(explanation));
            }
            _ => {
                text.push_line(Line::from(Span::styled(
                    "No explanation provided for this item.",
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        text
    } else {
        Text::from("Pick a choice to reveal the correct answer and explanation.")
    };
    let answer = Paragraph::new(answer_content)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Answer"));
    f.render_widget(answer, layout.answer_area);

    let mut help_spans = Vec::new();
    if !session.is_revealed() {
        help_spans.extend([
            key_span("↑/↓"),
            Span::from(" Highlight  "),
            key_span("Enter/letter"),
            Span::from(" Select  "),
        ]);
    } else if session.can_advance() {
        help_spans.extend([key_span("Enter"), Span::from(" Next  ")]);
    }
    help_spans.extend([
        key_span("i"),
        Span::from(" Images  "),
        key_span("r"),
        Span::from(" Restart  "),
        key_span("q"),
        Span::from(" Quit"),
    ]);
    let help = Paragraph::new(vec![Line::from(help_spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn key_span(label: &str) -> Span<'_> {
    Span::styled(
        label,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}
