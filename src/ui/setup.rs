//! Setup view: minute entry

use ratatui::{prelude::*, widgets::*};

use super::{centered_rect, SetupForm};

pub fn render(f: &mut Frame, form: &SetupForm) {
    let area = centered_rect(60, 50, f.size());

    let warning = match &form.warning {
        Some(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(""),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Set Timer Duration",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" {} ", form.input),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" minutes"),
        ]),
        Line::from(""),
        warning,
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Enter",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Start  "),
            Span::styled(
                "Q",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Quit"),
        ]),
    ];

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" tomadoro ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    f.render_widget(widget, area);
}
