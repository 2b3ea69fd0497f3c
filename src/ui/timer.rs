//! Timer view: the countdown itself

use ratatui::{prelude::*, widgets::*};

use super::centered_rect;
use crate::state::DisplaySnapshot;

pub fn render(f: &mut Frame, snapshot: &DisplaySnapshot) {
    let area = centered_rect(50, 60, f.size());

    // Finished runs go red; the overtime warning adds an orange border
    let time_color = if snapshot.finished {
        Color::Red
    } else {
        Color::White
    };
    let border_color = if snapshot.overtime_warned {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let status = if snapshot.paused {
        Span::styled("⏸ PAUSED", Style::default().fg(Color::Yellow))
    } else if snapshot.overtime_warned {
        Span::styled(
            "OVERTIME",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else if snapshot.finished {
        Span::styled(
            "FINISHED",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("▶ RUNNING", Style::default().fg(Color::Green))
    };

    let mut controls = vec![];
    if !snapshot.finished {
        controls.extend([
            Span::styled(
                "Space",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Pause  "),
        ]);
    }
    controls.extend([
        Span::styled(
            "R",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Reset  "),
        Span::styled(
            "Q",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Close"),
    ]);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            snapshot.text.clone(),
            Style::default().fg(time_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(status),
        Line::from(""),
        Line::from(controls),
    ];

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" tomadoro ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        );

    f.render_widget(widget, area);
}
