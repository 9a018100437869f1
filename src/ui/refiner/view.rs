//! Rendering of the phase body.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::Palette;
use crate::workflow::WorkflowState;

use super::state::WidgetState;

const CARET: &str = "▏";
const PROMPT_PLACEHOLDER: &str = "What do you want to achieve? Describe the task...";
const ANSWER_PLACEHOLDER: &str = "Your answer...";

/// Render the body for the host-declared phase.
///
/// Renders nothing at all when the host context is malformed.
pub fn render_body(frame: &mut Frame, area: Rect, state: &WidgetState, palette: &Palette) {
    let lines = body_lines(state, palette);
    if lines.is_empty() || area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.surface));

    frame.render_widget(body_paragraph(lines).block(block), area);
}

/// Rows the body needs at `width`, borders included. Zero when there is
/// nothing to render.
pub fn body_height(state: &WidgetState, palette: &Palette, width: u16) -> u16 {
    let lines = body_lines(state, palette);
    if lines.is_empty() {
        return 0;
    }
    // Measured without the block so only the inner width wraps.
    let inner = width.saturating_sub(2).max(1);
    let rows = body_paragraph(lines).line_count(inner);
    u16::try_from(rows + 2).unwrap_or(u16::MAX)
}

fn body_paragraph(lines: Vec<Line<'static>>) -> Paragraph<'static> {
    Paragraph::new(lines).wrap(Wrap { trim: false })
}

pub fn body_lines(state: &WidgetState, palette: &Palette) -> Vec<Line<'static>> {
    match &state.host.workflow {
        None => Vec::new(),
        Some(WorkflowState::Input) => input_lines(state, palette),
        Some(WorkflowState::Questions { questions }) => {
            question_lines(state, questions, palette)
        }
        Some(WorkflowState::Result { refined }) => result_lines(refined, palette),
    }
}

fn input_lines(state: &WidgetState, palette: &Palette) -> Vec<Line<'static>> {
    let text_style = Style::default().fg(palette.text);
    let mut lines = vec![Line::from(Span::styled(
        "Your Initial Prompt",
        Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::BOLD),
    ))];

    let prompt = state.draft.prompt();
    if prompt.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(CARET, Style::default().fg(palette.accent)),
            Span::styled(PROMPT_PLACEHOLDER, Style::default().fg(palette.text_muted)),
        ]));
    } else {
        let rows: Vec<&str> = prompt.split('\n').collect();
        let last = rows.len() - 1;
        for (idx, row) in rows.into_iter().enumerate() {
            let mut spans = vec![Span::styled(row.to_string(), text_style)];
            if idx == last {
                spans.push(Span::styled(CARET, Style::default().fg(palette.accent)));
            }
            lines.push(Line::from(spans));
        }
    }

    lines.push(Line::from(""));
    lines.push(button_row(&[("Ctrl+S", "Analyze Prompt")], palette));
    lines
}

fn question_lines(
    state: &WidgetState,
    questions: &[String],
    palette: &Palette,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                "Original: ",
                Style::default().fg(palette.info).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                state.draft.prompt().replace('\n', " "),
                Style::default().fg(palette.info),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Clarifying Questions",
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
    ];

    if questions.is_empty() {
        lines.push(Line::from(Span::styled(
            "No clarifying questions.",
            Style::default().fg(palette.text_muted),
        )));
    }

    for (idx, question) in questions.iter().enumerate() {
        let focused = idx == state.focused;
        lines.push(Line::from(Span::styled(
            format!("{}. {}", idx + 1, question),
            Style::default().fg(palette.text),
        )));

        let answer = state.draft.answer(question);
        let field_style = if focused {
            Style::default().fg(palette.text).bg(palette.active_highlight)
        } else {
            Style::default().fg(palette.text)
        };
        let marker = if focused { "  › " } else { "    " };
        let mut spans = vec![Span::styled(marker, Style::default().fg(palette.accent))];
        if answer.is_empty() {
            if focused {
                spans.push(Span::styled(CARET, Style::default().fg(palette.accent)));
            }
            spans.push(Span::styled(
                ANSWER_PLACEHOLDER,
                Style::default().fg(palette.text_muted),
            ));
        } else {
            spans.push(Span::styled(answer.replace('\n', " "), field_style));
            if focused {
                spans.push(Span::styled(CARET, Style::default().fg(palette.accent)));
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(button_row(
        &[("Esc", "Back"), ("Ctrl+S", "Generate Refined Prompt")],
        palette,
    ));
    lines
}

fn result_lines(refined: &str, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "✦ Refined Result",
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(refined.split('\n').map(|row| {
        Line::from(Span::styled(row.to_string(), Style::default().fg(palette.text)))
    }));
    lines.push(Line::from(""));
    lines.push(button_row(&[("c", "Copy"), ("Ctrl+R", "Start Over")], palette));
    lines
}

fn button_row(buttons: &[(&str, &str)], palette: &Palette) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, (key, label)) in buttons.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!(" {key} "),
            Style::default().fg(palette.background).bg(palette.accent),
        ));
        spans.push(Span::styled(
            format!(" {label}"),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}
