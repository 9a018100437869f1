use crate::host::{Theme, UserSummary};
use crate::ui::theme::Palette;
use crate::workflow::Phase;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    phase: Option<Phase>,
    theme: Theme,
    user: Option<&'a UserSummary>,
}

impl<'a> Header<'a> {
    pub fn new(phase: Option<Phase>, theme: Theme, user: Option<&'a UserSummary>) -> Self {
        Self { phase, theme, user }
    }

    pub fn widget(&self, area: Rect, palette: &Palette) -> Paragraph<'static> {
        let title = "✦ Refine Your Prompt";
        let theme_label = format!("{} ", self.theme.label());
        let content_width = usize::from(area.width);
        let padding = content_width
            .saturating_sub(title.chars().count())
            .saturating_sub(theme_label.chars().count());

        let title_line = Line::from(vec![
            Span::styled(
                title,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(padding)),
            Span::styled(theme_label, Style::default().fg(palette.text_muted)),
        ]);

        let mut status = step_indicator(self.phase, palette);
        if let Some(user) = self.user {
            status.spans.push(Span::styled(
                "  │  ",
                Style::default().fg(palette.border),
            ));
            status.spans.extend(user_spans(user, palette));
        }

        Paragraph::new(vec![title_line, status])
            .style(Style::default().bg(palette.background))
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(palette.border)),
            )
    }
}

/// `1 Write ── 2 Clarify ── 3 Result`, finished steps marked `✓`.
pub fn step_indicator(current: Option<Phase>, palette: &Palette) -> Line<'static> {
    let current_index = current.map(Phase::index);
    let mut spans = Vec::new();

    for phase in Phase::ALL {
        let idx = phase.index();
        if idx > 0 {
            let done = current_index.is_some_and(|c| idx <= c);
            let color = if done { palette.success } else { palette.border };
            spans.push(Span::styled(" ── ", Style::default().fg(color)));
        }

        let (marker, style) = match current_index {
            Some(c) if idx < c => ("✓".to_string(), Style::default().fg(palette.success)),
            Some(c) if idx == c => (
                (idx + 1).to_string(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            _ => ((idx + 1).to_string(), Style::default().fg(palette.text_muted)),
        };
        spans.push(Span::styled(format!("{marker} {}", phase.label()), style));
    }

    Line::from(spans)
}

fn user_spans(user: &UserSummary, palette: &Palette) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            user.display_name().to_string(),
            Style::default().fg(palette.text),
        ),
        Span::styled(
            format!(" · {} prompts left", user.remaining),
            Style::default().fg(palette.text_muted),
        ),
    ]
}
