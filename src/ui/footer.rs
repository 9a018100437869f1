use crate::ui::theme::Palette;
use crate::workflow::Phase;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    phase: Option<Phase>,
}

impl Footer {
    pub fn new(phase: Option<Phase>) -> Self {
        Self { phase }
    }

    pub fn widget(&self, area: Rect, palette: &Palette) -> Paragraph<'static> {
        let hints = hints(self.phase);
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = usize::from(area.width);
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(palette.border)),
            )
    }
}

fn hints(phase: Option<Phase>) -> String {
    let local = match phase {
        Some(Phase::Input) => " Enter: Newline │",
        Some(Phase::Questions) => " Tab/↑↓: Next field │",
        Some(Phase::Result) => " c: Copy │",
        None => "",
    };
    format!("{local} Ctrl+T: Theme │ Ctrl+Q: Quit")
}
