use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::ui::refiner::{body_height, render_body, WidgetState};
use crate::ui::theme::palette;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, state: &WidgetState) {
    let area = frame.area();
    let palette = palette(state.theme);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let (header, body, footer) = layout_regions(area, body_height(state, &palette, area.width));

    let header_widget = Header::new(state.phase(), state.theme, state.host.user.as_ref());
    frame.render_widget(header_widget.widget(header, &palette), header);

    render_body(frame, body, state, &palette);

    let footer_widget = Footer::new(state.phase());
    frame.render_widget(footer_widget.widget(footer, &palette), footer);
}

/// Total rows the widget wants at `width`: header, body and footer.
pub fn frame_height(state: &WidgetState, width: u16) -> u16 {
    let palette = palette(state.theme);
    HEADER_HEIGHT
        .saturating_add(body_height(state, &palette, width))
        .saturating_add(FOOTER_HEIGHT)
}
