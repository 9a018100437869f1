use ratatui::layout::Rect;

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 2;

/// Split `area` into header, body and footer.
///
/// The body takes `body_height` rows when available and never more than
/// what is left between header and footer.
pub fn layout_regions(area: Rect, body_height: u16) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let available = area.height.saturating_sub(header_height + footer_height);
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: body_height.min(available),
    };
    (header, body, footer)
}
