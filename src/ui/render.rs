use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::stack::CardStack;
use crate::ui::theme::{FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use crate::ui::topic_input::TOPIC_PLACEHOLDER;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let session = app.session();
    let regions = layout_regions(area, session.error().is_some());

    let can_restart = session.can_reset();
    frame.render_widget(Header::new(can_restart).widget(regions.header), regions.header);

    draw_topic_input(frame, app, regions.input);

    if let Some(error) = session.error() {
        let line = Line::from(Span::styled(
            format!(" ⚠ {}", error),
            Style::default().fg(STATUS_ERROR),
        ));
        frame.render_widget(Paragraph::new(line), regions.error);
    }

    frame.render_widget(Clear, regions.stack);
    frame.render_widget(
        CardStack::new(session, app.drag_offset_units(), app.units_per_column()),
        regions.stack,
    );

    let footer = Footer::new(session, app.spinner_tick());
    frame.render_widget(footer.widget(regions.footer), regions.footer);
}

fn draw_topic_input(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let topic = app.topic();
    let focused = app.focus() == Focus::Topic;
    let loading = app.session().is_loading();

    let border_color = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let action = if loading {
        " … "
    } else if topic.is_blank() {
        " Go "
    } else {
        " Go ✦ "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title_bottom(Line::from(action).right_aligned());

    let content = if topic.value().is_empty() {
        Span::styled(TOPIC_PLACEHOLDER, Style::default().fg(MUTED_TEXT))
    } else {
        let mut style = Style::default().fg(HEADER_TEXT);
        if loading {
            style = style.add_modifier(Modifier::DIM);
        }
        Span::styled(topic.value().to_string(), style)
    };
    let line = Line::from(vec![Span::styled(" ⌕ ", Style::default().fg(MUTED_TEXT)), content]);
    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused && !loading && area.width > 2 && area.height > 2 {
        let prefix = 4u16; // border + " ⌕ "
        let max_x = area.x + area.width.saturating_sub(2);
        let x = (area.x + prefix + topic.cursor() as u16).min(max_x);
        frame.set_cursor_position((x, area.y + 1));
    }
}
