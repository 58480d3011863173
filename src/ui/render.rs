use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.route(), app.reduced_motion(), app.dev_mode());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    app.render_body(body, frame.buffer_mut());

    let footer_widget = Footer::new(app.dev_mode());
    frame.render_widget(footer_widget.widget(footer), footer);
}
