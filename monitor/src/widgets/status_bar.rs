use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Color, Style};
use tui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

/// One line footer below the map: the upcoming pass on the left, the exit
/// hint on the right.
pub struct StatusBar<'a> {
    rise_time: Option<&'a str>,
    style: Style,
    pass_style: Style,
}

impl<'a> StatusBar<'a> {
    pub fn new(rise_time: Option<&'a str>) -> Self {
        StatusBar {
            rise_time,
            style: Style::default().fg(Color::White).bg(Color::DarkGray),
            pass_style: Style::default().fg(Color::Yellow).bg(Color::DarkGray),
        }
    }
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        buf.set_style(area, self.style);

        let pass = match self.rise_time {
            Some(rise_time) => format!(" next pass {}", rise_time),
            None => " waiting for pass prediction".to_string(),
        };
        buf.set_stringn(
            area.left(),
            area.top(),
            &pass,
            usize::from(area.width),
            self.pass_style,
        );

        let hint = "click or press q to exit ";
        let hint_width = hint.width() as u16;
        if area.width > hint_width + pass.width() as u16 {
            buf.set_string(area.right() - hint_width, area.top(), hint, self.style);
        }
    }
}
