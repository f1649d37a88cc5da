use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};
use regex::Regex;
use std::sync::OnceLock;

/// A titled, boxed block of text. Sections are separated by a blank line
/// and may carry a bold heading.
pub struct Panel {
    pub title: String,
    pub sections: Vec<(Option<String>, String)>,
    /// Total height including the border.
    pub height: Option<u16>,
}

/// Drops terminal escape sequences so they never reach the screen buffer.
fn strip_ansi(line: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| {
        Regex::new(r"\x1b\[[0-?]*[ -/]*[@-~]|\x1b\][^\x07\x1b]*(\x07|\x1b\\)|\x1b[@-_]")
            .expect("valid escape sequence pattern")
    });
    re.replace_all(line, "").replace('\t', "    ")
}

impl Panel {
    pub fn new(title: &str, body: &str) -> Panel {
        Panel {
            title: title.to_owned(),
            sections: vec![(None, body.to_owned())],
            height: None,
        }
    }

    pub fn with_sections(title: &str, sections: &[(&str, &str)]) -> Panel {
        Panel {
            title: title.to_owned(),
            sections: sections
                .iter()
                .map(|(heading, body)| (Some(heading.to_string()), body.to_string()))
                .collect(),
            height: None,
        }
    }

    pub fn fixed_height(mut self, height: u16) -> Panel {
        self.height = Some(height);
        self
    }

    fn text(&self) -> Text<'static> {
        let mut lines = Vec::new();
        for (i, (heading, body)) in self.sections.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            if let Some(heading) = heading {
                lines.push(Line::styled(
                    format!("{}:", heading),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
            }
            lines.extend(body.lines().map(|line| Line::raw(strip_ansi(line))));
        }
        Text::from(lines)
    }

    pub fn paragraph(&self) -> Paragraph<'static> {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Blue))
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center)
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .padding(Padding::horizontal(1));
        Paragraph::new(self.text())
            .block(block)
            .wrap(Wrap { trim: false })
    }

    /// Rows the panel needs at `width` columns, border included.
    pub fn height_for(&self, width: u16) -> u16 {
        if let Some(h) = self.height {
            return h;
        }
        let body = Paragraph::new(self.text())
            .wrap(Wrap { trim: false })
            .line_count(width.saturating_sub(4))
            .max(1);
        u16::try_from(body).unwrap_or(u16::MAX).saturating_add(2)
    }
}
