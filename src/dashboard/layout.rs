use crate::dashboard::panel::Panel;
use colored::Colorize;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout as Split, Rect};
use ratatui::style::{Color, Modifier};
use ratatui::widgets::Widget;
use std::rc::Rc;
use unicode_width::UnicodeWidthStr;

pub enum Layout {
    Panel(Panel),
    /// Children side by side, sharing the width evenly.
    Row(Vec<Layout>),
    /// Children stacked top to bottom.
    Column(Vec<Layout>),
}

fn columns(area: Rect, count: usize) -> Rc<[Rect]> {
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    Split::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); count as usize])
        .split(area)
}

impl Layout {
    fn height_for(&self, width: u16) -> u16 {
        match self {
            Layout::Panel(panel) => panel.height_for(width),
            Layout::Column(children) => children
                .iter()
                .fold(0u16, |h, child| h.saturating_add(child.height_for(width))),
            Layout::Row(children) => columns(Rect::new(0, 0, width, 1), children.len())
                .iter()
                .zip(children)
                .map(|(area, child)| child.height_for(area.width))
                .max()
                .unwrap_or(0),
        }
    }

    fn draw(&self, area: Rect, buf: &mut Buffer) {
        match self {
            Layout::Panel(panel) => panel.paragraph().render(area, buf),
            Layout::Row(children) => {
                for (chunk, child) in columns(area, children.len()).iter().zip(children) {
                    child.draw(*chunk, buf);
                }
            }
            Layout::Column(children) => {
                let chunks = Split::default()
                    .direction(Direction::Vertical)
                    .constraints(
                        children
                            .iter()
                            .map(|child| Constraint::Length(child.height_for(area.width)))
                            .collect::<Vec<_>>(),
                    )
                    .split(area);
                for (chunk, child) in chunks.iter().zip(children) {
                    child.draw(*chunk, buf);
                }
            }
        }
    }

    /// Renders off-screen. Every line is exactly `width` terminal columns.
    pub fn render(&self, width: usize, styled: bool) -> Vec<String> {
        let width = u16::try_from(width).unwrap_or(u16::MAX);
        let height = self.height_for(width);
        if width == 0 || height == 0 {
            return Vec::new();
        }
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        self.draw(buf.area, &mut buf);
        buffer_lines(&buf, styled)
    }
}

fn paint(text: &str, fg: Color, bold: bool) -> String {
    let mut out = match fg {
        Color::Blue => text.blue(),
        Color::Green => text.green(),
        _ => text.normal(),
    };
    if bold {
        out = out.bold();
    }
    out.to_string()
}

/// Reads the buffer back row by row, skipping the cells hidden behind
/// double-width symbols.
fn buffer_lines(buf: &Buffer, styled: bool) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let mut line = String::new();
            let mut run = String::new();
            let mut run_style = (Color::Reset, false);
            let mut hidden = 0;
            for x in area.left()..area.right() {
                if hidden > 0 {
                    hidden -= 1;
                    continue;
                }
                let cell = &buf[(x, y)];
                let symbol = cell.symbol();
                hidden = symbol.width().saturating_sub(1);
                if !styled {
                    line.push_str(symbol);
                    continue;
                }
                let style = (cell.fg, cell.modifier.contains(Modifier::BOLD));
                if style != run_style && !run.is_empty() {
                    line.push_str(&paint(&run, run_style.0, run_style.1));
                    run.clear();
                }
                run_style = style;
                run.push_str(symbol);
            }
            if !run.is_empty() {
                line.push_str(&paint(&run, run_style.0, run_style.1));
            }
            line
        })
        .collect()
}

/// `title` centred in a rule of `=` characters.
pub fn header(title: &str, width: usize, styled: bool) -> String {
    let len = title.width();
    if len >= width {
        return title.to_owned();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    let title = match styled {
        true => title.bold().green().to_string(),
        false => title.to_owned(),
    };
    format!("{}{}{}", "=".repeat(left), title, "=".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_columns(lines: &[String], width: usize) -> bool {
        lines.iter().all(|l| l.width() == width)
    }

    #[test]
    fn row_shares_width_and_height() {
        let layout = Layout::Row(vec![
            Layout::Panel(Panel::new("A", "1\n2\n3")),
            Layout::Panel(Panel::new("B", "x")),
        ]);
        let lines = layout.render(21, false);
        assert_eq!(lines.len(), 5);
        assert!(all_columns(&lines, 21));
        assert!(lines[0].starts_with('╭') && lines[0].ends_with('╮'));
        assert!(lines[3].starts_with("│ 3"));
        assert!(lines[4].ends_with('╯'));
    }

    #[test]
    fn column_stacks_children() {
        let layout = Layout::Column(vec![
            Layout::Panel(Panel::new("Top", "t")),
            Layout::Panel(Panel::new("Bottom", "b").fixed_height(4)),
        ]);
        let lines = layout.render(16, false);
        assert_eq!(lines.len(), 7);
        assert!(lines[3].contains("Bottom"));
    }

    #[test]
    fn nested_rows_keep_total_width() {
        let layout = Layout::Row(vec![
            Layout::Panel(Panel::new("System Info", "host")),
            Layout::Row(vec![
                Layout::Panel(Panel::new("Users", "root")),
                Layout::Panel(Panel::new("Groups", "dev")),
            ]),
        ]);
        let lines = layout.render(101, false);
        assert!(!lines.is_empty());
        assert!(all_columns(&lines, 101));
    }

    #[test]
    fn wide_text_in_a_row_keeps_columns() {
        let layout = Layout::Row(vec![
            Layout::Panel(Panel::new("Logins", "管理员 pts/0 登录")),
            Layout::Panel(Panel::new("Groups", "dev")),
        ]);
        assert!(all_columns(&layout.render(40, false), 40));
    }

    #[test]
    fn styled_output_colours_borders() {
        colored::control::set_override(true);
        let lines = Layout::Panel(Panel::new("A", "x")).render(10, true);
        colored::control::unset_override();
        assert!(lines[0].contains('\x1b'));
        assert!(lines[1].contains("x"));
    }

    #[test]
    fn empty_row_renders_nothing() {
        assert!(Layout::Row(Vec::new()).render(40, false).is_empty());
    }

    #[test]
    fn header_is_centred() {
        assert_eq!(header("Net", 10, false), "===Net====");
        assert_eq!(header("Too long", 4, false), "Too long");
    }
}
