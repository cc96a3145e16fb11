//! Detail panel for the selected building.

use memomate_core::{Entity, Rgb};
use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
};

use crate::content::{
    PanelContent, Presence, Priority, Speaker, Stat, TaskStatus, Tone, WEEKDAYS,
};

const MAX_WIDTH: u16 = 64;
const MAX_HEIGHT: u16 = 24;
const CLOSE_LABEL: &str = "[x]";

/// Where the panel and its close control sit on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub area: Rect,
    pub close: Rect,
}

impl PanelLayout {
    /// Centre a panel inside `screen`.
    pub fn centered(screen: Rect) -> Self {
        let width = MAX_WIDTH.min(screen.width.saturating_sub(4)).max(12.min(screen.width));
        let height = MAX_HEIGHT.min(screen.height.saturating_sub(2)).max(5.min(screen.height));
        let area = Rect::new(
            screen.x + (screen.width - width) / 2,
            screen.y + (screen.height - height) / 2,
            width,
            height,
        );
        let close = Rect::new(
            area.right().saturating_sub(CLOSE_LABEL.len() as u16 + 1),
            area.y,
            CLOSE_LABEL.len() as u16,
            1,
        );
        Self { area, close }
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Red => Color::Rgb(0xff, 0x00, 0x33),
        Tone::Blue => Color::Rgb(0x00, 0x99, 0xff),
        Tone::Purple => Color::Rgb(0x99, 0x33, 0xff),
    }
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Rgb(0xff, 0x00, 0x33),
        Priority::Medium => Color::Rgb(0xff, 0xaa, 0x00),
        Priority::Low => Color::Rgb(0x00, 0xff, 0x88),
    }
}

fn presence_color(presence: Presence) -> Color {
    match presence {
        Presence::Online => Color::Rgb(0x00, 0xff, 0x88),
        Presence::Busy => Color::Rgb(0xff, 0x00, 0x33),
        Presence::Away => Color::Rgb(0xff, 0xaa, 0x00),
    }
}

/// Horizontal bar of `width` cells filled to `percent`.
fn bar(percent: u8, width: usize, color: Color) -> Vec<Span<'static>> {
    let filled = (usize::from(percent.min(100)) * width).div_ceil(100);
    vec![
        Span::styled("█".repeat(filled), Style::new().fg(color)),
        Span::styled("░".repeat(width - filled), Style::new().fg(Color::DarkGray)),
    ]
}

fn stat_lines(stats: &[Stat]) -> Vec<Line<'static>> {
    stats
        .iter()
        .map(|stat| {
            Line::from(vec![
                Span::styled(
                    format!("{:>6}", stat.value),
                    Style::new().fg(tone_color(stat.tone)).bold(),
                ),
                Span::raw("  "),
                Span::styled(stat.label, Style::new().fg(Color::Gray)),
            ])
        })
        .collect()
}

/// Body lines for `content`, laid out for an inner width of `width` cells.
pub fn content_lines(entity: &Entity, content: &PanelContent, width: u16) -> Vec<Line<'static>> {
    let accent = Color::from(entity.color);
    let bar_width = usize::from(width.saturating_sub(16)).clamp(4, 40);
    let mut lines = vec![
        Line::from(Span::styled(entity.name.to_uppercase(), Style::new().fg(accent).bold())),
        Line::from(Span::styled(entity.description.clone(), Style::new().fg(Color::Gray))),
        Line::default(),
    ];

    match content {
        PanelContent::Dashboard { stats, meter } => {
            lines.extend(stat_lines(stats));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(meter.label, Style::new().fg(Color::Gray))));
            let mut row = bar(meter.percent, bar_width, accent);
            row.push(Span::raw(format!(" {}%", meter.percent)));
            lines.push(Line::from(row));
        }
        PanelContent::Chat {
            messages,
            placeholder,
        } => {
            for message in *messages {
                let (who, color) = match message.from {
                    Speaker::Assistant => ("AI", accent),
                    Speaker::User => ("YOU", Color::White),
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("{who}: "), Style::new().fg(color).bold()),
                    Span::raw(message.text),
                ]));
            }
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("> {placeholder}"),
                Style::new().fg(Color::DarkGray),
            )));
        }
        PanelContent::Timeline { items } => {
            for item in *items {
                let (mark, color) = match item.status {
                    TaskStatus::Completed => ("✓", Color::Rgb(0x00, 0xff, 0x88)),
                    TaskStatus::Active => ("▶", accent),
                    TaskStatus::Pending => ("○", Color::DarkGray),
                };
                let mut task = Style::new();
                if item.status == TaskStatus::Active {
                    task = task.bold();
                }
                lines.push(Line::from(vec![
                    Span::styled(format!("{mark} "), Style::new().fg(color)),
                    Span::styled(item.time, Style::new().fg(Color::Gray)),
                    Span::raw("  "),
                    Span::styled(item.task, task),
                ]));
            }
        }
        PanelContent::Reminders { items } => {
            for item in *items {
                let color = priority_color(item.priority);
                lines.push(Line::from(vec![
                    Span::styled("● ", Style::new().fg(color)),
                    Span::raw(item.title),
                    Span::styled(
                        format!("  [{}]", item.priority.label().to_uppercase()),
                        Style::new().fg(color),
                    ),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("  due {}", item.due),
                    Style::new().fg(Color::DarkGray),
                )));
            }
        }
        PanelContent::Analytics { stats, weekly } => {
            lines.extend(stat_lines(stats));
            lines.push(Line::default());
            for (day, value) in WEEKDAYS.iter().zip(weekly.iter()) {
                let mut row = vec![Span::styled(format!("{day} "), Style::new().fg(Color::Gray))];
                row.extend(bar(*value, bar_width, accent));
                row.push(Span::raw(format!(" {value}%")));
                lines.push(Line::from(row));
            }
        }
        PanelContent::Collaboration { members, action } => {
            for member in *members {
                lines.push(Line::from(vec![
                    Span::styled("● ", Style::new().fg(presence_color(member.presence))),
                    Span::styled(member.name, Style::new().bold()),
                    Span::styled(format!("  {}", member.task), Style::new().fg(Color::Gray)),
                ]));
            }
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("[ {action} ]"),
                Style::new().fg(accent).bold(),
            )));
        }
        PanelContent::Settings { toggles, voices } => {
            for toggle in *toggles {
                let (mark, color) = if toggle.on {
                    ("[■]", accent)
                } else {
                    ("[ ]", Color::DarkGray)
                };
                lines.push(Line::from(vec![
                    Span::styled(mark, Style::new().fg(color)),
                    Span::raw(format!(" {}", toggle.label)),
                ]));
            }
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("AI Voice", Style::new().fg(Color::Gray))));
            for (i, voice) in voices.iter().enumerate() {
                let mark = if i == 0 { "◉" } else { "○" };
                lines.push(Line::from(format!("{mark} {voice}")));
            }
        }
        PanelContent::ComingSoon => {
            lines.push(Line::from(Span::styled(
                format!("{} COMING SOON", content.glyph()),
                Style::new().fg(accent).bold(),
            )));
            lines.push(Line::from("This building is still under construction."));
        }
    }
    lines
}

/// Dim everything behind the panel, then draw the panel on top.
pub fn render_panel(
    frame: &mut Frame,
    entity: &Entity,
    content: &PanelContent,
    layout: PanelLayout,
) {
    let screen = frame.area();
    frame.render_widget(Block::new().style(Style::new().add_modifier(Modifier::DIM)), screen);
    frame.render_widget(Clear, layout.area);

    let accent = Color::from(entity.color);
    let background = Color::from(Rgb::new(0x0a, 0x0a, 0x12));
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(accent))
        .style(Style::new().bg(background))
        .title(Line::from(format!(
            " {} {} ",
            content.glyph(),
            entity.building_name.to_uppercase()
        )))
        .title_bottom(Line::from(" STATUS: ONLINE ").left_aligned())
        .title_bottom(
            Line::from(format!(" ENTER {} ", entity.building_name.to_uppercase())).right_aligned(),
        );
    let inner = layout.area.inner(Margin::new(2, 1));
    let body =
        Paragraph::new(content_lines(entity, content, inner.width)).wrap(Wrap { trim: false });
    frame.render_widget(block, layout.area);
    frame.render_widget(body, inner);
    frame.render_widget(
        Paragraph::new(CLOSE_LABEL).style(Style::new().fg(accent).bold()),
        layout.close,
    );
}

#[cfg(test)]
mod tests {
    use memomate_core::Catalog;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::content::content_for;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_layout_is_centered_and_close_inside() {
        let layout = PanelLayout::centered(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.area, Rect::new(28, 8, 64, 24));
        assert!(layout.area.contains(layout.close.as_position()));
        assert_eq!(layout.close.y, layout.area.y);
        assert_eq!(layout.close.right(), layout.area.right() - 1);
    }

    #[test]
    fn test_layout_shrinks_on_small_screens() {
        let layout = PanelLayout::centered(Rect::new(0, 0, 40, 12));
        assert_eq!(layout.area.width, 36);
        assert_eq!(layout.area.height, 10);
    }

    #[test]
    fn test_content_lines_per_building() {
        let catalog = Catalog::memomate().unwrap();
        let timeline = catalog.get("timeline").unwrap();
        let body = text(&content_lines(timeline, &content_for("timeline"), 60));
        assert!(body.contains("Client presentation"));
        assert!(body.contains("▶ 14:00"));

        let reminders = catalog.get("reminders").unwrap();
        let body = text(&content_lines(reminders, &content_for("reminders"), 60));
        assert!(body.contains("[HIGH]"));

        let settings = catalog.get("settings").unwrap();
        let body = text(&content_lines(settings, &PanelContent::ComingSoon, 60));
        assert!(body.contains("COMING SOON"));
    }

    #[test]
    fn test_bar_width_is_exact() {
        for percent in [0, 1, 50, 98, 100] {
            let spans = bar(percent, 20, Color::White);
            let cells: usize = spans.iter().map(|s| s.content.chars().count()).sum();
            assert_eq!(cells, 20);
        }
    }

    #[test]
    fn test_render_panel_footer() {
        let catalog = Catalog::memomate().unwrap();
        let entity = catalog.get("settings").unwrap();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| {
                let layout = PanelLayout::centered(frame.area());
                render_panel(frame, entity, &content_for("settings"), layout);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let screen: String = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(screen.contains("STATUS: ONLINE"));
        assert!(screen.contains("ENTER CONTROL NEXUS"));
        assert!(screen.contains("[x]"));
        assert!(screen.contains("Dark Mode"));
    }
}
