//! Screen composition for the loading screen, the city and the list view.

use std::f32::consts::TAU;
use std::time::Duration;

use chrono::Local;
use memomate_core::{Catalog, InteractionState, Rgb, TimeOfDay};
use memomate_fonts::{GLYPH_HEIGHT, build_word_art, is_supported};
use memomate_scene::{Canvas, FrameInputs, HitRegion, PaintedCity, hit_test, paint_city, text_width};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
};

use crate::content::content_for;
use crate::loading::LoadingSequence;
use crate::panel::{PanelLayout, render_panel};

const LOGO: &str = "MEMOMATE";
const TAGLINE: &str = "AI PRODUCTIVITY NEXUS";
const ACCENT: Color = Color::Rgb(0xff, 0x00, 0x33);
const OVERLAY_BG: Color = Color::Rgb(0x0a, 0x0a, 0x12);
const ONLINE: Color = Color::Rgb(0x00, 0xff, 0x88);
/// Orbiting nodes on the loading screen.
const NODE_COLORS: [Rgb; 3] = [
    Rgb::new(0xff, 0x00, 0x33),
    Rgb::new(0x00, 0x99, 0xff),
    Rgb::new(0x99, 0x33, 0xff),
];

/// What the pointer is over on the last drawn frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    /// The close control of the open panel.
    Close,
    /// Anywhere else inside the open panel.
    Panel,
    Building(String),
    Background,
}

/// Interactive regions of the last drawn frame.
#[derive(Debug, Clone, Default)]
pub struct ScreenMap {
    hits: Vec<HitRegion>,
    overlays: Vec<Rect>,
    panel: Option<PanelLayout>,
}

impl ScreenMap {
    pub fn target_at(&self, col: u16, row: u16) -> PointerTarget {
        let position = Position::new(col, row);
        if let Some(panel) = self.panel {
            if panel.close.contains(position) {
                return PointerTarget::Close;
            }
            if panel.area.contains(position) {
                return PointerTarget::Panel;
            }
        }
        if self.overlays.iter().any(|rect| rect.contains(position)) {
            return PointerTarget::Background;
        }
        match hit_test(&self.hits, col, row) {
            Some(id) => PointerTarget::Building(id.to_string()),
            None => PointerTarget::Background,
        }
    }

    #[cfg(test)]
    pub fn hits(&self) -> &[HitRegion] {
        &self.hits
    }

    #[cfg(test)]
    pub fn panel(&self) -> Option<PanelLayout> {
        self.panel
    }
}

fn overlay_block(title: &str, color: Color) -> Block<'_> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(color))
        .style(Style::new().bg(OVERLAY_BG))
        .title(title)
}

/// Draw a bordered overlay clipped to `screen` and return the area it covers.
fn render_overlay(frame: &mut Frame, block: Block, lines: Vec<Line>, rect: Rect) -> Option<Rect> {
    let rect = rect.intersection(frame.area());
    if rect.is_empty() {
        return None;
    }
    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
    Some(rect)
}

/// Open the detail panel for the selected entity, if any.
fn render_selection(
    frame: &mut Frame,
    catalog: &Catalog,
    interaction: &InteractionState,
) -> Option<PanelLayout> {
    let id = interaction.selected()?;
    let entity = catalog.get(id)?;
    let layout = PanelLayout::centered(frame.area());
    render_panel(frame, entity, &content_for(id), layout);
    Some(layout)
}

/// Progress percentage rounded to the nearest whole number.
fn percent_label(progress: f64) -> String {
    format!("{}% COMPLETE", progress.round() as u32)
}

/// Loading screen: logo, orbiting nodes, progress and subsystem status.
pub fn render_loading<R: Rng>(frame: &mut Frame, sequence: &LoadingSequence<R>, elapsed: Duration) {
    let area = frame.area();
    frame.render_widget(Block::new().style(Style::new().bg(Color::Black)), area);

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(GLYPH_HEIGHT as u16), // Logo
        Constraint::Length(1),                   // Tagline
        Constraint::Length(5),                   // Orbiting nodes
        Constraint::Length(1),                   // Status
        Constraint::Length(1),                   // Progress bar
        Constraint::Length(1),                   // Percentage
        Constraint::Length(1),                   // Spacing
        Constraint::Length(4),                   // Subsystems
        Constraint::Fill(1),
    ])
    .split(area);

    let art = build_word_art(LOGO);
    let fits = art.first().is_some_and(|row| text_width(row) <= area.width as usize);
    let logo: Vec<Line> = if is_supported(LOGO) && fits {
        art.into_iter()
            .map(|row| Line::from(row).style(Style::new().fg(ACCENT)))
            .collect()
    } else {
        vec![Line::from(LOGO.bold().fg(ACCENT))]
    };
    frame.render_widget(Paragraph::new(logo).alignment(Alignment::Center), chunks[1]);
    frame.render_widget(Line::from(TAGLINE.dark_gray()).centered(), chunks[2]);

    frame.render_widget(Paragraph::new(orbit_lines(chunks[3], elapsed)), chunks[3]);

    frame.render_widget(Line::from(sequence.status().fg(Color::Gray)).centered(), chunks[4]);
    let bar_width = area.width.saturating_sub(4).min(50) as usize;
    frame.render_widget(progress_bar(sequence.progress(), bar_width).centered(), chunks[5]);
    frame.render_widget(
        Line::from(percent_label(sequence.progress()).fg(ACCENT)).centered(),
        chunks[6],
    );

    let rows: Vec<Line> = sequence
        .subsystems()
        .into_iter()
        .map(|(name, state)| {
            let color = if state == "ONLINE" { ONLINE } else { Color::DarkGray };
            Line::from(vec![
                Span::styled(format!("{name:<20}"), Style::new().fg(Color::Gray)),
                Span::styled(format!("{state:>12}"), Style::new().fg(color).bold()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(rows).alignment(Alignment::Center), chunks[8]);
}

/// Three nodes circling a hub, drawn into a small canvas.
fn orbit_lines(area: Rect, elapsed: Duration) -> Vec<Line<'static>> {
    let mut canvas = Canvas::new(area.width, area.height, Rgb::BLACK);
    let t = elapsed.as_secs_f32();
    let cx = area.width as f32 / 2.0;
    let cy = area.height as f32 / 2.0;
    canvas.put_bold(cx as i32, cy as i32, '◆', Rgb::WHITE);
    for (i, color) in NODE_COLORS.iter().enumerate() {
        let angle = t * 1.5 + i as f32 * TAU / 3.0;
        let trail = angle - 0.35;
        canvas.put(
            (cx + trail.cos() * 14.0).round() as i32,
            (cy + trail.sin() * 2.0).round() as i32,
            '∘',
            color.scaled(0.5),
        );
        canvas.put_bold(
            (cx + angle.cos() * 14.0).round() as i32,
            (cy + angle.sin() * 2.0).round() as i32,
            '◉',
            *color,
        );
    }
    canvas.into_lines()
}

/// Progress bar shaded from red to blue along its length.
fn progress_bar(progress: f64, width: usize) -> Line<'static> {
    let filled = ((progress / 100.0) * width as f64).round() as usize;
    let start = NODE_COLORS[0];
    let end = NODE_COLORS[1];
    let spans: Vec<Span> = (0..width)
        .map(|i| {
            if i < filled {
                let t = i as f32 / width.max(1) as f32;
                Span::styled("█", Style::new().fg(start.mix(end, t).into()))
            } else {
                Span::styled("░", Style::new().fg(Color::DarkGray))
            }
        })
        .collect();
    Line::from(spans)
}

/// The city view with its overlays and the detail panel.
pub fn render_city(frame: &mut Frame, inputs: FrameInputs<'_>) -> ScreenMap {
    let area = frame.area();
    let PaintedCity { canvas, hits } = paint_city(inputs, area.width, area.height);
    frame.render_widget(Paragraph::new(canvas.into_lines()), area);

    let mut overlays = Vec::new();

    let header = vec![
        Line::from(LOGO.bold().fg(ACCENT)),
        Line::from(TAGLINE.fg(Color::Gray)),
    ];
    overlays.extend(render_overlay(
        frame,
        overlay_block("", ACCENT),
        header,
        Rect::new(area.x + 1, area.y, TAGLINE.len() as u16 + 4, 4),
    ));

    let status = vec![
        Line::from(vec!["● ".fg(ONLINE), "SYSTEM ONLINE".bold()]),
        Line::from(format!("MODE: {}", inputs.time_of_day.cycle_label())),
        Line::from(format!("BUILDINGS: {} ACTIVE", inputs.catalog.len())),
        Line::from(Local::now().format("%H:%M:%S").to_string().dark_gray()),
    ];
    let status_width = 24;
    overlays.extend(render_overlay(
        frame,
        overlay_block(" STATUS ", Color::Rgb(0x00, 0x99, 0xff)),
        status,
        Rect::new(area.right().saturating_sub(status_width + 1), area.y, status_width, 6),
    ));

    let key = |k: &'static str| k.bold().fg(ACCENT);
    let help = vec![
        Line::from(vec![key("mouse"), " hover · click a building".dark_gray()]),
        Line::from(vec![key("←/→"), " orbit  ".dark_gray(), key("+/-"), " zoom".dark_gray()]),
        Line::from(vec![key("tab"), " cycle  ".dark_gray(), key("enter"), " open".dark_gray()]),
        Line::from(vec![key("drag"), " orbit  ".dark_gray(), key("scroll"), " zoom".dark_gray()]),
        Line::from(vec![key("esc"), " close  ".dark_gray(), key("q"), " quit".dark_gray()]),
    ];
    overlays.extend(render_overlay(
        frame,
        overlay_block(" CONTROLS ", Color::Rgb(0x99, 0x33, 0xff)),
        help,
        Rect::new(area.x + 1, area.bottom().saturating_sub(7), 34, 7),
    ));

    let panel = render_selection(frame, inputs.catalog, inputs.interaction);
    ScreenMap {
        hits,
        overlays,
        panel,
    }
}

/// Inputs for the narrow-terminal list view.
#[derive(Debug, Clone, Copy)]
pub struct CompactView<'a> {
    pub catalog: &'a Catalog,
    pub interaction: &'a InteractionState,
    pub time_of_day: TimeOfDay,
}

/// One row per building, with a status bar.
pub fn render_compact(frame: &mut Frame, view: CompactView<'_>) -> ScreenMap {
    let area = frame.area();
    let background = if view.time_of_day.is_night() {
        Rgb::new(0x05, 0x05, 0x0a)
    } else {
        Rgb::new(0x1a, 0x1f, 0x2e)
    };
    frame.render_widget(Block::new().style(Style::new().bg(background.into())), area);

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Fill(1),   // Buildings
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    let header = Paragraph::new(Line::from(vec![
        LOGO.bold().fg(ACCENT),
        " · ".dark_gray(),
        TAGLINE.fg(Color::Gray),
    ]))
    .block(Block::bordered().border_style(Style::new().fg(ACCENT)));
    frame.render_widget(header, chunks[0]);

    let list = chunks[1];
    let mut hits = Vec::new();
    for (i, entity) in view.catalog.entities().iter().enumerate() {
        let Ok(offset) = u16::try_from(i) else {
            break;
        };
        if offset >= list.height {
            break;
        }
        let rect = Rect::new(list.x, list.y + offset, list.width, 1);
        let hovered = view.interaction.is_hovered(&entity.id);
        let accent = Color::from(entity.color);
        let mut name = Style::new().fg(accent);
        let mut row = Style::new();
        if hovered {
            name = name.bold();
            row = row.bg(entity.color.scaled(0.25).into());
        }
        let marker = if hovered { "▶ " } else { "  " };
        let line = Line::from(vec![
            Span::styled(marker, Style::new().fg(accent)),
            Span::raw(format!("{} ", entity.icon)),
            Span::styled(format!("{:<16}", entity.building_name.to_uppercase()), name),
            Span::styled(entity.description.clone(), Style::new().fg(Color::Gray)),
        ])
        .style(row);
        frame.render_widget(line, rect);
        hits.push(HitRegion {
            id: entity.id.clone(),
            rect,
        });
    }

    let status = Line::from(vec![
        Span::raw(format!(" {} ", view.time_of_day.mode_label())),
        "│ ".dark_gray(),
        Span::raw(format!("BUILDINGS: {} ACTIVE ", view.catalog.len())),
        "│ ".dark_gray(),
        "↑/↓".bold().fg(ACCENT),
        " select ".dark_gray(),
        "enter".bold().fg(ACCENT),
        " open ".dark_gray(),
        "q".bold().fg(ACCENT),
        " quit".dark_gray(),
    ])
    .style(Style::new().bg(OVERLAY_BG));
    frame.render_widget(status, chunks[2]);

    let panel = render_selection(frame, view.catalog, view.interaction);
    ScreenMap {
        hits,
        overlays: Vec::new(),
        panel,
    }
}

#[cfg(test)]
mod tests {
    use memomate_core::PointerEvent;
    use memomate_scene::{Animator, Camera};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw_city(interaction: &InteractionState) -> (Terminal<TestBackend>, ScreenMap) {
        let catalog = Catalog::memomate().unwrap();
        let animation = Animator::new(&catalog).tick(1.0, interaction.hovered());
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut map = ScreenMap::default();
        terminal
            .draw(|frame| {
                map = render_city(
                    frame,
                    FrameInputs {
                        catalog: &catalog,
                        animation: &animation,
                        interaction,
                        time_of_day: TimeOfDay::Night,
                        camera: Camera::default(),
                        elapsed_ms: 1000,
                    },
                );
            })
            .unwrap();
        (terminal, map)
    }

    #[test]
    fn test_city_overlays() {
        let (terminal, map) = draw_city(&InteractionState::new());
        let screen = screen_text(&terminal);
        assert!(screen.contains("AI PRODUCTIVITY NEXUS"));
        assert!(screen.contains("SYSTEM ONLINE"));
        assert!(screen.contains("MODE: NIGHT CYCLE"));
        assert!(screen.contains("BUILDINGS: 7 ACTIVE"));
        assert!(screen.contains("scroll zoom"));
        assert_eq!(map.hits().len(), 7);
        assert_eq!(map.panel(), None);
        // The header covers the top-left corner.
        assert_eq!(map.target_at(2, 1), PointerTarget::Background);
    }

    #[test]
    fn test_city_targets_buildings() {
        let (_, map) = draw_city(&InteractionState::new());
        let settings = map.hits().iter().find(|h| h.id == "settings").unwrap();
        let col = settings.rect.x + settings.rect.width / 2;
        let row = settings.rect.y + settings.rect.height - 2;
        assert_eq!(map.target_at(col, row), PointerTarget::Building("settings".into()));
    }

    #[test]
    fn test_open_panel_captures_pointer() {
        let catalog = Catalog::memomate().unwrap();
        let interaction =
            InteractionState::new().apply(PointerEvent::Click("dashboard".into()), &catalog);
        let (terminal, map) = draw_city(&interaction);
        let panel = map.panel().unwrap();
        assert_eq!(map.target_at(panel.close.x, panel.close.y), PointerTarget::Close);
        assert_eq!(
            map.target_at(panel.area.x + 2, panel.area.y + 2),
            PointerTarget::Panel
        );
        assert!(screen_text(&terminal).contains("ENTER CENTRAL COMMAND"));
    }

    #[test]
    fn test_compact_rows() {
        let catalog = Catalog::memomate().unwrap();
        let interaction =
            InteractionState::new().apply(PointerEvent::Enter("timeline".into()), &catalog);
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut map = ScreenMap::default();
        terminal
            .draw(|frame| {
                map = render_compact(
                    frame,
                    CompactView {
                        catalog: &catalog,
                        interaction: &interaction,
                        time_of_day: TimeOfDay::Day,
                    },
                );
            })
            .unwrap();
        assert_eq!(map.hits().len(), 7);
        assert_eq!(map.target_at(10, 3), PointerTarget::Building("dashboard".into()));
        assert_eq!(map.target_at(10, 5), PointerTarget::Building("timeline".into()));
        assert_eq!(map.target_at(10, 0), PointerTarget::Background);
        let screen = screen_text(&terminal);
        assert!(screen.contains("CHRONO TOWER"));
        assert!(screen.contains("DAY MODE"));
    }

    #[test]
    fn test_loading_screen() {
        let sequence = LoadingSequence::new(StdRng::seed_from_u64(1), 15.0);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| render_loading(frame, &sequence, Duration::ZERO))
            .unwrap();
        let screen = screen_text(&terminal);
        assert!(screen.contains("0% COMPLETE"));
        assert!(screen.contains("Initializing Neural Network..."));
        assert!(screen.contains("NEURAL CORE"));
        assert!(screen.contains("INITIALIZING"));
    }

    #[test]
    fn test_logo_falls_back_to_text_when_narrow() {
        let sequence = LoadingSequence::new(StdRng::seed_from_u64(1), 15.0);
        let mut terminal = Terminal::new(TestBackend::new(30, 30)).unwrap();
        terminal
            .draw(|frame| render_loading(frame, &sequence, Duration::ZERO))
            .unwrap();
        assert!(screen_text(&terminal).contains(LOGO));
    }

    #[test]
    fn test_percent_rounds_to_nearest() {
        assert_eq!(percent_label(0.0), "0% COMPLETE");
        assert_eq!(percent_label(49.4), "49% COMPLETE");
        assert_eq!(percent_label(49.6), "50% COMPLETE");
        assert_eq!(percent_label(99.5), "100% COMPLETE");
    }

    #[test]
    fn test_progress_bar_width() {
        let line = progress_bar(40.0, 30);
        assert_eq!(line.width(), 30);
        let filled = line.spans.iter().filter(|s| s.content == "█").count();
        assert_eq!(filled, 12);
    }
}
