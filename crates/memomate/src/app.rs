//! Session controller: owns the clock, the interaction state and the frame loop.

use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use memomate_config::Config;
use memomate_core::{Catalog, DayNightCycle, InteractionState, LayoutMode, PointerEvent, TimeOfDay};
use memomate_scene::{Animator, Camera, FrameInputs};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info};

use crate::loading::LoadingSequence;
use crate::ui::{self, CompactView, PointerTarget, ScreenMap};

/// Camera orbit per arrow key press, in radians.
const ROTATE_STEP: f32 = std::f32::consts::PI / 16.0;
/// Camera distance change per zoom key press or scroll notch, in world units.
const ZOOM_STEP: f32 = 2.5;
/// Camera orbit per column of horizontal mouse drag, in radians.
const DRAG_STEP: f32 = std::f32::consts::PI / 64.0;

#[derive(Debug)]
enum Phase {
    Loading(LoadingSequence<StdRng>),
    /// The city is shown; `since` is when it replaced the loading screen.
    City { since: Duration },
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    catalog: Catalog,
    cycle: DayNightCycle,
    interaction: InteractionState,
    camera: Camera,
    phase: Phase,
    /// Time since the session started.
    elapsed: Duration,
    /// Mode sampled from the cycle on the last update.
    time_of_day: TimeOfDay,
    /// Layout used for the last frame.
    layout: Option<LayoutMode>,
    /// Interactive regions of the last frame.
    screen: ScreenMap,
    /// Column of the last left-button press or drag over the city.
    drag_from: Option<u16>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> color_eyre::Result<Self> {
        let catalog = Catalog::memomate()?;
        let cycle = config.cycle();
        let phase = if config.loading.skip {
            Phase::City {
                since: Duration::ZERO,
            }
        } else {
            let rng = match config.loading.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            Phase::Loading(LoadingSequence::new(rng, config.loading.max_increment))
        };
        Ok(Self {
            running: false,
            time_of_day: cycle.mode_at(Duration::ZERO),
            config,
            catalog,
            cycle,
            interaction: InteractionState::new(),
            camera: Camera::default(),
            phase,
            elapsed: Duration::ZERO,
            layout: None,
            screen: ScreenMap::default(),
            drag_from: None,
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let start = Instant::now();
        self.running = true;
        while self.running {
            self.set_elapsed(start.elapsed());
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        info!(elapsed_secs = self.elapsed.as_secs_f64(), "session ended");
        Ok(())
    }

    fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading(_))
    }

    /// Time since the city appeared, if it has.
    fn scene_elapsed(&self) -> Option<Duration> {
        match self.phase {
            Phase::City { since } => Some(self.elapsed.saturating_sub(since)),
            Phase::Loading(_) => None,
        }
    }

    /// Move the clock to `elapsed` and apply everything that is now due.
    fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
        if let Phase::Loading(sequence) = &mut self.phase {
            sequence.advance_to(elapsed, self.config.loading.tick());
            if elapsed >= self.config.loading.duration() {
                info!(
                    progress = sequence.progress(),
                    ticks = sequence.ticks(),
                    "loading complete"
                );
                self.phase = Phase::City { since: elapsed };
            }
        }
        if let Some(scene) = self.scene_elapsed() {
            let mode = self.cycle.mode_at(scene);
            if mode != self.time_of_day {
                info!(
                    mode = mode.cycle_label(),
                    next_flip_secs = self.cycle.until_next_flip(scene).as_secs_f64(),
                    "day/night flip"
                );
                self.time_of_day = mode;
            }
        }
    }

    fn finish_loading(&mut self) {
        if self.is_loading() {
            info!("loading skipped");
            self.phase = Phase::City {
                since: self.elapsed,
            };
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        match &self.phase {
            Phase::Loading(sequence) => {
                ui::render_loading(frame, sequence, self.elapsed);
                self.screen = ScreenMap::default();
            }
            Phase::City { since } => {
                let scene = self.elapsed.saturating_sub(*since);
                let width = frame.area().width;
                let mode = LayoutMode::for_width(width, self.config.compact_width);
                if self.layout != Some(mode) {
                    info!(?mode, width, "layout changed");
                    self.layout = Some(mode);
                }
                self.screen = match mode {
                    LayoutMode::City => {
                        let animation = Animator::new(&self.catalog)
                            .tick(scene.as_secs_f32(), self.interaction.hovered());
                        ui::render_city(
                            frame,
                            FrameInputs {
                                catalog: &self.catalog,
                                animation: &animation,
                                interaction: &self.interaction,
                                time_of_day: self.time_of_day,
                                camera: self.camera,
                                elapsed_ms: u64::try_from(scene.as_millis()).unwrap_or(u64::MAX),
                            },
                        )
                    }
                    LayoutMode::Compact => ui::render_compact(
                        frame,
                        CompactView {
                            catalog: &self.catalog,
                            interaction: &self.interaction,
                            time_of_day: self.time_of_day,
                        },
                    ),
                };
            }
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with the frame interval as timeout so animation keeps moving.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.config.frame_interval())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Esc) => {
                if self.interaction.is_open() {
                    self.dispatch(PointerEvent::Close);
                } else {
                    self.quit();
                }
            }
            _ if self.is_loading() => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    self.finish_loading();
                }
            }
            (_, KeyCode::Left) => self.camera = self.camera.rotate(-ROTATE_STEP),
            (_, KeyCode::Right) => self.camera = self.camera.rotate(ROTATE_STEP),
            (_, KeyCode::Char('+') | KeyCode::Char('=')) => {
                self.camera = self.camera.zoom(-ZOOM_STEP);
            }
            (_, KeyCode::Char('-')) => self.camera = self.camera.zoom(ZOOM_STEP),
            (_, KeyCode::Tab | KeyCode::Down) => self.cycle_hover(1),
            (_, KeyCode::BackTab | KeyCode::Up) => self.cycle_hover(-1),
            (_, KeyCode::Enter) => {
                if let Some(id) = self.interaction.hovered().map(str::to_owned) {
                    self.dispatch(PointerEvent::Click(id));
                }
            }
            _ => {}
        }
    }

    /// Translate mouse input on the last frame into pointer events.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if self.is_loading() {
            return;
        }
        let target = self.screen.target_at(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                let id = match &target {
                    PointerTarget::Building(id) => Some(id.as_str()),
                    _ => None,
                };
                self.hover(id);
            }
            MouseEventKind::Down(MouseButton::Left) => match target {
                PointerTarget::Close => self.dispatch(PointerEvent::Close),
                // Clicks inside the open panel belong to the panel.
                PointerTarget::Panel => {}
                PointerTarget::Building(id) => {
                    self.drag_from = Some(mouse.column);
                    self.dispatch(PointerEvent::Click(id));
                }
                PointerTarget::Background => {
                    self.drag_from = Some(mouse.column);
                    self.dispatch(PointerEvent::BackgroundClick);
                }
            },
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(from) = self.drag_from.replace(mouse.column) {
                    let columns = f32::from(mouse.column) - f32::from(from);
                    self.camera = self.camera.rotate(columns * DRAG_STEP);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.drag_from = None,
            MouseEventKind::ScrollUp => self.camera = self.camera.zoom(-ZOOM_STEP),
            MouseEventKind::ScrollDown => self.camera = self.camera.zoom(ZOOM_STEP),
            _ => {}
        }
    }

    /// Move the hover to `target`, emitting leave before enter.
    fn hover(&mut self, target: Option<&str>) {
        for event in self.interaction.hover_events(target) {
            self.dispatch(event);
        }
    }

    /// Step the hover through the catalogue in order, wrapping at the ends.
    fn cycle_hover(&mut self, step: isize) {
        let len = self.catalog.len();
        if len == 0 {
            return;
        }
        let current = self.interaction.hovered().and_then(|id| self.catalog.index_of(id));
        let next = match current {
            Some(i) => (i as isize + step).rem_euclid(len as isize) as usize,
            None if step >= 0 => 0,
            None => len - 1,
        };
        let id = self.catalog.entities()[next].id.clone();
        self.hover(Some(&id));
    }

    fn dispatch(&mut self, event: PointerEvent) {
        debug!(?event, "pointer event");
        let before = self.interaction.selected().map(str::to_owned);
        self.interaction = std::mem::take(&mut self.interaction).apply(event, &self.catalog);
        let after = self.interaction.selected();
        if before.as_deref() != after {
            match after {
                Some(id) => info!(id, "panel opened"),
                None => info!("panel closed"),
            }
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
