use std::time::{Duration, Instant};

use eframe::egui;
use eframe::egui::{Color32, Key, PointerButton, Pos2, Rect, Sense, Ui};
use life_core::{CellState, Classification, SimulationEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::args::Settings;

/// Generations computed per frame while unthrottled.
const FAST_FORWARD_STEPS: usize = 8;
const FPS_SAMPLE_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Run,
    Pause,
    Clear,
    Randomize,
    Throttle,
    Unthrottle,
    Quit,
}

const KEY_BINDINGS: [(Key, Command); 7] = [
    (Key::O, Command::Run),
    (Key::P, Command::Pause),
    (Key::C, Command::Clear),
    (Key::R, Command::Randomize),
    (Key::V, Command::Throttle),
    (Key::D, Command::Unthrottle),
    (Key::Escape, Command::Quit),
];

fn command_for_key(key: Key) -> Option<Command> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, command)| *command)
}

fn pressed_commands(input: &egui::InputState) -> Vec<Command> {
    input
        .events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key,
                pressed: true,
                repeat: false,
                ..
            } => command_for_key(*key),
            _ => None,
        })
        .collect()
}

/// Left button erases, right button paints. Right wins when both are held.
fn brush(erase: bool, paint: bool) -> Option<CellState> {
    if paint {
        Some(CellState::Alive)
    } else if erase {
        Some(CellState::Dead)
    } else {
        None
    }
}

/// Board coordinates under `pos` for a board drawn from `origin`.
fn cell_at(origin: Pos2, cell_size: f32, pos: Pos2) -> Option<(usize, usize)> {
    let offset = pos - origin;
    if offset.x < 0.0 || offset.y < 0.0 || cell_size <= 0.0 {
        return None;
    }
    Some(((offset.x / cell_size) as usize, (offset.y / cell_size) as usize))
}

pub fn title(generation: u64, fps: f64) -> String {
    format!("Game of Life - Generation: {generation} - FPS: {fps:.1}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pacing {
    /// At most one generation per tick interval.
    Throttled,
    /// Several generations per frame, ignoring the tick interval.
    Unthrottled,
}

pub struct LifeApp {
    engine: SimulationEngine,
    rng: StdRng,
    cell_size: f32,
    paused: bool,
    pacing: Pacing,
    tick_interval: Duration,
    last_tick: Instant,
    notice: Option<Classification>,
    frame_count: u32,
    last_fps_sample: Instant,
    fps: f64,
    shown_title: String,
}

impl LifeApp {
    pub fn new(settings: Settings) -> Self {
        let mut engine = SimulationEngine::with_oscillation_check(
            settings.columns,
            settings.rows,
            settings.oscillation_check,
        );
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        if settings.random {
            engine.state_mut().randomize_with(&mut rng);
        }

        Self {
            engine,
            rng,
            cell_size: settings.cell_size,
            paused: true,
            pacing: Pacing::Throttled,
            tick_interval: settings.tick_interval,
            last_tick: Instant::now(),
            notice: None,
            frame_count: 0,
            last_fps_sample: Instant::now(),
            fps: 0.0,
            shown_title: String::new(),
        }
    }

    fn apply(&mut self, ctx: &egui::Context, command: Command) {
        log::debug!("{command:?}");
        match command {
            Command::Run => self.paused = false,
            Command::Pause => self.paused = true,
            Command::Clear => {
                self.engine.clear();
                self.paused = true;
                self.notice = None;
            }
            Command::Randomize => {
                self.engine.clear();
                let live = self.engine.state_mut().randomize_with(&mut self.rng);
                log::info!("seeded {live} live cells");
                self.paused = true;
                self.notice = None;
            }
            Command::Throttle => self.pacing = Pacing::Throttled,
            Command::Unthrottle => self.pacing = Pacing::Unthrottled,
            Command::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    fn update_simulation(&mut self) {
        if self.paused || self.notice.is_some() {
            return;
        }

        let steps = match self.pacing {
            Pacing::Throttled if self.last_tick.elapsed() < self.tick_interval => 0,
            Pacing::Throttled => 1,
            Pacing::Unthrottled => FAST_FORWARD_STEPS,
        };

        for _ in 0..steps {
            if let Some(classification) = self.engine.advance() {
                self.notice = Some(classification);
                break;
            }
        }
        if steps > 0 {
            self.last_tick = Instant::now();
        }
    }

    fn draw_board(&mut self, ui: &mut Ui) {
        let (columns, rows) = self.engine.state().current().dimensions();
        let (response, painter) = ui.allocate_painter(
            egui::vec2(self.cell_size * columns as f32, self.cell_size * rows as f32),
            Sense::click_and_drag(),
        );
        let origin = response.rect.min;

        if self.paused && self.notice.is_none() {
            let (pointer, state) = ui.input(|input| {
                let pointer = input.pointer.latest_pos();
                let state = brush(
                    input.pointer.button_down(PointerButton::Primary),
                    input.pointer.button_down(PointerButton::Secondary),
                );
                (pointer, state)
            });
            if let (Some(pos), Some(state)) = (pointer, state) {
                if response.rect.contains(pos) {
                    if let Some((x, y)) = cell_at(origin, self.cell_size, pos) {
                        self.engine.set_cell(x, y, state);
                    }
                }
            }
        }

        for (x, y) in self.engine.state().current().live_cells() {
            let min = origin + egui::vec2(x as f32 * self.cell_size, y as f32 * self.cell_size);
            painter.rect_filled(
                Rect::from_min_size(min, egui::vec2(self.cell_size, self.cell_size)),
                0.0,
                Color32::WHITE,
            );
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(classification) = self.notice else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(classification.message());
                ui.label(format!("Generation {}", self.engine.generation()));
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed || ctx.input(|input| input.key_pressed(Key::Enter)) {
            self.notice = None;
        }
    }

    fn update_title(&mut self, ctx: &egui::Context) {
        self.frame_count += 1;
        let elapsed = self.last_fps_sample.elapsed();
        if elapsed >= FPS_SAMPLE_PERIOD {
            self.fps = self.frame_count as f64 / elapsed.as_secs_f64();
            log::trace!("fps: {:.1}", self.fps);
            self.frame_count = 0;
            self.last_fps_sample = Instant::now();
        }

        let title = title(self.engine.generation(), self.fps);
        if title != self.shown_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.shown_title = title;
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for command in ctx.input(pressed_commands) {
            self.apply(ctx, command);
        }

        self.update_simulation();

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| self.draw_board(ui));

        self.show_notice(ctx);
        self.update_title(ctx);

        // The board is redrawn every frame, like a game loop.
        ctx.request_repaint();
    }
}
