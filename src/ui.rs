// ui.rs - control row, board painting and pointer handling

use eframe::egui;
use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};
use std::time::{Duration, Instant};

use crate::config::{BOARD_SIZE, MAX_DIM, MIN_DIM};
use crate::patterns;
use crate::LifeBoard;

/// Maps a pointer position to a cell index. Positions on the extreme edge of
/// the board land exactly on `n`, so both axes are clamped into range.
fn cell_under(pos: Pos2, origin: Pos2, cell_size: f32, n: usize) -> (usize, usize) {
    let last = n as isize - 1;
    let x = (((pos.x - origin.x) / cell_size).floor() as isize).clamp(0, last);
    let y = (((pos.y - origin.y) / cell_size).floor() as isize).clamp(0, last);
    (x as usize, y as usize)
}

impl eframe::App for LifeBoard {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-advance on the tick cadence while running
        if self.running && self.last_tick.elapsed() >= self.tick_interval {
            self.step_once();
            self.last_tick = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!self.running, egui::Button::new("▶ Start"))
                    .clicked()
                {
                    self.start();
                }
                if ui
                    .add_enabled(self.running, egui::Button::new("⏸ Pause"))
                    .clicked()
                {
                    self.pause();
                }
                if ui
                    .add_enabled(!self.running, egui::Button::new("⏭ Step"))
                    .clicked()
                {
                    self.step_once();
                }
                if ui
                    .add_enabled(!self.running, egui::Button::new("⏹ Reset"))
                    .clicked()
                {
                    self.reset();
                }
                if ui
                    .add_enabled(!self.running, egui::Button::new("🎲 Randomize"))
                    .clicked()
                {
                    self.randomize();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.generation));
            });

            ui.horizontal(|ui| {
                ui.label("Cells per side:");
                let dim_response = ui.add_enabled(
                    !self.running,
                    egui::DragValue::new(&mut self.dim_input)
                        .clamp_range(MIN_DIM..=MAX_DIM)
                        .speed(1),
                );
                if dim_response.changed() {
                    self.resize(self.dim_input);
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });
                if ui
                    .add_enabled(!self.running, egui::Button::new("Apply Pattern"))
                    .clicked()
                {
                    self.stamp_selected();
                }
            });

            // Speed and colors
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.tick_interval.as_millis() as f32;
                if ui
                    .add(egui::Slider::new(&mut speed, 0.5..=20.0).suffix(" gen/sec"))
                    .changed()
                {
                    self.tick_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click a cell to toggle it; hold and drag to paint cells alive.");

            ui.separator();

            // Board
            let n = self.grid.size();
            let cell_size = BOARD_SIZE / n as f32;
            let (response, painter) =
                ui.allocate_painter(Vec2::splat(BOARD_SIZE), Sense::click_and_drag());
            let origin = response.rect.min;

            // Pointer editing first so the paint below shows the new state
            if let Some(pos) = response.interact_pointer_pos() {
                let (x, y) = cell_under(pos, origin, cell_size, n);
                if response.clicked() {
                    self.grid.toggle(x, y);
                } else if response.dragged_by(egui::PointerButton::Primary) {
                    self.grid.set(x, y, true);
                }
            }

            // Background fill clears the previous frame entirely
            painter.rect_filled(response.rect, 0.0, self.dead_color);

            for y in 0..n {
                for x in 0..n {
                    if !self.grid.get(x, y) {
                        continue;
                    }
                    let min = Pos2::new(
                        origin.x + x as f32 * cell_size,
                        origin.y + y as f32 * cell_size,
                    );
                    painter.rect_filled(
                        Rect::from_min_size(min, Vec2::splat(cell_size)),
                        0.0,
                        self.live_color,
                    );
                }
            }

            // Grid lines at every cell boundary, n + 1 per axis
            let line = Stroke::new(0.5, Color32::from_gray(70));
            for i in 0..=n {
                let offset = i as f32 * cell_size;
                painter.line_segment(
                    [
                        Pos2::new(origin.x + offset, origin.y),
                        Pos2::new(origin.x + offset, origin.y + BOARD_SIZE),
                    ],
                    line,
                );
                painter.line_segment(
                    [
                        Pos2::new(origin.x, origin.y + offset),
                        Pos2::new(origin.x + BOARD_SIZE, origin.y + offset),
                    ],
                    line,
                );
            }

            ui.separator();

            // Population readout
            let live = self.grid.population();
            let total = n * n;
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live}"));
                ui.label(format!("Dead cells: {}", total - live));
                ui.label(format!(
                    "Population: {:.1}%",
                    live as f32 / total as f32 * 100.0
                ));
            });
        });

        // Keep frames coming while the simulation runs
        if self.running {
            ctx.request_repaint();
        }
    }
}
