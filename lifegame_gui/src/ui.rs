// ui.rs - egui front end for the simulation

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use lifegame::PATTERNS;
use std::time::{Duration, Instant};

use crate::GameOfLife;

const BOX_SIZE: f32 = 15.0;
const SPACING: f32 = 0.5;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.update_generation();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.apply_random_pattern();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                let selected = PATTERNS.get(self.selected_pattern).map_or("", |p| p.name);
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.generation()));
                if self.is_stable() {
                    ui.colored_label(Color32::YELLOW, "Stable");
                }
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1.0 / self.update_interval.as_secs_f32().max(1.0 / 90.0);
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_secs_f32(1.0 / speed);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them alive/dead. Use Start/Pause to run the simulation.");

            ui.separator();

            let grid = self.grid();
            let (rows, cols) = (grid.height(), grid.width());
            let pitch = BOX_SIZE + SPACING;

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(pitch * cols as f32 - SPACING, pitch * rows as f32 - SPACING);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            for (row, cells) in grid.rows().enumerate() {
                for (col, &alive) in cells.iter().enumerate() {
                    let rect = Rect::from_min_size(
                        egui::pos2(start_pos.x + col as f32 * pitch, start_pos.y + row as f32 * pitch),
                        Vec2::splat(BOX_SIZE),
                    );
                    let cell_color = if alive { self.live_color } else { self.dead_color };
                    painter.rect_filled(rect, 1.0, cell_color);
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }
            }

            let live_cells = grid.population();
            let total_cells = rows * cols;

            // Handle clicking (only when not running)
            if !self.is_running && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = pos - start_pos;
                    if offset.x >= 0.0 && offset.y >= 0.0 {
                        let row = (offset.y / pitch) as usize;
                        let col = (offset.x / pitch) as usize;
                        self.toggle_cell(row, col);
                    }
                }
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total_cells - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    live_cells as f32 / total_cells as f32 * 100.0
                ));
            });
        });

        // Keep repainting while running
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
