use std::time::Instant;

use chrono::{DateTime, Local};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use pond_core::{DuckAction, DuckVariant, Simulator, POND_HEIGHT, POND_WIDTH};

use crate::controller::dispatch::{apply_control_event, enqueue_control_event};
use crate::controller::events::ControlEvent;

pub const SETTINGS_STORAGE_KEY: &str = "desktop_gui.settings";

const POND_WATER: egui::Color32 = egui::Color32::from_rgb(0x2f, 0x6f, 0xb5);
const POND_RIM: egui::Color32 = egui::Color32::from_rgb(0x1d, 0x4a, 0x7a);

/// Settings carried across runs through `eframe::Storage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedPondSettings {
    pub selected_duck: Option<DuckVariant>,
    pub pond_enabled: bool,
}

impl Default for PersistedPondSettings {
    fn default() -> Self {
        Self {
            selected_duck: None,
            pond_enabled: true,
        }
    }
}

pub struct DuckPondApp {
    sim: Simulator,
    rng: StdRng,
    event_tx: Sender<ControlEvent>,
    event_rx: Receiver<ControlEvent>,
    started_at: Instant,
    // Mirror of the dropdown widget; the simulator is only updated through
    // the event queue.
    selected_index: usize,
    pond_enabled: bool,
    last_output: Option<(String, DateTime<Local>)>,
}

impl DuckPondApp {
    pub fn new(
        event_tx: Sender<ControlEvent>,
        event_rx: Receiver<ControlEvent>,
        persisted: Option<PersistedPondSettings>,
        pond_allowed: bool,
    ) -> Self {
        let settings = persisted.unwrap_or_default();
        let mut rng = StdRng::from_entropy();
        let mut sim = Simulator::new(0.0, &mut rng);

        // The original program starts with the first roster entry selected;
        // a remembered selection wins over that.
        let selected_index = settings
            .selected_duck
            .and_then(|duck| DuckVariant::ALL.iter().position(|&entry| entry == duck))
            .unwrap_or(0);
        sim.select(selected_index, 0.0, &mut rng);

        Self {
            sim,
            rng,
            event_tx,
            event_rx,
            started_at: Instant::now(),
            selected_index,
            pond_enabled: pond_allowed && settings.pond_enabled,
            last_output: None,
        }
    }

    fn now(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }

    fn drain_control_events(&mut self, now: f64) {
        while let Ok(event) = self.event_rx.try_recv() {
            if let Some(line) = apply_control_event(&mut self.sim, event, now, &mut self.rng) {
                self.last_output = Some((line, Local::now()));
            }
        }
    }

    fn show_control_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Duck:");
            let mut selected = self.selected_index;
            egui::ComboBox::from_id_salt("duck_selector")
                .selected_text(
                    self.sim
                        .roster()
                        .get(selected)
                        .map(|duck| duck.label())
                        .unwrap_or("Select a duck"),
                )
                .show_ui(ui, |ui| {
                    for (index, duck) in self.sim.roster().iter().enumerate() {
                        ui.selectable_value(&mut selected, index, duck.label());
                    }
                });
            if selected != self.selected_index {
                self.selected_index = selected;
                enqueue_control_event(&self.event_tx, ControlEvent::DuckSelected(selected));
            }

            ui.separator();
            ui.checkbox(&mut self.pond_enabled, "Animated pond");
        });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("🔊 Quack").clicked() {
                enqueue_control_event(
                    &self.event_tx,
                    ControlEvent::ActionRequested(DuckAction::Quack),
                );
            }
            if ui.button("🌊 Swim").clicked() {
                enqueue_control_event(
                    &self.event_tx,
                    ControlEvent::ActionRequested(DuckAction::Swim),
                );
            }
            if ui.button("👀 Display").clicked() {
                enqueue_control_event(
                    &self.event_tx,
                    ControlEvent::ActionRequested(DuckAction::Display),
                );
            }
        });
    }

    fn show_output_area(&self, ui: &mut egui::Ui) {
        if let Some(description) = self.sim.description() {
            ui.label(egui::RichText::new(description).strong());
        }
        match &self.last_output {
            Some((line, at)) => {
                ui.horizontal(|ui| {
                    ui.label(line);
                    ui.weak(format!("at {}", at.format("%H:%M:%S")));
                });
            }
            None => {
                ui.weak("Click a button to hear from the duck.");
            }
        }
    }

    fn show_pond(&self, ui: &mut egui::Ui) {
        let (rect, _response) = ui.allocate_exact_size(
            egui::vec2(POND_WIDTH, POND_HEIGHT),
            egui::Sense::hover(),
        );

        ui.painter()
            .rect_filled(rect, egui::CornerRadius::same(8), POND_WATER);
        ui.painter().rect_stroke(
            rect,
            egui::CornerRadius::same(8),
            egui::Stroke::new(2.0, POND_RIM),
            egui::StrokeKind::Inside,
        );

        let (x, y) = self.sim.pond().position();
        let duck_pos = rect.min + egui::vec2(x, y);
        if let Some(emoji) = self.sim.emoji() {
            ui.painter().text(
                duck_pos,
                egui::Align2::CENTER_CENTER,
                emoji,
                egui::FontId::proportional(28.0),
                egui::Color32::WHITE,
            );
        }

        if let Some(bubble) = self.sim.pond().bubble() {
            ui.painter().text(
                duck_pos + egui::vec2(30.0, -20.0),
                egui::Align2::LEFT_BOTTOM,
                bubble.text,
                egui::FontId::proportional(16.0),
                egui::Color32::WHITE,
            );
        }
    }
}

impl eframe::App for DuckPondApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = self.now();
        self.drain_control_events(now);
        if self.pond_enabled {
            self.sim.tick(now, &mut self.rng);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Duck Pond Simulator");
            ui.add_space(8.0);
            self.show_control_row(ui);
            ui.add_space(8.0);
            self.show_output_area(ui);
            if self.pond_enabled {
                ui.add_space(8.0);
                self.show_pond(ui);
            }
        });

        if self.pond_enabled {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedPondSettings {
            selected_duck: self.sim.current(),
            pond_enabled: self.pond_enabled,
        };
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}
