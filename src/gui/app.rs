// src/gui/app.rs
use eframe::egui::{self, Color32, Vec2, ViewportBuilder};

use crate::{
    chart::ChartSpec,
    config::consts::{CANVAS_H, CANVAS_W},
};

use super::{
    components::{bar_chart::{self, BarSeries}, roster_table},
    icon,
};

// Plotly's first two qualitative colors
const HEIGHT_FILL: Color32 = Color32::from_rgb(0x63, 0x6E, 0xFA);
const WEIGHT_FILL: Color32 = Color32::from_rgb(0xEF, 0x55, 0x3B);

pub fn run(spec: ChartSpec) -> Result<(), eframe::Error> {
    let title = format!("{} - {}", spec.title, spec.team);
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([CANVAS_W, CANVAS_H])
            .with_icon(icon::app_icon()),
        ..Default::default()
    };

    logf!("Viewer: opening {} ({} players)", title, spec.table.len());
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ChartApp::new(spec)))),
    )
}

pub struct ChartApp {
    spec: ChartSpec,
}

impl ChartApp {
    pub fn new(spec: ChartSpec) -> Self {
        Self { spec }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.heading(format!("{} ({})", self.spec.title, self.spec.team));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let table = &self.spec.table;
            if table.is_empty() {
                ui.centered_and_justified(|ui| ui.label("No players"));
                return;
            }

            // Three stacked panels share the height evenly
            let sep = ui.spacing().item_spacing.y * 4.0;
            let w = ui.available_width();
            let h = ((ui.available_height() - sep) / 3.0).max(80.0);

            ui.allocate_ui(Vec2::new(w, h), |ui| roster_table::draw(ui, table, h));
            ui.separator();
            ui.allocate_ui(Vec2::new(w, h), |ui| {
                bar_chart::draw(ui, &BarSeries {
                    name: "Player Height",
                    unit: &self.spec.height_unit,
                    labels: &table.players,
                    values: &table.height,
                    fill: HEIGHT_FILL,
                })
            });
            ui.separator();
            ui.allocate_ui(Vec2::new(w, h), |ui| {
                bar_chart::draw(ui, &BarSeries {
                    name: "Player Weight",
                    unit: "lb",
                    labels: &table.players,
                    values: &table.weight,
                    fill: WEIGHT_FILL,
                })
            });
        });
    }
}
