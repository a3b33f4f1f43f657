// src/gui/components/roster_table.rs
//
// Top panel: the non-numeric roster columns.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::scrape::RosterTable;

pub const HEADERS: [&str; 5] = ["Players", "Position", "Birth Date", "Birth Country", "Years Experience"];

const ROW_H: f32 = 18.0;

pub fn draw(ui: &mut egui::Ui, table: &RosterTable, max_h: f32) {
    let cols: [&[String]; 5] = [
        &table.players,
        &table.position,
        &table.birth_date,
        &table.birth_country,
        &table.years_experience,
    ];

    TableBuilder::new(ui)
        .id_salt("roster_table")
        .striped(true)
        .resizable(true)
        .max_scroll_height(max_h - ROW_H * 1.5)
        .column(Column::initial(200.0).at_least(80.0).clip(true))
        .columns(Column::auto().at_least(70.0), 3)
        .column(Column::remainder())
        .header(ROW_H + 4.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.label(RichText::new(h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, table.len(), |mut row| {
                let i = row.index();
                for col in cols {
                    row.col(|ui| {
                        ui.label(col.get(i).map(String::as_str).unwrap_or(""));
                    });
                }
            });
        });
}
