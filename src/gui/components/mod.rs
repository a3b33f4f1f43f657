// src/gui/components/mod.rs
pub mod bar_chart;
pub mod roster_table;
