// src/gui/components/mod.rs
pub mod data_table;
pub mod instructions;
pub mod status_bar;
pub mod tabs;
