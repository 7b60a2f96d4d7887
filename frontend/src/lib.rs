//! Tallybook frontend library: navigation model, theme, widgets and screens.

pub mod app;
pub mod form_signal;
pub mod nav;
pub mod screens;
pub mod theme;
pub mod widgets;
