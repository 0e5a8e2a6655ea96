//! Terminal rendition of the Footprints 2 Africa site: one tall scrollable
//! page with animated impact metrics, a story carousel, a donation widget,
//! and a braille-canvas choropleth of Southern Africa.

pub mod app;
pub mod braille;
pub mod content;
pub mod counters;
pub mod data;
pub mod donate;
pub mod fmt;
pub mod map;
pub mod page;
pub mod stories;
pub mod theme;
pub mod ui;
