#[macro_use]
extern crate log;

pub mod canvas;
pub mod converter;
pub mod distance;
pub mod errors;
pub mod projector;
pub mod svg_writer;
pub mod track;
pub mod track_loader;
