//! Form rendering module
//!
//! - `field_renderer`: per-field input and error rendering
//! - `dynamic_form`: lays out the fields of the selected schema

mod dynamic_form;
mod field_renderer;

pub use dynamic_form::draw as draw_form;
