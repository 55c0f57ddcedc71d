//! Driftland library - scrolling procedural noise terrain

pub mod camera;
pub mod cli;
pub mod controls;
pub mod error;
pub mod export;
pub mod noise;
pub mod params;
pub mod rendering;
pub mod stats;
pub mod terrain;
