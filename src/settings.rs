use crate::types::Color;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
///everything tunable about sampling and drawing, every field has a default
///so a settings file only needs the keys it changes
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Settings {
    pub window: WindowSettings,
    pub graph: GraphSettings,
    pub spiral: SpiralSettings,
}
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, PartialEq)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    ///clear color
    pub background: Color,
}
impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "gradline".to_string(),
            width: 480,
            height: 480,
            background: Color::splat(51),
        }
    }
}
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, PartialEq)]
pub struct GraphSettings {
    ///left edge of the sampled domain
    pub start: f32,
    ///right edge of the sampled domain
    pub end: f32,
    ///number of intervals, one more sample than this is taken
    pub subdivisions: u32,
    pub x_scale: f32,
    pub y_scale: f32,
    ///multiplier on the slope colors before they are capped at 1
    pub color_intensity: f32,
    pub line_width: f32,
}
impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            start: -10.0,
            end: 10.0,
            subdivisions: 100,
            x_scale: 0.1,
            y_scale: 0.5,
            color_intensity: 5.0,
            line_width: 4.0,
        }
    }
}
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, PartialEq)]
pub struct SpiralSettings {
    pub radius: f32,
    ///rise along y per radian of t
    pub height_increment: f32,
    pub points: u32,
    pub t_start: f32,
    pub turns: f32,
    ///added to every y once the helix is loaded
    pub y_offset: f32,
    pub line_width: f32,
    ///fixed tilt toward the viewer in radians, so the helix is not seen edge on
    pub tilt: f32,
    pub view_scale: f32,
    pub view_shift: f32,
}
impl SpiralSettings {
    pub fn t_end(&self) -> f32 {
        self.t_start + self.turns * TAU
    }
}
impl Default for SpiralSettings {
    fn default() -> Self {
        Self {
            radius: 0.5,
            height_increment: 0.1,
            points: 500,
            t_start: 0.0,
            turns: 10.0,
            y_offset: -1.0,
            line_width: 6.0,
            tilt: 0.35,
            view_scale: 0.25,
            view_shift: -0.5,
        }
    }
}
#[cfg(feature = "serde")]
impl Settings {
    pub fn from_toml(s: &str) -> crate::Result<Self> {
        Ok(toml::from_str(s)?)
    }
    ///reads a settings file, missing keys fall back to defaults
    pub fn load(path: &std::path::Path) -> crate::Result<Self> {
        let s = std::fs::read_to_string(path)?;
        log::debug!("loading settings from {}", path.display());
        Self::from_toml(&s)
    }
}
