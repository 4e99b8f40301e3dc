use bytemuck::{Pod, Zeroable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
///which data set is drawn
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum Mode {
    ///sin(x) colored by the sign and size of its slope
    #[default]
    Graph,
    ///a helix with alternating red/green vertices, rotated by the cursor
    Spiral,
}
///a point of the function graph, position first then color,
///laid out the same way the vertex attributes are read
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Default, Pod, Zeroable)]
pub struct Sample2D {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}
impl Sample2D {
    pub fn new(x: f32, y: f32, r: f32, g: f32, b: f32) -> Self {
        Self { x, y, r, g, b }
    }
    pub fn pos(&self) -> Pos {
        Pos::new(self.x, self.y)
    }
    pub fn color(&self) -> Color {
        Color::from_unit(self.r, self.g, self.b)
    }
}
///a point of the helix
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Default, Pod, Zeroable)]
pub struct Sample3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}
impl Sample3D {
    pub fn new(x: f32, y: f32, z: f32, r: f32, g: f32, b: f32) -> Self {
        Self { x, y, z, r, g, b }
    }
    pub fn pos(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
    pub fn color(&self) -> Color {
        Color::from_unit(self.r, self.g, self.b)
    }
}
///a fixed width record of floats, written and read in field order
pub trait Record: Pod + Sized {
    ///number of floats in one record
    const FIELDS: usize;
    fn fields(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }
    fn from_fields(fields: &[f32]) -> Self {
        bytemuck::pod_read_unaligned(bytemuck::cast_slice(fields))
    }
    ///views a run of records as one flat attribute buffer
    fn attributes(records: &[Self]) -> &[f32] {
        bytemuck::cast_slice(records)
    }
}
impl Record for Sample2D {
    const FIELDS: usize = 5;
}
impl Record for Sample3D {
    const FIELDS: usize = 6;
}
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
    pub fn splat(c: u8) -> Self {
        Self { r: c, g: c, b: c }
    }
    ///from channels in [0,1], anything outside is clamped
    pub fn from_unit(r: f32, g: f32, b: f32) -> Self {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(c(r), c(g), c(b))
    }
    ///softbuffer wants 0RGB
    pub fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
    #[cfg(feature = "tiny-skia")]
    pub(crate) fn to_col(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, 255)
    }
}
#[derive(Copy, Debug, Clone, PartialEq, Default)]
pub struct Pos {
    pub x: f32,
    pub y: f32,
}
impl Pos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    #[cfg(feature = "tiny-skia")]
    pub(crate) fn to_point(self) -> tiny_skia::Point {
        tiny_skia::Point::from_xy(self.x, self.y)
    }
}
#[derive(Copy, Debug, Clone, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}
impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
    ///rotation about the vertical axis
    pub fn rotate_y(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            self.x * cos + self.z * sin,
            self.y,
            -self.x * sin + self.z * cos,
        )
    }
    ///rotation about the horizontal screen axis, positive tips the top away from the viewer
    pub fn rotate_x(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            self.x,
            self.y * cos - self.z * sin,
            self.y * sin + self.z * cos,
        )
    }
    ///orthographic view onto the x/y plane
    pub fn to_pos(self) -> Pos {
        Pos::new(self.x, self.y)
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn attribute_layout_is_position_then_color() {
        let v = [
            Sample2D::new(1.0, 2.0, 0.5, 0.0, 0.0),
            Sample2D::new(3.0, 4.0, 0.0, 0.25, 0.0),
        ];
        assert_eq!(
            Sample2D::attributes(&v),
            &[1.0f32, 2.0, 0.5, 0.0, 0.0, 3.0, 4.0, 0.0, 0.25, 0.0]
        );
        let s = Sample3D::new(1.0, 2.0, 3.0, 1.0, 0.0, 0.0);
        assert_eq!(s.fields(), &[1.0f32, 2.0, 3.0, 1.0, 0.0, 0.0]);
        assert_eq!(Sample3D::from_fields(s.fields()), s);
    }
    #[test]
    fn unit_color_clamps() {
        assert_eq!(Color::from_unit(1.5, -0.2, 0.2), Color::new(255, 0, 51));
        assert_eq!(Color::new(1, 2, 3).to_u32(), 0x010203);
    }
    #[test]
    fn quarter_turn_about_y() {
        let v = Vec3::new(1.0, 2.0, 0.0).rotate_y(std::f32::consts::FRAC_PI_2);
        assert!(v.x.abs() < 1e-6);
        assert_eq!(v.y, 2.0);
        assert!((v.z + 1.0).abs() < 1e-6);
    }
}
