use crate::settings::{GraphSettings, SpiralSettings};
use crate::types::{Sample2D, Sample3D};
use crate::{Error, Result};
#[cfg(feature = "rayon")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};
///evaluates a function at n+1 evenly spaced points of [start, end] together with
///a forward difference estimate of its slope
///
///the slope at the last sample looks at f(end + h), one step past the domain
pub struct Sampler<F> {
    f: F,
    start: f32,
    end: f32,
    n: u32,
}
impl<F> Sampler<F>
where
    F: Fn(f32) -> f32 + Sync,
{
    pub fn new(f: F, start: f32, end: f32, n: u32) -> Result<Self> {
        if n == 0 || !(start < end) {
            return Err(Error::EmptyDomain);
        }
        Ok(Self { f, start, end, n })
    }
    ///distance between neighbouring samples
    pub fn step(&self) -> f32 {
        (self.end - self.start) / self.n as f32
    }
    pub fn count(&self) -> usize {
        self.n as usize + 1
    }
    pub fn x(&self, i: u32) -> f32 {
        self.start + i as f32 * self.step()
    }
    ///newton's quotient
    pub fn slope(&self, x: f32) -> f32 {
        let h = self.step();
        ((self.f)(x + h) - (self.f)(x)) / h
    }
    ///largest |slope| over every sample, never zero so it can always divide
    pub fn max_slope(&self) -> f32 {
        #[cfg(feature = "rayon")]
        let max = (0..=self.n)
            .into_par_iter()
            .map(|i| self.slope(self.x(i)).abs())
            .reduce(|| 0.0, f32::max);
        #[cfg(not(feature = "rayon"))]
        let max = (0..=self.n)
            .map(|i| self.slope(self.x(i)).abs())
            .fold(0.0, f32::max);
        if max == 0.0 { f32::MIN_POSITIVE } else { max }
    }
    ///second pass, colors every sample against the global max_slope
    pub fn emit_normalized(&self, max_slope: f32) -> Vec<Sample2D> {
        (0..=self.n)
            .map(|i| {
                let x = self.x(i);
                let (r, g, b) = slope_color(self.slope(x), max_slope);
                Sample2D::new(x, (self.f)(x), r, g, b)
            })
            .collect()
    }
    pub fn samples(&self) -> Vec<Sample2D> {
        let max_slope = self.max_slope();
        log::debug!("max slope {max_slope} over {} samples", self.count());
        self.emit_normalized(max_slope)
    }
}
///red for a falling function, green for a rising one, brightness is |slope| / max_slope
pub fn slope_color(slope: f32, max_slope: f32) -> (f32, f32, f32) {
    let norm = slope.abs() / max_slope;
    let r = if slope < 0.0 { norm } else { 0.0 };
    let g = if slope > 0.0 { norm } else { 0.0 };
    (r, g, 0.0)
}
///samples sin(x) over the configured domain
pub fn graph(settings: &GraphSettings) -> Result<Vec<Sample2D>> {
    let sampler = Sampler::new(f32::sin, settings.start, settings.end, settings.subdivisions)?;
    Ok(sampler.samples())
}
///a helix around the y axis, x = r cos t, z = r sin t, y = k t
#[derive(Clone, Debug)]
pub struct SpiralSampler {
    pub radius: f32,
    pub height_increment: f32,
    pub t_start: f32,
    pub t_end: f32,
    pub points: u32,
}
impl SpiralSampler {
    pub fn new(settings: &SpiralSettings) -> Result<Self> {
        let t_end = settings.t_end();
        if settings.points == 0 || !(settings.t_start < t_end) {
            return Err(Error::EmptyDomain);
        }
        Ok(Self {
            radius: settings.radius,
            height_increment: settings.height_increment,
            t_start: settings.t_start,
            t_end,
            points: settings.points,
        })
    }
    pub fn step(&self) -> f32 {
        (self.t_end - self.t_start) / self.points as f32
    }
    ///exactly `points` samples, t_end itself is not reached;
    ///even indices are red and odd ones green
    pub fn samples(&self) -> Vec<Sample3D> {
        let step = self.step();
        (0..self.points)
            .map(|i| {
                let t = self.t_start + i as f32 * step;
                let (sin, cos) = t.sin_cos();
                let even = i % 2 == 0;
                Sample3D::new(
                    self.radius * cos,
                    self.height_increment * t,
                    self.radius * sin,
                    if even { 1.0 } else { 0.0 },
                    if even { 0.0 } else { 1.0 },
                    0.0,
                )
            })
            .collect()
    }
}
