//! Decorative particle field drawn behind the hero banner.
//!
//! Self-contained: it reads no page state and reports nothing back. The
//! only input is an optional pointer position the camera drifts toward.

use rand::Rng;
use std::fmt;
use std::time::Duration;

pub const PARTICLE_COUNT: usize = 1000;

/// Edge length of the cube particles are scattered in
const SPREAD: f32 = 25.0;
const CAMERA_Z: f32 = 8.0;
const FOV_DEGREES: f32 = 60.0;
const FOG_NEAR: f32 = 5.0;
const FOG_FAR: f32 = 25.0;
const POINTER_GAIN: f32 = 0.5;
const DRIFT_RATE: f32 = 0.01;
const BASE_POINT_SIZE: f32 = 0.08;
const PULSE_AMPLITUDE: f32 = 0.02;

/// Particle tint (violet)
pub const PARTICLE_RGB: (u8, u8, u8) = (0x8b, 0x5c, 0xf6);

/// Glyphs from faint (far, in fog) to bright (near)
const GLYPHS: [char; 4] = ['.', ':', '+', '*'];

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    fn sub(self, o: Vec3) -> Vec3 {
        Vec3::new(self.x - o.x, self.y - o.y, self.z - o.z)
    }

    fn dot(self, o: Vec3) -> f32 {
        self.x * o.x + self.y * o.y + self.z * o.z
    }

    fn cross(self, o: Vec3) -> Vec3 {
        Vec3::new(
            self.y * o.z - self.z * o.y,
            self.z * o.x - self.x * o.z,
            self.x * o.y - self.y * o.x,
        )
    }

    fn normalized(self) -> Vec3 {
        let len = self.dot(self).sqrt();
        if len == 0.0 {
            self
        } else {
            Vec3::new(self.x / len, self.y / len, self.z / len)
        }
    }
}

/// Pointer position in normalized device coordinates (-1..1 on both axes)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    positions: Vec<Vec3>,
    rotation_y: f32,
    point_size: f32,
    camera: Vec3,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let half = SPREAD / 2.0;
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                )
            })
            .collect();
        Self {
            positions,
            rotation_y: 0.0,
            point_size: BASE_POINT_SIZE,
            camera: Vec3::new(0.0, 0.0, CAMERA_Z),
        }
    }

    /// Advances the animation to `elapsed` since start
    pub fn tick(&mut self, elapsed: Duration, pointer: Option<Pointer>) {
        let time = elapsed.as_secs_f32() * 0.1;
        self.rotation_y = time * 0.05;
        self.point_size = BASE_POINT_SIZE + time.sin() * PULSE_AMPLITUDE;

        if let Some(pointer) = pointer {
            self.camera.x += (pointer.x * POINTER_GAIN - self.camera.x) * DRIFT_RATE;
            self.camera.y += (-pointer.y * POINTER_GAIN - self.camera.y) * DRIFT_RATE;
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    pub fn camera(&self) -> Vec3 {
        self.camera
    }

    /// Projects the field onto a `width` x `height` character grid.
    /// Terminal cells are about twice as tall as wide.
    pub fn render(&self, width: usize, height: usize) -> Frame {
        let mut cells = vec![vec![None::<usize>; width]; height];
        if width == 0 || height == 0 {
            return Frame::from_cells(cells);
        }

        let forward = Vec3::default().sub(self.camera).normalized();
        let right = forward.cross(Vec3::new(0.0, 1.0, 0.0)).normalized();
        let up = right.cross(forward);
        let focal = 1.0 / (FOV_DEGREES.to_radians() / 2.0).tan();
        let aspect = width as f32 / height as f32 * 0.5;
        let (sin, cos) = self.rotation_y.sin_cos();

        for p in &self.positions {
            let rotated = Vec3::new(p.x * cos + p.z * sin, p.y, -p.x * sin + p.z * cos);
            let rel = rotated.sub(self.camera);
            let depth = rel.dot(forward);
            if depth <= 0.1 || depth > FOG_FAR {
                continue;
            }

            let ndc_x = rel.dot(right) * focal / (depth * aspect);
            let ndc_y = rel.dot(up) * focal / depth;
            if !(-1.0..1.0).contains(&ndc_x) || !(-1.0..1.0).contains(&ndc_y) {
                continue;
            }

            let col = ((ndc_x + 1.0) / 2.0 * width as f32) as usize;
            let row = ((1.0 - ndc_y) / 2.0 * height as f32) as usize;
            let fog = ((depth - FOG_NEAR) / (FOG_FAR - FOG_NEAR)).clamp(0.0, 1.0);
            let level = ((1.0 - fog) * (GLYPHS.len() - 1) as f32).round() as usize;

            if let Some(cell) = cells.get_mut(row).and_then(|r| r.get_mut(col)) {
                *cell = Some(cell.map_or(level, |existing| existing.max(level)));
            }
        }

        Frame::from_cells(cells)
    }
}

/// One rendered frame, a grid of glyphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    rows: Vec<String>,
}

impl Frame {
    fn from_cells(cells: Vec<Vec<Option<usize>>>) -> Self {
        let rows = cells
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| cell.map_or(' ', |level| GLYPHS[level]))
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of lit cells
    pub fn lit(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.chars().filter(|c| *c != ' ').count())
            .sum()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rows.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn field() -> ParticleField {
        ParticleField::new(PARTICLE_COUNT, &mut StdRng::seed_from_u64(11))
    }

    #[test]
    fn test_particles_inside_cube() {
        let field = field();
        assert_eq!(field.len(), PARTICLE_COUNT);
        for p in field.positions() {
            for v in [p.x, p.y, p.z] {
                assert!((-12.5..12.5).contains(&v));
            }
        }
    }

    #[test]
    fn test_tick_rotates_and_pulses() {
        let mut field = field();
        field.tick(Duration::ZERO, None);
        assert_eq!(field.rotation_y(), 0.0);
        assert!((field.point_size() - 0.08).abs() < 1e-6);

        field.tick(Duration::from_secs(10), None);
        assert!((field.rotation_y() - 0.05).abs() < 1e-6);
        assert!(field.point_size() > 0.08 && field.point_size() <= 0.10);
    }

    #[test]
    fn test_camera_still_without_pointer() {
        let mut field = field();
        for s in 0..50 {
            field.tick(Duration::from_millis(s * 16), None);
        }
        assert_eq!(field.camera(), Vec3::new(0.0, 0.0, CAMERA_Z));
    }

    #[test]
    fn test_camera_drifts_toward_pointer() {
        let mut field = field();
        let pointer = Pointer { x: 1.0, y: 1.0 };
        let mut last_x = field.camera().x;
        for s in 0..200 {
            field.tick(Duration::from_millis(s * 16), Some(pointer));
            let cam = field.camera();
            assert!(cam.x > last_x && cam.x < 0.5);
            assert!(cam.y < 0.0 && cam.y > -0.5);
            last_x = cam.x;
        }
    }

    #[test]
    fn test_render_dimensions_and_content() {
        let frame = field().render(60, 12);
        assert_eq!(frame.rows().len(), 12);
        assert!(frame.rows().iter().all(|r| r.chars().count() == 60));
        assert!(frame.lit() > 0);
    }

    #[test]
    fn test_render_empty_grid() {
        assert!(field().render(0, 0).rows().is_empty());
        assert_eq!(ParticleField::new(0, &mut StdRng::seed_from_u64(1)).render(10, 3).lit(), 0);
    }
}
