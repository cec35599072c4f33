//! Shared visualization utilities for the cell picking demo.

use std::hash::{Hash, Hasher};

use cell_isect::Cell;
use cell_isect::topology::Face;
use macroquad::models::{Mesh, Vertex, draw_mesh};
use macroquad::prelude::*;
use nalgebra::Point3;

pub mod pick;
pub use pick::{Pick, pick};

/// Generates a deterministic color from a cell's vertices using hashing.
pub fn cell_color(cell: &Cell) -> Color {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    for v in cell.points() {
        v.x.to_bits().hash(&mut hasher);
        v.y.to_bits().hash(&mut hasher);
        v.z.to_bits().hash(&mut hasher);
    }
    let hash = hasher.finish();

    let r = (((hash >> 16) & 0xFF) as u8).max(40);
    let g = (((hash >> 8) & 0xFF) as u8).max(40);
    let b = ((hash & 0xFF) as u8).max(40);

    Color::from_rgba(r, g, b, 255)
}

fn to_vec3(p: &Point3<f64>) -> Vec3 {
    vec3(p.x as f32, p.y as f32, p.z as f32)
}

/// Triangles covering the cell's surface, as vertex index triples.
fn surface_triangles(cell: &Cell) -> Vec<[usize; 3]> {
    let n = cell.points().len();
    match cell {
        Cell::Triangle(_) => vec![[0, 1, 2]],
        Cell::TriangleStrip(_) => (0..n.saturating_sub(2)).map(|i| [i, i + 1, i + 2]).collect(),
        Cell::Polygon(_) => (1..n.saturating_sub(1)).map(|i| [0, i, i + 1]).collect(),
        Cell::Pixel(_) => vec![[0, 1, 3], [0, 3, 2]],
        Cell::Quad(_) => vec![[0, 1, 2], [0, 2, 3]],
        _ => cell
            .faces()
            .iter()
            .flat_map(|face| match *face {
                Face::Triangle([a, b, c]) => vec![[a, b, c]],
                Face::Quad([a, b, c, d]) => vec![[a, b, c], [a, c, d]],
            })
            .collect(),
    }
}

/// Draws a cell: surfaces as a mesh, edges as lines, and bare vertices as
/// small spheres.
pub fn draw_cell(cell: &Cell, color: Color) {
    let points = cell.points();

    let triangles = surface_triangles(cell);
    if !triangles.is_empty() {
        let vertices: Vec<Vertex> = points
            .iter()
            .map(|p| Vertex::new2(to_vec3(p), vec2(0.0, 0.0), color))
            .collect();
        let indices: Vec<u16> = triangles.iter().flatten().map(|&i| i as u16).collect();

        draw_mesh(&Mesh {
            vertices,
            indices,
            texture: None,
        });
    }

    for [a, b] in cell.edges() {
        draw_line_3d(to_vec3(&points[a]), to_vec3(&points[b]), WHITE);
    }

    if matches!(cell, Cell::Vertex(_) | Cell::PolyVertex(_)) {
        for p in points {
            draw_sphere(to_vec3(p), 0.05, None, color);
        }
    }
}

/// Z-up orbit camera around a target point.
///
/// Right-drag orbits, middle-drag pans the target in the view plane, the
/// wheel zooms and `R` restores the initial view.
pub struct OrbitCamera {
    pub distance: f32,
    /// Rotation about the world z axis.
    pub azimuth: f32,
    /// Angle above the xy plane.
    pub elevation: f32,
    pub target: Vec3,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    home: (f32, f32, f32, Vec3),
}

impl OrbitCamera {
    pub fn new(distance: f32, azimuth: f32, elevation: f32) -> Self {
        Self {
            distance,
            azimuth,
            elevation,
            target: Vec3::ZERO,
            zoom_speed: 5.0,
            min_distance: 1.0,
            max_distance: 100.0,
            home: (distance, azimuth, elevation, Vec3::ZERO),
        }
    }

    pub fn with_zoom(mut self, speed: f32, min: f32, max: f32) -> Self {
        self.zoom_speed = speed;
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = target;
        self.home.3 = target;
        self
    }

    /// Applies this frame's mouse and keyboard input.
    pub fn update(&mut self) {
        let delta = mouse_delta_position();

        if is_mouse_button_down(MouseButton::Right) {
            self.azimuth += delta.x * 2.0;
            self.elevation = (self.elevation - delta.y * 2.0).clamp(-1.5, 1.5);
        }

        if is_mouse_button_down(MouseButton::Middle) {
            let forward = (self.target - self.position()).normalize();
            let right = forward.cross(Vec3::Z).normalize_or_zero();
            let up = right.cross(forward);
            self.target += (right * delta.x - up * delta.y) * self.distance;
        }

        let scroll = mouse_wheel().1;
        self.distance = (self.distance - scroll * self.zoom_speed)
            .clamp(self.min_distance, self.max_distance);

        if is_key_pressed(KeyCode::R) {
            (self.distance, self.azimuth, self.elevation, self.target) = self.home;
        }
    }

    /// Returns the eye position.
    pub fn position(&self) -> Vec3 {
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_el, cos_el) = self.elevation.sin_cos();
        self.target + self.distance * vec3(cos_el * cos_az, cos_el * sin_az, sin_el)
    }

    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position(),
            up: Vec3::Z,
            target: self.target,
            ..Default::default()
        }
    }

    /// Unprojects a screen position onto the near and far clip planes,
    /// giving the pick segment through that pixel.
    pub fn pick_segment(&self, screen: Vec2) -> (Point3<f64>, Point3<f64>) {
        let ndc = vec2(
            screen.x / screen_width() * 2.0 - 1.0,
            1.0 - screen.y / screen_height() * 2.0,
        );
        let inverse = self.to_camera3d().matrix().inverse();
        let near = inverse.project_point3(vec3(ndc.x, ndc.y, -1.0));
        let far = inverse.project_point3(vec3(ndc.x, ndc.y, 1.0));

        (
            Point3::new(near.x as f64, near.y as f64, near.z as f64),
            Point3::new(far.x as f64, far.y as f64, far.z as f64),
        )
    }
}
