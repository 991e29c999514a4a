//! [`Surface`] implementation on top of an [`egui::Painter`].

use glam::Vec2;
use sim_core::{
    gradient::Gradient,
    style::{Rgba, Stroke},
    surface::Surface,
};

/// Grid resolution of the background mesh along each axis.
///
/// Vertex colours are interpolated linearly across each cell, so a finer
/// grid follows the middle colour stop more closely.
pub const GRADIENT_CELLS: u32 = 16;

/// Draws into an egui painter, offsetting surface coordinates by `origin`
/// (the top-left corner of the drawing rect in screen space).
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self { painter, origin }
    }

    #[inline]
    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        to_screen(self.origin, p)
    }
}

#[inline]
pub fn to_screen(origin: egui::Pos2, p: Vec2) -> egui::Pos2 {
    origin + egui::vec2(p.x, p.y)
}

#[inline]
pub fn to_color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

#[inline]
pub fn to_egui_stroke(s: Stroke) -> egui::Stroke {
    egui::Stroke::new(s.width, to_color32(s.color))
}

/// Builds a `cells x cells` grid mesh covering `width x height` at `origin`,
/// each vertex coloured by sampling `gradient` at its surface position.
pub fn gradient_mesh(
    gradient: &Gradient,
    origin: egui::Pos2,
    width: f32,
    height: f32,
    cells: u32,
) -> egui::Mesh {
    let cells = cells.max(1);
    let stride = cells + 1;
    let mut mesh = egui::Mesh::default();

    for row in 0..=cells {
        let y = height * row as f32 / cells as f32;
        for col in 0..=cells {
            let x = width * col as f32 / cells as f32;
            let p = Vec2::new(x, y);
            mesh.colored_vertex(to_screen(origin, p), to_color32(gradient.color_at(p)));
        }
    }

    for row in 0..cells {
        for col in 0..cells {
            let tl = row * stride + col;
            let tr = tl + 1;
            let bl = tl + stride;
            let br = bl + 1;
            mesh.add_triangle(tl, tr, bl);
            mesh.add_triangle(tr, br, bl);
        }
    }

    mesh
}

impl Surface for PainterSurface<'_> {
    fn fill_gradient(&mut self, gradient: &Gradient, width: f32, height: f32) {
        let mesh = gradient_mesh(gradient, self.origin, width, height, GRADIENT_CELLS);
        self.painter.add(egui::Shape::mesh(mesh));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            to_egui_stroke(stroke),
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.painter
            .circle_filled(self.to_screen(center), radius, to_color32(color));
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke) {
        self.painter
            .circle_stroke(self.to_screen(center), radius, to_egui_stroke(stroke));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::style::BACKGROUND_STOPS;

    #[test]
    fn to_screen_offsets_by_origin() {
        let origin = egui::pos2(10.0, 20.0);
        assert_eq!(to_screen(origin, Vec2::new(1.5, 2.5)), egui::pos2(11.5, 22.5));
    }

    #[test]
    fn to_color32_keeps_channels() {
        let c = to_color32(Rgba::rgb(0x4B, 0x00, 0x82));
        assert_eq!(c, egui::Color32::from_rgb(0x4B, 0x00, 0x82));
    }

    #[test]
    fn gradient_mesh_covers_the_rect() {
        let g = Gradient::diagonal(400.0, 200.0);
        let origin = egui::pos2(5.0, 5.0);
        let mesh = gradient_mesh(&g, origin, 400.0, 200.0, 4);

        assert_eq!(mesh.vertices.len(), 25);
        assert_eq!(mesh.indices.len(), 4 * 4 * 6);
        assert!(mesh.is_valid());

        assert_eq!(mesh.vertices[0].pos, origin);
        assert_eq!(mesh.vertices[24].pos, egui::pos2(405.0, 205.0));
        assert_eq!(mesh.vertices[0].color, to_color32(BACKGROUND_STOPS[0].1));
        assert_eq!(mesh.vertices[12].color, to_color32(BACKGROUND_STOPS[1].1));
        assert_eq!(mesh.vertices[24].color, to_color32(BACKGROUND_STOPS[2].1));
    }

    #[test]
    fn gradient_mesh_clamps_zero_cells() {
        let g = Gradient::diagonal(10.0, 10.0);
        let mesh = gradient_mesh(&g, egui::Pos2::ZERO, 10.0, 10.0, 0);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
    }
}
