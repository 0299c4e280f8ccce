//! Immediate-mode draw list
//!
//! Every shape is a unit quad pushed through a model matrix. Consecutive
//! quads that share a texture go into one batch, so draw order is kept while
//! texture switches stay rare.

use glam::{Mat4, Vec2, Vec3};

use super::vertex::{Vertex, colors};

/// Glyphs per row and column in a font bank image
pub const FONTBANK_SIZE: u32 = 16;

/// Index of a texture uploaded to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(pub usize);

impl TextureId {
    /// Built-in 1x1 white texture, used for flat colour
    pub const WHITE: TextureId = TextureId(0);
}

/// Sub-rectangle of a texture in UV space (v grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRect {
    pub u: f32,
    pub v: f32,
    pub w: f32,
    pub h: f32,
}

impl UvRect {
    pub const FULL: UvRect = UvRect {
        u: 0.0,
        v: 0.0,
        w: 1.0,
        h: 1.0,
    };
}

/// UV rectangle of cell `index` in a `cols` x `rows` atlas, row-major
pub fn atlas_uv(index: u32, cols: u32, rows: u32) -> UvRect {
    let cols = cols.max(1);
    let rows = rows.max(1);
    UvRect {
        u: (index % cols) as f32 / cols as f32,
        v: (index / cols) as f32 / rows as f32,
        w: 1.0 / cols as f32,
        h: 1.0 / rows as f32,
    }
}

/// Vertices that share one texture
#[derive(Debug, Clone)]
pub struct Batch {
    pub texture: TextureId,
    pub vertices: Vec<Vertex>,
}

#[derive(Debug, Default)]
pub struct DrawList {
    batches: Vec<Batch>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.batches.clear();
    }

    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    pub fn vertex_count(&self) -> usize {
        self.batches.iter().map(|b| b.vertices.len()).sum()
    }

    fn batch_for(&mut self, texture: TextureId) -> &mut Vec<Vertex> {
        let reuse = matches!(self.batches.last(), Some(b) if b.texture == texture);
        if !reuse {
            self.batches.push(Batch {
                texture,
                vertices: Vec::with_capacity(6),
            });
        }
        let last = self.batches.len() - 1;
        &mut self.batches[last].vertices
    }

    /// Unit quad (corners at +/-0.5) transformed by `model`
    pub fn quad(&mut self, texture: TextureId, model: Mat4, uv: UvRect, tint: [f32; 4]) {
        let corner = |x: f32, y: f32, u: f32, v: f32| {
            let p = model.transform_point3(Vec3::new(x, y, 0.0));
            Vertex::new(p.x, p.y, u, v, tint)
        };
        let top_left = corner(-0.5, 0.5, uv.u, uv.v);
        let top_right = corner(0.5, 0.5, uv.u + uv.w, uv.v);
        let bottom_right = corner(0.5, -0.5, uv.u + uv.w, uv.v + uv.h);
        let bottom_left = corner(-0.5, -0.5, uv.u, uv.v + uv.h);

        self.batch_for(texture).extend_from_slice(&[
            top_left,
            bottom_left,
            bottom_right,
            top_left,
            bottom_right,
            top_right,
        ]);
    }

    /// Flat-coloured axis-aligned rectangle
    pub fn rect(&mut self, center: Vec2, size: Vec2, color: [f32; 4]) {
        let model = Mat4::from_translation(center.extend(0.0)) * Mat4::from_scale(size.extend(1.0));
        self.quad(TextureId::WHITE, model, UvRect::FULL, color);
    }

    /// Textured rectangle covering the whole image
    pub fn sprite(&mut self, texture: TextureId, model: Mat4) {
        self.quad(texture, model, UvRect::FULL, colors::WHITE);
    }

    /// One cell of an atlas texture
    pub fn atlas_sprite(
        &mut self,
        texture: TextureId,
        model: Mat4,
        index: u32,
        cols: u32,
        rows: u32,
    ) {
        self.quad(texture, model, atlas_uv(index, cols, rows), colors::WHITE);
    }

    /// A line of text from a 16x16 ASCII font bank
    ///
    /// Glyph `i` is a `size`-wide square centered `(size + spacing) * i` to
    /// the right of `position`.
    pub fn text(
        &mut self,
        texture: TextureId,
        text: &str,
        size: f32,
        spacing: f32,
        position: Vec2,
    ) {
        for (i, byte) in text.bytes().enumerate() {
            let offset = (size + spacing) * i as f32;
            let center = position + Vec2::new(offset, 0.0);
            let model = Mat4::from_translation(center.extend(0.0))
                * Mat4::from_scale(Vec3::new(size, size, 1.0));
            let uv = atlas_uv(byte as u32, FONTBANK_SIZE, FONTBANK_SIZE);
            self.quad(texture, model, uv, colors::WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atlas_uv() {
        let uv = atlas_uv(5, 4, 4);
        assert_eq!(uv.u, 0.25);
        assert_eq!(uv.v, 0.25);
        assert_eq!(uv.w, 0.25);
        assert_eq!(uv.h, 0.25);

        let tile = atlas_uv(2, 4, 1);
        assert_eq!(tile.u, 0.5);
        assert_eq!(tile.v, 0.0);
        assert_eq!(tile.h, 1.0);
    }

    #[test]
    fn test_quad_uv_orientation() {
        let mut list = DrawList::new();
        list.quad(TextureId(1), Mat4::IDENTITY, atlas_uv(0, 2, 2), colors::WHITE);
        let verts = &list.batches()[0].vertices;
        assert_eq!(verts.len(), 6);
        // First vertex is the top-left corner and samples the top of the cell
        assert_eq!(verts[0].position, [-0.5, 0.5]);
        assert_eq!(verts[0].uv, [0.0, 0.0]);
        // Bottom-right samples the far corner
        assert_eq!(verts[2].position, [0.5, -0.5]);
        assert_eq!(verts[2].uv, [0.5, 0.5]);
    }

    #[test]
    fn test_rect_covers_size() {
        let mut list = DrawList::new();
        list.rect(Vec2::new(2.0, 1.0), Vec2::new(1.0, 0.5), colors::PADDLE);
        let batch = &list.batches()[0];
        assert_eq!(batch.texture, TextureId::WHITE);
        let xs: Vec<f32> = batch.vertices.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = batch.vertices.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 1.5);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 2.5);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 0.75);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 1.25);
    }

    #[test]
    fn test_batches_follow_texture_changes() {
        let mut list = DrawList::new();
        list.rect(Vec2::ZERO, Vec2::ONE, colors::WHITE);
        list.rect(Vec2::ONE, Vec2::ONE, colors::WHITE);
        list.sprite(TextureId(1), Mat4::IDENTITY);
        list.rect(Vec2::ZERO, Vec2::ONE, colors::WHITE);

        let textures: Vec<_> = list.batches().iter().map(|b| b.texture).collect();
        assert_eq!(textures, vec![TextureId::WHITE, TextureId(1), TextureId::WHITE]);
        assert_eq!(list.vertex_count(), 24);

        list.clear();
        assert!(list.batches().is_empty());
    }

    #[test]
    fn test_text_layout() {
        let mut list = DrawList::new();
        list.text(TextureId(2), "AB", 0.5, 0.1, Vec2::new(-1.0, 2.0));
        let verts = &list.batches()[0].vertices;
        assert_eq!(verts.len(), 12);

        // 'A' is 65: column 1, row 4 of the bank
        assert_eq!(verts[0].uv, [1.0 / 16.0, 4.0 / 16.0]);

        // Second glyph's top-left corner is one advance to the right
        let advance = 0.5 + 0.1;
        assert!((verts[6].position[0] - (-1.0 + advance - 0.25)).abs() < 1e-5);
        assert!((verts[6].position[1] - 2.25).abs() < 1e-5);
    }
}
