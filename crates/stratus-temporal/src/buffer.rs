//! The owned history buffer: one full-resolution frame plus the
//! view-projection transform it was rendered with.

use glam::Mat4;

/// One RGBA32F texel, the CPU stand-in for the half-float render target.
pub type Texel = [f32; 4];

/// Number of texels a `width x height` allocation holds.
pub fn texel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// A full-resolution copy of the previous frame.
///
/// The texel storage is owned and released when the buffer is dropped or
/// explicitly replaced; it is never resized in place.
#[derive(Clone, Debug)]
pub struct HistoryBuffer {
    width: u32,
    height: u32,
    texels: Vec<Texel>,
    view_projection: Mat4,
}

impl HistoryBuffer {
    /// Allocate a zeroed buffer at the given resolution.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            texels: vec![[0.0; 4]; texel_count(width, height)],
            view_projection: Mat4::IDENTITY,
        }
    }

    /// Width in texels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in texels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether this allocation matches the given resolution.
    pub fn matches(&self, width: u32, height: u32) -> bool {
        self.width == width && self.height == height
    }

    /// The stored frame.
    pub fn texels(&self) -> &[Texel] {
        &self.texels
    }

    /// The view-projection transform the stored frame was rendered with.
    pub fn view_projection(&self) -> Mat4 {
        self.view_projection
    }

    /// Raw bytes for upload to the GPU history texture.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.texels)
    }

    /// Overwrite the stored frame and its transform.
    ///
    /// The caller guarantees `frame.len()` equals this allocation's texel
    /// count; [`crate::TemporalAccumulator::commit`] checks it.
    pub(crate) fn store(&mut self, frame: &[Texel], view_projection: Mat4) {
        self.texels.copy_from_slice(frame);
        self.view_projection = view_projection;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_zeroed() {
        let buffer = HistoryBuffer::new(4, 2);
        assert_eq!(buffer.texels().len(), 8);
        assert!(buffer.texels().iter().all(|t| *t == [0.0; 4]));
        assert_eq!(buffer.view_projection(), Mat4::IDENTITY);
    }

    #[test]
    fn test_store_replaces_content_and_transform() {
        let mut buffer = HistoryBuffer::new(2, 1);
        let frame = [[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]];
        let vp = Mat4::from_scale(glam::Vec3::splat(2.0));

        buffer.store(&frame, vp);
        assert_eq!(buffer.texels(), &frame);
        assert_eq!(buffer.view_projection(), vp);
    }

    #[test]
    fn test_byte_view_has_sixteen_bytes_per_texel() {
        let buffer = HistoryBuffer::new(3, 3);
        assert_eq!(buffer.as_bytes().len(), 9 * 16);
    }

    #[test]
    fn test_matches_resolution() {
        let buffer = HistoryBuffer::new(1920, 1080);
        assert!(buffer.matches(1920, 1080));
        assert!(!buffer.matches(1280, 720));
        assert!(!buffer.matches(1080, 1920));
    }
}
