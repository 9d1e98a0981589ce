//! GPU-side uniform packing for the external ray-march shader.
//!
//! [`FogUniform`] is the wire format of the per-frame hand-off: the resolved
//! [`FogParameters`] plus the camera matrices and temporal blend controls,
//! packed into 16-byte-aligned vec4 slots (std140-compatible).

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::params::FogParameters;

/// Per-frame camera and temporal state the parameter model does not own.
#[derive(Clone, Copy, Debug)]
pub struct FrameContext {
    /// Current view-projection matrix.
    pub view_projection: Mat4,
    /// Previous frame's view-projection matrix, for history reprojection.
    pub previous_view_projection: Mat4,
    /// Inverse of the current projection matrix, for ray reconstruction.
    pub inverse_projection: Mat4,
    /// Unit direction toward the scene from the sun.
    pub sun_direction: Vec3,
    /// Whether the shader may blend against the history buffer this frame.
    pub use_history: bool,
    /// History blend weight when `use_history` is set.
    pub blend_factor: f32,
    /// Animation clock in seconds, drives wind scrolling.
    pub time_seconds: f32,
    /// Monotonic frame counter.
    pub frame_index: u32,
}

impl Default for FrameContext {
    fn default() -> Self {
        Self {
            view_projection: Mat4::IDENTITY,
            previous_view_projection: Mat4::IDENTITY,
            inverse_projection: Mat4::IDENTITY,
            sun_direction: Vec3::new(0.0, -1.0, 0.0),
            use_history: false,
            blend_factor: 0.9,
            time_seconds: 0.0,
            frame_index: 0,
        }
    }
}

/// GPU-side representation, 320 bytes, std140-compatible.
///
/// Matrices are column-major. Scalar fields ride in the free lanes of the
/// vec4 slots; the layout test below pins every offset.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FogUniform {
    /// Current view-projection, column-major.
    pub view_projection: [f32; 16],
    /// Previous frame's view-projection, column-major.
    pub previous_view_projection: [f32; 16],
    /// Inverse projection, column-major.
    pub inverse_projection: [f32; 16],
    /// xyz = fog color, w = effective fog density
    /// (`fog_density * cloud_intensity`).
    pub fog_color_density: [f32; 4],
    /// xyz = sun color, w = sun intensity.
    pub sun_color_intensity: [f32; 4],
    /// xyz = sun direction (unit), w = silver lining strength.
    pub sun_direction_silver: [f32; 4],
    /// xy = wind direction (unit), z = wind speed, w = base noise scale.
    pub wind_noise: [f32; 4],
    /// x = cloud base height, y = cloud top height, z = coverage,
    /// w = cloud intensity.
    pub cloud_shape: [f32; 4],
    /// x = scattering intensity, y = ambient lighting,
    /// z = detail noise scale (half the base scale), w = max march distance.
    pub scatter_misc: [f32; 4],
    /// x = temporal blend factor, y = use-history flag (0 or 1),
    /// z = time in seconds, w = padding.
    pub temporal_blend: [f32; 4],
    /// x = step count, y = debug mode, z = frame index, w = padding.
    pub counts: [u32; 4],
}

impl FogUniform {
    /// Pack resolved parameters and frame state into the shader layout.
    pub fn pack(params: &FogParameters, frame: &FrameContext) -> Self {
        Self {
            view_projection: frame.view_projection.to_cols_array(),
            previous_view_projection: frame.previous_view_projection.to_cols_array(),
            inverse_projection: frame.inverse_projection.to_cols_array(),
            fog_color_density: [
                params.fog_color.x,
                params.fog_color.y,
                params.fog_color.z,
                params.fog_density * params.cloud_intensity,
            ],
            sun_color_intensity: [
                params.sun_color.x,
                params.sun_color.y,
                params.sun_color.z,
                params.sun_intensity,
            ],
            sun_direction_silver: [
                frame.sun_direction.x,
                frame.sun_direction.y,
                frame.sun_direction.z,
                params.silver_lining,
            ],
            wind_noise: [
                params.wind_direction.x,
                params.wind_direction.y,
                params.wind_speed,
                params.noise_scale,
            ],
            cloud_shape: [
                params.cloud_base_height,
                params.cloud_top_height,
                params.cloud_coverage,
                params.cloud_intensity,
            ],
            scatter_misc: [
                params.scattering_intensity,
                params.ambient_lighting,
                params.noise_scale * 0.5,
                params.max_distance,
            ],
            temporal_blend: [
                frame.blend_factor,
                if frame.use_history { 1.0 } else { 0.0 },
                frame.time_seconds,
                0.0,
            ],
            counts: [params.step_count, params.debug_mode.index(), frame.frame_index, 0],
        }
    }

    /// The raw bytes to upload into the uniform buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::DebugMode;
    use crate::preset::Preset;

    #[test]
    fn test_uniform_layout_matches_shader() {
        // Three mat4 (192 bytes) plus eight vec4 slots (128 bytes).
        assert_eq!(std::mem::size_of::<FogUniform>(), 320);
        assert_eq!(std::mem::offset_of!(FogUniform, view_projection), 0);
        assert_eq!(std::mem::offset_of!(FogUniform, previous_view_projection), 64);
        assert_eq!(std::mem::offset_of!(FogUniform, inverse_projection), 128);
        assert_eq!(std::mem::offset_of!(FogUniform, fog_color_density), 192);
        assert_eq!(std::mem::offset_of!(FogUniform, sun_color_intensity), 208);
        assert_eq!(std::mem::offset_of!(FogUniform, sun_direction_silver), 224);
        assert_eq!(std::mem::offset_of!(FogUniform, wind_noise), 240);
        assert_eq!(std::mem::offset_of!(FogUniform, cloud_shape), 256);
        assert_eq!(std::mem::offset_of!(FogUniform, scatter_misc), 272);
        assert_eq!(std::mem::offset_of!(FogUniform, temporal_blend), 288);
        assert_eq!(std::mem::offset_of!(FogUniform, counts), 304);
    }

    #[test]
    fn test_effective_density_folds_in_cloud_intensity() {
        // The shader consumes density pre-multiplied by cloud intensity.
        let params = Preset::DenseClouds.parameters();
        let uniform = FogUniform::pack(&params, &FrameContext::default());
        let expected = params.fog_density * params.cloud_intensity;
        assert!((uniform.fog_color_density[3] - expected).abs() < 1e-7);
    }

    #[test]
    fn test_detail_noise_is_half_base_scale() {
        let params = Preset::ClearSky.parameters();
        let uniform = FogUniform::pack(&params, &FrameContext::default());
        assert!((uniform.scatter_misc[2] - params.noise_scale * 0.5).abs() < 1e-7);
    }

    #[test]
    fn test_history_flag_packs_as_zero_or_one() {
        let params = FogParameters::default();
        let mut frame = FrameContext::default();

        frame.use_history = false;
        assert_eq!(FogUniform::pack(&params, &frame).temporal_blend[1], 0.0);

        frame.use_history = true;
        frame.blend_factor = 0.9;
        let uniform = FogUniform::pack(&params, &frame);
        assert_eq!(uniform.temporal_blend[1], 1.0);
        assert_eq!(uniform.temporal_blend[0], 0.9);
    }

    #[test]
    fn test_debug_mode_packs_as_index() {
        let mut params = FogParameters::default();
        params.debug_mode = DebugMode::FogOnly;
        let uniform = FogUniform::pack(&params, &FrameContext::default());
        assert_eq!(uniform.counts[1], 1);
    }

    #[test]
    fn test_byte_view_covers_whole_struct() {
        let uniform = FogUniform::pack(&FogParameters::default(), &FrameContext::default());
        assert_eq!(uniform.as_bytes().len(), 320);
    }
}
