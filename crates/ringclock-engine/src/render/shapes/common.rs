//! GPU types and helpers shared by the instanced-quad shape renderers.

use bytemuck::{Pod, Zeroable};

use crate::coords::Viewport;

// ── blend ─────────────────────────────────────────────────────────────────

/// Blending for premultiplied-alpha shader output.
pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState { color: component, alpha: component }
}

// ── viewport uniform ──────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

impl ViewportUniform {
    /// Uniform contents for `viewport`; zero-sized axes are raised to one pixel so
    /// the shader never divides by zero.
    pub(super) fn from_viewport(viewport: Viewport) -> Self {
        Self {
            viewport: [viewport.width.max(1.0), viewport.height.max(1.0)],
            _pad: [0.0; 2],
        }
    }

    /// Minimum binding size for the uniform buffer.
    pub(super) fn min_binding_size() -> Option<wgpu::BufferSize> {
        wgpu::BufferSize::new(std::mem::size_of::<ViewportUniform>() as u64)
    }
}

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Instance buffer capacity for `required` instances: next power of two, at least 16.
pub(super) fn grown_capacity(required: usize) -> usize {
    required.next_power_of_two().max(16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_uniform_is_16_bytes() {
        assert_eq!(std::mem::size_of::<ViewportUniform>(), 16);
        assert_eq!(ViewportUniform::min_binding_size().map(|s| s.get()), Some(16));
    }

    #[test]
    fn degenerate_viewport_is_raised_to_one_pixel() {
        let u = ViewportUniform::from_viewport(Viewport::new(0.0, 480.0));
        assert_eq!(u.viewport, [1.0, 480.0]);
    }

    #[test]
    fn capacity_grows_in_powers_of_two() {
        assert_eq!(grown_capacity(1), 16);
        assert_eq!(grown_capacity(6), 16);
        assert_eq!(grown_capacity(17), 32);
        assert_eq!(grown_capacity(100), 128);
    }
}
