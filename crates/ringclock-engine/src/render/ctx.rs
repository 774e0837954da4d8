use crate::coords::Viewport;
use crate::device::{Gpu, GpuFrame};
use crate::paint::Color;

/// What a renderer may read while recording one frame.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    /// Format pipelines must target; a change invalidates cached pipelines.
    pub surface_format: wgpu::TextureFormat,
    /// Logical window size the scene was laid out in.
    pub viewport: Viewport,
}

impl<'a> RenderCtx<'a> {
    pub fn for_gpu(gpu: &'a Gpu<'_>, viewport: Viewport) -> Self {
        Self {
            device: gpu.device(),
            queue: gpu.queue(),
            surface_format: gpu.surface_format(),
            viewport,
        }
    }
}

/// The acquired frame's encoder and color view.
///
/// Every renderer opens its own pass on it; passes run in the order they are
/// opened.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    pub fn for_frame(frame: &'a mut GpuFrame) -> Self {
        Self {
            encoder: &mut frame.encoder,
            color_view: &frame.view,
        }
    }

    /// Opens a color-only pass that clears the frame to `clear`.
    pub fn clear_pass(&mut self, clear: Color) -> wgpu::RenderPass<'_> {
        self.pass("ringclock clear", wgpu::LoadOp::Clear(clear.to_wgpu()))
    }

    /// Opens a color-only pass that draws over what earlier passes stored.
    pub fn overlay_pass(&mut self, label: &str) -> wgpu::RenderPass<'_> {
        self.pass(label, wgpu::LoadOp::Load)
    }

    fn pass(&mut self, label: &str, load: wgpu::LoadOp<wgpu::Color>) -> wgpu::RenderPass<'_> {
        self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: self.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        })
    }
}
