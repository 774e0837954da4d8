use winit::dpi::PhysicalSize;

use super::surface;

/// How the window's GPU device and surface are set up.
///
/// The defaults suit a single always-animating window: vsync-paced FIFO, a
/// low-power adapter, downlevel limits and an sRGB target so linear colors
/// are encoded on write.
#[derive(Debug, Clone)]
pub struct GpuInit {
    pub prefer_srgb: bool,
    pub present_mode: wgpu::PresentMode,

    /// Used only when the surface supports it.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub power_preference: wgpu::PowerPreference,
    pub required_limits: wgpu::Limits,

    /// Hint; backends may ignore it.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            power_preference: wgpu::PowerPreference::LowPower,
            required_limits: wgpu::Limits::downlevel_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}

impl GpuInit {
    /// The arc pipeline needs no optional features.
    pub(crate) fn device_descriptor(&self) -> wgpu::DeviceDescriptor<'static> {
        wgpu::DeviceDescriptor {
            label: Some("ringclock device"),
            required_features: wgpu::Features::empty(),
            required_limits: self.required_limits.clone(),
            experimental_features: wgpu::ExperimentalFeatures::disabled(),
            memory_hints: wgpu::MemoryHints::MemoryUsage,
            trace: wgpu::Trace::Off,
        }
    }

    /// Picks format and alpha mode from the surface capabilities.
    ///
    /// A zero extent is stored as 1x1; the caller defers `configure` until the
    /// window has an area again. Returns `None` when the surface reports no
    /// formats at all.
    pub(crate) fn surface_config(
        &self,
        formats: &[wgpu::TextureFormat],
        alpha_modes: &[wgpu::CompositeAlphaMode],
        size: PhysicalSize<u32>,
    ) -> Option<wgpu::SurfaceConfiguration> {
        let format = surface::choose_surface_format(formats, self.prefer_srgb)?;

        Some(wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: self.present_mode,
            alpha_mode: surface::choose_alpha_mode(alpha_modes, self.alpha_mode),
            view_formats: vec![],
            desired_maximum_frame_latency: self.desired_maximum_frame_latency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode, TextureFormat};

    const FORMATS: [TextureFormat; 2] = [
        TextureFormat::Bgra8Unorm,
        TextureFormat::Bgra8UnormSrgb,
    ];

    #[test]
    fn device_asks_for_no_features_and_downlevel_limits() {
        let desc = GpuInit::default().device_descriptor();
        assert_eq!(desc.label, Some("ringclock device"));
        assert_eq!(desc.required_features, wgpu::Features::empty());
        assert_eq!(desc.required_limits, wgpu::Limits::downlevel_defaults());
    }

    #[test]
    fn surface_config_prefers_srgb_and_fifo() {
        let config = GpuInit::default()
            .surface_config(&FORMATS, &[CompositeAlphaMode::Opaque], PhysicalSize::new(800, 600))
            .unwrap();

        assert_eq!(config.format, TextureFormat::Bgra8UnormSrgb);
        assert_eq!(config.present_mode, wgpu::PresentMode::Fifo);
        assert_eq!(config.alpha_mode, CompositeAlphaMode::Opaque);
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.desired_maximum_frame_latency, 2);
    }

    #[test]
    fn minimized_window_is_stored_as_one_pixel() {
        let config = GpuInit::default()
            .surface_config(&FORMATS, &[CompositeAlphaMode::Opaque], PhysicalSize::new(0, 0))
            .unwrap();
        assert_eq!((config.width, config.height), (1, 1));
    }

    #[test]
    fn surface_without_formats_has_no_config() {
        let alpha = [CompositeAlphaMode::Opaque];
        let config = GpuInit::default().surface_config(&[], &alpha, PhysicalSize::new(1, 1));
        assert!(config.is_none());
    }
}
