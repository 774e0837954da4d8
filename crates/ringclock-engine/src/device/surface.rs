use wgpu::SurfaceError;
use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

/// Picks the surface format: an sRGB 8-bit format when preferred and offered,
/// otherwise the surface's first (preferred) format.
pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let first = formats.first().copied()?;

    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        if let Some(f) = preferred.into_iter().find(|f| formats.contains(f)) {
            return Some(f);
        }
    }

    Some(first)
}

/// Picks the alpha mode: `requested` when supported, else the first supported mode.
pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Whether the surface can be configured at `size`; wgpu rejects zero extents
/// (e.g. a minimized window).
#[inline]
pub(crate) fn is_configurable(size: PhysicalSize<u32>) -> bool {
    size.width > 0 && size.height > 0
}

/// Classifies a frame-acquisition error. The caller reconfigures the surface when
/// the result is [`SurfaceErrorAction::Reconfigured`].
pub(crate) fn classify_surface_error(err: &SurfaceError) -> SurfaceErrorAction {
    match err {
        SurfaceError::Lost | SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        SurfaceError::Timeout | SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormat as F;

    #[test]
    fn srgb_format_is_preferred_when_offered() {
        let formats = [F::Bgra8Unorm, F::Rgba8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(F::Rgba8UnormSrgb));
    }

    #[test]
    fn first_format_wins_without_srgb_preference() {
        let formats = [F::Bgra8Unorm, F::Bgra8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, false), Some(F::Bgra8Unorm));
    }

    #[test]
    fn first_format_is_the_fallback() {
        assert_eq!(choose_surface_format(&[F::Rgb10a2Unorm], true), Some(F::Rgb10a2Unorm));
        assert_eq!(choose_surface_format(&[], true), None);
    }

    #[test]
    fn unsupported_alpha_request_falls_back() {
        use wgpu::CompositeAlphaMode as A;
        assert_eq!(choose_alpha_mode(&[A::Opaque], Some(A::PreMultiplied)), A::Opaque);
        let both = [A::Opaque, A::PreMultiplied];
        assert_eq!(choose_alpha_mode(&both, Some(A::PreMultiplied)), A::PreMultiplied);
        assert_eq!(choose_alpha_mode(&[], None), A::Auto);
    }

    #[test]
    fn zero_extent_is_not_configurable() {
        assert!(!is_configurable(PhysicalSize::new(0, 600)));
        assert!(is_configurable(PhysicalSize::new(1, 1)));
    }

    #[test]
    fn surface_errors_are_classified() {
        use SurfaceErrorAction::{Fatal, Reconfigured, SkipFrame};

        assert_eq!(classify_surface_error(&SurfaceError::Outdated), Reconfigured);
        assert_eq!(classify_surface_error(&SurfaceError::Lost), Reconfigured);
        assert_eq!(classify_surface_error(&SurfaceError::Timeout), SkipFrame);
        assert_eq!(classify_surface_error(&SurfaceError::OutOfMemory), Fatal);
    }
}
