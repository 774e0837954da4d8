/// What the frame loop does after `get_current_texture` fails.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Lost or outdated surface; it has been configured again and the next
    /// frame can proceed.
    Reconfigured,
    /// Timeout or other transient failure; drop this frame only.
    SkipFrame,
    /// Out of memory; leave the event loop.
    Fatal,
}
