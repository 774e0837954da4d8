use crate::scene::shapes::arc::ArcCmd;

/// One recorded shape, independent of how it is rasterized.
///
/// Every variant has a geometry module under `scene::shapes` and a renderer
/// under `render::shapes` that consumes it.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Clockwise annular sector.
    Arc(ArcCmd),
}
