//! Core-Domänentypen: Layer-Baum, Registry, Sichtbarkeit, Stil und Viewport.

pub mod layer;
pub mod registry;
pub mod style;
pub mod viewport;
pub mod visibility;

pub use layer::{Layer, LayerGroup, LayerNode, SelectionMode};
pub use registry::{LayerConfigError, LayerRegistry};
pub use style::{StyleDocument, StyleLayer};
pub use viewport::{MapOptions, Viewport};
pub use visibility::{resolve_visibility, Visibility};
