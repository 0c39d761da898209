//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Host-Verträge (`MapSurface`, `HashLocation`), deren
//! In-Memory-Implementierungen und die Laufzeit-Optionen.

mod headless;
pub mod options;
mod surface;

pub use headless::{HeadlessMap, MemoryLocation};
pub use options::SwitcherOptions;
pub use options::{DEFAULT_CENTER, DEFAULT_TITLE, DEFAULT_ZOOM};
pub use surface::{HashLocation, MapSurface};
