//! Map Layer Switcher Library.
//! Layer-Sichtbarkeit und URL-Hash-Synchronisation für Vektorkarten,
//! als Library exportiert für Hosts, Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod hash;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, LayerListItem, LayerSwitcher, SyncError,
    UrlHash,
};
pub use core::{
    Layer, LayerConfigError, LayerGroup, LayerNode, MapOptions, SelectionMode, StyleDocument,
    StyleLayer, Viewport, Visibility,
};
pub use hash::{decode_hash, encode_hash, HashComponents};
pub use shared::{HashLocation, HeadlessMap, MapSurface, MemoryLocation, SwitcherOptions};
