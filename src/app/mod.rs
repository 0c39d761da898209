//! Application-Layer: Controller, State, Events und Synchronisation.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod layer_list;
pub mod state;
pub mod switcher;
pub mod url_hash;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use layer_list::LayerListItem;
pub use state::AppState;
pub use switcher::LayerSwitcher;
pub use url_hash::{ParameterHandler, SyncError, UrlHash};
