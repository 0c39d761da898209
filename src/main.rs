//! Map Layer Switcher (Headless-Demo).
//!
//! Spielt den Ablauf eines Karten-Hosts ohne Rendering durch:
//! Stil laden, Start-Sichtbarkeit setzen, Karte anhängen, Hash abgleichen.
//!
//! Aufruf: `map-layer-switcher [STIL.json] [#HASH] [+id|-id|key=value ...]`

use map_layer_switcher::{
    AppController, AppIntent, AppState, HeadlessMap, LayerListItem, LayerSwitcher, MapOptions,
    MemoryLocation, StyleDocument, SwitcherOptions, UrlHash,
};

/// Anzahl der am Ende protokollierten Commands.
const RECENT_COMMANDS: usize = 16;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Map Layer Switcher v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let mut args = std::env::args().skip(1);
        let style_path = args.next();
        let hash = args.next().unwrap_or_default();
        let actions: Vec<String> = args.collect();

        let config_path = SwitcherOptions::config_path();
        let options = SwitcherOptions::load_from_file(&config_path);
        let switcher = LayerSwitcher::from_options(&options)?;

        let mut style = match style_path.as_deref() {
            Some(path) => StyleDocument::load_from_file(std::path::Path::new(path))?,
            None => demo_style(),
        };
        let map_options = UrlHash::init_map_options(&hash, MapOptions::new(options.default_viewport()));
        log::info!(
            "Start-Viewport: {:.4}/{:.4} @ z{:.2}",
            map_options.center.y,
            map_options.center.x,
            map_options.zoom
        );

        let mut state = AppState::new(switcher, Box::new(MemoryLocation::new(hash)));
        state.url_hash.register_handler("m", |value| match value {
            Some(value) => log::info!("Marker gesetzt: {}", value),
            None => log::info!("Marker entfernt"),
        });

        // Fragment abgleichen, solange es noch unverändert ist: das Anhängen
        // schreibt den Hash neu. Der Viewport kommt bereits aus `map_options`.
        let mut controller = AppController::new();
        controller.handle_intent(&mut state, AppIntent::Startup)?;
        // Vor dem Erzeugen der Karte, damit nichts aufblitzt
        state.switcher.set_initial_visibility(&mut style);
        let map = HeadlessMap::new(style, map_options.viewport());
        controller.attach_map(&mut state, Box::new(map))?;
        log::info!("Startup abgeschlossen ({} Commands)", state.command_log.len());
        state.command_log.clear();

        let intents: Vec<AppIntent> = actions.iter().filter_map(|a| parse_action(a)).collect();
        Self::process_events(&mut controller, &mut state, intents);
        for command in state.command_log.last_n(RECENT_COMMANDS) {
            log::debug!("Command: {:?}", command);
        }

        print_layer_list(&state);
        println!("{}", state.hash_string()?);
        Ok(())
    }

    fn process_events(controller: &mut AppController, state: &mut AppState, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = controller.handle_intent(state, event) {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
    }
}

/// Demo-Stil mit typischen OpenMapTiles-Layer-IDs.
fn demo_style() -> StyleDocument {
    StyleDocument::from_layer_ids([
        "background",
        "landuse_residential",
        "landuse_park",
        "water",
        "waterway",
        "boundary_2",
        "boundary_4",
        "road_minor",
        "road_major",
        "building",
        "building_3d",
        "place_label",
    ])
}

/// `+id` blendet ein, `-id` blendet aus, `key=value` setzt einen Parameter,
/// `key=` entfernt ihn, `#...` simuliert einen Hash-Wechsel.
fn parse_action(action: &str) -> Option<AppIntent> {
    if action.starts_with('#') {
        return Some(AppIntent::HashChanged {
            hash: action.to_string(),
        });
    }
    if let Some(id) = action.strip_prefix('+') {
        return Some(AppIntent::LayerToggled {
            id: id.to_string(),
            visible: true,
        });
    }
    if let Some(id) = action.strip_prefix('-') {
        return Some(AppIntent::LayerToggled {
            id: id.to_string(),
            visible: false,
        });
    }
    if let Some((key, value)) = action.split_once('=') {
        return Some(AppIntent::ParameterChanged {
            key: key.to_string(),
            value: (!value.is_empty()).then(|| value.to_string()),
        });
    }
    log::warn!("Unbekannte Aktion \"{}\" ignoriert", action);
    None
}

fn print_layer_list(state: &AppState) {
    println!("{}", state.switcher.title());
    for item in state.switcher.list_items() {
        print_item(&item, 1);
    }
}

fn print_item(item: &LayerListItem, depth: usize) {
    let indent = "  ".repeat(depth);
    match item {
        LayerListItem::Layer { id, title, checked, .. } => {
            let mark = match (item.is_radio(), checked) {
                (true, true) => "(*)",
                (true, false) => "( )",
                (false, true) => "[x]",
                (false, false) => "[ ]",
            };
            println!("{indent}{mark} {title} ({id})");
        }
        LayerListItem::Group { title, items } => {
            println!("{indent}{title}");
            for child in items {
                print_item(child, depth + 1);
            }
        }
    }
}
