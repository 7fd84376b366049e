//! dextrack - Pokémon collection tracker TUI

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventKind, EventOutcome,
    RenderContext, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

use dextrack::action::Action;
use dextrack::api::{self, Endpoint, DEFAULT_SERVER};
use dextrack::components::{CollectionScreen, CollectionScreenProps, Component};
use dextrack::effect::Effect;
use dextrack::filter::{FilterKey, FilterState};
use dextrack::logging;
use dextrack::reducer::reducer;
use dextrack::state::AppState;
use dextrack::view::DEFAULT_SPRITE_BASE;

/// Pokémon collection tracker
#[derive(Parser, Debug)]
#[command(name = "dextrack")]
#[command(about = "Browse and update a Pokémon collection from the terminal")]
struct Args {
    /// Username whose collection is shown
    #[arg(long)]
    user: String,

    /// Tracker server base URL
    #[arg(long, default_value = DEFAULT_SERVER)]
    server: String,

    /// Base URL for sprite images (`{base}/{dex}.png`)
    #[arg(long, default_value = DEFAULT_SPRITE_BASE)]
    sprites: String,

    /// Initial generation filter
    #[arg(long)]
    gen: Option<String>,

    /// Initial category filter
    #[arg(long)]
    cat: Option<String>,

    /// Initial ownership filter (all, owned, notowned)
    #[arg(long)]
    own: Option<String>,

    /// Log file (defaults to the local data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        user,
        server,
        sprites,
        gen,
        cat,
        own,
        log_file,
        debug: debug_args,
    } = Args::parse();

    let log_path = log_file.unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)?;

    let filters = [(FilterKey::Gen, gen), (FilterKey::Cat, cat), (FilterKey::Own, own)]
        .into_iter()
        .fold(FilterState::new(), |filters, (key, value)| match value {
            Some(value) => filters.with(key, value),
            None => filters,
        });
    let endpoint = Endpoint::new(server, user);
    tracing::info!(
        server = %endpoint.base_url,
        user = %endpoint.username,
        query = %filters.query_string(),
        "starting"
    );

    let debug = DebugSession::new(debug_args);

    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(endpoint, filters).with_sprite_base(sprites))
        })
        .await
        .map_err(debug_error)?;
    let replay_actions = debug.load_replay_items().map_err(debug_error)?;
    let (middleware, recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug.save_actions(recorder.as_ref()).map_err(debug_error)?;
    tracing::info!("exiting");
    Ok(())
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let screen = Rc::new(RefCell::new(CollectionScreen::new()));
    let screen_events = Rc::clone(&screen);

    debug
        .run_effect_app(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Init),
            Some(Action::Quit),
            |_runtime| {},
            |frame, area, state, render_ctx: RenderContext| {
                let props = CollectionScreenProps {
                    state,
                    is_focused: render_ctx.is_focused(),
                };
                screen.borrow_mut().render(frame, area, props);
            },
            move |event, state| -> EventOutcome<Action> {
                if let EventKind::Resize(_, _) = event {
                    return EventOutcome::ignored().with_render();
                }
                let props = CollectionScreenProps {
                    state,
                    is_focused: true,
                };
                let action = screen_events
                    .borrow_mut()
                    .handle_event(event, props)
                    .into_iter()
                    .next();
                EventOutcome::from(action)
            },
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

/// Run effects as keyed tasks. Catalog fetches share one key, so a newer
/// fetch cancels the one in flight; every update gets its own key.
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::FetchCatalog {
            endpoint,
            filters,
            seq,
        } => {
            ctx.tasks().spawn(TaskKey::new("catalog"), async move {
                match api::fetch_catalog(&endpoint, &filters).await {
                    Ok(records) => Action::CatalogDidLoad { seq, records },
                    Err(e) => Action::CatalogDidError {
                        seq,
                        error: e.to_string(),
                    },
                }
            });
        }
        Effect::UpdateOwnership {
            endpoint,
            update,
            seq,
        } => {
            let key = format!("update_{seq}");
            ctx.tasks().spawn(TaskKey::new(key), async move {
                let name = update.name.clone();
                let flag = update.flag;
                match api::update_ownership(&endpoint, &update).await {
                    Ok(()) => Action::OwnershipDidUpdate { name, flag },
                    Err(e) => Action::OwnershipDidError {
                        name,
                        flag,
                        error: e.to_string(),
                    },
                }
            });
        }
    }
}
