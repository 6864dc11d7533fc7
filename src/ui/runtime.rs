use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::config::ConfigStore;
use crate::filter::FilterStore;
use crate::query::{QueryDispatcher, SearchClient};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: ConfigStore) -> anyhow::Result<()> {
    let settings = config.get();
    let tick_rate = Duration::from_millis(settings.ui.tick_rate_ms);

    let (mut terminal, guard) = setup_terminal()?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let events = EventHandler::new(tick_rate);
    let filters = FilterStore::default();
    let client = SearchClient::new(&settings.search)?;
    let dispatcher = QueryDispatcher::new(
        filters.clone(),
        client,
        events.sender(),
        Duration::from_millis(settings.search.debounce_ms),
    );
    runtime.spawn(dispatcher.run());

    let mut app = App::new(config, filters);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {
                // Next draw picks up the new size.
            }
            Ok(AppEvent::Query(event)) => app.on_query_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    // Abandon any in-flight request instead of waiting it out.
    runtime.shutdown_background();
    Ok(())
}
