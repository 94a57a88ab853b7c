use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use web_sys::Document;

use crate::app::{SharedCursor, SharedFullscreen};

/// Show the cursor on movement; in fullscreen, hide it again after idling.
///
/// Storing a new `Timeout` drops the previous one, which cancels it.
pub fn attach(
    document: &Document,
    cursor: &SharedCursor,
    fullscreen: &SharedFullscreen,
) -> EventListener {
    let cursor = cursor.clone();
    let fullscreen = fullscreen.clone();
    EventListener::new(document, "mousemove", move |_| {
        let presenting = fullscreen.borrow().is_active();
        fullscreen.borrow().chrome().set_cursor_visible(true);

        let mut session = cursor.borrow_mut();
        session.pending = session.idle.on_pointer_move(presenting).map(|ticket| {
            let cursor = cursor.clone();
            let fullscreen = fullscreen.clone();
            Timeout::new(ticket.after_ms, move || {
                if cursor.borrow_mut().idle.on_timer(ticket) {
                    fullscreen.borrow().chrome().set_cursor_visible(false);
                }
            })
        });
    })
}
