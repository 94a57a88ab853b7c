use gloo::events::EventListener;

use crate::app::SharedFullscreen;

/// Mirror platform-initiated exits (Esc) into the page chrome
pub fn attach(fullscreen: &SharedFullscreen) -> Option<EventListener> {
    let session = fullscreen.borrow();
    let event = session.change_event()?;
    let document = session.document().clone();
    drop(session);

    let fullscreen = fullscreen.clone();
    Some(EventListener::new(&document, event, move |_| {
        fullscreen.borrow_mut().sync();
    }))
}
