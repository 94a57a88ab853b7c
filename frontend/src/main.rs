mod app;
mod dom;
mod listeners;
mod services;

fn main() {
    match app::boot() {
        Ok(presentation) => presentation.run_forever(),
        // Logging may not be installed yet, so report straight to the console
        Err(e) => gloo::console::error!(format!("deck failed to start: {:#}", e)),
    }
}
