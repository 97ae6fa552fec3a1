//! Spinner shown while a reply is being produced.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Start a steady-ticking spinner on stderr. Call `finish_and_clear` when the reply is ready.
pub fn thinking_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message("Thinking...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
