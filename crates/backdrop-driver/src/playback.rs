//! Pause/resume state owned by the driver.

use std::io::BufRead;
use std::thread;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Key that toggles playback, entered as a line on stdin
const TOGGLE_KEY: &str = "s";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Playback {
    pub paused: bool,
}

impl Playback {
    pub fn toggle(&mut self) {
        self.paused = !self.paused;
    }
}

pub fn channel() -> (watch::Sender<Playback>, watch::Receiver<Playback>) {
    watch::channel(Playback::default())
}

/// True when a line of input should toggle playback
pub fn is_toggle(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(TOGGLE_KEY)
}

/// Read toggle lines from stdin on a detached thread.
///
/// Stdin reads block and cannot be cancelled, so the thread is left behind
/// when the process exits instead of holding up runtime shutdown.
pub fn spawn_stdin_listener(controls: watch::Sender<Playback>) -> std::io::Result<()> {
    thread::Builder::new()
        .name("playback-input".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            if let Err(e) = listen(stdin.lock(), &controls) {
                warn!("Playback controls failed: {}", e);
            }
        })?;
    Ok(())
}

/// Toggle playback on each `s` line until the input ends
pub fn listen<R: BufRead>(input: R, controls: &watch::Sender<Playback>) -> std::io::Result<()> {
    for line in input.lines() {
        if !is_toggle(&line?) {
            continue;
        }
        controls.send_modify(Playback::toggle);
        let paused = controls.borrow().paused;
        info!(
            "'S' pressed. Display has been {}",
            if paused { "stopped" } else { "resumed" }
        );
    }

    debug!("Input closed; playback controls detached");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut playback = Playback::default();
        assert!(!playback.paused);
        playback.toggle();
        assert!(playback.paused);
        playback.toggle();
        assert!(!playback.paused);
    }

    #[test]
    fn test_is_toggle() {
        assert!(is_toggle("s"));
        assert!(is_toggle(" S \n"));
        assert!(!is_toggle("stop"));
        assert!(!is_toggle(""));
    }

    #[test]
    fn test_channel_observes_toggle() {
        let (controls, playback) = channel();
        controls.send_modify(Playback::toggle);
        assert!(playback.borrow().paused);
    }

    #[test]
    fn test_listen_toggles_per_line() {
        let (controls, playback) = channel();
        let input = std::io::Cursor::new("s\nhello\nS\ns\n");
        listen(input, &controls).unwrap();
        assert!(playback.borrow().paused);
    }
}
