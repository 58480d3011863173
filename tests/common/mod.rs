//! Shared test utilities and doubles.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use ratatui::buffer::Buffer;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use visionbi::config::Config;
use visionbi::motion::{MotionSignal, StaticMotionSignal};
use visionbi::ui::app::App;
use visionbi::ui::navigation::{Navigator, Route};

/// Buffer contents as text, one line per row.
pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Navigation spy -----------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCall {
    Reload,
    Navigate(Route),
}

/// Navigator recording every call. Clones share the log.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    calls: Arc<Mutex<Vec<NavCall>>>,
}

impl RecordingNavigator {
    pub fn calls(&self) -> Vec<NavCall> {
        self.calls.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn reload(&mut self) {
        self.calls.lock().push(NavCall::Reload);
    }

    fn navigate(&mut self, route: Route) {
        self.calls.lock().push(NavCall::Navigate(route));
    }
}

// -- App helpers --------------------------------------------------------------

pub fn make_app(reduced_motion: Option<bool>, dev_mode: bool) -> App {
    let mut config = Config::default();
    config.ui.dev_mode = Some(dev_mode);
    let signal: Arc<dyn MotionSignal> = Arc::new(StaticMotionSignal(reduced_motion));
    App::with_motion_signal(&config, signal)
}
