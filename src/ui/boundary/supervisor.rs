//! The error boundary widget.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Clear, Widget},
};

use crate::ui::mvi::Reducer;
use crate::ui::navigation::{Navigator, Route};

use super::capture::supervise;
use super::fault::{RenderFault, StructuredTrace};
use super::intent::BoundaryIntent;
use super::recovery::{render_recovery_view, RecoveryAction, RecoveryView};
use super::reducer::BoundaryReducer;
use super::state::FaultState;

/// Caller-supplied replacement for the default recovery view.
pub type FallbackRenderer = Box<dyn Fn(&FaultState, Rect, &mut Buffer)>;

/// Contains render faults of one subtree.
///
/// The subtree renders into a scratch copy of the whole buffer, so it may
/// draw wherever direct rendering could. Only a successful render is copied
/// back, so a failure never leaves partial output behind.
/// Faults raised outside [`ErrorBoundary::render`] (input handlers,
/// background threads) are not caught here.
pub struct ErrorBoundary {
    label: String,
    state: FaultState,
    recovery: RecoveryView,
    fallback: Option<FallbackRenderer>,
    dev_mode: bool,
}

impl ErrorBoundary {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            state: FaultState::default(),
            recovery: RecoveryView::default(),
            fallback: None,
            dev_mode: cfg!(debug_assertions),
        }
    }

    pub fn with_fallback<F>(mut self, fallback: F) -> Self
    where
        F: Fn(&FaultState, Rect, &mut Buffer) + 'static,
    {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Development mode adds the collapsible trace panel to the default view.
    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn state(&self) -> &FaultState {
        &self.state
    }

    pub fn has_error(&self) -> bool {
        self.state.has_error()
    }

    pub fn recovery(&self) -> &RecoveryView {
        &self.recovery
    }

    /// Render `child` into `area`, or the fallback once the subtree failed.
    pub fn render<F>(&mut self, area: Rect, buf: &mut Buffer, child: F)
    where
        F: FnOnce(Rect, &mut Buffer) -> Result<(), RenderFault>,
    {
        let area = area.intersection(buf.area);
        if !self.state.has_error() {
            let mut scratch = buf.clone();
            match supervise(&self.label, || child(area, &mut scratch)) {
                Ok(()) => {
                    *buf = scratch;
                    return;
                }
                Err(failure) => {
                    self.dispatch(BoundaryIntent::RenderFailed {
                        error: failure.error,
                    });
                    self.on_failure_captured(failure.trace);
                }
            }
        }
        self.render_fallback(area, buf);
    }

    /// Infallible widgets can still panic.
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect, buf: &mut Buffer) {
        self.render(area, buf, |area, buf| {
            widget.render(area, buf);
            Ok(())
        });
    }

    /// Record diagnostics for the committed failure. Logs once per episode.
    pub fn on_failure_captured(&mut self, trace: StructuredTrace) {
        let Some(error) = self.state.captured_error() else {
            tracing::debug!(boundary = %self.label, "trace for healthy boundary ignored");
            return;
        };
        if self.state.captured_trace().is_some() {
            return;
        }

        tracing::error!(
            boundary = %self.label,
            kind = ?error.kind,
            location = error.location.as_deref().unwrap_or("-"),
            path = %trace.path_display(),
            "render fault contained: {}",
            error.message
        );
        for cause in &error.source_chain {
            tracing::error!(boundary = %self.label, "caused by: {}", cause);
        }
        tracing::debug!(boundary = %self.label, backtrace = %trace.backtrace, "render fault trace");

        self.dispatch(BoundaryIntent::FailureCaptured { trace });
    }

    /// Replace the boundary with a freshly mounted one.
    pub fn remount(&mut self) {
        if self.state.has_error() {
            tracing::info!(boundary = %self.label, "boundary remounted");
        }
        self.state = FaultState::default();
        self.recovery = RecoveryView::default();
    }

    /// Keys for the default recovery view. Returns whether the key was used.
    pub fn handle_recovery_key(&mut self, key: KeyEvent, navigator: &mut dyn Navigator) -> bool {
        if !self.state.has_error()
            || self.fallback.is_some()
            || key.kind != KeyEventKind::Press
            || key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.recovery.selected = self.recovery.selected.other();
                true
            }
            KeyCode::Enter => {
                self.activate(self.recovery.selected, navigator);
                true
            }
            KeyCode::Char('t') if self.dev_mode => {
                self.recovery.trace_expanded = !self.recovery.trace_expanded;
                true
            }
            _ => false,
        }
    }

    /// Run a recovery action. Recovery is always user-initiated.
    pub fn activate(&mut self, action: RecoveryAction, navigator: &mut dyn Navigator) {
        tracing::info!(boundary = %self.label, action = action.label(), "recovery requested");
        match action {
            RecoveryAction::Reload => navigator.reload(),
            RecoveryAction::GoHome => navigator.navigate(Route::Home),
        }
    }

    fn dispatch(&mut self, intent: BoundaryIntent) {
        self.state = BoundaryReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    fn render_fallback(&self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        match &self.fallback {
            Some(fallback) => fallback(&self.state, area, buf),
            None => render_recovery_view(&self.state, &self.recovery, self.dev_mode, area, buf),
        }
    }
}
