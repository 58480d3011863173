use crate::config::Config;
use crate::motion::{MotionEngine, MotionSignal, SharedMotionSignal, SystemMotionSignal};
use crate::ui::animate::MotionFrame;
use crate::ui::boundary::ErrorBoundary;
use crate::ui::navigation::{NavigationRequest, Navigator, PendingNavigation, Route};
use crate::ui::pages::{render_home, ConversationPage, InjectedFault};
use crossterm::event::{KeyEvent, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::Duration;

pub const PAGE_BOUNDARY: &str = "page";

/// Transient view state of the client. Nothing here outlives the process.
pub struct App {
    should_quit: bool,
    route: Route,
    dev_mode: bool,
    motion_signal: SharedMotionSignal,
    engine: MotionEngine,
    stagger_seconds: f32,
    magnetic_strength: f32,
    /// Wraps the whole body; the conversation page nests a second one.
    page_boundary: ErrorBoundary,
    conversation: ConversationPage,
    /// Time since the current page mounted, advanced by ticks.
    elapsed: Duration,
    navigation: PendingNavigation,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let signal: Arc<dyn MotionSignal> =
            Arc::new(SystemMotionSignal::new(config.motion.reduce_motion));
        Self::with_motion_signal(config, signal)
    }

    /// App reading the reduced-motion preference from `signal`.
    pub fn with_motion_signal(config: &Config, signal: Arc<dyn MotionSignal>) -> Self {
        let motion_signal = SharedMotionSignal::new(signal);
        let engine = MotionEngine::new(Arc::new(motion_signal.clone()));
        let dev_mode = config.ui.dev_mode();
        let magnetic_strength = config.ui.magnetic_strength;
        Self {
            should_quit: false,
            route: Route::default(),
            dev_mode,
            motion_signal,
            engine,
            stagger_seconds: config.motion.stagger_seconds,
            magnetic_strength,
            page_boundary: ErrorBoundary::new(PAGE_BOUNDARY).with_dev_mode(dev_mode),
            conversation: ConversationPage::new(dev_mode, magnetic_strength),
            elapsed: Duration::ZERO,
            navigation: PendingNavigation::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn dev_mode(&self) -> bool {
        self.dev_mode
    }

    pub fn engine(&self) -> &MotionEngine {
        &self.engine
    }

    pub fn reduced_motion(&self) -> bool {
        self.engine.reduced_motion()
    }

    pub fn page_boundary(&self) -> &ErrorBoundary {
        &self.page_boundary
    }

    pub fn conversation(&self) -> &ConversationPage {
        &self.conversation
    }

    /// Flip reduced motion for this session. Takes effect on the next frame.
    pub fn toggle_reduced_motion(&mut self) -> bool {
        let reduced = self.motion_signal.toggle();
        tracing::info!(reduced_motion = reduced, "motion preference toggled");
        reduced
    }

    pub fn on_tick(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if self.route != Route::Conversation {
            return;
        }
        if matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
            self.conversation
                .on_pointer(&self.engine, mouse.column, mouse.row);
        }
    }

    /// Development-only fault injection into the conversation page.
    pub fn inject_fault(&mut self, fault: InjectedFault) -> bool {
        if !self.dev_mode || self.route != Route::Conversation {
            tracing::debug!(?fault, route = self.route.path(), "fault injection ignored");
            return false;
        }
        self.conversation.inject_fault(fault);
        true
    }

    /// Give a failed boundary the first look at `key`. The outermost failed
    /// boundary is the one on screen.
    pub fn handle_recovery_key(&mut self, key: KeyEvent) -> bool {
        let handled = if self.page_boundary.has_error() {
            self.page_boundary
                .handle_recovery_key(key, &mut self.navigation)
        } else if self.route == Route::Conversation && self.conversation.transcript().has_error() {
            self.conversation
                .transcript_mut()
                .handle_recovery_key(key, &mut self.navigation)
        } else {
            false
        };
        if let Some(request) = self.navigation.take() {
            self.apply_navigation(request);
        }
        handled
    }

    pub fn apply_navigation(&mut self, request: NavigationRequest) {
        match request {
            NavigationRequest::Reload => {
                tracing::info!(route = self.route.path(), "reload");
            }
            NavigationRequest::Navigate(route) => {
                tracing::info!(from = self.route.path(), to = route.path(), "navigate");
                self.route = route;
            }
        }
        self.remount();
    }

    /// Fresh boundaries and page state, entrance clock restarted.
    fn remount(&mut self) {
        self.page_boundary.remount();
        self.conversation = ConversationPage::new(self.dev_mode, self.magnetic_strength);
        self.elapsed = Duration::ZERO;
    }

    /// Draw the current page into `area`, contained by the page boundary.
    pub fn render_body(&mut self, area: Rect, buf: &mut Buffer) {
        let motion = MotionFrame {
            engine: &self.engine,
            elapsed: self.elapsed.as_secs_f32(),
            stagger_seconds: self.stagger_seconds,
        };
        let route = self.route;
        let conversation = &mut self.conversation;
        self.page_boundary.render(area, buf, |area, buf| match route {
            Route::Home => render_home(motion, area, buf),
            Route::Conversation => conversation.render(motion, area, buf),
        });
    }
}

impl Navigator for App {
    fn reload(&mut self) {
        self.apply_navigation(NavigationRequest::Reload);
    }

    fn navigate(&mut self, route: Route) {
        self.apply_navigation(NavigationRequest::Navigate(route));
    }
}
