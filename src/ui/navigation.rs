//! Navigation primitives the recovery view calls into.

/// Top-level pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Conversation,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Conversation => "/conversation",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Conversation => "Conversation",
        }
    }
}

/// Full reload and route navigation, provided by the shell.
pub trait Navigator {
    fn reload(&mut self);
    fn navigate(&mut self, route: Route);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationRequest {
    Reload,
    Navigate(Route),
}

/// Records the latest request so the app loop can apply it after input
/// handling returns.
#[derive(Debug, Default)]
pub struct PendingNavigation {
    pending: Option<NavigationRequest>,
}

impl PendingNavigation {
    pub fn take(&mut self) -> Option<NavigationRequest> {
        self.pending.take()
    }
}

impl Navigator for PendingNavigation {
    fn reload(&mut self) {
        self.pending = Some(NavigationRequest::Reload);
    }

    fn navigate(&mut self, route: Route) {
        self.pending = Some(NavigationRequest::Navigate(route));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_root() {
        assert_eq!(Route::default(), Route::Home);
        assert_eq!(Route::Home.path(), "/");
    }

    #[test]
    fn pending_keeps_latest_request() {
        let mut nav = PendingNavigation::default();
        nav.reload();
        nav.navigate(Route::Home);
        assert_eq!(nav.take(), Some(NavigationRequest::Navigate(Route::Home)));
        assert_eq!(nav.take(), None);
    }
}
