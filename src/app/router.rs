//! Route definitions and the navigation stack

/// All screens in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    Dashboard,
    About,
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Login => "Login",
            Route::Signup => "Sign Up",
            Route::Dashboard => "Live Monitor",
            Route::About => "About",
        }
    }
}

/// Navigation stack. The home route is always at the bottom and can never
/// be popped off.
pub struct Router {
    stack: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }

    pub fn current(&self) -> Route {
        // The stack is never empty
        *self.stack.last().unwrap_or(&Route::Home)
    }

    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Swap the top of the stack, so back skips the replaced screen.
    /// Collapses when the screen underneath already is the destination.
    pub fn replace(&mut self, route: Route) {
        self.stack.pop();
        if self.stack.last() != Some(&route) {
            self.stack.push(route);
        }
    }

    /// Pop back one screen. Returns false at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_back() {
        let mut router = Router::new();
        assert_eq!(router.current(), Route::Home);

        router.push(Route::Login);
        router.push(Route::Signup);
        assert_eq!(router.current(), Route::Signup);

        assert!(router.back());
        assert_eq!(router.current(), Route::Login);
    }

    #[test]
    fn test_back_stops_at_root() {
        let mut router = Router::new();
        assert!(!router.back());
        assert_eq!(router.current(), Route::Home);
    }

    #[test]
    fn test_replace_skips_screen_on_back() {
        let mut router = Router::new();
        router.push(Route::Login);
        router.replace(Route::Signup);
        assert_eq!(router.current(), Route::Signup);

        assert!(router.back());
        assert_eq!(router.current(), Route::Home);
    }

    #[test]
    fn test_replace_collapses_into_underlying_screen() {
        // Sign-in success replaces Login with Home, which is already the
        // root; no duplicate Home ends up on the stack
        let mut router = Router::new();
        router.push(Route::Login);
        router.replace(Route::Home);
        assert_eq!(router.current(), Route::Home);
        assert!(!router.back());
    }
}
