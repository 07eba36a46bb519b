//! Path to view resolution for the two UI entry points.

/// Which page bundle is serving the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// The main application (`index.html`).
    Index,
    /// The standalone login page (`login.html`).
    Login,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    About,
    Login,
    NotFound,
}

struct Route {
    path: &'static str,
    view: View,
}

const INDEX_ROUTES: &[Route] = &[
    Route {
        path: "/",
        view: View::Home,
    },
    Route {
        path: "/about",
        view: View::About,
    },
];

const LOGIN_ROUTES: &[Route] = &[
    Route {
        path: "/login",
        view: View::Login,
    },
    Route {
        path: "/login/about123",
        view: View::About,
    },
];

impl Entry {
    fn routes(self) -> &'static [Route] {
        match self {
            Entry::Index => INDEX_ROUTES,
            Entry::Login => LOGIN_ROUTES,
        }
    }
}

/// Resolves a history-mode path. Query strings, fragments and a trailing slash
/// are ignored; anything unmatched is [`View::NotFound`].
pub fn resolve(entry: Entry, path: &str) -> View {
    let path = normalize(path);
    entry
        .routes()
        .iter()
        .find(|route| route.path == path)
        .map_or(View::NotFound, |route| route.view)
}

fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_routes() {
        assert_eq!(resolve(Entry::Index, "/"), View::Home);
        assert_eq!(resolve(Entry::Index, ""), View::Home);
        assert_eq!(resolve(Entry::Index, "/about"), View::About);
        assert_eq!(resolve(Entry::Index, "/about/"), View::About);
        assert_eq!(resolve(Entry::Index, "/login"), View::NotFound);
        assert_eq!(resolve(Entry::Index, "/nope"), View::NotFound);
    }

    #[test]
    fn test_login_routes() {
        assert_eq!(resolve(Entry::Login, "/login"), View::Login);
        assert_eq!(resolve(Entry::Login, "/login?username=ann"), View::Login);
        assert_eq!(resolve(Entry::Login, "/login/about123#top"), View::About);
        assert_eq!(resolve(Entry::Login, "/"), View::NotFound);
        assert_eq!(resolve(Entry::Login, "/about"), View::NotFound);
    }
}
