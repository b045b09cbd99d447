//! # Page routing table
//!
//! The portal is a single page: the active view is an in-memory [`Page`], never
//! reflected in the address bar. Every page has one entry in [`ROUTES`] stating
//! who may see it and which data, if any, must be fetched when it is entered.
//!
//! [`resolve`] evaluates the table for a [`Viewer`]:
//!
//! | Access | Anonymous | Client | Admin |
//! |--------|-----------|--------|-------|
//! | [`Access::Public`] | page | page | page |
//! | [`Access::Authenticated`] | [`UNAUTHENTICATED_FALLBACK`] | page | page |
//! | [`Access::Admin`] | [`UNAUTHENTICATED_FALLBACK`] | [`View::AccessDenied`] | page |
//!
//! [`load_for`] only reports a [`PageLoad`] when the requested page itself is
//! shown, so a client asking for `admin` never triggers the admin fetch.

use std::fmt;
use std::str::FromStr;

use api::UserInfo;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Login,
    Register,
    SubmitCase,
    Dashboard,
    Booking,
    Videos,
    Admin,
    About,
    Contact,
    Privacy,
    Terms,
}

impl Page {
    pub const ALL: [Page; 12] = [
        Page::Home,
        Page::Login,
        Page::Register,
        Page::SubmitCase,
        Page::Dashboard,
        Page::Booking,
        Page::Videos,
        Page::Admin,
        Page::About,
        Page::Contact,
        Page::Privacy,
        Page::Terms,
    ];

    /// Page identifier, e.g. `"submit-case"`.
    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Login => "login",
            Page::Register => "register",
            Page::SubmitCase => "submit-case",
            Page::Dashboard => "dashboard",
            Page::Booking => "booking",
            Page::Videos => "videos",
            Page::Admin => "admin",
            Page::About => "about",
            Page::Contact => "contact",
            Page::Privacy => "privacy",
            Page::Terms => "terms",
        }
    }

    /// Routing entry for this page.
    pub fn route(self) -> &'static RouteEntry {
        &ROUTES[self as usize]
    }

    pub fn access(self) -> Access {
        self.route().access
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.id() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// Who may see a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Admin,
}

/// Data fetched on entering a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoad {
    /// Own cases and appointments, fetched together.
    Dashboard,
    /// Every client's cases.
    AdminCases,
    /// The public video catalog.
    Videos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub page: Page,
    pub access: Access,
    pub load: Option<PageLoad>,
}

const fn entry(page: Page, access: Access, load: Option<PageLoad>) -> RouteEntry {
    RouteEntry { page, access, load }
}

/// One entry per [`Page`], in declaration order.
pub const ROUTES: [RouteEntry; 12] = [
    entry(Page::Home, Access::Public, None),
    entry(Page::Login, Access::Public, None),
    entry(Page::Register, Access::Public, None),
    entry(Page::SubmitCase, Access::Authenticated, None),
    entry(Page::Dashboard, Access::Authenticated, Some(PageLoad::Dashboard)),
    entry(Page::Booking, Access::Authenticated, None),
    entry(Page::Videos, Access::Public, Some(PageLoad::Videos)),
    entry(Page::Admin, Access::Admin, Some(PageLoad::AdminCases)),
    entry(Page::About, Access::Public, None),
    entry(Page::Contact, Access::Public, None),
    entry(Page::Privacy, Access::Public, None),
    entry(Page::Terms, Access::Public, None),
];

/// Shown instead of any non-public page while nobody is signed in.
pub const UNAUTHENTICATED_FALLBACK: Page = Page::Login;

/// Who is looking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Anonymous,
    Client,
    Admin,
}

impl Viewer {
    pub fn from_user(user: Option<&UserInfo>) -> Self {
        match user {
            None => Viewer::Anonymous,
            Some(user) if user.is_admin() => Viewer::Admin,
            Some(_) => Viewer::Client,
        }
    }

    pub fn is_authenticated(self) -> bool {
        self != Viewer::Anonymous
    }
}

/// What actually renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Page(Page),
    AccessDenied,
}

pub fn resolve(page: Page, viewer: Viewer) -> View {
    match (page.access(), viewer) {
        (Access::Public, _) => View::Page(page),
        (_, Viewer::Anonymous) => View::Page(UNAUTHENTICATED_FALLBACK),
        (Access::Authenticated, _) | (Access::Admin, Viewer::Admin) => View::Page(page),
        (Access::Admin, Viewer::Client) => View::AccessDenied,
    }
}

/// The fetch to issue when `viewer` enters `page`, if any.
pub fn load_for(page: Page, viewer: Viewer) -> Option<PageLoad> {
    match resolve(page, viewer) {
        View::Page(shown) if shown == page => page.route().load,
        _ => None,
    }
}

/// Where a call-to-action for `page` should lead: protected pages send
/// anonymous visitors to registration instead.
pub fn call_to_action(page: Page, viewer: Viewer) -> Page {
    if page.access() != Access::Public && !viewer.is_authenticated() {
        Page::Register
    } else {
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_declaration_order() {
        for page in Page::ALL {
            assert_eq!(page.route().page, page);
        }
    }

    #[test]
    fn test_page_ids_roundtrip() {
        for page in Page::ALL {
            assert_eq!(page.id().parse::<Page>(), Ok(page));
        }
        assert!("settings".parse::<Page>().is_err());
    }

    #[test]
    fn test_protected_pages_fall_back_to_login() {
        for page in [Page::SubmitCase, Page::Dashboard, Page::Booking, Page::Admin] {
            assert_eq!(resolve(page, Viewer::Anonymous), View::Page(Page::Login));
            assert_eq!(load_for(page, Viewer::Anonymous), None);
        }
    }

    #[test]
    fn test_public_pages_always_show() {
        for page in [
            Page::Home,
            Page::Login,
            Page::Register,
            Page::Videos,
            Page::About,
            Page::Contact,
            Page::Privacy,
            Page::Terms,
        ] {
            for viewer in [Viewer::Anonymous, Viewer::Client, Viewer::Admin] {
                assert_eq!(resolve(page, viewer), View::Page(page));
            }
        }
    }

    #[test]
    fn test_admin_page_denied_to_clients_without_fetch() {
        assert_eq!(resolve(Page::Admin, Viewer::Client), View::AccessDenied);
        assert_eq!(load_for(Page::Admin, Viewer::Client), None);
        assert_eq!(resolve(Page::Admin, Viewer::Admin), View::Page(Page::Admin));
        assert_eq!(
            load_for(Page::Admin, Viewer::Admin),
            Some(PageLoad::AdminCases)
        );
    }

    #[test]
    fn test_loads() {
        assert_eq!(load_for(Page::Dashboard, Viewer::Client), Some(PageLoad::Dashboard));
        assert_eq!(load_for(Page::Videos, Viewer::Anonymous), Some(PageLoad::Videos));
        assert_eq!(load_for(Page::Booking, Viewer::Client), None);
    }

    #[test]
    fn test_call_to_action() {
        assert_eq!(call_to_action(Page::SubmitCase, Viewer::Anonymous), Page::Register);
        assert_eq!(call_to_action(Page::Booking, Viewer::Client), Page::Booking);
        assert_eq!(call_to_action(Page::Videos, Viewer::Anonymous), Page::Videos);
    }

    #[test]
    fn test_viewer_from_user() {
        let mut user = UserInfo::default();
        assert_eq!(Viewer::from_user(None), Viewer::Anonymous);
        assert_eq!(Viewer::from_user(Some(&user)), Viewer::Client);
        user.role = api::Role::Admin;
        assert_eq!(Viewer::from_user(Some(&user)), Viewer::Admin);
    }
}
