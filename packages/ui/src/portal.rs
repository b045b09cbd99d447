//! # Portal state
//!
//! [`PortalState`] is the whole client-side state of the portal: the current
//! page, the session, per-page form and list state, and the UI toggles. The
//! Dioxus layer keeps exactly one of these in a signal; everything that reads
//! session or page state subscribes through it.
//!
//! Actions that talk to the API come in pairs. `begin_*` validates and marks
//! the operation pending, returning what to send (or `None` when nothing
//! should be sent). The caller performs the request and hands the result to
//! the matching `finish_*`. Navigation returns the [`LoadRequest`] for the
//! page being entered, if it has one.

use api::{
    ApiError, AppointmentReceipt, AuthResponse, CaseInfo, CaseReceipt, Credentials, NewAppointment,
    NewCase, Registration, UserInfo,
};
use chrono::NaiveDateTime;
use store::{KeyValueStore, PreferenceStore};

use crate::admin::{AdminConsole, StatusChange};
use crate::dashboard::Dashboard;
use crate::forms::{BookingForm, CaseForm, FormError, LoginForm, RegisterForm};
use crate::i18n::Language;
use crate::loads::{LoadRequest, LoadResult};
use crate::operation::AsyncOperation;
use crate::route::{self, Page, PageLoad, View, Viewer};
use crate::session::SessionStore;
use crate::videos::VideoCatalog;

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const CASE_FAILED: &str = "Failed to submit case";
pub const BOOKING_FAILED: &str = "Failed to book appointment";
const SIGN_IN_REQUIRED: &str = "Please log in to continue";

/// An authenticated request body ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<B> {
    pub token: String,
    pub body: B,
}

/// Mark `op` pending and pair `body` with the bearer token, or record why not.
fn prepare<T, B>(
    op: &mut AsyncOperation<T>,
    body: Result<B, FormError>,
    token: Result<String, ApiError>,
) -> Option<Submission<B>> {
    if op.is_pending() {
        return None;
    }
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            op.fail(e.to_string());
            return None;
        }
    };
    let token = match token {
        Ok(token) => token,
        Err(e) => {
            op.fail(e.message_or(SIGN_IN_REQUIRED));
            return None;
        }
    };
    op.start();
    Some(Submission { token, body })
}

#[derive(Clone, Debug)]
pub struct PortalState<S> {
    page: Page,
    session: SessionStore<S>,
    preferences: PreferenceStore<S>,
    language: Language,
    pub menu_open: bool,
    pub login: LoginForm,
    pub register: RegisterForm,
    pub case: CaseForm,
    pub booking: BookingForm,
    pub dashboard: Dashboard,
    pub admin: AdminConsole,
    pub videos: VideoCatalog,
}

impl<S: KeyValueStore + Clone> PortalState<S> {
    /// Start on the home page with whatever token and language were left in
    /// `store`.
    pub fn new(store: S) -> Self {
        let preferences = PreferenceStore::new(store.clone());
        let language = preferences
            .language()
            .map(|code| Language::from_code(&code))
            .unwrap_or_default();
        Self {
            page: Page::Home,
            session: SessionStore::new(store),
            preferences,
            language,
            menu_open: false,
            login: LoginForm::default(),
            register: RegisterForm::default(),
            case: CaseForm::default(),
            booking: BookingForm::default(),
            dashboard: Dashboard::default(),
            admin: AdminConsole::default(),
            videos: VideoCatalog::default(),
        }
    }
}

impl<S: KeyValueStore> PortalState<S> {
    /// The requested page, before access checks.
    pub fn page(&self) -> Page {
        self.page
    }

    pub fn view(&self) -> View {
        route::resolve(self.page, self.viewer())
    }

    pub fn viewer(&self) -> Viewer {
        self.session.viewer()
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.session.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn navigate(&mut self, page: Page) -> Option<LoadRequest> {
        tracing::debug!(%page, "navigate");
        self.page = page;
        self.menu_open = false;
        match page {
            Page::Login => self.login.op.settle(),
            Page::Register => self.register.op.settle(),
            Page::SubmitCase => self.case.op.settle(),
            Page::Booking => self.booking.op.settle(),
            _ => {}
        }
        self.reload()
    }

    /// Re-issue the current page's load, if it is shown and has one.
    pub fn reload(&mut self) -> Option<LoadRequest> {
        match route::load_for(self.page, self.viewer())? {
            PageLoad::Dashboard => {
                let token = self.session.token()?.to_string();
                self.dashboard.start();
                Some(LoadRequest::Dashboard { token })
            }
            PageLoad::AdminCases => {
                let token = self.session.token()?.to_string();
                self.admin.cases.start();
                self.admin.close();
                Some(LoadRequest::AdminCases { token })
            }
            PageLoad::Videos => {
                self.videos.videos.start();
                Some(LoadRequest::Videos)
            }
        }
    }

    pub fn apply_load(&mut self, result: LoadResult) {
        match result {
            LoadResult::Videos(videos) => self.videos.apply(videos),
            // Late answers for a session that has since ended are dropped.
            LoadResult::Dashboard { token, .. } | LoadResult::AdminCases { token, .. }
                if !self.is_current(&token) =>
            {
                tracing::debug!("dropping page load for an ended session");
            }
            LoadResult::Dashboard { data, .. } => self.dashboard.apply(data),
            LoadResult::AdminCases { cases, .. } => self.admin.apply_cases(cases),
        }
    }

    fn is_current(&self, token: &str) -> bool {
        self.is_authenticated() && self.session.token() == Some(token)
    }

    pub fn go_call_to_action(&mut self, page: Page) -> Option<LoadRequest> {
        self.navigate(route::call_to_action(page, self.viewer()))
    }

    pub fn begin_login(&mut self) -> Option<Credentials> {
        if self.login.op.is_pending() {
            return None;
        }
        match self.login.request() {
            Ok(credentials) => {
                self.login.op.start();
                Some(credentials)
            }
            Err(e) => {
                self.login.op.fail(e.to_string());
                None
            }
        }
    }

    pub fn finish_login(&mut self, result: Result<AuthResponse, ApiError>) -> Option<LoadRequest> {
        match result {
            Ok(auth) => {
                self.login = LoginForm::default();
                self.signed_in(auth)
            }
            Err(e) => {
                self.login.op.fail(e.message_or(LOGIN_FAILED));
                None
            }
        }
    }

    pub fn begin_register(&mut self) -> Option<Registration> {
        if self.register.op.is_pending() {
            return None;
        }
        match self.register.request() {
            Ok(registration) => {
                self.register.op.start();
                Some(registration)
            }
            Err(e) => {
                self.register.op.fail(e.to_string());
                None
            }
        }
    }

    pub fn finish_register(
        &mut self,
        result: Result<AuthResponse, ApiError>,
    ) -> Option<LoadRequest> {
        match result {
            Ok(auth) => {
                self.register = RegisterForm::default();
                self.signed_in(auth)
            }
            Err(e) => {
                self.register.op.fail(e.message_or(REGISTRATION_FAILED));
                None
            }
        }
    }

    fn signed_in(&mut self, auth: AuthResponse) -> Option<LoadRequest> {
        tracing::info!(user = %auth.user.email, "signed in");
        self.session.login(auth);
        self.navigate(Page::Dashboard)
    }

    /// Token whose profile must be checked before the session counts.
    pub fn begin_profile(&self) -> Option<String> {
        self.session.pending_refresh()
    }

    /// Apply the startup profile check for `token`. Any failure is a full
    /// logout. A check for a token that has since been replaced is ignored.
    pub fn finish_profile(
        &mut self,
        token: &str,
        result: Result<UserInfo, ApiError>,
    ) -> Option<LoadRequest> {
        if self.session.pending_refresh().as_deref() != Some(token) {
            return None;
        }
        if self.session.refresh(result) {
            self.reload()
        } else {
            self.logout();
            None
        }
    }

    pub fn begin_case(&mut self) -> Option<Submission<NewCase>> {
        let body = self.case.request();
        prepare(&mut self.case.op, body, self.session.bearer())
    }

    pub fn finish_case(&mut self, result: Result<CaseReceipt, ApiError>) {
        match result {
            Ok(receipt) => {
                tracing::info!(case = %receipt.case_id, "case submitted");
                self.case.clear_fields();
                self.case.op.succeed(receipt);
            }
            Err(e) => self.case.op.fail(e.message_or(CASE_FAILED)),
        }
    }

    /// Open one of the caller's cases from the dashboard.
    pub fn begin_open_case(&mut self, case_id: &str) -> Option<Submission<String>> {
        let token = self.session.token()?.to_string();
        let body = self.dashboard.begin_case(case_id)?;
        Some(Submission { token, body })
    }

    pub fn finish_open_case(
        &mut self,
        token: &str,
        case_id: &str,
        result: Result<CaseInfo, ApiError>,
    ) {
        if self.is_current(token) {
            self.dashboard.finish_case(case_id, result);
        }
    }

    pub fn begin_booking(&mut self, now: NaiveDateTime) -> Option<Submission<NewAppointment>> {
        let body = self.booking.request(now);
        prepare(&mut self.booking.op, body, self.session.bearer())
    }

    pub fn finish_booking(&mut self, result: Result<AppointmentReceipt, ApiError>) {
        match result {
            Ok(receipt) => {
                self.booking.clear_fields();
                self.booking.op.succeed(receipt);
            }
            Err(e) => self.booking.op.fail(e.message_or(BOOKING_FAILED)),
        }
    }

    pub fn begin_status_change(
        &mut self,
        status: api::CaseStatus,
    ) -> Option<Submission<StatusChange>> {
        let token = self.session.token()?.to_string();
        let body = self.admin.begin_update(status)?;
        Some(Submission { token, body })
    }

    /// Returns the list reload to issue after a successful change.
    pub fn finish_status_change(&mut self, result: Result<(), ApiError>) -> Option<LoadRequest> {
        if self.admin.finish_update(result) {
            self.reload()
        } else {
            None
        }
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.preferences.set_language(language.code());
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// End the session and forget everything entered or fetched under it.
    /// The language choice survives.
    pub fn logout(&mut self) {
        tracing::info!("signed out");
        self.session.logout();
        self.login = LoginForm::default();
        self.register = RegisterForm::default();
        self.case = CaseForm::default();
        self.booking = BookingForm::default();
        self.dashboard = Dashboard::default();
        self.admin = AdminConsole::default();
        self.videos = VideoCatalog::default();
        self.menu_open = false;
        self.page = Page::Home;
    }
}
