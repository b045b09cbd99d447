//! Portal context and hooks for the UI.
//!
//! [`PortalProvider`] owns the single [`PortalState`] signal and the API
//! client. Components reach them through [`use_portal`] and [`use_api`], and
//! mutate the portal through the action functions below so every request goes
//! through the same begin / send / finish sequence.

use api::{ApiConfig, CaseStatus, HttpClient};
use dioxus::prelude::*;

use crate::forms;
use crate::i18n::Language;
use crate::loads::{self, LoadRequest};
use crate::portal::PortalState;
use crate::route::Page;

/// Persistent storage the portal runs on: `localStorage` in the browser.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

pub type Portal = Signal<PortalState<PlatformStore>>;

/// Get the portal state.
/// Every component that reads it re-renders when it changes.
pub fn use_portal() -> Portal {
    use_context::<Portal>()
}

pub fn use_api() -> HttpClient {
    use_context::<HttpClient>()
}

/// Provider component for the portal state and API client.
/// Wrap the app with this component.
#[component]
pub fn PortalProvider(children: Element) -> Element {
    let mut portal = use_context_provider(|| Signal::new(PortalState::new(PlatformStore::default())));
    let client = use_context_provider(|| HttpClient::from_config(ApiConfig::from_env()));

    // Validate a token left by a previous visit, once.
    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            let Some(token) = portal.peek().begin_profile() else {
                return;
            };
            let result = client.me(&token).await;
            let load = portal.write().finish_profile(&token, result);
            run_load(portal, &client, load).await;
        }
    });

    rsx! {
        {children}
    }
}

async fn run_load(mut portal: Portal, client: &HttpClient, load: Option<LoadRequest>) {
    if let Some(request) = load {
        let result = loads::fetch(client, request).await;
        portal.write().apply_load(result);
    }
}

fn spawn_load(portal: Portal, client: HttpClient, load: Option<LoadRequest>) {
    if load.is_some() {
        spawn(async move { run_load(portal, &client, load).await });
    }
}

pub fn go_to(mut portal: Portal, client: HttpClient, page: Page) {
    let load = portal.write().navigate(page);
    spawn_load(portal, client, load);
}

/// Follow a call-to-action, which sends visitors to registration.
pub fn go_call_to_action(mut portal: Portal, client: HttpClient, page: Page) {
    let load = portal.write().go_call_to_action(page);
    spawn_load(portal, client, load);
}

pub fn login(mut portal: Portal, client: HttpClient) {
    let Some(credentials) = portal.write().begin_login() else {
        return;
    };
    spawn(async move {
        let result = client.login(&credentials).await;
        let load = portal.write().finish_login(result);
        run_load(portal, &client, load).await;
    });
}

pub fn register(mut portal: Portal, client: HttpClient) {
    let Some(registration) = portal.write().begin_register() else {
        return;
    };
    spawn(async move {
        let result = client.register(&registration).await;
        let load = portal.write().finish_register(result);
        run_load(portal, &client, load).await;
    });
}

pub fn submit_case(mut portal: Portal, client: HttpClient) {
    let Some(submission) = portal.write().begin_case() else {
        return;
    };
    spawn(async move {
        let result = client.submit_case(&submission.token, &submission.body).await;
        portal.write().finish_case(result);
    });
}

pub fn open_case(mut portal: Portal, client: HttpClient, case_id: String) {
    let Some(open) = portal.write().begin_open_case(&case_id) else {
        return;
    };
    spawn(async move {
        let result = client.get_case(&open.token, &open.body).await;
        portal
            .write()
            .finish_open_case(&open.token, &open.body, result);
    });
}

pub fn book_appointment(mut portal: Portal, client: HttpClient) {
    let now = forms::local_now();
    let Some(submission) = portal.write().begin_booking(now) else {
        return;
    };
    spawn(async move {
        let result = client
            .book_appointment(&submission.token, &submission.body)
            .await;
        portal.write().finish_booking(result);
    });
}

pub fn change_case_status(mut portal: Portal, client: HttpClient, status: CaseStatus) {
    let Some(submission) = portal.write().begin_status_change(status) else {
        return;
    };
    spawn(async move {
        let result = crate::admin::change_status(&client, &submission.token, &submission.body).await;
        let load = portal.write().finish_status_change(result);
        run_load(portal, &client, load).await;
    });
}

pub fn watch_video(mut portal: Portal, client: HttpClient, video_id: String) {
    let Some(video_id) = portal.write().videos.begin_watch(&video_id) else {
        return;
    };
    spawn(async move {
        let result = client.get_video(&video_id).await;
        portal.write().videos.finish_watch(&video_id, result);
    });
}

pub fn set_language(mut portal: Portal, language: Language) {
    portal.write().set_language(language);
}

pub fn logout(mut portal: Portal) {
    portal.write().logout();
}
