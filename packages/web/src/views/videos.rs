//! Legal education video catalog with category filter.

use dioxus::prelude::*;
use ui::components::{Alert, Spinner};
use ui::context::{self, use_api, use_portal};
use ui::videos::VideoFilter;
use ui::{AsyncOperation, ModalOverlay};

#[component]
pub fn Videos() -> Element {
    let mut portal = use_portal();
    let client = use_api();
    let catalog = portal.read().videos.clone();
    let filter = catalog.filter;

    rsx! {
        main {
            h1 { "Legal Education Videos" }
            p { class: "muted", "Learn about your rights and the legal process" }

            label {
                class: "field",
                style: "max-width: 16rem;",
                span { class: "field-label", "Category" }
                select {
                    class: "field-input",
                    value: filter.id(),
                    onchange: move |evt: FormEvent| {
                        portal.write().videos.filter = VideoFilter::from_id(&evt.value());
                    },
                    for choice in VideoFilter::OPTIONS {
                        option {
                            value: choice.id(),
                            selected: choice == filter,
                            "{choice.label()}"
                        }
                    }
                }
            }

            match &catalog.videos {
                AsyncOperation::Idle | AsyncOperation::Pending => rsx! { Spinner {} },
                AsyncOperation::Failed(err) => rsx! { Alert { message: err.clone() } },
                AsyncOperation::Ready(_) => {
                    let visible = catalog.visible();
                    if visible.is_empty() {
                        rsx! { div { class: "empty", "No videos in this category yet" } }
                    } else {
                        rsx! {
                            div {
                                class: "grid",
                                for video in visible {
                                    div {
                                        key: "{video.id}",
                                        class: "card",
                                        if !video.thumbnail_url.is_empty() {
                                            img { class: "video-thumb", src: "{video.thumbnail_url}", alt: "{video.title}" }
                                        }
                                        h3 { "{video.title}" }
                                        p { class: "muted", "{video.description}" }
                                        p { class: "muted", "{video.duration_label()} · {video.views} views" }
                                        button {
                                            class: "btn",
                                            onclick: {
                                                let client = client.clone();
                                                let id = video.id.clone();
                                                move |_| context::watch_video(portal, client.clone(), id.clone())
                                            },
                                            "Watch"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            match &catalog.watching {
                AsyncOperation::Idle => rsx! {},
                AsyncOperation::Pending => rsx! {
                    ModalOverlay {
                        title: "Loading video",
                        on_close: move |_| portal.write().videos.stop_watching(),
                        Spinner {}
                    }
                },
                AsyncOperation::Failed(err) => rsx! {
                    ModalOverlay {
                        title: "Video unavailable",
                        on_close: move |_| portal.write().videos.stop_watching(),
                        Alert { message: err.clone() }
                    }
                },
                AsyncOperation::Ready(clip) => rsx! {
                    ModalOverlay {
                        title: clip.title.clone(),
                        on_close: move |_| portal.write().videos.stop_watching(),
                        video {
                            class: "video-player",
                            controls: true,
                            src: "{clip.video_url}",
                        }
                        p { "{clip.description}" }
                    }
                },
            }
        }
    }
}
