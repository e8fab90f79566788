// SPDX-License-Identifier: MPL-2.0
//! Application shell: pagination state, fetch orchestration, and view
//! composition for the library window.
//!
//! All async work (library pages, thumbnails, the update check, the portal
//! request) runs as Iced tasks and re-enters [`App::update`] as a message,
//! so widget state is only ever touched on the UI loop. Overlapping
//! fetches are resolved by a request generation: completions whose
//! generation is no longer current are discarded instead of racing the
//! display.

use crate::api::{self, VideoRecord};
use crate::autostart;
use crate::debounce::Debouncer;
use crate::error::Error;
use crate::ui::duration_filters::{self, State as FiltersState};
use crate::ui::library_row;
use crate::ui::theme::{self, palette, spacing};
use crate::ui::widgets::Spinner;
use crate::ui::{header, update_banner};
use crate::update_check::{self, UpdateStatus, CURRENT_VERSION};
use iced::alignment::Vertical;
use iced::widget::image::Handle;
use iced::widget::{button, text, Column, Container, Row, Scrollable};
use iced::{time, window, Element, Length, Subscription, Task, Theme};
use std::collections::HashMap;
use std::f32::consts::TAU;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1180;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;

/// Quiet period after the last keystroke before a search fetch is issued.
const SEARCH_DEBOUNCE: Duration = Duration::from_secs(1);

const SPINNER_TICK: Duration = Duration::from_millis(100);
const SPINNER_STEP: f32 = 0.35;

/// Load phase of the shell. `LoadingInitial` replaces the whole display
/// when it completes; `LoadingPaginate` appends to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    LoadingInitial,
    LoadingPaginate,
}

/// Top-level messages consumed by [`App::update`]. Component messages are
/// forwarded through a single entrypoint; task completions carry their
/// request generation so stale ones can be dropped.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Filters(duration_filters::Message),
    /// A debounce timer fired; acted on only if its generation is current.
    SearchDebounced(u64),
    LoadMorePressed,
    VideosFetched {
        generation: u64,
        /// Whether the fetch carried a search term (empty results then
        /// hide the load-more control for good).
        search_driven: bool,
        result: Result<Vec<VideoRecord>, Error>,
    },
    ThumbnailFetched {
        id: u64,
        result: Result<Vec<u8>, Error>,
    },
    UpdateChecked(Result<UpdateStatus, Error>),
    AutostartRegistered(Result<(), Error>),
    AutostartErrorDismissed,
    ErrorDismissed,
    /// Spinner animation tick; only subscribed while loading.
    Tick(Instant),
}

pub struct App {
    client: reqwest::Client,
    videos: Vec<VideoRecord>,
    thumbnails: HashMap<u64, Handle>,
    /// Live contents of the search entry.
    search_input: String,
    /// Term the current display was fetched with.
    search: String,
    debouncer: Debouncer,
    load: LoadState,
    current_page: u32,
    generation: u64,
    more_visible: bool,
    /// Sensitivity of the load-more control. Cleared when a pagination
    /// fetch starts and restored only by a non-empty completion, so an
    /// exhausted listing leaves the control inert.
    more_sensitive: bool,
    footer_visible: bool,
    /// The header stays hidden until the first fetch completes.
    header_ready: bool,
    filters: FiltersState,
    update_status: Option<UpdateStatus>,
    last_error: Option<String>,
    spinner_rotation: f32,
}

impl Default for App {
    fn default() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("deckrepo/", env!("CARGO_PKG_VERSION")))
            .build()
            // Builder failure means the TLS backend could not initialize;
            // the stock client shares that fate, so this fallback only
            // matters for non-TLS test setups.
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            videos: Vec::new(),
            thumbnails: HashMap::new(),
            search_input: String::new(),
            search: String::new(),
            debouncer: Debouncer::new(SEARCH_DEBOUNCE),
            load: LoadState::Idle,
            // Overwritten by the reset in the first fresh load; kept at 1
            // so a page number is never reused if that reset moves.
            current_page: 1,
            generation: 0,
            more_visible: false,
            more_sensitive: true,
            footer_visible: false,
            header_ready: false,
            filters: FiltersState::default(),
            update_status: None,
            last_error: None,
            spinner_rotation: 0.0,
        }
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(900.0, 560.0)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run() -> iced::Result {
    iced::application(|state: &App| state.title(), App::update, App::view)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run_with(App::new)
}

impl App {
    /// Initial state plus the startup tasks: the first library page, the
    /// update check, and the one-shot background-autostart request (issued
    /// once the window is already up; its outcome never blocks the rest).
    fn new() -> (Self, Task<Message>) {
        let mut app = App::default();
        let fetch = app.request_fresh_load();
        let update_check = Task::perform(
            update_check::check_latest(app.client.clone()),
            Message::UpdateChecked,
        );
        let autostart = Task::perform(autostart::register(), Message::AutostartRegistered);

        (app, Task::batch([fetch, update_check, autostart]))
    }

    fn title(&self) -> String {
        String::from("Steam Deck Repo Manager")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.load == LoadState::Idle {
            Subscription::none()
        } else {
            time::every(SPINNER_TICK).map(Message::Tick)
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(message) => match header::update(message) {
                header::Event::SearchChanged(value) => {
                    self.search_input = value;
                    Task::perform(self.debouncer.schedule(), Message::SearchDebounced)
                }
                header::Event::ToggleFilters => {
                    self.filters.toggle_expanded();
                    Task::none()
                }
            },
            Message::Filters(message) => {
                let duration_filters::Event::SelectionChanged =
                    duration_filters::update(&mut self.filters, message);
                Task::none()
            }
            Message::SearchDebounced(generation) => {
                if !self.debouncer.is_current(generation) {
                    return Task::none();
                }
                self.request_fresh_load()
            }
            Message::LoadMorePressed => self.request_next_page(),
            Message::VideosFetched {
                generation,
                search_driven,
                result,
            } => self.apply_fetch_result(generation, search_driven, result),
            Message::ThumbnailFetched { id, result } => {
                match result {
                    Ok(bytes) => {
                        self.thumbnails.insert(id, Handle::from_bytes(bytes));
                    }
                    Err(err) => {
                        // The card keeps its placeholder.
                        tracing::warn!(id, %err, "thumbnail fetch failed");
                    }
                }
                Task::none()
            }
            Message::UpdateChecked(result) => {
                match result {
                    Ok(status) => self.update_status = Some(status),
                    Err(err) => tracing::warn!(%err, "update check failed"),
                }
                Task::none()
            }
            Message::AutostartRegistered(result) => match result {
                Ok(()) => Task::none(),
                Err(err) => {
                    tracing::warn!(%err, "background autostart registration failed");
                    Task::perform(
                        async {
                            rfd::AsyncMessageDialog::new()
                                .set_level(rfd::MessageLevel::Error)
                                .set_title("Steam Deck Repo Manager")
                                .set_description(
                                    "Could not register the app to run in the background.",
                                )
                                .set_buttons(rfd::MessageButtons::Ok)
                                .show()
                                .await
                        },
                        |_| Message::AutostartErrorDismissed,
                    )
                }
            },
            Message::AutostartErrorDismissed => Task::none(),
            Message::ErrorDismissed => {
                self.last_error = None;
                Task::none()
            }
            Message::Tick(_) => {
                self.spinner_rotation = (self.spinner_rotation + SPINNER_STEP) % TAU;
                Task::none()
            }
        }
    }

    /// Fresh, non-paginated load: clears the display, resets the page to
    /// zero, and fetches under a new generation. Used at startup and for
    /// every debounced search.
    fn request_fresh_load(&mut self) -> Task<Message> {
        self.videos.clear();
        self.thumbnails.clear();
        self.more_visible = false;
        self.footer_visible = false;
        self.last_error = None;
        self.current_page = 0;
        self.search = self.search_input.clone();
        self.load = LoadState::LoadingInitial;
        self.spawn_fetch()
    }

    /// Load-more: keeps the display, bumps the page by one. Ignored while
    /// a load is in flight or the control is inert after an exhausted
    /// listing.
    fn request_next_page(&mut self) -> Task<Message> {
        if self.load != LoadState::Idle || !self.more_sensitive {
            return Task::none();
        }
        self.current_page += 1;
        self.load = LoadState::LoadingPaginate;
        self.more_sensitive = false;
        self.spawn_fetch()
    }

    fn spawn_fetch(&mut self) -> Task<Message> {
        self.generation += 1;
        let generation = self.generation;
        let search_driven = !self.search.is_empty();
        let client = self.client.clone();
        let (page, search) = (self.current_page, self.search.clone());

        Task::perform(api::get_videos(client, page, search), move |result| {
            Message::VideosFetched {
                generation,
                search_driven,
                result,
            }
        })
    }

    fn apply_fetch_result(
        &mut self,
        generation: u64,
        search_driven: bool,
        result: Result<Vec<VideoRecord>, Error>,
    ) -> Task<Message> {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "discarding stale fetch");
            return Task::none();
        }

        self.load = LoadState::Idle;
        self.footer_visible = true;
        self.header_ready = true;

        match result {
            Ok(videos) => {
                if !videos.is_empty() {
                    self.more_visible = true;
                    self.more_sensitive = true;
                } else if search_driven {
                    // No matches left for this term; the listing is
                    // treated as exhausted.
                    self.more_visible = false;
                }
                // An empty non-search page leaves the control untouched:
                // still visible, still insensitive, still "Loading ...".

                let thumbnails: Vec<Task<Message>> = videos
                    .iter()
                    .map(|video| {
                        let client = self.client.clone();
                        let (id, url) = (video.id, video.thumbnail.clone());
                        Task::perform(api::get_thumbnail(client, url), move |result| {
                            Message::ThumbnailFetched { id, result }
                        })
                    })
                    .collect();

                self.videos.extend(videos);
                Task::batch(thumbnails)
            }
            Err(err) => {
                tracing::error!(%err, page = self.current_page, "library fetch failed");
                self.last_error = Some(err.to_string());
                // Re-arm the control so the failed page can be retried.
                self.more_sensitive = true;
                Task::none()
            }
        }
    }

    /// Records that pass the active duration filter, in fetch order.
    pub fn visible_videos(&self) -> Vec<&VideoRecord> {
        self.videos
            .iter()
            .filter(|video| self.filters.selected.matches(video.duration_secs))
            .collect()
    }

    /// Label of the load-more control; moves in lockstep with its
    /// sensitivity.
    pub fn more_label(&self) -> &'static str {
        if self.more_sensitive {
            "Load more"
        } else {
            "Loading ..."
        }
    }

    /// Whether the load-more control reacts to presses.
    pub fn more_sensitive(&self) -> bool {
        self.more_sensitive
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut content = Column::new()
            .spacing(theme::GLOBAL_SPACING)
            .padding(theme::GLOBAL_SPACING)
            .width(Length::Fill);

        if self.header_ready {
            content = content.push(
                header::view(header::ViewContext {
                    search_input: &self.search_input,
                    filters_expanded: self.filters.expanded,
                })
                .map(Message::Header),
            );
        }

        if self.filters.expanded {
            content = content.push(duration_filters::view(&self.filters).map(Message::Filters));
        }

        if let Some(status) = self.update_status.as_ref().filter(|status| status.should_update) {
            content = content.push(update_banner::view(status));
        }

        if let Some(error) = &self.last_error {
            content = content.push(self.error_banner(error));
        }

        let visible = self.visible_videos();
        for batch in library_row::batches(&visible) {
            content = content.push(library_row::view(batch, &self.thumbnails));
        }

        if self.load == LoadState::LoadingInitial {
            content = content.push(
                Container::new(Spinner::new(self.spinner_rotation).into_element())
                    .center_x(Length::Fill),
            );
        }

        if self.more_visible {
            let more: Element<'_, Message> = if self.more_sensitive() {
                button(text(self.more_label()))
                    .on_press(Message::LoadMorePressed)
                    .padding(spacing::SM)
                    .into()
            } else {
                button(text(self.more_label()))
                    .padding(spacing::SM)
                    .style(theme::insensitive_button)
                    .into()
            };
            content = content.push(Container::new(more).center_x(Length::Fill));
        }

        if self.footer_visible {
            content = content.push(footer());
        }

        Scrollable::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn error_banner<'a>(&self, error: &'a str) -> Element<'a, Message> {
        let line = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(text(error).color(palette::ERROR).width(Length::Fill))
            .push(
                button(text("Dismiss"))
                    .on_press(Message::ErrorDismissed)
                    .padding([spacing::XS, spacing::SM]),
            );

        Container::new(line)
            .padding(spacing::SM)
            .width(Length::Fill)
            .style(theme::panel(palette::ERROR))
            .into()
    }

    // Read-only accessors, also used by the integration tests.

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn fetch_generation(&self) -> u64 {
        self.generation
    }

    pub fn debounce_generation(&self) -> u64 {
        self.debouncer.generation()
    }

    pub fn videos(&self) -> &[VideoRecord] {
        &self.videos
    }

    pub fn more_visible(&self) -> bool {
        self.more_visible
    }

    pub fn footer_visible(&self) -> bool {
        self.footer_visible
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

/// Credits line with the running version, shown once the first fetch is in.
fn footer<'a>() -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .push(
            text("Made with \u{2665} by Captain J. Sparrow on top of Steam Deck Repo.")
                .size(13)
                .color(palette::MUTED),
        )
        .push(
            text(format!("Version {}", CURRENT_VERSION))
                .size(13)
                .color(palette::ACCENT),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::library_row::ROW_COUNT;

    fn record(id: u64, duration_secs: Option<u32>) -> VideoRecord {
        VideoRecord {
            id,
            title: format!("Video {}", id),
            author: String::new(),
            thumbnail: format!("https://cdn.example/{}.jpg", id),
            video: format!("https://cdn.example/{}.webm", id),
            likes: 0,
            duration_secs,
            created_at: None,
        }
    }

    fn records(n: u64) -> Vec<VideoRecord> {
        (0..n).map(|id| record(id, Some(30))).collect()
    }

    /// Shorthand: drive a fresh load and complete it with `result`.
    fn complete_fresh_load(app: &mut App, result: Result<Vec<VideoRecord>, Error>) {
        let _ = app.request_fresh_load();
        let search_driven = !app.search.is_empty();
        let _ = app.update(Message::VideosFetched {
            generation: app.fetch_generation(),
            search_driven,
            result,
        });
    }

    #[test]
    fn fresh_load_resets_page_and_clears_rows() {
        let mut app = App::default();
        complete_fresh_load(&mut app, Ok(records(7)));
        assert_eq!(app.videos().len(), 7);

        let _ = app.request_fresh_load();
        assert_eq!(app.current_page(), 0);
        assert!(app.videos().is_empty());
        assert!(!app.more_visible());
        assert!(!app.footer_visible());
        assert_eq!(app.load_state(), LoadState::LoadingInitial);
    }

    #[test]
    fn load_more_increments_page_by_one() {
        let mut app = App::default();
        complete_fresh_load(&mut app, Ok(records(3)));
        assert_eq!(app.current_page(), 0);

        for expected in 1..=4 {
            let _ = app.update(Message::LoadMorePressed);
            assert_eq!(app.current_page(), expected);
            assert_eq!(app.load_state(), LoadState::LoadingPaginate);

            let _ = app.update(Message::VideosFetched {
                generation: app.fetch_generation(),
                search_driven: false,
                result: Ok(records(3)),
            });
            assert_eq!(app.load_state(), LoadState::Idle);
        }
    }

    #[test]
    fn load_more_is_ignored_while_loading() {
        let mut app = App::default();
        complete_fresh_load(&mut app, Ok(records(3)));

        let _ = app.update(Message::LoadMorePressed);
        assert_eq!(app.current_page(), 1);

        // Pressing again while the fetch is in flight does nothing.
        let _ = app.update(Message::LoadMorePressed);
        assert_eq!(app.current_page(), 1);
    }

    #[test]
    fn pagination_appends_instead_of_replacing() {
        let mut app = App::default();
        complete_fresh_load(&mut app, Ok(records(3)));

        let _ = app.update(Message::LoadMorePressed);
        let _ = app.update(Message::VideosFetched {
            generation: app.fetch_generation(),
            search_driven: false,
            result: Ok(records(2)),
        });

        assert_eq!(app.videos().len(), 5);
    }

    #[test]
    fn empty_search_result_hides_load_more() {
        let mut app = App::default();
        complete_fresh_load(&mut app, Ok(records(3)));
        assert!(app.more_visible());

        app.search_input = "no such video".into();
        let _ = app.request_fresh_load();
        let _ = app.update(Message::VideosFetched {
            generation: app.fetch_generation(),
            search_driven: true,
            result: Ok(Vec::new()),
        });

        assert!(!app.more_visible());
        assert!(app.footer_visible());
    }

    #[test]
    fn empty_paginated_result_leaves_load_more_untouched() {
        let mut app = App::default();
        complete_fresh_load(&mut app, Ok(records(3)));
        assert!(app.more_visible());

        let _ = app.update(Message::LoadMorePressed);
        assert!(!app.more_sensitive());

        let _ = app.update(Message::VideosFetched {
            generation: app.fetch_generation(),
            search_driven: false,
            result: Ok(Vec::new()),
        });

        // The listing is exhausted; the fetch resolves but the control is
        // left exactly as the press put it.
        assert_eq!(app.load_state(), LoadState::Idle);
        assert!(app.more_visible());
        assert!(!app.more_sensitive());
        assert_eq!(app.more_label(), "Loading ...");

        // Further presses on the inert control do not start a fetch.
        let page = app.current_page();
        let generation = app.fetch_generation();
        let _ = app.update(Message::LoadMorePressed);
        assert_eq!(app.current_page(), page);
        assert_eq!(app.fetch_generation(), generation);
    }

    #[test]
    fn failed_pagination_rearms_load_more() {
        let mut app = App::default();
        complete_fresh_load(&mut app, Ok(records(3)));

        let _ = app.update(Message::LoadMorePressed);
        let _ = app.update(Message::VideosFetched {
            generation: app.fetch_generation(),
            search_driven: false,
            result: Err(Error::Http("connection reset".into())),
        });

        // The failed page can be retried.
        assert!(app.more_sensitive());
        assert_eq!(app.more_label(), "Load more");
        assert!(app.last_error().is_some());
    }

    #[test]
    fn stale_fetch_results_are_discarded() {
        let mut app = App::default();
        let _ = app.request_fresh_load();
        let stale = app.fetch_generation();

        // A second fresh load supersedes the first before it completes.
        let _ = app.request_fresh_load();
        let _ = app.update(Message::VideosFetched {
            generation: stale,
            search_driven: false,
            result: Ok(records(3)),
        });

        assert!(app.videos().is_empty());
        assert_eq!(app.load_state(), LoadState::LoadingInitial);

        let _ = app.update(Message::VideosFetched {
            generation: app.fetch_generation(),
            search_driven: false,
            result: Ok(records(2)),
        });
        assert_eq!(app.videos().len(), 2);
        assert_eq!(app.load_state(), LoadState::Idle);
    }

    #[test]
    fn fetch_failure_restores_idle_with_error() {
        let mut app = App::default();
        complete_fresh_load(&mut app, Err(Error::Http("connection reset".into())));

        assert_eq!(app.load_state(), LoadState::Idle);
        assert!(app.last_error().expect("error set").contains("connection reset"));

        let _ = app.update(Message::ErrorDismissed);
        assert!(app.last_error().is_none());
    }

    #[test]
    fn stale_debounce_timer_does_not_fetch() {
        let mut app = App::default();
        complete_fresh_load(&mut app, Ok(records(3)));

        // Two keystrokes; only the second timer is current.
        let _ = app.update(Message::Header(header::Message::SearchChanged("p".into())));
        let _ = app.update(Message::Header(header::Message::SearchChanged("po".into())));

        let _ = app.update(Message::SearchDebounced(1));
        assert_eq!(app.load_state(), LoadState::Idle);

        let _ = app.update(Message::SearchDebounced(2));
        assert_eq!(app.load_state(), LoadState::LoadingInitial);
        assert_eq!(app.current_page(), 0);
        assert_eq!(app.search, "po");
    }

    #[test]
    fn duration_filter_narrows_visible_videos() {
        let mut app = App::default();
        complete_fresh_load(
            &mut app,
            Ok(vec![
                record(1, Some(30)),
                record(2, Some(120)),
                record(3, None),
            ]),
        );
        assert_eq!(app.visible_videos().len(), 3);

        let _ = app.update(Message::Filters(duration_filters::Message::RangeSelected(
            duration_filters::DurationRange::Short,
        )));
        let visible = app.visible_videos();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);

        // The underlying record list is untouched.
        assert_eq!(app.videos().len(), 3);
    }

    #[test]
    fn filter_toggle_flips_panel_expansion() {
        let mut app = App::default();
        assert!(!app.filters.expanded);

        let _ = app.update(Message::Header(header::Message::ToggleFilters));
        assert!(app.filters.expanded);

        let _ = app.update(Message::Header(header::Message::ToggleFilters));
        assert!(!app.filters.expanded);
    }

    #[test]
    fn thumbnail_bytes_are_stored_per_record() {
        let mut app = App::default();
        complete_fresh_load(&mut app, Ok(records(1)));

        let _ = app.update(Message::ThumbnailFetched {
            id: 0,
            result: Ok(vec![0xFF, 0xD8, 0xFF]),
        });
        assert!(app.thumbnails.contains_key(&0));

        let _ = app.update(Message::ThumbnailFetched {
            id: 99,
            result: Err(Error::Http("timeout".into())),
        });
        assert!(!app.thumbnails.contains_key(&99));
    }

    #[test]
    fn update_banner_only_appears_when_behind() {
        let mut app = App::default();
        assert!(app.update_status.is_none());

        let _ = app.update(Message::UpdateChecked(Ok(UpdateStatus {
            latest: "v0.0.1".into(),
            should_update: false,
        })));
        assert!(!app.update_status.as_ref().expect("status").should_update);

        let _ = app.update(Message::UpdateChecked(Err(Error::Http("offline".into()))));
        // A failed check keeps the last known status and never errors the UI.
        assert!(app.update_status.is_some());
        assert!(app.last_error().is_none());
    }

    #[test]
    fn subscription_only_ticks_while_loading() {
        let mut app = App::default();
        // Idle: no spinner ticks.
        let _ = app.subscription();
        assert_eq!(app.load_state(), LoadState::Idle);

        let _ = app.request_fresh_load();
        let rotation = app.spinner_rotation;
        let _ = app.update(Message::Tick(Instant::now()));
        assert!(app.spinner_rotation > rotation);
    }

    #[test]
    fn view_renders_in_every_load_state() {
        let mut app = App::default();
        let _ = app.view();

        let _ = app.request_fresh_load();
        let _ = app.view();

        let _ = app.update(Message::VideosFetched {
            generation: app.fetch_generation(),
            search_driven: false,
            result: Ok(records(7)),
        });
        let _ = app.view();

        let _ = app.update(Message::LoadMorePressed);
        let _ = app.view();
    }

    #[test]
    fn seven_records_render_three_row_batches() {
        let mut app = App::default();
        complete_fresh_load(&mut app, Ok(records(7)));

        let visible = app.visible_videos();
        let sizes: Vec<usize> = library_row::batches(&visible).map(<[_]>::len).collect();
        assert_eq!(sizes, vec![ROW_COUNT, ROW_COUNT, 1]);
    }
}
