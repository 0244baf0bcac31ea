use iced::{Element, Task, Theme};
use iced::widget::{column, container, scrollable, text, text_input, Column};
use iced::{Alignment, Length};
use iced_aw::Wrap;

// Declare the application modules
mod kitsu;
mod state;

use kitsu::FetchError;
use state::data::Anime;
use state::session::{CatalogSession, LoadPhase};

/// Width of one catalog card in the grid
const CARD_WIDTH: f32 = 250.0;

/// How many characters of the synopsis fit on a card
const SYNOPSIS_PREVIEW_CHARS: usize = 180;

/// Main application state
struct AnimeCatalog {
    /// The catalog browsing session
    session: CatalogSession,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The one-shot catalog fetch finished
    CatalogLoaded(Result<Vec<Anime>, FetchError>),
    /// User typed in the search box
    QueryChanged(String),
}

impl AnimeCatalog {
    /// Create a new instance of the application and kick off the fetch
    fn new() -> (Self, Task<Message>) {
        let mut session = CatalogSession::new();
        session.begin_load();

        println!("🎬 Anime catalog starting, fetching from Kitsu...");

        (
            AnimeCatalog {
                session,
                status: String::from("Loading catalog..."),
            },
            Task::perform(kitsu::loader::load_catalog(), Message::CatalogLoaded),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(result) => {
                self.session.apply_load(result);

                match self.session.phase() {
                    LoadPhase::Loaded => {
                        self.status =
                            format!("Ready. {} anime in catalog.", self.session.full_len());
                        println!("✅ Catalog loaded with {} anime", self.session.full_len());
                    }
                    LoadPhase::Failed(error) => {
                        self.status = format!("Could not load the catalog: {}", error);
                        eprintln!("❌ Catalog load failed: {}", error);
                    }
                    _ => {}
                }

                Task::none()
            }
            Message::QueryChanged(query) => {
                self.session.set_query(query);

                if self.session.phase() == &LoadPhase::Loaded {
                    self.status = format!(
                        "Showing {} of {} anime.",
                        self.session.visible().len(),
                        self.session.full_len()
                    );
                }

                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let search = text_input("Search anime by name...", self.session.query())
            .on_input(Message::QueryChanged)
            .padding(10)
            .size(16);

        let content: Column<Message> = column![
            text("Anime Catalog").size(40),
            search,
            self.catalog_view(),
            text(&self.status).size(14),
        ]
        .spacing(20)
        .padding(30)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// The catalog area: loading hint, card grid, or empty state
    fn catalog_view(&self) -> Element<Message> {
        match self.session.phase() {
            // The fetch is still in flight
            LoadPhase::Idle | LoadPhase::Loading => text("Loading catalog...").size(16).into(),
            // Loaded or Failed: show the cards, or an explicit empty state
            _ => {
                if self.session.visible().is_empty() {
                    return text("No anime found").size(16).into();
                }

                let cards: Vec<Element<Message>> =
                    self.session.visible().iter().map(anime_card).collect();

                scrollable(Wrap::with_elements(cards).spacing(15.0).line_spacing(15.0))
                    .height(Length::Fill)
                    .into()
            }
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// One catalog card: title plus a short synopsis preview
fn anime_card(anime: &Anime) -> Element<Message> {
    let card = column![
        text(&anime.name).size(20),
        text(synopsis_preview(&anime.synopsis)).size(13),
    ]
    .spacing(8)
    .width(Length::Fixed(CARD_WIDTH));

    container(card)
        .padding(12)
        .style(container::rounded_box)
        .into()
}

/// Cut the synopsis down to a card-sized preview.
/// The cut is on a character boundary so multi-byte text stays intact.
fn synopsis_preview(synopsis: &str) -> String {
    if synopsis.chars().count() <= SYNOPSIS_PREVIEW_CHARS {
        return synopsis.to_string();
    }

    let cut: String = synopsis.chars().take(SYNOPSIS_PREVIEW_CHARS).collect();
    format!("{}...", cut.trim_end())
}

fn main() -> iced::Result {
    iced::application(
        "Anime Catalog",
        AnimeCatalog::update,
        AnimeCatalog::view,
    )
    .theme(AnimeCatalog::theme)
    .centered()
    .run_with(AnimeCatalog::new)
}
