//! # Application State Types
//!
//! All state-related types for the application: the screen enum, the view
//! records built from API responses, and [`AppState`] itself.

use crate::core::error::AppError;
use chrono::{DateTime, Local};

/// Number of entries in the main menu picker
pub const MENU_OPTIONS: [&str; 2] = ["Trending", "Search"];

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Main menu with the Trending/Search picker
    #[default]
    Menu,
    /// Table of trending coins
    Trending,
    /// Search query input
    Search,
    /// Coins returned by the last search
    ResultsList,
    /// Detail of one coin picked from the results
    CoinDetail,
}

impl Screen {
    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Menu => "Menu",
            Screen::Trending => "Trending Coins",
            Screen::Search => "Search",
            Screen::ResultsList => "Search Results",
            Screen::CoinDetail => "Coin Detail",
        }
    }
}

/// Which fetch a completion event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Trending,
    Search,
    CoinDetail,
}

impl FetchKind {
    /// Screen that issues this fetch and receives its transition
    pub fn origin(&self) -> Screen {
        match self {
            FetchKind::Trending => Screen::Trending,
            FetchKind::Search => Screen::Search,
            FetchKind::CoinDetail => Screen::ResultsList,
        }
    }
}

/// One row of the trending table
#[derive(Debug, Clone, PartialEq)]
pub struct TrendingRow {
    /// Market cap rank, `None` when the API has no ranking
    pub rank: Option<u32>,
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price_btc: f64,
    pub change_24h_percent: f64,
}

/// Search result entry
#[derive(Debug, Clone, PartialEq)]
pub struct CoinSummary {
    /// API id, used to fetch [`CoinDetail`]
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub thumbnail_url: String,
}

/// Coin detail shown on [`Screen::CoinDetail`]
#[derive(Debug, Clone, PartialEq)]
pub struct CoinDetail {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub current_price_usd: f64,
    pub sentiment_up_percent: f64,
    pub sentiment_down_percent: f64,
    /// Empty when the project publishes no whitepaper
    pub whitepaper_url: String,
}

/// Entry of a selectable list
pub trait ListItem {
    /// Primary line
    fn title(&self) -> String;
    /// Secondary, dimmed line
    fn subtitle(&self) -> String;
    /// Text matched when filtering the list
    fn filter_key(&self) -> String {
        self.title()
    }
}

impl ListItem for CoinSummary {
    fn title(&self) -> String {
        format!("{} ({})", self.name, self.symbol.to_uppercase())
    }

    fn subtitle(&self) -> String {
        self.id.clone()
    }
}

/// Complete view state.
///
/// Owned by the event loop and only mutated through [`crate::app::App`].
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Active screen
    pub screen: Screen,
    /// Highlighted menu entry, always `0` or `1`
    pub menu_selection: usize,
    /// Search input buffer
    pub search_query: String,
    /// Rows from the last successful trending fetch
    pub trending_rows: Vec<TrendingRow>,
    /// Highlighted trending row
    pub trending_cursor: usize,
    /// When `trending_rows` was last replaced
    pub trending_updated_at: Option<DateTime<Local>>,
    /// Results of the last successful search
    pub search_results: Vec<CoinSummary>,
    /// Highlighted search result
    pub results_cursor: usize,
    /// Only `Some` while `screen == CoinDetail`
    pub selected_coin: Option<CoinDetail>,
    /// Last fetch failure; kept until another fetch succeeds
    pub last_error: Option<AppError>,
    /// Full help instead of the short hint line
    pub help_expanded: bool,
    /// Most recently issued fetch that has not completed yet
    pub pending: Option<FetchKind>,
}

impl AppState {
    /// Fresh state: menu screen, nothing fetched
    pub fn new() -> Self {
        Self::default()
    }

    /// Search result under the cursor
    pub fn highlighted_result(&self) -> Option<&CoinSummary> {
        self.search_results.get(self.results_cursor)
    }

    /// Whether a fetch of `kind` is outstanding
    pub fn is_loading(&self, kind: FetchKind) -> bool {
        self.pending == Some(kind)
    }
}
