pub mod cache;
pub mod config;
pub mod engine;
pub mod significant;
pub mod title;

pub use cache::RecentTerritoryCache;
pub use config::TitleConfig;
pub use engine::{Localizer, TerritoryTitles, WorldView};
pub use title::{TitleFrame, TitlePayload};
