pub mod emotion;
pub mod movie;
pub mod user;

pub use emotion::{ClassifierEmotion, GenreId, UiEmotion};
pub use movie::{MovieSummary, MovieVideo, TmdbMovie, TmdbPage, TmdbVideosResponse, VideoHit};
pub use user::{HistoryEntry, HistoryVersion, UserRecord};
