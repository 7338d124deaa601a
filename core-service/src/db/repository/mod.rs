pub mod error;
pub mod episode;
pub mod guest;
pub mod appearance;

pub use error::RepositoryError;
pub use episode::{EpisodeRepository, DieselEpisodeRepository};
pub use guest::{GuestRepository, DieselGuestRepository};
pub use appearance::{AppearanceRepository, DieselAppearanceRepository};
