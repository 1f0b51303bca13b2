mod contributor_repo;
mod playlist_repo;
mod score_repo;
mod session_repo;
mod user_repo;
mod video_repo;

pub use contributor_repo::ContributorRepo;
pub use playlist_repo::PlaylistRepo;
pub use score_repo::ScoreRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
pub use video_repo::VideoRepo;
