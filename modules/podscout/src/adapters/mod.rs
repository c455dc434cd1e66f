pub mod apple;
pub mod feeds;
pub mod spotify;

pub use apple::AppleAdapter;
pub use feeds::FeedsAdapter;
pub use spotify::SpotifyAdapter;
