pub mod hierarchy;
pub mod popularity;
pub mod ranking;
pub mod recommendations;
pub mod similarity;

pub use hierarchy::GenreHierarchy;
pub use popularity::GenrePopularityIndex;
pub use recommendations::recommend_genres;
pub use similarity::VectorSpace;
