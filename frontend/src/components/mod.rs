pub mod hero;
pub mod image_matches;
pub mod reformulate;
pub mod report_history;
pub mod scores;
pub mod summary;
pub mod text_matches;
pub mod toast;
pub mod upload_zone;
pub mod utils;
