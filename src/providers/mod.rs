pub mod awards_provider;
pub mod detail_provider;
pub mod util;
