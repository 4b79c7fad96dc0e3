pub mod chart;
pub mod json;
pub mod text;

pub use json::JsonPresenter;
pub use text::TextPresenter;
