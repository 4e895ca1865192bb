pub mod calendar_renderer;
pub mod data_loading;
pub mod header;
