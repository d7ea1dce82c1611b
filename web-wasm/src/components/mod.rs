pub mod export_buttons;
pub mod header;
pub mod list_modal;
pub mod progress_bar;
pub mod upload_area;
pub mod username_modal;
pub mod viewer;
