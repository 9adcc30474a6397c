pub mod menu_bar;
pub mod sidebar;
pub mod status;
pub mod text_dialog;
pub mod viewport;
