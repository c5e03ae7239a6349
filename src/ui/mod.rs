//! UI-Komponenten: Menü, Toolbar, Edit-Panel, Status-Bar, Rad-Viewport, Dialoge.

pub mod dialogs;
pub mod edit_panel;
pub mod keyboard;
pub mod menu;
pub mod options_dialog;
pub mod status;
pub mod toolbar;
pub mod wheel_view;

pub use dialogs::{show_clear_confirm_dialog, show_load_dialog, show_save_dialog};
pub use edit_panel::render_edit_panel;
pub use keyboard::collect_keyboard_intents;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
pub use wheel_view::render_wheel_view;
