mod debug_overlay;
mod input;
mod player;
mod rings;

pub use debug_overlay::update_debug_overlay;
pub use input::toggle_debug_overlay;
pub use player::{
    grab_pointer_on_click, handle_window_focus, player_jump, player_look, player_movement,
    release_pointer_on_escape,
};
pub use rings::update_rings;
