mod tab;
mod tab_bar;

pub use tab::*;
pub use tab_bar::*;

use gpui::{App, KeyBinding, actions};

actions!(tab_bar, [SelectPrev, SelectNext, SelectFirst, SelectLast]);

pub(crate) const CONTEXT: &str = "TabBar";

pub(crate) fn init(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("left", SelectPrev, Some(CONTEXT)),
        KeyBinding::new("up", SelectPrev, Some(CONTEXT)),
        KeyBinding::new("right", SelectNext, Some(CONTEXT)),
        KeyBinding::new("down", SelectNext, Some(CONTEXT)),
        KeyBinding::new("home", SelectFirst, Some(CONTEXT)),
        KeyBinding::new("end", SelectLast, Some(CONTEXT)),
    ]);
}
