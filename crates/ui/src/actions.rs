use gpui::actions;

actions!(atoms, [Cancel, Confirm]);
