use gpui::{
    App, AppContext as _, AnyView, Context, FocusHandle, IntoElement, ParentElement as _, Render,
    Styled as _, Window, div,
};
use gpui_atoms::{
    ActiveTheme as _, IconName,
    tab::{Tab, TabBar},
    v_flex,
};

use crate::section;

pub struct TabsStory {
    focus_handle: FocusHandle,
    active_ix: usize,
}

impl super::Story for TabsStory {
    fn title() -> &'static str {
        "Tabs"
    }

    fn description() -> &'static str {
        "A tabbed navigation strip with an underline indicator and keyboard navigation."
    }

    fn new_view(_: &mut Window, cx: &mut App) -> AnyView {
        cx.new(|cx| Self {
            focus_handle: cx.focus_handle(),
            active_ix: 0,
        })
        .into()
    }
}

impl TabsStory {
    fn set_active(&mut self, ix: usize, cx: &mut Context<Self>) {
        self.active_ix = ix;
        cx.notify();
    }

    fn panel_text(&self) -> &'static str {
        match self.active_ix {
            0 => "General settings live here.",
            1 => "Pick your colors and themes here.",
            2 => "Everything else ends up here.",
            _ => "",
        }
    }
}

impl Render for TabsStory {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex().gap_4().child(
            section("Tabs", cx)
                .child(
                    TabBar::new("tabs")
                        .track_focus(&self.focus_handle)
                        .selected_index(self.active_ix)
                        .on_click(cx.listener(|this, ix: &usize, _, cx| {
                            this.set_active(*ix, cx);
                        }))
                        .child(Tab::new("general", "General").icon(IconName::Settings))
                        .child(Tab::new("appearance", "Appearance").icon(IconName::Palette))
                        .child(Tab::new("other", "Other")),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(cx.theme().muted_foreground)
                        .child(self.panel_text()),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(cx.theme().muted_foreground)
                        .child("Click the strip, then use Left/Right, Home and End."),
                ),
        )
    }
}
