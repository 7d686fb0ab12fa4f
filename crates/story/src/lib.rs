mod alert_dialog_story;
mod button_story;
mod color_wheel_story;
mod divider_story;
mod tabs_story;

pub use alert_dialog_story::AlertDialogStory;
pub use button_story::ButtonStory;
pub use color_wheel_story::ColorWheelStory;
pub use divider_story::DividerStory;
pub use tabs_story::TabsStory;

use gpui::{
    AnyView, App, AppContext as _, Context, Div, Entity, FocusHandle, InteractiveElement as _,
    IntoElement, ParentElement as _, Render, SharedString,
    StatefulInteractiveElement as _, Styled as _, Window, actions, div,
};
use gpui_atoms::{ActiveTheme as _, Divider, h_flex, v_flex};
use gpui_atoms::tab::{Tab, TabBar};

actions!(story, [Quit]);

/// Initialize logging, the components and the application key bindings.
pub fn init(cx: &mut App) {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    gpui_atoms::init(cx);

    #[cfg(target_os = "macos")]
    cx.bind_keys([gpui::KeyBinding::new("cmd-q", Quit, None)]);
    #[cfg(not(target_os = "macos"))]
    cx.bind_keys([gpui::KeyBinding::new("ctrl-q", Quit, None)]);
    cx.on_action(|_: &Quit, cx| cx.quit());

    tracing::info!("story gallery initialized");
}

/// A titled frame around one example.
pub fn section(title: impl Into<SharedString>, cx: &App) -> Div {
    v_flex()
        .gap_3()
        .p_4()
        .border_1()
        .border_color(cx.theme().border)
        .rounded(cx.theme().radius_lg)
        .child(
            div()
                .text_sm()
                .font_semibold()
                .text_color(cx.theme().muted_foreground)
                .child(title.into()),
        )
}

/// One registered component story.
pub trait Story {
    fn title() -> &'static str;
    fn description() -> &'static str;
    fn new_view(window: &mut Window, cx: &mut App) -> AnyView;
}

struct StoryEntry {
    title: &'static str,
    description: &'static str,
    view: AnyView,
}

fn entry<S: Story>(window: &mut Window, cx: &mut App) -> StoryEntry {
    StoryEntry {
        title: S::title(),
        description: S::description(),
        view: S::new_view(window, cx),
    }
}

/// The gallery window: the story list in a tab strip, one story shown at
/// a time.
pub struct Gallery {
    focus_handle: FocusHandle,
    active_ix: usize,
    stories: Vec<StoryEntry>,
}

impl Gallery {
    pub fn view(window: &mut Window, cx: &mut App) -> Entity<Self> {
        cx.new(|cx| Self::new(window, cx))
    }

    fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let stories = vec![
            entry::<ButtonStory>(window, cx),
            entry::<DividerStory>(window, cx),
            entry::<TabsStory>(window, cx),
            entry::<AlertDialogStory>(window, cx),
            entry::<ColorWheelStory>(window, cx),
        ];

        Self {
            focus_handle: cx.focus_handle(),
            active_ix: 0,
            stories,
        }
    }

    fn set_active(&mut self, ix: usize, cx: &mut Context<Self>) {
        self.active_ix = ix.min(self.stories.len().saturating_sub(1));
        cx.notify();
    }
}

impl Render for Gallery {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active = &self.stories[self.active_ix];

        v_flex()
            .size_full()
            .child(
                v_flex()
                    .px_4()
                    .pt_3()
                    .gap_1()
                    .child(div().font_semibold().child(active.title))
                    .child(
                        div()
                            .text_sm()
                            .text_color(cx.theme().muted_foreground)
                            .child(active.description),
                    )
                    .child(Divider::horizontal()),
            )
            .child(
                h_flex().px_4().child(
                    TabBar::new("gallery-tabs")
                        .track_focus(&self.focus_handle)
                        .selected_index(self.active_ix)
                        .on_click(cx.listener(|this, ix: &usize, _, cx| {
                            this.set_active(*ix, cx);
                        }))
                        .children(
                            self.stories
                                .iter()
                                .enumerate()
                                .map(|(ix, story)| Tab::new(ix, story.title)),
                        ),
                ),
            )
            .child(
                div()
                    .id("story")
                    .flex_1()
                    .p_4()
                    .overflow_y_scroll()
                    .child(active.view.clone()),
            )
    }
}
