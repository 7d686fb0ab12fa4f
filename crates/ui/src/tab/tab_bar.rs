use std::sync::Arc;

use crate::{ActiveTheme, StyledExt, h_flex};
use gpui::{
    App, ElementId, FocusHandle, InteractiveElement, IntoElement, MouseButton, ParentElement,
    RenderOnce, StyleRefinement, Styled, Window, div, prelude::FluentBuilder as _, px,
};
use smallvec::SmallVec;

use super::{SelectFirst, SelectLast, SelectNext, SelectPrev, Tab};

/// The keyboard navigation intents of a tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TabNav {
    Prev,
    Next,
    First,
    Last,
}

/// Resolve a navigation intent into the next selected index.
///
/// Prev/Next wrap around at both ends, First/Last jump to the boundary.
pub(crate) fn resolve_tab_nav(nav: TabNav, current: usize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }

    let current = current.min(count - 1);
    Some(match nav {
        TabNav::Prev => (current + count - 1) % count,
        TabNav::Next => (current + 1) % count,
        TabNav::First => 0,
        TabNav::Last => count - 1,
    })
}

/// A tabbed navigation strip.
///
/// The bar draws a full width baseline rule; the selected [`Tab`] draws
/// its underline indicator on top of it. With a tracked focus handle the
/// strip supports keyboard navigation: Left/Up and Right/Down move the
/// selection with wrap-around, Home and End jump to the first and last
/// tab.
#[derive(IntoElement)]
pub struct TabBar {
    id: ElementId,
    style: StyleRefinement,
    children: SmallVec<[Tab; 2]>,
    selected_index: usize,
    focus_handle: Option<FocusHandle>,
    on_click: Option<Arc<dyn Fn(&usize, &mut Window, &mut App) + 'static>>,
}

impl TabBar {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            style: StyleRefinement::default(),
            children: SmallVec::new(),
            selected_index: 0,
            focus_handle: None,
            on_click: None,
        }
    }

    pub fn child(mut self, child: Tab) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Tab>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn selected_index(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    /// Track a focus handle to enable keyboard navigation of the strip.
    pub fn track_focus(mut self, focus_handle: &FocusHandle) -> Self {
        self.focus_handle = Some(focus_handle.clone());
        self
    }

    /// Set the callback for selection changes, the first parameter is the
    /// index of the selected tab.
    pub fn on_click(mut self, on_click: impl Fn(&usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Arc::new(on_click));
        self
    }

    fn select(
        on_click: &Option<Arc<dyn Fn(&usize, &mut Window, &mut App) + 'static>>,
        nav: TabNav,
        current: usize,
        count: usize,
        window: &mut Window,
        cx: &mut App,
    ) {
        let Some(on_click) = on_click else {
            return;
        };
        if let Some(ix) = resolve_tab_nav(nav, current, count) {
            on_click(&ix, window, cx);
        }
    }
}

impl Styled for TabBar {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for TabBar {
    fn render(self, _: &mut Window, cx: &mut App) -> impl IntoElement {
        let count = self.children.len();
        let selected = self.selected_index.min(count.saturating_sub(1));
        let on_click = self.on_click.clone();
        let focus_handle = self.focus_handle.clone();

        h_flex()
            .id(self.id)
            .key_context(super::CONTEXT)
            .relative()
            .flex_none()
            .gap_6()
            .bg(cx.theme().tab_bar)
            .text_color(cx.theme().tab_foreground)
            .child(
                div()
                    .absolute()
                    .bottom_0()
                    .left_0()
                    .right_0()
                    .h(px(1.))
                    .bg(cx.theme().border),
            )
            .when_some(focus_handle, |this, focus_handle| {
                let handle = focus_handle.clone();
                this.track_focus(&focus_handle).on_mouse_down(
                    MouseButton::Left,
                    move |_, window, _| {
                        window.focus(&handle);
                    },
                )
            })
            .on_action({
                let on_click = on_click.clone();
                move |_: &SelectPrev, window, cx| {
                    Self::select(&on_click, TabNav::Prev, selected, count, window, cx)
                }
            })
            .on_action({
                let on_click = on_click.clone();
                move |_: &SelectNext, window, cx| {
                    Self::select(&on_click, TabNav::Next, selected, count, window, cx)
                }
            })
            .on_action({
                let on_click = on_click.clone();
                move |_: &SelectFirst, window, cx| {
                    Self::select(&on_click, TabNav::First, selected, count, window, cx)
                }
            })
            .on_action({
                let on_click = on_click.clone();
                move |_: &SelectLast, window, cx| {
                    Self::select(&on_click, TabNav::Last, selected, count, window, cx)
                }
            })
            .children(self.children.into_iter().enumerate().map(|(ix, tab)| {
                use crate::Selectable as _;

                tab.selected(ix == selected)
                    .when_some(on_click.clone(), |this, on_click| {
                        this.on_click(move |_, window, cx| on_click(&ix, window, cx))
                    })
            }))
            .refine_style(&self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::{TabNav, resolve_tab_nav};

    #[test]
    fn prev_next_wrap_around_at_both_ends() {
        assert_eq!(resolve_tab_nav(TabNav::Next, 0, 3), Some(1));
        assert_eq!(resolve_tab_nav(TabNav::Next, 2, 3), Some(0));
        assert_eq!(resolve_tab_nav(TabNav::Prev, 1, 3), Some(0));
        assert_eq!(resolve_tab_nav(TabNav::Prev, 0, 3), Some(2));
    }

    #[test]
    fn first_last_jump_to_the_boundaries() {
        assert_eq!(resolve_tab_nav(TabNav::First, 2, 5), Some(0));
        assert_eq!(resolve_tab_nav(TabNav::Last, 2, 5), Some(4));
    }

    #[test]
    fn out_of_range_current_is_clamped_before_navigating() {
        assert_eq!(resolve_tab_nav(TabNav::Next, 9, 3), Some(0));
        assert_eq!(resolve_tab_nav(TabNav::Prev, 9, 3), Some(1));
    }

    #[test]
    fn empty_strip_has_no_navigation() {
        assert_eq!(resolve_tab_nav(TabNav::Next, 0, 0), None);
        assert_eq!(resolve_tab_nav(TabNav::Last, 0, 0), None);
    }
}
