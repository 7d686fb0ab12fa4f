use gpui::{
    AnyElement, App, Bounds, Element, ElementId, FocusHandle, Global, GlobalElementId,
    InteractiveElement as _, IntoElement, LayoutId, ParentElement as _, Pixels, WeakFocusHandle,
    Window, div,
};
use std::collections::HashMap;

/// Registry of the mounted focus trap containers.
///
/// A trap is alive as long as its focus handle is alive; dropped handles
/// are pruned on every registration.
#[derive(Default)]
pub(crate) struct FocusTrapRegistry {
    traps: HashMap<GlobalElementId, WeakFocusHandle>,
}

impl Global for FocusTrapRegistry {}

impl FocusTrapRegistry {
    fn register(id: &GlobalElementId, handle: WeakFocusHandle, cx: &mut App) {
        let this = cx.global_mut::<FocusTrapRegistry>();
        this.traps.insert(id.clone(), handle);
        this.traps.retain(|_, handle| handle.upgrade().is_some());
    }

    /// Returns the trap container that currently contains focus, if any.
    pub(crate) fn find_active_trap(window: &Window, cx: &App) -> Option<FocusHandle> {
        cx.global::<FocusTrapRegistry>()
            .traps
            .values()
            .filter_map(|handle| handle.upgrade())
            .find(|container| container.contains_focused(window, cx))
    }
}

pub(crate) fn init(cx: &mut App) {
    cx.set_global(FocusTrapRegistry::default());
}

/// Wraps an element and registers it as a focus trap container.
///
/// While a trap container holds focus, [`crate::Root`] keeps Tab and
/// Shift-Tab cycling inside it instead of escaping to the rest of the
/// window.
pub struct FocusTrapElement {
    id: ElementId,
    focus_handle: FocusHandle,
    child: Option<AnyElement>,
}

impl FocusTrapElement {
    pub fn new<E: IntoElement>(
        id: impl Into<ElementId>,
        focus_handle: FocusHandle,
        child: E,
    ) -> Self {
        Self {
            id: id.into(),
            focus_handle,
            child: Some(child.into_any_element()),
        }
    }
}

impl IntoElement for FocusTrapElement {
    type Element = Self;

    fn into_element(self) -> Self::Element {
        self
    }
}

impl Element for FocusTrapElement {
    type RequestLayoutState = AnyElement;
    type PrepaintState = ();

    fn id(&self) -> Option<ElementId> {
        Some(self.id.clone())
    }

    fn source_location(&self) -> Option<&'static std::panic::Location<'static>> {
        None
    }

    fn request_layout(
        &mut self,
        global_id: Option<&GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        window: &mut Window,
        cx: &mut App,
    ) -> (LayoutId, Self::RequestLayoutState) {
        if let Some(global_id) = global_id {
            FocusTrapRegistry::register(global_id, self.focus_handle.downgrade(), cx);
        }

        let mut el = div()
            .track_focus(&self.focus_handle)
            .children(self.child.take())
            .into_any_element();
        let layout_id = el.request_layout(window, cx);
        (layout_id, el)
    }

    fn prepaint(
        &mut self,
        _global_id: Option<&GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        _bounds: Bounds<Pixels>,
        child: &mut Self::RequestLayoutState,
        window: &mut Window,
        cx: &mut App,
    ) -> Self::PrepaintState {
        child.prepaint(window, cx);
    }

    fn paint(
        &mut self,
        _global_id: Option<&GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        _bounds: Bounds<Pixels>,
        child: &mut Self::RequestLayoutState,
        _prepaint: &mut Self::PrepaintState,
        window: &mut Window,
        cx: &mut App,
    ) {
        child.paint(window, cx);
    }
}
