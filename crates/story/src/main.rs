use gpui::{Application, Bounds, WindowBounds, WindowOptions, px, size};
use gpui_atoms::Root;
use gpui_atoms_assets::Assets;
use gpui_atoms_story::Gallery;

fn main() {
    let app = Application::new().with_assets(Assets);

    app.run(move |cx| {
        gpui_atoms_story::init(cx);
        cx.activate(true);

        let bounds = Bounds::centered(None, size(px(1024.), px(768.)), cx);
        cx.spawn(async move |cx| {
            cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    ..Default::default()
                },
                |window, cx| {
                    let view = Gallery::view(window, cx);
                    // The first view in the window must be a Root.
                    cx.new(|cx| Root::new(view, window, cx))
                },
            )?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });
}
