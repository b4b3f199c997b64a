use gpui::{
    AppContext as _, Application, Bounds, ClickEvent, Context, Entity, FontWeight,
    HighlightStyle, InteractiveElement as _, IntoElement, ParentElement as _, Render,
    SharedString, StatefulInteractiveElement as _, Styled as _, Window, WindowBounds,
    WindowOptions, div, px, size,
};
use gpui_progress_ring::{
    ActiveTheme as _, ProgressRing, ProgressRingState, Title, TitleRun, h_flex, v_flex,
};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

struct Example {
    loading: Entity<ProgressRingState>,
    download: Entity<ProgressRingState>,
}

impl Example {
    fn new(_: &mut Window, cx: &mut Context<Self>) -> Self {
        let muted = cx.theme().muted;
        let primary = cx.theme().primary;

        let loading = cx.new(|_| {
            ProgressRingState::new()
                .progress(0.5)
                .remainder_tint_color(muted)
                .title(Title::new().text("Loading\n").placeholder("%.0f").text("%"))
        });

        // Thicker track, bold value, and the text jumps to the target
        // instead of counting along with the arc.
        let download = cx.new(|_| {
            ProgressRingState::new()
                .progress(0.5)
                .track_width(px(12.))
                .animate_text(false)
                .title(
                    Title::new()
                        .run(TitleRun::placeholder("%.0f").styled(HighlightStyle {
                            color: Some(primary),
                            font_weight: Some(FontWeight::BOLD),
                            ..Default::default()
                        }))
                        .text("%"),
                )
        });

        Self { loading, download }
    }

    fn set_all(&mut self, value: f32, cx: &mut Context<Self>) {
        self.loading
            .update(cx, |state, cx| state.set_progress(value, true, cx));
        self.download
            .update(cx, |state, cx| state.set_progress(value, true, cx));
    }

    fn button(
        &self,
        label: impl Into<SharedString>,
        target: Option<f32>,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let label = label.into();

        div()
            .id(label.clone())
            .px_3()
            .py_1()
            .bg(cx.theme().secondary)
            .rounded(cx.theme().radius)
            .cursor_pointer()
            .child(label)
            .on_click(cx.listener(move |this, _: &ClickEvent, _, cx| {
                let value = target.unwrap_or_else(|| this.loading.read(cx).value() + 0.1);
                this.set_all(value, cx);
            }))
    }
}

impl Render for Example {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .gap_8()
            .p_8()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .font_family(cx.theme().font_family.clone())
            .child(
                h_flex()
                    .gap_8()
                    .child(ProgressRing::new(&self.loading).size(px(160.)))
                    .child(ProgressRing::new(&self.download).size(px(120.))),
            )
            .child(
                h_flex()
                    .gap_2()
                    .child(self.button("0%", Some(0.), cx))
                    .child(self.button("25%", Some(0.25), cx))
                    .child(self.button("75%", Some(0.75), cx))
                    .child(self.button("100%", Some(1.), cx))
                    .child(self.button("+10%", None, cx)),
            )
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gpui_progress_ring=debug".parse().unwrap()),
        )
        .init();

    let app = Application::new();

    app.run(move |cx| {
        gpui_progress_ring::init(cx);
        cx.activate(true);

        let bounds = Bounds::centered(None, size(px(560.), px(420.)), cx);
        cx.spawn(async move |cx| {
            cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    ..Default::default()
                },
                |window, cx| cx.new(|cx| Example::new(window, cx)),
            )?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });
}
