use dioxus::prelude::*;
use locfolio_core::{load_projects, DismissTrigger, FileSource, UiEvent};

use crate::context::{new_page, PortfolioPage};
use crate::effects::apply_effect;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The portfolio page
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, the page context, and routing. Starts the one
/// project load on mount and arms the progress bars shortly after the grid
/// is rendered.
#[component]
pub fn App() -> Element {
    let mut page: Signal<PortfolioPage> = use_signal(new_page);

    // Provide page context to all child components
    use_context_provider(|| page);

    use_future(move || async move {
        let (source, delay) = {
            let page = page.peek();
            (
                FileSource::new(page.config().projects_path.clone()),
                page.config().reveal_delay(),
            )
        };

        page.write().begin_load();
        tracing::info!(source = %source.path().display(), "loading projects");
        let result = load_projects(&source).await;
        page.write().finish_load(result);

        tokio::time::sleep(delay).await;
        let revealed = page.write().arm_progress();
        tracing::debug!(count = revealed.len(), "progress bars armed");
    });

    // Theme lives on the document element so the whole webview follows it
    use_effect(move || {
        let theme = page.read().theme();
        let _ = document::eval(&format!(
            "document.documentElement.setAttribute('data-theme', '{}');",
            theme.as_str()
        ));
    });

    // Escape closes the modal from anywhere in the page
    let on_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Escape {
            let effect = page
                .write()
                .dispatch(UiEvent::ModalDismissed(DismissTrigger::EscapeKey));
            apply_effect(effect);
        }
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app", tabindex: "-1", onkeydown: on_keydown,
            Router::<Route> {}
        }
    }
}
