//! Page chrome: tab bar, mobile drawer, toast and loading overlay.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::NOTIFICATION_DURATION_MS;
use crate::dom::{self, ResizeListener, MOBILE_BODY_CLASS};
use crate::state::{AppAction, AppContext, AppState};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tab {
    Core,
    Analytics,
    Behavioral,
    Strategic,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Core, Tab::Analytics, Tab::Behavioral, Tab::Strategic];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Core => "💰 Core Budget",
            Tab::Analytics => "📊 Advanced Analytics",
            Tab::Behavioral => "🎯 Behavioral",
            Tab::Strategic => "🧠 Strategic",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let sidebar_open = use_state(|| false);
    use_mobile_detection();

    let toggle_menu = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(!*sidebar_open))
    };
    let close_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(false))
    };
    let select_from_drawer = {
        let sidebar_open = sidebar_open.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |tab: Tab| {
            on_select.emit(tab);
            sidebar_open.set(false);
            dom::scroll_to_top();
        })
    };

    let active_class = |open: bool| if open { Some("active") } else { None };

    html! {
        <div class="min-h-screen bg-background">
            <header class="bg-[#D8E1E8] border-b border-border h-16 flex items-center justify-between px-6">
                <button class="md:hidden p-2 rounded-full hover:bg-secondary" aria-label="Menu" onclick={toggle_menu}>{ "☰" }</button>
                <h1 class="text-[#173E63] text-2xl font-black tracking-tight">{ "Smart Budget Planner" }</h1>
                <div class="w-8"></div>
            </header>

            <div class={classes!("sidebar-overlay", "fixed", "inset-0", "bg-black/40", "z-40", active_class(*sidebar_open))} onclick={close_sidebar}></div>
            <aside class={classes!("sidebar", "fixed", "top-0", "left-0", "h-screen", "w-[220px]", "bg-[#173E63]", "z-50", "p-4", active_class(*sidebar_open))}>
                <TabList active={props.active} on_select={select_from_drawer} vertical=true />
            </aside>

            <nav class="hidden md:block bg-[#D8E1E8] px-6 pb-2">
                <TabList active={props.active} on_select={props.on_select.clone()} vertical=false />
            </nav>

            <main class="max-w-6xl mx-auto p-4 md:p-6 space-y-6">
                { for props.children.iter() }
            </main>

            <LoadingOverlay />
            <Toast />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TabListProps {
    active: Tab,
    on_select: Callback<Tab>,
    vertical: bool,
}

#[function_component(TabList)]
fn tab_list(props: &TabListProps) -> Html {
    let container = if props.vertical {
        "flex flex-col space-y-2 mt-12"
    } else {
        "flex gap-2"
    };

    html! {
        <div class={container}>
            { for Tab::ALL.iter().map(|tab| {
                let tab = *tab;
                let class_name = if tab == props.active {
                    "tab-btn active px-4 py-3 rounded-xl text-[13px] font-medium bg-[#B2CBDE] text-[#173E63] text-left"
                } else if props.vertical {
                    "tab-btn px-4 py-3 rounded-xl text-[13px] font-medium text-slate-300 hover:bg-white/5 hover:text-white text-left"
                } else {
                    "tab-btn px-4 py-3 rounded-xl text-[13px] font-medium text-[#173E63] hover:bg-white/40 text-left"
                };
                let on_select = props.on_select.clone();
                html! {
                    <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(tab))}>
                        { tab.label() }
                    </button>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PanelProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub children: Children,
}

/// The card every form sits in.
#[function_component(Panel)]
pub fn panel(props: &PanelProps) -> Html {
    html! {
        <section class="card bg-card rounded-[10px] p-6 border border-border shadow-sm">
            <h2 class="text-xl font-bold text-[#173E63]">{ props.title.clone() }</h2>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <p class="text-sm text-slate-500 mb-4">{ subtitle.clone() }</p> }
                } else {
                    html! {}
                }
            }
            { for props.children.iter() }
        </section>
    }
}

/// The overlay shows only under an app context with a cycle in flight.
pub fn overlay_visible(state: Option<&AppState>) -> bool {
    state.map_or(false, AppState::is_loading)
}

#[function_component(LoadingOverlay)]
pub fn loading_overlay() -> Html {
    let app = use_context::<AppContext>();
    if !overlay_visible(app.as_deref()) {
        return html! {};
    }

    html! {
        <div id="loading" class="fixed inset-0 bg-black/30 flex items-center justify-center z-[60]">
            <div class="bg-white rounded-xl px-6 py-4 font-bold text-[#173E63] shadow-lg">{ "Loading..." }</div>
        </div>
    }
}

/// Shows the latest notice and dismisses it after a fixed delay.
#[function_component(Toast)]
pub fn toast() -> Html {
    let app = use_context::<AppContext>();
    let notice = app.as_ref().and_then(|app| app.notice().cloned());

    {
        let app = app.clone();
        let id = notice.as_ref().map(|n| n.id);
        use_effect_with_deps(
            move |id| {
                let timeout = match (app, *id) {
                    (Some(app), Some(id)) => Some(Timeout::new(NOTIFICATION_DURATION_MS, move || {
                        app.dispatch(AppAction::DismissNotice(id));
                    })),
                    _ => None,
                };
                move || drop(timeout)
            },
            id,
        );
    }

    match notice {
        Some(notice) => html! {
            <div id="notification" class="notification show fixed bottom-6 right-6 bg-[#173E63] text-white px-5 py-3 rounded-xl shadow-lg z-[70]">
                { notice.message }
            </div>
        },
        None => html! {},
    }
}

/// Keeps the `mobile-device` body class in sync with the device and the
/// viewport width.
#[hook]
pub fn use_mobile_detection() {
    use_effect_with_deps(
        |_| {
            dom::set_body_class(MOBILE_BODY_CLASS, dom::detect_mobile());
            let listener = ResizeListener::attach(|| {
                let narrow = dom::viewport_width().map_or(false, dom::is_narrow);
                dom::set_body_class(MOBILE_BODY_CLASS, narrow);
            });
            move || drop(listener)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_in_page_order() {
        let labels: Vec<&str> = Tab::ALL.iter().map(Tab::label).collect();
        assert_eq!(labels.len(), 4);
        assert!(labels[0].contains("Core"));
        assert!(labels[3].contains("Strategic"));
    }

    #[test]
    fn test_overlay_follows_loading_count() {
        use std::rc::Rc;
        use yew::Reducible;

        assert!(!overlay_visible(None));
        let idle = AppState::default();
        assert!(!overlay_visible(Some(&idle)));

        let busy = Rc::new(idle).reduce(AppAction::BeginLoading);
        assert!(overlay_visible(Some(&*busy)));
        let done = busy.reduce(AppAction::EndLoading);
        assert!(!overlay_visible(Some(&*done)));
    }
}
