use yew::prelude::*;

use crate::components::layout::{Layout, Tab};
use crate::pages::{AnalyticsPage, BehavioralPage, CorePage, StrategicPage};
use crate::state::{AppContext, AppState};

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(AppState::default);
    let active_tab = use_state(|| Tab::Core);
    let on_select = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: Tab| {
            log::debug!("switching to {:?}", tab);
            active_tab.set(tab)
        })
    };

    // Every page stays mounted so inputs and results survive a tab switch.
    let page = |tab: Tab, content: Html| {
        let hidden = if *active_tab == tab { None } else { Some("hidden") };
        html! { <section class={classes!("tab-content", hidden)}>{ content }</section> }
    };

    html! {
        <ContextProvider<AppContext> context={state}>
            <Layout active={*active_tab} {on_select}>
                { page(Tab::Core, html! { <CorePage /> }) }
                { page(Tab::Analytics, html! { <AnalyticsPage /> }) }
                { page(Tab::Behavioral, html! { <BehavioralPage /> }) }
                { page(Tab::Strategic, html! { <StrategicPage /> }) }
            </Layout>
        </ContextProvider<AppContext>>
    }
}
