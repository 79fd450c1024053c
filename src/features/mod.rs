//! One module per form. Each follows the same cycle: collect the inputs,
//! post them, render the response (or the error) into the form's own result
//! container.

pub mod asset_allocation;
pub mod bank_feed;
pub mod budget;
pub mod combined_goals;
pub mod dynamic_reallocation;
pub mod expense_forecast;
pub mod goal_conflict;
pub mod income_volatility;
pub mod inflation;
pub mod market_advisor;
pub mod micro_savings;
pub mod opportunity_cost;
pub mod profile;
pub mod streak;
pub mod tax_harvesting;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{ApiClient, Endpoint, Transport};
use crate::components::{render_blocks, Block};
use crate::dom;
use crate::error::Result;
use crate::state::{use_submission, AppAction, AppContext, LoadingGuard, SubmissionHandle};

/// What a result container currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Outcome {
    #[default]
    Idle,
    Rendered(Vec<Block>),
    Failed(String),
}

/// Validates and posts in one step. A collection error stops the cycle
/// before the transport is touched.
pub async fn submit<T, Req, Res>(
    client: &ApiClient<T>,
    endpoint: Endpoint,
    payload: Result<Req>,
) -> Result<Res>
where
    T: Transport,
    Req: Serialize,
    Res: DeserializeOwned,
{
    let payload = payload?;
    client.post(endpoint, &payload).await
}

/// Per-form handle bundling the result container, the submission tracker
/// and access to the shared loading overlay.
#[derive(Clone)]
pub struct FeatureForm {
    app: Option<AppContext>,
    submission: SubmissionHandle,
    outcome: UseStateHandle<Outcome>,
}

#[hook]
pub fn use_feature() -> FeatureForm {
    let app = use_context::<AppContext>();
    let submission = use_submission();
    let outcome = use_state(Outcome::default);
    FeatureForm {
        app,
        submission,
        outcome,
    }
}

impl FeatureForm {
    pub fn is_busy(&self) -> bool {
        self.submission.is_busy()
    }

    pub fn app(&self) -> Option<&AppContext> {
        self.app.as_ref()
    }

    /// Runs one request cycle. `view` turns the decoded response into the
    /// blocks shown in this form's container.
    pub fn dispatch<Req, Res, F>(&self, endpoint: Endpoint, payload: Result<Req>, view: F)
    where
        Req: Serialize + 'static,
        Res: DeserializeOwned + 'static,
        F: FnOnce(Res) -> Vec<Block> + 'static,
    {
        let payload = match payload {
            Ok(payload) => payload,
            Err(err) => {
                log::info!("{} not sent: {}", endpoint.path(), err);
                dom::alert(&err.to_string());
                return;
            }
        };

        if self.submission.is_busy() {
            log::debug!("{} already in flight", endpoint.path());
            return;
        }

        let ticket = self.submission.begin();
        let loading = self.app.clone().map(|app| {
            LoadingGuard::begin(Callback::from(move |action: AppAction| app.dispatch(action)))
        });
        let submission = self.submission.clone();
        let outcome = self.outcome.clone();

        spawn_local(async move {
            let _loading = loading;
            let result: Result<Res> = submit(&ApiClient::browser(), endpoint, Ok(payload)).await;

            if !submission.finish(ticket) {
                log::debug!("dropping superseded {} response", endpoint.path());
                return;
            }

            match result {
                Ok(response) => outcome.set(Outcome::Rendered(view(response))),
                Err(err) => {
                    log::warn!("{} failed: {}", endpoint.path(), err);
                    outcome.set(Outcome::Failed(err.to_string()));
                }
            }
        });
    }

    /// The form's result container.
    pub fn render(&self, container_id: &'static str) -> Html {
        let on_dismiss = {
            let outcome = self.outcome.clone();
            Callback::from(move |_: MouseEvent| outcome.set(Outcome::Idle))
        };

        let content = match &*self.outcome {
            Outcome::Idle => html! {},
            Outcome::Rendered(blocks) => render_blocks(blocks),
            Outcome::Failed(message) => html! {
                <div class="error rounded-xl p-3 my-2 flex justify-between items-start gap-2">
                    <span>{ format!("❌ {}", message) }</span>
                    <button type="button" class="font-bold" aria-label="Dismiss" onclick={on_dismiss}>{ "×" }</button>
                </div>
            },
        };

        html! {
            <div id={container_id} class="result mt-4">{ content }</div>
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use serde_json::Value;

    use crate::api::{ApiClient, RawResponse, Transport};
    use crate::error::Result;

    /// Records every request and answers with a canned response.
    pub struct RecordingTransport {
        pub status: u16,
        pub reply: String,
        pub calls: RefCell<Vec<(String, Value)>>,
    }

    impl RecordingTransport {
        pub fn replying(status: u16, reply: &str) -> Self {
            Self {
                status,
                reply: reply.to_string(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl Transport for RecordingTransport {
        async fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse> {
            self.calls.borrow_mut().push((url.to_string(), body.clone()));
            Ok(RawResponse {
                status: self.status,
                body: self.reply.clone(),
            })
        }
    }

    pub fn client(status: u16, reply: &str) -> ApiClient<RecordingTransport> {
        ApiClient::new("https://api.test", RecordingTransport::replying(status, reply))
    }
}
