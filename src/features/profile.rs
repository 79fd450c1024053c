//! Save, load and clear of the budget inputs, plus the "Last saved" status.

use chrono::{DateTime, Utc};
use yew::prelude::*;

use crate::components::layout::Panel;
use crate::dom;
use crate::error::Result;
use crate::state::{AppAction, AppContext};
use crate::storage::{KeyValueStore, ProfileFields, ProfileStore, StoredProfile};

pub const SAVED_MESSAGE: &str = "✅ Profile saved successfully!";
pub const NOT_FOUND_MESSAGE: &str = "⚠️ No saved profile found";
pub const CLEARED_MESSAGE: &str = "🗑️ Profile cleared";
pub const CONFIRM_CLEAR: &str = "Are you sure you want to delete your saved profile?";

pub fn loaded_message(profile: &StoredProfile) -> String {
    format!("✅ Profile loaded (saved: {})", profile.saved_at_display())
}

pub fn status_line(profile: &StoredProfile) -> String {
    format!("Last saved: {}", profile.saved_at_display())
}

/// Status shown on page load. The form itself is not filled in.
pub fn initial_status<S: KeyValueStore>(profiles: &ProfileStore<S>) -> Option<String> {
    match profiles.load() {
        Ok(profile) => profile.as_ref().map(status_line),
        Err(e) => {
            log::warn!("could not read saved profile: {}", e);
            None
        }
    }
}

pub fn save_profile<S: KeyValueStore>(
    profiles: &ProfileStore<S>,
    fields: &ProfileFields,
    now: DateTime<Utc>,
) -> Result<StoredProfile> {
    profiles.save(fields, now)
}

/// What a load produced: new field values and the notification to show.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub fields: Option<ProfileFields>,
    pub message: String,
}

pub fn load_profile<S: KeyValueStore>(
    profiles: &ProfileStore<S>,
    current: &ProfileFields,
) -> Result<Loaded> {
    Ok(match profiles.load()? {
        Some(profile) => Loaded {
            fields: Some(profile.apply_to(current)),
            message: loaded_message(&profile),
        },
        None => Loaded {
            fields: None,
            message: NOT_FOUND_MESSAGE.to_string(),
        },
    })
}

#[derive(Properties, PartialEq)]
pub struct ProfilePanelProps {
    pub fields: ProfileFields,
    pub on_change: Callback<ProfileFields>,
}

#[function_component(ProfilePanel)]
pub fn profile_panel(props: &ProfilePanelProps) -> Html {
    let app = use_context::<AppContext>();
    let status = use_state(|| None::<String>);

    {
        let status = status.clone();
        use_effect_with_deps(
            move |_| {
                status.set(initial_status(&ProfileStore::browser()));
                || ()
            },
            (),
        );
    }

    let notify = {
        let app = app.clone();
        move |message: String| match &app {
            Some(app) => app.dispatch(AppAction::Notify(message)),
            None => dom::alert(&message),
        }
    };

    let on_save = {
        let fields = props.fields.clone();
        let status = status.clone();
        let notify = notify.clone();
        Callback::from(move |_: MouseEvent| {
            match save_profile(&ProfileStore::browser(), &fields, Utc::now()) {
                Ok(profile) => {
                    status.set(Some(status_line(&profile)));
                    notify(SAVED_MESSAGE.to_string());
                }
                Err(e) => {
                    log::error!("saving profile failed: {}", e);
                    notify(format!("❌ {}", e));
                }
            }
        })
    };

    let on_load = {
        let fields = props.fields.clone();
        let on_change = props.on_change.clone();
        let notify = notify.clone();
        Callback::from(move |_: MouseEvent| {
            match load_profile(&ProfileStore::browser(), &fields) {
                Ok(loaded) => {
                    if let Some(fields) = loaded.fields {
                        on_change.emit(fields);
                    }
                    notify(loaded.message);
                }
                Err(e) => {
                    log::error!("loading profile failed: {}", e);
                    notify(format!("❌ {}", e));
                }
            }
        })
    };

    let on_clear = {
        let on_change = props.on_change.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            if !dom::confirm(CONFIRM_CLEAR) {
                return;
            }
            match ProfileStore::browser().clear() {
                Ok(fields) => {
                    on_change.emit(fields);
                    status.set(None);
                    notify(CLEARED_MESSAGE.to_string());
                }
                Err(e) => {
                    log::error!("clearing profile failed: {}", e);
                    notify(format!("❌ {}", e));
                }
            }
        })
    };

    html! {
        <Panel title="Your Profile" subtitle="Keep your budget split in this browser.">
            <div class="flex flex-wrap gap-3">
                <button type="button" class="bg-[#173E63] text-white px-4 py-2 rounded-xl font-bold" onclick={on_save}>{ "💾 Save Profile" }</button>
                <button type="button" class="bg-[#B2CBDE] text-[#173E63] px-4 py-2 rounded-xl font-bold" onclick={on_load}>{ "📂 Load Profile" }</button>
                <button type="button" class="bg-white border border-[#173E63] text-[#173E63] px-4 py-2 rounded-xl font-bold" onclick={on_clear}>{ "🗑️ Clear Profile" }</button>
            </div>
            <p id="profileStatus" class="mt-3 text-sm text-[#173E63]">
                { status.as_deref().unwrap_or_default() }
            </p>
        </Panel>
    }
}
