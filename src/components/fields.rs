use yew::prelude::*;

use crate::collect::CategoryDraft;
use crate::format::capitalize_first;
use crate::models::CategoryAmounts;

/// Forwards every edit of an input into a string state handle.
pub fn bind(handle: &UseStateHandle<String>) -> Callback<String> {
    let handle = handle.clone();
    Callback::from(move |value: String| handle.set(value))
}

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub label: AttrValue,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or(AttrValue::Static("number"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub step: Option<AttrValue>,
    #[prop_or_default]
    pub min: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
}

#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    let on_change = props.on_change.clone();
    let oninput = Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        on_change.emit(input.value());
    });

    html! {
        <div class="form-group flex flex-col gap-1">
            <label class="text-xs font-bold text-[#173E63] uppercase tracking-wide">{ props.label.clone() }</label>
            <input
                type={props.input_type.clone()}
                class="p-2 border rounded"
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                step={props.step.clone()}
                min={props.min.clone()}
                required={props.required}
                {oninput}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub value: String,
    /// `(value, label)` pairs.
    pub options: Vec<(&'static str, &'static str)>,
    pub on_change: Callback<String>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let on_change = props.on_change.clone();
    let onchange = Callback::from(move |e: Event| {
        let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
        on_change.emit(input.value());
    });

    html! {
        <div class="form-group flex flex-col gap-1">
            <label class="text-xs font-bold text-[#173E63] uppercase tracking-wide">{ props.label.clone() }</label>
            <select class="p-2 border rounded" {onchange}>
                { for props.options.iter().map(|(value, label)| html! {
                    <option value={*value} selected={props.value == *value}>{ *label }</option>
                }) }
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub label: AttrValue,
    pub busy: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

/// Disabled while the form's previous request is still in flight.
#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    let button_type = if props.onclick.is_some() { "button" } else { "submit" };
    html! {
        <button
            type={button_type}
            class="bg-[#173E63] text-white px-4 py-2 rounded-xl font-bold disabled:opacity-50"
            disabled={props.busy}
            onclick={props.onclick.clone()}
        >
            { if props.busy { "Working...".to_string() } else { props.label.to_string() } }
        </button>
    }
}

/// Wraps a form so submitting never reloads the page.
pub fn on_submit(handler: Callback<()>) -> Callback<SubmitEvent> {
    Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        handler.emit(());
    })
}

/// Edits one field of one repeated entry block.
pub fn edit_entry<D>(
    entries: &UseStateHandle<Vec<D>>,
    index: usize,
    apply: fn(&mut D, String),
) -> Callback<String>
where
    D: Clone + 'static,
{
    let entries = entries.clone();
    Callback::from(move |value: String| {
        let mut next = (*entries).clone();
        if let Some(entry) = next.get_mut(index) {
            apply(entry, value);
        }
        entries.set(next);
    })
}

/// Appends a blank entry block.
pub fn add_entry<D>(entries: &UseStateHandle<Vec<D>>) -> Callback<MouseEvent>
where
    D: Clone + Default + 'static,
{
    let entries = entries.clone();
    Callback::from(move |_: MouseEvent| {
        let mut next = (*entries).clone();
        next.push(D::default());
        entries.set(next);
    })
}

#[derive(Properties, PartialEq)]
pub struct CategoryFieldsProps {
    /// Prefix for each label, e.g. "Allocated" → "Allocated Savings (₹)".
    pub group: AttrValue,
    pub value: CategoryDraft,
    pub on_change: Callback<CategoryDraft>,
}

#[function_component(CategoryFields)]
pub fn category_fields(props: &CategoryFieldsProps) -> Html {
    html! {
        <div class="form-row grid grid-cols-2 md:grid-cols-4 gap-3">
            { for CategoryAmounts::LABELS.iter().map(|category| {
                let on_change = {
                    let draft = props.value.clone();
                    let on_change = props.on_change.clone();
                    Callback::from(move |value: String| {
                        let mut next = draft.clone();
                        next.set(category, value);
                        on_change.emit(next);
                    })
                };
                html! {
                    <Field
                        label={format!("{} {} (₹)", props.group, capitalize_first(category))}
                        value={props.value.get(category).to_string()}
                        {on_change}
                        min="0"
                        step="0.01"
                        required=true
                    />
                }
            }) }
        </div>
    }
}
