use yew::prelude::*;
use crate::utils::input_value;

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    pub value: String,
    pub oninput: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub multiline: bool,
    #[prop_or_default]
    pub decimal: bool,
    #[prop_or_default]
    pub helper: Option<AttrValue>,
}

#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    let oninput = {
        let cb = props.oninput.clone();
        Callback::from(move |ev: InputEvent| {
            if let Some(value) = input_value(&ev) {
                cb.emit(value);
            }
        })
    };

    html! {
        <div class="input-wrapper">
            <label for={props.id.clone()} class="input-label">{ props.label.as_str() }</label>
            if props.multiline {
                <textarea
                    id={props.id.clone()}
                    class="input input-multiline"
                    rows="4"
                    placeholder={props.placeholder.clone()}
                    value={props.value.clone()}
                    {oninput}
                    disabled={props.disabled}
                    aria-required="true"
                />
            } else {
                <input
                    id={props.id.clone()}
                    class="input"
                    type="text"
                    inputmode={if props.decimal { "decimal" } else { "text" }}
                    placeholder={props.placeholder.clone()}
                    value={props.value.clone()}
                    {oninput}
                    disabled={props.disabled}
                    aria-required="true"
                />
            }
            if let Some(helper) = &props.helper {
                <p class="input-helper">{ helper.as_str() }</p>
            }
        </div>
    }
}
