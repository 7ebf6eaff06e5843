use yew::prelude::*;
use crate::models::AlertKind;

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    #[prop_or_default]
    pub kind: AlertKind,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    html! {
        <div class={classes!("alert", props.kind.class())} role={props.kind.role()}>
            <span class="alert-message">{ props.children.clone() }</span>
        </div>
    }
}
