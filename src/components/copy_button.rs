use gloo::timers::future::TimeoutFuture;
use log::warn;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::window;
use yew::prelude::*;

const COPIED_RESET_MS: u32 = 2000;

fn copy_label(copied: bool) -> &'static str {
    if copied {
        "Copied!"
    } else {
        "Copy"
    }
}

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    pub text: String,
    #[prop_or(AttrValue::Static("Copy to clipboard"))]
    pub title: AttrValue,
}

#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let copied = use_state(|| false);

    let on_copy = {
        let text = props.text.clone();
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(window) = window() else {
                warn!("Clipboard unavailable: no window");
                return;
            };
            let promise = window.navigator().clipboard().write_text(&text);
            let copied = copied.clone();
            spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    warn!("Clipboard write failed: {:?}", e);
                    return;
                }
                copied.set(true);
                TimeoutFuture::new(COPIED_RESET_MS).await;
                copied.set(false);
            });
        })
    };

    html! {
        <button type="button" class="btn btn-sm btn-copy" onclick={on_copy} title={props.title.clone()}>
            { copy_label(*copied) }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_flips_while_copied() {
        assert_eq!(copy_label(false), "Copy");
        assert_eq!(copy_label(true), "Copied!");
        assert_eq!(COPIED_RESET_MS, 2000);
    }
}
