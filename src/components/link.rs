use yew::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct LinkProps {
    pub to: Route,
    pub on_navigate: Callback<Route>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Html,
}

/// In-app anchor; navigates through history instead of reloading.
#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let onclick = {
        let to = props.to;
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(to);
        })
    };

    html! {
        <a class={props.class.clone()} href={props.to.path()} {onclick}>
            { props.children.clone() }
        </a>
    }
}
