use leptos::prelude::*;
use schemaform::render::RootRendering;

/// Top-level field of a form: a heading, the form's description, then the fields
#[component]
pub fn RootField(rendering: RootRendering, children: Children) -> impl IntoView {
    let title = rendering.title();
    let description = rendering.description();
    let class_name = rendering.class_name();
    let dom_id = rendering.key.dom_id;

    view! {
        <div class=class_name id=dom_id>
            {title.map(|title| view! { <h2 class="RootFieldTitle">{title}</h2> })}
            {description.map(|description| view! { <p class="RootFieldDescription">{description}</p> })}
            {children()}
        </div>
    }
}
