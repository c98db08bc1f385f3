use super::view_model::AuthScreenViewModel;
use crate::shared::components::ui::{Button, Input, LinkButton};
use crate::shared::components::{Divider, Logo};
use contracts::shared::config::AuthScreenConfig;
use contracts::system::auth::{ActionVariant, AuthAction, AuthLink, AuthTab, LinkPlacement};
use leptos::logging::log;
use leptos::prelude::*;

/// Auth screen: logo plus the form of the active tab
#[component]
pub fn AuthScreen() -> impl IntoView {
    let config = use_context::<AuthScreenConfig>().unwrap_or_default();
    let vm = AuthScreenViewModel::new(&config);

    view! {
        <div class="auth-screen">
            <div class="auth-screen__scroll">
                <Logo />
                {move || {
                    let tab = vm.tab.get();
                    log!("auth screen: rendering {} form", tab);
                    view! { <AuthForm tab=tab vm=vm /> }
                }}
            </div>
        </div>
    }
}

/// Form layout of one tab, built from the tab's field, link and action tables
#[component]
fn AuthForm(tab: AuthTab, vm: AuthScreenViewModel) -> impl IntoView {
    let links_at = |placement: LinkPlacement| -> Vec<AuthLink> {
        tab.links()
            .iter()
            .copied()
            .filter(|l| l.placement() == placement)
            .collect()
    };
    let actions_of = |variant: ActionVariant| -> Vec<AuthAction> {
        tab.actions()
            .iter()
            .copied()
            .filter(|a| a.variant() == variant)
            .collect()
    };

    let on_link = Callback::new(move |link: AuthLink| vm.follow_command(link));
    let render_links = move |links: Vec<AuthLink>| {
        links
            .into_iter()
            .map(|link| view! { <LinkButton link=link on_click=on_link /> })
            .collect_view()
    };
    let render_actions = move |actions: Vec<AuthAction>| {
        actions
            .into_iter()
            .map(|action| {
                view! {
                    <Button
                        variant=action.variant()
                        on_click=Callback::new(move |_: leptos::ev::MouseEvent| vm.press_command(action))
                    >
                        {action.label()}
                    </Button>
                }
            })
            .collect_view()
    };

    let social = actions_of(ActionVariant::Social);
    let footer = links_at(LinkPlacement::Footer);

    view! {
        <div class=format!("auth-form auth-form--{}", tab.code())>
            <h1 class="auth-form__title">{tab.title()}</h1>
            <p class="auth-form__subtitle">{tab.subtitle()}</p>

            {tab
                .fields()
                .iter()
                .copied()
                .map(|field| {
                    view! {
                        <Input
                            field=field
                            value=Signal::derive(move || vm.value(field))
                            on_input=Callback::new(move |value: String| vm.edit_command(field, value))
                        />
                    }
                })
                .collect_view()}

            {render_links(links_at(LinkPlacement::Inline))}
            {render_actions(actions_of(ActionVariant::Primary))}

            {(!social.is_empty()).then(|| view! {
                <Divider />
                {render_actions(social)}
            })}

            {(!footer.is_empty()).then(|| view! {
                <div class="auth-form__footer">
                    <span class="auth-form__prompt">{tab.footer_prompt().unwrap_or_default()}</span>
                    {render_links(footer)}
                </div>
            })}

            {render_links(links_at(LinkPlacement::Back))}
        </div>
    }
}
