//! Project card component.

use core_types::{Action, Page, ProjectCard};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Properties for ProjectCardView component.
#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: ProjectCard,
}

/// Card showing a project's logo, title, description and its action.
#[function_component(ProjectCardView)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    let view = project.action.view();

    let disabled = html! {
        <button class="btn btn-secondary" disabled=true>{ view.label }</button>
    };

    let action = match &project.action {
        Action::ExternalLink(url) => html! {
            <a
                class="btn btn-secondary"
                href={url.clone()}
                target="_blank"
                rel="noopener noreferrer"
            >
                { view.label }
            </a>
        },
        Action::InternalRoute(slug) => match Page::from_slug(slug) {
            Some(page) => html! {
                <Link<Route> to={Route::from(page)} classes="btn btn-primary">
                    { view.label }
                </Link<Route>>
            },
            None => disabled,
        },
        Action::Disabled => disabled,
    };

    html! {
        <div class="card project-card">
            <div
                class="project-media"
                style={format!("background-color: {};", project.background_color)}
            >
                <img src={project.logo_url.clone()} alt={project.title.clone()} />
            </div>
            <div class="project-content">
                <h2 class="card-title">{ &project.title }</h2>
                <p class="text-secondary">{ &project.description }</p>
            </div>
            <div class="project-actions">
                { action }
            </div>
        </div>
    }
}
