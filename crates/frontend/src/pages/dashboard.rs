//! Dashboard page listing the showcase projects.

use core_types::catalog;
use yew::prelude::*;

use crate::components::ProjectCardView;

/// Dashboard page component.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let projects = catalog::builtin();

    html! {
        <div class="project-grid">
            { for projects.iter().map(|project| {
                html! {
                    <ProjectCardView key={project.title.clone()} project={project.clone()} />
                }
            })}
        </div>
    }
}
