//! Main application component with routing.

use core_types::catalog::REPOSITORY_URL;
use core_types::router::{self, ROOT_PATH, Resolution};
use core_types::{Page, Session, User};
use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::*;

use crate::context::{DeliveryHandle, SessionAction, SessionContext, SessionState};
use crate::pages::{DashboardPage, EmailSenderPage};

/// Application routes, used to build links.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/email-sender")]
    EmailSender,
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Dashboard => Route::Dashboard,
            Page::EmailSender => Route::EmailSender,
        }
    }
}

/// Renders the page for the current location. Matching is exact, so paths
/// such as `/email-sender/` redirect to the dashboard.
#[function_component(RoutedPage)]
fn routed_page() -> Html {
    let location = use_location();
    let path = location.as_ref().map_or(ROOT_PATH, |l| l.path());

    match router::resolve(path) {
        Resolution::Render(Page::Dashboard) => html! { <DashboardPage /> },
        Resolution::Render(Page::EmailSender) => html! { <EmailSenderPage /> },
        // Render the dashboard underneath the redirect so the unmatched path
        // never shows an empty page.
        Resolution::Redirect { to } => {
            let target = Route::recognize(to).unwrap_or(Route::Dashboard);
            html! {
                <>
                    <Redirect<Route> to={target} />
                    <DashboardPage />
                </>
            }
        }
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppShell />
        </BrowserRouter>
    }
}

/// Properties for ServerApp.
#[derive(Properties, PartialEq, Debug)]
pub struct ServerAppProps {
    /// Location to render.
    pub url: AttrValue,
    /// Signed-in user, if any.
    #[prop_or_default]
    pub user: Option<User>,
}

/// Application rendered against an in-memory history, for server-side
/// rendering.
#[function_component(ServerApp)]
pub fn server_app(props: &ServerAppProps) -> Html {
    // Rebuilt only when the url prop changes; other re-renders keep the
    // current location.
    let history = use_memo(props.url.clone(), |url| {
        let history = AnyHistory::from(MemoryHistory::new());
        history.push(&**url);
        history
    });

    html! {
        <Router history={(*history).clone()}>
            <AppShell user={props.user.clone()} />
        </Router>
    }
}

#[derive(Properties, PartialEq)]
struct AppShellProps {
    #[prop_or_default]
    user: Option<User>,
}

/// Context providers, header and routed content.
#[function_component(AppShell)]
fn app_shell(props: &AppShellProps) -> Html {
    let session = {
        let user = props.user.clone();
        use_reducer(move || SessionState(user.map(Session::authenticated).unwrap_or_default()))
    };
    let delivery = use_state(DeliveryHandle::default);

    html! {
        <ContextProvider<SessionContext> context={session}>
            <ContextProvider<DeliveryHandle> context={(*delivery).clone()}>
                <div class="app-container">
                    <Header />
                    <main class="main-content">
                        <RoutedPage />
                    </main>
                </div>
            </ContextProvider<DeliveryHandle>>
        </ContextProvider<SessionContext>>
    }
}

/// Top bar with the brand link, the repository link and the session status.
#[function_component(Header)]
fn header() -> Html {
    let session = use_context::<SessionContext>();

    let status = match session {
        Some(session) => match session.0.principal() {
            Some(user) => {
                let on_logout = {
                    let session = session.clone();
                    Callback::from(move |_: MouseEvent| session.dispatch(SessionAction::Logout))
                };
                html! {
                    <div class="session">
                        <span>{ format!("Signed in as {}", user.name) }</span>
                        <button class="btn btn-secondary" onclick={on_logout}>{"Logout"}</button>
                    </div>
                }
            }
            None => html! { <LoginForm session={session.clone()} /> },
        },
        None => Html::default(),
    };

    html! {
        <header class="topbar">
            <Link<Route> to={Route::Dashboard} classes="nav-brand">
                {"Showcases"}
            </Link<Route>>
            <a class="nav-link" href={REPOSITORY_URL} target="_blank" rel="noopener noreferrer">
                {"View on GitHub"}
            </a>
            { status }
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct LoginFormProps {
    session: SessionContext,
}

/// Name field and Login button shown while nobody is signed in.
#[function_component(LoginForm)]
fn login_form(props: &LoginFormProps) -> Html {
    let name = use_state(String::new);

    let on_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_login = {
        let name = name.clone();
        let session = props.session.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(user) = User::named(&name) {
                session.dispatch(SessionAction::Login(user));
                name.set(String::new());
            }
        })
    };

    html! {
        <div class="session">
            <span class="text-secondary">{"Not signed in"}</span>
            <input
                class="session-name"
                type="text"
                placeholder="Name"
                aria-label="Name"
                value={(*name).clone()}
                oninput={on_input}
            />
            <button
                class="btn btn-primary"
                disabled={User::named(&name).is_none()}
                onclick={on_login}
            >
                {"Login"}
            </button>
        </div>
    }
}
