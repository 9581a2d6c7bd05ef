use dioxus::prelude::*;

use ui::{stored_token, AppointmentProvider, SessionProvider};
use views::{AboutUs, Admin, DeleteEmail, Review};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/about")]
    AboutUs {},
    #[route("/review")]
    Review {},
    #[route("/admin")]
    Admin {},
    #[route("/admin/emails/:id")]
    DeleteEmail { id: i64 },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        // The session is established here, once: the stored credential is
        // read at the boundary and injected; views only see the context.
        SessionProvider {
            token: stored_token(),
            AppointmentProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to `/about`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::AboutUs {});
    rsx! {}
}
