mod contact;
mod experience;
mod header;
mod hero;
mod links;
mod projects;
mod resume;
mod reveal;
mod skills;
mod viewport;

use chrono::{Datelike, Utc};
use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{self, Portfolio};
use crate::nav::{NavLabel, Navigator};

use contact::Contact;
use experience::Experience;
use header::Header;
use hero::Hero;
use projects::Projects;
use resume::ResumeSection;
use skills::Skills;
use viewport::BrowserViewport;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-slate-950 font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    match content::portfolio() {
        Ok(portfolio) => Either::Left(view! { <Page portfolio /> }),
        Err(e) => {
            log::error!("couldn't load portfolio content: {e}");
            Either::Right(
                view! {
                    <Title text="Portfolio" />
                    <main class="min-h-screen flex items-center justify-center text-slate-400">
                        "This portfolio is temporarily unavailable."
                    </main>
                },
            )
        }
    }
}

#[component]
fn Page(portfolio: &'static Portfolio) -> impl IntoView {
    let profile = &portfolio.profile;
    let nav = RwSignal::new(Navigator::new(profile.resume.clone()));

    let menu_open = Signal::derive(move || nav.with(|n| n.menu().is_open()));
    let on_navigate = Callback::new(move |label: NavLabel| {
        nav.update(|n| {
            n.navigate(label, &BrowserViewport);
        });
    });
    let on_toggle = Callback::new(move |_: ()| {
        nav.update(|n| {
            n.toggle_menu();
        });
    });

    view! {
        <Title text=format!("{} | {}", profile.name, profile.role) />
        <div class="bg-slate-950 text-slate-100 min-h-screen font-sans selection:bg-purple-500/30">
            <Header brand=profile.first_name() menu_open on_navigate on_toggle />
            <Hero profile on_navigate />
            <Skills profile />
            <Experience internships=portfolio.internships.as_slice() />
            <Projects projects=portfolio.projects.as_slice() />
            <ResumeSection resume=profile.resume.as_str() />
            <Contact profile />
            <footer class="py-8 border-t border-slate-800 text-center text-slate-500 text-sm">
                <p>{profile.copyright(Utc::now().year())}</p>
            </footer>
        </div>
    }
}
