//! HVAC Notes Extractor - Frontend Rust/Leptos Application
//!
//! A WebAssembly page that uploads a PDF to the notes extraction service
//! and shows the extracted notes and the raw JSON response.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (target service)                                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  NotesPage                                                   │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (picker, submit, status)                 │
//! │  ├── NotesPanel (when notes are non-empty)                  │
//! │  └── ResultPanel (when a response is held)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! All state lives in one `RwSignal<NotesWorkflow<File>>`; components only
//! read it and send events through [`services::dispatch`].
//!
//! # Modules
//!
//! - [`types`] - View-side types (PageWorkflow, StatusBanner)
//! - [`components`] - UI components
//! - [`services`] - Upload, clipboard and effect runner

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{PageWorkflow, StatusBanner};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

/// Root component, mounted by `main.rs`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let workflow = create_rw_signal(PageWorkflow::new());

    view! {
        <Header/>
        <NotesPage workflow=workflow/>
        <Footer/>
    }
}

/// Upload form and result panels driven by `workflow`.
#[component]
pub fn NotesPage(workflow: RwSignal<PageWorkflow>) -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>

            <UploadSection workflow=workflow/>

            <Show
                when=move || workflow.with(|wf| !wf.notes().is_empty())
                fallback=|| view! { }
            >
                <NotesPanel workflow=workflow/>
            </Show>

            <Show
                when=move || workflow.with(|wf| wf.result().is_some())
                fallback=|| view! { }
            >
                <ResultPanel workflow=workflow/>
            </Show>
        </div>
    }
}
