//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Header, Sidebar, Toast};
use crate::pages::{
    BursaryApplications, CodeVerification, Customers, Dashboard, EventRegistrations, ForgotPassword, Login,
    StudentMarks,
};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Header />

                <div class="flex flex-1">
                    <Sidebar />

                    <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                        <Routes>
                            <Route path="/" view=Dashboard />
                            <Route path="/dashboard/default" view=Dashboard />
                            <Route path="/apps/event-registration" view=EventRegistrations />
                            <Route path="/apps/student-marks" view=StudentMarks />
                            <Route path="/apps/customers" view=Customers />
                            <Route path="/apps/bursary-applications" view=BursaryApplications />
                            <Route path="/login" view=Login />
                            <Route path="/forgot-password" view=ForgotPassword />
                            <Route path="/auth/forgot-password" view=ForgotPassword />
                            <Route path="/code-verification" view=CodeVerification />
                            <Route path="/auth/code-verification" view=CodeVerification />
                            <Route path="/*any" view=NotFound />
                        </Routes>
                    </main>
                </div>

                <Footer />

                <Toast />
            </div>
        </Router>
    }
}

/// Footer showing who is signed in
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="flex items-center space-x-2">
                    {move || {
                        if state.is_logged_in() {
                            let who = state
                                .session
                                .with(|s| s.user().map(str::to_string))
                                .unwrap_or_else(|| "Administrator".to_string());
                            view! {
                                <span class="flex items-center space-x-1 text-green-400">
                                    <span class="w-2 h-2 bg-green-400 rounded-full" />
                                    <span>{format!("Signed in as {}", who)}</span>
                                </span>
                            }.into_view()
                        } else {
                            view! {
                                <span class="flex items-center space-x-1 text-gray-400">
                                    <span class="w-2 h-2 bg-gray-400 rounded-full" />
                                    <span>"Not signed in"</span>
                                </span>
                            }.into_view()
                        }
                    }}
                </div>

                <div class="text-gray-400">{crate::api::get_api_base()}</div>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
