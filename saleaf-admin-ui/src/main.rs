//! SALEAF Admin Dashboard
//!
//! Administrative front-end for the SALEAF donation, bursary and event
//! registration platform, built with Leptos (WASM).
//!
//! # Features
//!
//! - Donation dashboard with summary cards and a monthly income chart
//! - Server-paginated event registrations and student mark uploads
//! - Searchable, sortable customer list
//! - Bursary application review with role assignment
//! - Forgot-password flow
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. List, form and dashboard state machines come from the
//! `saleaf-admin` core crate; this crate only draws them and talks HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
