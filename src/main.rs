//! MovieDB UI
//!
//! Frontend for the MovieDB recommendation agent, built with Leptos (WASM).
//!
//! # Features
//!
//! - Chat with the recommendation agent
//! - Personalized movie recommendations with expandable synopses
//! - Review submission with catalog-backed title autocomplete
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All recommendation logic, chat reasoning and persistence live
//! behind the MovieDB HTTP API; this crate only marshals requests and renders
//! responses.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
