//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to define common UI elements like cards, forms, and banners.
pub mod activity_card;
pub mod empty_state;
pub mod filter_bar;
pub mod pico;
pub mod signup_form;
pub mod status_banner;
