pub mod contact_form;
pub mod dom;
pub mod faq;
pub mod fade_in;
pub mod gallery;
pub mod hero_slider;
pub mod lightbox;
pub mod membership;
pub mod nav;
pub mod notification;
pub mod theme_toggle;
pub mod video;
