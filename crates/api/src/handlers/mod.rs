pub mod contact;
pub mod portfolio;
pub mod testimonials;
pub mod upload;
