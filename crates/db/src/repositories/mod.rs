//! Postgres data access, one repository per table.

mod contact_repo;
mod portfolio_repo;
mod testimonial_repo;

pub use contact_repo::ContactRepo;
pub use portfolio_repo::PortfolioRepo;
pub use testimonial_repo::TestimonialRepo;
