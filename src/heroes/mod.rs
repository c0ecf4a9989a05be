//! Hero records and the data service that loads them.
//!
//! - [`Hero`]: A hero record
//! - [`HeroService`]: CRUD operations, implemented by [`RestHeroService`]
//! - [`ServiceResult`]: The ok flag and status of a delete
//! - [`ServiceError`]: Failures other than a not-ok delete

mod errors;
mod hero;
mod service;

pub use errors::ServiceError;
pub use hero::Hero;
pub use service::{HeroService, RestHeroService, ServiceResult};
