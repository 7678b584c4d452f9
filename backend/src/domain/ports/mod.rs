//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod person_query;
mod town_reference_provider;

#[cfg(test)]
pub use person_query::MockPersonQuery;
pub use person_query::PersonQuery;
#[cfg(test)]
pub use town_reference_provider::MockTownReferenceProvider;
pub use town_reference_provider::{
    FixtureTownReferenceProvider, TownReferenceError, TownReferenceProvider,
};
