pub mod load_resolvers;
pub mod resolve_address;

pub use load_resolvers::load_resolver_set;
pub use resolve_address::{AddressOutcome, ResolveAddressUseCase};
