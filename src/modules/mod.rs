pub mod bookings;
pub mod portfolio;
pub mod services;
pub mod team;
pub mod users;

use studio_kernel::ModuleRegistry;

use crate::utils::Store;

/// Register every site module, in mount order, against one shared store
pub fn register_all(registry: &mut ModuleRegistry, store: &Store) -> anyhow::Result<()> {
    registry.register(portfolio::create_module(store.clone()))?;
    registry.register(team::create_module(store.clone()))?;
    registry.register(services::create_module(store.clone()))?;
    registry.register(bookings::create_module(store.clone()))?;
    registry.register(users::create_module(store.clone()))?;
    Ok(())
}
