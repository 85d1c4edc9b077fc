use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::library::system::LibrarySystem;

// Builds an empty catalog and registers the configured patrons.
pub fn create_library_system(config: &Configuration) -> LibraryResult<LibrarySystem> {
    config.validate()?;
    let mut system = LibrarySystem::new(config);
    for seed in config.patrons.iter() {
        system.register_patron(seed.name.as_str(), seed.id.as_str())?;
    }
    Ok(system)
}
