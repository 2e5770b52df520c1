#[cfg(test)]
mod driver_registry_service;
