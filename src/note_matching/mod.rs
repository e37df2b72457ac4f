/// Note matching core - domain model, services, and policies
///
/// This is the domain layer of the crate: installed-component state,
/// security notes with validity rules, analysis runs, and the pure
/// matching services that connect them.
pub mod domain;
pub mod policies;
pub mod services;
