// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod handlers;
mod request_response;
mod resource_path;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    animal_to_response, create_animal, get_animal, list_animals, seed_fixtures, update_animal,
};
pub use request_response::{AnimalRequest, AnimalResponse, SeedFixturesResponse, SeededCollection};
pub use resource_path::{
    API_PREFIX, ResourcePathError, collection_path, item_path, parse_animal_id,
    parse_resource_suffix,
};
