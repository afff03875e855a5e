// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pseudonym generation for anonymous community board participation.

use rand::Rng;

const ADJECTIVES: [&str; 6] = ["Brave", "Clever", "Silent", "Quick", "Happy", "Blue"];
const ANIMALS: [&str; 6] = ["Otter", "Fox", "Falcon", "Lion", "Wolf", "Swan"];

/// Generates a display pseudonym of the form `<Adjective><Animal><n>`.
///
/// The pseudonym is not registered anywhere and carries no uniqueness
/// guarantee. It exists so anonymous posts read as written by someone
/// rather than by nobody.
#[must_use]
pub fn generate_pseudonym() -> String {
    let mut rng = rand::rng();
    let adjective: &str = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let animal: &str = ANIMALS[rng.random_range(0..ANIMALS.len())];
    let number: u16 = rng.random_range(0..1000);
    format!("{adjective}{animal}{number}")
}
