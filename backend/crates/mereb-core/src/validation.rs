//! Business rules applied to every create and update.
//!
//! Rules are checked in order and the first failure is returned; errors are
//! never aggregated.

use crate::{CoreError, PersonCreate, Result as CoreResult};

pub const NAME_EMPTY_MESSAGE: &str = "name can't be empty";
pub const AGE_NEGATIVE_MESSAGE: &str = "age can't be less than zero";
pub const HOBBIES_EMPTY_MESSAGE: &str = "Hobbies can't be empty";

#[track_caller]
pub fn validate_person_create(person_create: &PersonCreate) -> CoreResult<()> {
    if person_create.name.is_empty() {
        return Err(CoreError::validation(NAME_EMPTY_MESSAGE));
    }

    if person_create.age < 0 {
        return Err(CoreError::validation(AGE_NEGATIVE_MESSAGE));
    }

    if person_create.hobbies.is_empty() {
        return Err(CoreError::validation(HOBBIES_EMPTY_MESSAGE));
    }

    Ok(())
}
