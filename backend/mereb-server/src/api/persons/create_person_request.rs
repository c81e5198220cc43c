use mereb_core::PersonCreate;

use serde::Deserialize;

/// Body of `POST /person`.
///
/// Missing or null fields decode to their zero value and are left for
/// validation to reject.
#[derive(Debug, Deserialize)]
pub struct CreatePersonRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub age: Option<i64>,

    #[serde(default)]
    pub hobbies: Option<Vec<String>>,
}

impl From<CreatePersonRequest> for PersonCreate {
    fn from(req: CreatePersonRequest) -> Self {
        PersonCreate {
            name: req.name.unwrap_or_default(),
            age: req.age.unwrap_or_default(),
            hobbies: req.hobbies.unwrap_or_default(),
        }
    }
}
