use mereb_core::PersonCreate;

use serde::Deserialize;

/// Body of `PUT /person/{id}`. Full replace: every field is written.
#[derive(Debug, Deserialize)]
pub struct UpdatePersonRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub age: Option<i64>,

    #[serde(default)]
    pub hobbies: Option<Vec<String>>,
}

impl From<UpdatePersonRequest> for PersonCreate {
    fn from(req: UpdatePersonRequest) -> Self {
        PersonCreate {
            name: req.name.unwrap_or_default(),
            age: req.age.unwrap_or_default(),
            hobbies: req.hobbies.unwrap_or_default(),
        }
    }
}
