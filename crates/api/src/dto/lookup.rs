use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct LookupQuery {
    pub value: String,
}
