/// The single stored login. Absence of a credential means logged out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    pub token: String,
    pub username: Option<String>,
}
