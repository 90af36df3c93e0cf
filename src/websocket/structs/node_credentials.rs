#[derive(Clone, PartialEq, Eq)]
pub struct NodeCredentials {
    pub user: String,
    pub password: String,
}
