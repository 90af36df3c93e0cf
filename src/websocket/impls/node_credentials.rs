use crate::websocket::structs::node_credentials::NodeCredentials;

impl NodeCredentials {
    pub fn new(user: &str, password: &str) -> NodeCredentials {
        NodeCredentials {
            user: user.to_string(),
            password: password.to_string(),
        }
    }
}

impl std::fmt::Debug for NodeCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeCredentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}
