use serde::{Deserialize, Serialize};

/// A user record as returned by the directory.
///
/// Field order matters: serde serializes in declaration order, and the
/// directory contract is `id`, `name`, `email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
}

/// The directory contents.
///
/// The listing is a fixed literal, rebuilt per request and never mutated.
/// IDs are assigned here, not generated.
pub fn directory_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        },
        User {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
        },
    ]
}
