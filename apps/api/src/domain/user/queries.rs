#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetUserByIdQuery {
    pub user_id: String,
}

impl GetUserByIdQuery {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
