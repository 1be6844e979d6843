/// One-way password hashing used when accounts are created.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> anyhow::Result<String>;
}

/// bcrypt with a configurable work factor.
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> anyhow::Result<String> {
        Ok(bcrypt::hash(password, self.cost)?)
    }
}
