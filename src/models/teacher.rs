use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: String,
    pub name: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTeacher {
    pub name: String,
    pub bio: String,
}

impl NewTeacher {
    pub fn with_id(self, id: String) -> Teacher {
        Teacher {
            id,
            name: self.name,
            bio: self.bio,
        }
    }
}
