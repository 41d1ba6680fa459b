use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub teacher: String,
    pub telegram_link: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub title: String,
    pub teacher: String,
    pub telegram_link: String,
    pub date: String,
    pub description: String,
}

impl NewCourse {
    pub fn with_id(self, id: String) -> Course {
        Course {
            id,
            title: self.title,
            teacher: self.teacher,
            telegram_link: self.telegram_link,
            date: self.date,
            description: self.description,
        }
    }
}
